//! Input structs and functions: turning a file into a `LineSet`.
use anyhow::{Context, Result};
use bstr::io::BufReadExt;
use log::debug;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::set::LineSet;

/// Reads the file at `path` and returns the set of its lines. Every path
/// names a file, so `-` is a file called `-`, not standard input.
pub fn load_set(path: &Path) -> Result<LineSet> {
    let file = File::open(path).with_context(|| format!("Can't open file: {}", path.display()))?;
    set_from_reader(file, &path.display().to_string())
}

/// Reads `reader` to the end and returns the set of its lines. The `name`
/// is used in error messages.
///
/// * A line is everything up to a `\n`, with a preceding `\r` removed
/// * A last line with no terminator still counts
/// * No other bytes are touched: a Byte Order Mark stays part of the first line
pub fn set_from_reader(reader: impl Read, name: &str) -> Result<LineSet> {
    let mut reader = BufReader::with_capacity(32 * 1024, reader);
    let mut set = LineSet::default();
    let mut line_count = 0_usize;
    reader
        .for_byte_line(|line| {
            set.add([line]);
            line_count += 1;
            Ok(true)
        })
        .with_context(|| format!("Error reading file: {name}"))?;
    debug!("{name}: {line_count} lines, {} distinct", set.len());
    Ok(set)
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use assert_fs::{prelude::*, TempDir};

    fn lines_of(input: &[u8]) -> Vec<Vec<u8>> {
        let set = set_from_reader(input, "test input").unwrap();
        set.to_sorted_vec().into_iter().map(<[u8]>::to_vec).collect()
    }

    #[test]
    fn trailing_partial_line_is_kept() {
        assert_eq!(lines_of(b"b\na\nc"), [b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
        assert_eq!(lines_of(b"b\na\nc\n"), [b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn empty_input_is_the_empty_set() {
        assert!(lines_of(b"").is_empty());
    }

    #[test]
    fn blank_lines_are_lines() {
        assert_eq!(lines_of(b"a\n\nb\n"), [b"".to_vec(), b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn crlf_is_a_line_terminator() {
        assert_eq!(lines_of(b"a\r\nb\r\n"), lines_of(b"a\nb\n"));
    }

    #[test]
    fn trailing_blanks_are_kept() {
        assert_eq!(lines_of(b"a \na\n"), [b"a".to_vec(), b"a ".to_vec()]);
    }

    #[test]
    fn byte_order_mark_is_part_of_the_first_line() {
        assert_eq!(lines_of(b"\xEF\xBB\xBFa\na\n"), [b"a".to_vec(), b"\xEF\xBB\xBFa".to_vec()]);
        assert_eq!(lines_of(b"\xff\xfea\x00\n"), [b"\xff\xfea\x00".to_vec()]);
    }

    #[test]
    fn load_set_reads_a_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.child("lines.txt");
        file.write_str("x\ny\nx\n").unwrap();
        let set = load_set(file.path()).unwrap();
        assert_eq!(set, LineSet::new(["x", "y"]));
    }

    #[test]
    fn dash_is_an_ordinary_file_name() {
        let temp = TempDir::new().unwrap();
        let file = temp.child("-");
        file.write_str("x\n").unwrap();
        let set = load_set(file.path()).unwrap();
        assert_eq!(set, LineSet::new(["x"]));
    }

    #[test]
    fn missing_file_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-file.txt");
        let err = load_set(&path).unwrap_err();
        let message = format!("{err}");
        assert!(message.starts_with("Can't open file: "), "{message}");
        assert!(message.contains("no-such-file.txt"), "{message}");
    }

    #[test]
    fn directory_is_not_a_readable_file() {
        let temp = TempDir::new().unwrap();
        let err = load_set(temp.path()).unwrap_err();
        let message = format!("{err}");
        assert!(
            message.starts_with("Error reading file: ") || message.starts_with("Can't open file: "),
            "{message}"
        );
    }
}
