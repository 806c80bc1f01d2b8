//! Houses the `exec` and `calculate` functions
//!
use anyhow::Result;
use log::debug;
use std::io;

use crate::args::{Args, OpName};
use crate::io::load_set;
use crate::set::LineSet;
use crate::styles::{colored, StyleSheet};

/// Loads the two files named in `args`, first then second, and writes the
/// result of `args.op` to `out`. Nothing is written unless both files load.
pub fn exec(args: &Args, out: impl io::Write) -> Result<()> {
    let first = load_set(&args.first)?;
    let second = load_set(&args.second)?;
    calculate(args.op, &first, &second, colored(args.color), out)
}

/// Calculates and prints the set operation named by `operation`:
///
/// * `OpName::Diff` prints the lines only in `first`, each prefixed by `-`,
///   then the lines only in `second`, each prefixed by `+`,
/// * `OpName::Minus` prints the lines in `first` but not `second`, and
/// * `OpName::Cross` prints the lines in both.
///
/// Each group of lines is sorted.
pub fn calculate(
    operation: OpName,
    first: &LineSet,
    second: &LineSet,
    style: &StyleSheet,
    mut out: impl io::Write,
) -> Result<()> {
    debug!("{operation:?}: {} and {} distinct lines", first.len(), second.len());
    match operation {
        OpName::Diff => {
            let diff = first.diff(second);
            debug!("{} removed, {} added", diff.removed.len(), diff.added.len());
            output_to(&diff.removed, style.removed().as_bytes(), &mut out)?;
            output_to(&diff.added, style.added().as_bytes(), &mut out)?;
        }
        OpName::Minus => output_to(&first.minus(second), b"", &mut out)?,
        OpName::Cross => output_to(&first.intersect(second), b"", &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Writes each line of `set` in sorted order, preceded by `prefix` and
/// followed by a newline.
fn output_to(set: &LineSet, prefix: &[u8], out: &mut impl io::Write) -> Result<()> {
    for line in set.to_sorted_vec() {
        out.write_all(prefix)?;
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
