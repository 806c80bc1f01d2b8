//! Coloring for the `-` and `+` markers printed by `lset diff`.
use clap::ValueEnum;
use once_cell::sync::Lazy;

/// When to color output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color if standard output is a terminal that supports it
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// The escape sequences wrapped around each marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheet {
    removed_start: &'static str,
    added_start: &'static str,
    end: &'static str,
}

impl StyleSheet {
    /// The marker for a line found only in the baseline file
    #[must_use]
    pub fn removed(&self) -> String {
        format!("{}-{}", self.removed_start, self.end)
    }
    /// The marker for a line found only in the candidate file
    #[must_use]
    pub fn added(&self) -> String {
        format!("{}+{}", self.added_start, self.end)
    }
}

const RED: &str = "\x1B[31m";
const GREEN: &str = "\x1B[32m";
const RESET: &str = "\x1B[m";
const ALWAYS: StyleSheet = StyleSheet { removed_start: RED, added_start: GREEN, end: RESET };
const NEVER: StyleSheet = StyleSheet { removed_start: "", added_start: "", end: "" };
// Output that isn't going to a terminal is never colored by `Auto`, even if
// FORCE_COLOR or the like would convince `supports_color` otherwise.
static AUTO: Lazy<StyleSheet> = Lazy::new(|| {
    use enable_ansi_support::enable_ansi_support;
    use is_terminal::IsTerminal;
    use supports_color::Stream;
    let use_color = std::io::stdout().is_terminal()
        && supports_color::on(Stream::Stdout).is_some()
        && enable_ansi_support().is_ok();
    if use_color {
        ALWAYS
    } else {
        NEVER
    }
});

/// Returns the style sheet for `cc`. For `ColorChoice::Auto` the terminal is
/// probed on first use only.
#[must_use]
pub fn colored(cc: ColorChoice) -> &'static StyleSheet {
    match cc {
        ColorChoice::Always => &ALWAYS,
        ColorChoice::Never => &NEVER,
        ColorChoice::Auto => Lazy::force(&AUTO),
    }
}
