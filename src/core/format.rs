//! Line rendering
//!
//! Every severity shares one layout:
//!
//! ```text
//! <color-prefix><label> [<file>: <line>] <message><color-reset>\n
//! ```
//!
//! The color escapes are empty without the `color` feature and the bracketed
//! locator is left out without `file-line` (the two surrounding spaces stay).

use super::config::{self, FILE_LINE_PARTS, USE_COLOR, USE_FILE_LINE};
use super::level::Level;
use std::fmt;

/// Source location of a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> Location<'a> {
    /// Placeholder used when the file/line locator is compiled out.
    pub const UNKNOWN: Location<'static> = Location { file: "?", line: 0 };

    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Builds a location from a full path, keeping only the basename.
    pub const fn from_path(path: &'a str, line: u32) -> Self {
        Self::new(config::basename(path), line)
    }

    pub const fn file(&self) -> &'a str {
        self.file
    }

    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// Renders the bracket through `FILE_LINE_FMT`, `[main.rs: 42]` by default.
impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [prefix, infix, suffix] = FILE_LINE_PARTS;
        write!(f, "{}{}{}{}{}", prefix, self.file, infix, self.line, suffix)
    }
}

/// One fully decorated output line, newline included.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    level: Level,
    location: &'a Location<'a>,
    message: fmt::Arguments<'a>,
}

impl<'a> Line<'a> {
    pub fn new(level: Level, location: &'a Location<'a>, message: fmt::Arguments<'a>) -> Self {
        Self {
            level,
            location,
            message,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn location(&self) -> &Location<'a> {
        self.location
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (color, reset) = if USE_COLOR {
            (self.level.color(), config::COLOR_RESET)
        } else {
            ("", "")
        };
        let label = self.level.label();

        if USE_FILE_LINE {
            writeln!(
                f,
                "{}{} {} {}{}",
                color, label, self.location, self.message, reset
            )
        } else {
            writeln!(f, "{}{}  {}{}", color, label, self.message, reset)
        }
    }
}
