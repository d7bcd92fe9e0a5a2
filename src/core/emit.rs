//! Emission path shared by the logging macros

use super::config;
use super::format::{Line, Location};
use super::level::Level;
use super::sink::sink;

/// Run-time gate. Always open without the `runtime-level` feature.
#[inline(always)]
pub fn runtime_admits(level: Level) -> bool {
    #[cfg(feature = "runtime-level")]
    {
        super::runtime::RUNTIME_LEVEL.admits(level)
    }
    #[cfg(not(feature = "runtime-level"))]
    {
        level != Level::Off
    }
}

/// Returns `true` if a message at `level` would be written right now.
pub fn enabled(level: Level) -> bool {
    config::compiled_admits(level) && runtime_admits(level)
}

/// Location captured by a macro call site: the basename and line, or
/// [`Location::UNKNOWN`] when the `file-line` feature is off.
#[doc(hidden)]
pub const fn call_site(path: &'static str, line: u32) -> Location<'static> {
    if config::USE_FILE_LINE {
        Location::from_path(path, line)
    } else {
        Location::UNKNOWN
    }
}

/// Renders one line and writes it to the sink. Sink errors are discarded.
///
/// `Off` is a threshold, not a message severity; nothing is written for it.
pub fn emit(level: Level, location: &Location<'_>, message: std::fmt::Arguments<'_>) {
    if level == Level::Off {
        return;
    }
    let line = Line::new(level, location, message);
    let _ = sink().write_line(format_args!("{line}"));
}
