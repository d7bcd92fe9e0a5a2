//! Build-time configuration.
//!
//! Everything here is fixed when the crate is compiled:
//!
//! - the compile-time threshold, chosen by the `ELOG_COMPILED_LEVEL`
//!   environment variable or one of the `max-level-*` features (default `Info`);
//! - the `runtime-level`, `file-line` and `color` feature flags;
//! - the palette (labels, color escapes, reset and the file/line bracket),
//!   overridable through `ELOG_LABEL_*`, `ELOG_COLOR_*`, `ELOG_COLOR_RESET` and
//!   `ELOG_FILE_LINE_FMT`.

use super::level::Level;

/// Most verbose level whose call sites survive compilation.
pub const COMPILED_LEVEL: Level = if cfg!(elog_trace) {
    Level::Trace
} else if cfg!(elog_debug) {
    Level::Debug
} else if cfg!(elog_info) {
    Level::Info
} else if cfg!(elog_warn) {
    Level::Warn
} else if cfg!(elog_error) {
    Level::Error
} else if cfg!(elog_critical) {
    Level::Critical
} else {
    Level::Off
};

/// Retained call sites consult [`RUNTIME_LEVEL`](crate::RUNTIME_LEVEL).
pub const USE_RUNTIME_LEVEL: bool = cfg!(feature = "runtime-level");

/// Lines carry the call site's file basename and line number.
pub const USE_FILE_LINE: bool = cfg!(feature = "file-line");

/// Labels are wrapped in ANSI color escapes.
pub const USE_COLOR: bool = cfg!(feature = "color");

include!(concat!(env!("OUT_DIR"), "/palette.rs"));

/// Returns `true` if call sites at `level` are compiled in.
#[inline]
pub const fn compiled_admits(level: Level) -> bool {
    COMPILED_LEVEL.admits(level)
}

/// Strips the directory part of `path`, accepting both `/` and `\`.
///
/// `const` so the macros can shorten `file!()` at compile time.
pub const fn basename(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut i = bytes.len();
    while i > 0 {
        if bytes[i - 1] == b'/' || bytes[i - 1] == b'\\' {
            let (_, tail) = bytes.split_at(i);
            return match std::str::from_utf8(tail) {
                Ok(name) => name,
                Err(_) => path,
            };
        }
        i -= 1;
    }
    path
}

/// Legacy combined-label form: `level_label!(INFO)` is [`LABEL_INFO`].
#[macro_export]
macro_rules! level_label {
    (CRITICAL) => {
        $crate::core::config::LABEL_CRITICAL
    };
    (ERROR) => {
        $crate::core::config::LABEL_ERROR
    };
    (WARN) => {
        $crate::core::config::LABEL_WARN
    };
    (INFO) => {
        $crate::core::config::LABEL_INFO
    };
    (DEBUG) => {
        $crate::core::config::LABEL_DEBUG
    };
    (TRACE) => {
        $crate::core::config::LABEL_TRACE
    };
}
