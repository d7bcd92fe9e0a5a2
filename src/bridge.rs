//! Bridge from the `log` facade.
//!
//! Records produced through `log::info!` and friends pass the same gates and
//! are rendered in the same line format as the native macros. The `log`
//! crate's own compile-time filters (its `max_level_*` features) still apply
//! on its side; here the compile-time threshold is checked at run time.

use crate::core::{
    compiled_admits, emit, enabled, sink, Level, Location, Result, COMPILED_LEVEL,
};

/// `log::Log` implementation writing through elog.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl LogBridge {
    pub const fn level_from_log(level: log::Level) -> Level {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }

    /// The `log` filter equivalent to a threshold. `Critical` has no `log`
    /// counterpart and maps to `Error`.
    pub const fn filter_for(level: Level) -> log::LevelFilter {
        match level {
            Level::Off => log::LevelFilter::Off,
            Level::Critical | Level::Error => log::LevelFilter::Error,
            Level::Warn => log::LevelFilter::Warn,
            Level::Info => log::LevelFilter::Info,
            Level::Debug => log::LevelFilter::Debug,
            Level::Trace => log::LevelFilter::Trace,
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        enabled(Self::level_from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = Self::level_from_log(record.level());
        if !enabled(level) {
            return;
        }
        let location = match record.file() {
            Some(path) => Location::from_path(path, record.line().unwrap_or(0)),
            None => Location::new("?", record.line().unwrap_or(0)),
        };
        emit(level, &location, *record.args());
    }

    fn flush(&self) {
        let _ = sink().flush();
    }
}

/// Installs [`LogBridge`] as the `log` logger and caps `log::max_level` at
/// the compile-time threshold.
pub fn init_log_bridge() -> Result<()> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(LogBridge::filter_for(COMPILED_LEVEL));
    Ok(())
}

/// Whether records at `level` can ever pass the bridge in this build.
pub fn bridge_compiled(level: log::Level) -> bool {
    compiled_admits(LogBridge::level_from_log(level))
}
