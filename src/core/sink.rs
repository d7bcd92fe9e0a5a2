//! Sink trait for the output stream

use super::error::{ElogError, Result};
use crate::sinks::StdoutSink;
use std::fmt;
use std::sync::OnceLock;

/// The formatted-output primitive lines are written to.
///
/// `write_line` receives one complete line, newline included, and should
/// write it in a single operation so lines from different threads do not
/// interleave mid-line.
pub trait Sink: Send + Sync {
    fn write_line(&self, line: fmt::Arguments<'_>) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

static SINK: OnceLock<&'static dyn Sink> = OnceLock::new();

static STDOUT: StdoutSink = StdoutSink;

/// Installs the process-wide sink. Only the first call succeeds.
///
/// # Example
///
/// ```
/// use elog::sinks::MemorySink;
///
/// static CAPTURE: MemorySink = MemorySink::new();
///
/// elog::set_sink(&CAPTURE).unwrap();
/// assert!(elog::set_sink(&CAPTURE).is_err());
/// ```
pub fn set_sink(sink: &'static dyn Sink) -> Result<()> {
    let mut installed = true;
    let current = SINK.get_or_init(|| {
        installed = false;
        sink
    });
    if installed {
        return Err(ElogError::sink_already_set(current.name()));
    }
    Ok(())
}

/// The installed sink, or standard output if none was installed.
#[inline]
pub fn sink() -> &'static dyn Sink {
    match SINK.get() {
        Some(sink) => *sink,
        None => &STDOUT,
    }
}
