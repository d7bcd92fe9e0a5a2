//! Standard output sink

use crate::core::{Result, Sink};
use std::fmt;
use std::io::{self, Write};

/// Writes lines to the process's standard output. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: fmt::Arguments<'_>) -> Result<()> {
        // One locked handle per line keeps concurrent lines whole.
        let mut out = io::stdout().lock();
        out.write_fmt(line)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
