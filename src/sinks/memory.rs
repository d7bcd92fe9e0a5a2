//! In-memory sink

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::fmt::{self, Write};

/// Collects lines in a `String`.
///
/// Const-constructible, so it can live in a `static` and be passed to
/// [`set_sink`](crate::set_sink).
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Mutex<String>,
}

impl MemorySink {
    pub const fn new() -> Self {
        Self {
            buffer: parking_lot::const_mutex(String::new()),
        }
    }

    /// Copy of everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Returns everything written so far and empties the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: fmt::Arguments<'_>) -> Result<()> {
        self.buffer.lock().write_fmt(line)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_lines() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_line(format_args!("first {}\n", 1)).unwrap();
        sink.write_line(format_args!("second\n")).unwrap();

        assert_eq!(sink.contents(), "first 1\nsecond\n");
        assert_eq!(sink.lines(), vec!["first 1", "second"]);
    }

    #[test]
    fn test_take_and_clear() {
        let sink = MemorySink::new();
        sink.write_line(format_args!("x\n")).unwrap();

        assert_eq!(sink.take(), "x\n");
        assert!(sink.is_empty());

        sink.write_line(format_args!("y\n")).unwrap();
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_usable_as_static() {
        static SINK: MemorySink = MemorySink::new();
        SINK.write_line(format_args!("static\n")).unwrap();
        assert_eq!(SINK.take(), "static\n");
    }
}
