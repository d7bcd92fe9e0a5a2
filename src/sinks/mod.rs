//! Sink implementations

pub mod memory;
pub mod stdout;

pub use memory::MemorySink;
pub use stdout::StdoutSink;

pub use crate::core::Sink;
