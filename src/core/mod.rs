//! Core logger types and traits

pub mod config;
pub mod emit;
pub mod error;
pub mod format;
pub mod level;
#[cfg(feature = "runtime-level")]
pub mod runtime;
pub mod sink;

pub use config::{
    basename, compiled_admits, COMPILED_LEVEL, USE_COLOR, USE_FILE_LINE, USE_RUNTIME_LEVEL,
};
pub use emit::{emit, enabled};
pub use error::{ElogError, Result};
pub use format::{Line, Location};
pub use level::Level;
#[cfg(feature = "runtime-level")]
pub use runtime::{runtime_level, set_runtime_level, LevelGuard, RuntimeLevel, RUNTIME_LEVEL};
pub use sink::{set_sink, sink, Sink};
