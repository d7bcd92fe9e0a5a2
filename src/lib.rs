//! # elog
//!
//! A leveled logger for embedded and resource-constrained programs.
//!
//! ## Features
//!
//! - **Compile-time elimination**: call sites above the compiled threshold
//!   expand to `()`; their arguments are never evaluated or even type-checked
//! - **Run-time threshold**: one process-wide byte filters retained call sites
//! - **Uniform lines**: `<color><label> [<file>: <line>] <message><reset>`
//! - **No allocation** on the emission path of the default stdout sink
//!
//! ```
//! elog::info!("sensor {} ready", 3);
//! elog::debug!("compiled out with the default threshold: {}", expensive());
//! # fn expensive() -> u32 { 0 }
//! ```
//!
//! ## Configuration
//!
//! | Cargo feature         | Effect                                        | Default |
//! | --------------------- | --------------------------------------------- | ------- |
//! | `runtime-level`       | call sites consult [`RUNTIME_LEVEL`]          | on      |
//! | `file-line`           | lines carry `[<basename>: <line>]`            | on      |
//! | `color`               | labels are wrapped in ANSI color escapes      | on      |
//! | `max-level-<level>`   | compile-time threshold (most restrictive wins) | `info` |
//! | `log`                 | bridge from the `log` facade                  | off     |
//! | `serde`               | `Serialize`/`Deserialize` for [`Level`]       | off     |
//!
//! Environment variables read when the crate is built: `ELOG_COMPILED_LEVEL`
//! (overrides the `max-level-*` features), `ELOG_LABEL_<LEVEL>`,
//! `ELOG_COLOR_<LEVEL>`, `ELOG_COLOR_RESET` and `ELOG_FILE_LINE_FMT`.

pub mod core;
pub mod macros;
pub mod sinks;

#[cfg(feature = "log")]
pub mod bridge;

// Build-script configuration resolution, compiled here for its unit tests.
#[cfg(test)]
#[path = "../build/config.rs"]
mod build_config;

pub mod prelude {
    pub use crate::core::{
        enabled, set_sink, ElogError, Level, Location, Result, Sink, COMPILED_LEVEL,
    };
    #[cfg(feature = "runtime-level")]
    pub use crate::core::{runtime_level, set_runtime_level, RUNTIME_LEVEL};
    pub use crate::sinks::{MemorySink, StdoutSink};
    pub use crate::{critical, debug, error, info, trace, warn};
}

pub use crate::core::{
    basename, compiled_admits, emit, enabled, set_sink, sink, ElogError, Level, Line, Location,
    Result, Sink, COMPILED_LEVEL, USE_COLOR, USE_FILE_LINE, USE_RUNTIME_LEVEL,
};
#[cfg(feature = "runtime-level")]
pub use crate::core::{runtime_level, set_runtime_level, LevelGuard, RuntimeLevel, RUNTIME_LEVEL};
pub use sinks::{MemorySink, StdoutSink};

#[cfg(feature = "log")]
pub use bridge::{init_log_bridge, LogBridge};

#[doc(hidden)]
pub mod __private {
    pub use crate::core::emit::{call_site, emit, runtime_admits};
}
