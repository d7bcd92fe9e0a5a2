//! Logging macros, one per severity.
//!
//! Each macro takes a `format!`-style format string and arguments. A macro
//! whose severity is above the compile-time threshold is defined as
//! `($($arg:tt)*) => { () }`: its arguments are never parsed as expressions,
//! never evaluated, and need not even name existing items.
//!
//! # Examples
//!
//! ```
//! let port = 8080;
//! elog::info!("listening on port {}", port);
//! elog::error!("bad checksum {:#06x}", 0xbeefu16);
//! elog::warn!();
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __elog_emit {
    ($level:ident, $($arg:tt)+) => {{
        const __ELOG_CALL_SITE: $crate::Location<'static> =
            $crate::__private::call_site(file!(), line!());
        if $crate::__private::runtime_admits($crate::Level::$level) {
            $crate::__private::emit(
                $crate::Level::$level,
                &__ELOG_CALL_SITE,
                format_args!($($arg)+),
            );
        }
    }};
}

/// Log a critical-level message.
///
/// ```
/// elog::critical!("watchdog expired after {} ms", 500);
/// ```
#[cfg(elog_critical)]
#[macro_export]
macro_rules! critical {
    () => {
        $crate::__elog_emit!(Critical, "")
    };
    ($($arg:tt)+) => {
        $crate::__elog_emit!(Critical, $($arg)+)
    };
}

/// Log a critical-level message (compiled out).
#[cfg(not(elog_critical))]
#[macro_export]
macro_rules! critical {
    ($($arg:tt)*) => {
        ()
    };
}

/// Log an error-level message.
///
/// ```
/// elog::error!("i2c read failed: addr={:#04x}", 0x50);
/// ```
#[cfg(elog_error)]
#[macro_export]
macro_rules! error {
    () => {
        $crate::__elog_emit!(Error, "")
    };
    ($($arg:tt)+) => {
        $crate::__elog_emit!(Error, $($arg)+)
    };
}

/// Log an error-level message (compiled out).
#[cfg(not(elog_error))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        ()
    };
}

/// Log a warning-level message.
///
/// ```
/// elog::warn!("retry {} of {}", 1, 3);
/// ```
#[cfg(elog_warn)]
#[macro_export]
macro_rules! warn {
    () => {
        $crate::__elog_emit!(Warn, "")
    };
    ($($arg:tt)+) => {
        $crate::__elog_emit!(Warn, $($arg)+)
    };
}

/// Log a warning-level message (compiled out).
#[cfg(not(elog_warn))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ()
    };
}

/// Log an info-level message.
///
/// ```
/// elog::info!("boot complete");
/// ```
#[cfg(elog_info)]
#[macro_export]
macro_rules! info {
    () => {
        $crate::__elog_emit!(Info, "")
    };
    ($($arg:tt)+) => {
        $crate::__elog_emit!(Info, $($arg)+)
    };
}

/// Log an info-level message (compiled out).
#[cfg(not(elog_info))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ()
    };
}

/// Log a debug-level message.
///
/// ```
/// elog::debug!("register dump: {:?}", [0u8, 1, 2]);
/// ```
#[cfg(elog_debug)]
#[macro_export]
macro_rules! debug {
    () => {
        $crate::__elog_emit!(Debug, "")
    };
    ($($arg:tt)+) => {
        $crate::__elog_emit!(Debug, $($arg)+)
    };
}

/// Log a debug-level message (compiled out).
#[cfg(not(elog_debug))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        ()
    };
}

/// Log a trace-level message.
///
/// ```
/// elog::trace!("enter isr {}", 3);
/// ```
#[cfg(elog_trace)]
#[macro_export]
macro_rules! trace {
    () => {
        $crate::__elog_emit!(Trace, "")
    };
    ($($arg:tt)+) => {
        $crate::__elog_emit!(Trace, $($arg)+)
    };
}

/// Log a trace-level message (compiled out).
#[cfg(not(elog_trace))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        ()
    };
}
