//! Run-time threshold
//!
//! A single process-wide byte consulted by every retained call site. Loads
//! and stores are `Relaxed`: any value a reader observes was a valid setting
//! at some point, and the admission check is monotonic in the threshold.

use super::config::COMPILED_LEVEL;
use super::level::Level;
use std::sync::atomic::{AtomicU8, Ordering};

/// Mutable maximum severity admitted for emission.
#[derive(Debug)]
pub struct RuntimeLevel(AtomicU8);

/// The threshold read by the logging macros. Starts at
/// [`COMPILED_LEVEL`].
pub static RUNTIME_LEVEL: RuntimeLevel = RuntimeLevel::new(COMPILED_LEVEL);

impl RuntimeLevel {
    pub const fn new(level: Level) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    #[inline]
    pub fn get(&self) -> Level {
        // Only `set`/`replace` store, and they store valid levels.
        Level::from_u8(self.0.load(Ordering::Relaxed)).unwrap_or(Level::Trace)
    }

    #[inline]
    pub fn set(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }

    /// Sets `level` and returns the previous threshold.
    pub fn replace(&self, level: Level) -> Level {
        Level::from_u8(self.0.swap(level as u8, Ordering::Relaxed)).unwrap_or(Level::Trace)
    }

    /// Returns `true` if a message at `level` passes this threshold.
    #[inline]
    pub fn admits(&self, level: Level) -> bool {
        level != Level::Off && (level as u8) <= self.0.load(Ordering::Relaxed)
    }

    /// Sets `level` until the returned guard is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use elog::{Level, RuntimeLevel};
    ///
    /// let threshold = RuntimeLevel::new(Level::Info);
    /// {
    ///     let _quiet = threshold.scoped(Level::Error);
    ///     assert_eq!(threshold.get(), Level::Error);
    /// }
    /// assert_eq!(threshold.get(), Level::Info);
    /// ```
    #[must_use = "the previous level is restored when the guard is dropped"]
    pub fn scoped(&self, level: Level) -> LevelGuard<'_> {
        LevelGuard {
            previous: self.replace(level),
            target: self,
        }
    }
}

/// Restores a [`RuntimeLevel`] on drop.
#[derive(Debug)]
pub struct LevelGuard<'a> {
    target: &'a RuntimeLevel,
    previous: Level,
}

impl LevelGuard<'_> {
    pub fn previous(&self) -> Level {
        self.previous
    }
}

impl Drop for LevelGuard<'_> {
    fn drop(&mut self) {
        self.target.set(self.previous);
    }
}

/// Current value of [`RUNTIME_LEVEL`].
pub fn runtime_level() -> Level {
    RUNTIME_LEVEL.get()
}

/// Stores `level` into [`RUNTIME_LEVEL`].
pub fn set_runtime_level(level: Level) {
    RUNTIME_LEVEL.set(level);
}
