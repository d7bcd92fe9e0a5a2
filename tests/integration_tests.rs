//! Integration tests for elog
//!
//! These tests verify:
//! - The exact line layout for every severity
//! - Compile-time elimination of call sites above the threshold
//! - Run-time threshold filtering
//! - Sink installation

use elog::core::config::COLOR_RESET;
use elog::sinks::MemorySink;
use elog::{Level, COMPILED_LEVEL, USE_COLOR, USE_FILE_LINE};
use parking_lot::Mutex;
use std::cell::Cell;
use std::sync::Once;

static CAPTURE: MemorySink = MemorySink::new();
static SERIAL: Mutex<()> = parking_lot::const_mutex(());
static INSTALL: Once = Once::new();

/// Installs the capturing sink and returns it empty.
fn capture() -> &'static MemorySink {
    INSTALL.call_once(|| {
        elog::set_sink(&CAPTURE).expect("capture sink installed first");
    });
    CAPTURE.clear();
    &CAPTURE
}

/// Expected line for a call site in this file, built from the configuration.
fn expected_line(level: Level, line: u32, message: &str) -> String {
    let (color, reset) = if USE_COLOR {
        (level.color(), COLOR_RESET)
    } else {
        ("", "")
    };
    let location = if USE_FILE_LINE {
        format!("[integration_tests.rs: {}]", line)
    } else {
        String::new()
    };
    format!("{}{} {} {}{}\n", color, level.label(), location, message, reset)
}

#[cfg(feature = "runtime-level")]
fn reset_runtime_level() {
    elog::set_runtime_level(COMPILED_LEVEL);
}

#[cfg(not(feature = "runtime-level"))]
fn reset_runtime_level() {}

#[test]
fn test_info_line_layout() {
    let _serial = SERIAL.lock();
    let sink = capture();
    reset_runtime_level();

    elog::info!("hello {}", 7);
    let line = line!() - 1;

    if COMPILED_LEVEL >= Level::Info {
        assert_eq!(sink.take(), expected_line(Level::Info, line, "hello 7"));
    } else {
        assert!(sink.is_empty());
    }
}

#[test]
#[cfg(all(feature = "color", feature = "file-line"))]
fn test_info_line_default_bytes() {
    let _serial = SERIAL.lock();
    let sink = capture();
    reset_runtime_level();

    elog::info!("hello {}", 7);
    let line = line!() - 1;

    if COMPILED_LEVEL >= Level::Info && elog::level_label!(INFO) == "[INFO]" {
        assert_eq!(
            sink.take(),
            format!("\x1b[1;32m[INFO] [integration_tests.rs: {}] hello 7\x1b[0m\n", line)
        );
    }
}

#[test]
fn test_every_severity_uses_its_palette() {
    let _serial = SERIAL.lock();
    let sink = capture();
    #[cfg(feature = "runtime-level")]
    let _all = elog::RUNTIME_LEVEL.scoped(Level::Trace);

    let mut expected = String::new();

    elog::critical!("c{}", 1);
    let line = line!() - 1;
    if COMPILED_LEVEL >= Level::Critical {
        expected.push_str(&expected_line(Level::Critical, line, "c1"));
    }
    elog::error!("e{}", 2);
    let line = line!() - 1;
    if COMPILED_LEVEL >= Level::Error {
        expected.push_str(&expected_line(Level::Error, line, "e2"));
    }
    elog::warn!("w{}", 3);
    let line = line!() - 1;
    if COMPILED_LEVEL >= Level::Warn {
        expected.push_str(&expected_line(Level::Warn, line, "w3"));
    }
    elog::info!("i{}", 4);
    let line = line!() - 1;
    if COMPILED_LEVEL >= Level::Info {
        expected.push_str(&expected_line(Level::Info, line, "i4"));
    }
    elog::debug!("d{}", 5);
    let line = line!() - 1;
    if COMPILED_LEVEL >= Level::Debug {
        expected.push_str(&expected_line(Level::Debug, line, "d5"));
    }
    elog::trace!("t{}", 6);
    let line = line!() - 1;
    if COMPILED_LEVEL >= Level::Trace {
        expected.push_str(&expected_line(Level::Trace, line, "t6"));
    }

    assert_eq!(sink.take(), expected);
}

#[test]
fn test_compiled_out_site_does_not_evaluate_arguments() {
    let _serial = SERIAL.lock();
    let sink = capture();
    reset_runtime_level();

    let evaluated = Cell::new(false);
    elog::debug!("x={}", {
        evaluated.set(true);
        1
    });

    if COMPILED_LEVEL < Level::Debug {
        assert!(!evaluated.get());
        assert!(sink.is_empty());
    } else {
        assert!(evaluated.get());
        assert_eq!(sink.lines().len(), 1);
    }
}

#[test]
fn test_empty_format_string() {
    let _serial = SERIAL.lock();
    let sink = capture();
    reset_runtime_level();

    elog::error!("");
    let line = line!() - 1;
    elog::error!();
    let bare = line!() - 1;

    if COMPILED_LEVEL >= Level::Error {
        let expected = format!(
            "{}{}",
            expected_line(Level::Error, line, ""),
            expected_line(Level::Error, bare, "")
        );
        assert_eq!(sink.take(), expected);
    } else {
        assert!(sink.is_empty());
    }
}

#[test]
fn test_lines_end_with_reset_and_newline() {
    let _serial = SERIAL.lock();
    let sink = capture();
    reset_runtime_level();

    elog::critical!("one");
    elog::error!("two");
    elog::warn!("three\nsplit");

    let output = sink.take();
    let terminator = if USE_COLOR {
        format!("{}\n", COLOR_RESET)
    } else {
        "\n".to_string()
    };
    for chunk in output.split_inclusive(terminator.as_str()) {
        assert!(chunk.ends_with(&terminator));
        assert!(!chunk.ends_with(&format!("\n{}", terminator)));
    }
}

#[cfg(feature = "runtime-level")]
mod runtime_level {
    use super::*;

    #[test]
    fn test_runtime_threshold_filters() {
        let _serial = SERIAL.lock();
        let sink = capture();
        let _guard = elog::RUNTIME_LEVEL.scoped(Level::Error);

        elog::warn!("w");
        assert!(sink.is_empty());

        elog::critical!("c");
        if COMPILED_LEVEL >= Level::Critical {
            assert_eq!(sink.lines().len(), 1);
            assert!(sink.contents().contains(" c"));
        } else {
            assert!(sink.is_empty());
        }
    }

    #[test]
    fn test_off_suppresses_everything() {
        let _serial = SERIAL.lock();
        let sink = capture();
        let _guard = elog::RUNTIME_LEVEL.scoped(Level::Off);

        elog::critical!("c");
        elog::error!("e");
        elog::warn!("w");
        elog::info!("i");
        elog::debug!("d");
        elog::trace!("t");

        assert!(sink.is_empty());
        assert!(!elog::enabled(Level::Critical));
    }

    #[test]
    fn test_trace_admits_every_compiled_site() {
        let _serial = SERIAL.lock();
        let sink = capture();
        let _guard = elog::RUNTIME_LEVEL.scoped(Level::Trace);

        elog::critical!("c");
        elog::error!("e");
        elog::warn!("w");
        elog::info!("i");
        elog::debug!("d");
        elog::trace!("t");

        let compiled = Level::SEVERITIES
            .iter()
            .filter(|level| COMPILED_LEVEL.admits(**level))
            .count();
        assert_eq!(sink.lines().len(), compiled);
    }

    #[test]
    fn test_denied_site_writes_no_bytes() {
        let _serial = SERIAL.lock();
        let sink = capture();
        let _guard = elog::RUNTIME_LEVEL.scoped(Level::Critical);

        for i in 0..10 {
            elog::error!("suppressed {}", i);
            elog::info!("suppressed {}", i);
        }

        assert!(sink.is_empty());
    }
}

#[test]
fn test_second_sink_is_rejected() {
    static OTHER: MemorySink = MemorySink::new();

    let _serial = SERIAL.lock();
    let _ = capture();

    let err = elog::set_sink(&OTHER).unwrap_err();
    assert!(matches!(err, elog::ElogError::SinkAlreadySet { .. }));
    assert!(err.to_string().contains("memory"));
    assert_eq!(elog::sink().name(), "memory");
}

#[test]
fn test_emit_bypasses_gates() {
    let _serial = SERIAL.lock();
    let sink = capture();
    #[cfg(feature = "runtime-level")]
    let _guard = elog::RUNTIME_LEVEL.scoped(Level::Off);

    elog::emit(
        Level::Trace,
        &elog::Location::new("manual.rs", 1),
        format_args!("direct {}", 1),
    );

    assert_eq!(sink.lines().len(), 1);
    assert!(sink.contents().contains("direct 1"));
}

#[test]
fn test_emit_ignores_off() {
    let _serial = SERIAL.lock();
    let sink = capture();

    elog::emit(
        Level::Off,
        &elog::Location::new("manual.rs", 1),
        format_args!("never {}", 1),
    );

    assert!(sink.is_empty());
}
