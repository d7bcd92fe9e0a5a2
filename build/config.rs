//! Build-time configuration resolution, shared by `build.rs` and the unit
//! tests of the library.
//!
//! Every function takes a `lookup` for environment variables so the
//! resolution can be exercised without touching the process environment.
//! `lookup` returns `None` for an unset variable; a set but empty value is an
//! override like any other.

#![allow(dead_code)]

use std::fmt::Write as _;

pub const LEVELS: [&str; 7] = ["off", "critical", "error", "warn", "info", "debug", "trace"];

pub const DEFAULT_LEVEL: usize = 4;

pub const SEVERITIES: [&str; 6] = ["CRITICAL", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"];

pub const DEFAULT_COLORS: [&str; 6] = [
    "\x1b[1;35m", // bright magenta
    "\x1b[1;31m", // bright red
    "\x1b[1;33m", // bright yellow
    "\x1b[1;32m", // bright green
    "\x1b[1;36m", // bright cyan
    "\x1b[0;37m", // white
];

pub const DEFAULT_RESET: &str = "\x1b[0m";

pub const DEFAULT_FILE_LINE_FMT: &str = "[%s: %d]";

/// Index into [`LEVELS`] of the compile-time threshold.
///
/// `ELOG_COMPILED_LEVEL` wins when set and non-empty; otherwise the most
/// restrictive `max-level-*` feature; otherwise `info`.
pub fn compiled_level(
    lookup: impl Fn(&str) -> Option<String>,
    feature_enabled: impl Fn(&str) -> bool,
) -> Result<usize, String> {
    if let Some(value) = lookup("ELOG_COMPILED_LEVEL").filter(|v| !v.trim().is_empty()) {
        return parse_level(&value).ok_or_else(|| {
            format!("ELOG_COMPILED_LEVEL: invalid level '{value}' (expected one of {LEVELS:?} or 0..=6)")
        });
    }

    Ok(LEVELS
        .iter()
        .position(|name| feature_enabled(&format!("max-level-{name}")))
        .unwrap_or(DEFAULT_LEVEL))
}

/// Accepts a level name, its `ELOG_LEVEL_` spelling, or `0..=6`.
pub fn parse_level(value: &str) -> Option<usize> {
    let value = value.trim().to_lowercase();
    let name = value.strip_prefix("elog_level_").unwrap_or(&value);
    if let Ok(n) = name.parse::<usize>() {
        return (n < LEVELS.len()).then_some(n);
    }
    LEVELS.iter().position(|l| *l == name)
}

/// The primary variable wins over its legacy alias.
pub fn resolve_override(primary: Option<String>, legacy: Option<String>) -> Option<String> {
    primary.or(legacy)
}

/// Renders `palette.rs`.
pub fn palette(lookup: impl Fn(&str) -> Option<String>) -> Result<String, String> {
    let mut out = String::from("// @generated by build.rs\n\n");

    for (severity, color) in SEVERITIES.iter().zip(DEFAULT_COLORS) {
        let label = resolve_override(
            lookup(&format!("ELOG_LABEL_{severity}")),
            lookup(&format!("ELOG_LEVEL_FMT_{severity}")),
        )
        .map(|v| unescape(&v))
        .unwrap_or_else(|| format!("[{severity}]"));
        let color = lookup(&format!("ELOG_COLOR_{severity}"))
            .map(|v| unescape(&v))
            .unwrap_or_else(|| color.to_owned());

        let _ = writeln!(out, "/// Label printed for `{severity}` lines.");
        let _ = writeln!(out, "pub const LABEL_{severity}: &str = {label:?};");
        let _ = writeln!(out, "/// Color prefix for `{severity}` lines.");
        let _ = writeln!(out, "pub const COLOR_{severity}: &str = {color:?};");
    }

    let reset = lookup("ELOG_COLOR_RESET")
        .map(|v| unescape(&v))
        .unwrap_or_else(|| DEFAULT_RESET.to_owned());
    let _ = writeln!(out, "/// Escape closing every colored line.");
    let _ = writeln!(out, "pub const COLOR_RESET: &str = {reset:?};");

    let file_line = lookup("ELOG_FILE_LINE_FMT")
        .map(|v| unescape(&v))
        .unwrap_or_else(|| DEFAULT_FILE_LINE_FMT.to_owned());
    let [prefix, infix, suffix] = split_file_line(&file_line).ok_or_else(|| {
        format!("ELOG_FILE_LINE_FMT: '{file_line}' must contain one %s followed by one %d")
    })?;
    let _ = writeln!(out, "/// printf-style template of the source locator.");
    let _ = writeln!(out, "pub const FILE_LINE_FMT: &str = {file_line:?};");
    let _ = writeln!(
        out,
        "pub(crate) const FILE_LINE_PARTS: [&str; 3] = [{prefix:?}, {infix:?}, {suffix:?}];"
    );

    Ok(out)
}

/// Splits a `%s ... %d` template into the text around the two placeholders.
pub fn split_file_line(fmt: &str) -> Option<[String; 3]> {
    let (prefix, rest) = fmt.split_once("%s")?;
    let (infix, suffix) = rest.split_once("%d")?;
    if prefix.contains("%d") || infix.contains("%s") || suffix.contains("%s") || suffix.contains("%d")
    {
        return None;
    }
    Some([prefix.to_owned(), infix.to_owned(), suffix.to_owned()])
}

/// Decodes the C escapes a build system typically passes through
/// (`\033`, `\x1b`, `\e`, `\n`, `\t`, `\\`).
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('e') => {
                chars.next();
                out.push('\x1b');
            }
            Some('n') => {
                chars.next();
                out.push('\n');
            }
            Some('t') => {
                chars.next();
                out.push('\t');
            }
            Some('\\') => {
                chars.next();
                out.push('\\');
            }
            Some('x') => {
                chars.next();
                let mut code = 0u32;
                let mut digits = 0;
                while digits < 2 {
                    match chars.peek().and_then(|d| d.to_digit(16)) {
                        Some(d) => {
                            code = code * 16 + d;
                            chars.next();
                            digits += 1;
                        }
                        None => break,
                    }
                }
                match char::from_u32(code).filter(|_| digits > 0) {
                    Some(decoded) => out.push(decoded),
                    None => out.push_str("\\x"),
                }
            }
            Some(d) if d.is_digit(8) => {
                let mut code = 0u32;
                let mut digits = 0;
                while digits < 3 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            code = code * 8 + d;
                            chars.next();
                            digits += 1;
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
            }
            _ => out.push('\\'),
        }
    }

    out
}
