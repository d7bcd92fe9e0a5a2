//! Resolves the build-time logging configuration.
//!
//! * emits one `elog_<level>` cfg for every severity retained by the
//!   compile-time threshold;
//! * writes `palette.rs` into `OUT_DIR` with the labels, colors and the
//!   file/line bracket, honoring `ELOG_*` overrides.

#[path = "build/config.rs"]
mod config;

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/config.rs");

    let level = config::compiled_level(env_override, |feature| {
        let var = format!("CARGO_FEATURE_{}", feature.to_uppercase().replace('-', "_"));
        env::var_os(var).is_some()
    })
    .unwrap_or_else(|e| panic!("{e}"));

    for (idx, name) in config::LEVELS.iter().enumerate().skip(1) {
        println!("cargo:rustc-check-cfg=cfg(elog_{name})");
        if idx <= level {
            println!("cargo:rustc-cfg=elog_{name}");
        }
    }

    let palette = config::palette(env_override).unwrap_or_else(|e| panic!("{e}"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
    fs::write(out_dir.join("palette.rs"), palette).expect("failed to write palette.rs");
}

/// Reads an override and asks cargo to rebuild when it changes.
fn env_override(name: &str) -> Option<String> {
    println!("cargo:rerun-if-env-changed={name}");
    env::var(name).ok()
}
