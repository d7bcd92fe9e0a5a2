//! Basic elog usage
//!
//! Demonstrates the six logging macros and the default line format.
//!
//! Run with: cargo run --example basic_usage
//! Rebuild with `ELOG_COMPILED_LEVEL=trace` to see every line, or with
//! `--no-default-features` to drop colors and locations.

use elog::prelude::*;

// Only called while DEBUG is compiled in.
#[allow(dead_code)]
fn expensive_dump() -> String {
    println!("   (expensive_dump evaluated)");
    "regs=[..]".to_string()
}

fn main() {
    println!("=== elog - Basic Usage Example ===\n");
    println!("Compiled level: {}\n", COMPILED_LEVEL);

    println!("1. One line per severity:");
    critical!("watchdog expired after {} ms", 500);
    error!("i2c read failed: addr={:#04x}", 0x50);
    warn!("battery at {}%", 12);
    info!("boot complete in {} ms", 87);
    debug!("state dump: {}", expensive_dump());
    trace!("enter isr {}", 3);

    println!("\n2. Empty message keeps the decoration:");
    info!("");

    println!("\n3. Legacy label lookup: {}", elog::level_label!(WARN));

    println!("\n=== Example completed successfully! ===");
}
