//! Run-time threshold example
//!
//! Run with: cargo run --example runtime_level

use elog::prelude::*;

fn main() {
    println!("=== elog - Run-time Level Example ===\n");

    println!("1. Threshold at {}:", runtime_level());
    warn!("visible warning");

    set_runtime_level(Level::Error);
    println!("\n2. Threshold at {} - the warning is suppressed:", runtime_level());
    warn!("hidden warning");
    critical!("still visible");

    {
        let _silence = RUNTIME_LEVEL.scoped(Level::Off);
        println!("\n3. Threshold at {} - nothing is written:", runtime_level());
        critical!("hidden critical");
    }

    println!("\n4. Threshold restored to {}:", runtime_level());
    error!("visible again");

    match "verbose".parse::<Level>() {
        Ok(level) => println!("parsed {}", level),
        Err(e) => println!("\n5. Parse failure: {}", e),
    }

    println!("\n=== Example completed successfully! ===");
}
