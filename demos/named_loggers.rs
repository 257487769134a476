//! Named logger example
//!
//! Demonstrates the process-wide registry: lookups by name, inheriting a
//! parent's destination and flags at creation, and independent thresholds.
//!
//! Run with: cargo run --example named_loggers

use rust_vlog::prelude::*;
use rust_vlog::{criticalf, debug, info, registry};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== rust_vlog - Named Loggers Example ===\n");

    init_logging(
        Registry::builder()
            .root_output(Output::stdout())
            .root_flags(Flags::SHORT_FILE)
            .build(),
    );

    let root = root_logger();
    root.info("root logger has no name prefix");

    println!("\n1. Same name, same logger:");
    let http = get_logger("http", None);
    let again = get_logger("http", None);
    println!("   identical: {}", Arc::ptr_eq(&http, &again));

    println!("\n2. Children copy the parent's settings once:");
    let audit = get_logger("audit", None);
    audit.set_flags(Flags::STANDARD);
    let child = get_logger("audit.child", Some(&audit));
    info!(child, "inherited flags", child.flags() == audit.flags());
    audit.set_flags(Flags::NONE);
    info!(child, "still has its own copy");

    println!("\n3. Thresholds are per logger:");
    http.set_level(LogLevel::Warn);
    debug!(http, "hidden");
    debug!(audit, "shown");
    criticalf!(http, "{} requests failed", 3);

    println!("\nRegistered: {:?}", registry().names());
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
