//! Basic logger usage example
//!
//! Demonstrates emitting at every level and raising a logger's threshold.
//!
//! Run with: cargo run --example basic_usage

use rust_vlog::prelude::*;
use rust_vlog::{info, infof};

fn main() -> Result<()> {
    println!("=== rust_vlog - Basic Usage Example ===\n");

    let registry = Registry::builder()
        .root_output(Output::stdout())
        .root_flags(Flags::STANDARD)
        .build();
    let logger = registry.get_logger("app", None);

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");

    println!("\n2. Logging with a raised threshold:");
    logger.set_level(LogLevel::Info);
    println!("   Threshold set to INFO - trace and debug won't show:");
    logger.trace("Trace message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (visible)");
    logger.warn("Warning message (visible)");

    println!("\n3. Plain and formatted macros:");
    info!(logger, "listening on port", 8080);
    infof!(logger, "accepted {} connections in {:.1}s", 12, 0.5);

    println!("\n4. Header flags:");
    logger.set_flags(Flags::DEFAULT);
    logger.info("with microseconds and source file");
    logger.set_flags(Flags::STANDARD | Flags::NAME_AFTER_HEADER);
    logger.info("name after the header");

    let metrics = logger.metrics();
    println!(
        "\nEmitted: {}, filtered: {}",
        metrics.emitted(),
        metrics.filtered()
    );

    logger.output().flush()?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
