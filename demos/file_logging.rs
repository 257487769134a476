//! File logging example
//!
//! Demonstrates pointing a whole tree of loggers at a log file.
//!
//! Run with: cargo run --example file_logging

use rust_vlog::prelude::*;
use rust_vlog::warnf;

fn main() -> Result<()> {
    println!("=== rust_vlog - File Logging Example ===\n");

    let path = std::env::temp_dir().join("rust_vlog_demo.log");
    let output = FileAppender::new(&path)?.into_output();

    let registry = Registry::builder()
        .root_output(output)
        .root_flags(Flags::DEFAULT)
        .build();

    let app = registry.get_logger("app", None);
    let db = registry.get_logger("db", Some(&app));

    println!("1. Logging to {}:", path.display());
    app.info("Application started");
    app.debug("Loading configuration...");
    db.info("Connecting to database...");
    db.info("Database connection established");
    app.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        app.infof(format_args!("Processing item {}/5", i));
        if i == 3 {
            warnf!(app, "Item {} took longer than expected", i);
        }
    }
    app.info("All operations completed");

    app.output().flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check '{}' for the full log output", path.display());
    Ok(())
}
