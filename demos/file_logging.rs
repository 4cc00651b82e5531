//! File logging example using the process-wide convenience layer
//!
//! Demonstrates `global::init` / `global::shutdown` and the strict accessor.
//!
//! Run with: cargo run --example file_logging

use ringlog::prelude::*;
use ringlog::global;

fn main() {
    println!("=== ringlog - File Logging Example ===\n");

    global::init(
        &LoggerConfig::new()
            .with_path("file_example.log")
            .with_min_level(LogLevel::Info),
    );

    global::info("Application started");
    global::debug("This won't appear (below INFO floor)");
    global::warn("Warning in file");
    global::error("Error in file");

    // The strict accessor works once init has been called.
    let logger = global::get().expect("logger initialized above");
    logger.critical("Critical via strict accessor");
    drop(logger);

    global::set_min_level(LogLevel::Error);
    global::info("Filtered after level change");
    global::error("Still recorded");

    global::shutdown();

    println!("Check 'file_example.log' for output");
    println!("\n=== Example completed successfully! ===");
}
