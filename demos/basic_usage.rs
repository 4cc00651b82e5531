//! Basic usage example
//!
//! Demonstrates an owned logger writing to standard error, the level floor,
//! and the formatting macros.
//!
//! Run with: cargo run --example basic_usage

use ringlog::prelude::*;
use ringlog::{error, info, warn};

fn main() {
    println!("=== ringlog - Basic Usage Example ===\n");

    // Default state: stderr, DEBUG floor, synchronous delivery.
    let logger = Logger::new();

    logger.info("Application started");
    logger.debug("Debug message");
    logger.warn("This is a warning message");
    logger.critical("Critical system failure!");

    println!("Changing log level to ERROR...");
    logger.set_min_level(LogLevel::Error);
    logger.info("This won't appear");
    logger.error("This will appear");

    logger.set_min_level(LogLevel::Debug);
    logger.info("Log level reset to DEBUG");

    // Formatted variants.
    info!(logger, "User {} has {} points, accuracy: {:.2}%", "alice", 1250, 98.5);
    warn!(logger, "Temperature warning: {}°C", 85);
    error!(logger, "Failed to process file: {}", "data.txt");

    println!("\n=== Example completed (output went to stderr) ===");
}
