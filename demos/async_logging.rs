//! Async logging example
//!
//! Demonstrates the background writer thread with multiple producer threads
//! and the drain-on-shutdown guarantee.
//!
//! Run with: cargo run --example async_logging

use ringlog::prelude::*;
use std::thread;

fn main() {
    println!("=== ringlog - Async Logging Example ===\n");

    let mut logger = Logger::with_config(
        &LoggerConfig::new()
            .with_path("async_example.log")
            .with_async_mode(true),
    );

    println!("1. Burst of messages from the main thread:");
    for i in 0..100 {
        logger.info(format!("Message #{}", i));
    }
    println!("   Enqueued 100 messages without blocking on file I/O");

    println!("\n2. Multi-threaded producers:");
    thread::scope(|s| {
        for thread_id in 0..5 {
            let logger = &logger;
            s.spawn(move || {
                for i in 0..20 {
                    logger.info(format!("Thread {} - Message {}", thread_id, i));
                }
            });
        }
    });
    println!("   5 threads logged 20 messages each");

    // Drains the ring and joins the writer; nothing enqueued above is lost.
    logger.shutdown();

    println!("\n=== Example completed successfully! ===");
    println!("Check 'async_example.log' for file output");
}
