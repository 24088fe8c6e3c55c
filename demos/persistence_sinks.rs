//! Persistence Sinks
//!
//! This example mirrors controller events to a background worker and to
//! stdout as JSON lines.
//!
//! Key concepts:
//! - Persistence sinks receive one record per command or evaluation
//! - `ChannelSink` hands records to a worker thread without blocking
//! - `JsonLinesSink` writes the same rows to any `Write`
//! - A failing sink is logged and skipped, the controller carries on
//!
//! Run with: cargo run --example persistence_sinks

use pumpwise::builder::ControllerBuilder;
use pumpwise::sink::{ChannelSink, JsonLinesSink};
use std::io;
use std::thread;

fn main() {
    println!("=== Persistence Sinks Example ===\n");

    let (channel, rx) = ChannelSink::new();
    let worker = thread::spawn(move || {
        let mut stored = 0usize;
        for record in rx {
            stored += 1;
            eprintln!(
                "  [worker] row {stored}: {}% running={} decision={:?}",
                record.humidity, record.pump_running, record.decision
            );
        }
        stored
    });

    let mut controller = ControllerBuilder::new()
        .persistence_sink(channel)
        .persistence_sink(JsonLinesSink::new(io::stdout()))
        .build()
        .expect("default config is valid");

    controller.toggle_mode();
    for humidity in [38, 25, 47, 72] {
        controller.on_humidity_changed(humidity);
        controller.tick();
    }
    controller.toggle_mode();

    // Dropping the controller drops the sender and ends the worker loop
    drop(controller);
    let stored = worker.join().expect("worker thread finished");

    println!("\nWorker stored {stored} rows");

    println!("\nKey Takeaways:");
    println!("- Ticks only render, they do not produce persistence rows");
    println!("- Sinks never block or fail the controller");

    println!("\n=== Example Complete ===");
}
