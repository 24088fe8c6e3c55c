//! Checkpoint and Resume
//!
//! This example saves an irrigation session and continues it later.
//!
//! Key concepts:
//! - Checkpoints capture pump state, humidity, history and last decision
//! - Serialization formats (JSON for readability, bincode for compactness)
//! - Validation on load rejects inconsistent or foreign checkpoints
//! - Resuming re-caps the history to the new configuration
//!
//! Run with: cargo run --example checkpoint_resume

use pumpwise::builder::ControllerBuilder;
use pumpwise::checkpoint::Checkpoint;
use pumpwise::config::IrrigationConfig;

fn main() {
    println!("=== Checkpoint and Resume Example ===\n");

    // Run 1: a cloud session that gets interrupted
    println!("Run 1: Starting new session");
    println!("----------------------------------------");
    let mut session = ControllerBuilder::new()
        .config(IrrigationConfig::cloud())
        .build()
        .expect("cloud preset is valid");

    session.toggle_mode();
    session.on_humidity_changed(27);
    for _ in 0..6 {
        session.tick();
    }
    println!(
        "Pump running: {}, water: {:.1} L, history entries: {}\n",
        session.is_running(),
        session.state().total_water(),
        session.history().len()
    );

    let checkpoint = session.checkpoint();
    let json = checkpoint.to_json().expect("checkpoint encodes as JSON");
    let bytes = checkpoint.to_bytes().expect("checkpoint encodes as bincode");
    println!("Checkpoint {}", checkpoint.id);
    println!("  JSON:    {} bytes", json.len());
    println!("  bincode: {} bytes\n", bytes.len());

    // Run 2: resume on the edge preset, which keeps fewer entries
    println!("Run 2: Resuming from checkpoint");
    println!("----------------------------------------");
    let restored = Checkpoint::from_bytes(&bytes).expect("bincode checkpoint loads");
    let mut resumed = ControllerBuilder::new()
        .config(IrrigationConfig::edge())
        .resume_from(restored)
        .build()
        .expect("checkpoint is consistent");

    println!(
        "Resumed in {} mode, pump running: {}, water: {:.1} L",
        resumed.mode(),
        resumed.is_running(),
        resumed.state().total_water()
    );
    println!(
        "History re-capped to {} of {} entries",
        resumed.history().len(),
        resumed.history().capacity()
    );

    resumed.on_humidity_changed(62);
    println!(
        "After a 62% reading the pump is {}\n",
        if resumed.is_running() { "running" } else { "stopped" }
    );

    // A tampered checkpoint is refused
    let tampered = json.replace("\"version\": 1", "\"version\": 99");
    match Checkpoint::from_json(&tampered) {
        Ok(_) => println!("Tampered checkpoint unexpectedly loaded"),
        Err(err) => println!("Tampered checkpoint rejected: {err}"),
    }

    println!("\nKey Takeaways:");
    println!("- Checkpoints round-trip through JSON and bincode");
    println!("- Loading validates version and state before resuming");
    println!("- A resumed session keeps its mode, pump state and water total");

    println!("\n=== Example Complete ===");
}
