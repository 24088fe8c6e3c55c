//! Auto Irrigation
//!
//! This example drives the controller in auto mode with a falling and then
//! rising humidity trace.
//!
//! Key concepts:
//! - Entering auto mode evaluates the current reading straight away
//! - Dry readings start the pump, soaked readings stop it
//! - Readings between the low threshold and the stop guard hold the pump
//! - Every evaluation lands in the bounded history
//!
//! Run with: cargo run --example auto_irrigation

use pumpwise::config::IrrigationConfig;
use pumpwise::controller::IrrigationController;

fn main() {
    println!("=== Auto Irrigation Example ===\n");

    let mut controller = IrrigationController::new(IrrigationConfig::edge())
        .expect("edge preset is valid");

    println!("Mode: {}", controller.mode());
    controller.toggle_mode();
    println!("Mode after toggle: {}\n", controller.mode());

    // Soil dries out, gets watered, then passes through the hysteresis gap
    let trace = [55, 42, 28, 33, 45, 49, 58, 90];
    for humidity in trace {
        let decision = controller
            .on_humidity_changed(humidity)
            .expect("auto mode evaluates every reading");
        controller.tick();

        println!(
            "{humidity:>3}% -> {:<45} pump {:<7} water {:.1} L",
            decision.to_string(),
            if controller.is_running() { "running" } else { "stopped" },
            controller.state().total_water()
        );
    }

    println!("\nHistory (newest first):");
    for entry in controller.history().entries().take(8) {
        println!(
            "  [{}] {}",
            entry.timestamp().format("%H:%M:%S"),
            entry.message()
        );
    }

    // Leaving auto mode stops the pump exactly once
    controller.on_humidity_changed(20);
    let change = controller.toggle_mode();
    println!(
        "\nSwitched to {} (forced stop: {})",
        change.to, change.forced_stop
    );

    println!("\nKey Takeaways:");
    println!("- 45% and 49% do not stop a running pump; only readings above 50% do");
    println!("- Manual mode ignores readings, the user starts and stops the pump");
    println!("- The history never grows past its configured capacity");

    println!("\n=== Example Complete ===");
}
