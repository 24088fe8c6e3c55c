//! Property-based tests for the decision table, history and controller.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use pumpwise::config::IrrigationConfig;
use pumpwise::controller::IrrigationController;
use pumpwise::core::{DecisionEngine, DecisionLabel, HistoryLog, Mode};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Command {
    Start,
    Stop,
    Toggle,
    Reading(i32),
    Tick,
    Accrue(f64),
}

prop_compose! {
    fn arbitrary_humidity()(h in -20..130i32) -> i32 {
        h
    }
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Start),
        Just(Command::Stop),
        Just(Command::Toggle),
        arbitrary_humidity().prop_map(Command::Reading),
        Just(Command::Tick),
        (-5.0..5.0f64).prop_map(Command::Accrue),
    ]
}

fn apply(controller: &mut IrrigationController, command: &Command) {
    match command {
        Command::Start => {
            controller.start();
        }
        Command::Stop => {
            controller.stop();
        }
        Command::Toggle => {
            controller.toggle_mode();
        }
        Command::Reading(h) => {
            controller.on_humidity_changed(*h);
        }
        Command::Tick => {
            controller.tick();
        }
        Command::Accrue(liters) => {
            controller.accrue_water(*liters);
        }
    }
}

fn controller_with_capacity(capacity: usize) -> IrrigationController {
    IrrigationController::new(IrrigationConfig {
        history_capacity: capacity,
        ..IrrigationConfig::edge()
    })
    .unwrap()
}

proptest! {
    #[test]
    fn very_dry_is_always_critical_low(h in i32::MIN..30) {
        let decision = DecisionEngine::default().decide(h);
        prop_assert_eq!(decision.label, DecisionLabel::CriticalLow);
        prop_assert!(decision.should_water);
    }

    #[test]
    fn optimal_band_never_waters(h in 50..=70i32) {
        let decision = DecisionEngine::default().decide(h);
        prop_assert_eq!(decision.label, DecisionLabel::Optimal);
        prop_assert!(!decision.should_water);
    }

    #[test]
    fn decide_is_deterministic(h in any::<i32>()) {
        let engine = DecisionEngine::default();
        prop_assert_eq!(engine.decide(h), engine.decide(h));
    }

    #[test]
    fn waters_exactly_below_low_threshold(h in any::<i32>()) {
        let decision = DecisionEngine::default().decide(h);
        prop_assert_eq!(decision.should_water, h < 40);
    }

    #[test]
    fn history_never_exceeds_capacity(
        capacity in 1..30usize,
        messages in prop::collection::vec("[a-z]{1,8}", 0..80)
    ) {
        let mut log = HistoryLog::with_capacity(capacity);
        for message in &messages {
            log.record(message.clone());
            prop_assert!(log.len() <= capacity);
        }

        // the survivors are the newest messages, newest first
        let expected: Vec<&str> = messages.iter().rev().take(capacity).map(String::as_str).collect();
        let actual: Vec<&str> = log.entries().map(|e| e.message()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn controller_history_stays_bounded(
        capacity in 1..25usize,
        commands in prop::collection::vec(arbitrary_command(), 0..60)
    ) {
        let mut controller = controller_with_capacity(capacity);
        for command in &commands {
            apply(&mut controller, command);
            prop_assert!(controller.history().len() <= capacity);
        }
    }

    #[test]
    fn total_water_never_decreases(
        commands in prop::collection::vec(arbitrary_command(), 0..60)
    ) {
        let mut controller = controller_with_capacity(20);
        let mut previous = controller.state().total_water();

        for command in &commands {
            let was_running = controller.is_running();
            apply(&mut controller, command);
            let now = controller.state().total_water();

            prop_assert!(now >= previous);
            if !was_running && !controller.is_running() {
                prop_assert_eq!(now, previous);
            }
            previous = now;
        }
    }

    #[test]
    fn start_twice_changes_nothing(
        commands in prop::collection::vec(arbitrary_command(), 0..20)
    ) {
        let mut controller = controller_with_capacity(50);
        for command in &commands {
            apply(&mut controller, command);
        }

        controller.start();
        let state = *controller.state();
        let history = controller.history().clone();

        controller.start();

        prop_assert_eq!(*controller.state(), state);
        prop_assert_eq!(controller.history(), &history);
    }

    #[test]
    fn accrue_is_ignored_while_stopped(liters in 0.0..100.0f64, h in arbitrary_humidity()) {
        let mut controller = controller_with_capacity(20);
        controller.on_humidity_changed(h);

        prop_assert_eq!(controller.accrue_water(liters), 0.0);
        prop_assert_eq!(controller.tick(), 0.0);
        prop_assert_eq!(controller.state().total_water(), 0.0);
    }

    #[test]
    fn leaving_auto_while_running_stops_exactly_once(h in -20..40i32) {
        let mut controller = controller_with_capacity(50);
        controller.toggle_mode();
        controller.on_humidity_changed(h);
        prop_assert!(controller.is_running());
        let before = controller.history().len();

        controller.toggle_mode();

        prop_assert_eq!(controller.mode(), Mode::Manual);
        prop_assert!(!controller.is_running());
        let new_entries: Vec<&str> = controller
            .history()
            .entries()
            .take(controller.history().len() - before)
            .map(|e| e.message())
            .collect();
        prop_assert_eq!(new_entries, vec!["Manual mode enabled", "Pump stopped"]);
    }
}
