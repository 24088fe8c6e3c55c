//! The pump state machine.
//!
//! [`PumpStateMachine`] is the single owner of the pump state and the event
//! history. Run state moves only through `start`/`stop`, the mode only
//! through `toggle_mode`, and water only accrues while running.

mod pump;

pub use pump::{ModeChange, PumpAction, PumpStateMachine};
