//! Builder API for ergonomic controller construction.

pub mod controller;
pub mod error;

pub use controller::ControllerBuilder;
pub use error::BuildError;
