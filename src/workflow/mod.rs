pub mod target_flow;

pub use target_flow::{TargetFlow, TargetOutcome};
