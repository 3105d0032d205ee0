//! The eviction simulator.
//!
//! # Components
//! - [`Simulator`] - Step loop over a reference stream
//! - [`FrameSet`] - Slot-stable resident set
//! - [`Trace`] / [`StepRecord`] - Per-step snapshots
//! - [`FaultStats`] - Hit/fault totals
//! - [`replacer`] - Victim-selection rules

mod frame_set;
mod policy;
pub mod replacer;
mod simulator;
mod stats;
mod trace;

pub use frame_set::FrameSet;
pub use policy::Policy;
pub use simulator::{
    fault_curve, has_belady_anomaly, simulate, simulate_all, Comparison, Simulation, Simulator,
};
pub use stats::FaultStats;
pub use trace::{StepOutcome, StepRecord, Trace};
