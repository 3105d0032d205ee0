//! pagesim - a page replacement simulator.
//!
//! Replays a reference stream against a fixed number of frames under
//! FIFO, LRU, or Optimal (Belady) eviction and records, for every step,
//! which page sits in which slot and whether the reference hit or faulted.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  input (text → references, capacity)     report (trace → text)  │
//! │                 │                                 ▲             │
//! │                 ▼                                 │             │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                     Simulator (sim/)                     │   │
//! │  │   FrameSet + step loop + Trace + FaultStats              │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Replacers: FIFO | LRU | Optimal                 │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`sim`] - The simulator and eviction policies
//! - [`input`] - Parsing user-supplied text
//! - [`report`] - Text rendering of traces and comparisons
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, PageId, Policy};
//!
//! let refs = PageId::stream(&[1, 2, 3, 4, 1, 2, 5]);
//! let sim = simulate(Policy::Optimal, &refs, 3).unwrap();
//!
//! assert_eq!(sim.faults(), 5);
//! assert_eq!(sim.hits(), 2);
//! assert_eq!(sim.trace.len(), refs.len());
//! ```

pub mod common;
pub mod input;
pub mod report;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_CAPACITY;
pub use common::{ConfigError, Error, FrameId, PageId, Result};

pub use sim::{
    fault_curve, has_belady_anomaly, simulate, simulate_all, Comparison, FaultStats, FrameSet,
    Policy, Simulation, Simulator, StepOutcome, StepRecord, Trace,
};
