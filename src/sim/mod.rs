//! Discrete-event makespan simulation.
//!
//! Evaluates a set of per-agent resource orderings under single-capacity
//! resource contention. Each agent walks its own order; a busy resource
//! queues arrivals FIFO and hands itself to the queue head on completion.
//!
//! The simulation is a pure function of its inputs: all bookkeeping
//! (cursors, free times, wait queues, pending events) is built inside each
//! call and dropped on return, so independent evaluations can run on
//! different threads without coordination.
//!
//! # References
//!
//! - Gonzalez & Sahni (1976), "Open Shop Scheduling to Minimize Finish Time"
//! - Banks et al. (2010), "Discrete-Event System Simulation", Ch. 3

mod engine;
mod event;

pub use engine::makespan;
pub(crate) use engine::{makespan_unchecked, validate_durations};
pub use event::Event;
