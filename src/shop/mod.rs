//! Open-shop allocation.
//!
//! Binds the simulation, the seed generators and the annealer into a
//! concrete optimizer ([`OpenShopProblem`]) and exposes it over named tasks
//! ([`Allocator`]). Task names map to resource indices by position, so the
//! returned orders contain exactly the input names, each once per agent.

mod allocate;
mod problem;

pub use allocate::{allocate_tasks, Allocation, Allocator, Task};
pub use problem::OpenShopProblem;
