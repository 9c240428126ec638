//! Candidate solutions and seed generators.
//!
//! A [`Candidate`] holds one visiting order per agent. Generators build
//! complete candidates from scratch:
//!
//! - [`random_solution`]: an independent uniform permutation per agent.
//! - [`rotation_solution`]: resources sorted by descending duration, rotated
//!   by one position per agent so long services are spread across agents
//!   instead of all agents queueing for the same resource at time zero.
//!
//! # References
//!
//! - Knuth (1997), "The Art of Computer Programming", Vol. 2, Algorithm 3.4.2P
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 8

mod generators;
mod solution;

pub use generators::{random_solution, rotation_solution};
pub use solution::Candidate;
