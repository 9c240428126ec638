//! Concurrent open-shop sequencing.
//!
//! N agents must each use every one of M shared, single-capacity resources
//! exactly once, in an order of their choosing. Resources have fixed service
//! durations and serve one agent at a time, queueing the rest FIFO. This
//! crate searches for per-agent orders that minimize the makespan.
//!
//! - **`sim`**: Discrete-event simulation returning the makespan of a set of
//!   orders. Pure; safe to call from many threads at once.
//! - **`candidate`**: Ordering sets, the single-swap neighbor move, and seed
//!   generators (uniform random, longest-first rotation).
//! - **`sa`**: Simulated Annealing with randomized restarts, Metropolis
//!   acceptance and pluggable cooling.
//! - **`shop`**: The open-shop problem bound to the annealer, and an
//!   allocator over named tasks.
//!
//! # Example
//!
//! ```
//! use u_openshop::sa::SaConfig;
//! use u_openshop::shop::{Allocator, Task};
//!
//! let tasks = vec![Task::new("A", 10.0), Task::new("B", 5.0), Task::new("C", 8.0)];
//! let allocation = Allocator::new()
//!     .with_config(SaConfig::default().with_seed(7))
//!     .allocate(&tasks, 2)
//!     .unwrap();
//!
//! for order in &allocation.orders {
//!     assert_eq!(order.len(), 3);
//! }
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluates restart candidates with rayon.
//! - `serde`: derives `Serialize`/`Deserialize` for configs, tasks and results.

pub mod candidate;
pub mod error;
pub mod sa;
pub mod shop;
pub mod sim;

pub use error::{OpenShopError, Result};
