//! Named-task allocation.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::OpenShopProblem;
use crate::candidate::Candidate;
use crate::error::{OpenShopError, Result};
use crate::sa::SaConfig;

/// A named resource with a positive service duration.
///
/// Names are opaque labels: two tasks may share a name and are still
/// distinct resources.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    pub name: String,
    pub duration: f64,
}

impl Task {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Per-agent task orders and their makespan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    /// `orders[i]` lists the task names agent `i` visits, in order.
    pub orders: Vec<Vec<String>>,
    /// Time at which the last agent finishes.
    pub makespan: f64,
}

impl Allocation {
    pub fn agents(&self) -> usize {
        self.orders.len()
    }

    pub fn into_orders(self) -> Vec<Vec<String>> {
        self.orders
    }
}

/// One line per agent: `index: [name, name, ...]`.
impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (agent, order) in self.orders.iter().enumerate() {
            writeln!(f, "{agent}: [{}]", order.join(", "))?;
        }
        Ok(())
    }
}

/// Assigns every agent a visiting order over a list of named tasks.
///
/// # Example
///
/// ```
/// use u_openshop::sa::SaConfig;
/// use u_openshop::shop::{Allocator, Task};
///
/// let tasks = vec![Task::new("A", 10.0), Task::new("B", 5.0), Task::new("C", 8.0)];
/// let allocation = Allocator::new()
///     .with_config(SaConfig::default().with_seed(42))
///     .allocate(&tasks, 2)
///     .unwrap();
///
/// assert_eq!(allocation.agents(), 2);
/// assert!(allocation.orders.iter().all(|order| order.len() == 3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    config: SaConfig,
}

impl Allocator {
    /// Creates an allocator with the default annealing configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Allocates with an RNG seeded from the configuration.
    pub fn allocate(&self, tasks: &[Task], agents: usize) -> Result<Allocation> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.allocate_with_rng(tasks, agents, &mut rng)
    }

    /// Allocates drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Fails when `agents` is zero, a task duration is not a finite positive
    /// number, or the configuration is invalid.
    pub fn allocate_with_rng<R: Rng>(
        &self,
        tasks: &[Task],
        agents: usize,
        rng: &mut R,
    ) -> Result<Allocation> {
        if agents == 0 {
            return Err(OpenShopError::NoAgents);
        }
        for (index, task) in tasks.iter().enumerate() {
            if !task.duration.is_finite() || task.duration <= 0.0 {
                return Err(OpenShopError::NonPositiveDuration {
                    index,
                    value: task.duration,
                });
            }
        }
        if tasks.is_empty() {
            return Ok(Allocation {
                orders: vec![Vec::new(); agents],
                makespan: 0.0,
            });
        }

        let durations = tasks.iter().map(|t| t.duration).collect();
        let problem = OpenShopProblem::new(agents, durations)?;
        let result = problem.optimize_with_rng(&self.config, rng)?;
        debug!(
            agents,
            tasks = tasks.len(),
            makespan = result.best_cost,
            seed_makespan = result.initial_cost,
            iterations = result.iterations,
            "allocation finished"
        );

        Ok(Allocation {
            orders: names(&result.best, tasks),
            makespan: result.best_cost,
        })
    }
}

/// Allocates `tasks` across `agents` with the default configuration.
pub fn allocate_tasks(tasks: &[Task], agents: usize) -> Result<Vec<Vec<String>>> {
    Allocator::new()
        .allocate(tasks, agents)
        .map(Allocation::into_orders)
}

fn names(candidate: &Candidate, tasks: &[Task]) -> Vec<Vec<String>> {
    candidate
        .orders()
        .iter()
        .map(|order| order.iter().map(|&j| tasks[j].name.clone()).collect())
        .collect()
}
