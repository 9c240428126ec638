//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Upper bound on history entries reserved up front.
const HISTORY_PREALLOC: usize = 1 << 16;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the starting solution after restarts.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost after seeding, then after every iteration.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The flag is checked before every iteration; once set, the best
    /// solution found so far is returned with `cancelled = true`.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng, cancel.as_deref())
    }

    /// Runs SA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the random source.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;

        let (mut current, mut current_cost) = seed(problem, config.restarts, rng);
        let initial_cost = current_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config
            .initial_temperature
            .unwrap_or(current_cost * config.temperature_factor);
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut cost_history =
            Vec::with_capacity(config.max_iterations.min(HISTORY_PREALLOC) + 1);
        cost_history.push(best_cost);

        debug!(
            initial_cost,
            temperature,
            max_iterations = config.max_iterations,
            "annealing started"
        );

        while total_iterations < config.max_iterations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }

            let neighbor = problem.neighbor(&current, rng);
            let neighbor_cost = problem.cost(&neighbor);
            let delta = neighbor_cost - current_cost;

            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                metropolis(delta, temperature, rng)
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    trace!(iteration = total_iterations, best_cost, "new best");
                }
            }

            total_iterations += 1;
            cost_history.push(best_cost);

            temperature = config.cooling.next(temperature);
            if temperature < config.min_temperature {
                break;
            }
        }

        debug!(
            best_cost,
            iterations = total_iterations,
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            cancelled,
            "annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        })
    }
}

/// Metropolis criterion for a non-improving move.
///
/// The exponential is only evaluated for a strictly positive `delta` at a
/// positive temperature; an equal-cost move is always accepted.
fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta <= 0.0 {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    let probability = (-delta / temperature).exp();
    rng.random_range(0.0..1.0) < probability
}

/// Builds the starting point: the problem's initial solution, replaced by
/// any restart candidate with a strictly lower cost.
fn seed<P: SaProblem, R: Rng>(problem: &P, restarts: usize, rng: &mut R) -> (P::Solution, f64) {
    let mut current = problem.initial_solution(rng);
    let mut current_cost = problem.cost(&current);

    // Candidates are drawn in order so the run replays from a seed whether
    // or not their costs are computed in parallel.
    let candidates: Vec<P::Solution> = (0..restarts)
        .map(|_| problem.random_solution(rng))
        .collect();
    let costs = evaluate_all(problem, &candidates);

    for (restart, (candidate, cost)) in candidates.into_iter().zip(costs).enumerate() {
        if cost < current_cost {
            debug!(restart, cost, previous = current_cost, "restart improved seed");
            current = candidate;
            current_cost = cost;
        }
    }
    (current, current_cost)
}

#[cfg(feature = "parallel")]
fn evaluate_all<P: SaProblem>(problem: &P, solutions: &[P::Solution]) -> Vec<f64> {
    solutions.par_iter().map(|s| problem.cost(s)).collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all<P: SaProblem>(problem: &P, solutions: &[P::Solution]) -> Vec<f64> {
    solutions.iter().map(|s| problem.cost(s)).collect()
}
