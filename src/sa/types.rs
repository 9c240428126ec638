//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements seeding, neighbor generation and cost evaluation.
/// The SA framework handles restarts, temperature management, the
/// acceptance criterion, and cooling.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Thread Safety
///
/// With the `parallel` feature, restart candidates are evaluated
/// concurrently, so [`cost`](SaProblem::cost) must not rely on shared
/// mutable state.
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send + Sync;

    /// Creates the starting solution, typically a constructive heuristic.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Creates a random solution used as a restart candidate.
    ///
    /// Defaults to [`initial_solution`](SaProblem::initial_solution).
    fn random_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution {
        self.initial_solution(rng)
    }

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution.
    ///
    /// The neighbor should be a small perturbation of `solution`, and the
    /// neighborhood must be connected (any solution reachable from any
    /// other via a sequence of moves).
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
