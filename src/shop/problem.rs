//! Open-shop annealing problem.
//!
//! Implements [`SaProblem`] for per-agent resource orderings: the rotation
//! heuristic seeds the run, uniform random orderings serve as restarts, a
//! single in-agent transposition is the neighbor move, and the discrete-event
//! simulation is the cost.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::candidate::{random_solution, rotation_solution, Candidate};
use crate::error::{OpenShopError, Result};
use crate::sa::{SaConfig, SaProblem, SaResult, SaRunner};
use crate::sim::{makespan, makespan_unchecked, validate_durations};

/// `agents` agents sharing resources with the given service durations.
///
/// # Example
///
/// ```
/// use u_openshop::sa::SaConfig;
/// use u_openshop::shop::OpenShopProblem;
///
/// let problem = OpenShopProblem::new(3, vec![4.0, 2.0, 6.0]).unwrap();
/// let result = problem.optimize(&SaConfig::default().with_seed(42)).unwrap();
///
/// assert_eq!(result.best.agents(), 3);
/// // Every agent needs 12 time units of service on its own.
/// assert!(result.best_cost >= 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct OpenShopProblem {
    agents: usize,
    durations: Vec<f64>,
}

impl OpenShopProblem {
    /// Creates a problem instance.
    ///
    /// # Errors
    ///
    /// Fails when `agents` is zero or a duration is negative or non-finite.
    pub fn new(agents: usize, durations: Vec<f64>) -> Result<Self> {
        if agents == 0 {
            return Err(OpenShopError::NoAgents);
        }
        validate_durations(&durations)?;
        Ok(Self { agents, durations })
    }

    pub fn agents(&self) -> usize {
        self.agents
    }

    pub fn resources(&self) -> usize {
        self.durations.len()
    }

    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    /// The rotation-heuristic seed for this instance.
    pub fn rotation_seed(&self) -> Candidate {
        rotation_solution(self.agents, &self.durations)
    }

    /// Makespan of an arbitrary candidate, checking its shape first.
    pub fn evaluate(&self, candidate: &Candidate) -> Result<f64> {
        makespan(candidate.orders(), &self.durations)
    }

    /// Anneals with an RNG seeded from `config.seed`.
    pub fn optimize(&self, config: &SaConfig) -> Result<SaResult<Candidate>> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.optimize_with_rng(config, &mut rng)
    }

    /// Anneals drawing all randomness from `rng`.
    pub fn optimize_with_rng<R: Rng>(
        &self,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<Candidate>> {
        SaRunner::run_with_rng(self, config, rng, None)
    }
}

impl SaProblem for OpenShopProblem {
    type Solution = Candidate;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Candidate {
        self.rotation_seed()
    }

    fn random_solution<R: Rng>(&self, rng: &mut R) -> Candidate {
        random_solution(self.agents, self.durations.len(), rng)
    }

    fn cost(&self, candidate: &Candidate) -> f64 {
        makespan_unchecked(candidate.orders(), &self.durations)
    }

    fn neighbor<R: Rng>(&self, candidate: &Candidate, rng: &mut R) -> Candidate {
        candidate.with_random_swap(rng)
    }
}
