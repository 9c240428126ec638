//! Seed generators.

use rand::seq::SliceRandom;
use rand::Rng;

use super::Candidate;

/// Draws an independent uniform permutation of `0..resources` per agent.
pub fn random_solution<R: Rng>(agents: usize, resources: usize, rng: &mut R) -> Candidate {
    let orders = (0..agents)
        .map(|_| {
            let mut perm: Vec<usize> = (0..resources).collect();
            perm.shuffle(rng);
            perm
        })
        .collect();
    Candidate::new(orders)
}

/// Longest-first rotation seed.
///
/// Resources are sorted by descending duration (equal durations keep index
/// order); agent `i` receives that list rotated left by `i % M` positions.
pub fn rotation_solution(agents: usize, durations: &[f64]) -> Candidate {
    let m = durations.len();
    let mut sorted: Vec<usize> = (0..m).collect();
    sorted.sort_by(|&a, &b| durations[b].total_cmp(&durations[a]));

    let orders = (0..agents)
        .map(|agent| {
            let mut order = sorted.clone();
            if m > 0 {
                order.rotate_left(agent % m);
            }
            order
        })
        .collect();
    Candidate::new(orders)
}
