//! Per-agent ordering set.

use rand::Rng;

/// One complete set of per-agent resource orderings.
///
/// `orders()[i]` is the sequence in which agent `i` visits the resources.
/// Candidates produced by this crate always hold permutations of
/// `0..resources`; [`crate::sim::makespan`] checks the invariant for
/// candidates built by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    orders: Vec<Vec<usize>>,
}

impl Candidate {
    /// Wraps a set of orders.
    pub fn new(orders: Vec<Vec<usize>>) -> Self {
        Self { orders }
    }

    /// Number of agents.
    pub fn agents(&self) -> usize {
        self.orders.len()
    }

    /// Visiting orders, indexed by agent.
    pub fn orders(&self) -> &[Vec<usize>] {
        &self.orders
    }

    /// Agent `agent`'s visiting order.
    pub fn order(&self, agent: usize) -> &[usize] {
        &self.orders[agent]
    }

    pub fn into_orders(self) -> Vec<Vec<usize>> {
        self.orders
    }

    /// Swaps two positions within one agent's order.
    pub fn swap(&mut self, agent: usize, a: usize, b: usize) {
        self.orders[agent].swap(a, b);
    }

    /// Returns a copy with one random transposition applied.
    ///
    /// Picks an agent uniformly, then two distinct positions uniformly, and
    /// swaps them. When there are no agents or fewer than two positions the
    /// move is a no-op and the copy is returned unchanged.
    pub fn with_random_swap<R: Rng>(&self, rng: &mut R) -> Self {
        let mut next = self.clone();
        if next.orders.is_empty() {
            return next;
        }
        let agent = rng.random_range(0..next.orders.len());
        let len = next.orders[agent].len();
        if len < 2 {
            return next;
        }
        let a = rng.random_range(0..len);
        let mut b = rng.random_range(0..len - 1);
        if b >= a {
            b += 1;
        }
        next.swap(agent, a, b);
        next
    }
}

impl From<Vec<Vec<usize>>> for Candidate {
    fn from(orders: Vec<Vec<usize>>) -> Self {
        Self::new(orders)
    }
}
