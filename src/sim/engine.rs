//! Event loop and input validation.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use super::event::Event;
use crate::error::{OpenShopError, Result};

/// Computes the makespan of `orders` under resource contention.
///
/// `orders[i]` is agent `i`'s visiting order and must be a permutation of
/// `0..durations.len()`. `durations[j]` is the service time of resource `j`
/// and must be finite and non-negative.
///
/// Returns the latest completion time over all services, or `0.0` when
/// there are no resources (or no agents).
///
/// # Errors
///
/// Returns an error when a duration is negative or non-finite, or when an
/// order is not a permutation of the resource indices.
///
/// # Examples
///
/// ```
/// use u_openshop::sim::makespan;
///
/// // One agent never waits: the makespan is its total service time.
/// let t = makespan(&[vec![2, 0, 1]], &[2.0, 3.0, 5.0]).unwrap();
/// assert_eq!(t, 10.0);
///
/// // Two agents on one resource are served back to back.
/// let t = makespan(&[vec![0], vec![0]], &[4.0]).unwrap();
/// assert_eq!(t, 8.0);
/// ```
pub fn makespan(orders: &[Vec<usize>], durations: &[f64]) -> Result<f64> {
    validate_durations(durations)?;
    validate_orders(orders, durations.len())?;
    Ok(makespan_unchecked(orders, durations))
}

/// Makespan of orders already known to be permutations of the resources.
pub(crate) fn makespan_unchecked(orders: &[Vec<usize>], durations: &[f64]) -> f64 {
    if durations.is_empty() {
        return 0.0;
    }
    Shop::new(orders, durations).run()
}

pub(crate) fn validate_durations(durations: &[f64]) -> Result<()> {
    for (index, &value) in durations.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(OpenShopError::InvalidDuration { index, value });
        }
    }
    Ok(())
}

fn validate_orders(orders: &[Vec<usize>], resources: usize) -> Result<()> {
    let mut seen = vec![false; resources];
    for (agent, order) in orders.iter().enumerate() {
        if order.len() != resources {
            return Err(OpenShopError::OrderLength {
                agent,
                expected: resources,
                found: order.len(),
            });
        }
        seen.iter_mut().for_each(|s| *s = false);
        for &resource in order {
            if resource >= resources {
                return Err(OpenShopError::ResourceOutOfRange {
                    agent,
                    resource,
                    resources,
                });
            }
            if std::mem::replace(&mut seen[resource], true) {
                return Err(OpenShopError::DuplicateResource { agent, resource });
            }
        }
    }
    Ok(())
}

/// Transient state of one simulation run.
struct Shop<'a> {
    orders: &'a [Vec<usize>],
    durations: &'a [f64],
    /// Number of resources each agent has started so far.
    cursor: Vec<usize>,
    /// Time each resource is (or was last) released.
    free_at: Vec<f64>,
    /// Agents waiting for each resource, in arrival order.
    queues: Vec<VecDeque<usize>>,
    events: BinaryHeap<Reverse<Event>>,
}

impl<'a> Shop<'a> {
    fn new(orders: &'a [Vec<usize>], durations: &'a [f64]) -> Self {
        let m = durations.len();
        Self {
            orders,
            durations,
            cursor: vec![0; orders.len()],
            free_at: vec![0.0; m],
            queues: vec![VecDeque::new(); m],
            events: BinaryHeap::with_capacity(orders.len()),
        }
    }

    fn run(mut self) -> f64 {
        for agent in 0..self.orders.len() {
            self.arrive(agent, 0.0);
        }

        let mut makespan = 0.0f64;
        while let Some(Reverse(event)) = self.events.pop() {
            let Event {
                time,
                agent,
                resource,
            } = event;
            makespan = makespan.max(time);

            match self.queues[resource].pop_front() {
                Some(next) => self.start(next, resource, time),
                None => self.free_at[resource] = time,
            }

            self.arrive(agent, time);
        }
        makespan
    }

    /// Sends `agent` to the next resource in its order, starting service if
    /// the resource is free by `now` and queueing otherwise.
    fn arrive(&mut self, agent: usize, now: f64) {
        let Some(&resource) = self.orders[agent].get(self.cursor[agent]) else {
            return;
        };
        if self.free_at[resource] <= now {
            self.start(agent, resource, now);
        } else {
            self.queues[resource].push_back(agent);
        }
    }

    fn start(&mut self, agent: usize, resource: usize, now: f64) {
        let end = now + self.durations[resource];
        self.free_at[resource] = end;
        self.cursor[agent] += 1;
        self.events.push(Reverse(Event::new(end, agent, resource)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_agent_sums_durations() {
        let durations = [2.0, 3.0, 5.0];
        for order in [vec![0, 1, 2], vec![2, 1, 0], vec![1, 2, 0]] {
            let t = makespan(&[order], &durations).unwrap();
            assert!((t - 10.0).abs() < 1e-12, "got {t}");
        }
    }

    #[test]
    fn test_single_resource_serializes_agents() {
        let t = makespan(&[vec![0], vec![0]], &[4.0]).unwrap();
        assert!((t - 8.0).abs() < 1e-12, "got {t}");
    }

    #[test]
    fn test_disjoint_start_resources() {
        // a0: r0 [0,3) then r1 [5,10); a1: r1 [0,5) then r0 [5,8)
        let t = makespan(&[vec![0, 1], vec![1, 0]], &[3.0, 5.0]).unwrap();
        assert!((t - 10.0).abs() < 1e-12, "got {t}");
    }

    #[test]
    fn test_shared_start_resource() {
        // a0: r0 [0,3) r1 [3,8); a1 waits, r0 [3,6) then waits for r1 [8,13)
        let t = makespan(&[vec![0, 1], vec![0, 1]], &[3.0, 5.0]).unwrap();
        assert!((t - 13.0).abs() < 1e-12, "got {t}");
    }

    #[test]
    fn test_no_resources() {
        assert_eq!(makespan(&[vec![], vec![]], &[]).unwrap(), 0.0);
        assert_eq!(makespan(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_no_agents() {
        assert_eq!(makespan(&[], &[1.0, 2.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_durations() {
        let t = makespan(&[vec![0, 1], vec![1, 0], vec![0, 1]], &[0.0, 0.0]).unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_zero_duration_mixed() {
        let t = makespan(&[vec![0, 1], vec![0, 1]], &[0.0, 2.0]).unwrap();
        assert!((t - 4.0).abs() < 1e-12, "got {t}");
    }

    #[test]
    fn test_idempotent() {
        let orders = vec![vec![2, 0, 1], vec![0, 1, 2], vec![1, 2, 0], vec![0, 2, 1]];
        let durations = [7.5, 1.25, 3.0];
        let first = makespan(&orders, &durations).unwrap();
        let second = makespan(&orders, &durations).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_rejects_short_order() {
        let err = makespan(&[vec![0, 1], vec![0]], &[1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            OpenShopError::OrderLength {
                agent: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = makespan(&[vec![0, 2]], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            OpenShopError::ResourceOutOfRange { resource: 2, .. }
        ));
    }

    #[test]
    fn test_rejects_repeat() {
        let err = makespan(&[vec![1, 1]], &[1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            OpenShopError::DuplicateResource {
                agent: 0,
                resource: 1
            }
        );
    }

    #[test]
    fn test_rejects_bad_durations() {
        assert!(matches!(
            makespan(&[vec![0, 1]], &[1.0, -2.0]),
            Err(OpenShopError::InvalidDuration { index: 1, .. })
        ));
        assert!(makespan(&[vec![0]], &[f64::NAN]).is_err());
        assert!(makespan(&[vec![0]], &[f64::INFINITY]).is_err());
    }

    fn instance() -> impl Strategy<Value = (Vec<Vec<usize>>, Vec<f64>)> {
        (1usize..6, 1usize..7).prop_flat_map(|(n, m)| {
            let identity: Vec<usize> = (0..m).collect();
            let orders = prop::collection::vec(Just(identity).prop_shuffle(), n);
            let durations = prop::collection::vec(0.0f64..50.0, m);
            (orders, durations)
        })
    }

    proptest! {
        #[test]
        fn prop_makespan_covers_each_agent((orders, durations) in instance()) {
            let t = makespan(&orders, &durations).unwrap();
            let own: f64 = durations.iter().sum();
            prop_assert!(t >= 0.0);
            prop_assert!(t + 1e-9 >= own, "makespan {} < agent load {}", t, own);
        }

        #[test]
        fn prop_makespan_deterministic((orders, durations) in instance()) {
            let a = makespan(&orders, &durations).unwrap();
            let b = makespan(&orders, &durations).unwrap();
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }

        #[test]
        fn prop_single_agent_exact((orders, durations) in instance()) {
            let t = makespan(&orders[..1], &durations).unwrap();
            let own: f64 = durations.iter().sum();
            prop_assert!((t - own).abs() < 1e-9);
        }
    }
}
