//! Service-completion events.

use std::cmp::Ordering;

/// Completion of one agent's service on one resource.
///
/// Events are totally ordered by completion time, then agent index, then
/// resource index. The simulation pops events in ascending order of this
/// key, so equal timestamps (zero-length services, simultaneous
/// completions) resolve identically on every run.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// Completion time.
    pub time: f64,
    /// Agent that was being served.
    pub agent: usize,
    /// Resource that just became available.
    pub resource: usize,
}

impl Event {
    pub fn new(time: f64, agent: usize, resource: usize) -> Self {
        Self {
            time,
            agent,
            resource,
        }
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then_with(|| self.agent.cmp(&other.agent))
            .then_with(|| self.resource.cmp(&other.resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    #[test]
    fn test_orders_by_time_first() {
        assert!(Event::new(1.0, 5, 5) < Event::new(2.0, 0, 0));
    }

    #[test]
    fn test_ties_broken_by_agent_then_resource() {
        assert!(Event::new(3.0, 0, 9) < Event::new(3.0, 1, 0));
        assert!(Event::new(3.0, 1, 0) < Event::new(3.0, 1, 2));
        assert_eq!(Event::new(3.0, 1, 2), Event::new(3.0, 1, 2));
    }

    #[test]
    fn test_min_heap_pop_order() {
        let mut heap = BinaryHeap::new();
        for e in [
            Event::new(4.0, 0, 1),
            Event::new(2.0, 1, 0),
            Event::new(2.0, 0, 2),
            Event::new(0.0, 3, 3),
            Event::new(2.0, 0, 1),
        ] {
            heap.push(Reverse(e));
        }

        let popped: Vec<(f64, usize, usize)> = std::iter::from_fn(|| heap.pop())
            .map(|Reverse(e)| (e.time, e.agent, e.resource))
            .collect();

        assert_eq!(
            popped,
            vec![
                (0.0, 3, 3),
                (2.0, 0, 1),
                (2.0, 0, 2),
                (2.0, 1, 0),
                (4.0, 0, 1),
            ]
        );
    }
}
