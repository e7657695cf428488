use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::Graph;

/// A single cheapest route produced by the search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Gate codes from start to goal, inclusive at both ends.
    pub path: Vec<String>,
    /// Total travel cost in hyperspace units.
    pub total_hu: f64,
}

/// Cheapest known cost and predecessor for every gate reachable from a
/// fixed start gate.
///
/// The tree borrows its keys from the graph it was built against, so it
/// costs one map entry per settled gate rather than one string clone per
/// relaxation.
#[derive(Debug, Default)]
pub struct ShortestPathTree<'g> {
    start: Option<&'g str>,
    dist: HashMap<&'g str, f64>,
    parents: HashMap<&'g str, &'g str>,
}

impl<'g> ShortestPathTree<'g> {
    /// The start gate this tree was built from, when it exists in the graph.
    pub fn start(&self) -> Option<&str> {
        self.start
    }

    /// Total cost from the start to `code`, if the search reached it.
    ///
    /// The start gate itself reports a cost of zero.
    pub fn cost_to(&self, code: &str) -> Option<f64> {
        self.dist.get(code).copied()
    }

    /// Gate codes from the start to `code`, inclusive at both ends.
    ///
    /// Returns `None` for the start gate itself and for gates the search
    /// never reached.
    pub fn path_to(&self, code: &str) -> Option<Vec<String>> {
        let start = self.start?;
        let (&goal, _) = self.dist.get_key_value(code)?;
        if goal == start {
            return None;
        }

        let mut path = vec![goal];
        let mut current = goal;
        while current != start {
            current = self.parents.get(current).copied()?;
            path.push(current);
        }
        path.reverse();
        Some(path.into_iter().map(String::from).collect())
    }
}

/// Explore the whole graph from `start`, recording the cheapest cost and
/// predecessor for every reachable gate.
pub fn shortest_path_tree<'g>(graph: &'g Graph, start: &str) -> ShortestPathTree<'g> {
    run_dijkstra(graph, start, None)
}

/// Find the cheapest route from `start` to `goal` using Dijkstra's
/// algorithm, stopping as soon as the goal's cost is settled.
///
/// Returns `None` when the goal is the start itself or cannot be reached.
pub fn shortest_path(graph: &Graph, start: &str, goal: &str) -> Option<SearchResult> {
    if start == goal {
        return None;
    }

    let tree = run_dijkstra(graph, start, Some(goal));
    let total_hu = tree.cost_to(goal)?;
    let path = tree.path_to(goal)?;
    Some(SearchResult { path, total_hu })
}

fn run_dijkstra<'g>(graph: &'g Graph, start: &str, goal: Option<&str>) -> ShortestPathTree<'g> {
    let Some(start) = graph.key(start) else {
        return ShortestPathTree::default();
    };
    let goal = goal.and_then(|code| graph.key(code));

    let mut dist: HashMap<&'g str, f64> = HashMap::new();
    let mut parents: HashMap<&'g str, &'g str> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut seq = 0u64;

    dist.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0, seq));

    while let Some(entry) = queue.pop() {
        let Some(&settled) = dist.get(entry.node) else {
            continue;
        };
        // Skip entries superseded by a cheaper relaxation.
        if entry.cost.0 > settled {
            continue;
        }

        if goal == Some(entry.node) {
            break;
        }

        for edge in graph.neighbours(entry.node) {
            let target = edge.target.as_str();
            let next_cost = settled + edge.hu;
            if next_cost < *dist.get(target).unwrap_or(&f64::INFINITY) {
                seq += 1;
                dist.insert(target, next_cost);
                parents.insert(target, entry.node);
                queue.push(QueueEntry::new(target, next_cost, seq));
            }
        }
    }

    ShortestPathTree {
        start: Some(start),
        dist,
        parents,
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    cost: FloatOrd,
    seq: u64,
}

impl<'g> QueueEntry<'g> {
    fn new(node: &'g str, cost: f64, seq: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            seq,
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; equal
        // costs pop in discovery order to keep results deterministic.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_pops_lowest_cost_first() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new("far", 9.0, 0));
        queue.push(QueueEntry::new("near", 1.0, 1));
        queue.push(QueueEntry::new("mid", 4.0, 2));

        assert_eq!(queue.pop().unwrap().node, "near");
        assert_eq!(queue.pop().unwrap().node, "mid");
        assert_eq!(queue.pop().unwrap().node, "far");
    }

    #[test]
    fn queue_breaks_cost_ties_by_discovery_order() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new("second", 5.0, 2));
        queue.push(QueueEntry::new("first", 5.0, 1));

        assert_eq!(queue.pop().unwrap().node, "first");
        assert_eq!(queue.pop().unwrap().node, "second");
    }

    #[test]
    fn empty_tree_answers_nothing() {
        let tree = ShortestPathTree::default();
        assert_eq!(tree.start(), None);
        assert_eq!(tree.cost_to("A"), None);
        assert_eq!(tree.path_to("A"), None);
    }
}
