//! Shortest path over the neighbours map.
//!
//! Dijkstra and A* share one relaxation loop and differ only in the
//! priority key: `g` for Dijkstra, `g + |v - end|` for A*. The Euclidean
//! heuristic is consistent for Euclidean edge weights, so closed nodes are
//! never reopened.

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::Coord2D;
use crate::graph::NeighboursMap;

use super::types::{GeneratedPath, SearchAlgorithm};

/// A node in the search frontier
#[derive(Clone, Debug)]
struct SearchNode {
    coord: Coord2D,
    g_cost: f64, // Cost from start
    key: f64,    // Priority (g, or g + heuristic)
}

impl Eq for SearchNode {}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord && self.key == other.key
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior, ties by coordinate
        other
            .key
            .partial_cmp(&self.key)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SearchAlgorithm {
    #[inline]
    fn heuristic(self, from: Coord2D, goal: Coord2D) -> f64 {
        match self {
            SearchAlgorithm::Dijkstra => 0.0,
            SearchAlgorithm::AStar => from.distance(&goal),
        }
    }
}

/// Find the shortest path from `start` to `end`.
///
/// When `end` cannot be reached the result is the backtrace from `end`,
/// which is just `[end]`; check [`GeneratedPath::reaches`].
pub fn find_path(
    neighbours: &NeighboursMap,
    start: Coord2D,
    end: Coord2D,
    algorithm: SearchAlgorithm,
) -> GeneratedPath {
    let mut open = BinaryHeap::new();
    let mut closed: HashSet<Coord2D> = HashSet::new();
    let mut g_costs: HashMap<Coord2D, f64> = HashMap::new();
    let mut came_from: HashMap<Coord2D, Coord2D> = HashMap::new();
    let mut nodes_expanded = 0;

    g_costs.insert(start, 0.0);
    open.push(SearchNode {
        coord: start,
        g_cost: 0.0,
        key: algorithm.heuristic(start, end),
    });

    while let Some(current) = open.pop() {
        if !closed.insert(current.coord) {
            continue;
        }
        nodes_expanded += 1;

        if current.coord == end {
            break;
        }

        let Some(adjacent) = neighbours.get(&current.coord) else {
            continue;
        };

        for &next in adjacent {
            if closed.contains(&next) {
                continue;
            }
            let tentative = current.g_cost + current.coord.distance(&next);
            let better = g_costs.get(&next).is_none_or(|&g| tentative < g);
            if better {
                g_costs.insert(next, tentative);
                came_from.insert(next, current.coord);
                open.push(SearchNode {
                    coord: next,
                    g_cost: tentative,
                    key: tentative + algorithm.heuristic(next, end),
                });
            }
        }
    }

    let points = backtrace(&came_from, end);
    let cost = g_costs.get(&end).copied().unwrap_or(f64::INFINITY);

    if points.first() == Some(&start) {
        debug!(
            "[Search] {} found path: {} points, cost {:.2}, {} nodes expanded",
            algorithm,
            points.len(),
            cost,
            nodes_expanded
        );
    } else {
        debug!(
            "[Search] {} found no path from {} to {} ({} nodes expanded)",
            algorithm, start, end, nodes_expanded
        );
    }

    GeneratedPath {
        points,
        cost,
        nodes_expanded,
    }
}

/// Walk predecessors from `end` and reverse
fn backtrace(came_from: &HashMap<Coord2D, Coord2D>, end: Coord2D) -> Vec<Coord2D> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&prev) = came_from.get(&current) {
        trace!("[Search] {} <- {}", current, prev);
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
