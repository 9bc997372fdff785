//! A* search over the tile grid, filtered live through the wall rules.
//!
//! Search bookkeeping lives in a [`SearchContext`] created per query, so tiles never carry
//! transient state and a shared `&Grid` can serve any number of queries.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pathfinding::prelude::bfs_reach;
use tracing::{debug, warn};

use crate::constants::{HEURISTIC_SCALE, TILE_SIZE};
use crate::map::access::{is_traversable, traversable_neighbors};
use crate::map::grid::Grid;
use crate::map::tile::TileId;

/// A route through the grid, begin and destination inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub tiles: Vec<TileId>,
    /// Sum of edge costs along the route.
    pub cost: f32,
}

impl Path {
    /// Number of steps taken (one less than the number of tiles).
    pub fn steps(&self) -> usize {
        self.tiles.len().saturating_sub(1)
    }
}

/// The outcome of a path query.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// A route was found.
    Found(Path),
    /// The search exhausted every reachable tile without meeting the destination.
    NoRoute,
    /// An endpoint was missing or unknown; nothing was searched.
    NothingToSolve,
}

impl Solution {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Solution::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Solution::Found(_))
    }
}

/// Per-tile search bookkeeping for one query.
#[derive(Debug, Clone, Copy)]
pub struct SearchRecord {
    pub visited: bool,
    /// Best known cost from the begin tile.
    pub local: f32,
    /// `local` plus the heuristic estimate to the destination.
    pub global: f32,
    pub parent: Option<TileId>,
}

impl Default for SearchRecord {
    fn default() -> Self {
        Self {
            visited: false,
            local: f32::INFINITY,
            global: f32::INFINITY,
            parent: None,
        }
    }
}

/// Search state for a single query, indexed by [`TileId`].
#[derive(Debug, Clone)]
pub struct SearchContext {
    records: Vec<SearchRecord>,
}

impl SearchContext {
    /// Creates a context with every record reset.
    pub fn new(tiles: usize) -> Self {
        Self {
            records: vec![SearchRecord::default(); tiles],
        }
    }

    pub fn record(&self, id: TileId) -> Option<&SearchRecord> {
        self.records.get(id)
    }

    fn is_visited(&self, id: TileId) -> bool {
        self.records.get(id).is_some_and(|record| record.visited)
    }

    /// Walks parent links back from `destination` and returns the route in travel order.
    fn reconstruct(&self, destination: TileId) -> Vec<TileId> {
        let mut route = vec![destination];
        let mut node = destination;
        while let Some(parent) = self.records.get(node).and_then(|record| record.parent) {
            route.push(parent);
            node = parent;
        }
        route.reverse();
        route
    }
}

/// An open-set entry. Ordered so the [`BinaryHeap`] pops the smallest score first, oldest first
/// on ties.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    global: f32,
    sequence: u64,
    tile: TileId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .global
            .total_cmp(&self.global)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Straight-line distance between two tiles' world positions, in edge-cost units.
pub fn heuristic(grid: &Grid, a: TileId, b: TileId) -> f32 {
    match (grid.tile(a), grid.tile(b)) {
        (Some(a), Some(b)) => a.position.distance(b.position) * HEURISTIC_SCALE,
        _ => f32::INFINITY,
    }
}

/// The cost of moving between two linked tiles; `None` if they are not linked.
pub fn edge_cost(grid: &Grid, a: TileId, b: TileId) -> Option<f32> {
    grid.tile(a)?.neighbors().direction_to(b).map(|_| TILE_SIZE)
}

/// Finds the cheapest route from `begin` to `destination`.
///
/// Adjacent, traversable endpoints short-circuit to a two-tile path. Otherwise runs A* with a
/// lazily filtered open set: duplicates may be queued and visited entries are dropped when popped.
pub fn solve(grid: &Grid, begin: Option<TileId>, destination: Option<TileId>) -> Solution {
    let (Some(begin), Some(destination)) = (begin, destination) else {
        warn!("Cannot find path for invalid tiles");
        return Solution::NothingToSolve;
    };
    if grid.tile(begin).is_none() || grid.tile(destination).is_none() {
        warn!(begin, destination, "Cannot find path for unknown tiles");
        return Solution::NothingToSolve;
    }

    if begin == destination {
        return Solution::Found(Path {
            tiles: vec![begin],
            cost: 0.0,
        });
    }

    if is_traversable(grid, begin, destination) {
        debug!(begin, destination, cost = TILE_SIZE, "Direct connection");
        return Solution::Found(Path {
            tiles: vec![begin, destination],
            cost: TILE_SIZE,
        });
    }

    let mut context = SearchContext::new(grid.len());
    let mut open = BinaryHeap::new();
    let mut sequence = 0u64;

    context.records[begin].local = 0.0;
    context.records[begin].global = heuristic(grid, begin, destination);
    open.push(OpenEntry {
        global: context.records[begin].global,
        sequence,
        tile: begin,
    });

    let mut current = begin;
    while current != destination {
        let Some(entry) = open.pop() else {
            break;
        };
        if context.is_visited(entry.tile) {
            continue;
        }

        current = entry.tile;
        context.records[current].visited = true;

        for neighbor in traversable_neighbors(grid, current) {
            if context.is_visited(neighbor) {
                continue;
            }
            let Some(cost) = edge_cost(grid, current, neighbor) else {
                continue;
            };

            let candidate = context.records[current].local + cost;
            if candidate < context.records[neighbor].local {
                let record = &mut context.records[neighbor];
                record.parent = Some(current);
                record.local = candidate;
                record.global = candidate + heuristic(grid, neighbor, destination);
            }

            sequence += 1;
            open.push(OpenEntry {
                global: context.records[neighbor].global,
                sequence,
                tile: neighbor,
            });
        }
    }

    if !context.is_visited(destination) {
        warn!(begin, destination, "Path not found");
        return Solution::NoRoute;
    }

    let tiles = context.reconstruct(destination);
    let cost = context.records[destination].local;
    debug!(steps = tiles.len(), cost, "Path found");

    Solution::Found(Path { tiles, cost })
}

/// Every tile reachable from `start` under the current wall layout, `start` included.
pub fn reachable_from(grid: &Grid, start: TileId) -> Vec<TileId> {
    if grid.tile(start).is_none() {
        return Vec::new();
    }
    bfs_reach(start, |&id| traversable_neighbors(grid, id).collect::<Vec<_>>()).collect()
}
