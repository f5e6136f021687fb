//! Grid pathfinding
//!
//! `find_path` is A* over a per-cell cost grid (0 = impassable) with
//! cardinal steps costing 2 and diagonal steps 3, times the cost of the cell
//! being entered. `distance_map` is a multi-source breadth-first flood with
//! uniform step cost, used for auto-exploration.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::core::types::{Point, DIRECTIONS};
use crate::spatial::grid::Grid;

const CARDINAL_COST: u32 = 2;
const DIAGONAL_COST: u32 = 3;

/// Node in the A* open set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathNode {
    coord: Point,
    g_cost: u32,
    f_cost: u32,
}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap; coordinates keep ties deterministic
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Octile estimate scaled to the step costs. Never overestimates because
/// every enterable cell costs at least 1.
fn heuristic(a: Point, b: Point) -> u32 {
    let dx = (a.0 - b.0).unsigned_abs();
    let dy = (a.1 - b.1).unsigned_abs();
    let diagonal = dx.min(dy);
    let straight = dx.max(dy) - diagonal;
    diagonal * DIAGONAL_COST + straight * CARDINAL_COST
}

/// Find the cheapest path from `start` to `goal`.
///
/// Returns the full path including both endpoints, or None if the goal is
/// unreachable or impassable.
pub fn find_path(cost: &Grid<u32>, start: Point, goal: Point) -> Option<Vec<Point>> {
    if !cost.in_bounds(start.0, start.1) || !cost.in_bounds(goal.0, goal.1) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut g_scores: Grid<u32> = Grid::new(cost.width, cost.height, u32::MAX);
    let mut came_from: Grid<Option<Point>> = Grid::new(cost.width, cost.height, None);
    let mut open_set = BinaryHeap::new();

    g_scores.set(start.0, start.1, 0);
    open_set.push(PathNode {
        coord: start,
        g_cost: 0,
        f_cost: heuristic(start, goal),
    });

    while let Some(current) = open_set.pop() {
        if current.coord == goal {
            return Some(reconstruct_path(&came_from, goal));
        }

        let best_g = g_scores.get(current.coord.0, current.coord.1).copied();
        if best_g.is_some_and(|g| current.g_cost > g) {
            continue; // stale entry
        }

        for &(dx, dy) in &DIRECTIONS {
            let next = (current.coord.0 + dx, current.coord.1 + dy);
            let Some(&cell_cost) = cost.get(next.0, next.1) else {
                continue;
            };
            if cell_cost == 0 {
                continue;
            }

            let step = if dx != 0 && dy != 0 {
                DIAGONAL_COST
            } else {
                CARDINAL_COST
            };
            let tentative_g = current.g_cost.saturating_add(step * cell_cost);
            let neighbor_g = g_scores.get(next.0, next.1).copied().unwrap_or(u32::MAX);

            if tentative_g < neighbor_g {
                came_from.set(next.0, next.1, Some(current.coord));
                g_scores.set(next.0, next.1, tentative_g);
                open_set.push(PathNode {
                    coord: next,
                    g_cost: tentative_g,
                    f_cost: tentative_g + heuristic(next, goal),
                });
            }
        }
    }

    None
}

fn reconstruct_path(came_from: &Grid<Option<Point>>, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&Some(prev)) = came_from.get(current.0, current.1) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Sum of step costs along a path, as `find_path` would charge it
pub fn path_cost(cost: &Grid<u32>, path: &[Point]) -> u32 {
    path.windows(2)
        .map(|step| {
            let (a, b) = (step[0], step[1]);
            let unit = if a.0 != b.0 && a.1 != b.1 {
                DIAGONAL_COST
            } else {
                CARDINAL_COST
            };
            unit * cost.get(b.0, b.1).copied().unwrap_or(0)
        })
        .sum()
}

/// Breadth-first distances from every source over passable cells.
/// Unreached cells stay `None`.
pub fn distance_map(
    width: i32,
    height: i32,
    sources: impl IntoIterator<Item = Point>,
    passable: &dyn Fn(i32, i32) -> bool,
) -> Grid<Option<u32>> {
    let mut distances: Grid<Option<u32>> = Grid::new(width, height, None);
    let mut queue = VecDeque::new();

    for source in sources {
        if distances.in_bounds(source.0, source.1) && distances.is_none_at(source) {
            distances.set(source.0, source.1, Some(0));
            queue.push_back((source, 0));
        }
    }

    while let Some(((x, y), distance)) = queue.pop_front() {
        for &(dx, dy) in &DIRECTIONS {
            let (nx, ny) = (x + dx, y + dy);
            if !distances.in_bounds(nx, ny) || !distances.is_none_at((nx, ny)) {
                continue;
            }
            if !passable(nx, ny) {
                continue;
            }
            distances.set(nx, ny, Some(distance + 1));
            queue.push_back(((nx, ny), distance + 1));
        }
    }

    distances
}

impl Grid<Option<u32>> {
    fn is_none_at(&self, p: Point) -> bool {
        matches!(self.get(p.0, p.1), Some(None))
    }
}
