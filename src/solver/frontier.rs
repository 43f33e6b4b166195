/*
frontier.rs

Copyright 2025 Hervé Quatremain

This file is part of Gridmaze.

Gridmaze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridmaze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridmaze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Multi-source, multi-sink frontier search.

use log::debug;
use std::collections::HashSet;

use crate::generator::cells::Role;
use crate::generator::grid::Grid;
use crate::generator::path::PathSet;

/// Default cap on the number of reported walks, guarding against runaway
/// enumeration on grids with cycles.
pub const MAX_RESULTS: usize = 1000;

/// Return the walks that begin at a start cell and terminate at an end
/// cell.
///
/// All the candidate walks are expanded simultaneously, one step per layer.
/// A walk whose tip reaches an end cell is reported at that layer boundary
/// and leaves the frontier; callers must not expect expansion past an end
/// cell.
/// The search stops when the frontier is exhausted or when `max_results`
/// walks have been collected; in the latter case the result is a truncated,
/// not necessarily complete, solution set.
/// This is the normal budget termination, not an error.
///
/// On a generated grid the open edges form a spanning tree and at most one
/// walk joins any two cells, but the layered expansion is kept as is
/// because the same code runs on externally supplied layouts where several
/// starts, several ends, and true branching are possible.
///
/// An empty `starts` or `ends` set produces an empty result.
/// A start cell that cannot reach any end cell simply never contributes a
/// walk: its candidates exhaust the reachable cells under the no-repeat
/// rule and disappear.
pub fn search(grid: &Grid, starts: &[usize], ends: &[usize], max_results: usize) -> Vec<PathSet> {
    let end_set: HashSet<usize> = ends.iter().copied().collect();
    let mut solutions: Vec<PathSet> = Vec::new();
    if end_set.is_empty() {
        return solutions;
    }

    let mut frontier: Vec<PathSet> = starts.iter().map(|start| PathSet::new(*start)).collect();
    while !frontier.is_empty() && solutions.len() < max_results {
        let mut next: Vec<PathSet> = Vec::new();
        for path in &frontier {
            next.append(&mut path.expansions(grid));
        }

        frontier = Vec::with_capacity(next.len());
        for path in next {
            let at_end: bool = path
                .current_pos()
                .is_some_and(|tip| end_set.contains(&tip));
            if at_end {
                solutions.push(path);
            } else {
                frontier.push(path);
            }
        }
        debug!(
            "Frontier layer: {} live walks, {} solutions",
            frontier.len(),
            solutions.len()
        );
    }

    solutions.truncate(max_results);
    solutions
}

/// Return the shortest walk between the two cells, or [`None`] when no walk
/// joins them.
///
/// An absent result is the documented "no path" outcome, never an error;
/// callers must branch on it.
/// Equal-length candidates resolve to the earliest-found one.
pub fn find_shortest(grid: &Grid, from: usize, to: usize) -> Option<PathSet> {
    let mut results: Vec<PathSet> = search(grid, &[from], &[to], MAX_RESULTS);
    results.sort_by_key(PathSet::len);
    results.into_iter().next()
}

/// Return every walk from a `Start` cell to an `End` cell, ordered by
/// ascending length.
pub fn solve_all(grid: &Grid) -> Vec<PathSet> {
    let starts: Vec<usize> = grid.find_all(Role::Start);
    let ends: Vec<usize> = grid.find_all(Role::End);
    let mut results: Vec<PathSet> = search(grid, &starts, &ends, MAX_RESULTS);
    results.sort_by_key(PathSet::len);
    results
}
