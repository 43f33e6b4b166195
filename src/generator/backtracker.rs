/*
backtracker.rs

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

//! Carve a spanning tree through a grid with a randomized backtracking walk.

use chrono::Utc;
use log::{Level, debug, log_enabled};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use super::cells::{Direction, NUM_DIRECTIONS};
use super::grid::Grid;

/// Randomized-backtracker maze carver.
///
/// The walk is iterative with an explicit stack, so deep mazes cannot
/// overflow the call stack.
/// The random source is seeded from [`Backtracker::seed`]: the same seed
/// always carves the same maze.
pub struct Backtracker {
    /// Seed of the random source, stored for display and reproducibility.
    pub seed: u64,

    /// Number of walls removed during the last run.
    pub steps: usize,

    /// Number of backtracking pops during the last run.
    pub backtracks: usize,

    /// Duration in seconds of the last run.
    pub duration: f32,
}

impl Backtracker {
    /// Create a carver with an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            steps: 0,
            backtracks: 0,
            duration: 0.0,
        }
    }

    /// Create a carver with a seed derived from the wall clock, for "new
    /// maze" requests.
    pub fn from_clock() -> Self {
        Self::from_seed(Utc::now().timestamp_micros() as u64)
    }

    /// Carve a maze into the grid.
    ///
    /// The grid must be fully walled (freshly built or reset).
    /// On return, every cell is reachable from every other cell by exactly
    /// one simple walk, and exactly `width * height - 1` walls have been
    /// removed.
    /// Carving a zero-sized grid is a no-op.
    pub fn carve(&mut self, grid: &mut Grid) {
        self.steps = 0;
        self.backtracks = 0;
        self.duration = 0.0;

        let total: usize = grid.num_cells();
        if total == 0 {
            return;
        }

        let start: Instant = Instant::now();
        let mut rng: StdRng = StdRng::seed_from_u64(self.seed);
        let mut visited: Vec<bool> = vec![false; total];
        let mut stack: Vec<usize> = Vec::with_capacity(total);

        // Starting position
        let x: usize = rng.random_range(0..grid.width());
        let y: usize = rng.random_range(0..grid.height());
        let mut current: usize = grid.id_at(x, y);
        visited[current] = true;
        let mut visit_count: usize = 1;

        while visit_count < total {
            let moves: Vec<(Direction, usize)> = unvisited_neighbors(grid, current, &visited);
            if let Some((direction, next)) = moves.choose(&mut rng) {
                // Remove the wall between the current cell and the chosen
                // neighbor, then move to the neighbor.
                stack.push(current);
                grid.remove_wall(current, *direction);
                current = *next;
                visited[current] = true;
                visit_count += 1;
                self.steps += 1;
            } else if let Some(previous) = stack.pop() {
                current = previous;
                self.backtracks += 1;
            } else {
                // The stack is empty but cells remain unvisited. This cannot
                // happen on a connected rectangular grid; if it ever does,
                // jump to a random unvisited cell without connecting it
                // rather than loop forever.
                let unvisited: Vec<usize> = (0..total).filter(|id| !visited[*id]).collect();
                match unvisited.choose(&mut rng) {
                    Some(id) => {
                        debug!("Stack exhausted with {} unvisited cells", unvisited.len());
                        current = *id;
                        visited[current] = true;
                        visit_count += 1;
                    }
                    None => break,
                }
            }
        }

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Carved {total} cells with seed {}: {} steps, {} backtracks, {}s",
            self.seed, self.steps, self.backtracks, self.duration
        );
        if log_enabled!(Level::Debug) {
            grid.edges().debug();
        }
    }
}

/// Return the unvisited orthogonal neighbors of the cell, with the direction
/// that reaches each of them.
fn unvisited_neighbors(grid: &Grid, id: usize, visited: &[bool]) -> Vec<(Direction, usize)> {
    let mut moves: Vec<(Direction, usize)> = Vec::with_capacity(NUM_DIRECTIONS);
    for direction in (0..NUM_DIRECTIONS).filter_map(Direction::from_repr) {
        if let Some(neighbor) = grid.neighbor_id(id, direction)
            && !visited[neighbor]
        {
            moves.push((direction, neighbor));
        }
    }
    moves
}
