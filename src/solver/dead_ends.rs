/*
dead_ends.rs

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

//! Classify dead ends and the no-choice corridors that lead into them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::generator::cells::{Direction, NUM_DIRECTIONS};
use crate::generator::grid::Grid;

/// Boolean grid with the same shape as the maze.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mask {
    /// Width of the mask in cells.
    width: usize,

    /// Height of the mask in cells.
    height: usize,

    /// Cell marks in row-major order.
    cells: Vec<bool>,
}

impl Mask {
    /// Create a mask with every cell set to the given value.
    pub fn new(width: usize, height: usize, value: bool) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Width of the mask in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the mask in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at the given position is marked.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x + y * self.width]
    }

    /// Mark or clear the cell at the given position.
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        self.cells[x + y * self.width] = value;
    }

    /// Whether the cell with the given row-major identifier is marked.
    pub fn get_id(&self, id: usize) -> bool {
        self.cells[id]
    }

    /// Mark or clear the cell with the given row-major identifier.
    pub fn set_id(&mut self, id: usize, value: bool) {
        self.cells[id] = value;
    }

    /// Number of marked cells.
    pub fn num_marked(&self) -> usize {
        self.cells.iter().filter(|marked| **marked).count()
    }

    /// Identifiers of the marked cells.
    pub fn marked_ids(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, marked)| **marked)
            .map(|(id, _)| id)
            .collect()
    }
}

/// Mark every cell with at most one open side.
///
/// Boundary edges count as walls, so dead ends along the borders and in the
/// corners classify like interior ones.
pub fn find_dead_ends(grid: &Grid) -> Mask {
    let mut mask: Mask = Mask::new(grid.width(), grid.height(), false);
    for id in 0..grid.num_cells() {
        if grid.walled_count(id) >= 3 {
            mask.set_id(id, true);
        }
    }
    mask
}

/// Mark every cell on a no-choice corridor that terminates in a dead end.
///
/// The flood starts from the dead ends, clears the protected cells
/// (typically the current start and end cells), and then grows along open
/// edges into unmarked, unprotected neighbors of degree two or less until a
/// full scan makes no change.
/// Junctions (three or more open sides) and protected cells stop the
/// flood, so a protected cell is never marked even when it is structurally
/// a dead end.
pub fn find_dead_end_passages(grid: &Grid, protected: &HashSet<usize>) -> Mask {
    let mut mask: Mask = find_dead_ends(grid);
    for cell in protected {
        mask.set_id(*cell, false);
    }

    let mut work_done: bool = true;
    while work_done {
        work_done = false;
        for id in 0..grid.num_cells() {
            if !mask.get_id(id) {
                continue;
            }
            for direction in (0..NUM_DIRECTIONS).filter_map(Direction::from_repr) {
                if let Some(next) = grid.neighbor_if_open(id, direction)
                    && !mask.get_id(next)
                    && !protected.contains(&next)
                    && grid.walled_count(next) >= 2
                {
                    mask.set_id(next, true);
                    work_done = true;
                }
            }
        }
    }
    mask
}
