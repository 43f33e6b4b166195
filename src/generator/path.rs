/*
path.rs

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

//! One candidate walk through the maze.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::cells::{Direction, NUM_DIRECTIONS};
use super::grid::Grid;

/// An ordered, non-repeating sequence of cells: one walk through the grid.
///
/// The first cell is the origin of the walk and the last cell is its current
/// tip.
/// Consecutive cells are orthogonal neighbors joined by an open edge; the
/// no-repeat rule is enforced during expansion, see [`PathSet::expansions`].
///
/// Walks are copy-on-append: [`PathSet::extended`] clones the walk and
/// appends one cell, so a parent walk is never mutated when the search
/// branches from it.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct PathSet {
    /// Walk as an ordered list of cell identifiers.
    cells: Vec<usize>,

    /// Visited-cell index. Instead of looking for the cell in the
    /// [`PathSet::cells`] vector, this [`std::collections::HashSet`] speeds
    /// up the lookup.
    visited: HashSet<usize>,
}

impl PartialEq for PathSet {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl PathSet {
    /// Create a one-cell walk at the given origin.
    pub fn new(origin: usize) -> Self {
        let mut path: PathSet = Self {
            cells: Vec::new(),
            visited: HashSet::new(),
        };
        path.cells.push(origin);
        path.visited.insert(origin);
        path
    }

    /// Number of cells in the walk.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the walk holds no cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell is in the walk.
    pub fn contains(&self, cell: usize) -> bool {
        self.visited.contains(&cell)
    }

    /// Return the walk as a slice of cell identifiers.
    pub fn get(&self) -> &[usize] {
        &self.cells
    }

    /// Return the origin of the walk.
    pub fn origin(&self) -> Option<usize> {
        self.cells.first().copied()
    }

    /// Return the tip of the walk.
    pub fn current_pos(&self) -> Option<usize> {
        self.cells.last().copied()
    }

    /// Return the position of the cell in the walk.
    pub fn index_of(&self, cell: usize) -> Option<usize> {
        self.cells.iter().position(|c| *c == cell)
    }

    /// Return a new walk extended by one cell. The parent walk is not
    /// modified.
    pub fn extended(&self, cell: usize) -> PathSet {
        debug_assert!(!self.contains(cell), "cell {cell} repeats in the walk");
        let mut child: PathSet = self.clone();
        child.cells.push(cell);
        child.visited.insert(cell);
        child
    }

    /// Return the one-step extensions of the walk.
    ///
    /// A neighbor of the tip is eligible if the shared edge is open and the
    /// cell does not already occur in this walk, so a candidate walk can
    /// never intersect itself.
    pub fn expansions(&self, grid: &Grid) -> Vec<PathSet> {
        let mut result: Vec<PathSet> = Vec::with_capacity(NUM_DIRECTIONS);
        let Some(tip) = self.current_pos() else {
            return result;
        };
        for direction in (0..NUM_DIRECTIONS).filter_map(Direction::from_repr) {
            if let Some(next) = grid.neighbor_if_open(tip, direction)
                && !self.contains(next)
            {
                result.push(self.extended(next));
            }
        }
        result
    }

    /// Return the arrow character for the cell at the given position in the
    /// walk, for textual displays.
    ///
    /// The arrow points at the next cell of the walk; the last cell reuses
    /// the direction of the move that reached it.
    pub fn arrow_for_pos(&self, grid: &Grid, pos: usize) -> char {
        if self.cells.is_empty() {
            return ' ';
        }
        let pos: usize = pos.min(self.cells.len() - 1);
        let direction: Option<Direction> = if pos + 1 < self.cells.len() {
            Direction::between(
                grid.pos_of(self.cells[pos]),
                grid.pos_of(self.cells[pos + 1]),
            )
        } else if pos > 0 {
            Direction::between(
                grid.pos_of(self.cells[pos - 1]),
                grid.pos_of(self.cells[pos]),
            )
        } else {
            None
        };
        match direction {
            Some(Direction::Up) => '↑',
            Some(Direction::Down) => '↓',
            Some(Direction::Left) => '←',
            Some(Direction::Right) => '→',
            None => ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_appends_without_touching_the_parent() {
        let parent: PathSet = PathSet::new(0).extended(1);
        let child: PathSet = parent.extended(2);

        assert_eq!(parent.get(), &[0, 1]);
        assert_eq!(parent.current_pos(), Some(1));
        assert_eq!(child.get(), &[0, 1, 2]);
        assert_eq!(child.current_pos(), Some(2));
        assert!(child.contains(2));
        assert!(!parent.contains(2));
    }

    #[test]
    fn origin_and_tip_of_a_single_cell_walk() {
        let path: PathSet = PathSet::new(7);
        assert_eq!(path.origin(), Some(7));
        assert_eq!(path.current_pos(), Some(7));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn index_of_reports_the_walk_order() {
        let path: PathSet = PathSet::new(3).extended(4).extended(5);
        assert_eq!(path.index_of(4), Some(1));
        assert_eq!(path.index_of(9), None);
    }
}
