/*
cells.rs

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

//! Cells, roles, and directions in the Gridmaze grid.

use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use super::edges::EdgeId;

/// Number of edge slots per cell, one per [`Direction`].
pub const NUM_DIRECTIONS: usize = 4;

/// Role of a cell in the maze.
///
/// Every cell starts as a `Floor` cell.
/// The queries that select maze endpoints mark cells as `Start` or `End`;
/// see [`crate::maze::Maze::mark_endpoints`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Floor,
    Start,
    End,
}

/// Orthogonal direction from a cell to one of its neighbors.
///
/// The discriminant is the index of the matching edge slot in
/// [`Cell::edge`], so the four slots can be walked with
/// [`Direction::from_repr`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(usize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the coordinate offset of a one-cell move in this direction.
    ///
    /// The grid origin is the top-left corner, so `Up` decreases `y`.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Return the opposite direction.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Return the direction of the one-cell move between the two positions,
    /// or [`None`] if the positions are not orthogonally adjacent.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        let dx: i64 = to.0 as i64 - from.0 as i64;
        let dy: i64 = to.1 as i64 - from.1 as i64;
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One grid position.
///
/// The cell identifier is its row-major index in the grid's backing vector;
/// cells do not carry a separate identity counter.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cell {
    /// Column of the cell, from the left.
    x: usize,

    /// Row of the cell, from the top.
    y: usize,

    /// Role of the cell. The only mutable part of a cell after construction.
    role: Role,

    /// Edge arena identifiers, indexed by [`Direction`] discriminant.
    ///
    /// The slot for an interior edge holds the same identifier as the
    /// matching slot of the adjacent cell.
    edges: [EdgeId; NUM_DIRECTIONS],
}

impl Cell {
    /// Create a `Floor` cell at the given position.
    ///
    /// The edge slots are placeholders until the grid populates its arena;
    /// see [`crate::generator::grid::Grid::new`].
    pub(crate) fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            role: Role::Floor,
            edges: [EdgeId::MAX; NUM_DIRECTIONS],
        }
    }

    /// Column of the cell, from the left.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row of the cell, from the top.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Position of the cell as an `(x, y)` pair.
    pub fn pos(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Role of the cell.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Set the role of the cell.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Return the arena identifier of the edge in the given direction.
    pub fn edge(&self, direction: Direction) -> EdgeId {
        self.edges[direction as usize]
    }

    /// Assign the arena identifier of the edge in the given direction.
    pub(crate) fn set_edge(&mut self, direction: Direction, edge: EdgeId) {
        self.edges[direction as usize] = edge;
    }
}
