/*
grid.rs

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

//! The rectangular grid of cells and its shared wall relation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::cells::{Cell, Direction, NUM_DIRECTIONS, Role};
use super::edges::{EdgeId, Edges};

/// Type of errors raised by the checked grid accessors.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// Coordinate outside the grid. Signals a caller programming error;
    /// positions are never silently clamped.
    InvalidPosition { x: usize, y: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::InvalidPosition { x, y } => {
                write!(f, "position ({x}, {y}) is outside the grid")
            }
        }
    }
}

impl Error for GridError {}

/// Rectangular array of cells with one wall slot between every pair of
/// orthogonally adjacent cells.
///
/// Cells are stored row-major; the index of a cell in the backing vector is
/// its identifier.
/// The wall between two adjacent cells is a single [`Edges`] arena entry
/// referenced by both cells, and the edges along the outside of the grid are
/// boundary entries that stay walled forever.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Grid {
    /// Width of the grid in cells.
    width: usize,

    /// Height of the grid in cells.
    height: usize,

    /// Cells in row-major order.
    cells: Vec<Cell>,

    /// Wall arena shared by the cells.
    edges: Edges,
}

impl Grid {
    /// Build a fully walled grid.
    ///
    /// A zero-width or zero-height grid holds no cells; generation and
    /// searches on it are documented no-ops.
    pub fn new(width: usize, height: usize) -> Self {
        let mut grid: Grid = Self {
            width,
            height,
            cells: Vec::new(),
            edges: Edges::new(),
        };
        grid.rebuild();
        grid
    }

    /// Rebuild the grid to its fully walled state, discarding any prior
    /// generation and all cell roles.
    pub fn reset(&mut self) {
        self.rebuild();
    }

    // Create the cells, then populate the edge slots. The left and top slots
    // of a cell reuse the edge created by the neighbor, so every interior
    // edge exists once in the arena and is referenced from both sides.
    fn rebuild(&mut self) {
        let width: usize = self.width;
        let height: usize = self.height;

        self.cells = (0..width * height)
            .map(|id| Cell::new(id % width, id / width))
            .collect();
        self.edges.clear();

        for x in 0..width {
            for y in 0..height {
                let id: usize = x + y * width;

                let left: EdgeId = if x > 0 {
                    self.cells[id - 1].edge(Direction::Right)
                } else {
                    self.edges.add(id, None)
                };
                let top: EdgeId = if y > 0 {
                    self.cells[id - width].edge(Direction::Down)
                } else {
                    self.edges.add(id, None)
                };
                let right: EdgeId = self
                    .edges
                    .add(id, if x + 1 < width { Some(id + 1) } else { None });
                let bottom: EdgeId = self
                    .edges
                    .add(id, if y + 1 < height { Some(id + width) } else { None });

                let cell: &mut Cell = &mut self.cells[id];
                cell.set_edge(Direction::Left, left);
                cell.set_edge(Direction::Up, top);
                cell.set_edge(Direction::Right, right);
                cell.set_edge(Direction::Down, bottom);
            }
        }
    }

    /// Width of the grid in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Whether the position is inside the grid.
    pub fn is_valid(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Identifier of the cell at the given position.
    pub fn id_at(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    /// Position of the cell with the given identifier.
    pub fn pos_of(&self, id: usize) -> (usize, usize) {
        (id % self.width, id / self.width)
    }

    /// Return the cell at the given position.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid. Use [`Grid::try_cell`]
    /// for a checked access.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.id_at(x, y)]
    }

    /// Return the cell at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if the position is outside the
    /// grid.
    pub fn try_cell(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        if self.is_valid(x, y) {
            Ok(&self.cells[self.id_at(x, y)])
        } else {
            Err(GridError::InvalidPosition { x, y })
        }
    }

    /// Return the cell with the given identifier.
    pub fn cell_by_id(&self, id: usize) -> &Cell {
        &self.cells[id]
    }

    /// Set the role of the cell with the given identifier.
    pub fn set_role(&mut self, id: usize, role: Role) {
        self.cells[id].set_role(role);
    }

    /// Reset every cell back to the `Floor` role.
    pub fn clear_roles(&mut self) {
        for cell in &mut self.cells {
            cell.set_role(Role::Floor);
        }
    }

    /// Return the identifiers of all the cells with the given role.
    pub fn find_all(&self, role: Role) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.role() == role)
            .map(|(id, _)| id)
            .collect()
    }

    /// Wall arena of the grid.
    pub fn edges(&self) -> &Edges {
        &self.edges
    }

    /// Identifier of the adjacent cell in the given direction, wall or not,
    /// or [`None`] at the grid boundary.
    pub fn neighbor_id(&self, id: usize, direction: Direction) -> Option<usize> {
        let (x, y) = self.pos_of(id);
        let (dx, dy) = direction.delta();
        let nx: i64 = x as i64 + dx;
        let ny: i64 = y as i64 + dy;
        if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
            None
        } else {
            Some(self.id_at(nx as usize, ny as usize))
        }
    }

    /// Whether the edge of the cell in the given direction is open.
    ///
    /// Boundary edges are never open.
    pub fn is_open(&self, id: usize, direction: Direction) -> bool {
        !self.edges.is_wall(self.cells[id].edge(direction))
    }

    /// Identifier of the adjacent cell in the given direction, but only if
    /// the shared edge is not a wall.
    pub fn neighbor_if_open(&self, id: usize, direction: Direction) -> Option<usize> {
        if self.is_open(id, direction) {
            self.neighbor_id(id, direction)
        } else {
            None
        }
    }

    /// Number of walled edges around the cell.
    ///
    /// Boundary edges count as walls, so a corner cell with one open side
    /// reports three walls.
    pub fn walled_count(&self, id: usize) -> usize {
        (0..NUM_DIRECTIONS)
            .filter_map(Direction::from_repr)
            .filter(|direction| !self.is_open(id, *direction))
            .count()
    }

    /// Whether a one-cell move between the two positions crosses an open
    /// edge.
    pub fn move_allowed(&self, from: (usize, usize), to: (usize, usize)) -> bool {
        match Direction::between(from, to) {
            Some(direction) => self.is_open(self.id_at(from.0, from.1), direction),
            None => false,
        }
    }

    /// Remove the wall between the cell and its neighbor in the given
    /// direction.
    ///
    /// A mismatch between the cell and the arena entry it references is a
    /// corrupted grid and aborts in debug builds.
    pub fn remove_wall(&mut self, id: usize, direction: Direction) {
        let edge: EdgeId = self.cells[id].edge(direction);
        debug_assert!(
            {
                let (a, b) = self.edges.endpoints(edge);
                a == id || b == Some(id)
            },
            "edge {edge} is not referenced by cell {id}"
        );
        self.edges.set_wall(edge, false);
    }

    /// Remove the wall between the cell at the given position and its
    /// neighbor in the given direction.
    ///
    /// This is the entry point for externally supplied layouts; the maze
    /// carver removes walls by cell identifier instead.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if the position is outside the
    /// grid.
    pub fn remove_wall_at(
        &mut self,
        x: usize,
        y: usize,
        direction: Direction,
    ) -> Result<(), GridError> {
        if !self.is_valid(x, y) {
            return Err(GridError::InvalidPosition { x, y });
        }
        self.remove_wall(self.id_at(x, y), direction);
        Ok(())
    }

    /// Number of walls removed since the grid was built or reset.
    ///
    /// A generated grid reports exactly `width * height - 1` removed walls:
    /// the spanning-tree invariant.
    pub fn num_removed_walls(&self) -> usize {
        self.edges.num_removed()
    }
}
