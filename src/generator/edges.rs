/*
edges.rs

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

//! Wall arena shared by the cells of a grid.

use log::debug;
use serde::{Deserialize, Serialize};

/// Identifier of an edge in the [`Edges`] arena.
pub type EdgeId = usize;

/// One wall slot between a cell and its neighbor, or between a cell and the
/// outside of the grid.
///
/// An interior edge is stored once and referenced by both adjacent cells, so
/// removing the wall from either side is visible to both.
/// A boundary edge belongs to a single cell and stays a wall for the
/// lifetime of the grid.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Edge {
    /// Cell that created the edge.
    cell: usize,

    /// Adjacent cell, or [`None`] for a boundary edge.
    neighbor: Option<usize>,

    /// Whether the edge is a wall. Every edge starts as a wall; the maze
    /// carver removes interior walls until the grid is a spanning tree.
    wall: bool,
}

/// Arena that stores all the edges of a grid.
///
/// Cells reference edges by [`EdgeId`] and all wall mutation goes through
/// the arena, so the one wall between two cells is a single value with a
/// single owner.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Edges {
    edges: Vec<Edge>,
}

impl Edges {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Remove all the edges from the arena.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Add a walled edge and return its identifier.
    ///
    /// `neighbor` is [`None`] for a boundary edge.
    pub(crate) fn add(&mut self, cell: usize, neighbor: Option<usize>) -> EdgeId {
        self.edges.push(Edge {
            cell,
            neighbor,
            wall: true,
        });
        self.edges.len() - 1
    }

    /// Number of edges in the arena.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the edge is a wall.
    pub fn is_wall(&self, id: EdgeId) -> bool {
        self.edges[id].wall
    }

    /// Whether the edge connects a cell to the outside of the grid.
    pub fn is_boundary(&self, id: EdgeId) -> bool {
        self.edges[id].neighbor.is_none()
    }

    /// Return the cells on both sides of the edge.
    ///
    /// The second cell is [`None`] for a boundary edge.
    pub fn endpoints(&self, id: EdgeId) -> (usize, Option<usize>) {
        let edge: &Edge = &self.edges[id];
        (edge.cell, edge.neighbor)
    }

    /// Set the wall state of the edge.
    ///
    /// Boundary edges are permanently walled; trying to open one is a
    /// programming defect and aborts in debug builds.
    pub fn set_wall(&mut self, id: EdgeId, wall: bool) {
        let edge: &mut Edge = &mut self.edges[id];
        debug_assert!(
            edge.neighbor.is_some() || wall,
            "boundary edge {id} cannot be opened"
        );
        if edge.neighbor.is_some() || wall {
            edge.wall = wall;
        }
    }

    /// Number of interior edges whose wall has been removed.
    pub fn num_removed(&self) -> usize {
        self.edges.iter().filter(|e| !e.wall).count()
    }

    /// Log the open edges.
    pub fn debug(&self) {
        for (id, edge) in self.edges.iter().enumerate() {
            if !edge.wall {
                debug!(
                    "edge {id}: {} <-> {}",
                    edge.cell,
                    edge.neighbor.unwrap_or(usize::MAX)
                );
            }
        }
    }
}
