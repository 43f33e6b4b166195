/*
lib.rs

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

//! Procedural grid-maze engine.
//!
//! Gridmaze builds a perfect maze over a rectangular grid and answers
//! structural queries over the resulting graph.
//!
//! * [`generator`] holds the grid, its shared wall arena, the
//!   randomized-backtracker carver, and the walk representation.
//! * [`solver`] holds the read-only queries: shortest and exhaustive walks
//!   between cell sets, the longest start/finish pair, and dead-end
//!   corridor classification.
//! * [`maze`] is the facade consumed by presentation layers: structural
//!   and cosmetic configuration, change notifications, and the query
//!   surface.
//! * [`cli_options`] drives all of the above from the command line, for
//!   developers.
//!
//! Rendering, printing, and image export are presentation concerns and do
//! not live in this crate.

pub mod cli_options;
pub mod generator;
pub mod maze;
pub mod solver;

pub use generator::backtracker::Backtracker;
pub use generator::grid::{Grid, GridError};
pub use generator::path::PathSet;
pub use maze::{Maze, MazeEvent, MazeStyle};
