/*
solver.rs

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

//! Structural queries over a generated grid.
//!
//! All the queries in this module treat the grid as read only.
//!
//! * [`frontier`] answers path questions: it expands every candidate walk
//!   one step per layer, from any number of start cells toward any number of
//!   end cells, and reports the walks that reach an end cell.
//! * [`path_collection`] stores sets of walks with a per-cell first-touch
//!   index; the diameter search uses it as its memoization cache.
//! * [`diameter`] looks for the pair of cells with the longest shortest
//!   walk.
//!   This is the one long-running query: it runs on a worker thread,
//!   reports progress through a channel, and honors a cooperative
//!   cancellation flag.
//! * [`dead_ends`] classifies dead ends and the no-choice corridors that
//!   lead into them.

pub mod dead_ends;
pub mod diameter;
pub mod frontier;
pub mod path_collection;
