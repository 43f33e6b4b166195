/*
maze.rs

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

//! The maze model exposed to presentation layers.
//!
//! A [`Maze`] object owns the grid, the structural configuration (width,
//! height, seed), and the presentation hints ([`MazeStyle`]).
//! Setting a structural property records the new value and raises a
//! [`MazeEvent::Structural`] notification; it never regenerates the maze.
//! Callers decide when to pay for a rebuild by calling
//! [`Maze::regenerate`], which raises [`MazeEvent::Generated`] once the new
//! layout is carved.
//! Setting a presentation hint raises [`MazeEvent::Cosmetic`], which never
//! implies regeneration.
//!
//! The queries ([`Maze::find_shortest_path`], [`Maze::solve_all`],
//! [`Maze::find_longest_start_finish`], [`Maze::find_dead_end_passages`])
//! treat the grid as read only; only [`Maze::regenerate`] and
//! [`Maze::reset`] mutate it.

use async_channel::{Receiver, Sender};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::atomic::AtomicBool;

use crate::generator::backtracker::Backtracker;
use crate::generator::cells::{Cell, Direction, Role};
use crate::generator::grid::{Grid, GridError};
use crate::generator::path::PathSet;
use crate::solver::dead_ends::{self, Mask};
use crate::solver::diameter::{DiameterSearch, DiameterTask};
use crate::solver::frontier;

/// Notification raised when the maze changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MazeEvent {
    /// A property affecting the logical shape of the maze changed (width,
    /// height, seed) or the grid was reset.
    /// The current layout no longer matches the configuration until the
    /// caller regenerates.
    Structural,

    /// A presentation hint changed. No regeneration is implied.
    Cosmetic,

    /// Generation completed; the wall layout is new.
    Generated,
}

/// Presentation hints for the maze.
///
/// These values are data for the presentation layer; the maze never draws
/// anything with them.
/// Color components are integers between 0 and 255.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MazeStyle {
    /// Wall line width in pixels.
    pub line_width: u32,

    /// Cell size in pixels.
    pub cell_size: u32,

    /// Whether wall corners should be drawn rounded.
    pub round_edges: bool,

    /// Wall color.
    pub line_color: (u8, u8, u8, u8),

    /// Floor color.
    pub fill_color: (u8, u8, u8, u8),

    /// Solution walk color.
    pub path_color: (u8, u8, u8, u8),
}

impl Default for MazeStyle {
    fn default() -> Self {
        Self {
            line_width: 8,
            cell_size: 16,
            round_edges: true,
            line_color: (255, 0, 0, 255),
            fill_color: (255, 255, 255, 255),
            path_color: (0, 128, 0, 255),
        }
    }
}

/// The maze model.
pub struct Maze {
    /// Configured width in cells. Applied by [`Maze::regenerate`] and
    /// [`Maze::reset`].
    width: usize,

    /// Configured height in cells.
    height: usize,

    /// Seed of the last generation, stored for display and
    /// reproducibility.
    seed: u64,

    /// The grid holding the current wall layout.
    grid: Grid,

    /// Presentation hints.
    style: MazeStyle,

    /// Statistics of the last generation run.
    generation: Backtracker,

    /// Open notification channels, one per subscriber.
    subscribers: Vec<Sender<MazeEvent>>,
}

impl Maze {
    /// Build a fully walled maze with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: 0,
            grid: Grid::new(width, height),
            style: MazeStyle::default(),
            generation: Backtracker::from_seed(0),
            subscribers: Vec::new(),
        }
    }

    /// Subscribe to change notifications.
    ///
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<MazeEvent> {
        let (sender, receiver) = async_channel::unbounded::<MazeEvent>();
        self.subscribers.push(sender);
        receiver
    }

    // Deliver the event to every subscriber and forget the closed channels.
    fn emit(&mut self, event: MazeEvent) {
        self.subscribers
            .retain(|sender| sender.try_send(event).is_ok());
    }

    /// Configured width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Set the configured width. Takes effect at the next regeneration.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.emit(MazeEvent::Structural);
    }

    /// Configured height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set the configured height. Takes effect at the next regeneration.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.emit(MazeEvent::Structural);
    }

    /// Seed of the last generation.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Set the seed for the next regeneration.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.emit(MazeEvent::Structural);
    }

    /// Presentation hints.
    pub fn style(&self) -> &MazeStyle {
        &self.style
    }

    /// Replace the presentation hints.
    pub fn set_style(&mut self, style: MazeStyle) {
        self.style = style;
        self.emit(MazeEvent::Cosmetic);
    }

    /// Short description of the maze, such as `16x16(#42)`.
    pub fn description(&self) -> String {
        format!("{}x{}(#{})", self.width, self.height, self.seed)
    }

    /// Name of the generation algorithm.
    pub fn algorithm_name(&self) -> &'static str {
        "Recursive backtracker"
    }

    /// Statistics of the last generation run.
    pub fn generation(&self) -> &Backtracker {
        &self.generation
    }

    /// The grid holding the current wall layout.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Rebuild the grid to its fully walled state at the configured
    /// dimensions, discarding the current layout.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.width, self.height);
        self.emit(MazeEvent::Structural);
    }

    /// Carve a new maze at the configured dimensions.
    ///
    /// With `Some(seed)`, the given seed is recorded and used, so the same
    /// seed always reproduces the same layout.
    /// With [`None`], a fresh seed derives from the wall clock.
    /// Generation on a zero-sized maze is a documented no-op; the
    /// notification still fires.
    pub fn regenerate(&mut self, seed: Option<u64>) {
        let mut carver: Backtracker = match seed {
            Some(seed) => Backtracker::from_seed(seed),
            None => Backtracker::from_clock(),
        };
        self.grid = Grid::new(self.width, self.height);
        carver.carve(&mut self.grid);
        self.seed = carver.seed;
        self.generation = carver;
        debug!("Generated {}", self.description());
        self.emit(MazeEvent::Generated);
    }

    /// Return the cell at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if the position is outside
    /// the grid.
    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        self.grid.try_cell(x, y)
    }

    /// Whether the edge of the cell in the given direction is blocked.
    ///
    /// Boundary edges are always blocked.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if the position is outside
    /// the grid.
    pub fn blocked(&self, x: usize, y: usize, direction: Direction) -> Result<bool, GridError> {
        if !self.grid.is_valid(x, y) {
            return Err(GridError::InvalidPosition { x, y });
        }
        Ok(!self.grid.is_open(self.grid.id_at(x, y), direction))
    }

    /// Positions of all the cells with the given role.
    pub fn find_all(&self, role: Role) -> Vec<(usize, usize)> {
        self.grid
            .find_all(role)
            .iter()
            .map(|id| self.grid.pos_of(*id))
            .collect()
    }

    /// Set the role of the cell at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if the position is outside
    /// the grid.
    pub fn set_role_at(&mut self, x: usize, y: usize, role: Role) -> Result<(), GridError> {
        if !self.grid.is_valid(x, y) {
            return Err(GridError::InvalidPosition { x, y });
        }
        self.grid.set_role(self.grid.id_at(x, y), role);
        Ok(())
    }

    /// Mark the origin of the walk as the `Start` cell and its tip as the
    /// `End` cell, clearing any previous start and end.
    pub fn mark_endpoints(&mut self, path: &PathSet) {
        self.grid.clear_roles();
        if let Some(origin) = path.origin() {
            self.grid.set_role(origin, Role::Start);
        }
        if let Some(tip) = path.current_pos()
            && path.len() > 1
        {
            self.grid.set_role(tip, Role::End);
        }
    }

    /// Return the shortest walk between the two positions, or [`None`]
    /// when no walk joins them.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if either position is
    /// outside the grid.
    pub fn find_shortest_path(
        &self,
        from: (usize, usize),
        to: (usize, usize),
    ) -> Result<Option<PathSet>, GridError> {
        for (x, y) in [from, to] {
            if !self.grid.is_valid(x, y) {
                return Err(GridError::InvalidPosition { x, y });
            }
        }
        Ok(frontier::find_shortest(
            &self.grid,
            self.grid.id_at(from.0, from.1),
            self.grid.id_at(to.0, to.1),
        ))
    }

    /// Return every walk from a `Start` cell to an `End` cell, ordered by
    /// ascending length.
    pub fn solve_all(&self) -> Vec<PathSet> {
        frontier::solve_all(&self.grid)
    }

    /// Return the walk between the pair of cells with the greatest
    /// shortest-walk distance, blocking until the search completes.
    ///
    /// Use [`Maze::spawn_longest_search`] to keep the caller responsive on
    /// larger grids.
    pub fn find_longest_start_finish(&self) -> Option<PathSet> {
        let cancel: AtomicBool = AtomicBool::new(false);
        DiameterSearch::new().run(&self.grid, &cancel, None)
    }

    /// Start the longest start/finish search on a worker thread.
    ///
    /// The worker runs over a snapshot of the current layout; later
    /// regenerations do not disturb it.
    pub fn spawn_longest_search(&self) -> DiameterTask {
        DiameterTask::spawn(self.grid.clone())
    }

    /// Mark every cell with at most one open side.
    pub fn find_dead_ends(&self) -> Mask {
        dead_ends::find_dead_ends(&self.grid)
    }

    /// Mark every cell on a no-choice corridor that terminates in a dead
    /// end, keeping the protected cells clear.
    pub fn find_dead_end_passages(&self, protected: &HashSet<usize>) -> Mask {
        dead_ends::find_dead_end_passages(&self.grid, protected)
    }

    /// Mark every dead-end corridor cell, protecting the current `Start`
    /// and `End` cells.
    pub fn find_dead_end_passages_from_roles(&self) -> Mask {
        let mut protected: HashSet<usize> = self.grid.find_all(Role::Start).into_iter().collect();
        protected.extend(self.grid.find_all(Role::End));
        dead_ends::find_dead_end_passages(&self.grid, &protected)
    }
}
