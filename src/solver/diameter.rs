/*
diameter.rs

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

//! Search for the pair of cells with the longest shortest walk.
//!
//! The pair space is quadratic in the number of cells, so even modest grids
//! imply hundreds of thousands of candidate pairs.
//! The search therefore runs on a worker thread (see [`DiameterTask`]),
//! reports progress through a channel after each candidate target cell, and
//! checks a cooperative cancellation flag between target cells, returning
//! its best walk so far when cancelled.

use async_channel::Sender;
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use super::frontier;
use super::path_collection::PathCollection;
use crate::generator::grid::Grid;
use crate::generator::path::PathSet;

/// Progress notification emitted after each candidate target cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DiameterProgress {
    /// Fraction of candidate target cells processed, between 0 and 1.
    pub fraction: f32,

    /// Rolling ratio of cache-skipped pairs over all pairs considered.
    pub effectiveness: f32,

    /// Length of the longest walk found so far.
    pub best_len: usize,
}

/// Longest start/finish search with memoized pruning.
///
/// Every unordered pair of cells is considered exactly once: the target
/// index `t` walks the cells in row-major order and the source index `f`
/// walks from the last cell down to `t + 1`.
/// Shortest walks found along the way are recorded in per-cell
/// [`PathCollection`] caches; a pair is skipped when a cached walk already
/// touches both of its endpoints.
///
/// The skip relies on the unique-walk property of a spanning tree: a cached
/// walk through both endpoints contains the only walk between them, so the
/// pair cannot improve the maximum.
/// On a grid with cycles that reasoning does not hold, which is why the
/// maze facade only runs this search on generated grids.
pub struct DiameterSearch {
    /// Pairs resolved from the caches during the last run.
    pub helped: usize,

    /// Pairs that required a full shortest-walk search during the last run.
    pub not_helped: usize,
}

impl Default for DiameterSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl DiameterSearch {
    /// Create the search object.
    pub fn new() -> Self {
        Self {
            helped: 0,
            not_helped: 0,
        }
    }

    /// Ratio of cache-skipped pairs over all pairs considered so far.
    pub fn effectiveness(&self) -> f32 {
        let considered: usize = self.helped + self.not_helped;
        if considered == 0 {
            0.0
        } else {
            self.helped as f32 / considered as f32
        }
    }

    /// Return the walk between the pair of cells with the greatest
    /// shortest-walk distance, or [`None`] when the grid holds fewer than
    /// two connected cells.
    ///
    /// A progress notification is delivered through `progress` after each
    /// candidate target cell; a dropped receiver only means nobody is
    /// listening.
    /// The `cancel` flag is checked between target cells; once it is set,
    /// the best walk found so far is returned.
    /// Ties resolve to the earliest pair in iteration order.
    pub fn run(
        &mut self,
        grid: &Grid,
        cancel: &AtomicBool,
        progress: Option<&Sender<DiameterProgress>>,
    ) -> Option<PathSet> {
        self.helped = 0;
        self.not_helped = 0;

        let total: usize = grid.num_cells();
        if total == 0 {
            return None;
        }

        let start: Instant = Instant::now();
        let mut max: Option<PathSet> = None;
        let mut from_cols: Vec<PathCollection> =
            (0..total).map(|_| PathCollection::new()).collect();

        for t in 0..total.saturating_sub(1) {
            if cancel.load(Ordering::Relaxed) {
                debug!("Cancelled after {t} target cells; keeping the best walk so far");
                break;
            }

            let mut to_col: PathCollection = PathCollection::new();
            for f in (t + 1..total).rev() {
                // A cached walk through both endpoints already holds the
                // unique walk of this pair; no new maximum can come from it.
                if from_cols[f].contains_cell(t) {
                    self.helped += 1;
                    continue;
                }
                if to_col.contains_cell(f) {
                    self.helped += 1;
                    continue;
                }

                self.not_helped += 1;
                if let Some(path) = frontier::find_shortest(grid, f, t) {
                    if max.as_ref().is_none_or(|best| path.len() > best.len()) {
                        max = Some(path.clone());
                    }
                    to_col.add(path.clone());
                    from_cols[f].add(path);
                }
            }

            if let Some(sender) = progress {
                let _ = sender.try_send(DiameterProgress {
                    fraction: (t + 1) as f32 / (total - 1) as f32,
                    effectiveness: self.effectiveness(),
                    best_len: max.as_ref().map_or(0, PathSet::len),
                });
            }
        }

        debug!(
            "Diameter search over {total} cells: {} computed, {} skipped ({:.2} effective), {}s",
            self.not_helped,
            self.helped,
            self.effectiveness(),
            start.elapsed().as_secs_f32()
        );
        max
    }
}

/// Handle to a diameter search running on a worker thread.
///
/// The worker owns a read-only snapshot of the grid, so the caller stays
/// free to use its own copy while the search runs.
pub struct DiameterTask {
    /// Progress notifications, one per processed target cell.
    pub progress: async_channel::Receiver<DiameterProgress>,

    /// Cooperative cancellation flag shared with the worker.
    cancel: Arc<AtomicBool>,

    /// The worker thread computing the walk.
    worker: JoinHandle<Option<PathSet>>,
}

impl DiameterTask {
    /// Start the search on a worker thread.
    pub fn spawn(grid: Grid) -> Self {
        let (sender, receiver) = async_channel::unbounded::<DiameterProgress>();
        let cancel: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
        let flag: Arc<AtomicBool> = Arc::clone(&cancel);
        let worker: JoinHandle<Option<PathSet>> =
            thread::spawn(move || DiameterSearch::new().run(&grid, &flag, Some(&sender)));
        Self {
            progress: receiver,
            cancel,
            worker,
        }
    }

    /// Ask the worker to stop after its current target cell.
    ///
    /// The worker still returns its best walk so far through
    /// [`DiameterTask::join`].
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Whether the worker has finished.
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Wait for the worker and return its result.
    pub fn join(self) -> Option<PathSet> {
        self.worker
            .join()
            .expect("The diameter search worker panicked")
    }
}
