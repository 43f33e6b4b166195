/*
path_collection.rs

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

//! Sets of walks with a first-touch lookup index.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::generator::path::PathSet;

/// A set of walks plus an index mapping each visited cell to the first walk
/// in the collection that touches it.
///
/// Insertion updates the index incrementally.
/// Removal triggers a full rebuild; it is rare and not performance
/// critical.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct PathCollection {
    /// Walks in insertion order.
    paths: Vec<PathSet>,

    /// For each visited cell, the index of the first walk that touched it.
    first_touch: HashMap<usize, usize>,
}

impl PathCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            first_touch: HashMap::new(),
        }
    }

    /// Number of walks in the collection.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the collection holds no walk.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Return the walk at the given index.
    pub fn get(&self, index: usize) -> Option<&PathSet> {
        self.paths.get(index)
    }

    /// Iterate over the walks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PathSet> {
        self.paths.iter()
    }

    /// Add a walk and index its cells.
    pub fn add(&mut self, path: PathSet) {
        let index: usize = self.paths.len();
        for cell in path.get() {
            self.first_touch.entry(*cell).or_insert(index);
        }
        self.paths.push(path);
    }

    /// Remove the walk at the given index and rebuild the first-touch
    /// index.
    pub fn remove(&mut self, index: usize) -> PathSet {
        let path: PathSet = self.paths.remove(index);
        self.rebuild_first_touch();
        path
    }

    /// Remove all the walks from the collection.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.first_touch.clear();
    }

    /// Whether any walk in the collection touches the cell.
    pub fn contains_cell(&self, cell: usize) -> bool {
        self.first_touch.contains_key(&cell)
    }

    /// Return the first walk in the collection that touches the cell.
    pub fn find_first_intersecting(&self, cell: usize) -> Option<&PathSet> {
        self.first_touch
            .get(&cell)
            .and_then(|index| self.paths.get(*index))
    }

    fn rebuild_first_touch(&mut self) {
        self.first_touch.clear();
        for (index, path) in self.paths.iter().enumerate() {
            for cell in path.get() {
                self.first_touch.entry(*cell).or_insert(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_indexes_the_first_touching_walk() {
        let mut collection: PathCollection = PathCollection::new();
        collection.add(PathSet::new(0).extended(1));
        collection.add(PathSet::new(1).extended(2));

        assert!(collection.contains_cell(2));
        // Cell 1 belongs to both walks; the first one wins.
        let first: &PathSet = collection
            .find_first_intersecting(1)
            .expect("cell 1 is indexed");
        assert_eq!(first.origin(), Some(0));
    }

    #[test]
    fn remove_rebuilds_the_index() {
        let mut collection: PathCollection = PathCollection::new();
        collection.add(PathSet::new(0).extended(1));
        collection.add(PathSet::new(1).extended(2));

        collection.remove(0);
        assert!(!collection.contains_cell(0));
        let first: &PathSet = collection
            .find_first_intersecting(1)
            .expect("cell 1 is still indexed");
        assert_eq!(first.origin(), Some(1));
    }
}
