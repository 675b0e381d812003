// cycletrace: bounded, source-rooted simple-cycle enumeration
// Copyright (C) 2026 The cycletrace Contributors
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Old-id/new-id bijections produced by each prune-and-compact pass.

/// A pair of mutually-inverse mappings between a pre-prune and a post-prune index space.
#[derive(Debug, Clone)]
pub struct RemapTable {
    /// Indexed by old id; `None` for vertices that did not survive.
    old2new: Vec<Option<usize>>,
    /// Indexed by new id; total on the new domain.
    new2old: Vec<usize>,
}

impl RemapTable {
    /// Build a remap table from its two halves. Callers are expected to maintain the invariant
    /// that the two are mutual inverses on their common domain.
    pub fn new(old2new: Vec<Option<usize>>, new2old: Vec<usize>) -> Self {
        RemapTable { old2new, new2old }
    }

    /// Translate an old id to its new id, if it survived.
    pub fn old_to_new(&self, old: usize) -> Option<usize> {
        self.old2new.get(old).copied().flatten()
    }

    /// Translate a new id back to its old id.
    pub fn new_to_old(&self, new: usize) -> usize {
        self.new2old[new]
    }

    /// Compose `self: old -> mid` with `next: mid -> new` into a single `old -> new` table that
    /// projects all the way back to the original namespace.
    pub fn compose(&self, next: &RemapTable) -> RemapTable {
        let old2new = self
            .old2new
            .iter()
            .map(|mid| mid.and_then(|mid| next.old_to_new(mid)))
            .collect();
        let new2old = next.new2old.iter().map(|&mid| self.new2old[mid]).collect();
        RemapTable::new(old2new, new2old)
    }
}
