/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A bounded list of recently styled things, most recent first.
//!
//! The style sharing cache keeps its candidates here: siblings are styled in
//! a row, so the element styled last is the likeliest to match the next one.

#![deny(missing_docs)]

use arraydeque::ArrayDeque;

/// At most `N` entries, ordered from the most to the least recently used.
pub struct RecencyList<T, const N: usize> {
    entries: ArrayDeque<T, N>,
}

impl<T, const N: usize> Default for RecencyList<T, N> {
    fn default() -> Self {
        RecencyList::new()
    }
}

impl<T, const N: usize> RecencyList<T, N> {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        RecencyList {
            entries: ArrayDeque::new(),
        }
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries, most recently used first. Positions yielded here are
    /// the ones `promote` takes.
    pub fn iter(&self) -> arraydeque::Iter<'_, T> {
        self.entries.iter()
    }

    /// Marks the entry at `index` as the most recently used one.
    pub fn promote(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let Some(entry) = self.entries.remove(index) else {
            return;
        };
        // The removal above left a free slot, so this can't evict.
        let overflow = self.entries.push_front(entry);
        debug_assert!(overflow.is_ok());
    }

    /// Adds `entry` as the most recently used one, and returns the least
    /// recently used entry if the list was full.
    pub fn remember(&mut self, entry: T) -> Option<T> {
        let evicted = if self.entries.is_full() {
            self.entries.pop_back()
        } else {
            None
        };
        // There is room now, so a failed push can't happen.
        let overflow = self.entries.push_front(entry);
        debug_assert!(overflow.is_ok());
        evicted
    }

    /// Drops every entry.
    pub fn forget_all(&mut self) {
        self.entries.clear();
    }
}
