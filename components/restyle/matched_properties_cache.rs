/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A cache from the set of matched declarations to the style they produced,
//! letting elements that match the same rules skip most of the cascade.

#![deny(missing_docs)]

use std::hash::Hasher;

use fnv::{FnvHashMap, FnvHasher};
use servo_arc::Arc;

use crate::applicable_declarations::MatchResult;
use crate::computed_style::ComputedStyle;
use crate::device::DocumentState;
use crate::values::keywords::{Appearance, PseudoId, WritingMode};

/// Computes the hash of the matched declarations: the identity of each
/// block, with its link channels and region flag.
///
/// Returns zero for results that must not be cached.
pub fn compute_hash(result: &MatchResult) -> u32 {
    if !result.is_cacheable || result.is_empty() {
        return 0;
    }
    let mut hasher = FnvHasher::default();
    for declaration in &result.declarations {
        let address = &*declaration.block as *const _ as usize;
        hasher.write_usize(address);
        hasher.write_u8(declaration.link_match.bits());
        hasher.write_u8(declaration.is_in_region_rule as u8);
    }
    let hash = hasher.finish();
    match (hash >> 32) as u32 ^ hash as u32 {
        0 => 1,
        hash => hash,
    }
}

/// Whether a freshly cascaded style may be stored in the cache.
///
/// The cache assumes the style only depends on the matched declarations and
/// the parent's inherited data.
pub fn is_cacheable(
    style: &ComputedStyle,
    parent: &ComputedStyle,
    element_is_root: bool,
    document: &DocumentState,
) -> bool {
    // Writing mode and direction applied to the root update the document.
    if element_is_root &&
        (document.writing_mode_set_on_document_element() ||
            document.directionality_set_on_document_element())
    {
        return false;
    }
    if style.unique() || (style.style_type() != PseudoId::NoPseudo && parent.unique()) {
        return false;
    }
    if style.appearance() != Appearance::None {
        return false;
    }
    if style.zoom() != 1. {
        return false;
    }
    if style.writing_mode() != WritingMode::HorizontalTb {
        return false;
    }
    // `inherit` on a non-inherited property makes non-inherited data depend
    // on the parent.
    !style.explicit_inheritance()
}

/// How a cache lookup went.
pub enum CacheLookup {
    /// The parent's inherited data is shared with the cached parent: the
    /// whole cached style can be reused.
    FullHit(Arc<ComputedStyle>),
    /// The parent is equal to the cached parent without sharing its data:
    /// the non-inherited data can be reused, and inherited properties must
    /// be applied again.
    PartialHit(Arc<ComputedStyle>),
    /// No usable entry.
    Miss,
}

struct Entry {
    matched: MatchResult,
    style: Arc<ComputedStyle>,
    parent_style: Arc<ComputedStyle>,
}

impl Entry {
    /// Whether the cache is the last owner of one of the declaration
    /// blocks, meaning the style sheet that held it is gone.
    fn is_stale(&self) -> bool {
        self.matched.declarations.iter().any(|declaration| declaration.block.is_unique())
    }
}

/// The matched-properties cache.
pub struct MatchedPropertiesCache {
    entries: FnvHashMap<u32, Vec<Entry>>,
    additions_since_last_sweep: u32,
    sweep_interval: u32,
}

impl MatchedPropertiesCache {
    /// Creates an empty cache, swept every `sweep_interval` insertions.
    pub fn new(sweep_interval: u32) -> Self {
        MatchedPropertiesCache {
            entries: FnvHashMap::default(),
            additions_since_last_sweep: 0,
            sweep_interval,
        }
    }

    /// The number of cached styles.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the style computed for the same declarations.
    ///
    /// The entry is only used when `parent` equals the parent the cached
    /// style was computed against, and fully reused only when it shares its
    /// inherited data and the element is not at a shadow boundary.
    pub fn find(
        &self,
        hash: u32,
        matched: &MatchResult,
        parent: &ComputedStyle,
        is_at_shadow_boundary: bool,
    ) -> CacheLookup {
        if hash == 0 {
            return CacheLookup::Miss;
        }
        let Some(bucket) = self.entries.get(&hash) else {
            return CacheLookup::Miss;
        };
        let Some(entry) = bucket.iter().find(|entry| entry.matched.same_declarations(matched)) else {
            return CacheLookup::Miss;
        };

        if !is_at_shadow_boundary && parent.inherited_data_shared(&entry.parent_style) {
            return CacheLookup::FullHit(entry.style.clone());
        }
        if parent.inherited_equal(&entry.parent_style) {
            return CacheLookup::PartialHit(entry.style.clone());
        }
        CacheLookup::Miss
    }

    /// Stores a style computed against `parent_style` for `matched`.
    pub fn add(
        &mut self,
        hash: u32,
        matched: &MatchResult,
        style: Arc<ComputedStyle>,
        parent_style: Arc<ComputedStyle>,
    ) {
        debug_assert_ne!(hash, 0);
        self.additions_since_last_sweep += 1;
        if self.additions_since_last_sweep >= self.sweep_interval {
            self.sweep();
        }

        let bucket = self.entries.entry(hash).or_default();
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.matched.same_declarations(matched)) {
            entry.style = style;
            entry.parent_style = parent_style;
            return;
        }
        bucket.push(Entry {
            matched: matched.clone(),
            style,
            parent_style,
        });
    }

    /// Evicts the entries whose declaration blocks are no longer used by
    /// any style sheet.
    pub fn sweep(&mut self) {
        let before = self.len();
        self.entries.retain(|_, bucket| {
            bucket.retain(|entry| !entry.is_stale());
            !bucket.is_empty()
        });
        self.additions_since_last_sweep = 0;
        debug!("MatchedPropertiesCache: swept {} entries", before - self.len());
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.additions_since_last_sweep = 0;
    }
}
