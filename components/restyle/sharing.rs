/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Code related to the style sharing cache, an optimization that allows
//! similar siblings to share the same computed style without matching or
//! cascading at all.
//!
//! An element may reuse the style of a recently styled sibling when both
//! would match exactly the same rules. The checks below are conservative:
//! any element whose matching looked at something the cache doesn't
//! compare (attributes, siblings, `:empty`, `:root`, inline style or
//! presentational hints) never becomes a candidate.

#![deny(missing_docs)]

use servo_arc::Arc;
use smallvec::SmallVec;

use crate::cache::RecencyList;
use crate::computed_style::ComputedStyle;
use crate::dom::{ElementState, TElement};
use crate::selector_matching::StyleRelations;

/// The amount of candidates in the style sharing cache.
pub const STYLE_SHARING_CANDIDATE_CACHE_SIZE: usize = 8;

/// The reasons a candidate can't donate its style.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CacheMiss {
    /// The elements have different parents.
    Parent,
    /// The elements have different tag names.
    LocalName,
    /// The elements are in different namespaces.
    Namespace,
    /// One element is a link and the other isn't, or their visitedness
    /// differs.
    Link,
    /// The elements are in different states.
    State,
    /// The element has an `id` attribute.
    IdAttr,
    /// The element has a `style` attribute.
    StyleAttr,
    /// The elements have different class lists.
    Class,
    /// The element has presentational hints.
    PresHints,
    /// One of the elements is the scope of scoped rules, which match it
    /// and not its siblings.
    ScopedRules,
}

/// Information regarding a style sharing candidate.
///
/// Note that this information is stored in TLS and cleared after the
/// traversal of a parent's children, so the element handle stays valid.
#[derive(Debug)]
struct StyleSharingCandidate<E: TElement> {
    element: E,
    style: Arc<ComputedStyle>,
    parent_style: Arc<ComputedStyle>,
    class_list: SmallVec<[String; 4]>,
    is_scoping_root: bool,
}

fn class_list<E: TElement>(element: E) -> SmallVec<[String; 4]> {
    let mut classes = SmallVec::new();
    element.each_class(|class| classes.push(class.to_owned()));
    classes.sort_unstable();
    classes
}

/// An LRU cache of the last few elements whose styles can be shared.
pub struct StyleSharingCandidateCache<E: TElement> {
    cache: RecencyList<StyleSharingCandidate<E>, STYLE_SHARING_CANDIDATE_CACHE_SIZE>,
}

impl<E: TElement> Default for StyleSharingCandidateCache<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TElement> StyleSharingCandidateCache<E> {
    /// Create a new style sharing candidate cache.
    pub fn new() -> Self {
        StyleSharingCandidateCache {
            cache: RecencyList::new(),
        }
    }

    /// Returns the number of entries in the cache.
    pub fn num_entries(&self) -> usize {
        self.cache.len()
    }

    /// Tries to insert an element in the style sharing cache.
    ///
    /// Fails silently if the element is not a good candidate.
    /// `is_scoping_root` tells whether scoped rules are registered on the
    /// element.
    pub fn insert_if_possible(
        &mut self,
        element: E,
        style: &Arc<ComputedStyle>,
        parent_style: &Arc<ComputedStyle>,
        relations: StyleRelations,
        is_scoping_root: bool,
    ) {
        if element.parent_element().is_none() {
            debug!("Failing to insert to the cache: no parent element");
            return;
        }

        if !relations.are_shareable() ||
            relations.contains(StyleRelations::AFFECTED_BY_PSEUDO_ELEMENTS)
        {
            debug!("Failing to insert to the cache: {:?}", relations);
            return;
        }

        // Animated styles depend on the element's animation state.
        if style.has_animations_or_transitions() {
            debug!("Failing to insert to the cache: running animations");
            return;
        }

        if style.unique() {
            debug!("Failing to insert to the cache: unique style");
            return;
        }

        if element.id().is_some() || element.style_attribute().is_some() {
            debug!("Failing to insert to the cache: id or style attribute");
            return;
        }

        debug!("Inserting into cache: {:?} with parent {:?}",
               element, element.parent_element());

        let evicted = self.cache.remember(StyleSharingCandidate {
            element,
            style: style.clone(),
            parent_style: parent_style.clone(),
            class_list: class_list(element),
            is_scoping_root,
        });
        // The oldest candidate is the least likely to match what gets styled
        // next, so it's released rather than kept around.
        if let Some(evicted) = evicted {
            debug!("Evicting {:?} from the cache", evicted.element);
        }
    }

    /// Attempts to share a style with another node.
    ///
    /// On a hit the candidate becomes the most recently used one. A miss on
    /// the parent empties the cache, since the traversal moved on to other
    /// siblings.
    pub fn share_style_if_possible(
        &mut self,
        element: E,
        parent_style: &Arc<ComputedStyle>,
        is_scoping_root: bool,
    ) -> Result<Arc<ComputedStyle>, CacheMiss> {
        if element.parent_element().is_none() {
            debug!("{:?} Cannot share style: element has no parent", element);
            return Err(CacheMiss::Parent);
        }

        if is_scoping_root {
            debug!("{:?} Cannot share style: element has scoped rules", element);
            return Err(CacheMiss::ScopedRules);
        }

        if element.style_attribute().is_some() {
            debug!("{:?} Cannot share style: element has style attribute", element);
            return Err(CacheMiss::StyleAttr);
        }

        if element.id().is_some() {
            debug!("{:?} Cannot share style: element has id", element);
            return Err(CacheMiss::IdAttr);
        }

        let classes = class_list(element);
        let mut last_miss = CacheMiss::Parent;
        let mut should_clear_cache = false;
        let mut hit = None;
        for (i, candidate) in self.cache.iter().enumerate() {
            match Self::test_candidate(element, &classes, parent_style, candidate) {
                Ok(style) => {
                    hit = Some((i, style));
                    break;
                },
                Err(miss) => {
                    debug!("Cache miss: {:?}", miss);
                    last_miss = miss;
                    match miss {
                        CacheMiss::Parent => {
                            should_clear_cache = true;
                            break;
                        },
                        // No other candidate would do better.
                        CacheMiss::PresHints => break,
                        _ => {},
                    }
                },
            }
        }

        if should_clear_cache {
            self.clear();
        }

        match hit {
            Some((i, style)) => {
                self.cache.promote(i);
                Ok(style)
            },
            None => {
                debug!("{:?} Cannot share style: {} cache entries",
                       element, self.cache.len());
                Err(last_miss)
            },
        }
    }

    fn test_candidate(
        target: E,
        target_classes: &[String],
        parent_style: &Arc<ComputedStyle>,
        candidate: &StyleSharingCandidate<E>,
    ) -> Result<Arc<ComputedStyle>, CacheMiss> {
        macro_rules! miss {
            ($miss: ident) => {
                return Err(CacheMiss::$miss)
            }
        }

        // Check that we have the same parent, and the same style for it.
        if target.parent_element() != candidate.element.parent_element() ||
            !Arc::ptr_eq(parent_style, &candidate.parent_style)
        {
            miss!(Parent)
        }

        if candidate.is_scoping_root {
            miss!(ScopedRules)
        }

        if target.local_name() != candidate.element.local_name() {
            miss!(LocalName)
        }

        if target.namespace() != candidate.element.namespace() {
            miss!(Namespace)
        }

        if target.is_link() != candidate.element.is_link() {
            miss!(Link)
        }

        let target_state = target.state();
        let candidate_state = candidate.element.state();
        if target.is_link() &&
            target_state.contains(ElementState::VISITED) !=
                candidate_state.contains(ElementState::VISITED)
        {
            miss!(Link)
        }

        if target_state.difference(ElementState::VISITED) !=
            candidate_state.difference(ElementState::VISITED)
        {
            miss!(State)
        }

        if target_classes != &*candidate.class_list {
            miss!(Class)
        }

        if target.presentational_hints().is_some() {
            miss!(PresHints)
        }

        debug!("Sharing style between {:?} and {:?}", target, candidate.element);
        Ok(candidate.style.clone())
    }

    /// Clear the style sharing candidate cache.
    pub fn clear(&mut self) {
        self.cache.forget_all()
    }
}
