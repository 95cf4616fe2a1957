/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The ancestor bloom filter, used to fast-reject descendant and child
//! selectors without walking up the tree.

use std::hash::Hasher;

use fnv::FnvHasher;
pub use selectors::bloom::{BLOOM_HASH_MASK, BloomFilter};
use smallvec::SmallVec;

use crate::dom::TElement;
use crate::selector_parser::Selector;

/// The very rough benchmarks in the selectors crate show clear() costing
/// about 25 times more than remove_hash(), so a stack holding few hashes is
/// emptied hash by hash.
const MEMSET_CLEAR_THRESHOLD: usize = 25;

/// The hash used for ids, classes and lowercase type names, on both the
/// selector side and the element side.
///
/// Only the bits the filter keys on are kept. Zero marks an unused slot in
/// the ancestor hashes of a selector, so it is never returned.
pub fn hash_str(value: &str) -> u32 {
    let mut hasher = FnvHasher::default();
    hasher.write(value.as_bytes());
    let hash: u64 = hasher.finish();
    let hash = ((hash >> 32) as u32 ^ (hash as u32)) & BLOOM_HASH_MASK;
    if hash == 0 { 1 } else { hash }
}

struct ParentStackFrame<E: TElement> {
    element: E,
    num_hashes: usize,
}

/// The stack of ancestors of the element being styled, along with a bloom
/// filter of their ids, classes and type names.
///
/// Callers push each element before styling its children and pop it after,
/// in document order.
pub struct SelectorFilter<E: TElement> {
    filter: Box<BloomFilter>,
    parent_stack: SmallVec<[ParentStackFrame<E>; 16]>,
    pushed_hashes: SmallVec<[u32; 64]>,
}

impl<E: TElement> Default for SelectorFilter<E> {
    fn default() -> Self {
        SelectorFilter::new()
    }
}

/// Calls `f` with the hash of every name of `element` that selectors may
/// require from an ancestor.
pub fn each_relevant_element_hash<E, F>(element: E, mut f: F)
where
    E: TElement,
    F: FnMut(u32),
{
    f(hash_str(&element.local_name().to_ascii_lowercase()));
    if let Some(id) = element.id() {
        f(hash_str(id));
    }
    element.each_class(|class| f(hash_str(class)));
}

impl<E: TElement> SelectorFilter<E> {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        SelectorFilter {
            filter: Box::new(BloomFilter::new()),
            parent_stack: SmallVec::new(),
            pushed_hashes: SmallVec::new(),
        }
    }

    /// The bloom filter of the current ancestors.
    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }

    /// Whether no ancestor is on the stack.
    pub fn is_empty(&self) -> bool {
        self.parent_stack.is_empty()
    }

    /// The innermost ancestor on the stack.
    pub fn top(&self) -> Option<E> {
        self.parent_stack.last().map(|frame| frame.element)
    }

    /// Whether `parent` is the innermost element on the stack, so that the
    /// filter describes exactly the ancestors of its children.
    pub fn parent_stack_is_consistent(&self, parent: Option<E>) -> bool {
        match parent {
            Some(parent) => self.top() == Some(parent),
            None => self.parent_stack.is_empty(),
        }
    }

    /// Pushes an element whose children are about to be styled.
    ///
    /// The element must be a child of the current top of the stack; when it
    /// isn't, the stack is rebuilt from the element's ancestor chain.
    pub fn push_parent(&mut self, element: E) {
        if !self.parent_stack_is_consistent(element.parent_element()) {
            debug!("SelectorFilter: rebuilding parent stack for {:?}", element);
            self.rebuild(element.parent_element());
        }
        self.push_internal(element);
    }

    fn push_internal(&mut self, element: E) {
        let mut num_hashes = 0;
        each_relevant_element_hash(element, |hash| {
            num_hashes += 1;
            self.filter.insert_hash(hash);
            self.pushed_hashes.push(hash);
        });
        self.parent_stack.push(ParentStackFrame {
            element,
            num_hashes,
        });
    }

    /// Pops the innermost element, returning it.
    pub fn pop_parent(&mut self) -> Option<E> {
        let frame = self.parent_stack.pop()?;
        for _ in 0..frame.num_hashes {
            if let Some(hash) = self.pushed_hashes.pop() {
                self.filter.remove_hash(hash);
            }
        }
        Some(frame.element)
    }

    /// Clears the stack and the filter.
    pub fn clear(&mut self) {
        self.parent_stack.clear();
        if self.pushed_hashes.len() > MEMSET_CLEAR_THRESHOLD {
            self.filter.clear();
            self.pushed_hashes.clear();
        } else {
            for hash in self.pushed_hashes.drain(..) {
                self.filter.remove_hash(hash);
            }
            debug_assert!(self.filter.is_zeroed());
        }
    }

    fn rebuild(&mut self, parent: Option<E>) {
        self.clear();
        let mut ancestors = SmallVec::<[E; 16]>::new();
        let mut current = parent;
        while let Some(ancestor) = current {
            ancestors.push(ancestor);
            current = ancestor.parent_element();
        }
        for ancestor in ancestors.into_iter().rev() {
            self.push_internal(ancestor);
        }
    }

    /// Whether `selector` surely can't match any descendant of the current
    /// stack, because one of the names it requires from an ancestor is
    /// missing.
    pub fn fast_reject(&self, selector: &Selector) -> bool {
        fast_reject(&self.filter, selector)
    }
}

/// Whether `filter` proves that no ancestor has some name `selector`
/// requires.
pub fn fast_reject(filter: &BloomFilter, selector: &Selector) -> bool {
    selector
        .ancestor_hashes
        .iter()
        .take_while(|&&hash| hash != 0)
        .any(|&hash| !filter.might_contain_hash(hash))
}
