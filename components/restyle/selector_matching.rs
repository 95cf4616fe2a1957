/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Matching selectors against elements.
//!
//! The `selectors` crate does the matching proper. Elements are handed to it
//! through [`MatchingElement`], which also records what matching looked at
//! so that the style sharing cache knows which elements are safe to share.

use std::cell::Cell;

use bitflags::bitflags;
use selectors::OpaqueElement;
use selectors::attr::{AttrSelectorOperation, CaseSensitivity, NamespaceConstraint};
use selectors::context::{QuirksMode, SelectorCaches};
use selectors::matching::{
    ElementSelectorFlags, MatchingContext as GenericMatchingContext, MatchingForInvalidation,
    MatchingMode, NeedsSelectorFlags,
};

use crate::bloom::{self, BloomFilter};
use crate::dom::TElement;
use crate::selector_parser::{Atom, NonTSPseudoClass, PseudoElement, RestyleSelectorImpl, Selector};
use crate::values::keywords::PseudoId;

bitflags! {
    /// Set of flags that describe what the matched selectors depended on.
    /// Elements whose matching depended on some of them can't share styles.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct StyleRelations: u16 {
        /// Whether this element is affected by a sibling combinator or a
        /// structural pseudo-class.
        const AFFECTED_BY_SIBLINGS = 1 << 0;
        /// Whether this element matched `:empty`.
        const AFFECTED_BY_EMPTY = 1 << 1;
        /// Whether an attribute selector was tested against this element.
        const AFFECTED_BY_ATTRIBUTES = 1 << 2;
        /// Whether a dynamic state pseudo-class was tested against this
        /// element.
        const AFFECTED_BY_STATE = 1 << 3;
        /// Whether `:root` was tested against this element.
        const AFFECTED_BY_ROOT = 1 << 4;
        /// Whether the element has a `style` attribute.
        const AFFECTED_BY_STYLE_ATTRIBUTE = 1 << 5;
        /// Whether the element has presentational hints.
        const AFFECTED_BY_PRESENTATIONAL_HINTS = 1 << 6;
        /// Whether a rule for some pseudo-element matched the element.
        const AFFECTED_BY_PSEUDO_ELEMENTS = 1 << 7;
    }
}

impl StyleRelations {
    /// Whether an element whose matching produced these relations may share
    /// its style with a similar element.
    pub fn are_shareable(&self) -> bool {
        !self.intersects(
            StyleRelations::AFFECTED_BY_SIBLINGS |
                StyleRelations::AFFECTED_BY_EMPTY |
                StyleRelations::AFFECTED_BY_ATTRIBUTES |
                StyleRelations::AFFECTED_BY_ROOT |
                StyleRelations::AFFECTED_BY_STYLE_ATTRIBUTE |
                StyleRelations::AFFECTED_BY_PRESENTATIONAL_HINTS,
        )
    }
}

/// How `:link` and `:visited` match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitedHandling {
    /// Every link is treated as unvisited: `:link` matches links and
    /// `:visited` matches nothing.
    AllLinksUnvisited,
    /// Every link is treated as visited: `:visited` matches links and
    /// `:link` matches nothing.
    AllLinksVisited,
}

/// Data associated with one matching operation.
pub struct MatchingContext<'a> {
    /// The ancestor filter, when the parent stack is consistent with the
    /// element being matched.
    pub bloom_filter: Option<&'a BloomFilter>,
    #[allow(missing_docs)]
    pub visited_handling: VisitedHandling,
    /// What the matched selectors depended on.
    pub relations: StyleRelations,
}

impl<'a> MatchingContext<'a> {
    #[allow(missing_docs)]
    pub fn new(bloom_filter: Option<&'a BloomFilter>, visited_handling: VisitedHandling) -> Self {
        MatchingContext {
            bloom_filter,
            visited_handling,
            relations: StyleRelations::empty(),
        }
    }
}

/// Whether `selector` matches `element`, or its pseudo-element `pseudo`.
///
/// Selectors naming an unknown pseudo-element never match.
pub fn matches_selector<E>(
    selector: &Selector,
    element: E,
    pseudo: Option<PseudoId>,
    context: &mut MatchingContext,
) -> bool
where
    E: TElement,
{
    let matching_mode = match (&selector.pseudo_element, pseudo) {
        (None, None) => MatchingMode::Normal,
        (Some(PseudoElement::Known(selector_pseudo)), Some(pseudo)) if *selector_pseudo == pseudo => {
            MatchingMode::ForStatelessPseudoElement
        },
        _ => return false,
    };

    if let Some(filter) = context.bloom_filter {
        if bloom::fast_reject(filter, selector) {
            return false;
        }
    }

    let relations = Cell::new(StyleRelations::empty());
    let element = MatchingElement {
        element,
        visited_handling: context.visited_handling,
        relations: &relations,
    };
    let mut caches = SelectorCaches::default();
    let mut matching_context = GenericMatchingContext::new(
        matching_mode,
        None,
        &mut caches,
        QuirksMode::NoQuirks,
        NeedsSelectorFlags::No,
        MatchingForInvalidation::No,
    );
    let matched = selectors::matching::matches_selector(
        selector.generic(),
        0,
        None,
        &element,
        &mut matching_context,
    );
    context.relations |= relations.get();
    matched
}

/// An element as the `selectors` crate sees it.
///
/// Every element reached from the subject shares the subject's
/// `relations`, so a sibling combinator anywhere in a selector counts
/// against the subject.
#[derive(Clone, Copy, Debug)]
pub struct MatchingElement<'a, E: TElement> {
    element: E,
    visited_handling: VisitedHandling,
    relations: &'a Cell<StyleRelations>,
}

impl<'a, E: TElement> MatchingElement<'a, E> {
    fn with_element(&self, element: E) -> Self {
        MatchingElement { element, ..*self }
    }

    fn note(&self, relations: StyleRelations) {
        self.relations.set(self.relations.get() | relations);
    }
}

impl<'a, E: TElement> selectors::Element for MatchingElement<'a, E> {
    type Impl = RestyleSelectorImpl;

    fn opaque(&self) -> OpaqueElement {
        self.element.opaque()
    }

    fn parent_element(&self) -> Option<Self> {
        self.element.parent_element().map(|parent| self.with_element(parent))
    }

    fn parent_node_is_shadow_root(&self) -> bool {
        false
    }

    fn containing_shadow_host(&self) -> Option<Self> {
        None
    }

    fn is_pseudo_element(&self) -> bool {
        false
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        self.note(StyleRelations::AFFECTED_BY_SIBLINGS);
        self.element
            .prev_sibling_element()
            .map(|sibling| self.with_element(sibling))
    }

    fn next_sibling_element(&self) -> Option<Self> {
        self.note(StyleRelations::AFFECTED_BY_SIBLINGS);
        self.element
            .next_sibling_element()
            .map(|sibling| self.with_element(sibling))
    }

    fn first_element_child(&self) -> Option<Self> {
        self.element
            .first_element_child()
            .map(|child| self.with_element(child))
    }

    fn is_html_element_in_html_document(&self) -> bool {
        self.element.is_html_element_in_html_document()
    }

    fn has_local_name(&self, name: &str) -> bool {
        if self.element.is_html_element_in_html_document() {
            self.element.local_name().eq_ignore_ascii_case(name)
        } else {
            self.element.local_name() == name
        }
    }

    fn has_namespace(&self, namespace: &str) -> bool {
        self.element.namespace() == namespace
    }

    fn is_same_type(&self, other: &Self) -> bool {
        self.element.local_name() == other.element.local_name() &&
            self.element.namespace() == other.element.namespace()
    }

    fn attr_matches(
        &self,
        ns: &NamespaceConstraint<&Atom>,
        local_name: &Atom,
        operation: &AttrSelectorOperation<&Atom>,
    ) -> bool {
        self.note(StyleRelations::AFFECTED_BY_ATTRIBUTES);
        let value = match *ns {
            NamespaceConstraint::Specific(url) => self.element.attr_ns(url.as_str(), local_name.as_str()),
            NamespaceConstraint::Any => self.element.attr(local_name.as_str()),
        };
        let Some(value) = value else {
            return false;
        };
        match *operation {
            AttrSelectorOperation::Exists => true,
            AttrSelectorOperation::WithValue {
                operator,
                case_sensitivity,
                value: expected,
            } => operator.eval_str(value, expected.as_str(), case_sensitivity),
        }
    }

    fn match_non_ts_pseudo_class(
        &self,
        pseudo_class: &NonTSPseudoClass,
        _: &mut GenericMatchingContext<Self::Impl>,
    ) -> bool {
        match *pseudo_class {
            NonTSPseudoClass::AnyLink => self.element.is_link(),
            NonTSPseudoClass::Link => {
                self.element.is_link() && self.visited_handling == VisitedHandling::AllLinksUnvisited
            },
            NonTSPseudoClass::Visited => {
                self.element.is_link() && self.visited_handling == VisitedHandling::AllLinksVisited
            },
            _ => {
                self.note(StyleRelations::AFFECTED_BY_STATE);
                self.element.state().contains(pseudo_class.state_flag())
            },
        }
    }

    fn match_pseudo_element(
        &self,
        pseudo: &PseudoElement,
        _: &mut GenericMatchingContext<Self::Impl>,
    ) -> bool {
        matches!(*pseudo, PseudoElement::Known(..))
    }

    fn apply_selector_flags(&self, _: ElementSelectorFlags) {}

    fn is_link(&self) -> bool {
        self.element.is_link()
    }

    fn is_html_slot_element(&self) -> bool {
        false
    }

    fn assigned_slot(&self) -> Option<Self> {
        None
    }

    fn has_id(&self, id: &Atom, case_sensitivity: CaseSensitivity) -> bool {
        self.element
            .id()
            .is_some_and(|own| case_sensitivity.eq(own.as_bytes(), id.as_str().as_bytes()))
    }

    fn has_class(&self, name: &Atom, case_sensitivity: CaseSensitivity) -> bool {
        let mut found = false;
        self.element.each_class(|class| {
            found |= case_sensitivity.eq(class.as_bytes(), name.as_str().as_bytes());
        });
        found
    }

    fn has_custom_state(&self, _: &Atom) -> bool {
        false
    }

    fn imported_part(&self, _: &Atom) -> Option<Atom> {
        None
    }

    fn is_part(&self, _: &Atom) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        self.note(StyleRelations::AFFECTED_BY_EMPTY);
        self.element.is_empty()
    }

    fn is_root(&self) -> bool {
        self.note(StyleRelations::AFFECTED_BY_ROOT);
        self.element.is_root()
    }

    fn add_element_unique_hashes(&self, filter: &mut BloomFilter) -> bool {
        bloom::each_relevant_element_hash(self.element, |hash| filter.insert_hash(hash));
        true
    }
}
