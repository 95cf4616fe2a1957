/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Style rules indexed for fast lookup by the id, class or tag name of their
//! rightmost compound selector.

use std::collections::HashMap;
use std::hash::BuildHasherDefault;

use bitflags::bitflags;
use fnv::FnvHasher;
use servo_arc::Arc;

use crate::dom::TElement;
use crate::properties::PropertyDeclarationBlock;
use crate::selector_matching::{MatchingContext, matches_selector};
use crate::selector_parser::{PseudoElement, Selector, SelectorList};
use crate::values::keywords::PseudoId;

pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// One selector of a style rule, with the rule's declarations.
#[derive(Clone, Debug)]
pub struct Rule {
    /// The selector that must match.
    pub selector: Selector,
    /// The declarations of the style rule.
    pub declarations: Arc<PropertyDeclarationBlock>,
    /// The position of the style rule in its rule set.
    pub source_order: u32,
}

impl Rule {
    #[allow(missing_docs)]
    pub fn specificity(&self) -> u32 {
        self.selector.specificity
    }
}

/// Map element data to selector-providing objects.
///
/// This is a cache of the rightmost simple selector of each rule: a rule
/// goes in the id bucket if its rightmost compound has an id, otherwise in
/// the class bucket if it has a class, otherwise in the tag bucket, and
/// otherwise among the other rules.
///
/// TODO: Tune the initial capacity of the HashMap
#[derive(Debug, Default)]
pub struct SelectorMap {
    id_hash: FnvHashMap<String, Vec<Rule>>,
    class_hash: FnvHashMap<String, Vec<Rule>>,
    local_name_hash: FnvHashMap<String, Vec<Rule>>,
    other_rules: Vec<Rule>,
    count: usize,
}

impl SelectorMap {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        SelectorMap::default()
    }

    /// The number of rules in the map.
    pub fn len(&self) -> usize {
        self.count
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Insert rule into the correct hash.
    /// Order in which to try: id_hash, class_hash, local_name_hash, other_rules.
    pub fn insert(&mut self, rule: Rule) {
        self.count += 1;

        if let Some(id_name) = rule.selector.rightmost_id() {
            let key = id_name.to_owned();
            self.id_hash.entry(key).or_default().push(rule);
            return;
        }

        if let Some(class_name) = rule.selector.rightmost_class() {
            let key = class_name.to_owned();
            self.class_hash.entry(key).or_default().push(rule);
            return;
        }

        if let Some(name) = rule.selector.rightmost_local_name() {
            let key = name.to_owned();
            self.local_name_hash.entry(key).or_default().push(rule);
            return;
        }

        self.other_rules.push(rule);
    }

    fn rules_mut(&mut self) -> impl Iterator<Item = &mut Rule> {
        self.id_hash
            .values_mut()
            .chain(self.class_hash.values_mut())
            .chain(self.local_name_hash.values_mut())
            .flatten()
            .chain(self.other_rules.iter_mut())
    }

    /// Calls `f` with every rule of the map whose bucket fits `element`.
    /// Rules from the other bucket are always candidates.
    pub fn each_candidate<'a, E, F>(&'a self, element: E, mut f: F)
    where
        E: TElement,
        F: FnMut(&'a Rule),
    {
        if let Some(id) = element.id() {
            if let Some(rules) = self.id_hash.get(id) {
                rules.iter().for_each(&mut f);
            }
        }

        element.each_class(|class| {
            if let Some(rules) = self.class_hash.get(class) {
                rules.iter().for_each(&mut f);
            }
        });

        let local_name = element.local_name().to_ascii_lowercase();
        if let Some(rules) = self.local_name_hash.get(&local_name) {
            rules.iter().for_each(&mut f);
        }

        self.other_rules.iter().for_each(&mut f);
    }

    /// Appends to `matching_rules` every rule whose selector matches, and
    /// sorts the appended part by specificity and source order.
    pub fn get_all_matching_rules<'a, E>(
        &'a self,
        element: E,
        pseudo: Option<PseudoId>,
        context: &mut MatchingContext,
        matching_rules: &mut Vec<&'a Rule>,
    ) where
        E: TElement,
    {
        if self.is_empty() {
            return;
        }
        let init_len = matching_rules.len();
        self.each_candidate(element, |rule| {
            // Repeated class names offer the same candidate twice.
            let seen = matching_rules[init_len..].iter().any(|r| std::ptr::eq(*r, rule));
            if !seen && matches_selector(&rule.selector, element, pseudo, context) {
                matching_rules.push(rule);
            }
        });
        sort_by_cascade_order(&mut matching_rules[init_len..]);
    }
}

/// Sorts rules by ascending specificity, then ascending source order.
pub fn sort_by_cascade_order(rules: &mut [&Rule]) {
    rules.sort_by_key(|rule| (rule.specificity(), rule.source_order));
}

bitflags! {
    /// The page pseudo-classes of a `@page` selector.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct PagePseudoClasses: u8 {
        /// `:first`
        const FIRST = 1 << 0;
        /// `:left`
        const LEFT = 1 << 1;
        /// `:right`
        const RIGHT = 1 << 2;
    }
}

/// The selector of an `@page` rule, such as `@page chapter:first`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageSelector {
    /// The page name, if any.
    pub name: Option<String>,
    /// The page pseudo-classes.
    pub pseudo_classes: PagePseudoClasses,
}

impl PageSelector {
    /// The specificity of the selector: a name weighs 0x10000, `:first`
    /// 0x100 and `:left` or `:right` 1.
    pub fn specificity(&self) -> u32 {
        let mut specificity = 0;
        if self.name.is_some() {
            specificity += 0x10000;
        }
        if self.pseudo_classes.contains(PagePseudoClasses::FIRST) {
            specificity += 0x100;
        }
        if self
            .pseudo_classes
            .intersects(PagePseudoClasses::LEFT | PagePseudoClasses::RIGHT)
        {
            specificity += 1;
        }
        specificity
    }

    /// Whether the selector applies to a page.
    pub fn matches(&self, is_left: bool, is_first: bool, page_name: Option<&str>) -> bool {
        if self.pseudo_classes.contains(PagePseudoClasses::LEFT) && !is_left {
            return false;
        }
        if self.pseudo_classes.contains(PagePseudoClasses::RIGHT) && is_left {
            return false;
        }
        if self.pseudo_classes.contains(PagePseudoClasses::FIRST) && !is_first {
            return false;
        }
        match self.name {
            Some(ref name) => page_name == Some(&**name),
            None => true,
        }
    }
}

/// An `@page` rule.
#[derive(Clone, Debug)]
pub struct PageRule {
    #[allow(missing_docs)]
    pub selector: PageSelector,
    #[allow(missing_docs)]
    pub declarations: Arc<PropertyDeclarationBlock>,
    #[allow(missing_docs)]
    pub source_order: u32,
}

/// A region style rule: the rules of `rules` apply to content flowing into
/// a region element that matches `selectors`.
#[derive(Debug)]
pub struct RegionRule {
    /// The selectors a region element must match.
    pub selectors: SelectorList,
    /// The style rules inside the region rule.
    pub rules: RuleSet,
}

/// The style rules of one cascade origin, or of one scoping element.
#[derive(Debug, Default)]
pub struct RuleSet {
    element_map: SelectorMap,
    pseudos_map: FnvHashMap<PseudoId, SelectorMap>,
    page_rules: Vec<PageRule>,
    region_rules: Vec<RegionRule>,
    rules_source_order: u32,
}

impl RuleSet {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        RuleSet::default()
    }

    /// Adds a style rule. Each selector of the list becomes a separate rule
    /// sharing the declarations.
    ///
    /// Selectors naming an unknown pseudo-element can never match and are
    /// not stored.
    pub fn add_style_rule(&mut self, selectors: &SelectorList, declarations: Arc<PropertyDeclarationBlock>) {
        let source_order = self.next_source_order();
        for selector in selectors.selectors() {
            let rule = Rule {
                selector: selector.clone(),
                declarations: declarations.clone(),
                source_order,
            };
            match selector.pseudo_element {
                None => self.element_map.insert(rule),
                Some(PseudoElement::Known(pseudo)) => {
                    self.pseudos_map.entry(pseudo).or_default().insert(rule)
                },
                Some(PseudoElement::Unknown(ref name)) => {
                    debug!("Dropping selector with unknown pseudo-element ::{}", name);
                },
            }
        }
    }

    /// Adds an `@page` rule.
    pub fn add_page_rule(&mut self, selector: PageSelector, declarations: Arc<PropertyDeclarationBlock>) {
        let source_order = self.next_source_order();
        self.page_rules.push(PageRule {
            selector,
            declarations,
            source_order,
        });
    }

    /// Adds a region rule.
    ///
    /// The rules inside take their source order from the position of the
    /// region rule, so they sort after the rules before it and before the
    /// rules after it.
    pub fn add_region_rule(&mut self, selectors: SelectorList, mut rules: RuleSet) {
        let base = self.rules_source_order;
        rules.shift_source_order(base);
        self.rules_source_order = rules.rules_source_order;
        self.region_rules.push(RegionRule { selectors, rules });
    }

    fn shift_source_order(&mut self, offset: u32) {
        let maps = std::iter::once(&mut self.element_map).chain(self.pseudos_map.values_mut());
        for rule in maps.flat_map(SelectorMap::rules_mut) {
            rule.source_order += offset;
        }
        for rule in &mut self.page_rules {
            rule.source_order += offset;
        }
        for region_rule in &mut self.region_rules {
            region_rule.rules.shift_source_order(offset);
        }
        self.rules_source_order += offset;
    }

    fn next_source_order(&mut self) -> u32 {
        let source_order = self.rules_source_order;
        self.rules_source_order += 1;
        source_order
    }

    /// The map holding the rules for the element itself, or for one of its
    /// pseudo-elements.
    pub fn map_for(&self, pseudo: Option<PseudoId>) -> Option<&SelectorMap> {
        match pseudo {
            None => Some(&self.element_map),
            Some(pseudo) => self.pseudos_map.get(&pseudo),
        }
    }

    /// The pseudo-elements some rule of this set targets.
    pub fn pseudo_elements(&self) -> impl Iterator<Item = PseudoId> + '_ {
        self.pseudos_map.keys().copied()
    }

    #[allow(missing_docs)]
    pub fn page_rules(&self) -> &[PageRule] {
        &self.page_rules
    }

    #[allow(missing_docs)]
    pub fn region_rules(&self) -> &[RegionRule] {
        &self.region_rules
    }

    /// The number of rules, counting each selector of a style rule once.
    pub fn rule_count(&self) -> usize {
        self.element_map.len() +
            self.pseudos_map.values().map(SelectorMap::len).sum::<usize>() +
            self.page_rules.len() +
            self.region_rules.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }

    /// The page rules that apply to a page, sorted by specificity and
    /// source order.
    pub fn matching_page_rules(
        &self,
        is_left: bool,
        is_first: bool,
        page_name: Option<&str>,
    ) -> Vec<&PageRule> {
        let mut rules: Vec<&PageRule> = self
            .page_rules
            .iter()
            .filter(|rule| rule.selector.matches(is_left, is_first, page_name))
            .collect();
        rules.sort_by_key(|rule| (rule.selector.specificity(), rule.source_order));
        rules
    }
}
