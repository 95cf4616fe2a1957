/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Collecting the declarations that apply to an element, in cascade order.

#![deny(missing_docs)]

use bitflags::bitflags;
use servo_arc::Arc;
use smallvec::SmallVec;

use crate::applicable_declarations::{ApplicableDeclarationBlock, LinkMatch, MatchResult, Origin};
use crate::bloom::BloomFilter;
use crate::dom::TElement;
use crate::rule_set::{Rule, RuleSet};
use crate::selector_matching::{MatchingContext, StyleRelations, VisitedHandling, matches_selector};
use crate::values::keywords::PseudoId;

bitflags! {
    /// Which rules `StyleResolver::style_rules_for_element` enumerates.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct RuleEnumerationFlags: u8 {
        /// Rules from the user agent and user style sheets.
        const UA_AND_USER_RULES = 1 << 0;
        /// Rules from author style sheets.
        const AUTHOR_RULES = 1 << 1;
        /// Rules without declarations.
        const EMPTY_RULES = 1 << 2;
        /// Every non-empty rule.
        const ALL_BUT_EMPTY_RULES = Self::UA_AND_USER_RULES.bits() | Self::AUTHOR_RULES.bits();
        /// Every rule.
        const ALL_RULES = Self::ALL_BUT_EMPTY_RULES.bits() | Self::EMPTY_RULES.bits();
    }
}

/// A rule set that applies only to the subtree of its scoping element.
#[derive(Clone, Debug)]
pub struct ScopedRuleSet<E: TElement> {
    /// The scoping element.
    pub scope: E,
    /// The rules of the scoped style sheets.
    pub rules: Arc<RuleSet>,
}

/// A rule that matched, waiting to be sorted into cascade order.
struct MatchedRule<'r> {
    rule: &'r Rule,
    link_match: LinkMatch,
    is_in_region_rule: bool,
    /// Zero for the document rules, then one more per scope.
    scope_depth: usize,
}

/// Collects the rules matching one element, or one of its pseudo-elements.
///
/// Origins must be matched in cascade order: user agent, then user, then
/// author.
pub struct ElementRuleCollector<'a, E: TElement> {
    element: E,
    pseudo: Option<PseudoId>,
    bloom_filter: Option<&'a BloomFilter>,
    inside_visited_link: bool,
    region: Option<E>,
    include_empty_rules: bool,
    result: MatchResult,
    matched_rules: Vec<Rule>,
    matched_pseudo_elements: SmallVec<[PseudoId; 4]>,
}

impl<'a, E: TElement> ElementRuleCollector<'a, E> {
    /// A collector for `element` or its pseudo-element `pseudo`.
    ///
    /// When `inside_visited_link` is set, every rule is matched twice so that
    /// declarations can be told apart by link channel.
    pub fn new(
        element: E,
        pseudo: Option<PseudoId>,
        bloom_filter: Option<&'a BloomFilter>,
        inside_visited_link: bool,
    ) -> Self {
        ElementRuleCollector {
            element,
            pseudo,
            bloom_filter,
            inside_visited_link,
            region: None,
            include_empty_rules: false,
            result: MatchResult::new(),
            matched_rules: vec![],
            matched_pseudo_elements: SmallVec::new(),
        }
    }

    /// Styles the element as content of the region element `region`, which
    /// makes matching region rules apply.
    pub fn set_region(&mut self, region: Option<E>) {
        self.region = region;
    }

    /// Keeps rules without declarations in the enumerated rules.
    pub fn set_include_empty_rules(&mut self, include: bool) {
        self.include_empty_rules = include;
    }

    /// Matches the user agent rules.
    pub fn match_ua_rules(&mut self, rules: &RuleSet) {
        self.collect_matching_rules(rules, Origin::UserAgent);
    }

    /// Matches the user rules.
    pub fn match_user_rules(&mut self, rules: &RuleSet) {
        self.collect_matching_rules(rules, Origin::User);
    }

    /// Adds the presentational hints of the element, which come first among
    /// the author declarations.
    pub fn match_presentational_hints(&mut self) {
        if self.pseudo.is_some() {
            return;
        }
        if let Some(hints) = self.element.presentational_hints() {
            self.result.relations |= StyleRelations::AFFECTED_BY_PRESENTATIONAL_HINTS;
            self.result
                .push(Origin::Author, ApplicableDeclarationBlock::from_declarations(hints));
        }
    }

    /// Matches the document author rules, the region rules that apply to
    /// the current region, and `scopes`, given from the outermost scope in.
    ///
    /// Matches from all of them are sorted together. Region rules take the
    /// source order of their position among the author rules, and a scoped
    /// rule set comes after the document and after the scopes around it.
    pub fn match_author_rules(&mut self, rules: &RuleSet, scopes: &[ScopedRuleSet<E>]) {
        let mut matched: Vec<MatchedRule<'_>> = vec![];
        let document = self.gather_matching_rules(rules);
        matched.extend(document.into_iter().map(|(rule, link_match)| MatchedRule {
            rule,
            link_match,
            is_in_region_rule: false,
            scope_depth: 0,
        }));

        if let Some(region) = self.region {
            for region_rule in rules.region_rules() {
                let mut context = MatchingContext::new(None, VisitedHandling::AllLinksUnvisited);
                let region_matches = region_rule
                    .selectors
                    .selectors()
                    .iter()
                    .any(|selector| matches_selector(selector, region, None, &mut context));
                if !region_matches {
                    continue;
                }
                // Region state isn't part of the cache key.
                self.result.is_cacheable = false;
                let in_region = self.gather_matching_rules(&region_rule.rules);
                matched.extend(in_region.into_iter().map(|(rule, link_match)| MatchedRule {
                    rule,
                    link_match,
                    is_in_region_rule: true,
                    scope_depth: 0,
                }));
            }
        }

        for (depth, scoped) in scopes.iter().enumerate() {
            let in_scope = self.gather_matching_rules(&scoped.rules);
            matched.extend(in_scope.into_iter().map(|(rule, link_match)| MatchedRule {
                rule,
                link_match,
                is_in_region_rule: false,
                scope_depth: depth + 1,
            }));
        }

        matched.sort_by_key(|m| (m.rule.specificity(), m.scope_depth, m.rule.source_order));
        self.push_matched_rules(matched, Origin::Author);
    }

    /// Adds the declarations of the `style` attribute, last among the author
    /// declarations.
    pub fn match_style_attribute(&mut self) {
        if self.pseudo.is_some() {
            return;
        }
        if let Some(style) = self.element.style_attribute() {
            self.result.relations |= StyleRelations::AFFECTED_BY_STYLE_ATTRIBUTE;
            if self.element.is_style_attribute_mutable() {
                // The block may change without the element being
                // restyled through the cache key.
                self.result.is_cacheable = false;
            }
            self.result
                .push(Origin::Author, ApplicableDeclarationBlock::from_declarations(style));
        }
    }

    fn collect_matching_rules(&mut self, rules: &RuleSet, origin: Origin) {
        let mut matched: Vec<MatchedRule<'_>> = self
            .gather_matching_rules(rules)
            .into_iter()
            .map(|(rule, link_match)| MatchedRule {
                rule,
                link_match,
                is_in_region_rule: false,
                scope_depth: 0,
            })
            .collect();
        matched.sort_by_key(|m| (m.rule.specificity(), m.rule.source_order));
        self.push_matched_rules(matched, origin);
    }

    /// The rules of `rules` matching the element, with the link channels
    /// each one matched in. The result isn't sorted.
    fn gather_matching_rules<'r>(&mut self, rules: &'r RuleSet) -> Vec<(&'r Rule, LinkMatch)> {
        if self.pseudo.is_none() {
            self.note_matching_pseudo_elements(rules);
        }

        let Some(map) = rules.map_for(self.pseudo) else {
            return vec![];
        };

        let mut unvisited = vec![];
        let mut context =
            MatchingContext::new(self.bloom_filter, VisitedHandling::AllLinksUnvisited);
        map.get_all_matching_rules(self.element, self.pseudo, &mut context, &mut unvisited);
        self.result.relations |= context.relations;

        if !self.inside_visited_link {
            return unvisited.into_iter().map(|rule| (rule, LinkMatch::ALL)).collect();
        }

        let mut matched: Vec<(&Rule, LinkMatch)> =
            unvisited.into_iter().map(|rule| (rule, LinkMatch::LINK)).collect();
        let mut visited = vec![];
        let mut context = MatchingContext::new(self.bloom_filter, VisitedHandling::AllLinksVisited);
        map.get_all_matching_rules(self.element, self.pseudo, &mut context, &mut visited);
        self.result.relations |= context.relations;
        for rule in visited {
            match matched.iter_mut().find(|(r, _)| std::ptr::eq(*r, rule)) {
                Some((_, link_match)) => *link_match |= LinkMatch::VISITED,
                None => matched.push((rule, LinkMatch::VISITED)),
            }
        }
        matched
    }

    fn push_matched_rules(&mut self, matched: Vec<MatchedRule<'_>>, origin: Origin) {
        for MatchedRule {
            rule,
            link_match,
            is_in_region_rule,
            ..
        } in matched
        {
            let is_empty = rule.declarations.is_empty();
            if !is_empty || self.include_empty_rules {
                self.matched_rules.push(rule.clone());
            }
            if is_empty {
                continue;
            }
            self.result.push(
                origin,
                ApplicableDeclarationBlock {
                    block: rule.declarations.clone(),
                    specificity: rule.specificity(),
                    source_order: rule.source_order,
                    link_match,
                    is_in_region_rule,
                },
            );
        }
    }

    fn note_matching_pseudo_elements(&mut self, rules: &RuleSet) {
        for pseudo in rules.pseudo_elements() {
            if !pseudo.is_public() || self.matched_pseudo_elements.contains(&pseudo) {
                continue;
            }
            let Some(map) = rules.map_for(Some(pseudo)) else {
                continue;
            };
            let mut matching = vec![];
            let mut context =
                MatchingContext::new(self.bloom_filter, VisitedHandling::AllLinksUnvisited);
            map.get_all_matching_rules(self.element, Some(pseudo), &mut context, &mut matching);
            if !matching.is_empty() {
                self.result.relations |= StyleRelations::AFFECTED_BY_PSEUDO_ELEMENTS;
                self.matched_pseudo_elements.push(pseudo);
            }
        }
    }

    /// The public pseudo-elements some rule matched, when collecting rules
    /// for the element itself.
    pub fn matched_pseudo_elements(&self) -> &[PseudoId] {
        &self.matched_pseudo_elements
    }

    /// The matched rules, in cascade order within each rule set.
    pub fn matched_rules(&self) -> &[Rule] {
        &self.matched_rules
    }

    /// Consumes the collector, returning the ordered declarations.
    pub fn into_match_result(self) -> MatchResult {
        self.result
    }

    /// Consumes the collector, returning the matched rules.
    pub fn into_matched_rules(self) -> Vec<Rule> {
        self.matched_rules
    }
}
