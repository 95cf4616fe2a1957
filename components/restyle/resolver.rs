/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The style resolver: matches an element against the style sheets, cascades
//! the matched declarations into a computed style, and keeps the caches that
//! let similar elements skip part of that work.

use servo_arc::Arc;

use crate::applicable_declarations::{ApplicableDeclarationBlock, LinkMatch, MatchResult, Origin};
use crate::bloom::{BloomFilter, SelectorFilter};
use crate::cascade::{CascadeMode, cascade};
use crate::computed_style::ComputedStyle;
use crate::context::{ResolverStatistics, StyleSystemOptions};
use crate::device::{Device, DocumentState};
use crate::dom::{ElementState, TElement};
use crate::error_reporting::{CascadeErrorReporter, RustLogReporter};
use crate::font::FontSelector;
use crate::matched_properties_cache::{CacheLookup, MatchedPropertiesCache, compute_hash, is_cacheable};
use crate::matching::{ElementRuleCollector, RuleEnumerationFlags, ScopedRuleSet};
use crate::properties::builder::StyleBuilder;
use crate::properties::table::PropertyHandlerTable;
use crate::rule_set::{Rule, RuleSet};
use crate::sharing::StyleSharingCandidateCache;
use crate::style_adjuster::StyleAdjuster;
use crate::style_structs::InsideLink;
use crate::values::image::ImageLoader;
use crate::values::keywords::{Direction, PseudoId};

/// An entry of the scope stack kept along the tree walk.
#[derive(Clone, Debug)]
enum ScopeStackEntry<E: TElement> {
    /// The rules scoped to an ancestor being walked.
    Scope(ScopedRuleSet<E>),
    /// The root of a shadow tree hosted by this element. Scopes outside of
    /// it don't apply inside.
    ShadowBoundary(E),
}

/// This structure holds all the selectors and device characteristics for a
/// given document, along with the caches used while resolving styles for its
/// elements.
///
/// Styles are resolved in tree order: the caller notifies the resolver with
/// [`StyleResolver::push_parent_element`] before styling the children of an
/// element and with [`StyleResolver::pop_parent_element`] afterwards.
pub struct StyleResolver<E: TElement> {
    /// Device that the document is being rendered on.
    device: Device,

    /// Document-wide state the cascade records.
    document: DocumentState,

    /// The property handlers, shared by every resolver.
    table: &'static PropertyHandlerTable,

    /// Rules from the user agent style sheets.
    user_agent_rules: Arc<RuleSet>,

    /// Rules from the user style sheets.
    user_rules: Arc<RuleSet>,

    /// Rules from the document's author style sheets.
    author_rules: Arc<RuleSet>,

    /// Every rule set scoped to an element, in registration order.
    scoped_rules: Vec<ScopedRuleSet<E>>,

    /// Scopes and shadow boundaries of the ancestors being walked.
    scope_stack: Vec<ScopeStackEntry<E>>,

    /// The style of the document element, which `rem` units and page styles
    /// read.
    root_element_style: Option<Arc<ComputedStyle>>,

    matched_properties_cache: MatchedPropertiesCache,
    sharing_cache: StyleSharingCandidateCache<E>,
    selector_filter: SelectorFilter<E>,

    font_selector: Option<Box<dyn FontSelector>>,
    image_loader: Option<Box<dyn ImageLoader>>,
    reporter: Box<dyn CascadeErrorReporter>,

    options: StyleSystemOptions,
    statistics: ResolverStatistics,
}

impl<E: TElement> StyleResolver<E> {
    /// Construct a new resolver for `device`, with empty style sheets.
    pub fn new(device: Device, options: StyleSystemOptions) -> Self {
        Self::with_property_table(device, options, PropertyHandlerTable::shared())
    }

    /// Construct a new resolver that applies properties through `table`.
    pub fn with_property_table(
        device: Device,
        options: StyleSystemOptions,
        table: &'static PropertyHandlerTable,
    ) -> Self {
        StyleResolver {
            device,
            document: DocumentState::default(),
            table,
            user_agent_rules: Arc::new(RuleSet::new()),
            user_rules: Arc::new(RuleSet::new()),
            author_rules: Arc::new(RuleSet::new()),
            scoped_rules: vec![],
            scope_stack: vec![],
            root_element_style: None,
            matched_properties_cache: MatchedPropertiesCache::new(options.cache_sweep_interval),
            sharing_cache: StyleSharingCandidateCache::new(),
            selector_filter: SelectorFilter::new(),
            font_selector: None,
            image_loader: None,
            reporter: Box::new(RustLogReporter),
            options,
            statistics: ResolverStatistics::default(),
        }
    }

    /// The device styles are resolved for.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Replaces the device, invalidating every cached style.
    pub fn set_device(&mut self, device: Device) {
        self.device = device;
        self.clear_caches();
    }

    /// The document-wide state recorded by the cascade.
    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    /// The style computed for the document element, if it was resolved.
    pub fn root_element_style(&self) -> Option<&Arc<ComputedStyle>> {
        self.root_element_style.as_ref()
    }

    /// Replaces the user agent style sheets.
    pub fn set_user_agent_rules(&mut self, rules: Arc<RuleSet>) {
        self.user_agent_rules = rules;
        self.clear_caches();
    }

    /// Replaces the user style sheets.
    pub fn set_user_rules(&mut self, rules: Arc<RuleSet>) {
        self.user_rules = rules;
        self.clear_caches();
    }

    /// Replaces the document's author style sheets.
    pub fn set_author_rules(&mut self, rules: Arc<RuleSet>) {
        self.author_rules = rules;
        self.clear_caches();
    }

    /// Registers the rules of the style sheets scoped to `scope`.
    pub fn add_scoped_rules(&mut self, scope: E, rules: Arc<RuleSet>) {
        self.scoped_rules.push(ScopedRuleSet { scope, rules });
        self.clear_caches();
    }

    /// Sets the collaborator that selects fonts.
    pub fn set_font_selector(&mut self, selector: Box<dyn FontSelector>) {
        self.font_selector = Some(selector);
    }

    /// Sets the collaborator that starts image loads.
    pub fn set_image_loader(&mut self, loader: Box<dyn ImageLoader>) {
        self.image_loader = Some(loader);
    }

    /// Sets where invalid declarations are reported.
    pub fn set_error_reporter(&mut self, reporter: Box<dyn CascadeErrorReporter>) {
        self.reporter = reporter;
    }

    /// The counters accumulated so far.
    pub fn statistics(&self) -> &ResolverStatistics {
        &self.statistics
    }

    /// Forgets every cached style.
    pub fn clear_caches(&mut self) {
        self.matched_properties_cache.clear();
        self.sharing_cache.clear();
    }

    /// Notifies the resolver that the children of `element` are about to be
    /// styled.
    pub fn push_parent_element(&mut self, element: E) {
        self.selector_filter.push_parent(element);
        if let Some(scoped) = self.scoped_rules.iter().find(|scoped| scoped.scope == element) {
            self.scope_stack.push(ScopeStackEntry::Scope(scoped.clone()));
        }
    }

    /// Notifies the resolver that the children of `element` are done.
    pub fn pop_parent_element(&mut self, element: E) {
        let popped = self.selector_filter.pop_parent();
        debug_assert_eq!(popped, Some(element), "Unbalanced pop_parent_element");
        let is_scope = matches!(
            self.scope_stack.last(),
            Some(ScopeStackEntry::Scope(scoped)) if scoped.scope == element
        );
        if is_scope {
            self.scope_stack.pop();
        }
    }

    /// Notifies the resolver that the shadow tree hosted by `host` is about
    /// to be styled.
    pub fn push_shadow_root_boundary(&mut self, host: E) {
        self.scope_stack.push(ScopeStackEntry::ShadowBoundary(host));
    }

    /// Notifies the resolver that the shadow tree hosted by `host` is done.
    pub fn pop_shadow_root_boundary(&mut self, host: E) {
        let is_boundary = matches!(
            self.scope_stack.last(),
            Some(ScopeStackEntry::ShadowBoundary(boundary)) if *boundary == host
        );
        debug_assert!(is_boundary, "Unbalanced pop_shadow_root_boundary");
        if is_boundary {
            self.scope_stack.pop();
        }
    }

    /// The scoped rule sets that apply to `element`, outermost first.
    fn scopes_for(&self, element: E) -> Vec<ScopedRuleSet<E>> {
        let start = self
            .scope_stack
            .iter()
            .rposition(|entry| matches!(entry, ScopeStackEntry::ShadowBoundary(..)))
            .map_or(0, |index| index + 1);

        let mut scopes: Vec<ScopedRuleSet<E>> = self.scope_stack[start..]
            .iter()
            .filter_map(|entry| match entry {
                ScopeStackEntry::Scope(scoped) if is_inclusive_ancestor(scoped.scope, element) => {
                    Some(scoped.clone())
                },
                _ => None,
            })
            .collect();

        // Rules scoped to the element itself apply to it too.
        if let Some(own) = self.scoped_rules.iter().find(|scoped| scoped.scope == element) {
            if !scopes.iter().any(|scoped| scoped.scope == element) {
                scopes.push(own.clone());
            }
        }
        scopes
    }

    /// Whether non-empty scoped rules are registered on `element`.
    fn is_scoping_root(&self, element: E) -> bool {
        self.scoped_rules
            .iter()
            .any(|scoped| scoped.scope == element && !scoped.rules.is_empty())
    }

    /// The bloom filter, if it describes the ancestors of `element`.
    fn bloom_filter_for(&self, element: E) -> Option<&BloomFilter> {
        if self.selector_filter.parent_stack_is_consistent(element.parent_element()) {
            Some(self.selector_filter.filter())
        } else {
            None
        }
    }

    fn collect_rules(
        &self,
        element: E,
        pseudo: Option<PseudoId>,
        region: Option<E>,
        inside_visited_link: bool,
    ) -> (MatchResult, Vec<PseudoId>) {
        let scopes = self.scopes_for(element);
        let mut collector = ElementRuleCollector::new(
            element,
            pseudo,
            self.bloom_filter_for(element),
            inside_visited_link,
        );
        collector.set_region(region);

        collector.match_ua_rules(&self.user_agent_rules);
        if self.device.author_and_user_styles_enabled {
            collector.match_user_rules(&self.user_rules);
        }
        collector.match_presentational_hints();
        if self.device.author_and_user_styles_enabled {
            collector.match_author_rules(&self.author_rules, &scopes);
            collector.match_style_attribute();
        }

        let pseudo_elements = collector.matched_pseudo_elements().to_vec();
        (collector.into_match_result(), pseudo_elements)
    }

    /// Runs the cascade for `matched` on top of `style`.
    fn apply_matched(
        &mut self,
        style: ComputedStyle,
        parent_style: Option<&ComputedStyle>,
        matched: &MatchResult,
        mode: CascadeMode,
        element_is_root: bool,
    ) -> ComputedStyle {
        let root_element_style = if element_is_root {
            None
        } else {
            self.root_element_style.as_deref()
        };
        let mut builder = StyleBuilder::new(
            style,
            parent_style,
            root_element_style,
            &self.device,
            &self.document,
            self.table,
            &*self.reporter,
        );
        builder.element_is_root = element_is_root;
        builder.font_selector = self.font_selector.as_deref();

        cascade(&mut builder, matched, mode);

        self.statistics.declarations_ignored += builder.ignored_declarations();
        let mut style = builder.build();
        style.load_pending_images(self.image_loader.as_deref());
        style
    }

    /// Computes the style for `matched`, going through the matched
    /// properties cache when there is a parent to key it with.
    ///
    /// The returned style is not adjusted yet; that's also what the cache
    /// stores.
    fn cascade_with_cache(
        &mut self,
        mut style: ComputedStyle,
        parent_style: Option<&Arc<ComputedStyle>>,
        matched: &MatchResult,
        element_is_root: bool,
        is_at_shadow_boundary: bool,
    ) -> ComputedStyle {
        let Some(parent_style) = parent_style else {
            self.statistics.cache_misses += 1;
            return self.apply_matched(style, None, matched, CascadeMode::All, element_is_root);
        };

        let hash = if self.options.disable_matched_properties_cache {
            0
        } else {
            compute_hash(matched)
        };

        match self
            .matched_properties_cache
            .find(hash, matched, parent_style, is_at_shadow_boundary)
        {
            CacheLookup::FullHit(cached) => {
                self.statistics.cache_full_hits += 1;
                // The link state is kept like an inherited property, but it
                // belongs to this element.
                let inside_link = style.inside_link();
                style.copy_non_inherited_from(&cached);
                style.inherit_from(&cached, false);
                style.set_inside_link(inside_link);
                return style;
            },
            CacheLookup::PartialHit(cached) => {
                self.statistics.cache_partial_hits += 1;
                style.copy_non_inherited_from(&cached);
                return self.apply_matched(
                    style,
                    Some(parent_style),
                    matched,
                    CascadeMode::InheritedOnly,
                    element_is_root,
                );
            },
            CacheLookup::Miss => self.statistics.cache_misses += 1,
        }

        let style = self.apply_matched(
            style,
            Some(parent_style),
            matched,
            CascadeMode::All,
            element_is_root,
        );

        if hash != 0 && is_cacheable(&style, parent_style, element_is_root, &self.document) {
            self.matched_properties_cache.add(
                hash,
                matched,
                Arc::new(style.clone()),
                parent_style.clone(),
            );
        }
        style
    }

    /// Resolves the style of `element`.
    ///
    /// `parent_style` is the style of the parent element, or `None` for the
    /// document element. When `sharing_allowed` is set the style may be
    /// shared with a sibling styled earlier. `region` is the region element
    /// the element flows into, if any.
    pub fn style_for_element(
        &mut self,
        element: E,
        parent_style: Option<&Arc<ComputedStyle>>,
        sharing_allowed: bool,
        region: Option<E>,
    ) -> Arc<ComputedStyle> {
        self.statistics.elements_styled += 1;

        let use_sharing_cache =
            sharing_allowed && region.is_none() && !self.options.disable_style_sharing_cache;
        let is_scoping_root = self.is_scoping_root(element);
        if use_sharing_cache {
            if let Some(parent_style) = parent_style {
                if let Ok(shared) =
                    self.sharing_cache
                        .share_style_if_possible(element, parent_style, is_scoping_root)
                {
                    self.statistics.styles_shared += 1;
                    return shared;
                }
            }
        }

        let is_at_shadow_boundary = element
            .parent_element()
            .is_some_and(|parent| parent.is_shadow_host());
        let mut style = match parent_style {
            Some(parent_style) => ComputedStyle::new_inheriting_from(parent_style, is_at_shadow_boundary),
            None => ComputedStyle::new(),
        };

        let inside_link = if element.is_link() {
            if element.state().contains(ElementState::VISITED) {
                InsideLink::InsideVisitedLink
            } else {
                InsideLink::InsideUnvisitedLink
            }
        } else {
            parent_style.map_or(InsideLink::NotInsideLink, |parent| parent.inside_link())
        };
        style.set_inside_link(inside_link);

        let (matched, pseudo_elements) = self.collect_rules(
            element,
            None,
            region,
            inside_link == InsideLink::InsideVisitedLink,
        );

        let element_is_root = element.is_root();
        let mut style = self.cascade_with_cache(
            style,
            parent_style,
            &matched,
            element_is_root,
            is_at_shadow_boundary,
        );

        for pseudo in pseudo_elements {
            style.set_has_pseudo_style(pseudo);
        }

        StyleAdjuster::new(&mut style, element_is_root).adjust(parent_style.map(|parent| &**parent));

        let style = Arc::new(style);
        if element_is_root {
            self.root_element_style = Some(style.clone());
        }

        if use_sharing_cache {
            if let Some(parent_style) = parent_style {
                self.sharing_cache
                    .insert_if_possible(element, &style, parent_style, matched.relations, is_scoping_root);
            }
        }

        style
    }

    /// Resolves the style of the `pseudo` pseudo-element of `element`, whose
    /// style is `parent_style`.
    ///
    /// Returns `None` when no rule styles the pseudo-element. Resolved styles
    /// are cached on `parent_style`.
    pub fn pseudo_style_for_element(
        &mut self,
        element: E,
        pseudo: PseudoId,
        parent_style: &Arc<ComputedStyle>,
    ) -> Option<Arc<ComputedStyle>> {
        if let Some(cached) = parent_style.cached_pseudo_style(pseudo) {
            return Some(cached);
        }

        let (matched, _) = self.collect_rules(
            element,
            Some(pseudo),
            None,
            parent_style.inside_link() == InsideLink::InsideVisitedLink,
        );
        if matched.is_empty() {
            return None;
        }

        let mut style = ComputedStyle::new_inheriting_from(parent_style, false);
        style.set_style_type(pseudo);
        let mut style = self.cascade_with_cache(style, Some(parent_style), &matched, false, false);
        StyleAdjuster::new(&mut style, false).adjust(Some(parent_style));

        Some(parent_style.add_cached_pseudo_style(Arc::new(style)))
    }

    /// Whether the page at `page_index` is a left page. The first page is a
    /// right page in left-to-right documents.
    fn is_left_page(&self, page_index: u32) -> bool {
        let first_page_is_left = self
            .root_element_style
            .as_ref()
            .is_some_and(|style| style.direction() == Direction::Rtl);
        (page_index + u32::from(first_page_is_left)) % 2 == 1
    }

    /// Resolves the style of the page at `page_index`, named `page_name`.
    ///
    /// Pages inherit from the document element's style.
    pub fn style_for_page(&mut self, page_index: u32, page_name: Option<&str>) -> Arc<ComputedStyle> {
        let is_left = self.is_left_page(page_index);
        let is_first = page_index == 0;

        let mut matched = MatchResult::new();
        let mut push_page_rules = |rules: &RuleSet, origin: Origin| {
            for rule in rules.matching_page_rules(is_left, is_first, page_name) {
                matched.push(
                    origin,
                    ApplicableDeclarationBlock {
                        block: rule.declarations.clone(),
                        specificity: rule.selector.specificity(),
                        source_order: rule.source_order,
                        link_match: LinkMatch::ALL,
                        is_in_region_rule: false,
                    },
                );
            }
        };
        push_page_rules(&self.user_agent_rules, Origin::UserAgent);
        if self.device.author_and_user_styles_enabled {
            push_page_rules(&self.user_rules, Origin::User);
            push_page_rules(&self.author_rules, Origin::Author);
        }

        let root_element_style = self.root_element_style.clone();
        let style = match root_element_style {
            Some(ref root) => ComputedStyle::new_inheriting_from(root, false),
            None => ComputedStyle::new(),
        };
        let style = self.apply_matched(
            style,
            root_element_style.as_deref(),
            &matched,
            CascadeMode::All,
            false,
        );
        Arc::new(style)
    }

    /// The rules matching `element`, or its `pseudo` pseudo-element, in
    /// cascade order. Which origins are enumerated depends on `flags`.
    pub fn style_rules_for_element(
        &self,
        element: E,
        pseudo: Option<PseudoId>,
        flags: RuleEnumerationFlags,
    ) -> Vec<Rule> {
        let scopes = self.scopes_for(element);
        let mut collector = ElementRuleCollector::new(element, pseudo, self.bloom_filter_for(element), false);
        collector.set_include_empty_rules(flags.contains(RuleEnumerationFlags::EMPTY_RULES));

        if flags.contains(RuleEnumerationFlags::UA_AND_USER_RULES) {
            collector.match_ua_rules(&self.user_agent_rules);
            if self.device.author_and_user_styles_enabled {
                collector.match_user_rules(&self.user_rules);
            }
        }
        if flags.contains(RuleEnumerationFlags::AUTHOR_RULES) && self.device.author_and_user_styles_enabled {
            collector.match_author_rules(&self.author_rules, &scopes);
        }
        collector.into_matched_rules()
    }
}

fn is_inclusive_ancestor<E: TElement>(ancestor: E, element: E) -> bool {
    let mut current = Some(element);
    while let Some(e) = current {
        if e == ancestor {
            return true;
        }
        current = e.parent_element();
    }
    false
}

impl<E: TElement> Drop for StyleResolver<E> {
    fn drop(&mut self) {
        if self.options.dump_style_statistics {
            info!("{}", self.statistics);
        }
    }
}
