/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use restyle::matching::RuleEnumerationFlags;
use restyle::properties::CssValue;
use restyle::rule_set::{PagePseudoClasses, PageSelector, RuleSet};
use restyle::selector_parser::{NamespaceMap, SelectorList};
use restyle::values::color::RGBA;
use restyle::values::keywords::{Direction, PseudoId};
use restyle::values::length::Length;
use servo_arc::Arc;

use crate::dom::TestDocument;
use crate::{block_from, decl, resolver, stylesheet};

const RED: RGBA = RGBA::opaque(255, 0, 0);

#[test]
fn pseudo_element_styles_are_resolved_on_demand() {
    let mut document = TestDocument::new("html");
    let paragraph = document.append(TestDocument::ROOT, "p");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("p", vec![decl("margin-left", CssValue::px(3.))]),
        ("p::before", vec![decl("color", CssValue::Color(RED))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, true, None);
    let style = resolver.style_for_element(document.element(paragraph), Some(&root), true, None);
    assert!(style.has_pseudo_style(PseudoId::Before));
    assert!(!style.has_pseudo_style(PseudoId::After));
    assert!(!root.has_pseudo_style(PseudoId::Before));

    let before = resolver
        .pseudo_style_for_element(document.element(paragraph), PseudoId::Before, &style)
        .unwrap();
    assert_eq!(before.style_type(), PseudoId::Before);
    assert_eq!(before.color(), RED);
    // Non-inherited values don't carry over from the element.
    assert_ne!(before.margin_left(), style.margin_left());

    assert!(resolver
        .pseudo_style_for_element(document.element(paragraph), PseudoId::After, &style)
        .is_none());

    let again = resolver
        .pseudo_style_for_element(document.element(paragraph), PseudoId::Before, &style)
        .unwrap();
    assert!(Arc::ptr_eq(&before, &again));
}

fn page_rules() -> Arc<RuleSet> {
    let mut rules = RuleSet::new();
    let mut page = |name: Option<&str>, pseudo_classes, declarations| {
        rules.add_page_rule(
            PageSelector {
                name: name.map(str::to_owned),
                pseudo_classes,
            },
            Arc::new(block_from(declarations)),
        );
    };
    page(None, PagePseudoClasses::empty(), vec![decl("margin-bottom", CssValue::px(1.))]);
    page(None, PagePseudoClasses::FIRST, vec![decl("margin-top", CssValue::px(10.))]);
    page(None, PagePseudoClasses::LEFT, vec![decl("margin-top", CssValue::px(20.))]);
    page(None, PagePseudoClasses::RIGHT, vec![decl("margin-top", CssValue::px(30.))]);
    page(Some("chapter"), PagePseudoClasses::empty(), vec![decl("margin-left", CssValue::px(5.))]);
    Arc::new(rules)
}

#[test]
fn page_styles_follow_page_pseudo_classes() {
    let document = TestDocument::new("html");
    let mut resolver = resolver();
    resolver.set_author_rules(page_rules());
    resolver.style_for_element(document.root(), None, true, None);

    assert_eq!(resolver.style_for_page(0, None).margin_top(), Length::Fixed(10.));
    assert_eq!(resolver.style_for_page(1, None).margin_top(), Length::Fixed(20.));
    assert_eq!(resolver.style_for_page(2, None).margin_top(), Length::Fixed(30.));
    assert_eq!(resolver.style_for_page(5, None).margin_bottom(), Length::Fixed(1.));

    let named = resolver.style_for_page(3, Some("chapter"));
    assert_eq!(named.margin_left(), Length::Fixed(5.));
    assert_ne!(resolver.style_for_page(3, None).margin_left(), Length::Fixed(5.));
}

#[test]
fn right_to_left_documents_start_on_a_left_page() {
    let document = TestDocument::new("html");
    let mut resolver = resolver();
    let mut rules = RuleSet::new();
    let namespaces = NamespaceMap::new();
    rules.add_style_rule(
        &SelectorList::parse("html", &namespaces).unwrap(),
        Arc::new(block_from(vec![
            decl("direction", CssValue::ident("rtl")),
            decl("color", CssValue::Color(RED)),
        ])),
    );
    rules.add_page_rule(
        PageSelector {
            name: None,
            pseudo_classes: PagePseudoClasses::LEFT,
        },
        Arc::new(block_from(vec![decl("margin-top", CssValue::px(20.))])),
    );
    resolver.set_author_rules(Arc::new(rules));

    let root = resolver.style_for_element(document.root(), None, true, None);
    assert_eq!(root.direction(), Direction::Rtl);

    let first = resolver.style_for_page(0, None);
    assert_eq!(first.margin_top(), Length::Fixed(20.));
    assert_ne!(resolver.style_for_page(1, None).margin_top(), Length::Fixed(20.));
    // Pages inherit from the document element.
    assert_eq!(first.color(), RED);
}

#[test]
fn scoped_rules_apply_inside_their_scope() {
    let mut document = TestDocument::new("html");
    let scope = document.append(TestDocument::ROOT, "section");
    let inside = document.append(scope, "p");
    let outside = document.append(TestDocument::ROOT, "p");

    let mut resolver = resolver();
    resolver.add_scoped_rules(
        document.element(scope),
        stylesheet(vec![
            ("p", vec![decl("margin-left", CssValue::px(5.))]),
            ("section", vec![decl("margin-top", CssValue::px(6.))]),
        ]),
    );

    resolver.push_parent_element(document.root());
    let root = resolver.style_for_element(document.root(), None, true, None);
    let scope_style = resolver.style_for_element(document.element(scope), Some(&root), true, None);
    assert_eq!(scope_style.margin_top(), Length::Fixed(6.));

    resolver.push_parent_element(document.element(scope));
    let inside_style = resolver.style_for_element(document.element(inside), Some(&scope_style), true, None);
    assert_eq!(inside_style.margin_left(), Length::Fixed(5.));
    resolver.pop_parent_element(document.element(scope));

    let outside_style = resolver.style_for_element(document.element(outside), Some(&root), true, None);
    assert_ne!(outside_style.margin_left(), Length::Fixed(5.));
    resolver.pop_parent_element(document.root());
}

#[test]
fn shadow_boundaries_hide_outer_scopes() {
    let mut document = TestDocument::new("html");
    let scope = document.append(TestDocument::ROOT, "section");
    let host = document.append(scope, "div");
    document.make_shadow_host(host);
    let shadow_child = document.append(host, "p");

    let mut resolver = resolver();
    resolver.add_scoped_rules(
        document.element(scope),
        stylesheet(vec![("p", vec![decl("margin-left", CssValue::px(5.))])]),
    );

    resolver.push_parent_element(document.root());
    resolver.push_parent_element(document.element(scope));
    resolver.push_parent_element(document.element(host));
    resolver.push_shadow_root_boundary(document.element(host));
    let style = resolver.style_rules_for_element(
        document.element(shadow_child),
        None,
        RuleEnumerationFlags::ALL_RULES,
    );
    assert!(style.is_empty());
    resolver.pop_shadow_root_boundary(document.element(host));

    let style = resolver.style_rules_for_element(
        document.element(shadow_child),
        None,
        RuleEnumerationFlags::ALL_RULES,
    );
    assert_eq!(style.len(), 1);
}

#[test]
fn region_rules_only_set_region_properties() {
    let mut document = TestDocument::new("html");
    let region = document.append(TestDocument::ROOT, "div");
    document.set_id(region, "region");
    let content = document.append(TestDocument::ROOT, "p");

    let namespaces = NamespaceMap::new();
    let mut region_rules = RuleSet::new();
    region_rules.add_style_rule(
        &SelectorList::parse("p", &namespaces).unwrap(),
        Arc::new(block_from(vec![
            decl("color", CssValue::Color(RED)),
            decl("margin-left", CssValue::px(7.)),
        ])),
    );
    let mut rules = RuleSet::new();
    rules.add_region_rule(SelectorList::parse("#region", &namespaces).unwrap(), region_rules);

    let mut resolver = resolver();
    resolver.set_author_rules(Arc::new(rules));

    let root = resolver.style_for_element(document.root(), None, true, None);
    let in_region = resolver.style_for_element(
        document.element(content),
        Some(&root),
        true,
        Some(document.element(region)),
    );
    assert_eq!(in_region.color(), RED);
    assert_ne!(in_region.margin_left(), Length::Fixed(7.));

    let elsewhere = resolver.style_for_element(document.element(content), Some(&root), true, None);
    assert_ne!(elsewhere.color(), RED);
}
