/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use restyle::cache::RecencyList;
use restyle::properties::CssValue;
use restyle::values::length::Length;
use servo_arc::Arc;

use crate::dom::TestDocument;
use crate::{block_from, decl, resolver, stylesheet};

fn rules() -> Arc<restyle::rule_set::RuleSet> {
    stylesheet(vec![
        ("p", vec![decl("margin-left", CssValue::px(2.))]),
        (".x", vec![decl("margin-top", CssValue::px(3.))]),
    ])
}

#[test]
fn similar_siblings_share_their_style() {
    let mut document = TestDocument::new("html");
    let body = document.append(TestDocument::ROOT, "body");
    let first = document.append(body, "p");
    let second = document.append(body, "p");
    let third = document.append(body, "p");
    for p in [first, second, third] {
        document.add_class(p, "x");
    }

    let mut resolver = resolver();
    resolver.set_author_rules(rules());

    let root = resolver.style_for_element(document.root(), None, true, None);
    let body_style = resolver.style_for_element(document.element(body), Some(&root), true, None);
    let first_style = resolver.style_for_element(document.element(first), Some(&body_style), true, None);
    let second_style = resolver.style_for_element(document.element(second), Some(&body_style), true, None);
    let third_style = resolver.style_for_element(document.element(third), Some(&body_style), true, None);

    assert!(Arc::ptr_eq(&first_style, &second_style));
    assert!(Arc::ptr_eq(&first_style, &third_style));
    assert_eq!(resolver.statistics().styles_shared, 2);
}

#[test]
fn structural_pseudo_classes_prevent_sharing() {
    let mut document = TestDocument::new("html");
    let body = document.append(TestDocument::ROOT, "body");
    let first = document.append(body, "p");
    let second = document.append(body, "p");
    let third = document.append(body, "p");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("p", vec![decl("margin-left", CssValue::px(2.))]),
        ("p:first-child", vec![decl("margin-bottom", CssValue::px(4.))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, true, None);
    let body_style = resolver.style_for_element(document.element(body), Some(&root), true, None);
    let first_style = resolver.style_for_element(document.element(first), Some(&body_style), true, None);
    let second_style = resolver.style_for_element(document.element(second), Some(&body_style), true, None);
    let third_style = resolver.style_for_element(document.element(third), Some(&body_style), true, None);

    assert_ne!(first_style.margin_bottom(), second_style.margin_bottom());
    assert!(!Arc::ptr_eq(&second_style, &third_style));
    assert_eq!(second_style, third_style);
    assert_eq!(resolver.statistics().styles_shared, 0);
}

#[test]
fn sharing_needs_permission() {
    let mut document = TestDocument::new("html");
    let body = document.append(TestDocument::ROOT, "body");
    document.append(body, "span");
    let first = document.append(body, "p");
    let second = document.append(body, "p");

    let mut resolver = resolver();
    resolver.set_author_rules(rules());

    let root = resolver.style_for_element(document.root(), None, true, None);
    let body_style = resolver.style_for_element(document.element(body), Some(&root), true, None);
    let first_style = resolver.style_for_element(document.element(first), Some(&body_style), true, None);
    let second_style = resolver.style_for_element(document.element(second), Some(&body_style), false, None);

    assert!(!Arc::ptr_eq(&first_style, &second_style));
    assert_eq!(first_style, second_style);
    assert_eq!(resolver.statistics().styles_shared, 0);
}

#[test]
fn distinguishing_features_prevent_sharing() {
    let mut document = TestDocument::new("html");
    let body = document.append(TestDocument::ROOT, "body");
    document.append(body, "span");
    let plain = document.append(body, "p");
    let with_id = document.append(body, "p");
    document.set_id(with_id, "unique");
    let with_class = document.append(body, "p");
    document.add_class(with_class, "x");
    let with_style = document.append(body, "p");
    document.set_style_attribute(with_style, block_from(vec![decl("margin-left", CssValue::px(2.))]));
    let div = document.append(body, "div");

    let mut resolver = resolver();
    resolver.set_author_rules(rules());

    let root = resolver.style_for_element(document.root(), None, true, None);
    let body_style = resolver.style_for_element(document.element(body), Some(&root), true, None);
    let plain_style = resolver.style_for_element(document.element(plain), Some(&body_style), true, None);
    for other in [with_id, with_class, with_style, div] {
        let style = resolver.style_for_element(document.element(other), Some(&body_style), true, None);
        assert!(!Arc::ptr_eq(&plain_style, &style), "{:?} shared", document.element(other));
    }
    assert_eq!(resolver.statistics().styles_shared, 0);
}

#[test]
fn children_of_different_parents_do_not_share() {
    let mut document = TestDocument::new("html");
    let first_section = document.append(TestDocument::ROOT, "section");
    let second_section = document.append(TestDocument::ROOT, "section");
    document.append(first_section, "span");
    let first = document.append(first_section, "p");
    document.append(second_section, "span");
    let second = document.append(second_section, "p");

    let mut resolver = resolver();
    resolver.set_author_rules(rules());

    let root = resolver.style_for_element(document.root(), None, true, None);
    let first_parent = resolver.style_for_element(document.element(first_section), Some(&root), false, None);
    let second_parent = resolver.style_for_element(document.element(second_section), Some(&root), false, None);
    let first_style = resolver.style_for_element(document.element(first), Some(&first_parent), true, None);
    let second_style = resolver.style_for_element(document.element(second), Some(&second_parent), true, None);

    assert!(!Arc::ptr_eq(&first_style, &second_style));
    assert_eq!(first_style, second_style);
}

#[test]
fn scoping_roots_do_not_share() {
    let mut document = TestDocument::new("html");
    let body = document.append(TestDocument::ROOT, "body");
    let first = document.append(body, "section");
    let second = document.append(body, "section");

    let mut resolver = resolver();
    resolver.add_scoped_rules(
        document.element(second),
        stylesheet(vec![("section", vec![decl("margin-top", CssValue::px(6.))])]),
    );

    let root = resolver.style_for_element(document.root(), None, true, None);
    let body_style = resolver.style_for_element(document.element(body), Some(&root), true, None);
    let first_style = resolver.style_for_element(document.element(first), Some(&body_style), true, None);
    let second_style = resolver.style_for_element(document.element(second), Some(&body_style), true, None);

    assert_eq!(second_style.margin_top(), Length::Fixed(6.));
    assert_ne!(first_style.margin_top(), Length::Fixed(6.));
    assert!(!Arc::ptr_eq(&first_style, &second_style));
    assert_eq!(resolver.statistics().styles_shared, 0);
}

#[test]
fn elements_do_not_share_with_a_scoping_root() {
    let mut document = TestDocument::new("html");
    let body = document.append(TestDocument::ROOT, "body");
    let first = document.append(body, "section");
    let second = document.append(body, "section");

    let mut resolver = resolver();
    resolver.add_scoped_rules(
        document.element(first),
        stylesheet(vec![("section", vec![decl("margin-top", CssValue::px(6.))])]),
    );

    let root = resolver.style_for_element(document.root(), None, true, None);
    let body_style = resolver.style_for_element(document.element(body), Some(&root), true, None);
    let first_style = resolver.style_for_element(document.element(first), Some(&body_style), true, None);
    let second_style = resolver.style_for_element(document.element(second), Some(&body_style), true, None);

    assert_eq!(first_style.margin_top(), Length::Fixed(6.));
    assert_ne!(second_style.margin_top(), Length::Fixed(6.));
    assert_eq!(resolver.statistics().styles_shared, 0);
}

#[test]
fn recency_list_evicts_the_least_recently_used() {
    let mut list = RecencyList::<&str, 3>::new();
    assert_eq!(list.remember("a"), None);
    assert_eq!(list.remember("b"), None);
    assert_eq!(list.remember("c"), None);
    list.promote(2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "c", "b"]);

    assert_eq!(list.remember("d"), Some("b"));
    assert_eq!(list.len(), 3);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["d", "a", "c"]);

    list.forget_all();
    assert!(list.is_empty());
}
