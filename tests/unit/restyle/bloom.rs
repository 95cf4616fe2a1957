/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use restyle::bloom::{BloomFilter, SelectorFilter, hash_str};
use restyle::matching::RuleEnumerationFlags;
use restyle::properties::CssValue;
use restyle::selector_parser::{NamespaceMap, SelectorList};

use crate::dom::{TestDocument, TestElement};
use crate::{decl, resolver, stylesheet};

#[test]
fn counting_filter_forgets_removed_names() {
    let mut filter = BloomFilter::new();
    let div = hash_str("div");
    assert!(!filter.might_contain_hash(div));

    filter.insert_hash(div);
    assert!(filter.might_contain_hash(div));
    filter.insert_hash(div);
    filter.remove_hash(div);
    assert!(filter.might_contain_hash(div));
    filter.remove_hash(div);
    assert!(!filter.might_contain_hash(div));

    let names: Vec<String> = (0..200).map(|i| format!("name-{}", i)).collect();
    for name in &names {
        filter.insert_hash(hash_str(name));
    }
    for name in &names {
        assert!(filter.might_contain_hash(hash_str(name)));
    }
    let false_positives = (0..1000)
        .filter(|i| filter.might_contain_hash(hash_str(&format!("other-{}", i))))
        .count();
    assert!(false_positives < 100, "{} false positives", false_positives);

    filter.clear();
    assert!(names.iter().all(|name| !filter.might_contain_hash(hash_str(name))));
}

#[test]
fn hashes_are_never_zero() {
    for name in ["", "div", "outer", "a-b"] {
        assert_ne!(hash_str(name), 0);
    }
    assert_eq!(hash_str("div"), hash_str("div"));
}

#[test]
fn filter_tracks_the_ancestor_chain() {
    let mut document = TestDocument::new("html");
    let section = document.append(TestDocument::ROOT, "SECTION");
    document.add_class(section, "outer");
    document.set_id(section, "main");
    let paragraph = document.append(section, "p");

    let mut filter = SelectorFilter::<TestElement>::new();
    assert!(filter.parent_stack_is_consistent(None));

    filter.push_parent(document.root());
    filter.push_parent(document.element(section));
    assert!(filter.parent_stack_is_consistent(Some(document.element(section))));
    assert!(!filter.parent_stack_is_consistent(Some(document.root())));
    for name in ["html", "section", "outer", "main"] {
        assert!(filter.filter().might_contain_hash(hash_str(name)), "{}", name);
    }

    assert_eq!(filter.pop_parent(), Some(document.element(section)));
    assert!(!filter.filter().might_contain_hash(hash_str("outer")));
    assert!(filter.filter().might_contain_hash(hash_str("html")));

    // Pushing out of order rebuilds the chain.
    filter.clear();
    filter.push_parent(document.element(paragraph));
    assert_eq!(filter.top(), Some(document.element(paragraph)));
    assert!(filter.filter().might_contain_hash(hash_str("outer")));
    filter.pop_parent();
    filter.pop_parent();
    filter.pop_parent();
    assert!(filter.is_empty());
    for name in ["html", "section", "outer", "main", "p"] {
        assert!(!filter.filter().might_contain_hash(hash_str(name)), "{}", name);
    }
}

#[test]
fn fast_reject_needs_missing_ancestors() {
    let mut document = TestDocument::new("html");
    let section = document.append(TestDocument::ROOT, "section");
    document.add_class(section, "outer");

    let mut filter = SelectorFilter::<TestElement>::new();
    filter.push_parent(document.root());
    filter.push_parent(document.element(section));

    let selector = |text: &str| SelectorList::parse(text, &NamespaceMap::new()).unwrap().selectors()[0].clone();
    assert!(!filter.fast_reject(&selector(".outer p")));
    assert!(!filter.fast_reject(&selector("html > section > p")));
    assert!(filter.fast_reject(&selector(".inner p")));
    assert!(filter.fast_reject(&selector("article p")));
    // Sibling compounds are not ancestors.
    assert!(!filter.fast_reject(&selector(".inner + p")));
}

#[test]
fn matching_agrees_with_and_without_the_filter() {
    let mut document = TestDocument::new("html");
    let section = document.append(TestDocument::ROOT, "section");
    document.add_class(section, "outer");
    let paragraph = document.append(section, "p");

    let rules = || {
        stylesheet(vec![
            (".outer p", vec![decl("margin-left", CssValue::px(1.))]),
            (".inner p", vec![decl("margin-left", CssValue::px(2.))]),
            ("html p", vec![decl("margin-top", CssValue::px(3.))]),
        ])
    };

    let mut filtered = resolver();
    filtered.set_author_rules(rules());
    filtered.push_parent_element(document.root());
    filtered.push_parent_element(document.element(section));
    let with_filter =
        filtered.style_rules_for_element(document.element(paragraph), None, RuleEnumerationFlags::ALL_RULES);

    let mut unfiltered = resolver();
    unfiltered.set_author_rules(rules());
    let without_filter =
        unfiltered.style_rules_for_element(document.element(paragraph), None, RuleEnumerationFlags::ALL_RULES);

    assert_eq!(with_filter.len(), 2);
    assert_eq!(with_filter.len(), without_filter.len());
    for (a, b) in with_filter.iter().zip(&without_filter) {
        assert_eq!(a.source_order, b.source_order);
    }
}
