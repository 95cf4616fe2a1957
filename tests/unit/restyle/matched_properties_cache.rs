/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use restyle::applicable_declarations::{ApplicableDeclarationBlock, MatchResult, Origin};
use restyle::computed_style::ComputedStyle;
use restyle::context::StyleSystemOptions;
use restyle::device::Device;
use restyle::error_reporting::NullReporter;
use restyle::matched_properties_cache::{CacheLookup, MatchedPropertiesCache, compute_hash};
use restyle::properties::{CssValue, DeclaredValue};
use restyle::values::color::RGBA;
use restyle::StyleResolver;
use servo_arc::Arc;

use crate::dom::TestDocument;
use crate::{block_from, decl, keyword, resolver, stylesheet};

#[test]
fn siblings_reuse_the_cached_style() {
    let mut document = TestDocument::new("html");
    let first = document.append(TestDocument::ROOT, "div");
    let second = document.append(TestDocument::ROOT, "div");
    document.add_class(first, "a");
    document.add_class(second, "a");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![(".a", vec![decl("margin-left", CssValue::px(3.))])]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let first_style = resolver.style_for_element(document.element(first), Some(&root), false, None);
    let second_style = resolver.style_for_element(document.element(second), Some(&root), false, None);

    assert_eq!(first_style, second_style);
    assert!(!Arc::ptr_eq(&first_style, &second_style));
    assert_eq!(resolver.statistics().cache_full_hits, 1);
    assert_eq!(resolver.statistics().cache_misses, 2);
}

#[test]
fn equal_parents_reapply_inherited_properties() {
    let mut document = TestDocument::new("html");
    let section = document.append(TestDocument::ROOT, "section");
    let first_span = document.append(section, "span");
    let second_span = document.append(section, "span");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![("span", vec![decl("margin-left", CssValue::px(1.))])]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let first_parent = resolver.style_for_element(document.element(section), Some(&root), false, None);

    // Same inherited values, but in groups of its own.
    let mut detached = (*first_parent).clone();
    detached.set_color(RGBA::opaque(255, 0, 0));
    detached.set_color(first_parent.color());
    let second_parent = Arc::new(detached);
    assert!(first_parent.inherited_equal(&second_parent));
    assert!(!first_parent.inherited_data_shared(&second_parent));

    let first = resolver.style_for_element(document.element(first_span), Some(&first_parent), false, None);
    let second = resolver.style_for_element(document.element(second_span), Some(&second_parent), false, None);

    assert_eq!(resolver.statistics().cache_partial_hits, 1);
    assert_eq!(resolver.statistics().cache_full_hits, 0);
    assert_eq!(first, second);
}

#[test]
fn cached_styles_match_uncached_ones() {
    let mut document = TestDocument::new("html");
    let body = document.append(TestDocument::ROOT, "body");
    let paragraphs: Vec<usize> = (0..4)
        .map(|i| {
            let p = document.append(body, "p");
            if i % 2 == 0 {
                document.add_class(p, "even");
            }
            p
        })
        .collect();

    let rules = stylesheet(vec![
        ("body", vec![decl("color", CssValue::Color(RGBA::opaque(0, 128, 0)))]),
        ("p", vec![decl("margin-top", CssValue::em(1.)), decl("font-size", CssValue::px(12.))]),
        (".even", vec![decl("opacity", CssValue::Number(0.5))]),
    ]);

    let mut cached = resolver();
    cached.set_author_rules(rules.clone());

    let options = StyleSystemOptions {
        disable_style_sharing_cache: true,
        disable_matched_properties_cache: true,
        ..StyleSystemOptions::with_all_caches()
    };
    let mut uncached = StyleResolver::new(Device::default(), options);
    uncached.set_error_reporter(Box::new(NullReporter));
    uncached.set_author_rules(rules);

    for resolver in [&mut cached, &mut uncached] {
        resolver.push_parent_element(document.root());
    }
    let cached_root = cached.style_for_element(document.root(), None, true, None);
    let uncached_root = uncached.style_for_element(document.root(), None, true, None);
    let cached_body = cached.style_for_element(document.element(body), Some(&cached_root), true, None);
    let uncached_body = uncached.style_for_element(document.element(body), Some(&uncached_root), true, None);
    assert_eq!(cached_body, uncached_body);

    for &p in &paragraphs {
        let a = cached.style_for_element(document.element(p), Some(&cached_body), true, None);
        let b = uncached.style_for_element(document.element(p), Some(&uncached_body), true, None);
        assert_eq!(a, b);

        // Resolving again gives the same style.
        let again = cached.style_for_element(document.element(p), Some(&cached_body), true, None);
        assert_eq!(a, again);
    }

    assert_eq!(uncached.statistics().cache_full_hits, 0);
    assert_eq!(uncached.statistics().styles_shared, 0);
}

#[test]
fn explicit_inheritance_is_not_cached() {
    let mut document = TestDocument::new("html");
    let first = document.append(TestDocument::ROOT, "div");
    let second = document.append(TestDocument::ROOT, "div");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("html", vec![decl("margin-left", CssValue::px(4.))]),
        ("div", vec![keyword("margin-left", DeclaredValue::Inherit)]),
    ]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    resolver.style_for_element(document.element(first), Some(&root), false, None);
    resolver.style_for_element(document.element(second), Some(&root), false, None);

    assert_eq!(resolver.statistics().cache_full_hits, 0);
    assert_eq!(resolver.statistics().cache_partial_hits, 0);
}

fn match_result(block: &Arc<restyle::properties::PropertyDeclarationBlock>) -> MatchResult {
    let mut result = MatchResult::new();
    result.push(Origin::Author, ApplicableDeclarationBlock::from_declarations(block.clone()));
    result
}

#[test]
fn lookups_depend_on_the_parent() {
    let block = Arc::new(block_from(vec![decl("margin-left", CssValue::px(1.))]));
    let matched = match_result(&block);
    let hash = compute_hash(&matched);
    assert_ne!(hash, 0);

    let parent = Arc::new(ComputedStyle::new());
    let mut cache = MatchedPropertiesCache::new(100);
    cache.add(hash, &matched, Arc::new(ComputedStyle::new()), parent.clone());

    assert!(matches!(cache.find(hash, &matched, &parent, false), CacheLookup::FullHit(..)));
    assert!(matches!(cache.find(hash, &matched, &parent, true), CacheLookup::PartialHit(..)));

    let mut red_parent = ComputedStyle::new();
    red_parent.set_color(RGBA::opaque(255, 0, 0));
    assert!(matches!(cache.find(hash, &matched, &red_parent, false), CacheLookup::Miss));

    let other_block = Arc::new(block_from(vec![decl("margin-left", CssValue::px(1.))]));
    let other = match_result(&other_block);
    assert!(matches!(cache.find(compute_hash(&other), &other, &parent, false), CacheLookup::Miss));
}

#[test]
fn sweeping_evicts_entries_of_removed_rules() {
    let kept = Arc::new(block_from(vec![decl("margin-left", CssValue::px(1.))]));
    let removed = Arc::new(block_from(vec![decl("margin-left", CssValue::px(2.))]));

    let mut cache = MatchedPropertiesCache::new(100);
    let parent = Arc::new(ComputedStyle::new());
    for block in [&kept, &removed] {
        let matched = match_result(block);
        cache.add(compute_hash(&matched), &matched, Arc::new(ComputedStyle::new()), parent.clone());
    }
    assert_eq!(cache.len(), 2);

    drop(removed);
    cache.sweep();
    assert_eq!(cache.len(), 1);

    let matched = match_result(&kept);
    assert!(matches!(cache.find(compute_hash(&matched), &matched, &parent, false), CacheLookup::FullHit(..)));
}

#[test]
fn empty_results_are_not_cached() {
    assert_eq!(compute_hash(&MatchResult::new()), 0);
}
