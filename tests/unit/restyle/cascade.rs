/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use restyle::computed_style::initial_values;
use restyle::properties::{CssValue, DeclaredValue};
use restyle::rule_set::RuleSet;
use restyle::selector_parser::{NamespaceMap, SelectorList};
use restyle::style_structs::InsideLink;
use restyle::values::color::RGBA;
use restyle::values::length::Length;
use servo_arc::Arc;

use crate::dom::TestDocument;
use crate::{approx_eq, block_from, decl, important, keyword, resolver, stylesheet};

const RED: RGBA = RGBA::opaque(255, 0, 0);
const BLUE: RGBA = RGBA::opaque(0, 0, 255);

#[test]
fn author_rules_beat_user_and_user_agent_rules() {
    let mut document = TestDocument::new("html");
    let div = document.append(TestDocument::ROOT, "div");

    let mut resolver = resolver();
    resolver.set_user_agent_rules(stylesheet(vec![("div", vec![decl("margin-left", CssValue::px(1.))])]));
    resolver.set_user_rules(stylesheet(vec![("div", vec![decl("margin-left", CssValue::px(2.))])]));
    resolver.set_author_rules(stylesheet(vec![("div", vec![decl("margin-left", CssValue::px(3.))])]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let style = resolver.style_for_element(document.element(div), Some(&root), false, None);
    assert_eq!(style.margin_left(), Length::Fixed(3.));
}

#[test]
fn important_user_declarations_win() {
    let mut document = TestDocument::new("html");
    let div = document.append(TestDocument::ROOT, "div");

    let mut resolver = resolver();
    resolver.set_user_rules(stylesheet(vec![("div", vec![important("margin-left", CssValue::px(4.))])]));
    resolver.set_author_rules(stylesheet(vec![
        ("div", vec![important("margin-left", CssValue::px(5.))]),
        ("#foo", vec![decl("margin-left", CssValue::px(6.))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let style = resolver.style_for_element(document.element(div), Some(&root), false, None);
    assert_eq!(style.margin_left(), Length::Fixed(4.));
}

#[test]
fn user_agent_important_is_not_special() {
    let mut document = TestDocument::new("html");
    let div = document.append(TestDocument::ROOT, "div");

    let mut resolver = resolver();
    resolver.set_user_agent_rules(stylesheet(vec![("div", vec![important("margin-left", CssValue::px(9.))])]));
    resolver.set_author_rules(stylesheet(vec![("div", vec![decl("margin-left", CssValue::px(3.))])]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let style = resolver.style_for_element(document.element(div), Some(&root), false, None);
    assert_eq!(style.margin_left(), Length::Fixed(3.));
}

#[test]
fn specificity_then_source_order() {
    let mut document = TestDocument::new("html");
    let div = document.append(TestDocument::ROOT, "div");
    document.set_id(div, "main");
    document.add_class(div, "box");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("#main", vec![decl("margin-left", CssValue::px(1.))]),
        (".box", vec![decl("margin-left", CssValue::px(2.)), decl("margin-top", CssValue::px(2.))]),
        ("div", vec![decl("margin-top", CssValue::px(3.))]),
        ("div.box", vec![decl("margin-right", CssValue::px(4.))]),
        ("html div.box", vec![decl("margin-right", CssValue::px(5.))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let style = resolver.style_for_element(document.element(div), Some(&root), false, None);
    assert_eq!(style.margin_left(), Length::Fixed(1.));
    assert_eq!(style.margin_top(), Length::Fixed(2.));
    assert_eq!(style.margin_right(), Length::Fixed(5.));
}

#[test]
fn style_attribute_and_presentational_hints() {
    let mut document = TestDocument::new("html");
    let hinted = document.append(TestDocument::ROOT, "div");
    document.set_presentational_hints(
        hinted,
        block_from(vec![
            decl("margin-left", CssValue::px(7.)),
            decl("margin-top", CssValue::px(7.)),
        ]),
    );
    let inline = document.append(TestDocument::ROOT, "div");
    document.add_class(inline, "x");
    document.set_style_attribute(inline, block_from(vec![decl("margin-left", CssValue::px(8.))]));

    let mut resolver = resolver();
    resolver.set_user_agent_rules(stylesheet(vec![("div", vec![decl("margin-top", CssValue::px(1.))])]));
    resolver.set_author_rules(stylesheet(vec![
        ("div", vec![decl("margin-left", CssValue::px(2.))]),
        (".x", vec![decl("margin-top", CssValue::px(3.))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, false, None);

    // Hints override the user agent but lose to author rules.
    let style = resolver.style_for_element(document.element(hinted), Some(&root), false, None);
    assert_eq!(style.margin_left(), Length::Fixed(2.));
    assert_eq!(style.margin_top(), Length::Fixed(7.));

    let style = resolver.style_for_element(document.element(inline), Some(&root), false, None);
    assert_eq!(style.margin_left(), Length::Fixed(8.));
    assert_eq!(style.margin_top(), Length::Fixed(3.));
}

#[test]
fn author_styles_can_be_disabled() {
    let mut document = TestDocument::new("html");
    let div = document.append(TestDocument::ROOT, "div");
    document.set_style_attribute(div, block_from(vec![decl("margin-left", CssValue::px(8.))]));

    let mut resolver = resolver();
    let mut device = resolver.device().clone();
    device.author_and_user_styles_enabled = false;
    resolver.set_device(device);
    resolver.set_user_agent_rules(stylesheet(vec![("div", vec![decl("margin-left", CssValue::px(1.))])]));
    resolver.set_author_rules(stylesheet(vec![("div", vec![decl("margin-left", CssValue::px(3.))])]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let style = resolver.style_for_element(document.element(div), Some(&root), false, None);
    assert_eq!(style.margin_left(), Length::Fixed(1.));
}

#[test]
fn inherit_initial_and_unset() {
    let mut document = TestDocument::new("html");
    let inheriting = document.append(TestDocument::ROOT, "div");
    let resetting = document.append(TestDocument::ROOT, "p");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("html", vec![
            decl("margin-left", CssValue::px(5.)),
            decl("color", CssValue::Color(RED)),
            decl("clip", CssValue::ident("auto")),
        ]),
        ("div", vec![
            keyword("margin-left", DeclaredValue::Inherit),
            keyword("clip", DeclaredValue::Inherit),
        ]),
        ("p", vec![
            keyword("color", DeclaredValue::Initial),
            keyword("margin-left", DeclaredValue::Unset),
        ]),
    ]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    assert_eq!(root.color(), RED);

    let style = resolver.style_for_element(document.element(inheriting), Some(&root), false, None);
    assert_eq!(style.margin_left(), Length::Fixed(5.));
    assert_eq!(style.color(), RED);
    assert!(!style.has_clip());
    assert!(style.explicit_inheritance());

    let style = resolver.style_for_element(document.element(resetting), Some(&root), false, None);
    assert_eq!(style.color(), initial_values().color());
    assert_eq!(style.margin_left(), initial_values().margin_left());
}

#[test]
fn inherit_on_the_root_is_initial() {
    let document = TestDocument::new("html");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![("html", vec![keyword("margin-left", DeclaredValue::Inherit)])]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    assert_eq!(root.margin_left(), initial_values().margin_left());
}

#[test]
fn relative_font_sizes() {
    let mut document = TestDocument::new("html");
    let larger = document.append(TestDocument::ROOT, "big");
    let smaller = document.append(TestDocument::ROOT, "small");
    let em = document.append(TestDocument::ROOT, "span");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("html", vec![decl("font-size", CssValue::px(10.))]),
        ("big", vec![decl("font-size", CssValue::ident("larger"))]),
        ("small", vec![decl("font-size", CssValue::ident("smaller"))]),
        ("span", vec![decl("font-size", CssValue::em(2.)), decl("margin-left", CssValue::em(1.5))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    assert!(approx_eq(root.specified_font_size(), 10.));

    let style = resolver.style_for_element(document.element(larger), Some(&root), false, None);
    assert!(approx_eq(style.specified_font_size(), 12.));

    let style = resolver.style_for_element(document.element(smaller), Some(&root), false, None);
    assert!(approx_eq(style.specified_font_size(), 10. / 1.2));

    let style = resolver.style_for_element(document.element(em), Some(&root), false, None);
    assert!(approx_eq(style.specified_font_size(), 20.));
    assert_eq!(style.margin_left(), Length::Fixed(30.));
}

#[test]
fn unitless_line_height_is_a_percentage() {
    let mut document = TestDocument::new("html");
    let div = document.append(TestDocument::ROOT, "div");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![("div", vec![decl("line-height", CssValue::Number(1.5))])]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let style = resolver.style_for_element(document.element(div), Some(&root), false, None);
    assert_eq!(style.line_height(), Length::Percent(150.));
}

#[test]
fn huge_percentage_line_height_saturates() {
    let mut document = TestDocument::new("html");
    let div = document.append(TestDocument::ROOT, "div");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![(
        "div",
        vec![
            decl("font-size", CssValue::px(100000.)),
            decl("line-height", CssValue::Percentage(50000.)),
        ],
    )]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let style = resolver.style_for_element(document.element(div), Some(&root), false, None);
    assert_eq!(style.line_height(), Length::Fixed(50_000_000.));

    resolver.set_author_rules(stylesheet(vec![(
        "div",
        vec![
            decl("font-size", CssValue::px(1_000_000.)),
            decl("line-height", CssValue::Percentage(1e12)),
        ],
    )]));
    let style = resolver.style_for_element(document.element(div), Some(&root), false, None);
    assert_eq!(style.line_height(), Length::Fixed(i32::MAX as f32));
}

#[test]
fn region_rules_sort_with_author_rules() {
    let mut document = TestDocument::new("html");
    let region = document.append(TestDocument::ROOT, "div");
    document.set_id(region, "region");
    let content = document.append(TestDocument::ROOT, "p");
    document.set_id(content, "c");

    let namespaces = NamespaceMap::new();
    let mut region_rules = RuleSet::new();
    region_rules.add_style_rule(
        &SelectorList::parse("p", &namespaces).unwrap(),
        Arc::new(block_from(vec![decl("color", CssValue::Color(RED))])),
    );
    let mut rules = RuleSet::new();
    rules.add_style_rule(
        &SelectorList::parse("#c", &namespaces).unwrap(),
        Arc::new(block_from(vec![decl("color", CssValue::Color(BLUE))])),
    );
    rules.add_region_rule(SelectorList::parse("#region", &namespaces).unwrap(), region_rules);
    rules.add_style_rule(
        &SelectorList::parse("p", &namespaces).unwrap(),
        Arc::new(block_from(vec![decl("background-color", CssValue::Color(BLUE))])),
    );

    let mut resolver = resolver();
    resolver.set_author_rules(Arc::new(rules));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let style = resolver.style_for_element(
        document.element(content),
        Some(&root),
        false,
        Some(document.element(region)),
    );
    assert_eq!(style.color(), BLUE);
}

#[test]
fn region_rules_follow_earlier_author_rules_of_equal_specificity() {
    let mut document = TestDocument::new("html");
    let region = document.append(TestDocument::ROOT, "div");
    document.set_id(region, "region");
    let content = document.append(TestDocument::ROOT, "p");

    let namespaces = NamespaceMap::new();
    let mut region_rules = RuleSet::new();
    region_rules.add_style_rule(
        &SelectorList::parse("p", &namespaces).unwrap(),
        Arc::new(block_from(vec![decl("color", CssValue::Color(RED))])),
    );
    let mut rules = RuleSet::new();
    rules.add_style_rule(
        &SelectorList::parse("p", &namespaces).unwrap(),
        Arc::new(block_from(vec![decl("color", CssValue::Color(BLUE))])),
    );
    rules.add_region_rule(SelectorList::parse("#region", &namespaces).unwrap(), region_rules);

    let mut resolver = resolver();
    resolver.set_author_rules(Arc::new(rules));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let style = resolver.style_for_element(
        document.element(content),
        Some(&root),
        false,
        Some(document.element(region)),
    );
    assert_eq!(style.color(), RED);
}

#[test]
fn border_widths() {
    let mut document = TestDocument::new("html");
    let thick = document.append(TestDocument::ROOT, "div");
    let thin = document.append(TestDocument::ROOT, "p");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("html", vec![decl("zoom", CssValue::Number(0.5))]),
        ("div, p", vec![decl("border-top-style", CssValue::ident("solid"))]),
        ("div", vec![
            decl("border-top-width", CssValue::px(1.5)),
            decl("border-left-width", CssValue::ident("thick")),
        ]),
        ("p", vec![decl("border-top-width", CssValue::px(0.5))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, false, None);

    // Zooming out never makes a visible border vanish.
    let style = resolver.style_for_element(document.element(thick), Some(&root), false, None);
    assert!(approx_eq(style.border_top_width(), 1.));
    assert!(approx_eq(style.border_left_width(), 5.));

    let style = resolver.style_for_element(document.element(thin), Some(&root), false, None);
    assert!(approx_eq(style.border_top_width(), 0.25));
}

#[test]
fn visited_links_get_both_colors() {
    let mut document = TestDocument::new("html");
    let visited = document.append(TestDocument::ROOT, "a");
    document.make_link(visited, true);
    let unvisited = document.append(TestDocument::ROOT, "a");
    document.make_link(unvisited, false);
    let inner = document.append(visited, "span");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("a:link", vec![decl("color", CssValue::Color(BLUE))]),
        ("a:visited", vec![decl("color", CssValue::Color(RED)), decl("margin-left", CssValue::px(3.))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, false, None);

    let style = resolver.style_for_element(document.element(visited), Some(&root), false, None);
    assert_eq!(style.inside_link(), InsideLink::InsideVisitedLink);
    assert_eq!(style.color(), BLUE);
    assert_eq!(style.visited_link_color(), RED);
    // Only colors can depend on visitedness.
    assert_eq!(style.margin_left(), initial_values().margin_left());

    let inner_style = resolver.style_for_element(document.element(inner), Some(&style), false, None);
    assert_eq!(inner_style.inside_link(), InsideLink::InsideVisitedLink);

    let style = resolver.style_for_element(document.element(unvisited), Some(&root), false, None);
    assert_eq!(style.inside_link(), InsideLink::InsideUnvisitedLink);
    assert_eq!(style.color(), BLUE);
}

#[test]
fn invalid_declarations_are_ignored() {
    let mut document = TestDocument::new("html");
    let div = document.append(TestDocument::ROOT, "div");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("div", vec![decl("margin-left", CssValue::px(2.))]),
        ("div", vec![decl("margin-left", CssValue::ident("bogus"))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let style = resolver.style_for_element(document.element(div), Some(&root), false, None);
    assert_eq!(style.margin_left(), initial_values().margin_left());
    assert_eq!(resolver.statistics().declarations_ignored, 1);
}
