/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use restyle::computed_style::ComputedStyle;
use restyle::properties::CssValue;
use restyle::style_adjuster::StyleAdjuster;
use restyle::values::content::TextDecorationLine;
use restyle::values::keywords::{Display, Float, Overflow, Position};

use crate::dom::TestDocument;
use crate::{decl, resolver, stylesheet};

fn adjusted(mut style: ComputedStyle, parent: Option<&ComputedStyle>) -> ComputedStyle {
    StyleAdjuster::new(&mut style, false).adjust(parent);
    style
}

#[test]
fn floats_and_out_of_flow_boxes_are_blockified() {
    let mut floated = ComputedStyle::new();
    floated.set_display(Display::Inline);
    floated.set_floating(Float::Left);
    assert_eq!(adjusted(floated, None).display(), Display::Block);

    let mut positioned = ComputedStyle::new();
    positioned.set_display(Display::InlineTable);
    positioned.set_position(Position::Absolute);
    assert_eq!(adjusted(positioned, None).display(), Display::Table);

    let mut hidden = ComputedStyle::new();
    hidden.set_display(Display::None);
    hidden.set_floating(Float::Left);
    assert_eq!(adjusted(hidden, None).display(), Display::None);
}

#[test]
fn out_of_flow_boxes_do_not_float() {
    let mut style = ComputedStyle::new();
    style.set_floating(Float::Right);
    style.set_position(Position::Fixed);
    assert_eq!(adjusted(style, None).floating(), Float::None);

    let mut relative = ComputedStyle::new();
    relative.set_floating(Float::Right);
    relative.set_position(Position::Relative);
    assert_eq!(adjusted(relative, None).floating(), Float::Right);
}

#[test]
fn root_and_flex_items_are_blockified() {
    let mut document = TestDocument::new("html");
    let flex = document.append(TestDocument::ROOT, "div");
    document.add_class(flex, "flex");
    let item = document.append(flex, "span");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("html", vec![decl("display", CssValue::ident("inline"))]),
        (".flex", vec![decl("display", CssValue::ident("-webkit-flex"))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, true, None);
    assert_eq!(root.display(), Display::Block);

    let flex_style = resolver.style_for_element(document.element(flex), Some(&root), true, None);
    assert_eq!(flex_style.display(), Display::Flex);

    let item_style = resolver.style_for_element(document.element(item), Some(&flex_style), true, None);
    assert_eq!(item_style.display(), Display::Block);
}

#[test]
fn visible_overflow_needs_both_axes() {
    let mut style = ComputedStyle::new();
    style.set_overflow_x(Overflow::Hidden);
    let style = adjusted(style, None);
    assert_eq!(style.overflow_x(), Overflow::Hidden);
    assert_eq!(style.overflow_y(), Overflow::Auto);

    let both_visible = adjusted(ComputedStyle::new(), None);
    assert_eq!(both_visible.overflow_x(), Overflow::Visible);
    assert_eq!(both_visible.overflow_y(), Overflow::Visible);
}

#[test]
fn z_index_applies_to_positioned_boxes_only() {
    let mut document = TestDocument::new("html");
    let static_box = document.append(TestDocument::ROOT, "div");
    let positioned = document.append(TestDocument::ROOT, "section");
    let translucent = document.append(TestDocument::ROOT, "p");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("div", vec![decl("z-index", CssValue::Integer(3))]),
        (
            "section",
            vec![decl("z-index", CssValue::Integer(3)), decl("position", CssValue::ident("relative"))],
        ),
        ("p", vec![decl("opacity", CssValue::Number(0.5))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    assert!(!root.has_auto_z_index());
    assert_eq!(root.z_index(), 0);

    let static_style = resolver.style_for_element(document.element(static_box), Some(&root), false, None);
    assert!(static_style.has_auto_z_index());

    let positioned_style = resolver.style_for_element(document.element(positioned), Some(&root), false, None);
    assert!(!positioned_style.has_auto_z_index());
    assert_eq!(positioned_style.z_index(), 3);

    let translucent_style = resolver.style_for_element(document.element(translucent), Some(&root), false, None);
    assert!(!translucent_style.has_auto_z_index());
    assert_eq!(translucent_style.z_index(), 0);
}

#[test]
fn text_decorations_propagate_to_inline_descendants() {
    let mut document = TestDocument::new("html");
    let paragraph = document.append(TestDocument::ROOT, "p");
    let inline = document.append(paragraph, "span");
    let inline_block = document.append(paragraph, "em");

    let mut resolver = resolver();
    resolver.set_author_rules(stylesheet(vec![
        ("p", vec![decl("text-decoration", CssValue::ident("underline"))]),
        ("span", vec![decl("text-decoration", CssValue::ident("overline"))]),
        ("em", vec![decl("display", CssValue::ident("inline-block"))]),
    ]));

    let root = resolver.style_for_element(document.root(), None, false, None);
    let paragraph_style = resolver.style_for_element(document.element(paragraph), Some(&root), false, None);
    assert_eq!(paragraph_style.text_decorations_in_effect(), TextDecorationLine::UNDERLINE);

    let inline_style = resolver.style_for_element(document.element(inline), Some(&paragraph_style), false, None);
    assert_eq!(
        inline_style.text_decorations_in_effect(),
        TextDecorationLine::UNDERLINE | TextDecorationLine::OVERLINE
    );

    let inline_block_style =
        resolver.style_for_element(document.element(inline_block), Some(&paragraph_style), false, None);
    assert!(inline_block_style.text_decorations_in_effect().is_empty());
}
