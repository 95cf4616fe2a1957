/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use restyle::computed_style::ComputedStyle;
use restyle::values::color::{Color, RGBA};
use restyle::values::keywords::{CursorKind, Position, TransformStyle3D, Visibility};
use restyle::values::length::Length;
use restyle::{ContextSensitiveProperties, StyleDifference};

fn difference_after<F>(change: F) -> (StyleDifference, ContextSensitiveProperties)
where
    F: FnOnce(&mut ComputedStyle),
{
    let old = ComputedStyle::new();
    let mut new = old.clone();
    change(&mut new);
    StyleDifference::compute(&old, &new)
}

#[test]
fn identical_styles_are_equal() {
    let style = ComputedStyle::new();
    let (difference, changed) = StyleDifference::compute(&style, &style.clone());
    assert_eq!(difference, StyleDifference::Equal);
    assert!(changed.is_empty());
}

#[test]
fn box_metrics_need_layout() {
    let (difference, _) = difference_after(|style| style.set_margin_left(Length::Fixed(4.)));
    assert_eq!(difference, StyleDifference::Layout);

    let (difference, _) = difference_after(|style| style.set_width(Length::Percent(50.)));
    assert_eq!(difference, StyleDifference::Layout);

    let (difference, _) = difference_after(|style| style.set_visibility(Visibility::Collapse));
    assert_eq!(difference, StyleDifference::Layout);
}

#[test]
fn moving_a_positioned_box() {
    let mut old = ComputedStyle::new();
    old.set_position(Position::Absolute);
    old.set_width(Length::Fixed(100.));
    old.set_left(Length::Fixed(10.));

    let mut moved = old.clone();
    moved.set_left(Length::Fixed(20.));
    assert_eq!(StyleDifference::compute(&old, &moved).0, StyleDifference::PositionedMovementOnly);

    // Both horizontal offsets set means the box gets resized.
    let mut stretched = moved.clone();
    stretched.set_right(Length::Fixed(0.));
    assert_eq!(StyleDifference::compute(&moved, &stretched).0, StyleDifference::Layout);

    let mut auto_width = old.clone();
    auto_width.set_width(Length::Auto);
    let mut auto_width_moved = auto_width.clone();
    auto_width_moved.set_left(Length::Fixed(30.));
    assert_eq!(StyleDifference::compute(&auto_width, &auto_width_moved).0, StyleDifference::Layout);
}

#[test]
fn stacking_changes_repaint_the_layer() {
    let (difference, _) = difference_after(|style| {
        style.set_z_index(2);
        style.set_has_auto_z_index(false);
    });
    assert_eq!(difference, StyleDifference::RepaintLayer);

    let (difference, changed) = difference_after(|style| style.set_opacity(0.5));
    assert_eq!(difference, StyleDifference::RepaintLayer);
    assert_eq!(changed, ContextSensitiveProperties::OPACITY);
}

#[test]
fn paint_only_changes() {
    let (difference, _) = difference_after(|style| {
        style.set_background_color(Color::Rgba(RGBA::opaque(0, 0, 255)))
    });
    assert_eq!(difference, StyleDifference::Repaint);

    let (difference, _) = difference_after(|style| style.set_visibility(Visibility::Hidden));
    assert_eq!(difference, StyleDifference::Repaint);

    let (difference, _) = difference_after(|style| style.set_color(RGBA::opaque(255, 0, 0)));
    assert_eq!(difference, StyleDifference::RepaintIfTextOrBorderOrOutline);
}

#[test]
fn three_d_changes_recomposite() {
    let (difference, changed) = difference_after(|style| style.set_transform_style_3d(TransformStyle3D::Preserve3D));
    assert_eq!(difference, StyleDifference::RecompositeLayer);
    assert!(changed.is_empty());
}

#[test]
fn cursor_changes_are_ignored() {
    let (difference, _) = difference_after(|style| style.set_cursor(CursorKind::Pointer));
    assert_eq!(difference, StyleDifference::Equal);
}

#[test]
fn the_most_expensive_tier_wins() {
    let (difference, changed) = difference_after(|style| {
        style.set_opacity(0.5);
        style.set_color(RGBA::opaque(255, 0, 0));
        style.set_margin_left(Length::Fixed(1.));
    });
    assert_eq!(difference, StyleDifference::Layout);
    assert!(changed.contains(ContextSensitiveProperties::OPACITY));
}
