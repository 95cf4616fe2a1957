/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The restyle damage is a hint that tells layout which kind of operations may
//! be needed in presence of incremental style changes.

use std::fmt;

use bitflags::bitflags;
use servo_arc::Arc;

use crate::computed_style::ComputedStyle;
use crate::values::border::BorderStyle;
use crate::values::keywords::{BorderCollapse, Display, Position, Visibility};
use crate::values::length::{Length, LengthBox};

/// How much rendering work a style change requires, from none at all to a
/// full relayout. Later variants are strictly more expensive.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StyleDifference {
    /// Nothing visible changed.
    Equal,
    /// Only colors of text, borders or outlines changed; objects that paint
    /// none of these need no repaint.
    RepaintIfTextOrBorderOrOutline,
    /// The object must be repainted.
    Repaint,
    /// The compositing layer must be updated, without repainting.
    RecompositeLayer,
    /// The object's layer must be repainted.
    RepaintLayer,
    /// A positioned object moved without changing size.
    PositionedMovementOnly,
    /// The object must be laid out again.
    Layout,
}

impl fmt::Display for StyleDifference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            StyleDifference::Equal => "Equal",
            StyleDifference::RepaintIfTextOrBorderOrOutline => "Repaint if text or border or outline",
            StyleDifference::Repaint => "Repaint",
            StyleDifference::RecompositeLayer => "Recomposite layer",
            StyleDifference::RepaintLayer => "Repaint layer",
            StyleDifference::PositionedMovementOnly => "Positioned movement only",
            StyleDifference::Layout => "Layout",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Properties whose changes an accelerated compositor can apply by
    /// itself, reported alongside the difference.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct ContextSensitiveProperties: u8 {
        /// `transform` or `transform-origin` changed.
        const TRANSFORM = 1 << 0;
        /// `opacity` changed.
        const OPACITY = 1 << 1;
        /// `filter` changed.
        const FILTER = 1 << 2;
    }
}

impl StyleDifference {
    /// Classifies the change from `old` to `new`.
    ///
    /// Tiers are tested from the most expensive down, and each test looks at
    /// every property of its tier. Cursors and animations are never
    /// compared: cursors follow mouse events, and animations get started
    /// from the new style anyway.
    pub fn compute(
        old: &ComputedStyle,
        new: &ComputedStyle,
    ) -> (StyleDifference, ContextSensitiveProperties) {
        let changed = context_sensitive_changes(old, new);

        let difference = if requires_layout(old, new) {
            StyleDifference::Layout
        } else if let Some(difference) = positioned_offset_difference(old, new) {
            difference
        } else if requires_layer_repaint(old, new) ||
            changed.intersects(ContextSensitiveProperties::OPACITY | ContextSensitiveProperties::FILTER)
        {
            StyleDifference::RepaintLayer
        } else if requires_repaint(old, new) {
            StyleDifference::Repaint
        } else if requires_recomposite(old, new) || changed.contains(ContextSensitiveProperties::TRANSFORM) {
            StyleDifference::RecompositeLayer
        } else if requires_text_or_border_or_outline_repaint(old, new) {
            StyleDifference::RepaintIfTextOrBorderOrOutline
        } else {
            StyleDifference::Equal
        };

        trace!("Style difference: {} ({:?})", difference, changed);
        (difference, changed)
    }
}

fn same<T: PartialEq>(a: &Arc<T>, b: &Arc<T>) -> bool {
    Arc::ptr_eq(a, b) || **a == **b
}

fn context_sensitive_changes(old: &ComputedStyle, new: &ComputedStyle) -> ContextSensitiveProperties {
    let mut changed = ContextSensitiveProperties::empty();
    if Arc::ptr_eq(&old.rare_non_inherited, &new.rare_non_inherited) {
        return changed;
    }
    let (a, b) = (&old.rare_non_inherited, &new.rare_non_inherited);
    if a.transform != b.transform ||
        a.transform_origin_x != b.transform_origin_x ||
        a.transform_origin_y != b.transform_origin_y ||
        a.transform_origin_z != b.transform_origin_z
    {
        changed |= ContextSensitiveProperties::TRANSFORM;
    }
    if a.opacity != b.opacity {
        changed |= ContextSensitiveProperties::OPACITY;
    }
    if a.filter != b.filter {
        changed |= ContextSensitiveProperties::FILTER;
    }
    changed
}

fn requires_layout(old: &ComputedStyle, new: &ComputedStyle) -> bool {
    if !same(&old.box_data, &new.box_data) {
        let (a, b) = (&old.box_data, &new.box_data);
        if a.width != b.width ||
            a.height != b.height ||
            a.min_width != b.min_width ||
            a.min_height != b.min_height ||
            a.max_width != b.max_width ||
            a.max_height != b.max_height ||
            a.vertical_align_length != b.vertical_align_length ||
            a.box_sizing != b.box_sizing
        {
            return true;
        }
    }

    if old.surround.margin != new.surround.margin || old.surround.padding != new.surround.padding {
        return true;
    }

    if old.zoom() != new.zoom() || old.effective_zoom() != new.effective_zoom() {
        return true;
    }

    if !same(&old.rare_non_inherited, &new.rare_non_inherited) {
        let (a, b) = (&old.rare_non_inherited, &new.rare_non_inherited);
        if a.appearance != b.appearance ||
            a.text_overflow != b.text_overflow ||
            a.box_shadow != b.box_shadow ||
            a.counter_directives != b.counter_directives ||
            a.page_size != b.page_size ||
            a.column_count != b.column_count ||
            a.column_gap != b.column_gap ||
            a.column_width != b.column_width ||
            a.column_rule.width != b.column_rule.width ||
            a.flex_grow != b.flex_grow ||
            a.flex_shrink != b.flex_shrink ||
            a.flex_basis != b.flex_basis ||
            a.flex_direction != b.flex_direction ||
            a.flex_wrap != b.flex_wrap ||
            a.align_items != b.align_items ||
            a.justify_content != b.justify_content ||
            a.order != b.order
        {
            return true;
        }
    }

    if !same(&old.rare_inherited, &new.rare_inherited) {
        let (a, b) = (&old.rare_inherited, &new.rare_inherited);
        if a.text_indent != b.text_indent ||
            a.text_size_adjust != b.text_size_adjust ||
            a.word_break != b.word_break ||
            a.overflow_wrap != b.overflow_wrap ||
            a.hyphens != b.hyphens ||
            a.text_shadow != b.text_shadow ||
            a.text_stroke_width != b.text_stroke_width ||
            a.text_emphasis_mark != b.text_emphasis_mark ||
            a.widows != b.widows ||
            a.orphans != b.orphans
        {
            return true;
        }
    }

    if !same(&old.inherited, &new.inherited) {
        let (a, b) = (&old.inherited, &new.inherited);
        if a.line_height != b.line_height ||
            a.font.description() != b.font.description() ||
            a.horizontal_border_spacing != b.horizontal_border_spacing ||
            a.vertical_border_spacing != b.vertical_border_spacing ||
            a.letter_spacing != b.letter_spacing ||
            a.word_spacing != b.word_spacing
        {
            return true;
        }
    }

    let (a, b) = (&old.inherited_flags, &new.inherited_flags);
    if a.text_align != b.text_align ||
        a.text_transform != b.text_transform ||
        a.direction != b.direction ||
        a.white_space != b.white_space ||
        a.writing_mode != b.writing_mode ||
        a.text_decorations_in_effect != b.text_decorations_in_effect
    {
        return true;
    }

    let (a, b) = (&old.non_inherited_flags, &new.non_inherited_flags);
    if a.effective_display != b.effective_display ||
        a.original_display != b.original_display ||
        a.overflow_x != b.overflow_x ||
        a.overflow_y != b.overflow_y ||
        a.vertical_align != b.vertical_align ||
        a.clear != b.clear ||
        a.position != b.position ||
        a.floating != b.floating ||
        a.unicode_bidi != b.unicode_bidi ||
        a.page_break_before != b.page_break_before ||
        a.page_break_after != b.page_break_after ||
        a.page_break_inside != b.page_break_inside
    {
        return true;
    }

    // If our border widths change, then we need to layout. Other changes to
    // borders only necessitate a repaint.
    let (a, b) = (old.border(), new.border());
    if a.left_width() != b.left_width() ||
        a.right_width() != b.right_width() ||
        a.top_width() != b.top_width() ||
        a.bottom_width() != b.bottom_width()
    {
        return true;
    }

    if (old.visibility() == Visibility::Collapse) != (new.visibility() == Visibility::Collapse) {
        return true;
    }

    if new.display().is_table_like() && table_layout_changed(old, new) {
        return true;
    }

    if new.display() == Display::ListItem &&
        (old.list_style_type() != new.list_style_type() ||
            old.list_style_position() != new.list_style_position() ||
            old.list_style_image() != new.list_style_image())
    {
        return true;
    }

    collapsed_border_suppression_changed(old, new)
}

fn table_layout_changed(old: &ComputedStyle, new: &ComputedStyle) -> bool {
    old.border_collapse() != new.border_collapse() ||
        old.empty_cells() != new.empty_cells() ||
        old.caption_side() != new.caption_side() ||
        old.table_layout() != new.table_layout()
}

/// In the collapsing border model `hidden` suppresses adjacent borders while
/// `none` doesn't, so swapping one for the other changes used widths.
fn collapsed_border_suppression_changed(old: &ComputedStyle, new: &ComputedStyle) -> bool {
    if new.border_collapse() != BorderCollapse::Collapse {
        return false;
    }
    let swapped = |a: BorderStyle, b: BorderStyle| {
        matches!(
            (a, b),
            (BorderStyle::Hidden, BorderStyle::None) | (BorderStyle::None, BorderStyle::Hidden)
        )
    };
    swapped(old.border_top_style(), new.border_top_style()) ||
        swapped(old.border_right_style(), new.border_right_style()) ||
        swapped(old.border_bottom_style(), new.border_bottom_style()) ||
        swapped(old.border_left_style(), new.border_left_style())
}

/// Optimize for the case where a positioned layer is moving but not
/// changing size.
fn positioned_offset_difference(old: &ComputedStyle, new: &ComputedStyle) -> Option<StyleDifference> {
    if new.position() == Position::Static || old.offset() == new.offset() {
        return None;
    }
    if new.has_out_of_flow_position() && positioned_object_moved(&old.offset(), &new.offset(), &new.width()) {
        return Some(StyleDifference::PositionedMovementOnly);
    }
    Some(StyleDifference::Layout)
}

fn positioned_object_moved(a: &LengthBox, b: &LengthBox, width: &Length) -> bool {
    // If any unit types are different, then we can't guarantee that this was
    // just a movement.
    if !a.left.has_same_type(&b.left) ||
        !a.right.has_same_type(&b.right) ||
        !a.top.has_same_type(&b.top) ||
        !a.bottom.has_same_type(&b.bottom)
    {
        return false;
    }

    // Only one unit can be non-auto in the horizontal direction and in the
    // vertical direction. Otherwise the adjustment of values is changing the
    // size of the box.
    if !a.left.is_intrinsic_or_auto() && !a.right.is_intrinsic_or_auto() {
        return false;
    }
    if !a.top.is_intrinsic_or_auto() && !a.bottom.is_intrinsic_or_auto() {
        return false;
    }

    // If our width is auto and left or right is specified then this is not
    // just a movement: we need to resize to our container.
    if (!a.left.is_intrinsic_or_auto() || !a.right.is_intrinsic_or_auto()) && width.is_intrinsic_or_auto() {
        return false;
    }

    true
}

fn requires_layer_repaint(old: &ComputedStyle, new: &ComputedStyle) -> bool {
    if old.z_index() != new.z_index() ||
        old.has_auto_z_index() != new.has_auto_z_index() ||
        old.clip() != new.clip() ||
        old.has_clip() != new.has_clip()
    {
        return true;
    }
    if Arc::ptr_eq(&old.rare_non_inherited, &new.rare_non_inherited) {
        return false;
    }
    let (a, b) = (&old.rare_non_inherited, &new.rare_non_inherited);
    a.blend_mode != b.blend_mode || a.mask != b.mask || a.mask_box_image != b.mask_box_image
}

fn requires_repaint(old: &ComputedStyle, new: &ComputedStyle) -> bool {
    if old.visibility() != new.visibility() ||
        old.print_color_adjust() != new.print_color_adjust() ||
        old.inside_link() != new.inside_link() ||
        old.text_decoration() != new.text_decoration()
    {
        return true;
    }

    if old.surround.border != new.surround.border || !same(&old.background, &new.background) {
        return true;
    }

    if !same(&old.rare_inherited, &new.rare_inherited) {
        let (a, b) = (&old.rare_inherited, &new.rare_inherited);
        if a.user_modify != b.user_modify ||
            a.user_select != b.user_select ||
            a.image_rendering != b.image_rendering ||
            a.color_scheme != b.color_scheme
        {
            return true;
        }
    }

    if !same(&old.rare_non_inherited, &new.rare_non_inherited) {
        let (a, b) = (&old.rare_non_inherited, &new.rare_non_inherited);
        if a.user_drag != b.user_drag ||
            a.border_fit != b.border_fit ||
            a.object_fit != b.object_fit ||
            a.resize != b.resize ||
            a.shape_outside != b.shape_outside ||
            a.clip_path != b.clip_path ||
            a.column_rule.style != b.column_rule.style ||
            a.column_rule.color != b.column_rule.color
        {
            return true;
        }
    }

    false
}

fn requires_recomposite(old: &ComputedStyle, new: &ComputedStyle) -> bool {
    if Arc::ptr_eq(&old.rare_non_inherited, &new.rare_non_inherited) {
        return false;
    }
    let (a, b) = (&old.rare_non_inherited, &new.rare_non_inherited);
    a.transform_style_3d != b.transform_style_3d ||
        a.backface_visibility != b.backface_visibility ||
        a.perspective != b.perspective ||
        a.perspective_origin_x != b.perspective_origin_x ||
        a.perspective_origin_y != b.perspective_origin_y
}

fn requires_text_or_border_or_outline_repaint(old: &ComputedStyle, new: &ComputedStyle) -> bool {
    if old.color() != new.color() || old.visited_link_color() != new.visited_link_color() {
        return true;
    }

    if !same(&old.rare_inherited, &new.rare_inherited) {
        let (a, b) = (&old.rare_inherited, &new.rare_inherited);
        if a.text_stroke_color != b.text_stroke_color ||
            a.visited_link_text_stroke_color != b.visited_link_text_stroke_color ||
            a.text_fill_color != b.text_fill_color ||
            a.visited_link_text_fill_color != b.visited_link_text_fill_color ||
            a.text_emphasis_color != b.text_emphasis_color ||
            a.visited_link_text_emphasis_color != b.visited_link_text_emphasis_color ||
            a.text_emphasis_fill != b.text_emphasis_fill
        {
            return true;
        }
    }

    if !same(&old.rare_non_inherited, &new.rare_non_inherited) {
        let (a, b) = (&old.rare_non_inherited, &new.rare_non_inherited);
        if a.text_decoration_color != b.text_decoration_color ||
            a.visited_link_text_decoration_color != b.visited_link_text_decoration_color ||
            a.text_decoration_style != b.text_decoration_style ||
            a.visited_link_border_left_color != b.visited_link_border_left_color ||
            a.visited_link_border_right_color != b.visited_link_border_right_color ||
            a.visited_link_border_top_color != b.visited_link_border_top_color ||
            a.visited_link_border_bottom_color != b.visited_link_border_bottom_color ||
            a.visited_link_column_rule_color != b.visited_link_column_rule_color
        {
            return true;
        }
    }

    false
}
