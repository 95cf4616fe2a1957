/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A struct to encapsulate all the style fixups a computed style needs in order
//! for it to adhere to the CSS spec.

use crate::computed_style::ComputedStyle;
use crate::values::content::TextDecorationLine;
use crate::values::keywords::{BlendMode, Display, Float, Overflow, Position, TransformStyle3D};

/// An unsized struct that implements all the adjustment methods.
pub struct StyleAdjuster<'a> {
    style: &'a mut ComputedStyle,
    is_root_element: bool,
}

impl<'a> StyleAdjuster<'a> {
    /// Trivially constructs a new StyleAdjuster.
    pub fn new(style: &'a mut ComputedStyle, is_root_element: bool) -> Self {
        StyleAdjuster {
            style,
            is_root_element,
        }
    }

    /// CSS 2.1 section 9.7:
    ///
    ///    If 'position' has the value 'absolute' or 'fixed', [...] the computed
    ///    value of 'float' is 'none'.
    ///
    fn adjust_for_position(&mut self) {
        if self.style.has_out_of_flow_position() && self.style.is_floating() {
            self.style.set_floating(Float::None);
        }
    }

    /// Apply the blockification rules based on the table in CSS 2.2 section 9.7.
    /// https://drafts.csswg.org/css2/visuren.html#dis-pos-flo
    ///
    /// Children of flex containers are blockified too.
    fn blockify_if_necessary(&mut self, layout_parent_style: Option<&ComputedStyle>) {
        let mut blockify = false;
        macro_rules! blockify_if {
            ($if_what:expr) => {
                if !blockify {
                    blockify = $if_what;
                }
            };
        }

        blockify_if!(self.is_root_element);
        blockify_if!(layout_parent_style.is_some_and(|parent| parent.display().is_flex_container()));
        blockify_if!(self.style.is_floating());
        blockify_if!(self.style.has_out_of_flow_position());

        if !blockify {
            return;
        }

        let display = self.style.display();
        let blockified_display = display.blockified();
        if display != blockified_display {
            self.style.set_effective_display(blockified_display);
        }
    }

    /// CSS3 overflow-x and overflow-y require some fixup as well in some
    /// cases.
    ///
    /// overflow: visible is meaningful only when used in both dimensions.
    fn adjust_for_overflow(&mut self) {
        let original_overflow_x = self.style.overflow_x();
        let original_overflow_y = self.style.overflow_y();

        let mut overflow_x = original_overflow_x;
        let mut overflow_y = original_overflow_y;

        if overflow_x == overflow_y {
            return;
        }

        // If 'visible' is specified but doesn't match the other dimension,
        // it turns into 'auto'.
        if overflow_x == Overflow::Visible {
            overflow_x = Overflow::Auto;
        }

        if overflow_y == Overflow::Visible {
            overflow_y = Overflow::Auto;
        }

        if overflow_x != original_overflow_x || overflow_y != original_overflow_y {
            self.style.set_overflow_x(overflow_x);
            self.style.set_overflow_y(overflow_y);
        }
    }

    /// `z-index` only applies to positioned boxes and flex items. Boxes that
    /// create a stacking context anyway get `z-index: 0` instead of `auto`.
    fn adjust_for_stacking_context(&mut self, layout_parent_style: Option<&ComputedStyle>) {
        let parent_is_flex_container =
            layout_parent_style.is_some_and(|parent| parent.display().is_flex_container());
        if self.style.position() == Position::Static && !parent_is_flex_container {
            self.style.set_has_auto_z_index(true);
        }

        if !self.style.has_auto_z_index() {
            return;
        }

        let creates_stacking_context = self.is_root_element ||
            self.style.has_opacity() ||
            self.style.has_transform() ||
            self.style.transform_style_3d() == TransformStyle3D::Preserve3D ||
            self.style.perspective() > 0. ||
            self.style.has_mask() ||
            self.style.clip_path().is_some() ||
            self.style.has_filter() ||
            self.style.blend_mode() != BlendMode::Normal;
        if creates_stacking_context {
            self.style.set_z_index(0);
            self.style.set_has_auto_z_index(false);
        }
    }

    /// Adds this element's `text-decoration` to the decorations in effect.
    ///
    /// Atomic inlines and boxes out of the normal flow don't draw the
    /// decorations of their ancestors.
    fn adjust_for_text_decorations(&mut self) {
        let stops_propagation = matches!(
            self.style.display(),
            Display::InlineTable | Display::InlineBlock | Display::WebkitInlineBox | Display::InlineFlex
        ) || self.style.is_floating() ||
            self.style.has_out_of_flow_position();

        let mut in_effect = if stops_propagation {
            TextDecorationLine::empty()
        } else {
            self.style.text_decorations_in_effect()
        };
        in_effect |= self.style.text_decoration();
        self.style.set_text_decorations_in_effect(in_effect);
    }

    /// Adjusts the style to account for various fixups that don't fit naturally
    /// into the cascade.
    ///
    /// `layout_parent_style` is the style of the parent box, if any.
    pub fn adjust(&mut self, layout_parent_style: Option<&ComputedStyle>) {
        if self.style.display() != Display::None {
            self.blockify_if_necessary(layout_parent_style);
            self.adjust_for_position();
        }
        self.adjust_for_overflow();
        self.adjust_for_stacking_context(layout_parent_style);
        self.adjust_for_text_decorations();
    }
}
