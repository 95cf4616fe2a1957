/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Color properties.
//!
//! Every color that can differ for visited links has a second slot on the
//! style. Which of the two slots a declaration writes depends on the link
//! channel the cascade is currently applying.

use crate::computed_style::{ComputedStyle, initial_values};
use crate::properties::builder::StyleBuilder;
use crate::properties::conversions::{self, ConversionResult};
use crate::properties::handlers::ApplyProperty;
use crate::properties::value::CssValue;
use crate::values::color::{Color, RGBA};

/// A color property other than `color`, with its visited-link twin.
pub struct ColorProperty {
    get: fn(&ComputedStyle) -> Color,
    set: fn(&mut ComputedStyle, Color),
    set_visited: fn(&mut ComputedStyle, Color),
}

impl ColorProperty {
    #[allow(missing_docs)]
    pub fn new(
        get: fn(&ComputedStyle) -> Color,
        set: fn(&mut ComputedStyle, Color),
        set_visited: fn(&mut ComputedStyle, Color),
    ) -> Self {
        ColorProperty {
            get,
            set,
            set_visited,
        }
    }

    fn apply(&self, builder: &mut StyleBuilder, regular: Color, visited: Color) {
        if builder.apply_to_regular_style {
            (self.set)(&mut builder.style, regular);
        }
        if builder.apply_to_visited_link_style {
            (self.set_visited)(&mut builder.style, visited);
        }
    }
}

impl ApplyProperty for ColorProperty {
    /// The visited-link slot never inherits from the parent's visited-link
    /// slot: both slots take the parent's regular value. A parent value of
    /// `currentcolor` is resolved against the parent's `color`.
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let parent = builder.inherited_style();
        let color = match (self.get)(parent) {
            Color::CurrentColor => Color::Rgba(parent.color()),
            color => color,
        };
        self.apply(builder, color, color);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        let color = (self.get)(initial_values());
        self.apply(builder, color, color);
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let regular = conversions::color(builder, value, false)?;
        let visited = conversions::color(builder, value, true)?;
        self.apply(builder, regular, visited);
        Ok(())
    }
}

/// The `color` property, where `currentcolor` means the parent's color.
pub struct TextColor;

impl TextColor {
    fn apply(builder: &mut StyleBuilder, regular: RGBA, visited: RGBA) {
        if builder.apply_to_regular_style {
            builder.style.set_color(regular);
        }
        if builder.apply_to_visited_link_style {
            builder.style.set_visited_link_color(visited);
        }
    }
}

impl ApplyProperty for TextColor {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let color = builder.inherited_style().color();
        TextColor::apply(builder, color, color);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        let color = initial_values().color();
        TextColor::apply(builder, color, color);
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let parent_color = builder.inherited_style().color();
        let regular = conversions::color(builder, value, false)?.resolve(parent_color);
        let visited = conversions::color(builder, value, true)?.resolve(parent_color);
        TextColor::apply(builder, regular, visited);
        Ok(())
    }
}
