/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The state property handlers work on while the cascade runs.

use crate::computed_style::{ComputedStyle, initial_values};
use crate::device::{Device, DocumentState};
use crate::error_reporting::{CascadeErrorReporter, InvalidValue};
use crate::font::{FontDescription, FontSelector};
use crate::properties::PropertyId;
use crate::properties::declaration_block::DeclaredValue;
use crate::properties::table::PropertyHandlerTable;
use crate::properties::value::{CssValue, LengthUnit};
use crate::values::CSSFloat;

/// The fraction of an `em` used for `ex` and `ch`, since glyph metrics are
/// not available to the style system.
const EX_AND_CH_TO_EM: CSSFloat = 0.5;

/// A style under construction, together with everything its property
/// handlers need to read: the parent and root styles, the device, and the
/// document state they may update.
pub struct StyleBuilder<'a> {
    /// The style being built.
    pub style: ComputedStyle,
    /// The parent element's style, if any.
    pub parent_style: Option<&'a ComputedStyle>,
    /// The root element's style, for `rem` units.
    pub root_element_style: Option<&'a ComputedStyle>,
    /// The device the style is computed for.
    pub device: &'a Device,
    /// Document state that applying properties to the root may change.
    pub document: &'a DocumentState,
    /// Handlers for every property.
    pub table: &'a PropertyHandlerTable,
    /// Whether the style belongs to the root element.
    pub element_is_root: bool,
    /// Whether declarations currently apply to the regular style.
    pub apply_to_regular_style: bool,
    /// Whether declarations currently apply to the visited-link colors.
    pub apply_to_visited_link_style: bool,
    /// Whether a font property changed, so the font must be rebuilt.
    pub font_dirty: bool,
    /// The line height given by the `font` shorthand, applied together with
    /// `line-height` once the font is known.
    pub deferred_line_height: Option<DeclaredValue>,
    /// The font selection collaborator.
    pub font_selector: Option<&'a dyn FontSelector>,
    reporter: &'a dyn CascadeErrorReporter,
    ignored_declarations: u32,
}

impl<'a> StyleBuilder<'a> {
    /// Creates a builder for `style`, which is expected to already inherit
    /// from `parent_style`.
    pub fn new(
        style: ComputedStyle,
        parent_style: Option<&'a ComputedStyle>,
        root_element_style: Option<&'a ComputedStyle>,
        device: &'a Device,
        document: &'a DocumentState,
        table: &'a PropertyHandlerTable,
        reporter: &'a dyn CascadeErrorReporter,
    ) -> Self {
        StyleBuilder {
            style,
            parent_style,
            root_element_style,
            device,
            document,
            table,
            element_is_root: false,
            apply_to_regular_style: true,
            apply_to_visited_link_style: false,
            font_dirty: false,
            deferred_line_height: None,
            font_selector: None,
            reporter,
            ignored_declarations: 0,
        }
    }

    /// The style `inherit` copies from: the parent style, or the initial
    /// values when there is no parent.
    pub fn inherited_style(&self) -> &'a ComputedStyle {
        self.parent_style.unwrap_or_else(|| initial_values())
    }

    /// Replaces the font description, marking the font dirty if it changed.
    pub fn set_font_description(&mut self, description: FontDescription) {
        if self.style.set_font_description(description) {
            self.font_dirty = true;
        }
    }

    /// Sets the specified size of `description` and computes its used size
    /// from the current zoom and the device's minimum font sizes.
    pub fn set_font_size(&self, description: &mut FontDescription, size: CSSFloat) {
        description.specified_size = size;
        description.computed_size = crate::font::computed_size_from_specified(
            self.device,
            self.style.effective_zoom(),
            description.is_absolute_size,
            size,
        );
    }

    /// Converts a length to pixels.
    ///
    /// Font-relative units are resolved against this style's computed font
    /// size, or against the parent's specified size when computing
    /// `font-size` itself, and are never multiplied by `multiplier`, since
    /// the font size they derive from is already zoomed. Viewport units mark
    /// the style as depending on the viewport.
    pub fn compute_length(
        &mut self,
        value: CSSFloat,
        unit: LengthUnit,
        multiplier: CSSFloat,
        computing_font_size: bool,
    ) -> CSSFloat {
        if let Some(factor) = unit.absolute_factor() {
            let length = value * factor;
            return if computing_font_size {
                length
            } else {
                length * multiplier
            };
        }

        let font_size = |style: &ComputedStyle| {
            if computing_font_size {
                style.specified_font_size()
            } else {
                style.computed_font_size()
            }
        };
        let em = if computing_font_size {
            font_size(self.inherited_style())
        } else {
            font_size(&self.style)
        };

        match unit {
            LengthUnit::Em => value * em,
            LengthUnit::Ex | LengthUnit::Ch => value * em * EX_AND_CH_TO_EM,
            LengthUnit::Rem => {
                let root_size = match self.root_element_style {
                    Some(root) if !self.element_is_root => font_size(root),
                    _ if computing_font_size => self.device.default_font_size as CSSFloat,
                    _ => em,
                };
                value * root_size
            },
            LengthUnit::Vw | LengthUnit::Vh | LengthUnit::Vmin | LengthUnit::Vmax => {
                self.style.set_has_viewport_units(true);
                let (width, height) = (self.device.viewport_width, self.device.viewport_height);
                let base = match unit {
                    LengthUnit::Vw => width,
                    LengthUnit::Vh => height,
                    LengthUnit::Vmin => width.min(height),
                    _ => width.max(height),
                };
                value * base / 100.
            },
            _ => value,
        }
    }

    /// Hands an invalid declaration to the error reporter.
    pub fn report_invalid(&mut self, property: PropertyId, value: &CssValue, error: InvalidValue) {
        self.ignored_declarations += 1;
        self.reporter.report_error(property, value, error);
    }

    /// The number of declarations that were reported as invalid.
    pub fn ignored_declarations(&self) -> u32 {
        self.ignored_declarations
    }

    /// Consumes the builder, returning the style.
    pub fn build(self) -> ComputedStyle {
        self.style
    }
}
