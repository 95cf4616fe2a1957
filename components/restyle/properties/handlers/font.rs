/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Font properties, `line-height` and `zoom`.
//!
//! Font properties edit the style's font description and mark the font
//! dirty; the font object is rebuilt once after the high-priority phase.

use crate::computed_style::initial_values;
use crate::error_reporting::InvalidValue;
use crate::font::{
    self, FONT_SIZE_SCALE_FACTOR, FontDescription, FontWeight, GenericFamily,
    MAXIMUM_ALLOWED_FONT_SIZE, MEDIUM_KEYWORD_SIZE,
};
use crate::properties::builder::StyleBuilder;
use crate::properties::conversions::ConversionResult;
use crate::properties::declaration_block::DeclaredValue;
use crate::properties::handlers::{ApplyProperty, Converter};
use crate::properties::value::{CssValue, FontShorthandValue};
use crate::properties::PropertyId;
use crate::values::CSSFloat;
use crate::values::length::Length;

/// A field of the font description that is copied as is.
pub struct FontField<T> {
    get: fn(&FontDescription) -> T,
    set: fn(&mut FontDescription, T),
    convert: Converter<T>,
}

impl<T> FontField<T> {
    #[allow(missing_docs)]
    pub fn new(
        get: fn(&FontDescription) -> T,
        set: fn(&mut FontDescription, T),
        convert: Converter<T>,
    ) -> Self {
        FontField { get, set, convert }
    }

    fn write(&self, builder: &mut StyleBuilder, value: T) {
        let mut description = builder.style.font_description().clone();
        (self.set)(&mut description, value);
        builder.set_font_description(description);
    }
}

impl<T> ApplyProperty for FontField<T> {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let value = (self.get)(builder.inherited_style().font_description());
        self.write(builder, value);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        let value = (self.get)(&FontDescription::default());
        self.write(builder, value);
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let value = (self.convert)(builder, value)?;
        self.write(builder, value);
        Ok(())
    }
}

/// Converts a `font-weight`: a keyword, a multiple of 100, or `bolder` and
/// `lighter` relative to the inherited weight.
pub fn font_weight(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<FontWeight> {
    let current = builder.style.font_description().weight;
    if let Some(ident) = value.as_ident() {
        return match ident.to_ascii_lowercase().as_str() {
            "normal" => Ok(FontWeight::NORMAL),
            "bold" => Ok(FontWeight::BOLD),
            "bolder" => Ok(current.bolder()),
            "lighter" => Ok(current.lighter()),
            _ => Err(InvalidValue::UnknownKeyword),
        };
    }
    match value.as_integer() {
        Some(weight) if (100..=900).contains(&weight) && weight % 100 == 0 => {
            Ok(FontWeight(weight as u16))
        },
        Some(_) => Err(InvalidValue::OutOfRange),
        None => Err(InvalidValue::UnexpectedValue),
    }
}

/// Converts `-webkit-locale`: a string, or `auto` for none.
pub fn locale(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Option<String>> {
    match *value {
        CssValue::String(ref locale) => Ok(Some(locale.clone())),
        CssValue::Ident(ref ident) if ident.eq_ignore_ascii_case("auto") => Ok(None),
        _ => Err(InvalidValue::UnexpectedValue),
    }
}

/// `font-size`.
pub struct FontSize;

impl FontSize {
    /// Converts a specified `font-size`, returning the size and whether it is
    /// absolute, and updating the keyword index of `description`.
    fn convert(
        builder: &mut StyleBuilder,
        description: &mut FontDescription,
        value: &CssValue,
    ) -> ConversionResult<CSSFloat> {
        let parent = builder.inherited_style().font_description();
        let (parent_size, parent_is_absolute) = (parent.specified_size, parent.is_absolute_size);
        description.keyword_size = 0;

        let size = match *value {
            CssValue::Ident(ref ident) => {
                let ident = ident.to_ascii_lowercase();
                let size = if let Some(keyword_size) = font::keyword_size_from_ident(&ident) {
                    description.keyword_size = keyword_size;
                    font::font_size_for_keyword(
                        builder.device,
                        keyword_size,
                        description.use_fixed_default_size(),
                    )
                } else if ident == "larger" {
                    parent_size * FONT_SIZE_SCALE_FACTOR
                } else if ident == "smaller" {
                    parent_size / FONT_SIZE_SCALE_FACTOR
                } else {
                    return Err(InvalidValue::UnknownKeyword);
                };
                description.is_absolute_size =
                    parent_is_absolute && (ident == "larger" || ident == "smaller");
                size
            },
            CssValue::Dimension(length, unit) => {
                description.is_absolute_size = parent_is_absolute || !unit.is_font_relative();
                builder.compute_length(length, unit, 1., true)
            },
            CssValue::Percentage(percent) => {
                description.is_absolute_size = parent_is_absolute;
                percent * parent_size / 100.
            },
            _ => return Err(InvalidValue::UnexpectedValue),
        };

        if size < 0. {
            return Err(InvalidValue::OutOfRange);
        }
        Ok(size.min(MAXIMUM_ALLOWED_FONT_SIZE))
    }
}

impl ApplyProperty for FontSize {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let parent = builder.inherited_style().font_description();
        let mut description = builder.style.font_description().clone();
        description.keyword_size = parent.keyword_size;
        description.is_absolute_size = parent.is_absolute_size;
        builder.set_font_size(&mut description, parent.specified_size);
        builder.set_font_description(description);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        let mut description = builder.style.font_description().clone();
        let size = font::font_size_for_keyword(
            builder.device,
            MEDIUM_KEYWORD_SIZE,
            description.use_fixed_default_size(),
        );
        if description.keyword_size != 0 && description.specified_size == size {
            return;
        }
        description.keyword_size = MEDIUM_KEYWORD_SIZE;
        description.is_absolute_size = false;
        builder.set_font_size(&mut description, size);
        builder.set_font_description(description);
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let mut description = builder.style.font_description().clone();
        let size = FontSize::convert(builder, &mut description, value)?;
        builder.set_font_size(&mut description, size);
        builder.set_font_description(description);
        Ok(())
    }
}

/// `font-family`.
pub struct FontFamily;

impl FontFamily {
    /// Switching between a monospace-only list and anything else changes the
    /// default size a keyword size refers to.
    fn refresh_keyword_size(builder: &StyleBuilder, description: &mut FontDescription, was_fixed: bool) {
        let is_fixed = description.use_fixed_default_size();
        if description.keyword_size == 0 || is_fixed == was_fixed {
            return;
        }
        let size = font::font_size_for_keyword(builder.device, description.keyword_size, is_fixed);
        builder.set_font_size(description, size);
    }
}

impl ApplyProperty for FontFamily {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let parent = builder.inherited_style().font_description();
        let mut description = builder.style.font_description().clone();
        description.families = parent.families.clone();
        description.generic_family = parent.generic_family;
        builder.set_font_description(description);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        let initial = FontDescription::default();
        let mut description = builder.style.font_description().clone();
        let was_fixed = description.use_fixed_default_size();
        description.families = initial.families;
        description.generic_family = initial.generic_family;
        FontFamily::refresh_keyword_size(builder, &mut description, was_fixed);
        builder.set_font_description(description);
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let mut families = Vec::new();
        let mut generic_family = GenericFamily::None;
        for item in value.as_slice() {
            match *item {
                CssValue::String(ref name) => families.push(name.clone()),
                CssValue::Ident(ref name) => {
                    if let Some(generic) = GenericFamily::from_ident(name) {
                        generic_family = generic;
                        families.push(name.to_ascii_lowercase());
                    } else {
                        families.push(name.clone());
                    }
                },
                _ => return Err(InvalidValue::UnexpectedValue),
            }
        }
        if families.is_empty() {
            return Err(InvalidValue::UnexpectedValue);
        }

        let mut description = builder.style.font_description().clone();
        let was_fixed = description.use_fixed_default_size();
        description.families = families;
        description.generic_family = generic_family;
        FontFamily::refresh_keyword_size(builder, &mut description, was_fixed);
        builder.set_font_description(description);
        Ok(())
    }
}

/// The size of the system font keywords.
const SYSTEM_FONT_SIZE: CSSFloat = 13.;

const SYSTEM_FONT_KEYWORDS: &[&str] = &[
    "caption",
    "icon",
    "menu",
    "message-box",
    "small-caption",
    "status-bar",
    "-webkit-mini-control",
    "-webkit-small-control",
    "-webkit-control",
];

/// The `font` shorthand.
///
/// Its line height is not applied right away: the builder keeps it until the
/// line-height phase, when the font size it may depend on is final.
pub struct FontShorthand;

impl FontShorthand {
    fn apply_longhands(
        builder: &mut StyleBuilder,
        font: &FontShorthandValue,
    ) -> ConversionResult<()> {
        let table = builder.table;
        let optional = [
            (PropertyId::FontStyle, &font.style),
            (PropertyId::FontVariant, &font.variant),
            (PropertyId::FontWeight, &font.weight),
        ];
        for (id, value) in optional {
            match *value {
                Some(ref value) => table.get(id).apply_value(builder, value)?,
                None => table.get(id).apply_initial(builder),
            }
        }
        table.get(PropertyId::FontSize).apply_value(builder, &font.size)?;
        table.get(PropertyId::FontFamily).apply_value(builder, &font.family)?;
        builder.deferred_line_height = Some(match font.line_height {
            Some(ref line_height) => DeclaredValue::Value(line_height.clone()),
            None => DeclaredValue::Initial,
        });
        Ok(())
    }

    fn apply_system_font(builder: &mut StyleBuilder, ident: &str) -> ConversionResult<()> {
        if !SYSTEM_FONT_KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(ident)) {
            return Err(InvalidValue::UnknownKeyword);
        }
        let mut description = FontDescription {
            families: vec!["system-ui".to_owned()],
            generic_family: GenericFamily::None,
            is_absolute_size: true,
            keyword_size: 0,
            ..FontDescription::default()
        };
        builder.set_font_size(&mut description, SYSTEM_FONT_SIZE);
        builder.set_font_description(description);
        Ok(())
    }
}

impl ApplyProperty for FontShorthand {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let description = builder.inherited_style().font_description().clone();
        builder.set_font_description(description);
        builder.deferred_line_height = Some(DeclaredValue::Inherit);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        let mut description = FontDescription::default();
        let size = font::font_size_for_keyword(builder.device, MEDIUM_KEYWORD_SIZE, false);
        builder.set_font_size(&mut description, size);
        builder.set_font_description(description);
        builder.deferred_line_height = Some(DeclaredValue::Initial);
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        match *value {
            CssValue::Font(ref font) => {
                let saved = (
                    builder.style.clone(),
                    builder.font_dirty,
                    builder.deferred_line_height.take(),
                );
                let result = FontShorthand::apply_longhands(builder, font);
                if result.is_err() {
                    (builder.style, builder.font_dirty, builder.deferred_line_height) = saved;
                }
                result
            },
            CssValue::Ident(ref ident) => FontShorthand::apply_system_font(builder, ident),
            _ => Err(InvalidValue::UnexpectedValue),
        }
    }
}

/// `line-height`.
pub struct LineHeight;

impl ApplyProperty for LineHeight {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let line_height = builder.inherited_style().line_height();
        builder.style.set_line_height(line_height);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        builder.style.set_line_height(initial_values().line_height());
    }

    /// Lengths are zoomed, including the browser's text zoom. A percentage
    /// is resolved against the computed font size right away, truncated to
    /// whole pixels, while a number is kept as a percentage for layout.
    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let line_height = match *value {
            CssValue::Ident(ref ident) if ident.eq_ignore_ascii_case("normal") => {
                initial_values().line_height()
            },
            CssValue::Dimension(length, unit) => {
                let multiplier = builder.style.effective_zoom() * builder.device.text_zoom;
                Length::Fixed(builder.compute_length(length, unit, multiplier, false))
            },
            CssValue::Percentage(percent) => {
                // Saturates instead of wrapping for huge sizes.
                let font_size = i64::from(builder.style.computed_font_pixel_size());
                let pixels = font_size.saturating_mul(percent as i64) / 100;
                let pixels = pixels.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
                Length::Fixed(pixels as CSSFloat)
            },
            CssValue::Number(number) => Length::Percent(number * 100.),
            CssValue::Integer(number) => Length::Percent(number as CSSFloat * 100.),
            _ => return Err(InvalidValue::UnexpectedValue),
        };
        if line_height.value() < 0. {
            return Err(InvalidValue::OutOfRange);
        }
        builder.style.set_line_height(line_height);
        Ok(())
    }
}

/// `zoom`.
///
/// The effective zoom starts out as the parent's and gets multiplied by the
/// specified zoom. A change of effective zoom marks the font dirty, since the
/// computed font size depends on it.
pub struct Zoom;

impl Zoom {
    fn reset_effective_zoom(builder: &mut StyleBuilder) {
        let zoom = builder.inherited_style().effective_zoom();
        Zoom::set_effective_zoom(builder, zoom);
    }

    fn set_effective_zoom(builder: &mut StyleBuilder, zoom: CSSFloat) {
        if builder.style.effective_zoom() != zoom {
            builder.style.set_effective_zoom(zoom);
            builder.font_dirty = true;
        }
    }

    fn set_zoom(builder: &mut StyleBuilder, zoom: CSSFloat) {
        let effective_zoom = builder.style.effective_zoom();
        builder.style.set_zoom(zoom);
        if builder.style.effective_zoom() != effective_zoom {
            builder.font_dirty = true;
        }
    }
}

impl ApplyProperty for Zoom {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        Zoom::reset_effective_zoom(builder);
        let zoom = builder.inherited_style().zoom();
        Zoom::set_zoom(builder, zoom);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        Zoom::reset_effective_zoom(builder);
        Zoom::set_zoom(builder, initial_values().zoom());
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        if let Some(ident) = value.as_ident() {
            match ident.to_ascii_lowercase().as_str() {
                "normal" => {
                    Zoom::reset_effective_zoom(builder);
                    Zoom::set_zoom(builder, 1.);
                },
                "reset" => {
                    Zoom::set_effective_zoom(builder, 1.);
                    Zoom::set_zoom(builder, 1.);
                },
                "document" => {
                    let document_zoom = builder.root_element_style.map_or(1., |root| root.zoom());
                    Zoom::set_effective_zoom(builder, document_zoom);
                    Zoom::set_zoom(builder, document_zoom);
                },
                _ => return Err(InvalidValue::UnknownKeyword),
            }
            return Ok(());
        }

        let zoom = match *value {
            CssValue::Percentage(percent) => percent / 100.,
            CssValue::Number(number) => number,
            CssValue::Integer(number) => number as CSSFloat,
            _ => return Err(InvalidValue::UnexpectedValue),
        };
        if zoom < 0. {
            return Err(InvalidValue::OutOfRange);
        }
        Zoom::reset_effective_zoom(builder);
        if zoom != 0. {
            Zoom::set_zoom(builder, zoom);
        }
        Ok(())
    }
}
