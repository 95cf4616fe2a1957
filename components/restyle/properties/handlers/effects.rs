/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Conversions for shadows, transforms, filters and shapes, as well as
//! corner radii and multi-column values.

use crate::error_reporting::InvalidValue;
use crate::properties::builder::StyleBuilder;
use crate::properties::conversions::{self, ConversionResult, LengthAllow};
use crate::properties::value::{CssValue, ShadowValue};
use crate::values::CSSFloat;
use crate::values::color::Color;
use crate::values::effects::{
    BasicShape, ClipPathOperation, FilterOperation, ShadowData, ShapeValue, TransformOperation,
};
use crate::values::image::StyleImage;
use crate::values::length::{Length, LengthSize};

fn shadow(builder: &mut StyleBuilder, shadow: &ShadowValue) -> ConversionResult<ShadowData> {
    let x = conversions::pixels(builder, &shadow.x)?;
    let y = conversions::pixels(builder, &shadow.y)?;
    let blur = match shadow.blur {
        Some(ref blur) => conversions::non_negative_pixels(builder, blur)?,
        None => 0.,
    };
    let spread = match shadow.spread {
        Some(ref spread) => conversions::pixels(builder, spread)?,
        None => 0.,
    };
    let color = match shadow.color {
        Some(ref color) => conversions::color(builder, color, false)?,
        None => Color::Rgba(builder.style.color()),
    };
    Ok(ShadowData {
        x,
        y,
        blur,
        spread,
        color,
        inset: shadow.inset,
    })
}

fn shadow_list(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Vec<ShadowData>> {
    if value.is_ident("none") {
        return Ok(Vec::new());
    }
    value
        .as_slice()
        .iter()
        .map(|item| match *item {
            CssValue::Shadow(ref value) => shadow(builder, value),
            _ => Err(InvalidValue::UnexpectedValue),
        })
        .collect()
}

/// Converts `box-shadow`.
pub fn box_shadow(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Vec<ShadowData>> {
    shadow_list(builder, value)
}

/// Converts `text-shadow`, which has neither spread nor inset shadows.
pub fn text_shadow(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Vec<ShadowData>> {
    let shadows = shadow_list(builder, value)?;
    if shadows.iter().any(|shadow| shadow.inset || shadow.spread != 0.) {
        return Err(InvalidValue::UnexpectedValue);
    }
    Ok(shadows)
}

fn function_args<'v>(value: &'v CssValue) -> ConversionResult<(String, &'v [CssValue])> {
    match *value {
        CssValue::Function(ref name, ref args) => Ok((name.to_ascii_lowercase(), args)),
        _ => Err(InvalidValue::UnexpectedValue),
    }
}

fn numbers(args: &[CssValue]) -> ConversionResult<Vec<CSSFloat>> {
    args.iter()
        .map(|arg| arg.as_number().ok_or(InvalidValue::UnexpectedValue))
        .collect()
}

fn transform_operation(
    builder: &mut StyleBuilder,
    value: &CssValue,
) -> ConversionResult<TransformOperation> {
    let (name, args) = function_args(value)?;
    let zero = Length::ZERO;
    let operation = match (name.as_str(), args) {
        ("translate", [x]) => {
            TransformOperation::Translate(conversions::length_percentage(builder, x)?, zero, 0.)
        },
        ("translate", [x, y]) => TransformOperation::Translate(
            conversions::length_percentage(builder, x)?,
            conversions::length_percentage(builder, y)?,
            0.,
        ),
        ("translatex", [x]) => {
            TransformOperation::Translate(conversions::length_percentage(builder, x)?, zero, 0.)
        },
        ("translatey", [y]) => {
            TransformOperation::Translate(zero, conversions::length_percentage(builder, y)?, 0.)
        },
        ("translatez", [z]) => TransformOperation::Translate(zero, zero, conversions::pixels(builder, z)?),
        ("translate3d", [x, y, z]) => TransformOperation::Translate(
            conversions::length_percentage(builder, x)?,
            conversions::length_percentage(builder, y)?,
            conversions::pixels(builder, z)?,
        ),
        ("scale" | "scalex" | "scaley" | "scalez" | "scale3d", _) => {
            match (name.as_str(), numbers(args)?.as_slice()) {
                ("scale", &[both]) => TransformOperation::Scale(both, both, 1.),
                ("scale", &[x, y]) => TransformOperation::Scale(x, y, 1.),
                ("scalex", &[x]) => TransformOperation::Scale(x, 1., 1.),
                ("scaley", &[y]) => TransformOperation::Scale(1., y, 1.),
                ("scalez", &[z]) => TransformOperation::Scale(1., 1., z),
                ("scale3d", &[x, y, z]) => TransformOperation::Scale(x, y, z),
                _ => return Err(InvalidValue::UnexpectedValue),
            }
        },
        ("rotate" | "rotatez", [angle]) => TransformOperation::Rotate(conversions::angle(angle)?),
        ("skew", [x]) => TransformOperation::Skew(conversions::angle(x)?, 0.),
        ("skew", [x, y]) => TransformOperation::Skew(conversions::angle(x)?, conversions::angle(y)?),
        ("skewx", [x]) => TransformOperation::Skew(conversions::angle(x)?, 0.),
        ("skewy", [y]) => TransformOperation::Skew(0., conversions::angle(y)?),
        ("matrix", _) => {
            let values = numbers(args)?;
            let matrix = <[CSSFloat; 6]>::try_from(values.as_slice())
                .map_err(|_| InvalidValue::UnexpectedValue)?;
            TransformOperation::Matrix(matrix)
        },
        ("perspective", [depth]) => {
            TransformOperation::Perspective(conversions::non_negative_pixels(builder, depth)?)
        },
        _ => return Err(InvalidValue::UnexpectedValue),
    };
    Ok(operation)
}

/// Converts `-webkit-transform`: `none` or a list of transform functions.
pub fn transform(
    builder: &mut StyleBuilder,
    value: &CssValue,
) -> ConversionResult<Vec<TransformOperation>> {
    if value.is_ident("none") {
        return Ok(Vec::new());
    }
    value
        .as_slice()
        .iter()
        .map(|item| transform_operation(builder, item))
        .collect()
}

/// A filter amount: a number or a percentage, one when omitted.
fn amount(args: &[CssValue]) -> ConversionResult<CSSFloat> {
    let amount = match args {
        [] => 1.,
        [CssValue::Percentage(percent)] => percent / 100.,
        [value] => value.as_number().ok_or(InvalidValue::UnexpectedValue)?,
        _ => return Err(InvalidValue::UnexpectedValue),
    };
    if amount < 0. {
        return Err(InvalidValue::OutOfRange);
    }
    Ok(amount)
}

fn filter_operation(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<FilterOperation> {
    if let CssValue::Url(ref url) = *value {
        return Ok(FilterOperation::Reference(url.clone()));
    }
    let (name, args) = function_args(value)?;
    let operation = match name.as_str() {
        "grayscale" => FilterOperation::Grayscale(amount(args)?.min(1.)),
        "sepia" => FilterOperation::Sepia(amount(args)?.min(1.)),
        "saturate" => FilterOperation::Saturate(amount(args)?),
        "invert" => FilterOperation::Invert(amount(args)?.min(1.)),
        "opacity" => FilterOperation::Opacity(amount(args)?.min(1.)),
        "brightness" => FilterOperation::Brightness(amount(args)?),
        "contrast" => FilterOperation::Contrast(amount(args)?),
        "hue-rotate" => match args {
            [] => FilterOperation::HueRotate(0.),
            [angle] => FilterOperation::HueRotate(conversions::angle(angle)?),
            _ => return Err(InvalidValue::UnexpectedValue),
        },
        "blur" => match args {
            [] => FilterOperation::Blur(Length::ZERO),
            [radius] => FilterOperation::Blur(Length::Fixed(conversions::non_negative_pixels(builder, radius)?)),
            _ => return Err(InvalidValue::UnexpectedValue),
        },
        "drop-shadow" => match args {
            [CssValue::Shadow(shadow_value)] if !shadow_value.inset && shadow_value.spread.is_none() => {
                FilterOperation::DropShadow(shadow(builder, shadow_value)?)
            },
            _ => return Err(InvalidValue::UnexpectedValue),
        },
        _ => return Err(InvalidValue::UnexpectedValue),
    };
    Ok(operation)
}

/// Converts `-webkit-filter`: `none` or a list of filter functions and
/// references.
pub fn filter(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Vec<FilterOperation>> {
    if value.is_ident("none") {
        return Ok(Vec::new());
    }
    value
        .as_slice()
        .iter()
        .map(|item| filter_operation(builder, item))
        .collect()
}

/// Converts a basic shape function. Omitted centers and radii are 50%.
pub fn basic_shape(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<BasicShape> {
    let (name, args) = function_args(value)?;
    let half = Length::Percent(50.);
    let optional = |builder: &mut StyleBuilder, index: usize| match args.get(index) {
        Some(arg) => conversions::length_percentage(builder, arg),
        None => Ok(half),
    };
    let shape = match name.as_str() {
        "circle" if args.len() <= 3 => BasicShape::Circle {
            radius: optional(builder, 0)?,
            center_x: optional(builder, 1)?,
            center_y: optional(builder, 2)?,
        },
        "ellipse" if args.len() <= 4 => BasicShape::Ellipse {
            radius_x: optional(builder, 0)?,
            radius_y: optional(builder, 1)?,
            center_x: optional(builder, 2)?,
            center_y: optional(builder, 3)?,
        },
        "polygon" if !args.is_empty() => BasicShape::Polygon(
            args.iter()
                .map(|point| match *point {
                    CssValue::Pair(ref x, ref y) => Ok((
                        conversions::length_percentage(builder, x)?,
                        conversions::length_percentage(builder, y)?,
                    )),
                    _ => Err(InvalidValue::UnexpectedValue),
                })
                .collect::<ConversionResult<_>>()?,
        ),
        "inset" => BasicShape::Inset(conversions::length_box(
            builder,
            &CssValue::List(args.to_vec()),
            LengthAllow::LENGTH_PERCENTAGE,
        )?),
        _ => return Err(InvalidValue::UnexpectedValue),
    };
    Ok(shape)
}

/// Converts `-webkit-clip-path`: `none`, a reference or a basic shape.
pub fn clip_path(
    builder: &mut StyleBuilder,
    value: &CssValue,
) -> ConversionResult<Option<ClipPathOperation>> {
    match *value {
        CssValue::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => Ok(None),
        CssValue::Url(ref url) => Ok(Some(ClipPathOperation::Reference(url.clone()))),
        _ => Ok(Some(ClipPathOperation::Shape(basic_shape(builder, value)?))),
    }
}

/// Converts `-webkit-shape-outside`: `none`, `auto`, an image or a basic
/// shape.
pub fn shape_outside(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Option<ShapeValue>> {
    match *value {
        CssValue::Ident(ref ident)
            if ident.eq_ignore_ascii_case("none") || ident.eq_ignore_ascii_case("auto") =>
        {
            Ok(None)
        },
        CssValue::Url(ref url) => Ok(Some(ShapeValue::Image(StyleImage::Pending(url.clone())))),
        _ => Ok(Some(ShapeValue::Shape(basic_shape(builder, value)?))),
    }
}

/// Converts `-webkit-perspective`: `none` is zero, and a bare number is
/// taken as pixels.
pub fn perspective(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<CSSFloat> {
    let perspective = match *value {
        CssValue::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => return Ok(0.),
        CssValue::Number(number) => number * builder.style.effective_zoom(),
        CssValue::Integer(number) => number as CSSFloat * builder.style.effective_zoom(),
        _ => conversions::pixels(builder, value)?,
    };
    if perspective < 0. {
        return Err(InvalidValue::OutOfRange);
    }
    Ok(perspective)
}

/// Converts a border corner radius. A zero component makes the whole
/// corner square.
pub fn border_radius(
    builder: &mut StyleBuilder,
    value: &CssValue,
) -> ConversionResult<LengthSize> {
    let mut radius = conversions::length_size(builder, value, LengthAllow::LENGTH_PERCENTAGE)?;
    if radius.width.value() < 0. || radius.height.value() < 0. {
        return Err(InvalidValue::OutOfRange);
    }
    if radius.width.is_zero() {
        radius.height = radius.width;
    } else if radius.height.is_zero() {
        radius.width = radius.height;
    }
    Ok(radius)
}

/// Converts `-webkit-column-count`; `auto` is `None`.
pub fn column_count(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Option<u16>> {
    conversions::auto_or(builder, value, |builder, value| {
        match conversions::integer(builder, value)? {
            count if count < 1 => Err(InvalidValue::OutOfRange),
            count => Ok(count.min(u16::MAX as i32) as u16),
        }
    })
}

/// Converts `-webkit-column-gap`; `normal` is `None`.
pub fn column_gap(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Option<CSSFloat>> {
    if value.is_ident("normal") {
        return Ok(None);
    }
    conversions::non_negative_pixels(builder, value).map(Some)
}

/// Converts `-webkit-column-width`; `auto` is `None`.
pub fn column_width(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Option<CSSFloat>> {
    conversions::auto_or(builder, value, conversions::non_negative_pixels)
}
