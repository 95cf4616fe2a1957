/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Conversions from specified values to computed values.
//!
//! Every function here either produces the whole computed value or fails
//! without touching the style, so a rejected declaration never leaves a
//! property half-applied.

use app_units::Au;
use bitflags::bitflags;

use crate::error_reporting::InvalidValue;
use crate::properties::builder::StyleBuilder;
use crate::properties::value::CssValue;
use crate::values::color::{Color, RGBA};
use crate::values::content::TextDecorationLine;
use crate::values::image::StyleImage;
use crate::values::length::{Length, LengthBox, LengthSize};
use crate::values::{CSSFloat, CssKeyword};

/// The result of converting a specified value.
pub type ConversionResult<T> = Result<T, InvalidValue>;

bitflags! {
    /// Which kinds of lengths a property accepts.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct LengthAllow: u8 {
        /// Absolute and relative lengths.
        const FIXED = 1 << 0;
        /// Percentages.
        const PERCENT = 1 << 1;
        /// `auto`.
        const AUTO = 1 << 2;
        /// `intrinsic`, `min-intrinsic` and the content sizing keywords.
        const INTRINSIC = 1 << 3;
        /// `none`, computing to an undefined length.
        const NONE = 1 << 4;
    }
}

impl LengthAllow {
    /// Lengths and percentages.
    pub const LENGTH_PERCENTAGE: LengthAllow = LengthAllow::FIXED.union(LengthAllow::PERCENT);
    /// Lengths, percentages and `auto`.
    pub const LENGTH_PERCENTAGE_AUTO: LengthAllow =
        LengthAllow::LENGTH_PERCENTAGE.union(LengthAllow::AUTO);
}

/// Converts a keyword of type `K`.
pub fn keyword<K: CssKeyword>(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<K> {
    let ident = value.as_ident().ok_or(InvalidValue::UnexpectedValue)?;
    K::from_ident(ident).ok_or(InvalidValue::UnknownKeyword)
}

/// Converts a number.
pub fn number(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<CSSFloat> {
    value.as_number().ok_or(InvalidValue::UnexpectedValue)
}

/// Converts a non-negative number.
pub fn non_negative_number(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<CSSFloat> {
    match number(builder, value)? {
        number if number < 0. => Err(InvalidValue::OutOfRange),
        number => Ok(number),
    }
}

/// Converts a number clamped to `[0, 1]`, like `opacity`.
pub fn unit_interval(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<CSSFloat> {
    Ok(number(builder, value)?.clamp(0., 1.))
}

/// Converts an integer.
pub fn integer(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<i32> {
    value.as_integer().ok_or(InvalidValue::UnexpectedValue)
}

/// Converts a positive integer that fits in 16 bits, like `orphans`.
pub fn positive_short(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<i16> {
    let integer = integer(builder, value)?;
    if integer < 1 {
        return Err(InvalidValue::OutOfRange);
    }
    Ok(integer.min(i32::from(i16::MAX)) as i16)
}

/// Converts a time to seconds.
pub fn time(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<f64> {
    match *value {
        CssValue::Time(seconds) => Ok(f64::from(seconds)),
        _ => Err(InvalidValue::UnexpectedValue),
    }
}

/// Converts an angle to degrees. A unitless zero is accepted.
pub fn angle(value: &CssValue) -> ConversionResult<CSSFloat> {
    match *value {
        CssValue::Angle(degrees) => Ok(degrees),
        CssValue::Number(number) if number == 0. => Ok(0.),
        CssValue::Integer(0) => Ok(0.),
        _ => Err(InvalidValue::UnexpectedValue),
    }
}

/// Converts a length to pixels, multiplying absolute lengths by the
/// effective zoom. A unitless zero is accepted.
pub fn pixels(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<CSSFloat> {
    let zoom = builder.style.effective_zoom();
    pixels_with_zoom(builder, value, zoom)
}

/// Converts a length to pixels, multiplying absolute lengths by `zoom`.
pub fn pixels_with_zoom(
    builder: &mut StyleBuilder,
    value: &CssValue,
    zoom: CSSFloat,
) -> ConversionResult<CSSFloat> {
    match *value {
        CssValue::Dimension(length, unit) => Ok(builder.compute_length(length, unit, zoom, false)),
        CssValue::Number(number) if number == 0. => Ok(0.),
        CssValue::Integer(0) => Ok(0.),
        _ => Err(InvalidValue::UnexpectedValue),
    }
}

/// Converts a non-negative length to pixels.
pub fn non_negative_pixels(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<CSSFloat> {
    match pixels(builder, value)? {
        pixels if pixels < 0. => Err(InvalidValue::OutOfRange),
        pixels => Ok(pixels),
    }
}

/// Converts a length to pixels, also accepting `normal` as zero, like
/// `letter-spacing`.
pub fn pixels_or_normal(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<CSSFloat> {
    if value.is_ident("normal") {
        return Ok(0.);
    }
    pixels(builder, value)
}

/// Converts a line thickness, like `border-top-width`.
///
/// `thin`, `medium` and `thick` are 1, 3 and 5 pixels regardless of zoom. A
/// length that was at least one pixel before zooming never zooms below one
/// pixel, so borders don't vanish when zoomed out.
pub fn thickness(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<CSSFloat> {
    if let Some(ident) = value.as_ident() {
        return match ident.to_ascii_lowercase().as_str() {
            "thin" => Ok(1.),
            "medium" => Ok(3.),
            "thick" => Ok(5.),
            _ => Err(InvalidValue::UnknownKeyword),
        };
    }
    let zoom = builder.style.effective_zoom();
    let length = pixels_with_zoom(builder, value, zoom)?;
    if length < 0. {
        return Err(InvalidValue::OutOfRange);
    }
    if zoom < 1. && length < 1. && pixels_with_zoom(builder, value, 1.)? >= 1. {
        return Ok(1.);
    }
    Ok(length)
}

/// Converts a length to app units, like `border-spacing`.
pub fn app_units(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Au> {
    Ok(Au::from_f32_px(non_negative_pixels(builder, value)?))
}

/// Converts a length, percentage or one of the keywords `allow` permits.
pub fn length(
    builder: &mut StyleBuilder,
    value: &CssValue,
    allow: LengthAllow,
) -> ConversionResult<Length> {
    match *value {
        CssValue::Dimension(..) | CssValue::Number(..) | CssValue::Integer(..)
            if allow.contains(LengthAllow::FIXED) =>
        {
            Ok(Length::Fixed(pixels(builder, value)?))
        },
        CssValue::Percentage(percent) if allow.contains(LengthAllow::PERCENT) => {
            Ok(Length::Percent(percent))
        },
        CssValue::Ident(ref ident) => {
            let ident = ident.to_ascii_lowercase();
            let length = match ident.as_str() {
                "auto" if allow.contains(LengthAllow::AUTO) => Length::Auto,
                "none" if allow.contains(LengthAllow::NONE) => Length::Undefined,
                "intrinsic" if allow.contains(LengthAllow::INTRINSIC) => Length::Intrinsic,
                "min-intrinsic" if allow.contains(LengthAllow::INTRINSIC) => Length::MinIntrinsic,
                "-webkit-min-content" if allow.contains(LengthAllow::INTRINSIC) => {
                    Length::MinContent
                },
                "-webkit-max-content" if allow.contains(LengthAllow::INTRINSIC) => {
                    Length::MaxContent
                },
                "-webkit-fill-available" if allow.contains(LengthAllow::INTRINSIC) => {
                    Length::FillAvailable
                },
                "-webkit-fit-content" if allow.contains(LengthAllow::INTRINSIC) => {
                    Length::FitContent
                },
                _ => return Err(InvalidValue::UnknownKeyword),
            };
            Ok(length)
        },
        _ => Err(InvalidValue::UnexpectedValue),
    }
}

/// A length or a percentage.
pub fn length_percentage(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Length> {
    length(builder, value, LengthAllow::LENGTH_PERCENTAGE)
}

/// A length, a percentage or `auto`.
pub fn length_percentage_auto(
    builder: &mut StyleBuilder,
    value: &CssValue,
) -> ConversionResult<Length> {
    length(builder, value, LengthAllow::LENGTH_PERCENTAGE_AUTO)
}

/// A `width` or `height`.
pub fn size(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Length> {
    length(
        builder,
        value,
        LengthAllow::LENGTH_PERCENTAGE_AUTO | LengthAllow::INTRINSIC,
    )
}

/// A `min-width` or `min-height`.
pub fn min_size(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Length> {
    size(builder, value)
}

/// A `max-width` or `max-height`.
pub fn max_size(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Length> {
    length(
        builder,
        value,
        LengthAllow::LENGTH_PERCENTAGE | LengthAllow::INTRINSIC | LengthAllow::NONE,
    )
}

/// A horizontal position: a length, a percentage, or `left`, `center` or
/// `right`.
pub fn position_x(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Length> {
    position(builder, value, "left", "right")
}

/// A vertical position: a length, a percentage, or `top`, `center` or
/// `bottom`.
pub fn position_y(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Length> {
    position(builder, value, "top", "bottom")
}

fn position(
    builder: &mut StyleBuilder,
    value: &CssValue,
    start: &str,
    end: &str,
) -> ConversionResult<Length> {
    if let Some(ident) = value.as_ident() {
        return if ident.eq_ignore_ascii_case(start) {
            Ok(Length::Percent(0.))
        } else if ident.eq_ignore_ascii_case("center") {
            Ok(Length::Percent(50.))
        } else if ident.eq_ignore_ascii_case(end) {
            Ok(Length::Percent(100.))
        } else {
            Err(InvalidValue::UnknownKeyword)
        };
    }
    length_percentage(builder, value)
}

/// A two-component size, where a single value applies to both components.
pub fn length_size(
    builder: &mut StyleBuilder,
    value: &CssValue,
    allow: LengthAllow,
) -> ConversionResult<LengthSize> {
    match *value {
        CssValue::Pair(ref width, ref height) => Ok(LengthSize::new(
            length(builder, width, allow)?,
            length(builder, height, allow)?,
        )),
        _ => {
            let both = length(builder, value, allow)?;
            Ok(LengthSize::new(both, both))
        },
    }
}

/// A four-sided box of lengths, given as a `Rect`.
pub fn length_box(
    builder: &mut StyleBuilder,
    value: &CssValue,
    allow: LengthAllow,
) -> ConversionResult<LengthBox> {
    let sides = crate::properties::value::quad_from_value(value).ok_or(InvalidValue::UnexpectedValue)?;
    Ok(LengthBox::new(
        length(builder, &sides[0], allow)?,
        length(builder, &sides[1], allow)?,
        length(builder, &sides[2], allow)?,
        length(builder, &sides[3], allow)?,
    ))
}

/// Converts a color for the regular style or, when `for_visited_link` is
/// set, for the visited-link style.
pub fn color(
    builder: &StyleBuilder,
    value: &CssValue,
    for_visited_link: bool,
) -> ConversionResult<Color> {
    match *value {
        CssValue::Color(rgba) => Ok(Color::Rgba(rgba)),
        CssValue::Ident(ref ident) => {
            let device = builder.device;
            let rgba = match ident.to_ascii_lowercase().as_str() {
                "currentcolor" => return Ok(Color::CurrentColor),
                "-webkit-link" if for_visited_link => device.visited_link_color,
                "-webkit-link" => device.link_color,
                "-webkit-activelink" => device.active_link_color,
                "-webkit-focus-ring-color" => device.focus_ring_color,
                "-webkit-text" => RGBA::BLACK,
                name => RGBA::from_named(name).ok_or(InvalidValue::UnknownKeyword)?,
            };
            Ok(Color::Rgba(rgba))
        },
        _ => Err(InvalidValue::UnexpectedValue),
    }
}

/// Converts an image reference. `none` is `None`.
pub fn image(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Option<StyleImage>> {
    match *value {
        CssValue::Url(ref url) => Ok(Some(StyleImage::Pending(url.clone()))),
        CssValue::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => Ok(None),
        _ => Err(InvalidValue::UnexpectedValue),
    }
}

/// Converts a list of `text-decoration` line keywords, or `none`.
pub fn text_decoration(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<TextDecorationLine> {
    if value.is_ident("none") {
        return Ok(TextDecorationLine::empty());
    }
    value.as_slice().iter().try_fold(TextDecorationLine::empty(), |lines, item| {
        let ident = item.as_ident().ok_or(InvalidValue::UnexpectedValue)?;
        let line = TextDecorationLine::from_ident(ident).ok_or(InvalidValue::UnknownKeyword)?;
        Ok(lines | line)
    })
}

/// Converts `auto` to `None` and anything `convert` accepts to `Some`.
pub fn auto_or<T>(
    builder: &mut StyleBuilder,
    value: &CssValue,
    convert: impl FnOnce(&mut StyleBuilder, &CssValue) -> ConversionResult<T>,
) -> ConversionResult<Option<T>> {
    if value.is_ident("auto") {
        return Ok(None);
    }
    convert(builder, value).map(Some)
}

/// Converts a length to pixels without applying zoom, as used for page
/// sizes.
pub fn unzoomed_pixels(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<CSSFloat> {
    pixels_with_zoom(builder, value, 1.)
}
