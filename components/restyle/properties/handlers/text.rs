/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Text, box and paged-media properties whose computed value is more than a
//! single field, plus the handlers that record document-level state.

use crate::computed_style::ComputedStyle;
use crate::device::DocumentState;
use crate::error_reporting::InvalidValue;
use crate::properties::builder::StyleBuilder;
use crate::properties::conversions::{self, ConversionResult, LengthAllow};
use crate::properties::handlers::ApplyProperty;
use crate::properties::value::CssValue;
use crate::values::border::BorderStyle;
use crate::values::content::{CursorImage, PageSize, PageSizeName};
use crate::values::image::StyleImage;
use crate::values::keywords::{
    CursorKind, Direction, TextAlign, TextEmphasisFill, TextEmphasisMark, VerticalAlign,
};
use crate::values::length::{Length, LengthBox, LengthSize};
use crate::values::CssKeyword;

/// Wraps the handler of a property that, when set on the root element, the
/// document has to know about.
pub struct RecordOnDocument<H> {
    inner: H,
    record: fn(&DocumentState, bool),
}

impl<H> RecordOnDocument<H> {
    #[allow(missing_docs)]
    pub fn new(inner: H, record: fn(&DocumentState, bool)) -> Self {
        RecordOnDocument { inner, record }
    }

    fn record(&self, builder: &StyleBuilder) {
        if builder.element_is_root {
            (self.record)(builder.document, true);
        }
    }
}

impl<H: ApplyProperty> ApplyProperty for RecordOnDocument<H> {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        self.inner.apply_inherit(builder);
        self.record(builder);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        self.inner.apply_initial(builder);
        self.record(builder);
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        self.inner.apply_value(builder, value)?;
        self.record(builder);
        Ok(())
    }
}

/// Converts `text-align`. `-webkit-match-parent` takes the parent's
/// alignment, with `start` and `end` resolved against the parent's
/// direction.
pub fn text_align(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<TextAlign> {
    if !value.is_ident("-webkit-match-parent") {
        return conversions::keyword(builder, value);
    }
    let parent = builder.inherited_style();
    let ltr = parent.direction() == Direction::Ltr;
    Ok(match parent.text_align() {
        TextAlign::Start if ltr => TextAlign::Left,
        TextAlign::Start => TextAlign::Right,
        TextAlign::End if ltr => TextAlign::Right,
        TextAlign::End => TextAlign::Left,
        align => align,
    })
}

/// `cursor` and the cursor images that precede its keyword.
pub type Cursor = (CursorKind, Vec<CursorImage>);

#[allow(missing_docs)]
pub fn get_cursor(style: &ComputedStyle) -> Cursor {
    (style.cursor(), style.cursor_images().to_vec())
}

#[allow(missing_docs)]
pub fn set_cursor(style: &mut ComputedStyle, (kind, images): Cursor) {
    style.set_cursor(kind);
    style.set_cursor_images(images);
}

/// Converts a `cursor` list: any number of images, each optionally with a
/// hot spot, followed by a keyword.
pub fn cursor(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Cursor> {
    let items = value.as_slice();
    let Some((keyword, images)) = items.split_last() else {
        return Err(InvalidValue::UnexpectedValue);
    };
    let kind = conversions::keyword(builder, keyword)?;
    let images = images
        .iter()
        .map(|image| match *image {
            CssValue::Url(ref url) => Ok(CursorImage {
                image: StyleImage::Pending(url.clone()),
                hot_spot: (0, 0),
            }),
            CssValue::Pair(ref url, ref hot_spot) => {
                let (CssValue::Url(url), CssValue::Pair(x, y)) = (&**url, &**hot_spot) else {
                    return Err(InvalidValue::UnexpectedValue);
                };
                let (Some(x), Some(y)) = (x.as_integer(), y.as_integer()) else {
                    return Err(InvalidValue::UnexpectedValue);
                };
                Ok(CursorImage {
                    image: StyleImage::Pending(url.clone()),
                    hot_spot: (x, y),
                })
            },
            _ => Err(InvalidValue::UnexpectedValue),
        })
        .collect::<ConversionResult<Vec<_>>>()?;
    Ok((kind, images))
}

#[allow(missing_docs)]
pub fn get_vertical_align(style: &ComputedStyle) -> (VerticalAlign, Length) {
    (style.vertical_align(), style.vertical_align_length())
}

#[allow(missing_docs)]
pub fn set_vertical_align(style: &mut ComputedStyle, (align, length): (VerticalAlign, Length)) {
    style.set_vertical_align(align);
    style.set_vertical_align_length(length);
}

/// Converts `vertical-align`: a keyword, or a length or percentage that
/// shifts the baseline.
pub fn vertical_align(
    builder: &mut StyleBuilder,
    value: &CssValue,
) -> ConversionResult<(VerticalAlign, Length)> {
    if let Some(ident) = value.as_ident() {
        return match VerticalAlign::from_ident(ident) {
            Some(VerticalAlign::Length) | None => Err(InvalidValue::UnknownKeyword),
            Some(align) => Ok((align, Length::Auto)),
        };
    }
    let length = conversions::length_percentage(builder, value)?;
    Ok((VerticalAlign::Length, length))
}

/// `z-index`, where `None` is `auto`.
pub fn get_z_index(style: &ComputedStyle) -> Option<i32> {
    (!style.has_auto_z_index()).then(|| style.z_index())
}

#[allow(missing_docs)]
pub fn set_z_index(style: &mut ComputedStyle, z_index: Option<i32>) {
    style.set_has_auto_z_index(z_index.is_none());
    style.set_z_index(z_index.unwrap_or(0));
}

#[allow(missing_docs)]
pub fn z_index(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Option<i32>> {
    conversions::auto_or(builder, value, conversions::integer)
}

/// `clip`, where `None` is `auto`.
pub fn get_clip(style: &ComputedStyle) -> Option<LengthBox> {
    style.has_clip().then(|| style.clip())
}

#[allow(missing_docs)]
pub fn set_clip(style: &mut ComputedStyle, clip: Option<LengthBox>) {
    style.set_has_clip(clip.is_some());
    style.set_clip(clip.unwrap_or_else(|| LengthBox::uniform(Length::Auto)));
}

/// Converts `clip`: `auto`, or a `rect()` whose sides may be `auto`.
pub fn clip(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Option<LengthBox>> {
    match *value {
        CssValue::Rect(..) => {
            conversions::length_box(builder, value, LengthAllow::FIXED | LengthAllow::AUTO).map(Some)
        },
        CssValue::Ident(ref ident) if ident.eq_ignore_ascii_case("auto") => Ok(None),
        _ => Err(InvalidValue::UnexpectedValue),
    }
}

#[allow(missing_docs)]
pub fn get_outline_style(style: &ComputedStyle) -> (BorderStyle, bool) {
    (style.outline_style(), style.outline_style_is_auto())
}

#[allow(missing_docs)]
pub fn set_outline_style(style: &mut ComputedStyle, (border_style, is_auto): (BorderStyle, bool)) {
    style.set_outline_style(border_style);
    style.set_outline_style_is_auto(is_auto);
}

/// Converts `outline-style`; `auto` paints like `dotted`, with the
/// platform's focus ring appearance.
pub fn outline_style(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<(BorderStyle, bool)> {
    if value.is_ident("auto") {
        return Ok((BorderStyle::Dotted, true));
    }
    Ok((conversions::keyword(builder, value)?, false))
}

#[allow(missing_docs)]
pub fn get_text_emphasis_style(style: &ComputedStyle) -> (TextEmphasisFill, TextEmphasisMark) {
    (style.text_emphasis_fill(), style.text_emphasis_mark())
}

#[allow(missing_docs)]
pub fn set_text_emphasis_style(
    style: &mut ComputedStyle,
    (fill, mark): (TextEmphasisFill, TextEmphasisMark),
) {
    style.set_text_emphasis_fill(fill);
    style.set_text_emphasis_mark(mark);
}

/// Converts `-webkit-text-emphasis-style`: `none`, or a fill and a mark
/// where either may be omitted. A missing mark depends on the writing
/// mode: `dot` for horizontal text, `sesame` for vertical text.
pub fn text_emphasis_style(
    builder: &mut StyleBuilder,
    value: &CssValue,
) -> ConversionResult<(TextEmphasisFill, TextEmphasisMark)> {
    if value.is_ident("none") {
        return Ok((TextEmphasisFill::Filled, TextEmphasisMark::None));
    }
    let mut fill = None;
    let mut mark = None;
    for item in value.as_slice() {
        let ident = item.as_ident().ok_or(InvalidValue::UnexpectedValue)?;
        if let Some(parsed) = TextEmphasisFill::from_ident(ident) {
            fill = Some(parsed);
        } else if let Some(parsed) = TextEmphasisMark::from_ident(ident) {
            if parsed == TextEmphasisMark::None {
                return Err(InvalidValue::UnknownKeyword);
            }
            mark = Some(parsed);
        } else {
            return Err(InvalidValue::UnknownKeyword);
        }
    }
    let mark = mark.unwrap_or(if builder.style.writing_mode().is_horizontal() {
        TextEmphasisMark::Dot
    } else {
        TextEmphasisMark::Sesame
    });
    Ok((fill.unwrap_or(TextEmphasisFill::Filled), mark))
}

/// Converts the `@page` `size`: `auto`, an orientation, a paper size
/// optionally followed by an orientation, or one or two lengths. Lengths
/// are not zoomed.
pub fn page_size(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<PageSize> {
    fn orientation(value: &CssValue) -> Option<bool> {
        if value.is_ident("portrait") {
            Some(false)
        } else if value.is_ident("landscape") {
            Some(true)
        } else {
            None
        }
    }

    fn paper(value: &CssValue) -> Option<PageSizeName> {
        value.as_ident().and_then(PageSizeName::from_ident)
    }

    fn oriented(name: PageSizeName, landscape: bool) -> PageSize {
        let size = name.portrait_size();
        PageSize::Resolved(if landscape {
            LengthSize::new(size.height, size.width)
        } else {
            size
        })
    }

    fn length(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Length> {
        match conversions::unzoomed_pixels(builder, value)? {
            pixels if pixels < 0. => Err(InvalidValue::OutOfRange),
            pixels => Ok(Length::Fixed(pixels)),
        }
    }

    match *value {
        CssValue::Ident(ref ident) if ident.eq_ignore_ascii_case("auto") => Ok(PageSize::Auto),
        CssValue::Ident(_) => {
            if let Some(landscape) = orientation(value) {
                return Ok(PageSize::AutoOriented { landscape });
            }
            paper(value)
                .map(|name| oriented(name, false))
                .ok_or(InvalidValue::UnknownKeyword)
        },
        CssValue::Pair(ref first, ref second) => {
            if let (Some(name), Some(landscape)) = (paper(first), orientation(second)) {
                return Ok(oriented(name, landscape));
            }
            if let (Some(landscape), Some(name)) = (orientation(first), paper(second)) {
                return Ok(oriented(name, landscape));
            }
            let width = length(builder, first)?;
            let height = length(builder, second)?;
            Ok(PageSize::Resolved(LengthSize::new(width, height)))
        },
        _ => {
            let side = length(builder, value)?;
            Ok(PageSize::Resolved(LengthSize::new(side, side)))
        },
    }
}
