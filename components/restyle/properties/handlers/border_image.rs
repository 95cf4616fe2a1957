/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! `border-image` and `-webkit-mask-box-image`, with their longhands.

use crate::computed_style::ComputedStyle;
use crate::error_reporting::InvalidValue;
use crate::properties::builder::StyleBuilder;
use crate::properties::conversions::{self, ConversionResult};
use crate::properties::handlers::{ApplyProperty, Converter};
use crate::properties::value::{CssValue, quad_from_value};
use crate::values::border::{NinePieceImage, NinePieceImageRule};
use crate::values::image::StyleImage;
use crate::values::length::{Length, LengthBox};
use crate::values::CssKeyword;

/// Which nine-piece image of the style a property sets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NinePieceKind {
    /// `border-image`.
    Border,
    /// `-webkit-mask-box-image`.
    Mask,
}

impl NinePieceKind {
    fn initial(self) -> NinePieceImage {
        match self {
            NinePieceKind::Border => NinePieceImage::default(),
            NinePieceKind::Mask => NinePieceImage::mask_defaults(),
        }
    }

    fn get(self, style: &ComputedStyle) -> NinePieceImage {
        match self {
            NinePieceKind::Border => style.border_image(),
            NinePieceKind::Mask => style.mask_box_image(),
        }
    }

    fn set(self, style: &mut ComputedStyle, image: NinePieceImage) {
        match self {
            NinePieceKind::Border => style.set_border_image(image),
            NinePieceKind::Mask => style.set_mask_box_image(image),
        }
    }
}

/// The whole nine-piece image. Components left out of the value take their
/// initial values.
pub struct NinePieceImageProperty(pub NinePieceKind);

impl ApplyProperty for NinePieceImageProperty {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let image = self.0.get(builder.inherited_style());
        self.0.set(&mut builder.style, image);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        self.0.set(&mut builder.style, self.0.initial());
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let mut image = self.0.initial();
        match *value {
            CssValue::NinePiece(ref pieces) => {
                if let Some(ref value) = pieces.source {
                    image.image = source(builder, value)?;
                }
                if let Some(ref value) = pieces.slice {
                    (image.image_slices, image.fill) = slice(builder, value)?;
                }
                if let Some(ref value) = pieces.width {
                    image.border_slices = width(builder, value)?;
                }
                if let Some(ref value) = pieces.outset {
                    image.outset = outset(builder, value)?;
                }
                if let Some(ref value) = pieces.repeat {
                    (image.horizontal_rule, image.vertical_rule) = repeat(builder, value)?;
                }
            },
            CssValue::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => {},
            _ => return Err(InvalidValue::UnexpectedValue),
        }
        self.0.set(&mut builder.style, image);
        Ok(())
    }
}

/// One component of a nine-piece image, such as `border-image-slice`.
pub struct NinePieceComponent<T> {
    kind: NinePieceKind,
    get: fn(&NinePieceImage) -> T,
    set: fn(&mut NinePieceImage, T),
    convert: Converter<T>,
}

impl<T> NinePieceComponent<T> {
    #[allow(missing_docs)]
    pub fn new(
        kind: NinePieceKind,
        get: fn(&NinePieceImage) -> T,
        set: fn(&mut NinePieceImage, T),
        convert: Converter<T>,
    ) -> Self {
        NinePieceComponent {
            kind,
            get,
            set,
            convert,
        }
    }

    fn write(&self, builder: &mut StyleBuilder, value: T) {
        let mut image = self.kind.get(&builder.style);
        (self.set)(&mut image, value);
        self.kind.set(&mut builder.style, image);
    }
}

impl<T> ApplyProperty for NinePieceComponent<T> {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let value = (self.get)(&self.kind.get(builder.inherited_style()));
        self.write(builder, value);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        let value = (self.get)(&self.kind.initial());
        self.write(builder, value);
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let value = (self.convert)(builder, value)?;
        self.write(builder, value);
        Ok(())
    }
}

/// Converts the image source.
pub fn source(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Option<StyleImage>> {
    conversions::image(builder, value)
}

/// Converts the slice offsets and the `fill` flag. Numbers are image
/// pixels, so they are not zoomed.
pub fn slice(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<(LengthBox, bool)> {
    let (sides, fill) = match *value {
        CssValue::Slice(ref sides, fill) => ((**sides).clone(), fill),
        _ => (quad_from_value(value).ok_or(InvalidValue::UnexpectedValue)?, false),
    };
    let side = |value: &CssValue| match *value {
        CssValue::Percentage(percent) if percent >= 0. => Ok(Length::Percent(percent)),
        CssValue::Number(..) | CssValue::Integer(..) => match value.as_number() {
            Some(number) if number >= 0. => Ok(Length::Fixed(number)),
            _ => Err(InvalidValue::OutOfRange),
        },
        CssValue::Percentage(..) => Err(InvalidValue::OutOfRange),
        _ => Err(InvalidValue::UnexpectedValue),
    };
    let [top, right, bottom, left] = sides;
    Ok((
        LengthBox::new(side(&top)?, side(&right)?, side(&bottom)?, side(&left)?),
        fill,
    ))
}

/// Converts a quad where numbers are multiples of the border width, as in
/// `border-image-width` and `border-image-outset`.
fn relative_quad(
    builder: &mut StyleBuilder,
    value: &CssValue,
    allow_percent_and_auto: bool,
) -> ConversionResult<LengthBox> {
    let sides = quad_from_value(value).ok_or(InvalidValue::UnexpectedValue)?;
    let mut lengths = [Length::Auto; 4];
    for (length, side) in lengths.iter_mut().zip(sides.iter()) {
        *length = match *side {
            CssValue::Number(..) | CssValue::Integer(..) => {
                Length::Relative(side.as_number().ok_or(InvalidValue::UnexpectedValue)?)
            },
            CssValue::Percentage(percent) if allow_percent_and_auto => Length::Percent(percent),
            CssValue::Ident(ref ident)
                if allow_percent_and_auto && ident.eq_ignore_ascii_case("auto") =>
            {
                Length::Auto
            },
            CssValue::Dimension(..) => Length::Fixed(conversions::pixels(builder, side)?),
            _ => return Err(InvalidValue::UnexpectedValue),
        };
        if length.value() < 0. {
            return Err(InvalidValue::OutOfRange);
        }
    }
    let [top, right, bottom, left] = lengths;
    Ok(LengthBox::new(top, right, bottom, left))
}

/// Converts the border image area widths.
pub fn width(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<LengthBox> {
    relative_quad(builder, value, true)
}

/// Converts the outsets.
pub fn outset(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<LengthBox> {
    relative_quad(builder, value, false)
}

/// Converts the tiling rules: one keyword for both axes, or a pair.
pub fn repeat(
    _: &mut StyleBuilder,
    value: &CssValue,
) -> ConversionResult<(NinePieceImageRule, NinePieceImageRule)> {
    let rule = |value: &CssValue| {
        let ident = value.as_ident().ok_or(InvalidValue::UnexpectedValue)?;
        NinePieceImageRule::from_ident(ident).ok_or(InvalidValue::UnknownKeyword)
    };
    match *value {
        CssValue::Pair(ref horizontal, ref vertical) => Ok((rule(horizontal)?, rule(vertical)?)),
        _ => {
            let both = rule(value)?;
            Ok((both, both))
        },
    }
}
