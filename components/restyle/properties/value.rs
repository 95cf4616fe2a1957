/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Specified values, as handed over by the CSS parser.
//!
//! The parser is not part of this crate. It produces a loosely typed value
//! tree, and each property handler decides whether the shape it receives is
//! acceptable for its property.

use crate::values::CSSFloat;
use crate::values::color::RGBA;

/// The unit of a dimension.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[allow(missing_docs)]
pub enum LengthUnit {
    Px,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
    Em,
    Ex,
    Ch,
    Rem,
    Vw,
    Vh,
    Vmin,
    Vmax,
}

impl LengthUnit {
    /// Whether the unit depends on the font.
    pub fn is_font_relative(self) -> bool {
        matches!(self, LengthUnit::Em | LengthUnit::Ex | LengthUnit::Ch | LengthUnit::Rem)
    }

    /// Whether the unit depends on the viewport size.
    pub fn is_viewport_relative(self) -> bool {
        matches!(
            self,
            LengthUnit::Vw | LengthUnit::Vh | LengthUnit::Vmin | LengthUnit::Vmax
        )
    }

    /// The number of CSS pixels in one unit, for absolute units.
    pub fn absolute_factor(self) -> Option<CSSFloat> {
        let factor = match self {
            LengthUnit::Px => 1.,
            LengthUnit::Cm => 96. / 2.54,
            LengthUnit::Mm => 96. / 25.4,
            LengthUnit::In => 96.,
            LengthUnit::Pt => 96. / 72.,
            LengthUnit::Pc => 16.,
            _ => return None,
        };
        Some(factor)
    }
}

/// A parsed `text-shadow`, `box-shadow` or `drop-shadow()` entry.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct ShadowValue {
    pub x: CssValue,
    pub y: CssValue,
    pub blur: Option<CssValue>,
    pub spread: Option<CssValue>,
    pub color: Option<CssValue>,
    pub inset: bool,
}

/// A parsed `border-image` or `-webkit-mask-box-image`.
#[derive(Clone, Debug, Default, PartialEq)]
#[allow(missing_docs)]
pub struct NinePieceValue {
    pub source: Option<CssValue>,
    pub slice: Option<CssValue>,
    pub width: Option<CssValue>,
    pub outset: Option<CssValue>,
    pub repeat: Option<CssValue>,
}

/// A parsed `font` shorthand that is not a system font keyword.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct FontShorthandValue {
    pub style: Option<CssValue>,
    pub variant: Option<CssValue>,
    pub weight: Option<CssValue>,
    pub size: CssValue,
    pub line_height: Option<CssValue>,
    pub family: CssValue,
}

/// A specified value.
#[derive(Clone, Debug, PartialEq)]
pub enum CssValue {
    /// An identifier, e.g. a keyword.
    Ident(String),
    /// A number without unit.
    Number(CSSFloat),
    /// An integer without unit.
    Integer(i32),
    /// A percentage, where `50%` is `50.`.
    Percentage(CSSFloat),
    /// A length.
    Dimension(CSSFloat, LengthUnit),
    /// A time, in seconds.
    Time(CSSFloat),
    /// An angle, in degrees.
    Angle(CSSFloat),
    /// A color.
    Color(RGBA),
    /// A `url()`.
    Url(String),
    /// A quoted string.
    String(String),
    /// Two values, e.g. a background size or a border radius.
    Pair(Box<CssValue>, Box<CssValue>),
    /// A `rect()` or a four-sided box, in top/right/bottom/left order.
    Rect(Box<[CssValue; 4]>),
    /// A list of values, comma separated for layered properties and space
    /// separated elsewhere.
    List(Vec<CssValue>),
    /// A function with its arguments, e.g. `rotate(45deg)`.
    Function(String, Vec<CssValue>),
    /// A shadow.
    Shadow(Box<ShadowValue>),
    /// A `border-image-slice`.
    Slice(Box<[CssValue; 4]>, bool),
    /// A nine-piece image shorthand.
    NinePiece(Box<NinePieceValue>),
    /// A `font` shorthand.
    Font(Box<FontShorthandValue>),
}

impl CssValue {
    /// An identifier.
    pub fn ident(ident: &str) -> CssValue {
        CssValue::Ident(ident.to_owned())
    }

    /// A length in pixels.
    pub fn px(value: CSSFloat) -> CssValue {
        CssValue::Dimension(value, LengthUnit::Px)
    }

    /// A length in `em`.
    pub fn em(value: CSSFloat) -> CssValue {
        CssValue::Dimension(value, LengthUnit::Em)
    }

    /// A list of values.
    pub fn list(values: Vec<CssValue>) -> CssValue {
        CssValue::List(values)
    }

    /// A pair of values.
    pub fn pair(first: CssValue, second: CssValue) -> CssValue {
        CssValue::Pair(Box::new(first), Box::new(second))
    }

    /// The identifier, if this is one.
    pub fn as_ident(&self) -> Option<&str> {
        match *self {
            CssValue::Ident(ref ident) => Some(ident),
            _ => None,
        }
    }

    /// Whether this is the given identifier, ignoring ASCII case.
    pub fn is_ident(&self, ident: &str) -> bool {
        self.as_ident().is_some_and(|own| own.eq_ignore_ascii_case(ident))
    }

    /// The plain number, if this is a number or an integer.
    pub fn as_number(&self) -> Option<CSSFloat> {
        match *self {
            CssValue::Number(value) => Some(value),
            CssValue::Integer(value) => Some(value as CSSFloat),
            _ => None,
        }
    }

    /// The integer, if this is an integer or an integral number.
    pub fn as_integer(&self) -> Option<i32> {
        match *self {
            CssValue::Integer(value) => Some(value),
            CssValue::Number(value) if value.fract() == 0. => Some(value as i32),
            _ => None,
        }
    }

    /// The items of a list, or the value itself as a one-item list.
    pub fn as_slice(&self) -> &[CssValue] {
        match *self {
            CssValue::List(ref items) => items,
            _ => std::slice::from_ref(self),
        }
    }

    /// Whether this value uses a viewport-relative unit anywhere.
    pub fn uses_viewport_units(&self) -> bool {
        match *self {
            CssValue::Dimension(_, unit) => unit.is_viewport_relative(),
            CssValue::Pair(ref first, ref second) => {
                first.uses_viewport_units() || second.uses_viewport_units()
            },
            CssValue::Rect(ref sides) | CssValue::Slice(ref sides, _) => {
                sides.iter().any(CssValue::uses_viewport_units)
            },
            CssValue::List(ref items) | CssValue::Function(_, ref items) => {
                items.iter().any(CssValue::uses_viewport_units)
            },
            _ => false,
        }
    }
}

/// Expands one to four values into top/right/bottom/left the way CSS box
/// shorthands do: a missing right copies the top, a missing bottom copies the
/// top, and a missing left copies the right.
pub fn quad_from_value(value: &CssValue) -> Option<[CssValue; 4]> {
    if let CssValue::Rect(ref sides) = *value {
        return Some((**sides).clone());
    }
    let items = value.as_slice();
    let (top, right, bottom, left) = match items {
        [all] => (all, all, all, all),
        [vertical, horizontal] => (vertical, horizontal, vertical, horizontal),
        [top, horizontal, bottom] => (top, horizontal, bottom, horizontal),
        [top, right, bottom, left] => (top, right, bottom, left),
        _ => return None,
    };
    Some([top.clone(), right.clone(), bottom.clone(), left.clone()])
}
