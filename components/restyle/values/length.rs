/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Computed lengths.

use std::mem;

use crate::values::CSSFloat;

/// A computed length, percentage or sizing keyword.
///
/// Absolute and font-relative units are resolved to [`Length::Fixed`] pixels
/// at cascade time; percentages stay unresolved until layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Length {
    /// `auto`.
    #[default]
    Auto,
    /// A unitless multiplier (e.g. a `border-image-width` number).
    Relative(CSSFloat),
    /// A percentage of some containing dimension.
    Percent(CSSFloat),
    /// Pixels.
    Fixed(CSSFloat),
    /// `intrinsic`.
    Intrinsic,
    /// `min-intrinsic`.
    MinIntrinsic,
    /// `min-content`.
    MinContent,
    /// `max-content`.
    MaxContent,
    /// `fill-available`.
    FillAvailable,
    /// `fit-content`.
    FitContent,
    /// No value at all, e.g. `max-width: none`.
    Undefined,
}

impl Length {
    /// A zero pixel length.
    pub const ZERO: Length = Length::Fixed(0.);

    /// Whether this is `auto`.
    #[inline]
    pub fn is_auto(&self) -> bool {
        matches!(*self, Length::Auto)
    }

    /// Whether this is a fixed pixel length.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(*self, Length::Fixed(..))
    }

    /// Whether this is a percentage.
    #[inline]
    pub fn is_percent(&self) -> bool {
        matches!(*self, Length::Percent(..))
    }

    /// Whether this length carries no value.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(*self, Length::Undefined)
    }

    /// Whether this is `auto` or one of the intrinsic sizing keywords.
    pub fn is_intrinsic_or_auto(&self) -> bool {
        matches!(
            *self,
            Length::Auto |
                Length::Intrinsic |
                Length::MinIntrinsic |
                Length::MinContent |
                Length::MaxContent |
                Length::FillAvailable |
                Length::FitContent
        )
    }

    /// Whether this is a zero fixed length or a zero percentage.
    pub fn is_zero(&self) -> bool {
        match *self {
            Length::Fixed(v) | Length::Percent(v) | Length::Relative(v) => v == 0.,
            _ => false,
        }
    }

    /// The numeric payload, or zero for keywords.
    pub fn value(&self) -> CSSFloat {
        match *self {
            Length::Fixed(v) | Length::Percent(v) | Length::Relative(v) => v,
            _ => 0.,
        }
    }

    /// Whether both lengths have the same type, regardless of their values.
    pub fn has_same_type(&self, other: &Length) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

/// A two-dimensional size, e.g. a border radius or a background size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LengthSize {
    /// The horizontal component.
    pub width: Length,
    /// The vertical component.
    pub height: Length,
}

impl LengthSize {
    /// Builds a size out of its two components.
    pub fn new(width: Length, height: Length) -> Self {
        LengthSize { width, height }
    }

    /// A zero-by-zero fixed size.
    pub fn zero() -> Self {
        LengthSize::new(Length::ZERO, Length::ZERO)
    }
}

/// Four lengths, one per physical side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LengthBox {
    /// The top side.
    pub top: Length,
    /// The right side.
    pub right: Length,
    /// The bottom side.
    pub bottom: Length,
    /// The left side.
    pub left: Length,
}

impl LengthBox {
    /// A box with the same length on every side.
    pub fn uniform(length: Length) -> Self {
        LengthBox {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }

    /// A box from its sides, in CSS shorthand order.
    pub fn new(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        LengthBox {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Whether every side is zero.
    pub fn is_zero(&self) -> bool {
        self.top.is_zero() && self.right.is_zero() && self.bottom.is_zero() && self.left.is_zero()
    }

    /// Mutable access to one side.
    pub fn side_mut(&mut self, side: PhysicalSide) -> &mut Length {
        match side {
            PhysicalSide::Top => &mut self.top,
            PhysicalSide::Right => &mut self.right,
            PhysicalSide::Bottom => &mut self.bottom,
            PhysicalSide::Left => &mut self.left,
        }
    }

    /// The length on the given side.
    pub fn side(&self, side: PhysicalSide) -> Length {
        match side {
            PhysicalSide::Top => self.top,
            PhysicalSide::Right => self.right,
            PhysicalSide::Bottom => self.bottom,
            PhysicalSide::Left => self.left,
        }
    }
}

/// A physical box side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PhysicalSide {
    #[allow(missing_docs)]
    Top,
    #[allow(missing_docs)]
    Right,
    #[allow(missing_docs)]
    Bottom,
    #[allow(missing_docs)]
    Left,
}

/// A side relative to the writing mode and direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogicalSide {
    /// Inline start.
    Start,
    /// Inline end.
    End,
    /// Block start.
    Before,
    /// Block end.
    After,
}
