/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shadows, filters, transforms and shapes.

use crate::values::CSSFloat;
use crate::values::color::Color;
use crate::values::image::StyleImage;
use crate::values::length::{Length, LengthBox};

/// A `box-shadow` or `text-shadow` entry, with lengths in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowData {
    /// Horizontal offset.
    pub x: CSSFloat,
    /// Vertical offset.
    pub y: CSSFloat,
    /// Blur radius.
    pub blur: CSSFloat,
    /// Spread distance; always zero for text shadows.
    pub spread: CSSFloat,
    #[allow(missing_docs)]
    pub color: Color,
    /// Whether this is an inner shadow.
    pub inset: bool,
}

/// One `-webkit-filter` function.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterOperation {
    /// A `url()` reference to an SVG filter.
    Reference(String),
    #[allow(missing_docs)]
    Grayscale(CSSFloat),
    #[allow(missing_docs)]
    Sepia(CSSFloat),
    #[allow(missing_docs)]
    Saturate(CSSFloat),
    /// Rotation in degrees.
    HueRotate(CSSFloat),
    #[allow(missing_docs)]
    Invert(CSSFloat),
    #[allow(missing_docs)]
    Opacity(CSSFloat),
    #[allow(missing_docs)]
    Brightness(CSSFloat),
    #[allow(missing_docs)]
    Contrast(CSSFloat),
    /// Blur radius.
    Blur(Length),
    #[allow(missing_docs)]
    DropShadow(ShadowData),
}

/// One `-webkit-transform` function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOperation {
    /// A translation; the z component is in pixels.
    Translate(Length, Length, CSSFloat),
    #[allow(missing_docs)]
    Scale(CSSFloat, CSSFloat, CSSFloat),
    /// A rotation around the z axis, in degrees.
    Rotate(CSSFloat),
    /// A skew, in degrees.
    Skew(CSSFloat, CSSFloat),
    /// A 2D matrix.
    Matrix([CSSFloat; 6]),
    /// A perspective projection with the given depth.
    Perspective(CSSFloat),
}

impl TransformOperation {
    /// Whether this operation affects the z axis.
    pub fn is_3d(&self) -> bool {
        match *self {
            TransformOperation::Translate(_, _, z) => z != 0.,
            TransformOperation::Scale(_, _, z) => z != 1.,
            TransformOperation::Perspective(..) => true,
            _ => false,
        }
    }
}

/// A CSS basic shape.
#[derive(Clone, Debug, PartialEq)]
pub enum BasicShape {
    /// `circle(<r> at <x> <y>)`.
    Circle {
        #[allow(missing_docs)]
        center_x: Length,
        #[allow(missing_docs)]
        center_y: Length,
        #[allow(missing_docs)]
        radius: Length,
    },
    /// `ellipse(<rx> <ry> at <x> <y>)`.
    Ellipse {
        #[allow(missing_docs)]
        center_x: Length,
        #[allow(missing_docs)]
        center_y: Length,
        #[allow(missing_docs)]
        radius_x: Length,
        #[allow(missing_docs)]
        radius_y: Length,
    },
    /// `polygon(<x> <y>, ...)`.
    Polygon(Vec<(Length, Length)>),
    /// `inset(<top> <right> <bottom> <left>)`.
    Inset(LengthBox),
}

/// The computed value of `-webkit-clip-path`.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipPathOperation {
    /// A `url()` reference to an SVG clip path.
    Reference(String),
    /// A basic shape.
    Shape(BasicShape),
}

/// The computed value of `-webkit-shape-outside`.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeValue {
    /// A basic shape.
    Shape(BasicShape),
    /// An image whose alpha channel defines the shape.
    Image(StyleImage),
}
