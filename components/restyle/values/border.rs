/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Borders, outlines and nine-piece images.

use crate::values::CSSFloat;
use crate::values::color::Color;
use crate::values::image::StyleImage;
use crate::values::length::{Length, LengthBox, LengthSize};

define_css_keyword_enum!(BorderStyle:
    "none" => None,
    "hidden" => Hidden,
    "inset" => Inset,
    "groove" => Groove,
    "outset" => Outset,
    "ridge" => Ridge,
    "dotted" => Dotted,
    "dashed" => Dashed,
    "solid" => Solid,
    "double" => Double,
);

impl BorderStyle {
    /// Whether a border with this style paints nothing and takes no space.
    pub fn is_none_or_hidden(self) -> bool {
        matches!(self, BorderStyle::None | BorderStyle::Hidden)
    }
}

/// Width of a border given by the `medium` keyword.
pub const MEDIUM_BORDER_WIDTH: CSSFloat = 3.;

/// One border side, or the column rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderValue {
    /// The color, `currentcolor` by default.
    pub color: Color,
    /// The specified width in pixels, before the style is taken into account.
    pub width: CSSFloat,
    #[allow(missing_docs)]
    pub style: BorderStyle,
}

impl Default for BorderValue {
    fn default() -> Self {
        BorderValue {
            color: Color::CurrentColor,
            width: MEDIUM_BORDER_WIDTH,
            style: BorderStyle::None,
        }
    }
}

impl BorderValue {
    /// Whether the border would paint something if it had a width.
    pub fn is_visible(&self) -> bool {
        !self.style.is_none_or_hidden() && self.width > 0.
    }
}

/// The outline, which is a border value plus an offset and `auto` style.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutlineValue {
    /// Color, width and style.
    pub border: BorderValue,
    /// `outline-offset`, in pixels.
    pub offset: CSSFloat,
    /// Whether `outline-style: auto` was given.
    pub is_auto: bool,
}

define_css_keyword_enum!(NinePieceImageRule:
    "stretch" => Stretch,
    "round" => Round,
    "space" => Space,
    "repeat" => Repeat,
);

/// A `border-image` or `-webkit-mask-box-image`.
#[derive(Clone, Debug, PartialEq)]
pub struct NinePieceImage {
    /// The source image.
    pub image: Option<StyleImage>,
    /// Where the image gets sliced; numbers are image pixels (fixed) and
    /// percentages refer to the image size.
    pub image_slices: LengthBox,
    /// Whether the middle slice is painted.
    pub fill: bool,
    /// The width of the border image area; `Relative` lengths are multiples
    /// of the border width.
    pub border_slices: LengthBox,
    /// How far the image area extends beyond the border box.
    pub outset: LengthBox,
    /// Tiling rule along the horizontal edges.
    pub horizontal_rule: NinePieceImageRule,
    /// Tiling rule along the vertical edges.
    pub vertical_rule: NinePieceImageRule,
}

impl Default for NinePieceImage {
    fn default() -> Self {
        NinePieceImage {
            image: None,
            image_slices: LengthBox::uniform(Length::Percent(100.)),
            fill: false,
            border_slices: LengthBox::uniform(Length::Relative(1.)),
            outset: LengthBox::uniform(Length::ZERO),
            horizontal_rule: NinePieceImageRule::Stretch,
            vertical_rule: NinePieceImageRule::Stretch,
        }
    }
}

impl NinePieceImage {
    /// The initial value of `-webkit-mask-box-image`, which differs from the
    /// border image one: nothing is sliced off, the middle is filled, and the
    /// mask covers the whole box.
    pub fn mask_defaults() -> Self {
        NinePieceImage {
            image_slices: LengthBox::uniform(Length::Fixed(0.)),
            fill: true,
            border_slices: LengthBox::uniform(Length::Auto),
            ..NinePieceImage::default()
        }
    }

    /// Whether an image has been set.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// The borders of a box.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderData {
    #[allow(missing_docs)]
    pub left: BorderValue,
    #[allow(missing_docs)]
    pub right: BorderValue,
    #[allow(missing_docs)]
    pub top: BorderValue,
    #[allow(missing_docs)]
    pub bottom: BorderValue,
    /// `border-image`.
    pub image: NinePieceImage,
    #[allow(missing_docs)]
    pub top_left: LengthSize,
    #[allow(missing_docs)]
    pub top_right: LengthSize,
    #[allow(missing_docs)]
    pub bottom_left: LengthSize,
    #[allow(missing_docs)]
    pub bottom_right: LengthSize,
}

impl Default for BorderData {
    fn default() -> Self {
        BorderData {
            left: BorderValue::default(),
            right: BorderValue::default(),
            top: BorderValue::default(),
            bottom: BorderValue::default(),
            image: NinePieceImage::default(),
            top_left: LengthSize::zero(),
            top_right: LengthSize::zero(),
            bottom_left: LengthSize::zero(),
            bottom_right: LengthSize::zero(),
        }
    }
}

impl BorderData {
    fn used_width(&self, side: &BorderValue) -> CSSFloat {
        if !self.image.has_image() && side.style.is_none_or_hidden() {
            return 0.;
        }
        side.width
    }

    /// The used left border width: zero for `none`/`hidden` borders unless
    /// a border image is present.
    pub fn left_width(&self) -> CSSFloat {
        self.used_width(&self.left)
    }

    /// The used right border width.
    pub fn right_width(&self) -> CSSFloat {
        self.used_width(&self.right)
    }

    /// The used top border width.
    pub fn top_width(&self) -> CSSFloat {
        self.used_width(&self.top)
    }

    /// The used bottom border width.
    pub fn bottom_width(&self) -> CSSFloat {
        self.used_width(&self.bottom)
    }

    /// Whether any corner is rounded.
    pub fn has_border_radius(&self) -> bool {
        [self.top_left, self.top_right, self.bottom_left, self.bottom_right]
            .iter()
            .any(|radius| !radius.width.is_zero() || !radius.height.is_zero())
    }
}
