/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Computed colors.

/// A color in the sRGB color space, with 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RGBA {
    /// The red component.
    pub red: u8,
    /// The green component.
    pub green: u8,
    /// The blue component.
    pub blue: u8,
    /// The alpha component.
    pub alpha: u8,
}

impl RGBA {
    /// Opaque black.
    pub const BLACK: RGBA = RGBA::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: RGBA = RGBA::new(255, 255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: RGBA = RGBA::new(0, 0, 0, 0);

    /// Constructs a color from its components.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        RGBA {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Constructs an opaque color.
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        RGBA::new(red, green, blue, 255)
    }

    /// Looks up a named color keyword.
    pub fn from_named(name: &str) -> Option<RGBA> {
        NAMED_COLORS
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(name))
            .map(|&(_, rgb)| {
                RGBA::opaque((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
            })
            .or_else(|| name.eq_ignore_ascii_case("transparent").then_some(RGBA::TRANSPARENT))
    }
}

static NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("silver", 0xc0c0c0),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("white", 0xffffff),
    ("maroon", 0x800000),
    ("red", 0xff0000),
    ("purple", 0x800080),
    ("fuchsia", 0xff00ff),
    ("green", 0x008000),
    ("lime", 0x00ff00),
    ("olive", 0x808000),
    ("yellow", 0xffff00),
    ("navy", 0x000080),
    ("blue", 0x0000ff),
    ("teal", 0x008080),
    ("aqua", 0x00ffff),
    ("orange", 0xffa500),
];

/// A computed color that may still refer to the element's `color`.
///
/// Border, outline, column-rule, text-decoration and emphasis colors default
/// to `currentcolor`; they are resolved against the used `color` at paint
/// time, which keeps them tracking changes of the text color.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Color {
    /// `currentcolor`.
    #[default]
    CurrentColor,
    /// A specific color.
    Rgba(RGBA),
}

impl Color {
    /// Whether this color is an actual color rather than `currentcolor`.
    pub fn is_valid(&self) -> bool {
        matches!(*self, Color::Rgba(..))
    }

    /// Resolves this color given the current value of `color`.
    pub fn resolve(&self, current_color: RGBA) -> RGBA {
        match *self {
            Color::CurrentColor => current_color,
            Color::Rgba(rgba) => rgba,
        }
    }
}

impl From<RGBA> for Color {
    fn from(rgba: RGBA) -> Self {
        Color::Rgba(rgba)
    }
}
