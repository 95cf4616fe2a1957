/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Counters, cursors, text decorations and page sizes.

use std::collections::BTreeMap;

use bitflags::bitflags;

use crate::values::image::StyleImage;
use crate::values::length::{Length, LengthSize};

/// A cursor image with its hot spot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CursorImage {
    #[allow(missing_docs)]
    pub image: StyleImage,
    /// Hot spot, in image pixels.
    pub hot_spot: (i32, i32),
}

/// The reset and increment values set for one counter name.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CounterDirectives {
    /// The `counter-reset` value, if any.
    pub reset: Option<i32>,
    /// The `counter-increment` value, if any.
    pub increment: Option<i32>,
}

/// Counter directives keyed by counter name.
pub type CounterDirectiveMap = BTreeMap<String, CounterDirectives>;

bitflags! {
    /// `text-decoration` lines.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct TextDecorationLine: u8 {
        const UNDERLINE = 1 << 0;
        const OVERLINE = 1 << 1;
        const LINE_THROUGH = 1 << 2;
        const BLINK = 1 << 3;
    }
}

impl TextDecorationLine {
    /// Maps a single line keyword.
    pub fn from_ident(ident: &str) -> Option<TextDecorationLine> {
        let line = match ident.to_ascii_lowercase().as_str() {
            "underline" => TextDecorationLine::UNDERLINE,
            "overline" => TextDecorationLine::OVERLINE,
            "line-through" => TextDecorationLine::LINE_THROUGH,
            "blink" => TextDecorationLine::BLINK,
            _ => return None,
        };
        Some(line)
    }
}

/// The named page sizes understood by the `size` property.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum PageSizeName {
    A5,
    A4,
    A3,
    B5,
    B4,
    Letter,
    Legal,
    Ledger,
}

impl PageSizeName {
    /// Maps a paper size keyword.
    pub fn from_ident(ident: &str) -> Option<PageSizeName> {
        let name = match ident.to_ascii_lowercase().as_str() {
            "a5" => PageSizeName::A5,
            "a4" => PageSizeName::A4,
            "a3" => PageSizeName::A3,
            "b5" => PageSizeName::B5,
            "b4" => PageSizeName::B4,
            "letter" => PageSizeName::Letter,
            "legal" => PageSizeName::Legal,
            "ledger" => PageSizeName::Ledger,
            _ => return None,
        };
        Some(name)
    }

    /// The portrait size of this paper, in CSS pixels.
    pub fn portrait_size(self) -> LengthSize {
        const MM: f32 = 96. / 25.4;
        const IN: f32 = 96.;
        let (width, height) = match self {
            PageSizeName::A5 => (148. * MM, 210. * MM),
            PageSizeName::A4 => (210. * MM, 297. * MM),
            PageSizeName::A3 => (297. * MM, 420. * MM),
            PageSizeName::B5 => (176. * MM, 250. * MM),
            PageSizeName::B4 => (250. * MM, 353. * MM),
            PageSizeName::Letter => (8.5 * IN, 11. * IN),
            PageSizeName::Legal => (8.5 * IN, 14. * IN),
            PageSizeName::Ledger => (11. * IN, 17. * IN),
        };
        LengthSize::new(Length::Fixed(width), Length::Fixed(height))
    }
}

/// The computed value of the `@page` `size` property.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PageSize {
    /// `auto`.
    #[default]
    Auto,
    /// `auto` with an orientation (`portrait` / `landscape`).
    AutoOriented {
        /// Whether the page is landscape.
        landscape: bool,
    },
    /// An explicit size.
    Resolved(LengthSize),
}
