/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Font descriptions and the font object rebuilt after the cascade.

use crate::device::Device;
use crate::values::CSSFloat;
use crate::values::keywords::{
    FontKerning, FontSmoothing, FontStyle, FontVariant, TextOrientation, TextRendering,
};

/// Font sizes above this are clamped; some platforms misbehave with huge
/// fonts.
pub const MAXIMUM_ALLOWED_FONT_SIZE: CSSFloat = 1_000_000.;

/// `larger` and `smaller` scale the parent size by this factor.
pub const FONT_SIZE_SCALE_FACTOR: CSSFloat = 1.2;

/// The generic family a family list resolves to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum GenericFamily {
    /// No generic family was named.
    #[default]
    None,
    /// `-webkit-body`, the user's standard font.
    Standard,
    #[allow(missing_docs)]
    Serif,
    #[allow(missing_docs)]
    SansSerif,
    #[allow(missing_docs)]
    Monospace,
    #[allow(missing_docs)]
    Cursive,
    #[allow(missing_docs)]
    Fantasy,
}

impl GenericFamily {
    /// Maps a generic family keyword.
    pub fn from_ident(ident: &str) -> Option<GenericFamily> {
        let family = match ident.to_ascii_lowercase().as_str() {
            "-webkit-body" => GenericFamily::Standard,
            "serif" => GenericFamily::Serif,
            "sans-serif" => GenericFamily::SansSerif,
            "monospace" => GenericFamily::Monospace,
            "cursive" => GenericFamily::Cursive,
            "fantasy" => GenericFamily::Fantasy,
            _ => return None,
        };
        Some(family)
    }
}

/// A font weight, 100 to 900 in steps of 100.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// `normal`.
    pub const NORMAL: FontWeight = FontWeight(400);
    /// `bold`.
    pub const BOLD: FontWeight = FontWeight(700);

    /// Whether this weight is rendered bold.
    pub fn is_bold(self) -> bool {
        self.0 >= 600
    }

    /// The weight `bolder` gives relative to this one.
    pub fn bolder(self) -> FontWeight {
        FontWeight(match self.0 {
            0..=300 => 400,
            400..=500 => 700,
            _ => 900,
        })
    }

    /// The weight `lighter` gives relative to this one.
    pub fn lighter(self) -> FontWeight {
        FontWeight(match self.0 {
            0..=500 => 100,
            600..=700 => 400,
            _ => 700,
        })
    }
}

/// Everything needed to select a font, as determined by the font properties.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescription {
    /// Family names, in preference order. Generic families are listed by
    /// their keyword.
    pub families: Vec<String>,
    /// The generic family of the list, if it consists of one generic family.
    pub generic_family: GenericFamily,
    /// The size before zoom and minimum sizes apply.
    pub specified_size: CSSFloat,
    /// The size after zoom and minimum sizes.
    pub computed_size: CSSFloat,
    /// Whether the size is absolute (not relative to the parent or a
    /// keyword), which exempts it from the smart minimum.
    pub is_absolute_size: bool,
    /// 1-based index of the size keyword used (`xx-small` is 1), or 0.
    pub keyword_size: u8,
    #[allow(missing_docs)]
    pub weight: FontWeight,
    #[allow(missing_docs)]
    pub style: FontStyle,
    #[allow(missing_docs)]
    pub variant: FontVariant,
    #[allow(missing_docs)]
    pub kerning: FontKerning,
    #[allow(missing_docs)]
    pub smoothing: FontSmoothing,
    #[allow(missing_docs)]
    pub text_rendering: TextRendering,
    #[allow(missing_docs)]
    pub orientation: TextOrientation,
    /// The content language, from `-webkit-locale`.
    pub locale: Option<String>,
}

impl Default for FontDescription {
    fn default() -> Self {
        FontDescription {
            families: vec!["-webkit-body".to_owned()],
            generic_family: GenericFamily::Standard,
            specified_size: 16.,
            computed_size: 16.,
            is_absolute_size: false,
            keyword_size: MEDIUM_KEYWORD_SIZE,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
            variant: FontVariant::Normal,
            kerning: FontKerning::Auto,
            smoothing: FontSmoothing::Auto,
            text_rendering: TextRendering::Auto,
            orientation: TextOrientation::VerticalRight,
            locale: None,
        }
    }
}

impl FontDescription {
    /// The computed size, rounded to whole pixels.
    pub fn computed_pixel_size(&self) -> i32 {
        (self.computed_size + 0.5) as i32
    }

    /// Whether the default size to use is the monospace one, i.e. the
    /// family list is exactly `monospace`.
    pub fn use_fixed_default_size(&self) -> bool {
        self.families.len() == 1 && self.generic_family == GenericFamily::Monospace
    }
}

/// The index of `medium` in the size keyword table, 1-based.
pub const MEDIUM_KEYWORD_SIZE: u8 = 4;

/// The number of size keywords, `xx-small` through `-webkit-xxx-large`.
const TOTAL_KEYWORDS: usize = 8;

const FONT_SIZE_TABLE_MIN: i32 = 9;
const FONT_SIZE_TABLE_MAX: i32 = 16;

/// Pixel sizes for each keyword, one row per default font size from 9 to 16
/// pixels, so that small defaults still produce legible small sizes.
static FONT_SIZE_TABLE: [[i32; TOTAL_KEYWORDS]; 8] = [
    [9, 9, 9, 9, 11, 14, 18, 27],
    [9, 9, 9, 10, 12, 15, 20, 30],
    [9, 9, 10, 11, 13, 17, 22, 33],
    [9, 9, 10, 12, 14, 18, 24, 36],
    [9, 10, 12, 13, 14, 20, 26, 39],
    [9, 10, 12, 14, 15, 21, 28, 42],
    [9, 10, 13, 15, 16, 23, 30, 45],
    [9, 10, 13, 16, 18, 24, 32, 48],
];

/// Scaling factors for each keyword when the default size is outside the
/// table range.
static FONT_SIZE_FACTORS: [CSSFloat; TOTAL_KEYWORDS] =
    [0.60, 0.75, 0.89, 1.0, 1.2, 1.5, 2.0, 3.0];

/// Maps a size keyword to its 1-based keyword index.
pub fn keyword_size_from_ident(ident: &str) -> Option<u8> {
    let index = match ident.to_ascii_lowercase().as_str() {
        "xx-small" => 1,
        "x-small" => 2,
        "small" => 3,
        "medium" => 4,
        "large" => 5,
        "x-large" => 6,
        "xx-large" => 7,
        "-webkit-xxx-large" => 8,
        _ => return None,
    };
    Some(index)
}

/// The pixel size of the given 1-based keyword index.
pub fn font_size_for_keyword(device: &Device, keyword_size: u8, use_fixed_default: bool) -> CSSFloat {
    let medium_size = if use_fixed_default {
        device.default_fixed_font_size
    } else {
        device.default_font_size
    };
    let column = usize::from(keyword_size.clamp(1, TOTAL_KEYWORDS as u8) - 1);
    if (FONT_SIZE_TABLE_MIN..=FONT_SIZE_TABLE_MAX).contains(&medium_size) {
        let row = (medium_size - FONT_SIZE_TABLE_MIN) as usize;
        return FONT_SIZE_TABLE[row][column] as CSSFloat;
    }
    medium_size as CSSFloat * FONT_SIZE_FACTORS[column]
}

/// Computes the used font size from a specified size, applying zoom and the
/// minimum font size settings.
pub fn computed_size_from_specified(
    device: &Device,
    effective_zoom: CSSFloat,
    is_absolute_size: bool,
    specified_size: CSSFloat,
) -> CSSFloat {
    let zoom_factor = effective_zoom * device.text_zoom;

    // Zero-sized fonts stay zero-sized, whatever the minimums.
    if specified_size.abs() < CSSFloat::EPSILON {
        return 0.;
    }

    let min_size = device.minimum_font_size as CSSFloat;
    let min_logical_size = device.minimum_logical_font_size as CSSFloat;

    let mut zoomed_size = specified_size * zoom_factor;

    // The hard minimum, only after zooming.
    if zoomed_size < min_size {
        zoomed_size = min_size;
    }

    // The smart minimum only kicks in when the size is relative to the
    // user's default, or the original size was acceptable anyway; otherwise
    // we could break a page that relies on tiny absolute text.
    if zoomed_size < min_logical_size && (specified_size >= min_logical_size || !is_absolute_size)
    {
        zoomed_size = min_logical_size;
    }

    zoomed_size.min(MAXIMUM_ALLOWED_FONT_SIZE)
}

/// The font selection collaborator, typically backed by `@font-face` rules.
pub trait FontSelector {
    /// A counter bumped whenever the set of available fonts changes, so that
    /// fonts built against an older set can be told apart.
    fn version(&self) -> u32;
}

/// A font object built from a description.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Font {
    description: FontDescription,
    /// Font selector version this font was last updated against.
    selector_version: u32,
}

impl Font {
    /// Creates a font for the given description.
    pub fn new(description: FontDescription) -> Self {
        Font {
            description,
            selector_version: 0,
        }
    }

    /// The description this font was built from.
    pub fn description(&self) -> &FontDescription {
        &self.description
    }

    /// The font selector version this font was last updated against.
    pub fn selector_version(&self) -> u32 {
        self.selector_version
    }

    /// Refreshes the font against the current set of available fonts.
    pub fn update(&mut self, selector: Option<&dyn FontSelector>) {
        self.selector_version = selector.map_or(0, |selector| selector.version());
    }
}
