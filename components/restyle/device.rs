/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The device and document a style resolver works for.

use std::cell::Cell;

use crate::values::CSSFloat;
use crate::values::color::RGBA;

/// The rendering environment and user settings that computed values depend
/// on.
#[derive(Clone, Debug)]
pub struct Device {
    /// Viewport width in CSS pixels, for `vw` and friends.
    pub viewport_width: CSSFloat,
    /// Viewport height in CSS pixels.
    pub viewport_height: CSSFloat,
    /// `medium` for proportional fonts, in pixels.
    pub default_font_size: i32,
    /// `medium` for monospace fonts, in pixels.
    pub default_fixed_font_size: i32,
    /// Hard minimum font size, in pixels.
    pub minimum_font_size: i32,
    /// Minimum applied to sizes that are relative or were large enough in
    /// the first place.
    pub minimum_logical_font_size: i32,
    /// Browser text zoom, on top of the `zoom` property.
    pub text_zoom: CSSFloat,
    /// Color of unvisited links (`-webkit-link`).
    pub link_color: RGBA,
    /// Color of visited links.
    pub visited_link_color: RGBA,
    /// Color of active links (`-webkit-activelink`).
    pub active_link_color: RGBA,
    /// Color of the focus ring (`-webkit-focus-ring-color`).
    pub focus_ring_color: RGBA,
    /// Whether user and author style sheets take part in the cascade.
    pub author_and_user_styles_enabled: bool,
}

impl Device {
    /// A device with the given viewport size and default settings.
    pub fn new(viewport_width: CSSFloat, viewport_height: CSSFloat) -> Self {
        Device {
            viewport_width,
            viewport_height,
            default_font_size: 16,
            default_fixed_font_size: 13,
            minimum_font_size: 0,
            minimum_logical_font_size: 6,
            text_zoom: 1.,
            link_color: RGBA::opaque(0, 0, 238),
            visited_link_color: RGBA::opaque(85, 26, 139),
            active_link_color: RGBA::opaque(255, 0, 0),
            focus_ring_color: RGBA::opaque(16, 16, 224),
            author_and_user_styles_enabled: true,
        }
    }
}

impl Default for Device {
    fn default() -> Self {
        Device::new(800., 600.)
    }
}

/// Document-level state that applying properties on the root element can
/// modify.
#[derive(Debug, Default)]
pub struct DocumentState {
    directionality_set_on_document_element: Cell<bool>,
    writing_mode_set_on_document_element: Cell<bool>,
}

impl DocumentState {
    /// Whether `direction` was explicitly applied to the root element.
    pub fn directionality_set_on_document_element(&self) -> bool {
        self.directionality_set_on_document_element.get()
    }

    /// Records that `direction` was explicitly applied to the root element.
    pub fn set_directionality_set_on_document_element(&self, value: bool) {
        self.directionality_set_on_document_element.set(value)
    }

    /// Whether `-webkit-writing-mode` was explicitly applied to the root
    /// element.
    pub fn writing_mode_set_on_document_element(&self) -> bool {
        self.writing_mode_set_on_document_element.get()
    }

    /// Records that `-webkit-writing-mode` was applied to the root element.
    pub fn set_writing_mode_set_on_document_element(&self, value: bool) {
        self.writing_mode_set_on_document_element.set(value)
    }
}
