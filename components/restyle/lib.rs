/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Calculate [specified][specified] and [computed values][computed] from a
//! tree of DOM nodes and a set of stylesheets.
//!
//! [computed]: https://drafts.csswg.org/css-cascade/#computed
//! [specified]: https://drafts.csswg.org/css-cascade/#specified
//!
//! In particular, this crate contains the definitions of supported properties,
//! the code to apply each of them to a [`ComputedStyle`], the cascade that
//! orders matched declarations, the caches that let similar elements share
//! work, and the classifier that turns a style change into restyle damage.
//!
//! The DOM, the CSS parser and the image and font loaders are collaborators
//! behind traits ([`dom::TElement`], [`values::image::ImageLoader`],
//! [`font::FontSelector`]); stylesheets arrive already parsed as
//! [`rule_set::RuleSet`]s.
//!
//! [`ComputedStyle`]: computed_style::ComputedStyle

#![deny(unsafe_code)]

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod applicable_declarations;
pub mod bloom;
pub mod cache;
pub mod cascade;
pub mod computed_style;
pub mod context;
pub mod device;
pub mod dom;
pub mod error_reporting;
pub mod font;
pub mod matched_properties_cache;
pub mod matching;
pub mod properties;
pub mod resolver;
pub mod restyle_damage;
pub mod rule_set;
pub mod selector_matching;
pub mod selector_parser;
pub mod sharing;
pub mod style_adjuster;
pub mod style_structs;
pub mod values;

pub use crate::computed_style::ComputedStyle;
pub use crate::properties::PropertyId;
pub use crate::resolver::StyleResolver;
pub use crate::restyle_damage::{ContextSensitiveProperties, StyleDifference};
pub use servo_arc::Arc;
