/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Computed value types stored in a `ComputedStyle`.

pub mod animation;
pub mod border;
pub mod color;
pub mod content;
pub mod effects;
pub mod fill_layer;
pub mod image;
pub mod keywords;
pub mod length;

/// A CSS float value.
pub type CSSFloat = f32;

/// A CSS integer value.
pub type CSSInteger = i32;

/// A keyword-valued CSS type.
pub trait CssKeyword: Copy + Sized {
    /// Parses a keyword from an identifier, ignoring ASCII case.
    fn from_ident(ident: &str) -> Option<Self>;

    /// The canonical serialization of this keyword.
    fn as_css_str(self) -> &'static str;
}

/// Repeats the values of the leading items that have a field set over the
/// trailing items that don't, cycling through the set prefix.
///
/// This is how both fill layers and animation lists complete a
/// comma-separated list whose longhands have different lengths.
pub(crate) fn fill_unset_cyclically<T, F, C>(items: &mut [T], is_set: F, copy: C)
where
    F: Fn(&T) -> bool,
    C: Fn(&T, &mut T),
{
    let pattern_len = items.iter().take_while(|item| is_set(item)).count();
    if pattern_len == 0 || pattern_len == items.len() {
        return;
    }
    for i in pattern_len..items.len() {
        let (head, tail) = items.split_at_mut(i);
        copy(&head[i % pattern_len], &mut tail[0]);
    }
}
