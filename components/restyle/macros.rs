/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Various macro helpers.

/// Defines an enum of CSS keywords together with its [`CssKeyword`]
/// implementation. Identifiers are matched ignoring ASCII case.
///
/// [`CssKeyword`]: crate::values::CssKeyword
macro_rules! define_css_keyword_enum {
    ($name:ident: $( $css:expr => $variant:ident ),+ $(,)?) => {
        #[allow(missing_docs)]
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum $name {
            $( $variant ),+
        }

        impl $crate::values::CssKeyword for $name {
            fn from_ident(ident: &str) -> Option<Self> {
                $(
                    if ident.eq_ignore_ascii_case($css) {
                        return Some($name::$variant);
                    }
                )+
                None
            }

            fn as_css_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $css ),+
                }
            }
        }
    };
}

/// Generates by-value getters and change-detecting setters for fields of a
/// copy-on-write style group of `ComputedStyle`.
///
/// The setter only detaches the group when the value actually changes, so
/// styles that end up with the default value keep sharing the group.
macro_rules! style_group_accessors {
    ($group:ident { $( $field:ident : $ty:ty => $setter:ident ),+ $(,)? }) => {
        impl $crate::computed_style::ComputedStyle {
            $(
                #[allow(missing_docs)]
                #[inline]
                pub fn $field(&self) -> $ty {
                    self.$group.$field.clone()
                }

                #[allow(missing_docs)]
                #[inline]
                pub fn $setter(&mut self, value: $ty) {
                    if self.$group.$field != value {
                        ::servo_arc::Arc::make_mut(&mut self.$group).$field = value;
                    }
                }
            )+
        }
    };
}

/// Same as `style_group_accessors!`, for the plain bitfield-like flag structs
/// that live inline in `ComputedStyle`.
macro_rules! style_flag_accessors {
    ($flags:ident { $( $field:ident : $ty:ty => $setter:ident ),+ $(,)? }) => {
        impl $crate::computed_style::ComputedStyle {
            $(
                #[allow(missing_docs)]
                #[inline]
                pub fn $field(&self) -> $ty {
                    self.$flags.$field
                }

                #[allow(missing_docs)]
                #[inline]
                pub fn $setter(&mut self, value: $ty) {
                    self.$flags.$field = value;
                }
            )+
        }
    };
}

/// Like `style_group_accessors!`, for values nested deeper inside a group,
/// with explicitly named getters and setters.
macro_rules! style_path_accessors {
    ($group:ident { $( $($path:ident).+ : $ty:ty => $getter:ident, $setter:ident; )+ }) => {
        impl $crate::computed_style::ComputedStyle {
            $(
                #[allow(missing_docs)]
                #[inline]
                pub fn $getter(&self) -> $ty {
                    self.$group.$($path).+.clone()
                }

                #[allow(missing_docs)]
                #[inline]
                pub fn $setter(&mut self, value: $ty) {
                    if self.$group.$($path).+ != value {
                        ::servo_arc::Arc::make_mut(&mut self.$group).$($path).+ = value;
                    }
                }
            )+
        }
    };
}
