/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Types and traits used to access the DOM from style calculation.

#![deny(missing_docs)]

use std::fmt::Debug;

use bitflags::bitflags;
pub use selectors::OpaqueElement;
use servo_arc::Arc;

use crate::properties::PropertyDeclarationBlock;

/// The namespace of HTML elements.
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

bitflags! {
    /// Event-based element states that selectors can match against.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct ElementState: u16 {
        /// The mouse is over the element or one of its descendants.
        const HOVER = 1 << 0;
        /// The element is being activated.
        const ACTIVE = 1 << 1;
        /// The element has focus.
        const FOCUS = 1 << 2;
        /// The element is a link whose target was visited.
        const VISITED = 1 << 3;
        /// A form control that is enabled.
        const ENABLED = 1 << 4;
        /// A form control that is disabled.
        const DISABLED = 1 << 5;
        /// A checked checkbox, radio button or selected option.
        const CHECKED = 1 << 6;
        /// A checkbox in the indeterminate state.
        const INDETERMINATE = 1 << 7;
    }
}

/// The element interface the style system needs.
///
/// Implementations are cheap handles into a DOM that does not change while
/// styles are being resolved.
pub trait TElement: Copy + Debug + Eq {
    /// An identity for the element that stays the same while styles are
    /// resolved.
    fn opaque(&self) -> OpaqueElement;

    /// The parent element, if any.
    fn parent_element(&self) -> Option<Self>;

    /// The previous sibling that is an element.
    fn prev_sibling_element(&self) -> Option<Self>;

    /// The next sibling that is an element.
    fn next_sibling_element(&self) -> Option<Self>;

    /// The first child that is an element.
    fn first_element_child(&self) -> Option<Self>;

    /// Whether this is the document element.
    fn is_root(&self) -> bool {
        self.parent_element().is_none()
    }

    /// Whether the element has neither element children nor text.
    fn is_empty(&self) -> bool;

    /// The local name as written in the document.
    fn local_name(&self) -> &str;

    /// The namespace URL.
    fn namespace(&self) -> &str;

    /// Whether this is an HTML element in an HTML document, whose tag and
    /// attribute names match case-insensitively.
    fn is_html_element_in_html_document(&self) -> bool {
        self.namespace() == HTML_NAMESPACE
    }

    /// The value of the `id` attribute.
    fn id(&self) -> Option<&str>;

    /// Calls `callback` with every class name of the element.
    fn each_class<F>(&self, callback: F)
    where
        F: FnMut(&str);

    /// Whether the element has the class `name`.
    fn has_class(&self, name: &str) -> bool {
        let mut found = false;
        self.each_class(|class| found |= class == name);
        found
    }

    /// The value of the attribute `name` in the null namespace.
    fn attr(&self, name: &str) -> Option<&str>;

    /// The value of the attribute `name` in the namespace `namespace`.
    fn attr_ns(&self, namespace: &str, name: &str) -> Option<&str> {
        if namespace.is_empty() {
            self.attr(name)
        } else {
            None
        }
    }

    /// The element's event state.
    fn state(&self) -> ElementState;

    /// Whether the element is a link (e.g. `<a href>`).
    fn is_link(&self) -> bool;

    /// The declarations of the element's `style` attribute.
    fn style_attribute(&self) -> Option<Arc<PropertyDeclarationBlock>> {
        None
    }

    /// Whether the `style` attribute was modified through the CSSOM since
    /// it was parsed.
    fn is_style_attribute_mutable(&self) -> bool {
        false
    }

    /// The declarations synthesized from legacy presentational attributes
    /// such as `bgcolor`.
    fn presentational_hints(&self) -> Option<Arc<PropertyDeclarationBlock>> {
        None
    }

    /// Whether the element hosts a shadow tree, so that its children are
    /// styled across a shadow boundary.
    fn is_shadow_host(&self) -> bool {
        false
    }
}
