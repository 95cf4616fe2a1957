/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A property declaration block.

#![deny(missing_docs)]

use crate::properties::PropertyId;
use crate::properties::value::CssValue;

/// A declaration [importance][importance].
///
/// [importance]: https://drafts.csswg.org/css-cascade/#importance
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Importance {
    /// Indicates a declaration without `!important`.
    Normal,

    /// Indicates a declaration with `!important`.
    Important,
}

impl Importance {
    /// Return whether this is an important declaration.
    pub fn important(self) -> bool {
        match self {
            Importance::Normal => false,
            Importance::Important => true,
        }
    }
}

/// The value of a declaration: either a specified value or one of the
/// CSS-wide keywords.
#[derive(Clone, Debug, PartialEq)]
pub enum DeclaredValue {
    /// A specified value.
    Value(CssValue),
    /// `inherit`.
    Inherit,
    /// `initial`.
    Initial,
    /// `unset`, which is `inherit` for inherited properties and `initial`
    /// otherwise.
    Unset,
}

/// A single declaration, `property: value`.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDeclaration {
    /// The declared property.
    pub id: PropertyId,
    /// The declared value.
    pub value: DeclaredValue,
}

impl PropertyDeclaration {
    /// A declaration with a specified value.
    pub fn new(id: PropertyId, value: CssValue) -> Self {
        PropertyDeclaration {
            id,
            value: DeclaredValue::Value(value),
        }
    }

    /// A declaration with a CSS-wide keyword or value.
    pub fn with_declared(id: PropertyId, value: DeclaredValue) -> Self {
        PropertyDeclaration { id, value }
    }
}

/// Overridden declarations are skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyDeclarationBlock {
    /// The group of declarations, along with their importance.
    ///
    /// Only deduplicated declarations appear here.
    declarations: Vec<(PropertyDeclaration, Importance)>,

    /// The number of entries in `self.declaration` with `Importance::Important`
    important_count: usize,
}

impl PropertyDeclarationBlock {
    /// Create an empty block
    pub fn new() -> Self {
        PropertyDeclarationBlock::default()
    }

    /// Create a block with a single declaration
    pub fn with_one(declaration: PropertyDeclaration, importance: Importance) -> Self {
        let mut block = PropertyDeclarationBlock::new();
        block.push(declaration, importance);
        block
    }

    /// The declarations in this block
    pub fn declarations(&self) -> &[(PropertyDeclaration, Importance)] {
        &self.declarations
    }

    /// Returns whether this block contains any declaration with `!important`.
    pub fn any_important(&self) -> bool {
        self.important_count > 0
    }

    /// Returns whether this block contains any declaration without `!important`.
    pub fn any_normal(&self) -> bool {
        self.declarations.len() > self.important_count
    }

    /// Whether the block has no declarations at all.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// The number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Adds or overrides the declaration for a given property in this block.
    ///
    /// A normal declaration does not override an important one.
    pub fn push(&mut self, declaration: PropertyDeclaration, importance: Importance) {
        if let Some(position) = self
            .declarations
            .iter()
            .position(|(existing, _)| existing.id == declaration.id)
        {
            let old_importance = self.declarations[position].1;
            if old_importance.important() && !importance.important() {
                return;
            }
            if old_importance.important() {
                self.important_count -= 1;
            }
            self.declarations.remove(position);
        }
        if importance.important() {
            self.important_count += 1;
        }
        self.declarations.push((declaration, importance));
    }

    /// Returns the declaration of the given property, if any.
    pub fn get(&self, id: PropertyId) -> Option<&(PropertyDeclaration, Importance)> {
        self.declarations.iter().find(|(declaration, _)| declaration.id == id)
    }
}
