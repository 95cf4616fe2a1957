/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Property handlers.
//!
//! A handler knows how to apply `inherit`, `initial` and a specified value for
//! one property. Most properties are served by [`Simple`], a getter, a setter
//! and a conversion bound together; the families that need more than that
//! (colors with their visited-link twin, fill layers, animation lists, fonts)
//! have handlers of their own in the submodules.

use crate::computed_style::{ComputedStyle, initial_values};
use crate::error_reporting::InvalidValue;
use crate::properties::PropertyId;
use crate::properties::builder::StyleBuilder;
use crate::properties::conversions::ConversionResult;
use crate::properties::value::CssValue;
use crate::values::length::LogicalSide;

pub mod animation;
pub mod border_image;
pub mod color;
pub mod counter;
pub mod effects;
pub mod fill_layer;
pub mod font;
pub mod text;

/// The three algorithms of one property.
pub trait ApplyProperty: Send + Sync {
    /// Copies the parent's value, or the initial value when there is no
    /// parent.
    fn apply_inherit(&self, builder: &mut StyleBuilder);

    /// Sets the initial value.
    fn apply_initial(&self, builder: &mut StyleBuilder);

    /// Converts and sets a specified value. On error nothing has been
    /// changed.
    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()>;

    /// Whether this is the no-op handler of an unsupported property.
    fn is_noop(&self) -> bool {
        false
    }
}

/// The conversion from a specified value to a computed one.
pub type Converter<T> = fn(&mut StyleBuilder, &CssValue) -> ConversionResult<T>;

/// The handler of properties the engine accepts but doesn't apply.
pub struct NoOp;

impl ApplyProperty for NoOp {
    fn apply_inherit(&self, _: &mut StyleBuilder) {}

    fn apply_initial(&self, _: &mut StyleBuilder) {}

    fn apply_value(&self, _: &mut StyleBuilder, _: &CssValue) -> ConversionResult<()> {
        Ok(())
    }

    fn is_noop(&self) -> bool {
        true
    }
}

/// A property stored as one value on the style.
///
/// `inherit` copies the value the getter reads from the parent, `initial`
/// copies the value it reads from the initial style.
pub struct Simple<T> {
    get: fn(&ComputedStyle) -> T,
    set: fn(&mut ComputedStyle, T),
    convert: Converter<T>,
}

impl<T> Simple<T> {
    /// Binds a getter, a setter and a conversion.
    pub fn new(
        get: fn(&ComputedStyle) -> T,
        set: fn(&mut ComputedStyle, T),
        convert: Converter<T>,
    ) -> Self {
        Simple { get, set, convert }
    }
}

impl<T> ApplyProperty for Simple<T> {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let value = (self.get)(builder.inherited_style());
        (self.set)(&mut builder.style, value);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        let value = (self.get)(initial_values());
        (self.set)(&mut builder.style, value);
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let value = (self.convert)(builder, value)?;
        (self.set)(&mut builder.style, value);
        Ok(())
    }
}

/// A handler that rebuilds the font once the wrapped handler has run.
pub struct AffectsFont<H>(pub H);

impl<H: ApplyProperty> ApplyProperty for AffectsFont<H> {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        self.0.apply_inherit(builder);
        builder.font_dirty = true;
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        self.0.apply_initial(builder);
        builder.font_dirty = true;
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        self.0.apply_value(builder, value)?;
        builder.font_dirty = true;
        Ok(())
    }
}

/// A shorthand that applies `inherit` and `initial` to each of its
/// longhands and, when `expand_value` is set, the same specified value too.
pub struct Expanding {
    longhands: &'static [PropertyId],
    expand_value: bool,
}

impl Expanding {
    /// A shorthand whose specified value is applied to every longhand.
    pub fn expand_value(longhands: &'static [PropertyId]) -> Self {
        Expanding {
            longhands,
            expand_value: true,
        }
    }

    /// A shorthand that only expands the CSS-wide keywords; its values are
    /// expected to be split into longhands by the parser.
    pub fn suppress_value(longhands: &'static [PropertyId]) -> Self {
        Expanding {
            longhands,
            expand_value: false,
        }
    }

    /// The longhands this shorthand expands to.
    pub fn longhands(&self) -> &'static [PropertyId] {
        self.longhands
    }
}

impl ApplyProperty for Expanding {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let table = builder.table;
        for &longhand in self.longhands {
            table.get(longhand).apply_inherit(builder);
        }
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        let table = builder.table;
        for &longhand in self.longhands {
            table.get(longhand).apply_initial(builder);
        }
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        if !self.expand_value {
            return Err(InvalidValue::UnexpectedValue);
        }
        let table = builder.table;
        let saved = builder.style.clone();
        for &longhand in self.longhands {
            if let Err(error) = table.get(longhand).apply_value(builder, value) {
                builder.style = saved;
                return Err(error);
            }
        }
        Ok(())
    }
}

/// Which box a logical side property belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogicalBox {
    /// `-webkit-margin-*`.
    Margin,
    /// `-webkit-padding-*`.
    Padding,
}

/// A direction-aware property such as `-webkit-margin-start`.
///
/// The logical side is mapped to a physical one using the `direction` and
/// `-webkit-writing-mode` of the style being built, both of which are
/// applied in the high-priority phase, and the physical property's handler
/// does the rest.
pub struct LogicalSideProperty {
    kind: LogicalBox,
    side: LogicalSide,
}

impl LogicalSideProperty {
    #[allow(missing_docs)]
    pub fn new(kind: LogicalBox, side: LogicalSide) -> Self {
        LogicalSideProperty { kind, side }
    }

    /// The physical property this resolves to for `style`.
    pub fn physical_property(&self, style: &ComputedStyle) -> PropertyId {
        use crate::values::length::PhysicalSide;

        match (self.kind, style.physical_side(self.side)) {
            (LogicalBox::Margin, PhysicalSide::Top) => PropertyId::MarginTop,
            (LogicalBox::Margin, PhysicalSide::Right) => PropertyId::MarginRight,
            (LogicalBox::Margin, PhysicalSide::Bottom) => PropertyId::MarginBottom,
            (LogicalBox::Margin, PhysicalSide::Left) => PropertyId::MarginLeft,
            (LogicalBox::Padding, PhysicalSide::Top) => PropertyId::PaddingTop,
            (LogicalBox::Padding, PhysicalSide::Right) => PropertyId::PaddingRight,
            (LogicalBox::Padding, PhysicalSide::Bottom) => PropertyId::PaddingBottom,
            (LogicalBox::Padding, PhysicalSide::Left) => PropertyId::PaddingLeft,
        }
    }

    fn physical_handler<'t>(&self, builder: &StyleBuilder<'t>) -> &'t dyn ApplyProperty {
        builder.table.get(self.physical_property(&builder.style))
    }
}

impl ApplyProperty for LogicalSideProperty {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        self.physical_handler(builder).apply_inherit(builder)
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        self.physical_handler(builder).apply_initial(builder)
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        self.physical_handler(builder).apply_value(builder, value)
    }
}
