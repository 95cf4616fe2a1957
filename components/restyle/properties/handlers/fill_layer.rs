/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! `background-*` and `-webkit-mask-*` layer longhands.

use crate::computed_style::ComputedStyle;
use crate::error_reporting::InvalidValue;
use crate::properties::builder::StyleBuilder;
use crate::properties::conversions::{self, ConversionResult, LengthAllow};
use crate::properties::handlers::{ApplyProperty, Converter};
use crate::properties::value::CssValue;
use crate::values::fill_layer::{
    FillBox, FillLayer, FillLayerFields, FillLayerType, FillLayers, FillSize,
};
use crate::values::length::{Length, LengthSize};

/// One field of every layer in a background or mask layer list.
///
/// A comma-separated value writes one layer per item, creating layers as
/// needed. Layers past the end of the value have the field cleared, so that
/// the list can later be completed by repeating the set values.
pub struct FillLayerProperty<T> {
    layer_type: FillLayerType,
    field: FillLayerFields,
    get: fn(&FillLayer) -> T,
    set: fn(&mut FillLayer, T),
    convert: Converter<T>,
}

impl<T> FillLayerProperty<T> {
    #[allow(missing_docs)]
    pub fn new(
        layer_type: FillLayerType,
        field: FillLayerFields,
        get: fn(&FillLayer) -> T,
        set: fn(&mut FillLayer, T),
        convert: Converter<T>,
    ) -> Self {
        FillLayerProperty {
            layer_type,
            field,
            get,
            set,
            convert,
        }
    }

    fn layers<'s>(&self, style: &'s ComputedStyle) -> &'s FillLayers {
        match self.layer_type {
            FillLayerType::Background => style.background_layers(),
            FillLayerType::Mask => style.mask_layers(),
        }
    }

    fn layers_mut<'s>(&self, style: &'s mut ComputedStyle) -> &'s mut FillLayers {
        match self.layer_type {
            FillLayerType::Background => style.background_layers_mut(),
            FillLayerType::Mask => style.mask_layers_mut(),
        }
    }

    /// Writes `values` into the leading layers and clears the field on the
    /// remaining ones.
    fn write(&self, style: &mut ComputedStyle, values: Vec<T>) {
        let count = values.len();
        let layers = self.layers_mut(style);
        for (index, value) in values.into_iter().enumerate() {
            let layer = layers.ensure_layer(index);
            (self.set)(layer, value);
            layer.set_fields.insert(self.field);
        }
        for layer in layers.layers_from_mut(count) {
            layer.clear(self.field);
        }
    }
}

impl<T> ApplyProperty for FillLayerProperty<T> {
    fn apply_inherit(&self, builder: &mut StyleBuilder) {
        let values = self
            .layers(builder.inherited_style())
            .layers()
            .iter()
            .take_while(|layer| layer.is_set(self.field))
            .map(self.get)
            .collect();
        self.write(&mut builder.style, values);
    }

    fn apply_initial(&self, builder: &mut StyleBuilder) {
        let initial = (self.get)(&FillLayer::new(self.layer_type));
        self.write(&mut builder.style, vec![initial]);
    }

    fn apply_value(&self, builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<()> {
        let items = value.as_slice();
        if items.is_empty() {
            return Err(InvalidValue::UnexpectedValue);
        }
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            let value = if item.is_ident("initial") {
                (self.get)(&FillLayer::new(self.layer_type))
            } else {
                (self.convert)(builder, item)?
            };
            values.push(value);
        }
        self.write(&mut builder.style, values);
        Ok(())
    }
}

/// Converts a `background-clip` or `background-origin` box.
pub fn fill_box(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<FillBox> {
    let ident = value.as_ident().ok_or(InvalidValue::UnexpectedValue)?;
    FillBox::from_ident_or_legacy(ident).ok_or(InvalidValue::UnknownKeyword)
}

/// Converts a `background-size`: `contain`, `cover`, or one or two
/// components where a missing height is `auto`.
pub fn fill_size(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<FillSize> {
    if value.is_ident("contain") {
        return Ok(FillSize::Contain);
    }
    if value.is_ident("cover") {
        return Ok(FillSize::Cover);
    }
    let allow = LengthAllow::LENGTH_PERCENTAGE_AUTO;
    let size = match *value {
        CssValue::Pair(ref width, ref height) => LengthSize::new(
            conversions::length(builder, width, allow)?,
            conversions::length(builder, height, allow)?,
        ),
        _ => LengthSize::new(conversions::length(builder, value, allow)?, Length::Auto),
    };
    Ok(FillSize::Size(size))
}
