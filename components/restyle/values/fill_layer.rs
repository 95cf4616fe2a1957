/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Background and mask layers.

use bitflags::bitflags;

use crate::values::fill_unset_cyclically;
use crate::values::image::StyleImage;
use crate::values::keywords::{BlendMode, MaskSourceType};
use crate::values::length::{Length, LengthSize};

/// Whether a layer list belongs to `background-*` or `-webkit-mask-*`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FillLayerType {
    /// Background layers.
    Background,
    /// Mask layers.
    Mask,
}

define_css_keyword_enum!(FillAttachment:
    "scroll" => Scroll,
    "local" => Local,
    "fixed" => Fixed,
);

define_css_keyword_enum!(FillBox:
    "border-box" => Border,
    "padding-box" => Padding,
    "content-box" => Content,
    "text" => Text,
);

impl FillBox {
    /// Parses a box keyword, also accepting the legacy `border`, `padding` and
    /// `content` spellings.
    pub fn from_ident_or_legacy(ident: &str) -> Option<FillBox> {
        use crate::values::CssKeyword;
        FillBox::from_ident(ident).or_else(|| legacy_box_keyword(ident))
    }
}

fn legacy_box_keyword(ident: &str) -> Option<FillBox> {
    [("border", FillBox::Border), ("padding", FillBox::Padding), ("content", FillBox::Content)]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(ident))
        .map(|(_, value)| value)
}

define_css_keyword_enum!(FillRepeat:
    "repeat" => Repeat,
    "no-repeat" => NoRepeat,
    "round" => Round,
    "space" => Space,
);

define_css_keyword_enum!(CompositeOperator:
    "clear" => Clear,
    "copy" => Copy,
    "source-over" => SourceOver,
    "source-in" => SourceIn,
    "source-out" => SourceOut,
    "source-atop" => SourceAtop,
    "destination-over" => DestinationOver,
    "destination-in" => DestinationIn,
    "destination-out" => DestinationOut,
    "destination-atop" => DestinationAtop,
    "xor" => Xor,
    "plus-darker" => PlusDarker,
    "plus-lighter" => PlusLighter,
);

/// The computed value of `background-size` for one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillSize {
    /// `contain`.
    Contain,
    /// `cover`.
    Cover,
    /// An explicit size, possibly with `auto` components.
    Size(LengthSize),
}

impl Default for FillSize {
    fn default() -> Self {
        FillSize::Size(LengthSize::new(Length::Auto, Length::Auto))
    }
}

bitflags! {
    /// Which fields of a layer were explicitly given a value.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct FillLayerFields: u16 {
        const IMAGE = 1 << 0;
        const X_POSITION = 1 << 1;
        const Y_POSITION = 1 << 2;
        const ATTACHMENT = 1 << 3;
        const CLIP = 1 << 4;
        const ORIGIN = 1 << 5;
        const REPEAT_X = 1 << 6;
        const REPEAT_Y = 1 << 7;
        const COMPOSITE = 1 << 8;
        const SIZE = 1 << 9;
        const BLEND_MODE = 1 << 10;
        const MASK_SOURCE_TYPE = 1 << 11;
    }
}

/// One layer of a background or a mask.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct FillLayer {
    pub image: Option<StyleImage>,
    pub x_position: Length,
    pub y_position: Length,
    pub attachment: FillAttachment,
    pub clip: FillBox,
    pub origin: FillBox,
    pub repeat_x: FillRepeat,
    pub repeat_y: FillRepeat,
    pub composite: CompositeOperator,
    pub size: FillSize,
    pub blend_mode: BlendMode,
    pub mask_source_type: MaskSourceType,
    /// The fields that were given a value by the cascade.
    pub set_fields: FillLayerFields,
    layer_type: FillLayerType,
}

impl FillLayer {
    /// A layer with every field at its initial value and nothing set.
    pub fn new(layer_type: FillLayerType) -> Self {
        FillLayer {
            image: None,
            x_position: Length::Percent(0.),
            y_position: Length::Percent(0.),
            attachment: FillAttachment::Scroll,
            clip: FillBox::Border,
            origin: FillLayer::initial_origin(layer_type),
            repeat_x: FillRepeat::Repeat,
            repeat_y: FillRepeat::Repeat,
            composite: CompositeOperator::SourceOver,
            size: FillSize::default(),
            blend_mode: BlendMode::Normal,
            mask_source_type: MaskSourceType::Alpha,
            set_fields: FillLayerFields::empty(),
            layer_type,
        }
    }

    /// The type of list this layer belongs to.
    pub fn layer_type(&self) -> FillLayerType {
        self.layer_type
    }

    /// The initial origin box: backgrounds start at the padding box, masks
    /// at the border box.
    pub fn initial_origin(layer_type: FillLayerType) -> FillBox {
        match layer_type {
            FillLayerType::Background => FillBox::Padding,
            FillLayerType::Mask => FillBox::Border,
        }
    }

    /// Whether the given field has been explicitly set.
    pub fn is_set(&self, field: FillLayerFields) -> bool {
        self.set_fields.contains(field)
    }

    /// Whether this layer has an image.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Resets a field to its initial value and marks it as not set.
    pub fn clear(&mut self, field: FillLayerFields) {
        let initial = FillLayer::new(self.layer_type);
        copy_fields(&initial, self, field);
        self.set_fields.remove(field);
    }
}

/// Copies the value of `fields` from `from` into `to`, leaving the set flags
/// alone.
fn copy_fields(from: &FillLayer, to: &mut FillLayer, fields: FillLayerFields) {
    if fields.contains(FillLayerFields::IMAGE) {
        to.image = from.image.clone();
    }
    if fields.contains(FillLayerFields::X_POSITION) {
        to.x_position = from.x_position;
    }
    if fields.contains(FillLayerFields::Y_POSITION) {
        to.y_position = from.y_position;
    }
    if fields.contains(FillLayerFields::ATTACHMENT) {
        to.attachment = from.attachment;
    }
    if fields.contains(FillLayerFields::CLIP) {
        to.clip = from.clip;
    }
    if fields.contains(FillLayerFields::ORIGIN) {
        to.origin = from.origin;
    }
    if fields.contains(FillLayerFields::REPEAT_X) {
        to.repeat_x = from.repeat_x;
    }
    if fields.contains(FillLayerFields::REPEAT_Y) {
        to.repeat_y = from.repeat_y;
    }
    if fields.contains(FillLayerFields::COMPOSITE) {
        to.composite = from.composite;
    }
    if fields.contains(FillLayerFields::SIZE) {
        to.size = from.size;
    }
    if fields.contains(FillLayerFields::BLEND_MODE) {
        to.blend_mode = from.blend_mode;
    }
    if fields.contains(FillLayerFields::MASK_SOURCE_TYPE) {
        to.mask_source_type = from.mask_source_type;
    }
}

/// A non-empty list of fill layers, bottom-most last.
#[derive(Clone, Debug, PartialEq)]
pub struct FillLayers(Vec<FillLayer>);

impl FillLayers {
    /// A list with a single initial layer.
    pub fn new(layer_type: FillLayerType) -> Self {
        FillLayers(vec![FillLayer::new(layer_type)])
    }

    /// The type of every layer in this list.
    pub fn layer_type(&self) -> FillLayerType {
        self.0[0].layer_type
    }

    /// The layers.
    pub fn layers(&self) -> &[FillLayer] {
        &self.0
    }

    /// Mutable access to the layer at `index`, appending fresh layers as
    /// needed.
    pub fn ensure_layer(&mut self, index: usize) -> &mut FillLayer {
        let layer_type = self.layer_type();
        while self.0.len() <= index {
            self.0.push(FillLayer::new(layer_type));
        }
        &mut self.0[index]
    }

    /// Mutable iteration over the layers starting at `index`.
    pub fn layers_from_mut(&mut self, index: usize) -> impl Iterator<Item = &mut FillLayer> {
        self.0.iter_mut().skip(index)
    }

    /// Whether any layer has an image.
    pub fn has_image(&self) -> bool {
        self.0.iter().any(FillLayer::has_image)
    }

    /// Whether any layer's image uses `background-attachment: fixed`.
    pub fn has_fixed_image(&self) -> bool {
        self.0
            .iter()
            .any(|layer| layer.has_image() && layer.attachment == FillAttachment::Fixed)
    }

    /// Drops every layer after the first one that has no image set, since such
    /// layers only exist because some longhand had a longer list than
    /// `*-image`.
    pub fn cull_empty_layers(&mut self) {
        if let Some(position) = self
            .0
            .iter()
            .skip(1)
            .position(|layer| !layer.is_set(FillLayerFields::IMAGE))
        {
            self.0.truncate(position + 1);
        }
    }

    /// Fills the values of unset fields by repeating the list of set values,
    /// as required for comma-separated background longhands of different
    /// lengths.
    pub fn fill_unset_properties(&mut self) {
        for field in FillLayerFields::all().iter() {
            fill_unset_cyclically(
                &mut self.0,
                |layer| layer.is_set(field),
                |from, to| copy_fields(from, to, field),
            );
        }
    }

    /// Mutable access to every image slot, used to resolve pending images.
    pub fn images_mut(&mut self) -> impl Iterator<Item = &mut StyleImage> {
        self.0.iter_mut().filter_map(|layer| layer.image.as_mut())
    }
}
