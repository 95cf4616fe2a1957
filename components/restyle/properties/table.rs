/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The property handler table.

use std::sync::LazyLock;

use crate::computed_style::ComputedStyle;
use crate::device::DocumentState;
use crate::error_reporting::InvalidValue;
use crate::properties::builder::StyleBuilder;
use crate::properties::conversions::{self, ConversionResult};
use crate::properties::handlers::animation::{self, AnimationListKind, AnimationProperty};
use crate::properties::handlers::border_image::{
    self, NinePieceComponent, NinePieceImageProperty, NinePieceKind,
};
use crate::properties::handlers::color::{ColorProperty, TextColor};
use crate::properties::handlers::counter::CounterProperty;
use crate::properties::handlers::effects;
use crate::properties::handlers::fill_layer::{self, FillLayerProperty};
use crate::properties::handlers::font::{self, FontField, FontFamily, FontShorthand, FontSize, LineHeight, Zoom};
use crate::properties::handlers::text::{self, RecordOnDocument};
use crate::properties::handlers::{
    AffectsFont, ApplyProperty, Expanding, LogicalBox, LogicalSideProperty, NoOp, Simple,
};
use crate::properties::value::CssValue;
use crate::properties::PropertyId;
use crate::values::animation::AnimationFields;
use crate::values::fill_layer::{FillLayerFields, FillLayerType};
use crate::values::length::{Length, LogicalSide};

static SHARED_TABLE: LazyLock<PropertyHandlerTable> = LazyLock::new(PropertyHandlerTable::new);

static NO_OP: NoOp = NoOp;

/// One handler per property id, indexed by the id.
pub struct PropertyHandlerTable {
    handlers: Box<[Box<dyn ApplyProperty>]>,
}

impl Default for PropertyHandlerTable {
    fn default() -> Self {
        PropertyHandlerTable::new()
    }
}

impl PropertyHandlerTable {
    /// Builds a table. Most callers want [`PropertyHandlerTable::shared`].
    pub fn new() -> Self {
        let handlers: Box<[_]> = PropertyId::all().map(handler_for).collect();
        debug_assert_eq!(handlers.len(), PropertyId::count());
        PropertyHandlerTable { handlers }
    }

    /// The table shared by every resolver in the process, built on first use.
    pub fn shared() -> &'static PropertyHandlerTable {
        &SHARED_TABLE
    }

    /// The handler of `id`.
    #[inline]
    pub fn get(&self, id: PropertyId) -> &dyn ApplyProperty {
        &*self.handlers[id as usize]
    }

    /// The handler of the property called `name`, or a handler that does
    /// nothing for names that aren't supported.
    pub fn get_by_name(&self, name: &str) -> &dyn ApplyProperty {
        match PropertyId::from_name(name) {
            Some(id) => self.get(id),
            None => &NO_OP,
        }
    }

    /// Whether applying `id` has any effect.
    pub fn is_handled(&self, id: PropertyId) -> bool {
        !self.get(id).is_noop()
    }
}

macro_rules! simple {
    ($get:ident, $set:ident) => {
        simple!($get, $set, conversions::keyword)
    };
    ($get:ident, $set:ident, $convert:expr) => {
        Box::new(Simple::new(ComputedStyle::$get, ComputedStyle::$set, $convert))
    };
}

macro_rules! color {
    ($get:ident, $set:ident, $set_visited:ident) => {
        Box::new(ColorProperty::new(
            ComputedStyle::$get,
            ComputedStyle::$set,
            ComputedStyle::$set_visited,
        ))
    };
}

macro_rules! fill_layer {
    ($kind:ident, $flag:ident, $field:ident) => {
        fill_layer!($kind, $flag, $field, conversions::keyword)
    };
    ($kind:ident, $flag:ident, $field:ident, $convert:expr) => {
        Box::new(FillLayerProperty::new(
            FillLayerType::$kind,
            FillLayerFields::$flag,
            |layer| layer.$field.clone(),
            |layer, value| layer.$field = value,
            $convert,
        ))
    };
}

macro_rules! animation {
    ($kind:ident, $flag:ident, $field:ident) => {
        animation!($kind, $flag, $field, conversions::keyword)
    };
    ($kind:ident, $flag:ident, $field:ident, $convert:expr) => {
        Box::new(AnimationProperty::new(
            AnimationListKind::$kind,
            AnimationFields::$flag,
            |animation| animation.$field.clone(),
            |animation, value| animation.$field = value,
            $convert,
        ))
    };
}

macro_rules! font_field {
    ($field:ident) => {
        font_field!($field, conversions::keyword)
    };
    ($field:ident, $convert:expr) => {
        Box::new(FontField::new(
            |description| description.$field.clone(),
            |description, value| description.$field = value,
            $convert,
        ))
    };
}

macro_rules! nine_piece {
    ($kind:ident, $field:ident, $convert:expr) => {
        Box::new(NinePieceComponent::new(
            NinePieceKind::$kind,
            |image| image.$field.clone(),
            |image, value| image.$field = value,
            $convert,
        ))
    };
    ($kind:ident, ($first:ident, $second:ident), $convert:expr) => {
        Box::new(NinePieceComponent::new(
            NinePieceKind::$kind,
            |image| (image.$first.clone(), image.$second.clone()),
            |image, (first, second)| {
                image.$first = first;
                image.$second = second;
            },
            $convert,
        ))
    };
}

fn suppress(longhands: &'static [PropertyId]) -> Box<dyn ApplyProperty> {
    Box::new(Expanding::suppress_value(longhands))
}

fn logical(kind: LogicalBox, side: LogicalSide) -> Box<dyn ApplyProperty> {
    Box::new(LogicalSideProperty::new(kind, side))
}

fn padding(builder: &mut StyleBuilder, value: &CssValue) -> ConversionResult<Length> {
    match conversions::length_percentage(builder, value)? {
        length if length.value() < 0. => Err(InvalidValue::OutOfRange),
        length => Ok(length),
    }
}

fn text_size_adjust(_: &mut StyleBuilder, value: &CssValue) -> ConversionResult<bool> {
    if value.is_ident("auto") {
        Ok(true)
    } else if value.is_ident("none") {
        Ok(false)
    } else {
        Err(InvalidValue::UnexpectedValue)
    }
}

fn handler_for(id: PropertyId) -> Box<dyn ApplyProperty> {
    use PropertyId as P;

    match id {
        P::Zoom => Box::new(Zoom),
        P::WebkitTextSizeAdjust => Box::new(AffectsFont(Simple::new(
            ComputedStyle::text_size_adjust,
            ComputedStyle::set_text_size_adjust,
            text_size_adjust,
        ))),
        P::ColorScheme => simple!(color_scheme, set_color_scheme),
        P::WebkitWritingMode => Box::new(AffectsFont(RecordOnDocument::new(
            Simple::new(
                ComputedStyle::writing_mode,
                ComputedStyle::set_writing_mode,
                conversions::keyword,
            ),
            DocumentState::set_writing_mode_set_on_document_element,
        ))),
        P::WebkitTextOrientation => font_field!(orientation),
        P::Direction => Box::new(RecordOnDocument::new(
            Simple::new(
                ComputedStyle::direction,
                ComputedStyle::set_direction,
                conversions::keyword,
            ),
            DocumentState::set_directionality_set_on_document_element,
        )),

        P::Font => Box::new(FontShorthand),
        P::FontFamily => Box::new(FontFamily),
        P::FontSize => Box::new(FontSize),
        P::FontStyle => font_field!(style),
        P::FontVariant => font_field!(variant),
        P::FontWeight => font_field!(weight, font::font_weight),
        P::TextRendering => font_field!(text_rendering),
        P::WebkitFontKerning => font_field!(kerning),
        P::WebkitFontSmoothing => font_field!(smoothing),
        P::WebkitLocale => font_field!(locale, font::locale),

        P::Color => Box::new(TextColor),
        P::LineHeight => Box::new(LineHeight),

        P::Background => suppress(&[
            P::BackgroundColor,
            P::BackgroundImage,
            P::BackgroundRepeatX,
            P::BackgroundRepeatY,
            P::BackgroundAttachment,
            P::BackgroundPositionX,
            P::BackgroundPositionY,
            P::BackgroundClip,
            P::BackgroundOrigin,
            P::BackgroundSize,
        ]),
        P::BackgroundAttachment => fill_layer!(Background, ATTACHMENT, attachment),
        P::BackgroundClip => fill_layer!(Background, CLIP, clip, fill_layer::fill_box),
        P::BackgroundColor => color!(
            background_color,
            set_background_color,
            set_visited_link_background_color
        ),
        P::BackgroundImage => fill_layer!(Background, IMAGE, image, conversions::image),
        P::BackgroundOrigin => fill_layer!(Background, ORIGIN, origin, fill_layer::fill_box),
        P::BackgroundPosition => suppress(&[P::BackgroundPositionX, P::BackgroundPositionY]),
        P::BackgroundPositionX => {
            fill_layer!(Background, X_POSITION, x_position, conversions::position_x)
        },
        P::BackgroundPositionY => {
            fill_layer!(Background, Y_POSITION, y_position, conversions::position_y)
        },
        P::BackgroundRepeat => suppress(&[P::BackgroundRepeatX, P::BackgroundRepeatY]),
        P::BackgroundRepeatX => fill_layer!(Background, REPEAT_X, repeat_x),
        P::BackgroundRepeatY => fill_layer!(Background, REPEAT_Y, repeat_y),
        P::BackgroundSize => fill_layer!(Background, SIZE, size, fill_layer::fill_size),
        P::WebkitBackgroundBlendMode => fill_layer!(Background, BLEND_MODE, blend_mode),
        P::WebkitBackgroundComposite => fill_layer!(Background, COMPOSITE, composite),

        P::Border => suppress(&[P::BorderColor, P::BorderStyle, P::BorderWidth, P::BorderImage]),
        P::BorderTop => suppress(&[P::BorderTopColor, P::BorderTopStyle, P::BorderTopWidth]),
        P::BorderRight => {
            suppress(&[P::BorderRightColor, P::BorderRightStyle, P::BorderRightWidth])
        },
        P::BorderBottom => {
            suppress(&[P::BorderBottomColor, P::BorderBottomStyle, P::BorderBottomWidth])
        },
        P::BorderLeft => suppress(&[P::BorderLeftColor, P::BorderLeftStyle, P::BorderLeftWidth]),
        P::BorderColor => suppress(&[
            P::BorderTopColor,
            P::BorderRightColor,
            P::BorderBottomColor,
            P::BorderLeftColor,
        ]),
        P::BorderStyle => suppress(&[
            P::BorderTopStyle,
            P::BorderRightStyle,
            P::BorderBottomStyle,
            P::BorderLeftStyle,
        ]),
        P::BorderWidth => suppress(&[
            P::BorderTopWidth,
            P::BorderRightWidth,
            P::BorderBottomWidth,
            P::BorderLeftWidth,
        ]),
        P::BorderTopColor => color!(
            border_top_color,
            set_border_top_color,
            set_visited_link_border_top_color
        ),
        P::BorderRightColor => color!(
            border_right_color,
            set_border_right_color,
            set_visited_link_border_right_color
        ),
        P::BorderBottomColor => color!(
            border_bottom_color,
            set_border_bottom_color,
            set_visited_link_border_bottom_color
        ),
        P::BorderLeftColor => color!(
            border_left_color,
            set_border_left_color,
            set_visited_link_border_left_color
        ),
        P::BorderTopStyle => simple!(border_top_style, set_border_top_style),
        P::BorderRightStyle => simple!(border_right_style, set_border_right_style),
        P::BorderBottomStyle => simple!(border_bottom_style, set_border_bottom_style),
        P::BorderLeftStyle => simple!(border_left_style, set_border_left_style),
        P::BorderTopWidth => {
            simple!(border_top_width, set_border_top_width, conversions::thickness)
        },
        P::BorderRightWidth => {
            simple!(border_right_width, set_border_right_width, conversions::thickness)
        },
        P::BorderBottomWidth => {
            simple!(border_bottom_width, set_border_bottom_width, conversions::thickness)
        },
        P::BorderLeftWidth => {
            simple!(border_left_width, set_border_left_width, conversions::thickness)
        },
        P::BorderRadius => Box::new(Expanding::expand_value(&[
            P::BorderTopLeftRadius,
            P::BorderTopRightRadius,
            P::BorderBottomLeftRadius,
            P::BorderBottomRightRadius,
        ])),
        P::BorderTopLeftRadius => simple!(
            border_top_left_radius,
            set_border_top_left_radius,
            effects::border_radius
        ),
        P::BorderTopRightRadius => simple!(
            border_top_right_radius,
            set_border_top_right_radius,
            effects::border_radius
        ),
        P::BorderBottomLeftRadius => simple!(
            border_bottom_left_radius,
            set_border_bottom_left_radius,
            effects::border_radius
        ),
        P::BorderBottomRightRadius => simple!(
            border_bottom_right_radius,
            set_border_bottom_right_radius,
            effects::border_radius
        ),
        P::BorderImage => Box::new(NinePieceImageProperty(NinePieceKind::Border)),
        P::BorderImageOutset => nine_piece!(Border, outset, border_image::outset),
        P::BorderImageRepeat => nine_piece!(
            Border,
            (horizontal_rule, vertical_rule),
            border_image::repeat
        ),
        P::BorderImageSlice => nine_piece!(Border, (image_slices, fill), border_image::slice),
        P::BorderImageSource => nine_piece!(Border, image, border_image::source),
        P::BorderImageWidth => nine_piece!(Border, border_slices, border_image::width),
        P::BorderCollapse => simple!(border_collapse, set_border_collapse),
        P::BorderSpacing => suppress(&[
            P::WebkitBorderHorizontalSpacing,
            P::WebkitBorderVerticalSpacing,
        ]),
        P::WebkitBorderHorizontalSpacing => simple!(
            horizontal_border_spacing,
            set_horizontal_border_spacing,
            conversions::app_units
        ),
        P::WebkitBorderVerticalSpacing => simple!(
            vertical_border_spacing,
            set_vertical_border_spacing,
            conversions::app_units
        ),
        P::WebkitBorderFit => simple!(border_fit, set_border_fit),

        P::Outline => suppress(&[P::OutlineColor, P::OutlineStyle, P::OutlineWidth]),
        P::OutlineColor => color!(
            outline_color,
            set_outline_color,
            set_visited_link_outline_color
        ),
        P::OutlineOffset => simple!(outline_offset, set_outline_offset, conversions::pixels),
        P::OutlineStyle => Box::new(Simple::new(
            text::get_outline_style,
            text::set_outline_style,
            text::outline_style,
        )),
        P::OutlineWidth => simple!(outline_width, set_outline_width, conversions::thickness),

        P::Display => simple!(display, set_display),
        P::Position => simple!(position, set_position),
        P::Float => simple!(floating, set_floating),
        P::Clear => simple!(clear, set_clear),
        P::Top => simple!(top, set_top, conversions::length_percentage_auto),
        P::Right => simple!(right, set_right, conversions::length_percentage_auto),
        P::Bottom => simple!(bottom, set_bottom, conversions::length_percentage_auto),
        P::Left => simple!(left, set_left, conversions::length_percentage_auto),
        P::Width => simple!(width, set_width, conversions::size),
        P::Height => simple!(height, set_height, conversions::size),
        P::MinWidth => simple!(min_width, set_min_width, conversions::min_size),
        P::MinHeight => simple!(min_height, set_min_height, conversions::min_size),
        P::MaxWidth => simple!(max_width, set_max_width, conversions::max_size),
        P::MaxHeight => simple!(max_height, set_max_height, conversions::max_size),
        P::BoxSizing => simple!(box_sizing, set_box_sizing),
        P::Margin => suppress(&[P::MarginTop, P::MarginRight, P::MarginBottom, P::MarginLeft]),
        P::MarginTop => simple!(margin_top, set_margin_top, conversions::length_percentage_auto),
        P::MarginRight => {
            simple!(margin_right, set_margin_right, conversions::length_percentage_auto)
        },
        P::MarginBottom => {
            simple!(margin_bottom, set_margin_bottom, conversions::length_percentage_auto)
        },
        P::MarginLeft => simple!(margin_left, set_margin_left, conversions::length_percentage_auto),
        P::WebkitMarginStart => logical(LogicalBox::Margin, LogicalSide::Start),
        P::WebkitMarginEnd => logical(LogicalBox::Margin, LogicalSide::End),
        P::WebkitMarginBefore => logical(LogicalBox::Margin, LogicalSide::Before),
        P::WebkitMarginAfter => logical(LogicalBox::Margin, LogicalSide::After),
        P::Padding => suppress(&[
            P::PaddingTop,
            P::PaddingRight,
            P::PaddingBottom,
            P::PaddingLeft,
        ]),
        P::PaddingTop => simple!(padding_top, set_padding_top, padding),
        P::PaddingRight => simple!(padding_right, set_padding_right, padding),
        P::PaddingBottom => simple!(padding_bottom, set_padding_bottom, padding),
        P::PaddingLeft => simple!(padding_left, set_padding_left, padding),
        P::WebkitPaddingStart => logical(LogicalBox::Padding, LogicalSide::Start),
        P::WebkitPaddingEnd => logical(LogicalBox::Padding, LogicalSide::End),
        P::WebkitPaddingBefore => logical(LogicalBox::Padding, LogicalSide::Before),
        P::WebkitPaddingAfter => logical(LogicalBox::Padding, LogicalSide::After),
        P::Overflow => Box::new(Expanding::expand_value(&[P::OverflowX, P::OverflowY])),
        P::OverflowX => simple!(overflow_x, set_overflow_x),
        P::OverflowY => simple!(overflow_y, set_overflow_y),
        P::Clip => Box::new(Simple::new(text::get_clip, text::set_clip, text::clip)),
        P::ZIndex => Box::new(Simple::new(text::get_z_index, text::set_z_index, text::z_index)),
        P::VerticalAlign => Box::new(Simple::new(
            text::get_vertical_align,
            text::set_vertical_align,
            text::vertical_align,
        )),
        P::Visibility => simple!(visibility, set_visibility),
        P::UnicodeBidi => simple!(unicode_bidi, set_unicode_bidi),
        P::Opacity => simple!(opacity, set_opacity, conversions::unit_interval),
        P::Resize => simple!(resize, set_resize),
        P::Cursor => Box::new(Simple::new(text::get_cursor, text::set_cursor, text::cursor)),
        P::PointerEvents => simple!(pointer_events, set_pointer_events),
        P::ObjectFit => simple!(object_fit, set_object_fit),
        P::ImageRendering => simple!(image_rendering, set_image_rendering),
        P::WebkitAppearance => simple!(appearance, set_appearance),
        P::WebkitUserDrag => simple!(user_drag, set_user_drag),
        P::WebkitUserModify => simple!(user_modify, set_user_modify),
        P::WebkitUserSelect => simple!(user_select, set_user_select),
        P::WebkitPrintColorAdjust => simple!(print_color_adjust, set_print_color_adjust),

        P::TableLayout => simple!(table_layout, set_table_layout),
        P::CaptionSide => simple!(caption_side, set_caption_side),
        P::EmptyCells => simple!(empty_cells, set_empty_cells),
        P::ListStyle => suppress(&[P::ListStyleType, P::ListStylePosition, P::ListStyleImage]),
        P::ListStyleImage => simple!(list_style_image, set_list_style_image, conversions::image),
        P::ListStylePosition => simple!(list_style_position, set_list_style_position),
        P::ListStyleType => simple!(list_style_type, set_list_style_type),
        P::CounterIncrement => Box::new(CounterProperty::Increment),
        P::CounterReset => Box::new(CounterProperty::Reset),

        P::PageBreakAfter => simple!(page_break_after, set_page_break_after),
        P::PageBreakBefore => simple!(page_break_before, set_page_break_before),
        P::PageBreakInside => simple!(page_break_inside, set_page_break_inside),
        P::Orphans => simple!(orphans, set_orphans, conversions::positive_short),
        P::Widows => simple!(widows, set_widows, conversions::positive_short),
        P::Size => simple!(page_size, set_page_size, text::page_size),

        P::TextAlign => simple!(text_align, set_text_align, text::text_align),
        P::TextDecoration => {
            simple!(text_decoration, set_text_decoration, conversions::text_decoration)
        },
        P::TextIndent => simple!(text_indent, set_text_indent, conversions::length_percentage),
        P::TextOverflow => simple!(text_overflow, set_text_overflow),
        P::TextShadow => Box::new(Simple::new(
            |style| style.text_shadow().to_vec(),
            ComputedStyle::set_text_shadow,
            effects::text_shadow,
        )),
        P::TextTransform => simple!(text_transform, set_text_transform),
        P::WhiteSpace => simple!(white_space, set_white_space),
        P::WordBreak => simple!(word_break, set_word_break),
        P::WordWrap => simple!(overflow_wrap, set_overflow_wrap),
        P::LetterSpacing => {
            simple!(letter_spacing, set_letter_spacing, conversions::pixels_or_normal)
        },
        P::WordSpacing => simple!(word_spacing, set_word_spacing, conversions::pixels_or_normal),
        P::WebkitHyphens => simple!(hyphens, set_hyphens),
        P::WebkitTextDecorationColor => color!(
            text_decoration_color,
            set_text_decoration_color,
            set_visited_link_text_decoration_color
        ),
        P::WebkitTextDecorationStyle => {
            simple!(text_decoration_style, set_text_decoration_style)
        },
        P::WebkitTextDecorationsInEffect => simple!(
            text_decorations_in_effect,
            set_text_decorations_in_effect,
            conversions::text_decoration
        ),
        P::WebkitTextEmphasisColor => color!(
            text_emphasis_color,
            set_text_emphasis_color,
            set_visited_link_text_emphasis_color
        ),
        P::WebkitTextEmphasisStyle => Box::new(Simple::new(
            text::get_text_emphasis_style,
            text::set_text_emphasis_style,
            text::text_emphasis_style,
        )),
        P::WebkitTextFillColor => color!(
            text_fill_color,
            set_text_fill_color,
            set_visited_link_text_fill_color
        ),
        P::WebkitTextStrokeColor => color!(
            text_stroke_color,
            set_text_stroke_color,
            set_visited_link_text_stroke_color
        ),
        P::WebkitTextStrokeWidth => {
            simple!(text_stroke_width, set_text_stroke_width, conversions::thickness)
        },

        P::BoxShadow => Box::new(Simple::new(
            |style| style.box_shadow().to_vec(),
            ComputedStyle::set_box_shadow,
            effects::box_shadow,
        )),
        P::MixBlendMode => simple!(blend_mode, set_blend_mode),
        P::WebkitFilter => Box::new(Simple::new(
            |style| style.filter().to_vec(),
            ComputedStyle::set_filter,
            effects::filter,
        )),
        P::WebkitClipPath => simple!(clip_path, set_clip_path, effects::clip_path),
        P::WebkitShapeOutside => simple!(shape_outside, set_shape_outside, effects::shape_outside),
        P::WebkitTransform => Box::new(Simple::new(
            |style| style.transform().to_vec(),
            ComputedStyle::set_transform,
            effects::transform,
        )),
        P::WebkitTransformOrigin => suppress(&[
            P::WebkitTransformOriginX,
            P::WebkitTransformOriginY,
            P::WebkitTransformOriginZ,
        ]),
        P::WebkitTransformOriginX => {
            simple!(transform_origin_x, set_transform_origin_x, conversions::position_x)
        },
        P::WebkitTransformOriginY => {
            simple!(transform_origin_y, set_transform_origin_y, conversions::position_y)
        },
        P::WebkitTransformOriginZ => {
            simple!(transform_origin_z, set_transform_origin_z, conversions::pixels)
        },
        P::WebkitTransformStyle => simple!(transform_style_3d, set_transform_style_3d),
        P::WebkitBackfaceVisibility => simple!(backface_visibility, set_backface_visibility),
        P::WebkitPerspective => simple!(perspective, set_perspective, effects::perspective),
        P::WebkitPerspectiveOrigin => {
            suppress(&[P::WebkitPerspectiveOriginX, P::WebkitPerspectiveOriginY])
        },
        P::WebkitPerspectiveOriginX => {
            simple!(perspective_origin_x, set_perspective_origin_x, conversions::position_x)
        },
        P::WebkitPerspectiveOriginY => {
            simple!(perspective_origin_y, set_perspective_origin_y, conversions::position_y)
        },

        P::WebkitMaskClip => fill_layer!(Mask, CLIP, clip, fill_layer::fill_box),
        P::WebkitMaskComposite => fill_layer!(Mask, COMPOSITE, composite),
        P::WebkitMaskImage => fill_layer!(Mask, IMAGE, image, conversions::image),
        P::WebkitMaskOrigin => fill_layer!(Mask, ORIGIN, origin, fill_layer::fill_box),
        P::WebkitMaskPosition => {
            suppress(&[P::WebkitMaskPositionX, P::WebkitMaskPositionY])
        },
        P::WebkitMaskPositionX => {
            fill_layer!(Mask, X_POSITION, x_position, conversions::position_x)
        },
        P::WebkitMaskPositionY => {
            fill_layer!(Mask, Y_POSITION, y_position, conversions::position_y)
        },
        P::WebkitMaskRepeat => suppress(&[P::WebkitMaskRepeatX, P::WebkitMaskRepeatY]),
        P::WebkitMaskRepeatX => fill_layer!(Mask, REPEAT_X, repeat_x),
        P::WebkitMaskRepeatY => fill_layer!(Mask, REPEAT_Y, repeat_y),
        P::WebkitMaskSize => fill_layer!(Mask, SIZE, size, fill_layer::fill_size),
        P::WebkitMaskSourceType => fill_layer!(Mask, MASK_SOURCE_TYPE, mask_source_type),
        P::WebkitMaskBoxImage => Box::new(NinePieceImageProperty(NinePieceKind::Mask)),
        P::WebkitMaskBoxImageOutset => nine_piece!(Mask, outset, border_image::outset),
        P::WebkitMaskBoxImageRepeat => nine_piece!(
            Mask,
            (horizontal_rule, vertical_rule),
            border_image::repeat
        ),
        P::WebkitMaskBoxImageSlice => nine_piece!(Mask, (image_slices, fill), border_image::slice),
        P::WebkitMaskBoxImageSource => nine_piece!(Mask, image, border_image::source),
        P::WebkitMaskBoxImageWidth => nine_piece!(Mask, border_slices, border_image::width),

        P::WebkitColumns => suppress(&[P::WebkitColumnWidth, P::WebkitColumnCount]),
        P::WebkitColumnCount => simple!(column_count, set_column_count, effects::column_count),
        P::WebkitColumnGap => simple!(column_gap, set_column_gap, effects::column_gap),
        P::WebkitColumnWidth => simple!(column_width, set_column_width, effects::column_width),
        P::WebkitColumnRule => suppress(&[
            P::WebkitColumnRuleWidth,
            P::WebkitColumnRuleStyle,
            P::WebkitColumnRuleColor,
        ]),
        P::WebkitColumnRuleColor => color!(
            column_rule_color,
            set_column_rule_color,
            set_visited_link_column_rule_color
        ),
        P::WebkitColumnRuleStyle => simple!(column_rule_style, set_column_rule_style),
        P::WebkitColumnRuleWidth => {
            simple!(column_rule_width, set_column_rule_width, conversions::thickness)
        },

        P::WebkitFlex => suppress(&[P::WebkitFlexGrow, P::WebkitFlexShrink, P::WebkitFlexBasis]),
        P::WebkitFlexFlow => suppress(&[P::WebkitFlexDirection, P::WebkitFlexWrap]),
        P::WebkitFlexGrow => simple!(flex_grow, set_flex_grow, conversions::non_negative_number),
        P::WebkitFlexShrink => {
            simple!(flex_shrink, set_flex_shrink, conversions::non_negative_number)
        },
        P::WebkitFlexBasis => {
            simple!(flex_basis, set_flex_basis, conversions::length_percentage_auto)
        },
        P::WebkitFlexDirection => simple!(flex_direction, set_flex_direction),
        P::WebkitFlexWrap => simple!(flex_wrap, set_flex_wrap),
        P::WebkitAlignItems => simple!(align_items, set_align_items),
        P::WebkitJustifyContent => simple!(justify_content, set_justify_content),
        P::WebkitOrder => simple!(order, set_order, conversions::integer),

        P::WebkitAnimation => suppress(&[
            P::WebkitAnimationDelay,
            P::WebkitAnimationDirection,
            P::WebkitAnimationDuration,
            P::WebkitAnimationFillMode,
            P::WebkitAnimationIterationCount,
            P::WebkitAnimationName,
            P::WebkitAnimationPlayState,
            P::WebkitAnimationTimingFunction,
        ]),
        P::WebkitAnimationDelay => animation!(Animations, DELAY, delay, conversions::time),
        P::WebkitAnimationDirection => animation!(Animations, DIRECTION, direction),
        P::WebkitAnimationDuration => {
            animation!(Animations, DURATION, duration, animation::duration)
        },
        P::WebkitAnimationFillMode => animation!(Animations, FILL_MODE, fill_mode),
        P::WebkitAnimationIterationCount => animation!(
            Animations,
            ITERATION_COUNT,
            iteration_count,
            animation::iteration_count
        ),
        P::WebkitAnimationName => animation!(Animations, NAME, name, animation::animation_name),
        P::WebkitAnimationPlayState => animation!(Animations, PLAY_STATE, play_state),
        P::WebkitAnimationTimingFunction => animation!(
            Animations,
            TIMING_FUNCTION,
            timing_function,
            animation::timing_function
        ),
        P::WebkitTransition => suppress(&[
            P::WebkitTransitionDelay,
            P::WebkitTransitionDuration,
            P::WebkitTransitionProperty,
            P::WebkitTransitionTimingFunction,
        ]),
        P::WebkitTransitionDelay => animation!(Transitions, DELAY, delay, conversions::time),
        P::WebkitTransitionDuration => {
            animation!(Transitions, DURATION, duration, animation::duration)
        },
        P::WebkitTransitionProperty => animation!(
            Transitions,
            PROPERTY,
            property,
            animation::transition_property
        ),
        P::WebkitTransitionTimingFunction => animation!(
            Transitions,
            TIMING_FUNCTION,
            timing_function,
            animation::timing_function
        ),
    }
}
