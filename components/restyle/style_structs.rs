/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The groups a `ComputedStyle` is split into.
//!
//! Every group is stored behind its own `Arc`, so styles that only differ in
//! a few properties share everything else. The `Default` implementation of
//! each group holds the initial value of every property it contains.

use app_units::Au;

use crate::font::Font;
use crate::values::CSSFloat;
use crate::values::animation::AnimationList;
use crate::values::border::{BorderData, BorderValue, NinePieceImage, OutlineValue};
use crate::values::color::{Color, RGBA};
use crate::values::content::{CounterDirectiveMap, CursorImage, PageSize, TextDecorationLine};
use crate::values::effects::{ClipPathOperation, FilterOperation, ShadowData, ShapeValue, TransformOperation};
use crate::values::fill_layer::{FillLayerType, FillLayers};
use crate::values::image::StyleImage;
use crate::values::keywords::*;
use crate::values::length::{Length, LengthBox};

/// Box sizes, z-index and friends.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct BoxData {
    pub width: Length,
    pub height: Length,
    pub min_width: Length,
    pub min_height: Length,
    pub max_width: Length,
    pub max_height: Length,
    /// The length of `vertical-align`, when given as a length or percentage.
    pub vertical_align_length: Length,
    pub z_index: i32,
    pub has_auto_z_index: bool,
    pub box_sizing: BoxSizing,
}

impl Default for BoxData {
    fn default() -> Self {
        BoxData {
            width: Length::Auto,
            height: Length::Auto,
            min_width: Length::ZERO,
            min_height: Length::ZERO,
            max_width: Length::Undefined,
            max_height: Length::Undefined,
            vertical_align_length: Length::Auto,
            z_index: 0,
            has_auto_z_index: true,
            box_sizing: BoxSizing::ContentBox,
        }
    }
}

/// Clip, zoom and the element's own text decorations.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct VisualData {
    pub clip: LengthBox,
    pub has_clip: bool,
    pub text_decoration: TextDecorationLine,
    /// The specified zoom factor, before multiplying the parent's.
    pub zoom: CSSFloat,
}

impl Default for VisualData {
    fn default() -> Self {
        VisualData {
            clip: LengthBox::uniform(Length::Auto),
            has_clip: false,
            text_decoration: TextDecorationLine::empty(),
            zoom: 1.,
        }
    }
}

/// Offsets, margins, padding and borders.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct SurroundData {
    pub offset: LengthBox,
    pub margin: LengthBox,
    pub padding: LengthBox,
    pub border: BorderData,
}

impl Default for SurroundData {
    fn default() -> Self {
        SurroundData {
            offset: LengthBox::uniform(Length::Auto),
            margin: LengthBox::uniform(Length::ZERO),
            padding: LengthBox::uniform(Length::ZERO),
            border: BorderData::default(),
        }
    }
}

/// Backgrounds and outlines.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct BackgroundData {
    pub layers: FillLayers,
    pub background_color: Color,
    pub visited_link_background_color: Color,
    pub outline: OutlineValue,
    pub visited_link_outline_color: Color,
}

impl Default for BackgroundData {
    fn default() -> Self {
        BackgroundData {
            layers: FillLayers::new(FillLayerType::Background),
            background_color: Color::Rgba(RGBA::TRANSPARENT),
            visited_link_background_color: Color::Rgba(RGBA::TRANSPARENT),
            outline: OutlineValue::default(),
            visited_link_outline_color: Color::CurrentColor,
        }
    }
}

/// Non-inherited properties that are rarely set.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct RareNonInheritedData {
    pub opacity: CSSFloat,
    pub appearance: Appearance,
    pub user_drag: UserDrag,
    pub border_fit: BorderFit,
    pub object_fit: ObjectFit,
    pub text_overflow: TextOverflow,
    pub resize: Resize,
    pub box_shadow: Vec<ShadowData>,
    pub transform: Vec<TransformOperation>,
    pub transform_origin_x: Length,
    pub transform_origin_y: Length,
    pub transform_origin_z: CSSFloat,
    pub transform_style_3d: TransformStyle3D,
    pub backface_visibility: BackfaceVisibility,
    /// Perspective depth; zero means `none`.
    pub perspective: CSSFloat,
    pub perspective_origin_x: Length,
    pub perspective_origin_y: Length,
    pub filter: Vec<FilterOperation>,
    pub mask: FillLayers,
    pub mask_box_image: NinePieceImage,
    pub clip_path: Option<ClipPathOperation>,
    pub shape_outside: Option<ShapeValue>,
    pub blend_mode: BlendMode,
    pub animations: AnimationList,
    pub transitions: AnimationList,
    pub counter_directives: CounterDirectiveMap,
    pub page_size: PageSize,
    /// `None` is `auto`.
    pub column_count: Option<u16>,
    /// `None` is `normal`.
    pub column_gap: Option<CSSFloat>,
    /// `None` is `auto`.
    pub column_width: Option<CSSFloat>,
    pub column_rule: BorderValue,
    pub visited_link_border_left_color: Color,
    pub visited_link_border_right_color: Color,
    pub visited_link_border_top_color: Color,
    pub visited_link_border_bottom_color: Color,
    pub visited_link_column_rule_color: Color,
    pub text_decoration_color: Color,
    pub visited_link_text_decoration_color: Color,
    pub text_decoration_style: TextDecorationStyle,
    pub flex_grow: CSSFloat,
    pub flex_shrink: CSSFloat,
    pub flex_basis: Length,
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub align_items: AlignItems,
    pub justify_content: JustifyContent,
    pub order: i32,
}

impl Default for RareNonInheritedData {
    fn default() -> Self {
        RareNonInheritedData {
            opacity: 1.,
            appearance: Appearance::None,
            user_drag: UserDrag::Auto,
            border_fit: BorderFit::Border,
            object_fit: ObjectFit::Fill,
            text_overflow: TextOverflow::Clip,
            resize: Resize::None,
            box_shadow: Vec::new(),
            transform: Vec::new(),
            transform_origin_x: Length::Percent(50.),
            transform_origin_y: Length::Percent(50.),
            transform_origin_z: 0.,
            transform_style_3d: TransformStyle3D::Flat,
            backface_visibility: BackfaceVisibility::Visible,
            perspective: 0.,
            perspective_origin_x: Length::Percent(50.),
            perspective_origin_y: Length::Percent(50.),
            filter: Vec::new(),
            mask: FillLayers::new(FillLayerType::Mask),
            mask_box_image: NinePieceImage::mask_defaults(),
            clip_path: None,
            shape_outside: None,
            blend_mode: BlendMode::Normal,
            animations: AnimationList::default(),
            transitions: AnimationList::default(),
            counter_directives: CounterDirectiveMap::new(),
            page_size: PageSize::Auto,
            column_count: None,
            column_gap: None,
            column_width: None,
            column_rule: BorderValue::default(),
            visited_link_border_left_color: Color::CurrentColor,
            visited_link_border_right_color: Color::CurrentColor,
            visited_link_border_top_color: Color::CurrentColor,
            visited_link_border_bottom_color: Color::CurrentColor,
            visited_link_column_rule_color: Color::CurrentColor,
            text_decoration_color: Color::CurrentColor,
            visited_link_text_decoration_color: Color::CurrentColor,
            text_decoration_style: TextDecorationStyle::Solid,
            flex_grow: 0.,
            flex_shrink: 1.,
            flex_basis: Length::Auto,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::NoWrap,
            align_items: AlignItems::Stretch,
            justify_content: JustifyContent::FlexStart,
            order: 0,
        }
    }
}

/// The common inherited properties.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct InheritedData {
    /// `normal` is stored as `Percent(-100)`.
    pub line_height: Length,
    pub horizontal_border_spacing: Au,
    pub vertical_border_spacing: Au,
    pub font: Font,
    pub color: RGBA,
    pub visited_link_color: RGBA,
    pub letter_spacing: CSSFloat,
    pub word_spacing: CSSFloat,
}

impl Default for InheritedData {
    fn default() -> Self {
        InheritedData {
            line_height: Length::Percent(-100.),
            horizontal_border_spacing: Au(0),
            vertical_border_spacing: Au(0),
            font: Font::default(),
            color: RGBA::BLACK,
            visited_link_color: RGBA::BLACK,
            letter_spacing: 0.,
            word_spacing: 0.,
        }
    }
}

/// Inherited properties that are rarely set.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct RareInheritedData {
    /// The product of every ancestor's zoom and this element's.
    pub effective_zoom: CSSFloat,
    /// `-webkit-text-size-adjust: auto`.
    pub text_size_adjust: bool,
    pub color_scheme: ColorScheme,
    pub text_stroke_color: Color,
    pub visited_link_text_stroke_color: Color,
    pub text_stroke_width: CSSFloat,
    pub text_fill_color: Color,
    pub visited_link_text_fill_color: Color,
    pub text_emphasis_color: Color,
    pub visited_link_text_emphasis_color: Color,
    pub text_emphasis_fill: TextEmphasisFill,
    pub text_emphasis_mark: TextEmphasisMark,
    pub text_shadow: Vec<ShadowData>,
    pub text_indent: Length,
    pub cursor_images: Vec<CursorImage>,
    pub word_break: WordBreak,
    pub overflow_wrap: OverflowWrap,
    pub hyphens: Hyphens,
    pub user_modify: UserModify,
    pub user_select: UserSelect,
    pub image_rendering: ImageRendering,
    pub widows: i16,
    pub orphans: i16,
    pub list_style_image: Option<StyleImage>,
}

impl Default for RareInheritedData {
    fn default() -> Self {
        RareInheritedData {
            effective_zoom: 1.,
            text_size_adjust: true,
            color_scheme: ColorScheme::Normal,
            text_stroke_color: Color::CurrentColor,
            visited_link_text_stroke_color: Color::CurrentColor,
            text_stroke_width: 0.,
            text_fill_color: Color::CurrentColor,
            visited_link_text_fill_color: Color::CurrentColor,
            text_emphasis_color: Color::CurrentColor,
            visited_link_text_emphasis_color: Color::CurrentColor,
            text_emphasis_fill: TextEmphasisFill::Filled,
            text_emphasis_mark: TextEmphasisMark::None,
            text_shadow: Vec::new(),
            text_indent: Length::ZERO,
            cursor_images: Vec::new(),
            word_break: WordBreak::Normal,
            overflow_wrap: OverflowWrap::Normal,
            hyphens: Hyphens::Manual,
            user_modify: UserModify::ReadOnly,
            user_select: UserSelect::Text,
            image_rendering: ImageRendering::Auto,
            widows: 2,
            orphans: 2,
            list_style_image: None,
        }
    }
}

/// Whether an element is, or is inside, a link, and whether that link was
/// visited.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum InsideLink {
    /// Not a link, nor inside one.
    #[default]
    NotInsideLink,
    /// An unvisited link or something inside one.
    InsideUnvisitedLink,
    /// A visited link or something inside one.
    InsideVisitedLink,
}

/// Small inherited properties, stored inline in the style.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct InheritedFlags {
    pub empty_cells: EmptyCells,
    pub caption_side: CaptionSide,
    pub list_style_type: ListStyleType,
    pub list_style_position: ListStylePosition,
    pub visibility: Visibility,
    pub text_align: TextAlign,
    pub text_transform: TextTransform,
    /// The decorations drawn on this element's text, accumulated from
    /// ancestors.
    pub text_decorations_in_effect: TextDecorationLine,
    pub cursor: CursorKind,
    pub direction: Direction,
    pub white_space: WhiteSpace,
    pub border_collapse: BorderCollapse,
    pub print_color_adjust: PrintColorAdjust,
    pub pointer_events: PointerEvents,
    pub inside_link: InsideLink,
    pub writing_mode: WritingMode,
}

impl Default for InheritedFlags {
    fn default() -> Self {
        InheritedFlags {
            empty_cells: EmptyCells::Show,
            caption_side: CaptionSide::Top,
            list_style_type: ListStyleType::Disc,
            list_style_position: ListStylePosition::Outside,
            visibility: Visibility::Visible,
            text_align: TextAlign::Start,
            text_transform: TextTransform::None,
            text_decorations_in_effect: TextDecorationLine::empty(),
            cursor: CursorKind::Auto,
            direction: Direction::Ltr,
            white_space: WhiteSpace::Normal,
            border_collapse: BorderCollapse::Separate,
            print_color_adjust: PrintColorAdjust::Economy,
            pointer_events: PointerEvents::Auto,
            inside_link: InsideLink::NotInsideLink,
            writing_mode: WritingMode::HorizontalTb,
        }
    }
}

/// Small non-inherited properties and per-style bookkeeping, stored inline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct NonInheritedFlags {
    /// The display after adjustments such as blockification.
    pub effective_display: Display,
    /// The display as computed by the cascade.
    pub original_display: Display,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub vertical_align: VerticalAlign,
    pub clear: Clear,
    pub position: Position,
    pub floating: Float,
    pub table_layout: TableLayout,
    pub unicode_bidi: UnicodeBidi,
    pub page_break_before: PageBreak,
    pub page_break_after: PageBreak,
    pub page_break_inside: PageBreak,
    /// Which pseudo-element this style belongs to.
    pub style_type: PseudoId,
    /// One bit per public pseudo-element that has rules for this element.
    pub pseudo_bits: u16,
    /// Whether this style must not be shared with other elements.
    pub unique: bool,
    /// Whether a non-inherited property was explicitly inherited.
    pub explicit_inheritance: bool,
    /// Whether a viewport-relative unit was used.
    pub has_viewport_units: bool,
}

impl Default for NonInheritedFlags {
    fn default() -> Self {
        NonInheritedFlags {
            effective_display: Display::Inline,
            original_display: Display::Inline,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            vertical_align: VerticalAlign::Baseline,
            clear: Clear::None,
            position: Position::Static,
            floating: Float::None,
            table_layout: TableLayout::Auto,
            unicode_bidi: UnicodeBidi::Normal,
            page_break_before: PageBreak::Auto,
            page_break_after: PageBreak::Auto,
            page_break_inside: PageBreak::Auto,
            style_type: PseudoId::NoPseudo,
            pseudo_bits: 0,
            unique: false,
            explicit_inheritance: false,
            has_viewport_units: false,
        }
    }
}
