/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The computed style of an element or pseudo-element.

use std::sync::LazyLock;

use app_units::Au;
use atomic_refcell::AtomicRefCell;
use servo_arc::Arc;
use smallvec::SmallVec;

use crate::font::{Font, FontDescription, FontSelector};
use crate::properties::PropertyId;
use crate::style_structs::*;
use crate::values::CSSFloat;
use crate::values::animation::AnimationList;
use crate::values::border::{BorderData, BorderStyle, NinePieceImage};
use crate::values::color::{Color, RGBA};
use crate::values::content::{CounterDirectiveMap, CursorImage, PageSize, TextDecorationLine};
use crate::values::effects::{
    ClipPathOperation, FilterOperation, ShadowData, ShapeValue, TransformOperation,
};
use crate::values::fill_layer::FillLayers;
use crate::values::image::{ImageLoader, StyleImage, resolve_pending};
use crate::values::keywords::*;
use crate::values::length::{Length, LengthBox, LengthSize, LogicalSide, PhysicalSide};

static INITIAL_VALUES: LazyLock<ComputedStyle> = LazyLock::new(|| ComputedStyle {
    box_data: Arc::new(BoxData::default()),
    visual: Arc::new(VisualData::default()),
    surround: Arc::new(SurroundData::default()),
    background: Arc::new(BackgroundData::default()),
    rare_non_inherited: Arc::new(RareNonInheritedData::default()),
    rare_inherited: Arc::new(RareInheritedData::default()),
    inherited: Arc::new(InheritedData::default()),
    inherited_flags: InheritedFlags::default(),
    non_inherited_flags: NonInheritedFlags::default(),
    cached_pseudo_styles: AtomicRefCell::new(SmallVec::new()),
});

/// The style with every property at its initial value.
///
/// Styles created with [`ComputedStyle::new`] share all their groups with
/// this one until they are mutated.
pub fn initial_values() -> &'static ComputedStyle {
    &INITIAL_VALUES
}

/// The fully resolved set of property values of one element or
/// pseudo-element.
///
/// Property values live in reference-counted groups; cloning a style is
/// cheap, and setters detach a group only when they actually change it.
#[derive(Debug)]
pub struct ComputedStyle {
    pub(crate) box_data: Arc<BoxData>,
    pub(crate) visual: Arc<VisualData>,
    pub(crate) surround: Arc<SurroundData>,
    pub(crate) background: Arc<BackgroundData>,
    pub(crate) rare_non_inherited: Arc<RareNonInheritedData>,
    pub(crate) rare_inherited: Arc<RareInheritedData>,
    pub(crate) inherited: Arc<InheritedData>,
    pub(crate) inherited_flags: InheritedFlags,
    pub(crate) non_inherited_flags: NonInheritedFlags,
    /// Styles of this element's pseudo-elements, at most one per id.
    cached_pseudo_styles: AtomicRefCell<SmallVec<[Arc<ComputedStyle>; 2]>>,
}

impl Clone for ComputedStyle {
    /// Clones the property values. The pseudo-style cache belongs to the
    /// original and is not copied.
    fn clone(&self) -> Self {
        ComputedStyle {
            box_data: self.box_data.clone(),
            visual: self.visual.clone(),
            surround: self.surround.clone(),
            background: self.background.clone(),
            rare_non_inherited: self.rare_non_inherited.clone(),
            rare_inherited: self.rare_inherited.clone(),
            inherited: self.inherited.clone(),
            inherited_flags: self.inherited_flags,
            non_inherited_flags: self.non_inherited_flags,
            cached_pseudo_styles: AtomicRefCell::new(SmallVec::new()),
        }
    }
}

fn same_group<T: PartialEq>(a: &Arc<T>, b: &Arc<T>) -> bool {
    Arc::ptr_eq(a, b) || **a == **b
}

impl PartialEq for ComputedStyle {
    fn eq(&self, other: &Self) -> bool {
        self.inherited_flags == other.inherited_flags &&
            self.non_inherited_flags == other.non_inherited_flags &&
            same_group(&self.box_data, &other.box_data) &&
            same_group(&self.visual, &other.visual) &&
            same_group(&self.surround, &other.surround) &&
            same_group(&self.background, &other.background) &&
            same_group(&self.rare_non_inherited, &other.rare_non_inherited) &&
            same_group(&self.rare_inherited, &other.rare_inherited) &&
            same_group(&self.inherited, &other.inherited)
    }
}

impl Default for ComputedStyle {
    fn default() -> Self {
        ComputedStyle::new()
    }
}

impl ComputedStyle {
    /// A style with every property at its initial value.
    pub fn new() -> Self {
        initial_values().clone()
    }

    /// A fresh style for a child of `parent`: inherited properties come from
    /// `parent`, everything else is initial.
    pub fn new_inheriting_from(parent: &ComputedStyle, is_at_shadow_boundary: bool) -> Self {
        let mut style = ComputedStyle::new();
        style.inherit_from(parent, is_at_shadow_boundary);
        style
    }

    /// Copies every inherited property from `parent`.
    ///
    /// `-webkit-user-modify` does not cross a shadow boundary.
    pub fn inherit_from(&mut self, parent: &ComputedStyle, is_at_shadow_boundary: bool) {
        let user_modify = self.user_modify();
        self.rare_inherited = parent.rare_inherited.clone();
        self.inherited = parent.inherited.clone();
        self.inherited_flags = parent.inherited_flags;
        if is_at_shadow_boundary {
            self.set_user_modify(user_modify);
        }
    }

    /// Copies every non-inherited property from `other`, leaving this style's
    /// pseudo-element bookkeeping alone.
    pub fn copy_non_inherited_from(&mut self, other: &ComputedStyle) {
        self.box_data = other.box_data.clone();
        self.visual = other.visual.clone();
        self.surround = other.surround.clone();
        self.background = other.background.clone();
        self.rare_non_inherited = other.rare_non_inherited.clone();

        let from = &other.non_inherited_flags;
        let to = &mut self.non_inherited_flags;
        to.effective_display = from.effective_display;
        to.original_display = from.original_display;
        to.overflow_x = from.overflow_x;
        to.overflow_y = from.overflow_y;
        to.vertical_align = from.vertical_align;
        to.clear = from.clear;
        to.position = from.position;
        to.floating = from.floating;
        to.table_layout = from.table_layout;
        to.unicode_bidi = from.unicode_bidi;
        to.page_break_before = from.page_break_before;
        to.page_break_after = from.page_break_after;
        to.page_break_inside = from.page_break_inside;
        to.has_viewport_units = from.has_viewport_units;
    }

    /// Whether every inherited property has the same value in both styles.
    pub fn inherited_equal(&self, other: &ComputedStyle) -> bool {
        self.inherited_flags == other.inherited_flags &&
            same_group(&self.inherited, &other.inherited) &&
            same_group(&self.rare_inherited, &other.rare_inherited)
    }

    /// Whether both styles literally share their inherited groups, which is
    /// cheaper to establish than `inherited_equal` and implies it.
    pub fn inherited_data_shared(&self, other: &ComputedStyle) -> bool {
        self.inherited_flags == other.inherited_flags &&
            Arc::ptr_eq(&self.inherited, &other.inherited) &&
            Arc::ptr_eq(&self.rare_inherited, &other.rare_inherited)
    }

    /// Whether the public pseudo-element `pseudo` has rules for this
    /// element.
    pub fn has_pseudo_style(&self, pseudo: PseudoId) -> bool {
        pseudo.is_public() && self.non_inherited_flags.pseudo_bits & pseudo_bit(pseudo) != 0
    }

    /// Records that the public pseudo-element `pseudo` has rules for this
    /// element.
    pub fn set_has_pseudo_style(&mut self, pseudo: PseudoId) {
        if pseudo.is_public() {
            self.non_inherited_flags.pseudo_bits |= pseudo_bit(pseudo);
        }
    }

    /// The cached style of pseudo-element `pseudo`, if any.
    pub fn cached_pseudo_style(&self, pseudo: PseudoId) -> Option<Arc<ComputedStyle>> {
        if pseudo == PseudoId::NoPseudo {
            return None;
        }
        self.cached_pseudo_styles
            .borrow()
            .iter()
            .find(|style| style.style_type() == pseudo)
            .cloned()
    }

    /// Caches a pseudo-element style on this style and returns the cached
    /// entry. A style already cached for the same pseudo-element wins.
    pub fn add_cached_pseudo_style(&self, pseudo_style: Arc<ComputedStyle>) -> Arc<ComputedStyle> {
        let pseudo = pseudo_style.style_type();
        if pseudo == PseudoId::NoPseudo {
            return pseudo_style;
        }
        if let Some(existing) = self.cached_pseudo_style(pseudo) {
            return existing;
        }
        self.cached_pseudo_styles.borrow_mut().push(pseudo_style.clone());
        pseudo_style
    }

    /// Drops every cached pseudo-element style.
    pub fn clear_cached_pseudo_styles(&self) {
        self.cached_pseudo_styles.borrow_mut().clear();
    }

    /// The specified zoom factor.
    pub fn zoom(&self) -> CSSFloat {
        self.visual.zoom
    }

    /// Sets the zoom factor. The effective zoom, which at this point holds
    /// the inherited effective zoom, gets multiplied by `zoom`. Returns
    /// whether the specified zoom changed.
    pub fn set_zoom(&mut self, zoom: CSSFloat) -> bool {
        let effective_zoom = self.effective_zoom() * zoom;
        self.set_effective_zoom(effective_zoom);
        if self.visual.zoom == zoom {
            return false;
        }
        Arc::make_mut(&mut self.visual).zoom = zoom;
        true
    }

    /// The display after style adjustment.
    pub fn display(&self) -> Display {
        self.non_inherited_flags.effective_display
    }

    /// Sets both the computed and the adjusted display.
    pub fn set_display(&mut self, display: Display) {
        self.non_inherited_flags.effective_display = display;
        self.non_inherited_flags.original_display = display;
    }

    #[allow(missing_docs)]
    pub fn font(&self) -> &Font {
        &self.inherited.font
    }

    #[allow(missing_docs)]
    pub fn font_description(&self) -> &FontDescription {
        self.inherited.font.description()
    }

    /// Replaces the font description, returning whether it changed. The font
    /// object itself is rebuilt by [`ComputedStyle::update_font`].
    pub fn set_font_description(&mut self, description: FontDescription) -> bool {
        if *self.font_description() == description {
            return false;
        }
        Arc::make_mut(&mut self.inherited).font = Font::new(description);
        true
    }

    /// Rebuilds the font object against the current font selector.
    pub fn update_font(&mut self, selector: Option<&dyn FontSelector>) {
        let version = selector.map_or(0, |selector| selector.version());
        if self.font().selector_version() != version {
            Arc::make_mut(&mut self.inherited).font.update(selector);
        }
    }

    /// The computed font size, in pixels.
    pub fn computed_font_size(&self) -> CSSFloat {
        self.font_description().computed_size
    }

    /// The specified font size, in pixels.
    pub fn specified_font_size(&self) -> CSSFloat {
        self.font_description().specified_size
    }

    /// The computed font size rounded to whole pixels.
    pub fn computed_font_pixel_size(&self) -> i32 {
        self.font_description().computed_pixel_size()
    }

    /// The physical side that `side` maps to under this style's writing
    /// mode and direction.
    pub fn physical_side(&self, side: LogicalSide) -> PhysicalSide {
        let writing_mode = self.writing_mode();
        let ltr = self.direction() == Direction::Ltr;
        match side {
            LogicalSide::Start | LogicalSide::End => {
                let start = side == LogicalSide::Start;
                match (writing_mode.is_horizontal(), start == ltr) {
                    (true, true) => PhysicalSide::Left,
                    (true, false) => PhysicalSide::Right,
                    (false, true) => PhysicalSide::Top,
                    (false, false) => PhysicalSide::Bottom,
                }
            },
            LogicalSide::Before | LogicalSide::After => {
                let before = match writing_mode {
                    WritingMode::HorizontalTb => PhysicalSide::Top,
                    WritingMode::HorizontalBt => PhysicalSide::Bottom,
                    WritingMode::VerticalLr => PhysicalSide::Left,
                    WritingMode::VerticalRl => PhysicalSide::Right,
                };
                if side == LogicalSide::Before {
                    before
                } else {
                    opposite(before)
                }
            },
        }
    }

    /// The margin on a logical side.
    pub fn logical_margin(&self, side: LogicalSide) -> Length {
        self.surround.margin.side(self.physical_side(side))
    }

    /// Sets the margin on a logical side.
    pub fn set_logical_margin(&mut self, side: LogicalSide, value: Length) {
        let side = self.physical_side(side);
        if self.surround.margin.side(side) != value {
            *Arc::make_mut(&mut self.surround).margin.side_mut(side) = value;
        }
    }

    /// The padding on a logical side.
    pub fn logical_padding(&self, side: LogicalSide) -> Length {
        self.surround.padding.side(self.physical_side(side))
    }

    /// Sets the padding on a logical side.
    pub fn set_logical_padding(&mut self, side: LogicalSide, value: Length) {
        let side = self.physical_side(side);
        if self.surround.padding.side(side) != value {
            *Arc::make_mut(&mut self.surround).padding.side_mut(side) = value;
        }
    }

    #[allow(missing_docs)]
    pub fn border(&self) -> &BorderData {
        &self.surround.border
    }

    #[allow(missing_docs)]
    pub fn background_layers(&self) -> &FillLayers {
        &self.background.layers
    }

    #[allow(missing_docs)]
    pub fn background_layers_mut(&mut self) -> &mut FillLayers {
        &mut Arc::make_mut(&mut self.background).layers
    }

    #[allow(missing_docs)]
    pub fn mask_layers(&self) -> &FillLayers {
        &self.rare_non_inherited.mask
    }

    #[allow(missing_docs)]
    pub fn mask_layers_mut(&mut self) -> &mut FillLayers {
        &mut Arc::make_mut(&mut self.rare_non_inherited).mask
    }

    #[allow(missing_docs)]
    pub fn animations(&self) -> &AnimationList {
        &self.rare_non_inherited.animations
    }

    #[allow(missing_docs)]
    pub fn animations_mut(&mut self) -> &mut AnimationList {
        &mut Arc::make_mut(&mut self.rare_non_inherited).animations
    }

    #[allow(missing_docs)]
    pub fn transitions(&self) -> &AnimationList {
        &self.rare_non_inherited.transitions
    }

    #[allow(missing_docs)]
    pub fn transitions_mut(&mut self) -> &mut AnimationList {
        &mut Arc::make_mut(&mut self.rare_non_inherited).transitions
    }

    #[allow(missing_docs)]
    pub fn counter_directives(&self) -> &CounterDirectiveMap {
        &self.rare_non_inherited.counter_directives
    }

    #[allow(missing_docs)]
    pub fn counter_directives_mut(&mut self) -> &mut CounterDirectiveMap {
        &mut Arc::make_mut(&mut self.rare_non_inherited).counter_directives
    }

    #[allow(missing_docs)]
    pub fn box_shadow(&self) -> &[ShadowData] {
        &self.rare_non_inherited.box_shadow
    }

    #[allow(missing_docs)]
    pub fn set_box_shadow(&mut self, value: Vec<ShadowData>) {
        if self.rare_non_inherited.box_shadow != value {
            Arc::make_mut(&mut self.rare_non_inherited).box_shadow = value;
        }
    }

    #[allow(missing_docs)]
    pub fn transform(&self) -> &[TransformOperation] {
        &self.rare_non_inherited.transform
    }

    #[allow(missing_docs)]
    pub fn set_transform(&mut self, value: Vec<TransformOperation>) {
        if self.rare_non_inherited.transform != value {
            Arc::make_mut(&mut self.rare_non_inherited).transform = value;
        }
    }

    #[allow(missing_docs)]
    pub fn filter(&self) -> &[FilterOperation] {
        &self.rare_non_inherited.filter
    }

    #[allow(missing_docs)]
    pub fn set_filter(&mut self, value: Vec<FilterOperation>) {
        if self.rare_non_inherited.filter != value {
            Arc::make_mut(&mut self.rare_non_inherited).filter = value;
        }
    }

    #[allow(missing_docs)]
    pub fn text_shadow(&self) -> &[ShadowData] {
        &self.rare_inherited.text_shadow
    }

    #[allow(missing_docs)]
    pub fn set_text_shadow(&mut self, value: Vec<ShadowData>) {
        if self.rare_inherited.text_shadow != value {
            Arc::make_mut(&mut self.rare_inherited).text_shadow = value;
        }
    }

    #[allow(missing_docs)]
    pub fn cursor_images(&self) -> &[CursorImage] {
        &self.rare_inherited.cursor_images
    }

    #[allow(missing_docs)]
    pub fn set_cursor_images(&mut self, value: Vec<CursorImage>) {
        if self.rare_inherited.cursor_images != value {
            Arc::make_mut(&mut self.rare_inherited).cursor_images = value;
        }
    }

    /// Whether the box is floated.
    pub fn is_floating(&self) -> bool {
        self.floating() != Float::None
    }

    /// Whether the box is absolutely or fixed positioned.
    pub fn has_out_of_flow_position(&self) -> bool {
        self.position().is_out_of_flow()
    }

    /// Whether `opacity` is below one.
    pub fn has_opacity(&self) -> bool {
        self.opacity() < 1.
    }

    #[allow(missing_docs)]
    pub fn has_transform(&self) -> bool {
        !self.rare_non_inherited.transform.is_empty()
    }

    #[allow(missing_docs)]
    pub fn has_filter(&self) -> bool {
        !self.rare_non_inherited.filter.is_empty()
    }

    /// Whether there is a mask image or a mask box image.
    pub fn has_mask(&self) -> bool {
        self.mask_layers().has_image() || self.rare_non_inherited.mask_box_image.has_image()
    }

    /// Whether the style has animations or transitions.
    pub fn has_animations_or_transitions(&self) -> bool {
        !self.animations().is_empty() || !self.transitions().is_empty()
    }

    /// Whether `overflow` in either axis is something other than `visible`.
    pub fn has_overflow_clip(&self) -> bool {
        self.overflow_x() != Overflow::Visible || self.overflow_y() != Overflow::Visible
    }

    /// Hands every pending image to `loader`. Returns whether any image was
    /// resolved.
    pub fn load_pending_images(&mut self, loader: Option<&dyn ImageLoader>) -> bool {
        let Some(loader) = loader else {
            return false;
        };
        let mut loaded = false;
        if self.background_layers().layers().iter().any(|layer| pending(&layer.image)) {
            for image in self.background_layers_mut().images_mut() {
                loaded |= resolve_pending(image, Some(loader));
            }
        }
        if self.mask_layers().layers().iter().any(|layer| pending(&layer.image)) {
            for image in self.mask_layers_mut().images_mut() {
                loaded |= resolve_pending(image, Some(loader));
            }
        }
        if pending(&self.border().image.image) {
            if let Some(ref mut image) = Arc::make_mut(&mut self.surround).border.image.image {
                loaded |= resolve_pending(image, Some(loader));
            }
        }
        if pending(&self.rare_non_inherited.mask_box_image.image) {
            if let Some(ref mut image) = Arc::make_mut(&mut self.rare_non_inherited).mask_box_image.image {
                loaded |= resolve_pending(image, Some(loader));
            }
        }
        let shape_pending = matches!(
            self.rare_non_inherited.shape_outside,
            Some(ShapeValue::Image(ref image)) if image.is_pending()
        );
        if shape_pending {
            if let Some(ShapeValue::Image(ref mut image)) =
                Arc::make_mut(&mut self.rare_non_inherited).shape_outside
            {
                loaded |= resolve_pending(image, Some(loader));
            }
        }
        if pending(&self.rare_inherited.list_style_image) {
            if let Some(ref mut image) = Arc::make_mut(&mut self.rare_inherited).list_style_image {
                loaded |= resolve_pending(image, Some(loader));
            }
        }
        if self.cursor_images().iter().any(|cursor| cursor.image.is_pending()) {
            for cursor in Arc::make_mut(&mut self.rare_inherited).cursor_images.iter_mut() {
                loaded |= resolve_pending(&mut cursor.image, Some(loader));
            }
        }
        loaded
    }

    /// The color to paint a color property with, taking the visited-link
    /// color into account.
    ///
    /// The visited color only contributes its RGB channels; alpha always
    /// comes from the unvisited color so that visited state can't be probed
    /// through transparency.
    pub fn visited_dependent_color(&self, property: PropertyId) -> RGBA {
        let unvisited = self.color_including_fallback(property, false);
        if self.inside_link() != InsideLink::InsideVisitedLink {
            return unvisited;
        }
        let visited = self.color_including_fallback(property, true);
        // A transparent visited background means no visited background.
        if visited.alpha == 0 && property == PropertyId::BackgroundColor {
            return unvisited;
        }
        RGBA::new(visited.red, visited.green, visited.blue, unvisited.alpha)
    }

    fn color_including_fallback(&self, property: PropertyId, visited_link: bool) -> RGBA {
        let rare = &self.rare_non_inherited;
        let rare_inherited = &self.rare_inherited;
        let border = &self.surround.border;
        let (unvisited, visited) = match property {
            PropertyId::BackgroundColor => (
                self.background.background_color,
                self.background.visited_link_background_color,
            ),
            PropertyId::BorderLeftColor => (border.left.color, rare.visited_link_border_left_color),
            PropertyId::BorderRightColor => {
                (border.right.color, rare.visited_link_border_right_color)
            },
            PropertyId::BorderTopColor => (border.top.color, rare.visited_link_border_top_color),
            PropertyId::BorderBottomColor => {
                (border.bottom.color, rare.visited_link_border_bottom_color)
            },
            PropertyId::OutlineColor => (
                self.background.outline.border.color,
                self.background.visited_link_outline_color,
            ),
            PropertyId::WebkitColumnRuleColor => {
                (rare.column_rule.color, rare.visited_link_column_rule_color)
            },
            PropertyId::WebkitTextDecorationColor => {
                (rare.text_decoration_color, rare.visited_link_text_decoration_color)
            },
            PropertyId::WebkitTextEmphasisColor => (
                rare_inherited.text_emphasis_color,
                rare_inherited.visited_link_text_emphasis_color,
            ),
            PropertyId::WebkitTextFillColor => (
                rare_inherited.text_fill_color,
                rare_inherited.visited_link_text_fill_color,
            ),
            PropertyId::WebkitTextStrokeColor => (
                rare_inherited.text_stroke_color,
                rare_inherited.visited_link_text_stroke_color,
            ),
            _ => {
                return if visited_link {
                    self.inherited.visited_link_color
                } else {
                    self.inherited.color
                };
            },
        };
        let current_color = if visited_link {
            self.inherited.visited_link_color
        } else {
            self.inherited.color
        };
        let color = if visited_link { visited } else { unvisited };

        // Inset and outset borders without a color of their own are painted
        // in light gray, so that their shading stays visible.
        let border_style = match property {
            PropertyId::BorderLeftColor => Some(border.left.style),
            PropertyId::BorderRightColor => Some(border.right.style),
            PropertyId::BorderTopColor => Some(border.top.style),
            PropertyId::BorderBottomColor => Some(border.bottom.style),
            PropertyId::OutlineColor => Some(self.background.outline.border.style),
            PropertyId::WebkitColumnRuleColor => Some(rare.column_rule.style),
            _ => None,
        };
        match (color, border_style) {
            (Color::CurrentColor, Some(BorderStyle::Inset | BorderStyle::Outset)) if !visited_link => {
                RGBA::opaque(238, 238, 238)
            },
            _ => color.resolve(current_color),
        }
    }
}

fn pending(image: &Option<StyleImage>) -> bool {
    image.as_ref().is_some_and(StyleImage::is_pending)
}

fn pseudo_bit(pseudo: PseudoId) -> u16 {
    1 << (pseudo as u16 - 1)
}

fn opposite(side: PhysicalSide) -> PhysicalSide {
    match side {
        PhysicalSide::Top => PhysicalSide::Bottom,
        PhysicalSide::Bottom => PhysicalSide::Top,
        PhysicalSide::Left => PhysicalSide::Right,
        PhysicalSide::Right => PhysicalSide::Left,
    }
}

style_group_accessors!(box_data {
    width: Length => set_width,
    height: Length => set_height,
    min_width: Length => set_min_width,
    min_height: Length => set_min_height,
    max_width: Length => set_max_width,
    max_height: Length => set_max_height,
    vertical_align_length: Length => set_vertical_align_length,
    z_index: i32 => set_z_index,
    has_auto_z_index: bool => set_has_auto_z_index,
    box_sizing: BoxSizing => set_box_sizing,
});

style_group_accessors!(visual {
    clip: LengthBox => set_clip,
    has_clip: bool => set_has_clip,
    text_decoration: TextDecorationLine => set_text_decoration,
});

style_path_accessors!(surround {
    offset: LengthBox => offset, set_offset;
    offset.top: Length => top, set_top;
    offset.right: Length => right, set_right;
    offset.bottom: Length => bottom, set_bottom;
    offset.left: Length => left, set_left;
    margin: LengthBox => margin, set_margin;
    margin.top: Length => margin_top, set_margin_top;
    margin.right: Length => margin_right, set_margin_right;
    margin.bottom: Length => margin_bottom, set_margin_bottom;
    margin.left: Length => margin_left, set_margin_left;
    padding: LengthBox => padding, set_padding;
    padding.top: Length => padding_top, set_padding_top;
    padding.right: Length => padding_right, set_padding_right;
    padding.bottom: Length => padding_bottom, set_padding_bottom;
    padding.left: Length => padding_left, set_padding_left;
    border.left.width: CSSFloat => border_left_width, set_border_left_width;
    border.right.width: CSSFloat => border_right_width, set_border_right_width;
    border.top.width: CSSFloat => border_top_width, set_border_top_width;
    border.bottom.width: CSSFloat => border_bottom_width, set_border_bottom_width;
    border.left.style: BorderStyle => border_left_style, set_border_left_style;
    border.right.style: BorderStyle => border_right_style, set_border_right_style;
    border.top.style: BorderStyle => border_top_style, set_border_top_style;
    border.bottom.style: BorderStyle => border_bottom_style, set_border_bottom_style;
    border.left.color: Color => border_left_color, set_border_left_color;
    border.right.color: Color => border_right_color, set_border_right_color;
    border.top.color: Color => border_top_color, set_border_top_color;
    border.bottom.color: Color => border_bottom_color, set_border_bottom_color;
    border.image: NinePieceImage => border_image, set_border_image;
    border.top_left: LengthSize => border_top_left_radius, set_border_top_left_radius;
    border.top_right: LengthSize => border_top_right_radius, set_border_top_right_radius;
    border.bottom_left: LengthSize => border_bottom_left_radius, set_border_bottom_left_radius;
    border.bottom_right: LengthSize => border_bottom_right_radius, set_border_bottom_right_radius;
});

style_path_accessors!(background {
    background_color: Color => background_color, set_background_color;
    visited_link_background_color: Color => visited_link_background_color, set_visited_link_background_color;
    outline.border.width: CSSFloat => outline_width, set_outline_width;
    outline.border.style: BorderStyle => outline_style, set_outline_style;
    outline.border.color: Color => outline_color, set_outline_color;
    outline.offset: CSSFloat => outline_offset, set_outline_offset;
    outline.is_auto: bool => outline_style_is_auto, set_outline_style_is_auto;
    visited_link_outline_color: Color => visited_link_outline_color, set_visited_link_outline_color;
});

style_group_accessors!(rare_non_inherited {
    opacity: CSSFloat => set_opacity,
    appearance: Appearance => set_appearance,
    user_drag: UserDrag => set_user_drag,
    border_fit: BorderFit => set_border_fit,
    object_fit: ObjectFit => set_object_fit,
    text_overflow: TextOverflow => set_text_overflow,
    resize: Resize => set_resize,
    transform_origin_x: Length => set_transform_origin_x,
    transform_origin_y: Length => set_transform_origin_y,
    transform_origin_z: CSSFloat => set_transform_origin_z,
    transform_style_3d: TransformStyle3D => set_transform_style_3d,
    backface_visibility: BackfaceVisibility => set_backface_visibility,
    perspective: CSSFloat => set_perspective,
    perspective_origin_x: Length => set_perspective_origin_x,
    perspective_origin_y: Length => set_perspective_origin_y,
    mask_box_image: NinePieceImage => set_mask_box_image,
    clip_path: Option<ClipPathOperation> => set_clip_path,
    shape_outside: Option<ShapeValue> => set_shape_outside,
    blend_mode: BlendMode => set_blend_mode,
    page_size: PageSize => set_page_size,
    column_count: Option<u16> => set_column_count,
    column_gap: Option<CSSFloat> => set_column_gap,
    column_width: Option<CSSFloat> => set_column_width,
    visited_link_border_left_color: Color => set_visited_link_border_left_color,
    visited_link_border_right_color: Color => set_visited_link_border_right_color,
    visited_link_border_top_color: Color => set_visited_link_border_top_color,
    visited_link_border_bottom_color: Color => set_visited_link_border_bottom_color,
    visited_link_column_rule_color: Color => set_visited_link_column_rule_color,
    text_decoration_color: Color => set_text_decoration_color,
    visited_link_text_decoration_color: Color => set_visited_link_text_decoration_color,
    text_decoration_style: TextDecorationStyle => set_text_decoration_style,
    flex_grow: CSSFloat => set_flex_grow,
    flex_shrink: CSSFloat => set_flex_shrink,
    flex_basis: Length => set_flex_basis,
    flex_direction: FlexDirection => set_flex_direction,
    flex_wrap: FlexWrap => set_flex_wrap,
    align_items: AlignItems => set_align_items,
    justify_content: JustifyContent => set_justify_content,
    order: i32 => set_order,
});

style_path_accessors!(rare_non_inherited {
    column_rule.width: CSSFloat => column_rule_width, set_column_rule_width;
    column_rule.style: BorderStyle => column_rule_style, set_column_rule_style;
    column_rule.color: Color => column_rule_color, set_column_rule_color;
});

style_group_accessors!(rare_inherited {
    effective_zoom: CSSFloat => set_effective_zoom,
    text_size_adjust: bool => set_text_size_adjust,
    color_scheme: ColorScheme => set_color_scheme,
    text_stroke_color: Color => set_text_stroke_color,
    visited_link_text_stroke_color: Color => set_visited_link_text_stroke_color,
    text_stroke_width: CSSFloat => set_text_stroke_width,
    text_fill_color: Color => set_text_fill_color,
    visited_link_text_fill_color: Color => set_visited_link_text_fill_color,
    text_emphasis_color: Color => set_text_emphasis_color,
    visited_link_text_emphasis_color: Color => set_visited_link_text_emphasis_color,
    text_emphasis_fill: TextEmphasisFill => set_text_emphasis_fill,
    text_emphasis_mark: TextEmphasisMark => set_text_emphasis_mark,
    text_indent: Length => set_text_indent,
    word_break: WordBreak => set_word_break,
    overflow_wrap: OverflowWrap => set_overflow_wrap,
    hyphens: Hyphens => set_hyphens,
    user_modify: UserModify => set_user_modify,
    user_select: UserSelect => set_user_select,
    image_rendering: ImageRendering => set_image_rendering,
    widows: i16 => set_widows,
    orphans: i16 => set_orphans,
    list_style_image: Option<StyleImage> => set_list_style_image,
});

style_group_accessors!(inherited {
    line_height: Length => set_line_height,
    horizontal_border_spacing: Au => set_horizontal_border_spacing,
    vertical_border_spacing: Au => set_vertical_border_spacing,
    color: RGBA => set_color,
    visited_link_color: RGBA => set_visited_link_color,
    letter_spacing: CSSFloat => set_letter_spacing,
    word_spacing: CSSFloat => set_word_spacing,
});

style_flag_accessors!(inherited_flags {
    empty_cells: EmptyCells => set_empty_cells,
    caption_side: CaptionSide => set_caption_side,
    list_style_type: ListStyleType => set_list_style_type,
    list_style_position: ListStylePosition => set_list_style_position,
    visibility: Visibility => set_visibility,
    text_align: TextAlign => set_text_align,
    text_transform: TextTransform => set_text_transform,
    text_decorations_in_effect: TextDecorationLine => set_text_decorations_in_effect,
    cursor: CursorKind => set_cursor,
    direction: Direction => set_direction,
    white_space: WhiteSpace => set_white_space,
    border_collapse: BorderCollapse => set_border_collapse,
    print_color_adjust: PrintColorAdjust => set_print_color_adjust,
    pointer_events: PointerEvents => set_pointer_events,
    inside_link: InsideLink => set_inside_link,
    writing_mode: WritingMode => set_writing_mode,
});

style_flag_accessors!(non_inherited_flags {
    effective_display: Display => set_effective_display,
    original_display: Display => set_original_display,
    overflow_x: Overflow => set_overflow_x,
    overflow_y: Overflow => set_overflow_y,
    vertical_align: VerticalAlign => set_vertical_align,
    clear: Clear => set_clear,
    position: Position => set_position,
    floating: Float => set_floating,
    table_layout: TableLayout => set_table_layout,
    unicode_bidi: UnicodeBidi => set_unicode_bidi,
    page_break_before: PageBreak => set_page_break_before,
    page_break_after: PageBreak => set_page_break_after,
    page_break_inside: PageBreak => set_page_break_inside,
    style_type: PseudoId => set_style_type,
    pseudo_bits: u16 => set_pseudo_bits,
    unique: bool => set_unique,
    explicit_inheritance: bool => set_explicit_inheritance,
    has_viewport_units: bool => set_has_viewport_units,
});
