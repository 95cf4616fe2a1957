/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Supported CSS properties and the code to apply them.
//!
//! Every property has an entry in the [`PropertyHandlerTable`], which knows
//! how to apply `inherit`, `initial` and a declared value for it to the style
//! under construction.
//!
//! [`PropertyHandlerTable`]: table::PropertyHandlerTable

use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

pub mod builder;
pub mod conversions;
pub mod declaration_block;
pub mod handlers;
pub mod table;
pub mod value;

pub use self::builder::StyleBuilder;
pub use self::declaration_block::{
    DeclaredValue, Importance, PropertyDeclaration, PropertyDeclarationBlock,
};
pub use self::table::PropertyHandlerTable;
pub use self::value::CssValue;

/// When a property is applied during the cascade.
///
/// Properties that other properties read while computing their own values
/// (font metrics for `em` units, zoom, writing mode, the current color) go
/// first; `line-height` depends on the final font, so it gets a phase of its
/// own between the font update and everything else.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CascadePhase {
    /// Zoom, writing mode, direction, fonts and `color`.
    HighPriority,
    /// `line-height`, applied after the font has been updated.
    LineHeight,
    /// Everything else.
    Remaining,
}

impl CascadePhase {
    /// Every phase, in application order.
    pub const ALL: [CascadePhase; 3] = [
        CascadePhase::HighPriority,
        CascadePhase::LineHeight,
        CascadePhase::Remaining,
    ];
}

macro_rules! define_properties {
    ($( $variant:ident = $css:literal, $inherited:literal, $phase:ident; )+) => {
        /// An identifier for a supported CSS property or shorthand.
        #[derive(
            Clone, Copy, Debug, EnumCount, EnumIter, EnumString, Eq, Hash, IntoStaticStr, Ord,
            PartialEq, PartialOrd,
        )]
        #[strum(ascii_case_insensitive)]
        pub enum PropertyId {
            $(
                #[allow(missing_docs)]
                #[strum(serialize = $css)]
                $variant,
            )+
        }

        impl PropertyId {
            /// Whether the property is inherited by default.
            pub fn is_inherited(self) -> bool {
                match self {
                    $( PropertyId::$variant => $inherited, )+
                }
            }

            /// The cascade phase this property is applied in.
            pub fn phase(self) -> CascadePhase {
                match self {
                    $( PropertyId::$variant => CascadePhase::$phase, )+
                }
            }
        }
    };
}

define_properties! {
    // Writing mode, zoom and direction.
    Zoom = "zoom", false, HighPriority;
    WebkitTextSizeAdjust = "-webkit-text-size-adjust", true, HighPriority;
    ColorScheme = "color-scheme", true, HighPriority;
    WebkitWritingMode = "-webkit-writing-mode", true, HighPriority;
    WebkitTextOrientation = "-webkit-text-orientation", true, HighPriority;
    Direction = "direction", true, HighPriority;

    // Fonts.
    Font = "font", true, HighPriority;
    FontFamily = "font-family", true, HighPriority;
    FontSize = "font-size", true, HighPriority;
    FontStyle = "font-style", true, HighPriority;
    FontVariant = "font-variant", true, HighPriority;
    FontWeight = "font-weight", true, HighPriority;
    TextRendering = "text-rendering", true, HighPriority;
    WebkitFontKerning = "-webkit-font-kerning", true, HighPriority;
    WebkitFontSmoothing = "-webkit-font-smoothing", true, HighPriority;
    WebkitLocale = "-webkit-locale", true, HighPriority;

    Color = "color", true, HighPriority;

    LineHeight = "line-height", true, LineHeight;

    // Backgrounds.
    Background = "background", false, Remaining;
    BackgroundAttachment = "background-attachment", false, Remaining;
    BackgroundClip = "background-clip", false, Remaining;
    BackgroundColor = "background-color", false, Remaining;
    BackgroundImage = "background-image", false, Remaining;
    BackgroundOrigin = "background-origin", false, Remaining;
    BackgroundPosition = "background-position", false, Remaining;
    BackgroundPositionX = "background-position-x", false, Remaining;
    BackgroundPositionY = "background-position-y", false, Remaining;
    BackgroundRepeat = "background-repeat", false, Remaining;
    BackgroundRepeatX = "background-repeat-x", false, Remaining;
    BackgroundRepeatY = "background-repeat-y", false, Remaining;
    BackgroundSize = "background-size", false, Remaining;
    WebkitBackgroundBlendMode = "-webkit-background-blend-mode", false, Remaining;
    WebkitBackgroundComposite = "-webkit-background-composite", false, Remaining;

    // Borders.
    Border = "border", false, Remaining;
    BorderTop = "border-top", false, Remaining;
    BorderRight = "border-right", false, Remaining;
    BorderBottom = "border-bottom", false, Remaining;
    BorderLeft = "border-left", false, Remaining;
    BorderColor = "border-color", false, Remaining;
    BorderStyle = "border-style", false, Remaining;
    BorderWidth = "border-width", false, Remaining;
    BorderTopColor = "border-top-color", false, Remaining;
    BorderRightColor = "border-right-color", false, Remaining;
    BorderBottomColor = "border-bottom-color", false, Remaining;
    BorderLeftColor = "border-left-color", false, Remaining;
    BorderTopStyle = "border-top-style", false, Remaining;
    BorderRightStyle = "border-right-style", false, Remaining;
    BorderBottomStyle = "border-bottom-style", false, Remaining;
    BorderLeftStyle = "border-left-style", false, Remaining;
    BorderTopWidth = "border-top-width", false, Remaining;
    BorderRightWidth = "border-right-width", false, Remaining;
    BorderBottomWidth = "border-bottom-width", false, Remaining;
    BorderLeftWidth = "border-left-width", false, Remaining;
    BorderRadius = "border-radius", false, Remaining;
    BorderTopLeftRadius = "border-top-left-radius", false, Remaining;
    BorderTopRightRadius = "border-top-right-radius", false, Remaining;
    BorderBottomLeftRadius = "border-bottom-left-radius", false, Remaining;
    BorderBottomRightRadius = "border-bottom-right-radius", false, Remaining;
    BorderImage = "border-image", false, Remaining;
    BorderImageOutset = "border-image-outset", false, Remaining;
    BorderImageRepeat = "border-image-repeat", false, Remaining;
    BorderImageSlice = "border-image-slice", false, Remaining;
    BorderImageSource = "border-image-source", false, Remaining;
    BorderImageWidth = "border-image-width", false, Remaining;
    BorderCollapse = "border-collapse", true, Remaining;
    BorderSpacing = "border-spacing", true, Remaining;
    WebkitBorderHorizontalSpacing = "-webkit-border-horizontal-spacing", true, Remaining;
    WebkitBorderVerticalSpacing = "-webkit-border-vertical-spacing", true, Remaining;
    WebkitBorderFit = "-webkit-border-fit", false, Remaining;

    // Outlines.
    Outline = "outline", false, Remaining;
    OutlineColor = "outline-color", false, Remaining;
    OutlineOffset = "outline-offset", false, Remaining;
    OutlineStyle = "outline-style", false, Remaining;
    OutlineWidth = "outline-width", false, Remaining;

    // Box model and positioning.
    Display = "display", false, Remaining;
    Position = "position", false, Remaining;
    Float = "float", false, Remaining;
    Clear = "clear", false, Remaining;
    Top = "top", false, Remaining;
    Right = "right", false, Remaining;
    Bottom = "bottom", false, Remaining;
    Left = "left", false, Remaining;
    Width = "width", false, Remaining;
    Height = "height", false, Remaining;
    MinWidth = "min-width", false, Remaining;
    MinHeight = "min-height", false, Remaining;
    MaxWidth = "max-width", false, Remaining;
    MaxHeight = "max-height", false, Remaining;
    BoxSizing = "box-sizing", false, Remaining;
    Margin = "margin", false, Remaining;
    MarginTop = "margin-top", false, Remaining;
    MarginRight = "margin-right", false, Remaining;
    MarginBottom = "margin-bottom", false, Remaining;
    MarginLeft = "margin-left", false, Remaining;
    WebkitMarginStart = "-webkit-margin-start", false, Remaining;
    WebkitMarginEnd = "-webkit-margin-end", false, Remaining;
    WebkitMarginBefore = "-webkit-margin-before", false, Remaining;
    WebkitMarginAfter = "-webkit-margin-after", false, Remaining;
    Padding = "padding", false, Remaining;
    PaddingTop = "padding-top", false, Remaining;
    PaddingRight = "padding-right", false, Remaining;
    PaddingBottom = "padding-bottom", false, Remaining;
    PaddingLeft = "padding-left", false, Remaining;
    WebkitPaddingStart = "-webkit-padding-start", false, Remaining;
    WebkitPaddingEnd = "-webkit-padding-end", false, Remaining;
    WebkitPaddingBefore = "-webkit-padding-before", false, Remaining;
    WebkitPaddingAfter = "-webkit-padding-after", false, Remaining;
    Overflow = "overflow", false, Remaining;
    OverflowX = "overflow-x", false, Remaining;
    OverflowY = "overflow-y", false, Remaining;
    Clip = "clip", false, Remaining;
    ZIndex = "z-index", false, Remaining;
    VerticalAlign = "vertical-align", false, Remaining;
    Visibility = "visibility", true, Remaining;
    UnicodeBidi = "unicode-bidi", false, Remaining;
    Opacity = "opacity", false, Remaining;
    Resize = "resize", false, Remaining;
    Cursor = "cursor", true, Remaining;
    PointerEvents = "pointer-events", true, Remaining;
    ObjectFit = "object-fit", false, Remaining;
    ImageRendering = "image-rendering", true, Remaining;
    WebkitAppearance = "-webkit-appearance", false, Remaining;
    WebkitUserDrag = "-webkit-user-drag", false, Remaining;
    WebkitUserModify = "-webkit-user-modify", true, Remaining;
    WebkitUserSelect = "-webkit-user-select", true, Remaining;
    WebkitPrintColorAdjust = "-webkit-print-color-adjust", true, Remaining;

    // Tables and lists.
    TableLayout = "table-layout", false, Remaining;
    CaptionSide = "caption-side", true, Remaining;
    EmptyCells = "empty-cells", true, Remaining;
    ListStyle = "list-style", true, Remaining;
    ListStyleImage = "list-style-image", true, Remaining;
    ListStylePosition = "list-style-position", true, Remaining;
    ListStyleType = "list-style-type", true, Remaining;
    CounterIncrement = "counter-increment", false, Remaining;
    CounterReset = "counter-reset", false, Remaining;

    // Paged media.
    PageBreakAfter = "page-break-after", false, Remaining;
    PageBreakBefore = "page-break-before", false, Remaining;
    PageBreakInside = "page-break-inside", false, Remaining;
    Orphans = "orphans", true, Remaining;
    Widows = "widows", true, Remaining;
    Size = "size", false, Remaining;

    // Text.
    TextAlign = "text-align", true, Remaining;
    TextDecoration = "text-decoration", false, Remaining;
    TextIndent = "text-indent", true, Remaining;
    TextOverflow = "text-overflow", false, Remaining;
    TextShadow = "text-shadow", true, Remaining;
    TextTransform = "text-transform", true, Remaining;
    WhiteSpace = "white-space", true, Remaining;
    WordBreak = "word-break", true, Remaining;
    WordWrap = "word-wrap", true, Remaining;
    LetterSpacing = "letter-spacing", true, Remaining;
    WordSpacing = "word-spacing", true, Remaining;
    WebkitHyphens = "-webkit-hyphens", true, Remaining;
    WebkitTextDecorationColor = "-webkit-text-decoration-color", false, Remaining;
    WebkitTextDecorationStyle = "-webkit-text-decoration-style", false, Remaining;
    WebkitTextDecorationsInEffect = "-webkit-text-decorations-in-effect", true, Remaining;
    WebkitTextEmphasisColor = "-webkit-text-emphasis-color", true, Remaining;
    WebkitTextEmphasisStyle = "-webkit-text-emphasis-style", true, Remaining;
    WebkitTextFillColor = "-webkit-text-fill-color", true, Remaining;
    WebkitTextStrokeColor = "-webkit-text-stroke-color", true, Remaining;
    WebkitTextStrokeWidth = "-webkit-text-stroke-width", true, Remaining;

    // Effects and transforms.
    BoxShadow = "box-shadow", false, Remaining;
    MixBlendMode = "mix-blend-mode", false, Remaining;
    WebkitFilter = "-webkit-filter", false, Remaining;
    WebkitClipPath = "-webkit-clip-path", false, Remaining;
    WebkitShapeOutside = "-webkit-shape-outside", false, Remaining;
    WebkitTransform = "-webkit-transform", false, Remaining;
    WebkitTransformOrigin = "-webkit-transform-origin", false, Remaining;
    WebkitTransformOriginX = "-webkit-transform-origin-x", false, Remaining;
    WebkitTransformOriginY = "-webkit-transform-origin-y", false, Remaining;
    WebkitTransformOriginZ = "-webkit-transform-origin-z", false, Remaining;
    WebkitTransformStyle = "-webkit-transform-style", false, Remaining;
    WebkitBackfaceVisibility = "-webkit-backface-visibility", false, Remaining;
    WebkitPerspective = "-webkit-perspective", false, Remaining;
    WebkitPerspectiveOrigin = "-webkit-perspective-origin", false, Remaining;
    WebkitPerspectiveOriginX = "-webkit-perspective-origin-x", false, Remaining;
    WebkitPerspectiveOriginY = "-webkit-perspective-origin-y", false, Remaining;

    // Masks.
    WebkitMaskClip = "-webkit-mask-clip", false, Remaining;
    WebkitMaskComposite = "-webkit-mask-composite", false, Remaining;
    WebkitMaskImage = "-webkit-mask-image", false, Remaining;
    WebkitMaskOrigin = "-webkit-mask-origin", false, Remaining;
    WebkitMaskPosition = "-webkit-mask-position", false, Remaining;
    WebkitMaskPositionX = "-webkit-mask-position-x", false, Remaining;
    WebkitMaskPositionY = "-webkit-mask-position-y", false, Remaining;
    WebkitMaskRepeat = "-webkit-mask-repeat", false, Remaining;
    WebkitMaskRepeatX = "-webkit-mask-repeat-x", false, Remaining;
    WebkitMaskRepeatY = "-webkit-mask-repeat-y", false, Remaining;
    WebkitMaskSize = "-webkit-mask-size", false, Remaining;
    WebkitMaskSourceType = "-webkit-mask-source-type", false, Remaining;
    WebkitMaskBoxImage = "-webkit-mask-box-image", false, Remaining;
    WebkitMaskBoxImageOutset = "-webkit-mask-box-image-outset", false, Remaining;
    WebkitMaskBoxImageRepeat = "-webkit-mask-box-image-repeat", false, Remaining;
    WebkitMaskBoxImageSlice = "-webkit-mask-box-image-slice", false, Remaining;
    WebkitMaskBoxImageSource = "-webkit-mask-box-image-source", false, Remaining;
    WebkitMaskBoxImageWidth = "-webkit-mask-box-image-width", false, Remaining;

    // Multi-column layout.
    WebkitColumns = "-webkit-columns", false, Remaining;
    WebkitColumnCount = "-webkit-column-count", false, Remaining;
    WebkitColumnGap = "-webkit-column-gap", false, Remaining;
    WebkitColumnWidth = "-webkit-column-width", false, Remaining;
    WebkitColumnRule = "-webkit-column-rule", false, Remaining;
    WebkitColumnRuleColor = "-webkit-column-rule-color", false, Remaining;
    WebkitColumnRuleStyle = "-webkit-column-rule-style", false, Remaining;
    WebkitColumnRuleWidth = "-webkit-column-rule-width", false, Remaining;

    // Flexible boxes.
    WebkitFlex = "-webkit-flex", false, Remaining;
    WebkitFlexFlow = "-webkit-flex-flow", false, Remaining;
    WebkitFlexGrow = "-webkit-flex-grow", false, Remaining;
    WebkitFlexShrink = "-webkit-flex-shrink", false, Remaining;
    WebkitFlexBasis = "-webkit-flex-basis", false, Remaining;
    WebkitFlexDirection = "-webkit-flex-direction", false, Remaining;
    WebkitFlexWrap = "-webkit-flex-wrap", false, Remaining;
    WebkitAlignItems = "-webkit-align-items", false, Remaining;
    WebkitJustifyContent = "-webkit-justify-content", false, Remaining;
    WebkitOrder = "-webkit-order", false, Remaining;

    // Animations and transitions.
    WebkitAnimation = "-webkit-animation", false, Remaining;
    WebkitAnimationDelay = "-webkit-animation-delay", false, Remaining;
    WebkitAnimationDirection = "-webkit-animation-direction", false, Remaining;
    WebkitAnimationDuration = "-webkit-animation-duration", false, Remaining;
    WebkitAnimationFillMode = "-webkit-animation-fill-mode", false, Remaining;
    WebkitAnimationIterationCount = "-webkit-animation-iteration-count", false, Remaining;
    WebkitAnimationName = "-webkit-animation-name", false, Remaining;
    WebkitAnimationPlayState = "-webkit-animation-play-state", false, Remaining;
    WebkitAnimationTimingFunction = "-webkit-animation-timing-function", false, Remaining;
    WebkitTransition = "-webkit-transition", false, Remaining;
    WebkitTransitionDelay = "-webkit-transition-delay", false, Remaining;
    WebkitTransitionDuration = "-webkit-transition-duration", false, Remaining;
    WebkitTransitionProperty = "-webkit-transition-property", false, Remaining;
    WebkitTransitionTimingFunction = "-webkit-transition-timing-function", false, Remaining;
}

impl PropertyId {
    /// Looks up a property by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<PropertyId> {
        name.parse().ok()
    }

    /// The CSS name of this property.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The number of property ids; table sizes are based on it.
    pub const fn count() -> usize {
        <PropertyId as EnumCount>::COUNT
    }

    /// Every property id, in declaration order.
    pub fn all() -> impl Iterator<Item = PropertyId> {
        <PropertyId as strum::IntoEnumIterator>::iter()
    }

    /// Whether a declaration that only applies to visited links can set this
    /// property.
    ///
    /// Only colors can differ between visited and unvisited links, and only
    /// in ways that don't change layout.
    pub fn is_valid_for_visited_link(self) -> bool {
        matches!(
            self,
            PropertyId::BackgroundColor |
                PropertyId::BorderLeftColor |
                PropertyId::BorderRightColor |
                PropertyId::BorderTopColor |
                PropertyId::BorderBottomColor |
                PropertyId::Color |
                PropertyId::OutlineColor |
                PropertyId::WebkitColumnRuleColor |
                PropertyId::WebkitTextDecorationColor |
                PropertyId::WebkitTextEmphasisColor |
                PropertyId::WebkitTextFillColor |
                PropertyId::WebkitTextStrokeColor
        )
    }

    /// Whether declarations of region-scoped rules can set this property.
    pub fn is_valid_for_region(self) -> bool {
        matches!(self, PropertyId::BackgroundColor | PropertyId::Color)
    }
}
