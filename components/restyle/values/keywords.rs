/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Keyword-valued properties.

define_css_keyword_enum!(Display:
    "inline" => Inline,
    "block" => Block,
    "list-item" => ListItem,
    "run-in" => RunIn,
    "compact" => Compact,
    "inline-block" => InlineBlock,
    "table" => Table,
    "inline-table" => InlineTable,
    "table-row-group" => TableRowGroup,
    "table-header-group" => TableHeaderGroup,
    "table-footer-group" => TableFooterGroup,
    "table-row" => TableRow,
    "table-column-group" => TableColumnGroup,
    "table-column" => TableColumn,
    "table-cell" => TableCell,
    "table-caption" => TableCaption,
    "-webkit-box" => WebkitBox,
    "-webkit-inline-box" => WebkitInlineBox,
    "-webkit-flex" => Flex,
    "-webkit-inline-flex" => InlineFlex,
    "none" => None,
);

impl Display {
    /// Whether this display value is one of the table-internal or table
    /// display types.
    pub fn is_table_like(self) -> bool {
        matches!(
            self,
            Display::Table |
                Display::InlineTable |
                Display::TableRowGroup |
                Display::TableHeaderGroup |
                Display::TableFooterGroup |
                Display::TableRow |
                Display::TableColumnGroup |
                Display::TableColumn |
                Display::TableCell |
                Display::TableCaption
        )
    }

    /// Whether this display value generates a flex container.
    pub fn is_flex_container(self) -> bool {
        matches!(
            self,
            Display::Flex | Display::InlineFlex | Display::WebkitBox | Display::WebkitInlineBox
        )
    }

    /// The block-level equivalent of this display value, as used when an
    /// element gets floated, positioned out of flow or is the root.
    pub fn blockified(self) -> Display {
        match self {
            Display::InlineTable => Display::Table,
            Display::WebkitInlineBox => Display::WebkitBox,
            Display::InlineFlex => Display::Flex,
            Display::Table |
            Display::Block |
            Display::WebkitBox |
            Display::Flex |
            Display::ListItem |
            Display::None => self,
            _ => Display::Block,
        }
    }
}

define_css_keyword_enum!(Position:
    "static" => Static,
    "relative" => Relative,
    "absolute" => Absolute,
    "fixed" => Fixed,
);

impl Position {
    /// Whether a box with this position is taken out of flow.
    pub fn is_out_of_flow(self) -> bool {
        matches!(self, Position::Absolute | Position::Fixed)
    }
}

define_css_keyword_enum!(Float:
    "none" => None,
    "left" => Left,
    "right" => Right,
);

define_css_keyword_enum!(Clear:
    "none" => None,
    "left" => Left,
    "right" => Right,
    "both" => Both,
);

define_css_keyword_enum!(Overflow:
    "visible" => Visible,
    "hidden" => Hidden,
    "scroll" => Scroll,
    "auto" => Auto,
    "overlay" => Overlay,
    "-webkit-marquee" => Marquee,
);

define_css_keyword_enum!(Visibility:
    "visible" => Visible,
    "hidden" => Hidden,
    "collapse" => Collapse,
);

define_css_keyword_enum!(VerticalAlign:
    "baseline" => Baseline,
    "middle" => Middle,
    "sub" => Sub,
    "super" => Super,
    "text-top" => TextTop,
    "text-bottom" => TextBottom,
    "top" => Top,
    "bottom" => Bottom,
    "-webkit-baseline-middle" => BaselineMiddle,
    "-internal-length" => Length,
);

define_css_keyword_enum!(TableLayout:
    "auto" => Auto,
    "fixed" => Fixed,
);

define_css_keyword_enum!(BorderCollapse:
    "separate" => Separate,
    "collapse" => Collapse,
);

define_css_keyword_enum!(EmptyCells:
    "show" => Show,
    "hide" => Hide,
);

define_css_keyword_enum!(CaptionSide:
    "top" => Top,
    "bottom" => Bottom,
    "left" => Left,
    "right" => Right,
);

define_css_keyword_enum!(ListStylePosition:
    "outside" => Outside,
    "inside" => Inside,
);

define_css_keyword_enum!(ListStyleType:
    "disc" => Disc,
    "circle" => Circle,
    "square" => Square,
    "decimal" => Decimal,
    "decimal-leading-zero" => DecimalLeadingZero,
    "lower-roman" => LowerRoman,
    "upper-roman" => UpperRoman,
    "lower-greek" => LowerGreek,
    "lower-alpha" => LowerAlpha,
    "lower-latin" => LowerLatin,
    "upper-alpha" => UpperAlpha,
    "upper-latin" => UpperLatin,
    "armenian" => Armenian,
    "georgian" => Georgian,
    "hebrew" => Hebrew,
    "cjk-ideographic" => CjkIdeographic,
    "hiragana" => Hiragana,
    "katakana" => Katakana,
    "none" => None,
);

define_css_keyword_enum!(TextAlign:
    "-webkit-auto" => Auto,
    "left" => Left,
    "right" => Right,
    "center" => Center,
    "justify" => Justify,
    "-webkit-left" => WebkitLeft,
    "-webkit-right" => WebkitRight,
    "-webkit-center" => WebkitCenter,
    "start" => Start,
    "end" => End,
);

define_css_keyword_enum!(TextTransform:
    "none" => None,
    "capitalize" => Capitalize,
    "uppercase" => Uppercase,
    "lowercase" => Lowercase,
);

define_css_keyword_enum!(WhiteSpace:
    "normal" => Normal,
    "pre" => Pre,
    "pre-wrap" => PreWrap,
    "pre-line" => PreLine,
    "nowrap" => NoWrap,
    "-webkit-nowrap" => KhtmlNoWrap,
);

define_css_keyword_enum!(Direction:
    "ltr" => Ltr,
    "rtl" => Rtl,
);

define_css_keyword_enum!(WritingMode:
    "horizontal-tb" => HorizontalTb,
    "vertical-rl" => VerticalRl,
    "vertical-lr" => VerticalLr,
    "horizontal-bt" => HorizontalBt,
);

impl WritingMode {
    /// Whether lines run horizontally.
    pub fn is_horizontal(self) -> bool {
        matches!(self, WritingMode::HorizontalTb | WritingMode::HorizontalBt)
    }

    /// Whether the block direction is flipped (bottom-to-top or
    /// right-to-left).
    pub fn is_flipped_blocks(self) -> bool {
        matches!(self, WritingMode::HorizontalBt | WritingMode::VerticalRl)
    }
}

define_css_keyword_enum!(TextOrientation:
    "vertical-right" => VerticalRight,
    "upright" => Upright,
    "sideways" => Sideways,
    "sideways-right" => SidewaysRight,
);

define_css_keyword_enum!(UnicodeBidi:
    "normal" => Normal,
    "embed" => Embed,
    "bidi-override" => Override,
    "-webkit-isolate" => Isolate,
    "-webkit-plaintext" => Plaintext,
);

define_css_keyword_enum!(BoxSizing:
    "content-box" => ContentBox,
    "border-box" => BorderBox,
);

define_css_keyword_enum!(PageBreak:
    "auto" => Auto,
    "always" => Always,
    "avoid" => Avoid,
);

define_css_keyword_enum!(WordBreak:
    "normal" => Normal,
    "break-all" => BreakAll,
    "break-word" => BreakWord,
);

define_css_keyword_enum!(OverflowWrap:
    "normal" => Normal,
    "break-word" => BreakWord,
);

define_css_keyword_enum!(TextOverflow:
    "clip" => Clip,
    "ellipsis" => Ellipsis,
);

define_css_keyword_enum!(CursorKind:
    "auto" => Auto,
    "crosshair" => Crosshair,
    "default" => Default,
    "pointer" => Pointer,
    "move" => Move,
    "vertical-text" => VerticalText,
    "cell" => Cell,
    "context-menu" => ContextMenu,
    "alias" => Alias,
    "progress" => Progress,
    "no-drop" => NoDrop,
    "not-allowed" => NotAllowed,
    "-webkit-zoom-in" => ZoomIn,
    "-webkit-zoom-out" => ZoomOut,
    "e-resize" => EResize,
    "ne-resize" => NeResize,
    "nw-resize" => NwResize,
    "n-resize" => NResize,
    "se-resize" => SeResize,
    "sw-resize" => SwResize,
    "s-resize" => SResize,
    "w-resize" => WResize,
    "ew-resize" => EwResize,
    "ns-resize" => NsResize,
    "col-resize" => ColResize,
    "row-resize" => RowResize,
    "text" => Text,
    "wait" => Wait,
    "help" => Help,
    "all-scroll" => AllScroll,
    "-webkit-grab" => Grab,
    "-webkit-grabbing" => Grabbing,
    "copy" => Copy,
    "none" => None,
);

define_css_keyword_enum!(PointerEvents:
    "auto" => Auto,
    "none" => None,
    "visiblepainted" => VisiblePainted,
    "visiblefill" => VisibleFill,
    "visiblestroke" => VisibleStroke,
    "visible" => Visible,
    "painted" => Painted,
    "fill" => Fill,
    "stroke" => Stroke,
    "all" => All,
);

define_css_keyword_enum!(UserSelect:
    "none" => None,
    "text" => Text,
    "all" => All,
);

define_css_keyword_enum!(UserModify:
    "read-only" => ReadOnly,
    "read-write" => ReadWrite,
    "read-write-plaintext-only" => ReadWritePlaintextOnly,
);

define_css_keyword_enum!(UserDrag:
    "auto" => Auto,
    "none" => None,
    "element" => Element,
);

define_css_keyword_enum!(Hyphens:
    "none" => None,
    "manual" => Manual,
    "auto" => Auto,
);

define_css_keyword_enum!(ImageRendering:
    "auto" => Auto,
    "optimizespeed" => OptimizeSpeed,
    "optimizequality" => OptimizeQuality,
    "-webkit-optimize-contrast" => OptimizeContrast,
);

define_css_keyword_enum!(PrintColorAdjust:
    "economy" => Economy,
    "exact" => Exact,
);

define_css_keyword_enum!(Resize:
    "none" => None,
    "both" => Both,
    "horizontal" => Horizontal,
    "vertical" => Vertical,
);

define_css_keyword_enum!(Appearance:
    "none" => None,
    "checkbox" => Checkbox,
    "radio" => Radio,
    "push-button" => PushButton,
    "square-button" => SquareButton,
    "button" => Button,
    "listbox" => Listbox,
    "menulist" => Menulist,
    "menulist-button" => MenulistButton,
    "progress-bar" => ProgressBar,
    "slider-horizontal" => SliderHorizontal,
    "slider-vertical" => SliderVertical,
    "searchfield" => Searchfield,
    "textfield" => Textfield,
    "textarea" => Textarea,
);

define_css_keyword_enum!(ObjectFit:
    "fill" => Fill,
    "contain" => Contain,
    "cover" => Cover,
    "none" => None,
    "scale-down" => ScaleDown,
);

define_css_keyword_enum!(BorderFit:
    "border" => Border,
    "lines" => Lines,
);

define_css_keyword_enum!(BlendMode:
    "normal" => Normal,
    "multiply" => Multiply,
    "screen" => Screen,
    "overlay" => Overlay,
    "darken" => Darken,
    "lighten" => Lighten,
    "color-dodge" => ColorDodge,
    "color-burn" => ColorBurn,
    "hard-light" => HardLight,
    "soft-light" => SoftLight,
    "difference" => Difference,
    "exclusion" => Exclusion,
    "hue" => Hue,
    "saturation" => Saturation,
    "color" => Color,
    "luminosity" => Luminosity,
);

define_css_keyword_enum!(BackfaceVisibility:
    "visible" => Visible,
    "hidden" => Hidden,
);

define_css_keyword_enum!(TransformStyle3D:
    "flat" => Flat,
    "preserve-3d" => Preserve3D,
);

define_css_keyword_enum!(FlexDirection:
    "row" => Row,
    "row-reverse" => RowReverse,
    "column" => Column,
    "column-reverse" => ColumnReverse,
);

define_css_keyword_enum!(FlexWrap:
    "nowrap" => NoWrap,
    "wrap" => Wrap,
    "wrap-reverse" => WrapReverse,
);

define_css_keyword_enum!(AlignItems:
    "auto" => Auto,
    "flex-start" => FlexStart,
    "flex-end" => FlexEnd,
    "center" => Center,
    "stretch" => Stretch,
    "baseline" => Baseline,
);

define_css_keyword_enum!(JustifyContent:
    "flex-start" => FlexStart,
    "flex-end" => FlexEnd,
    "center" => Center,
    "space-between" => SpaceBetween,
    "space-around" => SpaceAround,
);

define_css_keyword_enum!(TextDecorationStyle:
    "solid" => Solid,
    "double" => Double,
    "dotted" => Dotted,
    "dashed" => Dashed,
    "wavy" => Wavy,
);

define_css_keyword_enum!(TextEmphasisFill:
    "filled" => Filled,
    "open" => Open,
);

define_css_keyword_enum!(TextEmphasisMark:
    "none" => None,
    "dot" => Dot,
    "circle" => Circle,
    "double-circle" => DoubleCircle,
    "triangle" => Triangle,
    "sesame" => Sesame,
);

define_css_keyword_enum!(TextRendering:
    "auto" => Auto,
    "optimizespeed" => OptimizeSpeed,
    "optimizelegibility" => OptimizeLegibility,
    "geometricprecision" => GeometricPrecision,
);

define_css_keyword_enum!(FontKerning:
    "auto" => Auto,
    "normal" => Normal,
    "none" => None,
);

define_css_keyword_enum!(FontSmoothing:
    "auto" => Auto,
    "none" => None,
    "antialiased" => Antialiased,
    "subpixel-antialiased" => SubpixelAntialiased,
);

define_css_keyword_enum!(FontStyle:
    "normal" => Normal,
    "italic" => Italic,
    "oblique" => Oblique,
);

define_css_keyword_enum!(FontVariant:
    "normal" => Normal,
    "small-caps" => SmallCaps,
);

define_css_keyword_enum!(ColorScheme:
    "normal" => Normal,
    "light" => Light,
    "dark" => Dark,
);

define_css_keyword_enum!(MaskSourceType:
    "alpha" => Alpha,
    "luminance" => Luminance,
);

/// The kind of style a `ComputedStyle` was resolved for: the element itself or
/// one of its pseudo-elements.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PseudoId {
    /// The element's own style.
    NoPseudo = 0,
    /// `::first-line`.
    FirstLine = 1,
    /// `::first-letter`.
    FirstLetter = 2,
    /// `::before`.
    Before = 3,
    /// `::after`.
    After = 4,
    /// `::selection`.
    Selection = 5,
    /// `::-webkit-scrollbar`.
    Scrollbar = 6,
    /// `::-webkit-scrollbar-thumb`.
    ScrollbarThumb = 7,
    /// `::-webkit-scrollbar-track`.
    ScrollbarTrack = 8,
    /// `::-webkit-resizer`.
    Resizer = 9,
}

impl PseudoId {
    /// Every public pseudo-element, in id order.
    pub const ALL_PUBLIC: [PseudoId; 9] = [
        PseudoId::FirstLine,
        PseudoId::FirstLetter,
        PseudoId::Before,
        PseudoId::After,
        PseudoId::Selection,
        PseudoId::Scrollbar,
        PseudoId::ScrollbarThumb,
        PseudoId::ScrollbarTrack,
        PseudoId::Resizer,
    ];

    /// Maps a pseudo-element name (without the colons) to its id.
    pub fn from_name(name: &str) -> Option<PseudoId> {
        match_ignore_ascii_case(name, &PSEUDO_ELEMENT_NAMES)
    }

    /// The name of the pseudo-element, without the colons. Empty for
    /// `NoPseudo`.
    pub fn name(self) -> &'static str {
        PSEUDO_ELEMENT_NAMES
            .iter()
            .find(|&&(_, pseudo)| pseudo == self)
            .map_or("", |&(name, _)| name)
    }

    /// Whether the pseudo-element styles are eagerly computed with the
    /// element and therefore recorded in the element's pseudo bits.
    pub fn is_public(self) -> bool {
        self != PseudoId::NoPseudo
    }
}

const PSEUDO_ELEMENT_NAMES: [(&str, PseudoId); 9] = [
    ("first-line", PseudoId::FirstLine),
    ("first-letter", PseudoId::FirstLetter),
    ("before", PseudoId::Before),
    ("after", PseudoId::After),
    ("selection", PseudoId::Selection),
    ("-webkit-scrollbar", PseudoId::Scrollbar),
    ("-webkit-scrollbar-thumb", PseudoId::ScrollbarThumb),
    ("-webkit-scrollbar-track", PseudoId::ScrollbarTrack),
    ("-webkit-resizer", PseudoId::Resizer),
];

fn match_ignore_ascii_case<T: Copy>(name: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, value)| value)
}
