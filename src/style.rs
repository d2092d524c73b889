//! The resolved style of a laid-out node.
//!
//! A [`StyleSnapshot`] is filled by the layout engine after layout has happened
//! and is only read while deriving attributes. Every property that a layout
//! engine may leave unset is optional, since "not set" and "set to zero" are
//! not always the same thing (for example for widths and heights).

use crate::color::Color;
use crate::geom::Rect;

/// Values for the four edges of a box, in top, right, bottom, left order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges<T> {
    /// The top edge.
    pub top: T,
    /// The right edge.
    pub right: T,
    /// The bottom edge.
    pub bottom: T,
    /// The left edge.
    pub left: T,
}

impl<T> Edges<T> {
    /// Create new edges.
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Use the same value for all edges.
    pub fn all(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value.clone(), value.clone(), value)
    }

    /// The edges in top, right, bottom, left order.
    pub fn into_array(self) -> [T; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// The way a border is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// A solid line.
    #[default]
    Solid,
    /// A dashed line.
    Dashed,
    /// A dotted line with square dots.
    Dotted,
    /// A dotted line with round dots.
    RoundDots,
    /// Two solid lines.
    Double,
    /// A 3D groove.
    Groove,
    /// A 3D inset.
    Inset,
    /// A 3D outset.
    Outset,
    /// A 3D ridge.
    Ridge,
}

/// A resolved border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    /// The color of the border.
    pub color: Color,
    /// The kind of the border.
    pub kind: BorderKind,
    /// The width of the border in points.
    pub width: f32,
}

impl Border {
    /// Create a new border.
    pub fn new(color: impl Into<Color>, kind: BorderKind, width: f32) -> Self {
        Self {
            color: color.into(),
            kind,
            width,
        }
    }
}

/// The alignment of text within its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Aligned to the left.
    Left,
    /// Centered.
    Center,
    /// Aligned to the right.
    Right,
    /// Justified, except for the last line.
    Justified,
    /// Justified including the last line.
    JustifiedAll,
}

/// The alignment of a block within its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Aligned to the left.
    Left,
    /// Centered.
    Center,
    /// Aligned to the right.
    Right,
}

/// A length that is either absolute or relative to the containing box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnitValue {
    /// A length in points.
    Point(f32),
    /// A percentage of the containing box.
    Percent(f32),
}

impl UnitValue {
    /// The length in points, if this is an absolute length.
    pub fn as_points(self) -> Option<f32> {
        match self {
            UnitValue::Point(value) => Some(value),
            UnitValue::Percent(_) => None,
        }
    }
}

/// A line drawn along the text, below, through or above it.
///
/// The position and the thickness can depend on the font size, each of them is
/// computed as `offset + multiplier * font_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Underline {
    /// The color of the line. If unset, the line uses the font color.
    pub color: Option<Color>,
    /// The fixed part of the thickness.
    pub thickness: f32,
    /// The font-size dependent part of the thickness.
    pub thickness_mul: f32,
    /// The fixed part of the vertical position relative to the baseline.
    pub y_position: f32,
    /// The font-size dependent part of the vertical position.
    pub y_position_mul: f32,
}

impl Underline {
    /// Create a new underline with fixed thickness and position.
    pub fn new(color: Option<Color>, thickness: f32, y_position: f32) -> Self {
        Self {
            color,
            thickness,
            thickness_mul: 0.0,
            y_position,
            y_position_mul: 0.0,
        }
    }

    /// Sets the font-size dependent multipliers.
    pub fn with_multipliers(mut self, thickness_mul: f32, y_position_mul: f32) -> Self {
        self.thickness_mul = thickness_mul;
        self.y_position_mul = y_position_mul;
        self
    }

    /// The thickness of the line at the given font size.
    pub fn thickness_at(&self, font_size: f32) -> f32 {
        self.thickness + self.thickness_mul * font_size
    }

    /// The vertical position of the line at the given font size. Positive values
    /// are above the baseline.
    pub fn y_position_at(&self, font_size: f32) -> f32 {
        self.y_position + self.y_position_mul * font_size
    }
}

/// The numbering used for the labels of a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListNumberingType {
    /// 1, 2, 3
    Decimal,
    /// I, II, III
    RomanUpper,
    /// i, ii, iii
    RomanLower,
    /// A, B, C
    EnglishUpper,
    /// a, b, c
    EnglishLower,
    /// Α, Β, Γ
    GreekUpper,
    /// α, β, γ
    GreekLower,
    /// One of the ZapfDingbats symbol sequences (1 to 4).
    ZapfDingbats(u8),
}

/// The symbol that labels the items of a list.
#[derive(Clone, Debug, PartialEq)]
pub enum ListSymbol {
    /// An automatically numbered label.
    Numbering(ListNumberingType),
    /// A fixed text used for every item, like a bullet.
    Text(String),
}

/// What kind of model element the node was laid out for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ElementKind {
    /// Any element that is neither a list nor a table cell.
    #[default]
    Other,
    /// A list.
    List,
    /// A table cell.
    Cell {
        /// The number of rows the cell spans.
        row_span: u32,
        /// The number of columns the cell spans.
        col_span: u32,
    },
}

impl ElementKind {
    /// A cell spanning a single row and column.
    pub fn cell() -> Self {
        ElementKind::Cell {
            row_span: 1,
            col_span: 1,
        }
    }

    /// Whether the element is a table cell.
    pub fn is_cell(&self) -> bool {
        matches!(self, ElementKind::Cell { .. })
    }
}

/// The resolved style and geometry of a laid-out node.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSnapshot {
    /// The model element the node belongs to.
    pub element: ElementKind,
    /// The area the node occupies after layout.
    pub bbox: Rect,
    /// The margins.
    pub margins: Edges<Option<f32>>,
    /// The paddings. Unset sides count as zero.
    pub paddings: Edges<Option<f32>>,
    /// A border that applies to all sides.
    pub border: Option<Border>,
    /// Side-specific borders, overriding [`StyleSnapshot::border`].
    pub borders: Edges<Option<Border>>,
    /// The background color.
    pub background: Option<Color>,
    /// The font color.
    pub font_color: Option<Color>,
    /// The font size in points.
    pub font_size: f32,
    /// The explicitly set width.
    pub width: Option<UnitValue>,
    /// The explicitly set height in points.
    pub height: Option<f32>,
    /// The indent of the first line.
    pub first_line_indent: Option<f32>,
    /// The alignment of the text.
    pub text_alignment: Option<TextAlignment>,
    /// The alignment of the block itself.
    pub horizontal_alignment: Option<HorizontalAlignment>,
    /// The shift of the baseline.
    pub text_rise: Option<f32>,
    /// The lines drawn along the text.
    pub underlines: Vec<Underline>,
    /// The label symbol, for lists.
    pub list_symbol: Option<ListSymbol>,
}

impl StyleSnapshot {
    /// The font size used when the layout engine doesn't resolve one.
    pub const DEFAULT_FONT_SIZE: f32 = 12.0;

    /// Create a snapshot of a node occupying `bbox` with all other properties unset.
    pub fn new(bbox: Rect) -> Self {
        Self {
            element: ElementKind::Other,
            bbox,
            margins: Edges::default(),
            paddings: Edges::default(),
            border: None,
            borders: Edges::default(),
            background: None,
            font_color: None,
            font_size: Self::DEFAULT_FONT_SIZE,
            width: None,
            height: None,
            first_line_indent: None,
            text_alignment: None,
            horizontal_alignment: None,
            text_rise: None,
            underlines: vec![],
            list_symbol: None,
        }
    }

    /// Sets [`StyleSnapshot::element`].
    pub fn with_element(mut self, element: ElementKind) -> Self {
        self.element = element;
        self
    }

    /// Sets [`StyleSnapshot::margins`].
    pub fn with_margins(mut self, margins: Edges<Option<f32>>) -> Self {
        self.margins = margins;
        self
    }

    /// Sets [`StyleSnapshot::paddings`].
    pub fn with_paddings(mut self, paddings: Edges<Option<f32>>) -> Self {
        self.paddings = paddings;
        self
    }

    /// Sets [`StyleSnapshot::border`].
    pub fn with_border(mut self, border: Option<Border>) -> Self {
        self.border = border;
        self
    }

    /// Sets [`StyleSnapshot::borders`].
    pub fn with_borders(mut self, borders: Edges<Option<Border>>) -> Self {
        self.borders = borders;
        self
    }

    /// Sets [`StyleSnapshot::background`].
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Sets [`StyleSnapshot::font_color`].
    pub fn with_font_color(mut self, font_color: Option<Color>) -> Self {
        self.font_color = font_color;
        self
    }

    /// Sets [`StyleSnapshot::font_size`].
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets [`StyleSnapshot::width`].
    pub fn with_width(mut self, width: Option<UnitValue>) -> Self {
        self.width = width;
        self
    }

    /// Sets [`StyleSnapshot::height`].
    pub fn with_height(mut self, height: Option<f32>) -> Self {
        self.height = height;
        self
    }

    /// Sets [`StyleSnapshot::first_line_indent`].
    pub fn with_first_line_indent(mut self, indent: Option<f32>) -> Self {
        self.first_line_indent = indent;
        self
    }

    /// Sets [`StyleSnapshot::text_alignment`].
    pub fn with_text_alignment(mut self, alignment: Option<TextAlignment>) -> Self {
        self.text_alignment = alignment;
        self
    }

    /// Sets [`StyleSnapshot::horizontal_alignment`].
    pub fn with_horizontal_alignment(mut self, alignment: Option<HorizontalAlignment>) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Sets [`StyleSnapshot::text_rise`].
    pub fn with_text_rise(mut self, text_rise: Option<f32>) -> Self {
        self.text_rise = text_rise;
        self
    }

    /// Sets [`StyleSnapshot::underlines`].
    pub fn with_underlines(mut self, underlines: Vec<Underline>) -> Self {
        self.underlines = underlines;
        self
    }

    /// Sets [`StyleSnapshot::list_symbol`].
    pub fn with_list_symbol(mut self, symbol: Option<ListSymbol>) -> Self {
        self.list_symbol = symbol;
        self
    }

    /// The borders of each side, falling back to the uniform border for sides
    /// that don't have a specific one.
    pub fn resolved_borders(&self) -> Edges<Option<Border>> {
        let b = &self.borders;
        Edges::new(
            b.top.or(self.border),
            b.right.or(self.border),
            b.bottom.or(self.border),
            b.left.or(self.border),
        )
    }

    /// Whether any side has a specific border.
    pub fn has_side_borders(&self) -> bool {
        self.borders.into_array().iter().any(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use crate::color::rgb;
    use crate::geom::Rect;
    use crate::style::{Border, BorderKind, Edges, StyleSnapshot, Underline};

    fn snapshot() -> StyleSnapshot {
        StyleSnapshot::new(Rect::from_xywh(0.0, 0.0, 100.0, 50.0).unwrap())
    }

    #[test]
    fn side_borders_fall_back_to_uniform_border() {
        let uniform = Border::new(rgb::Color::black(), BorderKind::Solid, 1.0);
        let top = Border::new(rgb::Color::white(), BorderKind::Dashed, 2.0);
        let style = snapshot()
            .with_border(Some(uniform))
            .with_borders(Edges::new(Some(top), None, None, None));

        assert!(style.has_side_borders());
        assert_eq!(
            style.resolved_borders(),
            Edges::new(Some(top), Some(uniform), Some(uniform), Some(uniform))
        );
    }

    #[test]
    fn underline_depends_on_font_size() {
        let underline = Underline::new(None, 1.0, -2.0).with_multipliers(0.1, 0.5);
        assert_eq!(underline.thickness_at(10.0), 2.0);
        assert_eq!(underline.y_position_at(10.0), 3.0);
    }
}
