//! Deriving layout attributes.

use crate::attribute::{AttrName, AttributeSet, BorderStyle, TextDecorationType};
use crate::configure::TextDirection;
use crate::derive::map;
use crate::role::Role;
use crate::sides::{side_order, Sides};
use crate::style::{StyleSnapshot, UnitValue};

/// Attributes that apply to all structure types.
pub(crate) fn apply_common(
    style: &StyleSnapshot,
    direction: TextDirection,
    attrs: &mut AttributeSet,
) {
    if let Some(color) = style.background.and_then(|c| c.as_rgb()) {
        attrs.set(AttrName::BackgroundColor, color);
    }

    // We can't tell yet whether all cells of a table share the same borders, so
    // writing them would repeat the same attributes for every single cell.
    if !style.element.is_cell() {
        apply_borders(style, direction, attrs);
    }

    apply_padding(style, direction, attrs);

    if let Some(color) = style.font_color.and_then(|c| c.as_rgb()) {
        attrs.set(AttrName::Color, color);
    }
}

fn apply_borders(style: &StyleSnapshot, direction: TextDirection, attrs: &mut AttributeSet) {
    if !style.has_side_borders() {
        let Some(border) = style.border else {
            return;
        };

        // Without a color, the remaining border attributes aren't written either.
        let Some(color) = border.color.as_rgb() else {
            return;
        };

        attrs.set(AttrName::BorderColor, color);
        attrs.set(AttrName::BorderStyle, map::border_style(border.kind));
        attrs.set(AttrName::BorderThickness, border.width);
        return;
    }

    let borders = style.resolved_borders().into_array();

    let colors = borders.map(|b| b.map(|b| b.color));
    match Sides::consolidate(colors, direction).map(|sides| sides.map(|c| c.as_rgb())) {
        Some(Sides::Uniform(Some(color))) => attrs.set(AttrName::BorderColor, color),
        Some(Sides::PerSide(colors)) => {
            let colors = colors.map(Option::flatten);
            if colors.iter().any(Option::is_some) {
                attrs.set(AttrName::BorderColor, Sides::PerSide(colors));
            }
        }
        Some(Sides::Uniform(None)) | None => {}
    }

    let styles = borders.map(|b| b.map(|b| map::border_style(b.kind)));
    if let Some(sides) = Sides::consolidate(styles, direction) {
        let value = sides.into_value_or(|| BorderStyle::None.into());
        attrs.set(AttrName::BorderStyle, value);
    }

    let widths = borders.map(|b| b.map(|b| b.width));
    if let Some(sides) = Sides::consolidate(widths, direction) {
        attrs.set(AttrName::BorderThickness, sides);
    }
}

fn apply_padding(style: &StyleSnapshot, direction: TextDirection, attrs: &mut AttributeSet) {
    let paddings = style
        .paddings
        .into_array()
        .map(|p| Some(p.unwrap_or(0.0)));

    match Sides::consolidate(paddings, direction) {
        Some(Sides::Uniform(padding)) if padding == 0.0 => {}
        Some(sides) => attrs.set(AttrName::Padding, sides),
        None => {}
    }
}

/// Attributes of block-level structure elements.
pub(crate) fn apply_block_level(
    role: &Role,
    style: &StyleSnapshot,
    direction: TextDirection,
    attrs: &mut AttributeSet,
) {
    let m = &style.margins;
    let margins = [m.top, m.bottom, m.left, m.right];
    let names = [
        AttrName::SpaceBefore,
        AttrName::SpaceAfter,
        AttrName::StartIndent,
        AttrName::EndIndent,
    ];
    for (name, idx) in names.into_iter().zip(side_order(direction)) {
        if let Some(margin) = margins[idx].filter(|m| *m != 0.0) {
            attrs.set(name, margin);
        }
    }

    if let Some(indent) = style.first_line_indent.filter(|i| *i != 0.0) {
        attrs.set(AttrName::TextIndent, indent);
    }

    // Table cells use `InlineAlign` instead.
    if let Some(alignment) = style.text_alignment.filter(|_| !role.is_table_cell()) {
        attrs.set(AttrName::TextAlign, map::text_align(alignment, direction));
    }

    attrs.set(AttrName::BBox, style.bbox);

    if role.is_table_cell() || *role == Role::Table {
        if let Some(width) = style.width.and_then(point_width) {
            attrs.set(AttrName::Width, width);
        }

        if let Some(height) = style.height {
            attrs.set(AttrName::Height, height);
        }
    }

    if role.is_table_cell() {
        if let Some(alignment) = style.horizontal_alignment {
            attrs.set(AttrName::BlockAlign, map::block_align(alignment, direction));
        }

        if let Some(alignment) = style
            .text_alignment
            .and_then(|a| map::inline_align(a, direction))
        {
            attrs.set(AttrName::InlineAlign, alignment);
        }
    }
}

/// Attributes of inline-level structure elements.
pub(crate) fn apply_inline_level(style: &StyleSnapshot, attrs: &mut AttributeSet) {
    if let Some(rise) = style.text_rise.filter(|r| *r != 0.0) {
        attrs.set(AttrName::BaselineShift, rise);
    }

    let Some(underline) = style.underlines.first() else {
        return;
    };

    // Only one text decoration can be described per element.
    if style.underlines.len() > 1 {
        log::debug!(
            "only tagging the first of {} underlines",
            style.underlines.len()
        );
    }

    let font_size = style.font_size;
    let decoration = if underline.y_position_at(font_size) > 0.0 {
        TextDecorationType::LineThrough
    } else {
        TextDecorationType::Underline
    };
    attrs.set(AttrName::TextDecorationType, decoration);

    if let Some(color) = underline.color.and_then(|c| c.as_rgb()) {
        attrs.set(AttrName::TextDecorationColor, color);
    }

    attrs.set(
        AttrName::TextDecorationThickness,
        underline.thickness_at(font_size),
    );
}

/// Attributes of illustration structure elements. Unlike for blocks, the size
/// is always written and falls back to the size of the bounding box.
pub(crate) fn apply_illustration(style: &StyleSnapshot, attrs: &mut AttributeSet) {
    let bbox = style.bbox;
    attrs.set(AttrName::BBox, bbox);

    let width = style.width.and_then(point_width).unwrap_or(bbox.width());
    attrs.set(AttrName::Width, width);

    let height = style.height.unwrap_or(bbox.height());
    attrs.set(AttrName::Height, height);
}

fn point_width(width: UnitValue) -> Option<f32> {
    let points = width.as_points();
    if points.is_none() {
        log::debug!("not tagging relative width {width:?}");
    }
    points
}
