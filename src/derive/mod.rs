//! Deriving standard structure attributes from laid-out nodes.
//!
//! The [`AttributeDeriver`] looks at the resolved style of a node together with the
//! structure role it is tagged with, and derives the attribute sets that describe
//! the node's appearance to assistive technology:
//!
//! - Layout attributes, whose selection depends on whether the role is a
//!   block-level, inline-level or illustration element.
//! - List attributes, for lists with a numbering.
//! - Table attributes, for table cells spanning multiple rows or columns.
//!
//! The three kinds are derived independently of each other, a table cell for
//! example usually receives both layout and table attributes. Attributes that the
//! configured [`PdfVersion`](crate::configure::PdfVersion) doesn't know are left
//! out, so a set is only committed if it still describes something there.
//!
//! # Example
//! ```
//! use krilla_attrs::attribute::{AccessibilityProperties, AttrName, Owner};
//! use krilla_attrs::derive::AttributeDeriver;
//! use krilla_attrs::geom::Rect;
//! use krilla_attrs::role::Role;
//! use krilla_attrs::style::{Edges, StyleSnapshot};
//!
//! let deriver = AttributeDeriver::new();
//! let style = StyleSnapshot::new(Rect::from_xywh(0.0, 0.0, 200.0, 30.0).unwrap())
//!     .with_paddings(Edges::all(Some(4.0)));
//!
//! let mut properties = AccessibilityProperties::new();
//! assert!(deriver.apply_layout_attributes(&Role::P, &style, &mut properties));
//!
//! let layout = properties.get(Owner::Layout).unwrap();
//! assert!(layout.contains(AttrName::Padding));
//! assert!(layout.contains(AttrName::BBox));
//! ```

use crate::attribute::{AccessibleElement, AttrName, AttributeSet, Owner};
use crate::configure::DeriveSettings;
use crate::role::{Role, RoleMap, StructureType};
use crate::style::{ElementKind, ListSymbol, StyleSnapshot};

mod layout;
pub mod map;

/// Derives attribute sets for laid-out nodes.
#[derive(Clone, Debug, Default)]
pub struct AttributeDeriver {
    settings: DeriveSettings,
    role_map: RoleMap,
}

impl AttributeDeriver {
    /// Create a new deriver with default settings and an empty role map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the settings.
    pub fn with_settings(mut self, settings: DeriveSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the role map used to resolve custom roles.
    pub fn with_role_map(mut self, role_map: RoleMap) -> Self {
        self.role_map = role_map;
        self
    }

    /// The settings of the deriver.
    pub fn settings(&self) -> &DeriveSettings {
        &self.settings
    }

    /// The role map of the deriver.
    pub fn role_map(&self) -> &RoleMap {
        &self.role_map
    }

    /// Derive the layout attributes of a node tagged with `role`.
    ///
    /// Returns `None` if there is nothing worth describing.
    pub fn layout_attributes(&self, role: &Role, style: &StyleSnapshot) -> Option<AttributeSet> {
        let role = self.role_map.resolve(role);
        let direction = self.settings.direction;
        let mut attrs = AttributeSet::new(Owner::Layout);

        layout::apply_common(style, direction, &mut attrs);
        match role.structure_type() {
            StructureType::BlockLevel => {
                layout::apply_block_level(role, style, direction, &mut attrs)
            }
            StructureType::InlineLevel => layout::apply_inline_level(style, &mut attrs),
            StructureType::Illustration => layout::apply_illustration(style, &mut attrs),
            StructureType::Grouping | StructureType::Unknown => {}
        }

        self.finish(attrs)
    }

    /// Derive the list attributes of a node. Only lists labeled with a numbering
    /// have any.
    pub fn list_attributes(&self, style: &StyleSnapshot) -> Option<AttributeSet> {
        if style.element != ElementKind::List {
            return None;
        }

        let mut attrs = AttributeSet::new(Owner::List);
        if let Some(ListSymbol::Numbering(numbering)) = &style.list_symbol {
            attrs.set(AttrName::ListNumbering, map::list_numbering(*numbering));
        }

        self.finish(attrs)
    }

    /// Derive the table attributes of a node. Only cells spanning more or less
    /// than one row or column have any.
    pub fn table_attributes(&self, style: &StyleSnapshot) -> Option<AttributeSet> {
        let mut attrs = AttributeSet::new(Owner::Table);

        if let ElementKind::Cell { row_span, col_span } = style.element {
            if row_span != 1 {
                attrs.set(AttrName::RowSpan, span(row_span));
            }
            if col_span != 1 {
                attrs.set(AttrName::ColSpan, span(col_span));
            }
        }

        self.finish(attrs)
    }

    /// Derive the layout attributes and commit them to `element`.
    ///
    /// Returns whether an attribute set was committed.
    pub fn apply_layout_attributes(
        &self,
        role: &Role,
        style: &StyleSnapshot,
        element: &mut impl AccessibleElement,
    ) -> bool {
        commit(self.layout_attributes(role, style), element)
    }

    /// Derive the list attributes and commit them to `element`.
    ///
    /// Returns whether an attribute set was committed.
    pub fn apply_list_attributes(
        &self,
        style: &StyleSnapshot,
        element: &mut impl AccessibleElement,
    ) -> bool {
        commit(self.list_attributes(style), element)
    }

    /// Derive the table attributes and commit them to `element`.
    ///
    /// Returns whether an attribute set was committed.
    pub fn apply_table_attributes(
        &self,
        style: &StyleSnapshot,
        element: &mut impl AccessibleElement,
    ) -> bool {
        commit(self.table_attributes(style), element)
    }

    fn finish(&self, mut attrs: AttributeSet) -> Option<AttributeSet> {
        attrs.retain_supported(self.settings.pdf_version);
        attrs.non_empty()
    }
}

fn span(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn commit(attrs: Option<AttributeSet>, element: &mut impl AccessibleElement) -> bool {
    match attrs {
        Some(attrs) => {
            log::trace!(
                "committing /{} attribute set with {} entries",
                attrs.owner().as_str(),
                attrs.len()
            );
            element.add_attributes(attrs);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::attribute::{
        AccessibilityProperties, AttrName, AttrValue, InlineAlign, ListNumbering, Owner,
        TextAlign,
    };
    use crate::color::rgb;
    use crate::configure::{DeriveSettings, PdfVersion, TextDirection};
    use crate::derive::AttributeDeriver;
    use crate::geom::Rect;
    use crate::role::{Role, RoleMap};
    use crate::style::{
        ElementKind, ListNumberingType, ListSymbol, StyleSnapshot, TextAlignment, Underline,
    };

    fn style() -> StyleSnapshot {
        StyleSnapshot::new(Rect::from_xywh(0.0, 0.0, 80.0, 20.0).unwrap())
    }

    #[test]
    fn grouping_with_defaults_is_discarded() {
        let deriver = AttributeDeriver::new();
        let mut props = AccessibilityProperties::new();
        assert!(!deriver.apply_layout_attributes(&Role::Sect, &style(), &mut props));
        assert!(props.is_empty());
    }

    #[test]
    fn inline_with_defaults_is_discarded() {
        let deriver = AttributeDeriver::new();
        assert_eq!(deriver.layout_attributes(&Role::Span, &style()), None);
    }

    #[test]
    fn unknown_role_only_gets_common_attributes() {
        let deriver = AttributeDeriver::new();
        let style = style()
            .with_text_alignment(Some(TextAlignment::Center))
            .with_font_color(Some(rgb::Color::black().into()));
        let attrs = deriver
            .layout_attributes(&Role::from("Custom"), &style)
            .unwrap();
        assert_eq!(attrs.len(), 1);
        assert!(attrs.contains(AttrName::Color));
    }

    #[test]
    fn inline_attributes() {
        let deriver = AttributeDeriver::new();
        let style = style().with_underlines(vec![Underline::new(None, 1.0, -1.0)]);
        let attrs = deriver.layout_attributes(&Role::Link, &style).unwrap();
        assert!(attrs.contains(AttrName::TextDecorationType));
        assert!(attrs.contains(AttrName::TextDecorationThickness));
        assert!(!attrs.contains(AttrName::BBox));
    }

    #[test]
    fn role_map_is_applied() {
        let deriver =
            AttributeDeriver::new().with_role_map(RoleMap::new().with("Cell", Role::TD));
        let style = style().with_text_alignment(Some(TextAlignment::Left));
        let attrs = deriver
            .layout_attributes(&Role::from("Cell"), &style)
            .unwrap();
        assert!(!attrs.contains(AttrName::TextAlign));
        assert_eq!(
            attrs.get(AttrName::InlineAlign),
            Some(&InlineAlign::Start.into())
        );
    }

    #[test]
    fn direction_is_threaded_through() {
        let settings = DeriveSettings::new().with_direction(TextDirection::RightToLeft);
        let deriver = AttributeDeriver::new().with_settings(settings);
        let style = style().with_text_alignment(Some(TextAlignment::Left));
        let attrs = deriver.layout_attributes(&Role::P, &style).unwrap();
        assert_eq!(attrs.get(AttrName::TextAlign), Some(&TextAlign::End.into()));
    }

    #[test]
    fn configured_version_limits_attributes() {
        let settings = DeriveSettings::new().with_pdf_version(PdfVersion::Pdf14);
        let deriver = AttributeDeriver::new().with_settings(settings);
        let style = style().with_background(Some(rgb::Color::black().into()));

        let mut props = AccessibilityProperties::new();
        assert!(!deriver.apply_layout_attributes(&Role::Div, &style, &mut props));
        assert!(props.is_empty());

        let attrs = deriver.layout_attributes(&Role::P, &style).unwrap();
        assert!(!attrs.contains(AttrName::BackgroundColor));
        assert!(attrs.contains(AttrName::BBox));

        let deriver = AttributeDeriver::new();
        assert!(deriver.apply_layout_attributes(&Role::Div, &style, &mut props));
        assert!(props
            .get(Owner::Layout)
            .unwrap()
            .contains(AttrName::BackgroundColor));
    }

    #[test]
    fn list_numbering() {
        let deriver = AttributeDeriver::new();
        let style = style()
            .with_element(ElementKind::List)
            .with_list_symbol(Some(ListSymbol::Numbering(ListNumberingType::RomanUpper)));

        let mut props = AccessibilityProperties::new();
        assert!(deriver.apply_list_attributes(&style, &mut props));
        let attrs = props.get(Owner::List).unwrap();
        assert_eq!(
            attrs.get(AttrName::ListNumbering),
            Some(&ListNumbering::UpperRoman.into())
        );
    }

    #[test]
    fn list_without_numbering() {
        let deriver = AttributeDeriver::new();
        let style = style()
            .with_element(ElementKind::List)
            .with_list_symbol(Some(ListSymbol::Text("•".to_string())));
        assert_eq!(deriver.list_attributes(&style), None);

        // Not a list at all.
        let style = style
            .with_element(ElementKind::Other)
            .with_list_symbol(Some(ListSymbol::Numbering(ListNumberingType::Decimal)));
        assert_eq!(deriver.list_attributes(&style), None);
    }

    #[test]
    fn default_spans_are_omitted() {
        let deriver = AttributeDeriver::new();
        let style = style().with_element(ElementKind::cell());
        assert_eq!(deriver.table_attributes(&style), None);
    }

    #[test]
    fn row_span() {
        let deriver = AttributeDeriver::new();
        let style = style().with_element(ElementKind::Cell {
            row_span: 2,
            col_span: 1,
        });
        let attrs = deriver.table_attributes(&style).unwrap();
        assert_eq!(attrs.owner(), Owner::Table);
        assert_eq!(attrs.get(AttrName::RowSpan), Some(&AttrValue::Integer(2)));
        assert!(!attrs.contains(AttrName::ColSpan));
    }

    #[test]
    fn table_attributes_need_a_cell() {
        let deriver = AttributeDeriver::new();
        assert_eq!(deriver.table_attributes(&style()), None);
    }
}
