//! Attribute sets, the output of attribute derivation.
//!
//! An [`AttributeSet`] corresponds to a single attribute dictionary of a structure
//! element: it has an [`Owner`] that determines which attributes may appear in it,
//! and a number of entries that map an [`AttrName`] to an [`AttrValue`].
//!
//! Attribute sets are committed to an [`AccessibleElement`]. A set that doesn't
//! contain anything beyond its owner carries no information and is never
//! committed.

use crate::color::NaiveRgbColor;
use crate::configure::PdfVersion;
use crate::geom::Rect;

pub use keyword::*;

pub mod fmt;
mod keyword;

/// The owner of an attribute set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Layout attributes.
    Layout,
    /// List attributes.
    List,
    /// Table attributes.
    Table,
}

impl Owner {
    /// The name of the owner, as written in a PDF file.
    pub fn as_str(self) -> &'static str {
        match self {
            Owner::Layout => "Layout",
            Owner::List => "List",
            Owner::Table => "Table",
        }
    }
}

/// The name of an attribute.
///
/// The variant order is the order in which entries of an attribute set are
/// stored and written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum AttrName {
    // Layout attributes common to all structure types.
    BackgroundColor,
    BorderColor,
    BorderStyle,
    BorderThickness,
    Padding,
    Color,
    // Block-level layout attributes.
    SpaceBefore,
    SpaceAfter,
    StartIndent,
    EndIndent,
    TextIndent,
    TextAlign,
    BBox,
    Width,
    Height,
    BlockAlign,
    InlineAlign,
    // Inline-level layout attributes.
    BaselineShift,
    TextDecorationType,
    TextDecorationColor,
    TextDecorationThickness,
    // List attributes.
    ListNumbering,
    // Table attributes.
    RowSpan,
    ColSpan,
}

impl AttrName {
    /// The name of the attribute, as written in a PDF file.
    pub fn as_str(self) -> &'static str {
        match self {
            AttrName::BackgroundColor => "BackgroundColor",
            AttrName::BorderColor => "BorderColor",
            AttrName::BorderStyle => "BorderStyle",
            AttrName::BorderThickness => "BorderThickness",
            AttrName::Padding => "Padding",
            AttrName::Color => "Color",
            AttrName::SpaceBefore => "SpaceBefore",
            AttrName::SpaceAfter => "SpaceAfter",
            AttrName::StartIndent => "StartIndent",
            AttrName::EndIndent => "EndIndent",
            AttrName::TextIndent => "TextIndent",
            AttrName::TextAlign => "TextAlign",
            AttrName::BBox => "BBox",
            AttrName::Width => "Width",
            AttrName::Height => "Height",
            AttrName::BlockAlign => "BlockAlign",
            AttrName::InlineAlign => "InlineAlign",
            AttrName::BaselineShift => "BaselineShift",
            AttrName::TextDecorationType => "TextDecorationType",
            AttrName::TextDecorationColor => "TextDecorationColor",
            AttrName::TextDecorationThickness => "TextDecorationThickness",
            AttrName::ListNumbering => "ListNumbering",
            AttrName::RowSpan => "RowSpan",
            AttrName::ColSpan => "ColSpan",
        }
    }

    /// The owner whose dictionaries may hold the attribute.
    pub fn owner(self) -> Owner {
        match self {
            AttrName::ListNumbering => Owner::List,
            AttrName::RowSpan | AttrName::ColSpan => Owner::Table,
            _ => Owner::Layout,
        }
    }

    /// The first PDF version that knows the attribute.
    pub fn min_version(self) -> PdfVersion {
        match self {
            AttrName::BackgroundColor
            | AttrName::BorderColor
            | AttrName::BorderStyle
            | AttrName::BorderThickness
            | AttrName::Padding
            | AttrName::Color
            | AttrName::TextDecorationType
            | AttrName::TextDecorationColor
            | AttrName::TextDecorationThickness => PdfVersion::Pdf15,
            _ => PdfVersion::Pdf14,
        }
    }
}

/// The value of an attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A real number.
    Number(f32),
    /// An integer.
    Integer(i32),
    /// An RGB color.
    Color(NaiveRgbColor),
    /// A name from the attribute vocabulary.
    Name(Keyword),
    /// A rectangle.
    Rect(Rect),
    /// An ordered list of values, for example one per side.
    Array(Vec<AttrValue>),
    /// An explicitly absent value.
    Null,
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Integer(value)
    }
}

impl From<NaiveRgbColor> for AttrValue {
    fn from(value: NaiveRgbColor) -> Self {
        AttrValue::Color(value)
    }
}

impl From<Rect> for AttrValue {
    fn from(value: Rect) -> Self {
        AttrValue::Rect(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttrValue::Null)
    }
}

/// An attribute dictionary with a fixed owner.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeSet {
    owner: Owner,
    /// Sorted by name, so entries can be located using binary search.
    entries: Vec<(AttrName, AttrValue)>,
}

impl AttributeSet {
    /// Create a new attribute set that only holds its owner.
    pub fn new(owner: Owner) -> Self {
        Self {
            owner,
            entries: Vec::new(),
        }
    }

    /// The owner of the set.
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Set an attribute, replacing a previous value.
    ///
    /// Attributes that belong to a different owner are ignored.
    pub fn set(&mut self, name: AttrName, value: impl Into<AttrValue>) {
        if name.owner() != self.owner {
            log::debug!(
                "ignoring /{} in /{} attribute set, it belongs to /{}",
                name.as_str(),
                self.owner.as_str(),
                name.owner().as_str()
            );
            return;
        }

        let value = value.into();
        match self.entries.binary_search_by_key(&name, |(n, _)| *n) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (name, value)),
        }
    }

    /// Sets an attribute and returns the set.
    pub fn with(mut self, name: AttrName, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Get the value of an attribute.
    pub fn get(&self, name: AttrName) -> Option<&AttrValue> {
        let idx = self
            .entries
            .binary_search_by_key(&name, |(n, _)| *n)
            .ok()?;
        Some(&self.entries[idx].1)
    }

    /// Whether the set holds an attribute.
    pub fn contains(&self, name: AttrName) -> bool {
        self.get(name).is_some()
    }

    /// The number of attributes, not counting the owner.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds nothing but its owner.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (AttrName, &AttrValue)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    /// Remove the attributes that `version` doesn't know yet.
    pub fn retain_supported(&mut self, version: PdfVersion) {
        self.entries.retain(|(name, _)| {
            let supported = name.min_version() <= version;
            if !supported {
                log::debug!(
                    "dropping /{}, it requires {} but targeting {}",
                    name.as_str(),
                    name.min_version().as_str(),
                    version.as_str()
                );
            }
            supported
        });
    }

    /// Returns the set if it holds at least one attribute.
    pub(crate) fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            log::trace!("discarding empty /{} attribute set", self.owner.as_str());
            None
        } else {
            Some(self)
        }
    }
}

/// An element of the structure tree that attribute sets can be committed to.
pub trait AccessibleElement {
    /// Attach an attribute set to the element. How it is merged with previously
    /// attached sets is up to the element.
    fn add_attributes(&mut self, attributes: AttributeSet);
}

/// The accessibility properties of a structure element: the attribute sets
/// committed to it, in commit order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccessibilityProperties {
    attributes: Vec<AttributeSet>,
}

impl AccessibilityProperties {
    /// Create properties without any attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed attribute sets.
    pub fn attributes(&self) -> &[AttributeSet] {
        &self.attributes
    }

    /// The first committed set with the given owner.
    pub fn get(&self, owner: Owner) -> Option<&AttributeSet> {
        self.attributes.iter().find(|a| a.owner() == owner)
    }

    /// Whether no attribute set was committed.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl AccessibleElement for AccessibilityProperties {
    fn add_attributes(&mut self, attributes: AttributeSet) {
        self.attributes.push(attributes);
    }
}
