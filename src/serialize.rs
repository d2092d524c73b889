//! Writing attribute sets into PDF objects.

use pdf_writer::{Array, Name, Null, Obj};

use crate::attribute::{AccessibilityProperties, AttrValue, AttributeSet};
use crate::configure::PdfVersion;
use crate::error::{AttrError, AttrResult};
use crate::geom::RectExt;

impl AttributeSet {
    /// Write the set as an attribute dictionary into `array`.
    ///
    /// Attributes the PDF version doesn't know are left out. If none remain, no
    /// dictionary is started at all. Returns whether a dictionary was written.
    pub fn serialize(&self, array: &mut Array, version: PdfVersion) -> AttrResult<bool> {
        let entries = self
            .iter()
            .filter(|(name, _)| {
                let supported = name.min_version() <= version;
                if !supported {
                    log::debug!(
                        "skipping /{}, it requires {} but writing {}",
                        name.as_str(),
                        name.min_version().as_str(),
                        version.as_str()
                    );
                }
                supported
            })
            .collect::<Vec<_>>();

        if entries.is_empty() {
            log::trace!(
                "not writing /{} attribute set, nothing left for {}",
                self.owner().as_str(),
                version.as_str()
            );
            return Ok(false);
        }

        if let Some((name, _)) = entries.iter().find(|(_, value)| !is_finite(value)) {
            return Err(AttrError::NonFiniteNumber(*name));
        }

        let mut dict = array.push().dict();
        dict.pair(Name(b"O"), Name(self.owner().as_str().as_bytes()));
        for (name, value) in entries {
            write_value(dict.insert(Name(name.as_str().as_bytes())), value);
        }

        Ok(true)
    }
}

impl AccessibilityProperties {
    /// Write all committed sets into `array`, in commit order.
    ///
    /// Returns the number of dictionaries written.
    pub fn serialize(&self, array: &mut Array, version: PdfVersion) -> AttrResult<usize> {
        let mut written = 0;
        for attributes in self.attributes() {
            if attributes.serialize(array, version)? {
                written += 1;
            }
        }

        Ok(written)
    }
}

fn is_finite(value: &AttrValue) -> bool {
    match value {
        AttrValue::Number(n) => n.is_finite(),
        AttrValue::Color(c) => c.into_f32_array().iter().all(|n| n.is_finite()),
        AttrValue::Rect(r) => [r.left(), r.top(), r.right(), r.bottom()]
            .iter()
            .all(|n| n.is_finite()),
        AttrValue::Array(items) => items.iter().all(is_finite),
        AttrValue::Integer(_) | AttrValue::Name(_) | AttrValue::Null => true,
    }
}

fn write_value(obj: Obj, value: &AttrValue) {
    match value {
        AttrValue::Number(n) => obj.primitive(*n),
        AttrValue::Integer(i) => obj.primitive(*i),
        AttrValue::Color(color) => {
            obj.array().items(color.into_f32_array());
        }
        AttrValue::Name(keyword) => obj.primitive(keyword.to_pdf()),
        AttrValue::Rect(rect) => obj.primitive(rect.to_pdf_rect()),
        AttrValue::Null => obj.primitive(Null),
        AttrValue::Array(items) => {
            let mut array = obj.array();
            for item in items {
                write_value(array.push(), item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pdf_writer::{Chunk, Ref};

    use crate::attribute::{
        AccessibilityProperties, AccessibleElement, AttrName, AttrValue, AttributeSet,
        BorderStyle, Owner, TextAlign,
    };
    use crate::color::NaiveRgbColor;
    use crate::configure::PdfVersion;
    use crate::error::AttrError;
    use crate::geom::Rect;

    fn write(set: &AttributeSet, version: PdfVersion) -> String {
        let mut chunk = Chunk::new();
        {
            let mut array = chunk.indirect(Ref::new(1)).array();
            set.serialize(&mut array, version).unwrap();
        }
        String::from_utf8(chunk.as_bytes().to_vec()).unwrap()
    }

    fn layout() -> AttributeSet {
        AttributeSet::new(Owner::Layout)
            .with(AttrName::BackgroundColor, NaiveRgbColor::new(1.0, 0.0, 0.0))
            .with(AttrName::Padding, 2.0_f32)
            .with(AttrName::TextAlign, TextAlign::Center)
            .with(
                AttrName::BBox,
                Rect::from_xywh(10.0, 20.0, 100.0, 50.0).unwrap(),
            )
    }

    #[test]
    fn layout_dictionary() {
        let pdf = write(&layout(), PdfVersion::Pdf17);
        assert!(pdf.contains("/O /Layout"));
        assert!(pdf.contains("/BackgroundColor [1 0 0]"));
        assert!(pdf.contains("/Padding 2"));
        assert!(pdf.contains("/TextAlign /Center"));
        assert!(pdf.contains("/BBox [10 20 110 70]"));
    }

    #[test]
    fn per_side_values_keep_nulls() {
        let set = AttributeSet::new(Owner::Layout)
            .with(
                AttrName::BorderStyle,
                AttrValue::Array(vec![
                    BorderStyle::Solid.into(),
                    BorderStyle::None.into(),
                    BorderStyle::Solid.into(),
                    BorderStyle::None.into(),
                ]),
            )
            .with(
                AttrName::BorderThickness,
                AttrValue::Array(vec![
                    AttrValue::Number(1.0),
                    AttrValue::Null,
                    AttrValue::Number(3.0),
                    AttrValue::Null,
                ]),
            );
        let pdf = write(&set, PdfVersion::Pdf20);
        assert!(pdf.contains("/BorderStyle [/Solid /None /Solid /None]"));
        assert!(pdf.contains("/BorderThickness [1 null 3 null]"));
    }

    #[test]
    fn old_versions_skip_newer_attributes() {
        let pdf = write(&layout(), PdfVersion::Pdf14);
        assert!(pdf.contains("/O /Layout"));
        assert!(!pdf.contains("/BackgroundColor"));
        assert!(!pdf.contains("/Padding"));
        assert!(pdf.contains("/TextAlign /Center"));
        assert!(pdf.contains("/BBox"));
    }

    #[test]
    fn nothing_left_for_old_version() {
        let set = AttributeSet::new(Owner::Layout)
            .with(AttrName::BackgroundColor, NaiveRgbColor::new(0.0, 1.0, 0.0));
        let mut props = AccessibilityProperties::new();
        props.add_attributes(set);

        let mut chunk = Chunk::new();
        {
            let mut array = chunk.indirect(Ref::new(1)).array();
            assert_eq!(props.serialize(&mut array, PdfVersion::Pdf14), Ok(0));
        }
        let pdf = String::from_utf8(chunk.as_bytes().to_vec()).unwrap();
        assert!(!pdf.contains("/O"));
        assert!(pdf.contains("[]"));
    }

    #[test]
    fn non_finite_numbers_error() {
        let set = AttributeSet::new(Owner::Layout).with(AttrName::Width, f32::NAN);
        let mut chunk = Chunk::new();
        let mut array = chunk.indirect(Ref::new(1)).array();
        let result = set.serialize(&mut array, PdfVersion::Pdf17);
        assert_eq!(result, Err(AttrError::NonFiniteNumber(AttrName::Width)));
    }

    #[test]
    fn properties_array() {
        let mut props = AccessibilityProperties::new();
        props.add_attributes(AttributeSet::new(Owner::Table).with(AttrName::RowSpan, 2));
        props.add_attributes(AttributeSet::new(Owner::Table).with(AttrName::ColSpan, 3));

        let mut chunk = Chunk::new();
        {
            let mut array = chunk.indirect(Ref::new(1)).array();
            assert_eq!(props.serialize(&mut array, PdfVersion::Pdf17), Ok(2));
        }
        let pdf = String::from_utf8(chunk.as_bytes().to_vec()).unwrap();
        assert!(pdf.contains("/O /Table"));
        assert!(pdf.contains("/RowSpan 2"));
        assert!(pdf.contains("/ColSpan 3"));
    }
}
