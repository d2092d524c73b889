/*!
Deriving PDF standard structure attributes from laid-out content.

Tagged PDF files describe the visual appearance of structure elements with
standard structure attributes, such as the background color of a paragraph, the
padding of a table cell or the kind of numbering of a list. Assistive technology
relies on them to convey layout information that would otherwise only be
available visually.

This crate computes these attributes from the resolved style of a laid-out node.
It is meant to be called by a layout engine after layout has happened: you
describe a node with a [`StyleSnapshot`](style::StyleSnapshot), tag it with a
[`Role`](role::Role), and the [`AttributeDeriver`](derive::AttributeDeriver)
commits the resulting attribute sets to your structure element. The sets can
then be written into a PDF file using [pdf-writer].

# Example

```
use krilla_attrs::attribute::{AccessibilityProperties, AttrName, AttrValue, Owner};
use krilla_attrs::color::rgb;
use krilla_attrs::configure::PdfVersion;
use krilla_attrs::derive::AttributeDeriver;
use krilla_attrs::geom::Rect;
use krilla_attrs::role::Role;
use krilla_attrs::style::{Border, BorderKind, ElementKind, StyleSnapshot};
use pdf_writer::{Chunk, Ref};

let deriver = AttributeDeriver::new();

// A table cell spanning two columns, with a red background.
let style = StyleSnapshot::new(Rect::from_xywh(0.0, 0.0, 120.0, 18.0).unwrap())
    .with_element(ElementKind::Cell { row_span: 1, col_span: 2 })
    .with_background(Some(rgb::Color::new(255, 0, 0).into()))
    .with_border(Some(Border::new(rgb::Color::black(), BorderKind::Solid, 1.0)));

let mut properties = AccessibilityProperties::new();
deriver.apply_layout_attributes(&Role::TD, &style, &mut properties);
deriver.apply_table_attributes(&style, &mut properties);

let layout = properties.get(Owner::Layout).unwrap();
assert!(layout.contains(AttrName::BackgroundColor));
// Cells don't describe their borders.
assert!(!layout.contains(AttrName::BorderStyle));

let table = properties.get(Owner::Table).unwrap();
assert_eq!(table.get(AttrName::ColSpan), Some(&AttrValue::Integer(2)));

// Write the attribute sets into a PDF object.
let mut chunk = Chunk::new();
let mut array = chunk.indirect(Ref::new(1)).array();
properties.serialize(&mut array, PdfVersion::Pdf17).unwrap();
```

[pdf-writer]: https://github.com/typst/pdf-writer
*/

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod serialize;

pub mod attribute;
pub mod color;
pub mod configure;
pub mod derive;
pub mod error;
pub mod geom;
pub mod role;
pub mod sides;
pub mod style;

pub use attribute::{AccessibilityProperties, AccessibleElement, AttributeSet};
pub use derive::AttributeDeriver;
pub use error::{AttrError, AttrResult};
