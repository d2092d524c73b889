//! The enumerated values of the attribute vocabulary.

use pdf_writer::Name;

use crate::attribute::AttrValue;

/// A name from the closed vocabulary of attribute values.
///
/// Keywords can only be obtained from the typed value enums of this module, so an
/// attribute set can never contain a name that the vocabulary doesn't define.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keyword(&'static str);

impl Keyword {
    /// The keyword as a string.
    pub fn as_str(self) -> &'static str {
        self.0
    }

    pub(crate) fn to_pdf(self) -> Name<'static> {
        Name(self.0.as_bytes())
    }
}

/// Defines a value enum together with its keyword and its conversion into an
/// attribute value.
macro_rules! keywords {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
        }

        impl $name {
            /// The keyword of the value.
            pub fn keyword(self) -> Keyword {
                match self {
                    $($name::$variant => Keyword(stringify!($variant)),)*
                }
            }
        }

        impl From<$name> for AttrValue {
            fn from(value: $name) -> Self {
                AttrValue::Name(value.keyword())
            }
        }
    };
}

keywords! {
    /// The alignment of text within a line, relative to the inline progression.
    TextAlign {
        /// Aligned with the start edge.
        Start,
        /// Centered.
        Center,
        /// Aligned with the end edge.
        End,
        /// Aligned with both edges.
        Justify,
    }
}

keywords! {
    /// The alignment of content in the block-progression direction, used for table
    /// cells.
    BlockAlign {
        /// Aligned with the before edge.
        Before,
        /// Centered.
        Middle,
        /// Aligned with the after edge.
        After,
    }
}

keywords! {
    /// The alignment of content in the inline-progression direction, used for
    /// table cells.
    InlineAlign {
        /// Aligned with the start edge.
        Start,
        /// Centered.
        Center,
        /// Aligned with the end edge.
        End,
    }
}

keywords! {
    /// The style of a border.
    BorderStyle {
        /// No border on that side.
        None,
        /// A solid line.
        Solid,
        /// A dashed line.
        Dashed,
        /// A dotted line.
        Dotted,
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
}

keywords! {
    /// The numbering of list items.
    ListNumbering {
        /// No numbering.
        None,
        /// Decimal numbers.
        Decimal,
        /// Uppercase Roman numerals.
        UpperRoman,
        /// Lowercase Roman numerals.
        LowerRoman,
        /// Uppercase letters.
        UpperAlpha,
        /// Lowercase letters.
        LowerAlpha,
    }
}

keywords! {
    /// The kind of a text decoration.
    TextDecorationType {
        /// A line below the text.
        Underline,
        /// A line through the text.
        LineThrough,
    }
}
