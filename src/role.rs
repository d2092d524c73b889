//! Structure roles and their classification.
//!
//! Which layout attributes are meaningful for a structure element depends on
//! whether it is a block-level, inline-level or illustration element. Custom roles
//! are first resolved to a standard role through a [`RoleMap`].

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// A structure role.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Role {
    // Grouping elements.
    Document,
    Part,
    Art,
    Sect,
    Div,
    BlockQuote,
    Caption,
    TOC,
    TOCI,
    Index,
    NonStruct,
    Private,
    // Block-level elements.
    P,
    H,
    /// A heading with a level from 1 to 6.
    Hn(u8),
    L,
    Lbl,
    LI,
    LBody,
    Table,
    TR,
    TH,
    TD,
    THead,
    TBody,
    TFoot,
    // Inline-level elements.
    Span,
    Quote,
    Note,
    Reference,
    BibEntry,
    Code,
    Link,
    Annot,
    Ruby,
    RB,
    RT,
    RP,
    Warichu,
    WT,
    WP,
    // Illustration elements.
    Figure,
    Formula,
    Form,
    /// A role that is not part of the standard structure types.
    Custom(String),
}

/// The classification of a structure role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructureType {
    /// Groups other elements, like sections or articles.
    Grouping,
    /// Is laid out as a block, like paragraphs, lists or tables.
    BlockLevel,
    /// Is laid out inline with text, like spans or links.
    InlineLevel,
    /// A figure, formula or form.
    Illustration,
    /// A custom role that isn't mapped to a standard one.
    Unknown,
}

impl Role {
    /// The structure type of the role.
    pub fn structure_type(&self) -> StructureType {
        use Role::*;

        match self {
            Document | Part | Art | Sect | Div | BlockQuote | Caption | TOC | TOCI | Index
            | NonStruct | Private => StructureType::Grouping,
            P | H | Hn(_) | L | Lbl | LI | LBody | Table | TR | TH | TD | THead | TBody
            | TFoot => StructureType::BlockLevel,
            Span | Quote | Note | Reference | BibEntry | Code | Link | Annot | Ruby | RB | RT
            | RP | Warichu | WT | WP => StructureType::InlineLevel,
            Figure | Formula | Form => StructureType::Illustration,
            Custom(_) => StructureType::Unknown,
        }
    }

    /// Whether the role is a table header or data cell.
    pub fn is_table_cell(&self) -> bool {
        matches!(self, Role::TH | Role::TD)
    }

    /// The name of the role, as written in a PDF file.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        use Role::*;

        match name {
            "Document" => Document,
            "Part" => Part,
            "Art" => Art,
            "Sect" => Sect,
            "Div" => Div,
            "BlockQuote" => BlockQuote,
            "Caption" => Caption,
            "TOC" => TOC,
            "TOCI" => TOCI,
            "Index" => Index,
            "NonStruct" => NonStruct,
            "Private" => Private,
            "P" => P,
            "H" => H,
            "H1" => Hn(1),
            "H2" => Hn(2),
            "H3" => Hn(3),
            "H4" => Hn(4),
            "H5" => Hn(5),
            "H6" => Hn(6),
            "L" => L,
            "Lbl" => Lbl,
            "LI" => LI,
            "LBody" => LBody,
            "Table" => Table,
            "TR" => TR,
            "TH" => TH,
            "TD" => TD,
            "THead" => THead,
            "TBody" => TBody,
            "TFoot" => TFoot,
            "Span" => Span,
            "Quote" => Quote,
            "Note" => Note,
            "Reference" => Reference,
            "BibEntry" => BibEntry,
            "Code" => Code,
            "Link" => Link,
            "Annot" => Annot,
            "Ruby" => Ruby,
            "RB" => RB,
            "RT" => RT,
            "RP" => RP,
            "Warichu" => Warichu,
            "WT" => WT,
            "WP" => WP,
            "Figure" => Figure,
            "Formula" => Formula,
            "Form" => Form,
            other => Custom(other.to_string()),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Hn(level) => write!(f, "H{level}"),
            Role::Custom(name) => f.write_str(name),
            // The debug representation of the unit variants is their PDF name.
            other => write!(f, "{other:?}"),
        }
    }
}

/// Maps custom roles to standard ones.
///
/// Mapping is not transitive: a custom role is resolved with a single lookup,
/// just like the role map of a structure tree root is read by PDF consumers that
/// don't follow chains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleMap {
    entries: BTreeMap<String, Role>,
}

impl RoleMap {
    /// Create an empty role map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map the role `name` to `role`.
    pub fn insert(&mut self, name: impl Into<String>, role: Role) {
        self.entries.insert(name.into(), role);
    }

    /// Sets a mapping and returns the map.
    pub fn with(mut self, name: impl Into<String>, role: Role) -> Self {
        self.insert(name, role);
        self
    }

    /// Resolve a role through the map. Roles without an entry are returned as is.
    pub fn resolve<'a>(&'a self, role: &'a Role) -> &'a Role {
        self.entries.get(&role.name()).unwrap_or(role)
    }

    /// The structure type of a role after resolving it.
    pub fn structure_type(&self, role: &Role) -> StructureType {
        self.resolve(role).structure_type()
    }
}
