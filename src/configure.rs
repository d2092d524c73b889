//! Configuring the PDF version and the writing direction used when deriving attributes.

/// The version of the PDF document the attributes will end up in.
///
/// Most layout attributes were only introduced with PDF 1.5, so they are skipped
/// when serializing for an older version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PdfVersion {
    /// PDF 1.4.
    Pdf14,
    /// PDF 1.5.
    Pdf15,
    /// PDF 1.6.
    Pdf16,
    /// PDF 1.7.
    #[default]
    Pdf17,
    /// PDF 2.0.
    Pdf20,
}

impl PdfVersion {
    /// Get a string representation of the PDF version.
    pub fn as_str(&self) -> &str {
        match self {
            PdfVersion::Pdf14 => "PDF 1.4",
            PdfVersion::Pdf15 => "PDF 1.5",
            PdfVersion::Pdf16 => "PDF 1.6",
            PdfVersion::Pdf17 => "PDF 1.7",
            PdfVersion::Pdf20 => "PDF 2.0",
        }
    }
}

/// The inline progression direction of the content.
///
/// Left and right alignments are expressed relative to this direction in the
/// output vocabulary (`Start`/`End`, `Before`/`After`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right, the typical direction for Western writing systems.
    #[default]
    LeftToRight,
    /// Right to left, the typical direction for Arabic and Hebrew.
    RightToLeft,
}

impl TextDirection {
    /// Whether the direction is left to right.
    pub fn is_left_to_right(self) -> bool {
        self == TextDirection::LeftToRight
    }
}

/// Settings for deriving and serializing attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeriveSettings {
    /// The writing direction of the content.
    ///
    /// There is no way to detect the direction from the actual text yet, so
    /// this is left to right unless the caller knows better.
    pub direction: TextDirection,
    /// The PDF version the attributes are derived for. Attributes the version
    /// doesn't know yet are not derived.
    pub pdf_version: PdfVersion,
}

impl DeriveSettings {
    /// Create new default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`DeriveSettings::direction`].
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets [`DeriveSettings::pdf_version`].
    pub fn with_pdf_version(mut self, pdf_version: PdfVersion) -> Self {
        self.pdf_version = pdf_version;
        self
    }
}
