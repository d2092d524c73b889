//! Mapping resolved style values onto the attribute vocabulary.

use crate::attribute::{BlockAlign, BorderStyle, InlineAlign, ListNumbering, TextAlign};
use crate::configure::TextDirection;
use crate::style::{BorderKind, HorizontalAlignment, ListNumberingType, TextAlignment};

/// Map a text alignment, resolving left and right according to the direction.
pub fn text_align(alignment: TextAlignment, direction: TextDirection) -> TextAlign {
    let ltr = direction.is_left_to_right();
    match alignment {
        TextAlignment::Left if ltr => TextAlign::Start,
        TextAlignment::Left => TextAlign::End,
        TextAlignment::Center => TextAlign::Center,
        TextAlignment::Right if ltr => TextAlign::End,
        TextAlignment::Right => TextAlign::Start,
        TextAlignment::Justified | TextAlignment::JustifiedAll => TextAlign::Justify,
    }
}

/// Map a text alignment for table cells. There is no justified inline alignment,
/// so justified text has none.
pub fn inline_align(alignment: TextAlignment, direction: TextDirection) -> Option<InlineAlign> {
    match text_align(alignment, direction) {
        TextAlign::Start => Some(InlineAlign::Start),
        TextAlign::Center => Some(InlineAlign::Center),
        TextAlign::End => Some(InlineAlign::End),
        TextAlign::Justify => None,
    }
}

/// Map a horizontal alignment, resolving left and right according to the direction.
pub fn block_align(alignment: HorizontalAlignment, direction: TextDirection) -> BlockAlign {
    let ltr = direction.is_left_to_right();
    match alignment {
        HorizontalAlignment::Left if ltr => BlockAlign::Before,
        HorizontalAlignment::Left => BlockAlign::After,
        HorizontalAlignment::Center => BlockAlign::Middle,
        HorizontalAlignment::Right if ltr => BlockAlign::After,
        HorizontalAlignment::Right => BlockAlign::Before,
    }
}

/// Map the kind of a border. Round dots are indistinguishable from square ones.
pub fn border_style(kind: BorderKind) -> BorderStyle {
    match kind {
        BorderKind::Solid => BorderStyle::Solid,
        BorderKind::Dashed => BorderStyle::Dashed,
        BorderKind::Dotted | BorderKind::RoundDots => BorderStyle::Dotted,
        BorderKind::Double => BorderStyle::Double,
        BorderKind::Groove => BorderStyle::Groove,
        BorderKind::Inset => BorderStyle::Inset,
        BorderKind::Outset => BorderStyle::Outset,
        BorderKind::Ridge => BorderStyle::Ridge,
    }
}

/// Map a list numbering. Greek letters are written as alphabetic numbering,
/// symbol lists have no numbering at all.
pub fn list_numbering(numbering: ListNumberingType) -> ListNumbering {
    match numbering {
        ListNumberingType::Decimal => ListNumbering::Decimal,
        ListNumberingType::RomanUpper => ListNumbering::UpperRoman,
        ListNumberingType::RomanLower => ListNumbering::LowerRoman,
        ListNumberingType::EnglishUpper | ListNumberingType::GreekUpper => {
            ListNumbering::UpperAlpha
        }
        ListNumberingType::EnglishLower | ListNumberingType::GreekLower => {
            ListNumbering::LowerAlpha
        }
        ListNumberingType::ZapfDingbats(_) => ListNumbering::None,
    }
}
