//! Geometrical helper structs.

pub use tiny_skia_path::Rect;

pub(crate) trait RectExt {
    fn to_pdf_rect(&self) -> pdf_writer::Rect;
}

impl RectExt for Rect {
    fn to_pdf_rect(&self) -> pdf_writer::Rect {
        pdf_writer::Rect::new(
            self.left(),
            self.top(),
            self.left() + self.width(),
            self.top() + self.height(),
        )
    }
}
