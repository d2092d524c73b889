//! Format attribute sets in a human readable way, in form of a YAML document.

use std::fmt::Display;

use crate::attribute::{AccessibilityProperties, AttrValue, AttributeSet, Keyword};
use crate::color::NaiveRgbColor;
use crate::geom::Rect;

/// Helper trait for indented output.
pub trait Output {
    /// Wrapper around [`Output::output`] with a zero indent;
    fn output(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        self.output_indent(f, Indent(0))
    }

    /// Output data with an indent.
    fn output_indent(&self, f: &mut impl std::fmt::Write, indent: Indent) -> std::fmt::Result;

    /// Create a [`Display`]able wrapper.
    fn display<'a>(&'a self) -> Wrapper<'a, Self> {
        Wrapper {
            inner: self,
            indent: Indent(0),
        }
    }

    /// Create a [`Display`]able wrapper with a specific indent.
    fn display_indent<'a>(&'a self, indent: Indent) -> Wrapper<'a, Self> {
        Wrapper {
            inner: self,
            indent,
        }
    }
}

/// A [`Display`]able wrapper struct around an [`Output`].
pub struct Wrapper<'a, T: Output + ?Sized> {
    inner: &'a T,
    indent: Indent,
}

impl<T: Output> Display for Wrapper<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.output_indent(f, self.indent)
    }
}

/// A [`Display`]able indentation.
#[derive(Clone, Copy)]
pub struct Indent(pub usize);

impl Indent {
    fn inc(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for Indent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:indent$}", "", indent = 2 * self.0)
    }
}

impl Output for AccessibilityProperties {
    fn output_indent(&self, f: &mut impl std::fmt::Write, indent: Indent) -> std::fmt::Result {
        for attributes in self.attributes() {
            attributes.output_indent(f, indent)?;
        }
        Ok(())
    }
}

impl Output for AttributeSet {
    fn output_indent(&self, f: &mut impl std::fmt::Write, indent: Indent) -> std::fmt::Result {
        writeln!(f, "{indent}- /O: {}", self.owner().as_str())?;

        let indent = indent.inc();
        for (name, value) in self.iter() {
            let space = omit_if(" ", value.is_multiline());
            let value = value.display_indent(indent.inc());
            writeln!(f, "{indent}/{}:{space}{value}", name.as_str())?;
        }
        Ok(())
    }
}

trait ValueOutput: Output {
    fn is_multiline(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy)]
struct OmitText {
    text: &'static str,
    omit: bool,
}

fn omit_if(text: &'static str, omit: bool) -> OmitText {
    OmitText { text, omit }
}

impl Display for OmitText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.omit {
            f.write_str(self.text)?;
        }
        Ok(())
    }
}

impl ValueOutput for AttrValue {
    fn is_multiline(&self) -> bool {
        match self {
            AttrValue::Array(_) => true,
            AttrValue::Rect(rect) => rect.is_multiline(),
            _ => false,
        }
    }
}
impl Output for AttrValue {
    fn output_indent(&self, f: &mut impl std::fmt::Write, indent: Indent) -> std::fmt::Result {
        match self {
            AttrValue::Number(number) => number.output(f),
            AttrValue::Integer(integer) => write!(f, "{integer}"),
            AttrValue::Color(color) => color.output(f),
            AttrValue::Name(keyword) => keyword.output(f),
            AttrValue::Rect(rect) => rect.output_indent(f, indent),
            AttrValue::Null => write!(f, "null"),
            AttrValue::Array(items) => {
                let Some((last, remainder)) = items.split_last() else {
                    return write!(f, " []");
                };
                writeln!(f)?;
                for item in remainder.iter() {
                    writeln!(f, "{indent}- {}", item.display_indent(indent.inc()))?;
                }
                write!(f, "{indent}- {}", last.display_indent(indent.inc()))
            }
        }
    }
}

impl ValueOutput for Rect {
    fn is_multiline(&self) -> bool {
        true
    }
}
impl Output for Rect {
    fn output_indent(&self, f: &mut impl std::fmt::Write, indent: Indent) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{indent}left:   {}", self.left().display())?;
        writeln!(f, "{indent}top:    {}", self.top().display())?;
        writeln!(f, "{indent}right:  {}", self.right().display())?;
        write!(f, "{indent}bottom: {}", self.bottom().display())
    }
}

impl Output for NaiveRgbColor {
    fn output_indent(&self, f: &mut impl std::fmt::Write, _: Indent) -> std::fmt::Result {
        let r = (255.0 * self.red).round() as u8;
        let g = (255.0 * self.green).round() as u8;
        let b = (255.0 * self.blue).round() as u8;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl Output for Keyword {
    fn output_indent(&self, f: &mut impl std::fmt::Write, _: Indent) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Output for f32 {
    fn output_indent(&self, f: &mut impl std::fmt::Write, _: Indent) -> std::fmt::Result {
        write!(f, "{self:7.3}")
    }
}
