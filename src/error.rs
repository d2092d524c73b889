//! Error handling.
//!
//! Deriving attributes never fails: values that cannot be represented are simply
//! left out. Errors can only occur when writing an attribute set into a PDF object.

use std::fmt::{Display, Formatter};

use crate::attribute::AttrName;

/// A wrapper type for attribute errors.
pub type AttrResult<T> = Result<T, AttrError>;

/// An error while serializing attributes.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AttrError {
    /// The attribute holds a number that is infinite or NaN, which can't be
    /// written to a PDF file.
    NonFiniteNumber(AttrName),
}

impl Display for AttrError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrError::NonFiniteNumber(name) => {
                write!(f, "attribute /{} contains a non-finite number", name.as_str())
            }
        }
    }
}

impl std::error::Error for AttrError {}
