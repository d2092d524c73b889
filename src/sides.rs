//! Consolidating per-side values.
//!
//! Attributes like `Padding` or `BorderColor` can either hold a single value that
//! applies to all four sides, or an array with one entry per side. We always
//! write the shortest representation: a scalar if all sides agree, otherwise an
//! array in writing-direction order.

use crate::attribute::AttrValue;
use crate::configure::TextDirection;

/// The value of a per-side attribute after consolidation.
#[derive(Clone, Debug, PartialEq)]
pub enum Sides<T> {
    /// All present sides have the same value.
    Uniform(T),
    /// The sides differ. Missing sides are `None`.
    PerSide([Option<T>; 4]),
}

impl<T> Sides<T> {
    /// Consolidate four values given in top, right, bottom, left order.
    ///
    /// Missing sides don't take part in the comparison. Returns `None` if all
    /// sides are missing.
    pub fn consolidate(values: [Option<T>; 4], direction: TextDirection) -> Option<Self>
    where
        T: PartialEq,
    {
        let mut present = values.iter().flatten();
        let first = present.next()?;
        if present.all(|value| value == first) {
            return values.into_iter().flatten().next().map(Sides::Uniform);
        }

        Some(Sides::PerSide(reorder(values, direction)))
    }

    /// Map the values of the sides.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Sides<U> {
        match self {
            Sides::Uniform(value) => Sides::Uniform(f(value)),
            Sides::PerSide(values) => Sides::PerSide(values.map(|v| v.map(&mut f))),
        }
    }
}

impl<T: Into<AttrValue>> Sides<T> {
    /// Convert into an attribute value, writing missing sides as `missing`.
    pub fn into_value_or(self, missing: impl Fn() -> AttrValue) -> AttrValue {
        match self {
            Sides::Uniform(value) => value.into(),
            Sides::PerSide(values) => AttrValue::Array(
                values
                    .into_iter()
                    .map(|value| value.map(Into::into).unwrap_or_else(&missing))
                    .collect(),
            ),
        }
    }
}

impl<T: Into<AttrValue>> From<Sides<T>> for AttrValue {
    fn from(sides: Sides<T>) -> Self {
        sides.into_value_or(|| AttrValue::Null)
    }
}

/// The order in which the top, right, bottom and left values are written.
///
/// Both directions currently use the same order.
pub fn side_order(direction: TextDirection) -> [usize; 4] {
    match direction {
        TextDirection::LeftToRight | TextDirection::RightToLeft => [0, 1, 2, 3],
    }
}

fn reorder<T>(values: [Option<T>; 4], direction: TextDirection) -> [Option<T>; 4] {
    let mut values = values.map(Some);
    side_order(direction).map(|idx| values[idx].take().flatten())
}
