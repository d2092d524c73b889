//! Colors as resolved by the layout engine, and the naive RGB triples that end up
//! in the attributes.
//!
//! Standard structure attributes can only describe colors as RGB triples. Layout
//! engines however work with colors in several color spaces, so only colors in
//! the device RGB color space can be carried over into an attribute. Colors in
//! any other color space are dropped, there is no color conversion.

use std::fmt::Debug;
use std::hash::Hash;

/// A wrapper enum that can hold colors from different color spaces.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum Color {
    /// A device RGB color.
    Rgb(rgb::Color),
    /// A device gray color.
    Luma(luma::Color),
    /// A device CMYK color.
    Cmyk(cmyk::Color),
}

impl Color {
    /// The color as a naive RGB triple, if it lives in the RGB color space.
    pub fn as_rgb(&self) -> Option<NaiveRgbColor> {
        match self {
            Color::Rgb(rgb) => Some(rgb.to_naive()),
            Color::Luma(_) | Color::Cmyk(_) => {
                log::debug!("dropping color {self:?}, only RGB colors can be tagged");
                None
            }
        }
    }
}

/// Gray-scale colors.
pub mod luma {
    /// A luma color.
    #[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
    pub struct Color(pub(crate) u8);

    impl Color {
        /// Create a new luma color.
        pub fn new(lightness: u8) -> Color {
            Color(lightness)
        }

        /// The lightness of the color.
        pub fn lightness(&self) -> u8 {
            self.0
        }
    }

    impl From<Color> for super::Color {
        fn from(val: Color) -> Self {
            super::Color::Luma(val)
        }
    }
}

/// CMYK colors.
pub mod cmyk {
    /// A CMYK color.
    #[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
    pub struct Color(pub(crate) u8, pub(crate) u8, pub(crate) u8, pub(crate) u8);

    impl Color {
        /// Create a new CMYK color.
        pub fn new(cyan: u8, magenta: u8, yellow: u8, black: u8) -> Color {
            Color(cyan, magenta, yellow, black)
        }
    }

    impl From<Color> for super::Color {
        fn from(val: Color) -> Self {
            super::Color::Cmyk(val)
        }
    }

    impl Default for Color {
        fn default() -> Self {
            Color::new(0, 0, 0, 255)
        }
    }
}

/// RGB colors.
pub mod rgb {
    use super::NaiveRgbColor;

    /// An RGB color.
    #[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
    pub struct Color(pub(crate) u8, pub(crate) u8, pub(crate) u8);

    impl Color {
        /// Create a new RGB color.
        pub fn new(red: u8, green: u8, blue: u8) -> Self {
            Color(red, green, blue)
        }

        /// Create a black RGB color.
        pub fn black() -> Self {
            Self::new(0, 0, 0)
        }

        /// Create a white RGB color.
        pub fn white() -> Self {
            Self::new(255, 255, 255)
        }

        /// The `red` component of the color.
        pub fn red(&self) -> u8 {
            self.0
        }

        /// The `green` component of the color.
        pub fn green(&self) -> u8 {
            self.1
        }

        /// The `blue` component of the color.
        pub fn blue(&self) -> u8 {
            self.2
        }

        pub(crate) fn to_naive(self) -> NaiveRgbColor {
            NaiveRgbColor::new(
                self.0 as f32 / 255.0,
                self.1 as f32 / 255.0,
                self.2 as f32 / 255.0,
            )
        }
    }

    impl From<Color> for super::Color {
        fn from(val: Color) -> Self {
            super::Color::Rgb(val)
        }
    }
}

/// A color as it is written into an attribute: three components in the 0..=1 range,
/// without any color space attached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NaiveRgbColor {
    /// The red component.
    pub red: f32,
    /// The green component.
    pub green: f32,
    /// The blue component.
    pub blue: f32,
}

impl NaiveRgbColor {
    /// Create a new color from its components.
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// The components as an array.
    pub fn into_f32_array(self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }
}
