// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

/// Visual weight class of a font, typically on a scale from 1.0 to 1000.0.
///
/// This uses an `f32` so that it can represent the full range of values possible with variable
/// fonts.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns `true` if this weight reads as bold, i.e. semi-bold or heavier.
    pub fn is_bold(self) -> bool {
        self >= Self::SEMI_BOLD
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Visual style or "slope" of a font.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[non_exhaustive]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// A true italic face.
    Italic,
    /// A slanted upright face with an optional angle in degrees.
    Oblique(Option<f32>),
}

impl FontStyle {
    /// Returns `true` for italic and oblique styles.
    pub fn is_slanted(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

bitflags::bitflags! {
    /// Trait conversions that can be requested of a [`Font`].
    ///
    /// The `UN*` flags request removal of a trait rather than its absence, so a mask can carry
    /// "make this upright" as well as "make this italic".
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct FontTraits: u8 {
        /// Convert to a bold weight.
        const BOLD = 1 << 0;
        /// Convert to the regular weight.
        const UNBOLD = 1 << 1;
        /// Convert to an italic style.
        const ITALIC = 1 << 2;
        /// Convert to an upright style.
        const UNITALIC = 1 << 3;
    }
}

/// A concrete font: family name, size in pixels, weight and style.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: Arc<str>,
    size: f32,
    weight: FontWeight,
    style: FontStyle,
}

impl Font {
    /// Family used by [`Font::default`].
    pub const DEFAULT_FAMILY: &'static str = "sans-serif";

    /// Size in pixels used by [`Font::default`].
    pub const DEFAULT_SIZE: f32 = 16.0;

    /// Creates a regular, upright font of the given family and size.
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Returns this font with a different weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns this font with a different style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns this font at a different size.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// The family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Reports the [`FontTraits::BOLD`] and [`FontTraits::ITALIC`] traits this font carries.
    pub fn traits(&self) -> FontTraits {
        let mut traits = FontTraits::empty();
        if self.weight.is_bold() {
            traits |= FontTraits::BOLD;
        }
        if self.style.is_slanted() {
            traits |= FontTraits::ITALIC;
        }
        traits
    }

    /// Converts this font to the sibling face with `traits` applied.
    ///
    /// Family and size are kept. When a mask carries both a trait and its removal, the removal
    /// wins.
    #[must_use]
    pub fn with_traits(&self, traits: FontTraits) -> Self {
        let mut font = self.clone();
        if traits.contains(FontTraits::BOLD) {
            font.weight = FontWeight::BOLD;
        }
        if traits.contains(FontTraits::UNBOLD) {
            font.weight = FontWeight::NORMAL;
        }
        if traits.contains(FontTraits::ITALIC) {
            font.style = FontStyle::Italic;
        }
        if traits.contains(FontTraits::UNITALIC) {
            font.style = FontStyle::Normal;
        }
        font
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FAMILY, Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::{Font, FontStyle, FontTraits, FontWeight};
    
    #[test]
    fn bold_round_trips() {
        let base = Font::new("Menlo", 12.0);
        let bold = base.with_traits(FontTraits::BOLD);
        assert_eq!(bold.weight(), FontWeight::BOLD);
        assert_eq!(bold.family(), "Menlo");
        assert_eq!(bold.size(), 12.0);
        assert_eq!(bold.with_traits(FontTraits::UNBOLD), base);
    }

    #[test]
    fn italic_round_trips() {
        let base = Font::default();
        let italic = base.with_traits(FontTraits::ITALIC);
        assert_eq!(italic.style(), FontStyle::Italic);
        assert_eq!(italic.traits(), FontTraits::ITALIC);
        assert_eq!(italic.with_traits(FontTraits::UNITALIC), base);
    }

    #[test]
    fn traits_compose() {
        let font = Font::default()
            .with_traits(FontTraits::BOLD)
            .with_traits(FontTraits::ITALIC);
        assert_eq!(font.traits(), FontTraits::BOLD | FontTraits::ITALIC);

        // Removing one trait leaves the other alone.
        let upright = font.with_traits(FontTraits::UNITALIC);
        assert_eq!(upright.traits(), FontTraits::BOLD);
    }

    #[test]
    fn removal_wins_within_one_mask() {
        let font = Font::default().with_traits(FontTraits::BOLD | FontTraits::UNBOLD);
        assert_eq!(font.weight(), FontWeight::NORMAL);
    }

    #[test]
    fn semi_bold_reports_bold_trait() {
        let font = Font::default().with_weight(FontWeight::SEMI_BOLD);
        assert!(font.traits().contains(FontTraits::BOLD));
        assert!(!Font::default().with_weight(FontWeight::MEDIUM).weight().is_bold());
    }
}
