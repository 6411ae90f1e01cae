// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Vec2;
use peniko::Color;

/// A drop shadow drawn behind glyphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow color, including its opacity.
    pub color: Color,
    /// Offset from the glyph origin, in points. Negative `y` is upward.
    pub offset: Vec2,
    /// Gaussian blur radius, in points.
    pub blur_radius: f64,
}

impl Shadow {
    /// The "emboss" emphasis: a light, slightly transparent shadow one unit above the glyphs.
    ///
    /// These values are fixed so that embossed text renders the same everywhere.
    pub const EMBOSS: Self = Self::new(
        Color::new([1.0, 1.0, 1.0, 0.7]),
        Vec2::new(0.0, -1.0),
        1.0,
    );

    /// Creates a shadow.
    pub const fn new(color: Color, offset: Vec2, blur_radius: f64) -> Self {
        Self {
            color,
            offset,
            blur_radius,
        }
    }
}
