// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use style_primitives::{Color, Font, InlineObject, Shadow};

use crate::{AttributeKey, AttributeValue, Link, StyleMarker, TextDocument};

/// A color meant for the background rather than the glyphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Background(pub Color);

/// A style value whose attribute key follows from what kind of value it is.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// Sets [`AttributeKey::Font`].
    Font(Font),
    /// Sets [`AttributeKey::ForegroundColor`].
    Color(Color),
    /// Sets [`AttributeKey::Shadow`].
    Shadow(Shadow),
    /// Sets [`AttributeKey::BackgroundColor`].
    Background(Color),
}

impl StyleValue {
    /// The attribute key this value is bound to.
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::Color(_) => AttributeKey::ForegroundColor,
            Self::Shadow(_) => AttributeKey::Shadow,
            Self::Background(_) => AttributeKey::BackgroundColor,
        }
    }

    /// Splits this value into its attribute key and value.
    pub fn into_attribute(self) -> (AttributeKey, AttributeValue) {
        let key = self.key();
        let value = match self {
            Self::Font(font) => AttributeValue::Font(font),
            Self::Color(color) | Self::Background(color) => AttributeValue::Color(color),
            Self::Shadow(shadow) => AttributeValue::Shadow(shadow),
        };
        (key, value)
    }
}

impl From<Font> for StyleValue {
    fn from(value: Font) -> Self {
        Self::Font(value)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Shadow> for StyleValue {
    fn from(value: Shadow) -> Self {
        Self::Shadow(value)
    }
}

impl From<Background> for StyleValue {
    fn from(value: Background) -> Self {
        Self::Background(value.0)
    }
}

/// Anything that can be appended to a [`TextDocument`].
///
/// This is the argument of [`TextDocument::append`] and of the `<<` operator.
#[derive(Clone, Debug)]
pub enum Fragment<'a> {
    /// Plain text.
    Text(&'a str),
    /// A style value routed to its attribute key.
    Value(StyleValue),
    /// A style marker.
    Marker(StyleMarker),
    /// An embedded object; `None` appends nothing.
    Embedded(Option<InlineObject>),
    /// A hyperlink; `None` appends nothing.
    Link(Option<Link>),
    /// A nested document, resolved in its own attribute scope.
    Document(&'a TextDocument),
}

impl<'a> From<&'a str> for Fragment<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Fragment<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl From<StyleValue> for Fragment<'_> {
    fn from(value: StyleValue) -> Self {
        Self::Value(value)
    }
}

impl From<Font> for Fragment<'_> {
    fn from(value: Font) -> Self {
        Self::Value(value.into())
    }
}

impl From<Color> for Fragment<'_> {
    fn from(value: Color) -> Self {
        Self::Value(value.into())
    }
}

impl From<Shadow> for Fragment<'_> {
    fn from(value: Shadow) -> Self {
        Self::Value(value.into())
    }
}

impl From<Background> for Fragment<'_> {
    fn from(value: Background) -> Self {
        Self::Value(value.into())
    }
}

impl From<StyleMarker> for Fragment<'_> {
    fn from(marker: StyleMarker) -> Self {
        Self::Marker(marker)
    }
}

impl From<InlineObject> for Fragment<'_> {
    fn from(object: InlineObject) -> Self {
        Self::Embedded(Some(object))
    }
}

impl From<Option<InlineObject>> for Fragment<'_> {
    fn from(object: Option<InlineObject>) -> Self {
        Self::Embedded(object)
    }
}

impl From<Link> for Fragment<'_> {
    fn from(link: Link) -> Self {
        Self::Link(Some(link))
    }
}

impl From<Option<Link>> for Fragment<'_> {
    fn from(link: Option<Link>) -> Self {
        Self::Link(link)
    }
}

impl<'a> From<&'a TextDocument> for Fragment<'a> {
    fn from(document: &'a TextDocument) -> Self {
        Self::Document(document)
    }
}

#[cfg(test)]
mod tests {
    use super::{Background, StyleValue};
    use crate::{AttributeKey, AttributeValue};
    use style_primitives::{palette, Font, Shadow};

    #[test]
    fn keys_follow_value_category() {
        assert_eq!(StyleValue::from(Font::default()).key(), AttributeKey::Font);
        assert_eq!(
            StyleValue::from(palette::css::RED).key(),
            AttributeKey::ForegroundColor
        );
        assert_eq!(StyleValue::from(Shadow::EMBOSS).key(), AttributeKey::Shadow);
        assert_eq!(
            StyleValue::from(Background(palette::css::RED)).key(),
            AttributeKey::BackgroundColor
        );
    }

    #[test]
    fn background_keeps_color_value() {
        let (key, value) = StyleValue::from(Background(palette::css::LIME)).into_attribute();
        assert_eq!(key, AttributeKey::BackgroundColor);
        assert_eq!(value, AttributeValue::Color(palette::css::LIME));
    }
}
