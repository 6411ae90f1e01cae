// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

use hashbrown::HashMap;
use style_primitives::{Color, Font, InlineObject, Shadow, UnderlineStyle};

/// Names an attribute in the renderer's vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKey {
    /// The font glyphs are drawn with.
    Font,
    /// The glyph fill color.
    ForegroundColor,
    /// The color painted behind the glyphs.
    BackgroundColor,
    /// A drop shadow behind the glyphs.
    Shadow,
    /// Underline decoration.
    UnderlineStyle,
    /// A hyperlink target.
    Link,
    /// An embedded object occupying a placeholder character.
    Attachment,
    /// A renderer-specific key.
    ///
    /// These are forwarded untouched; whether the renderer understands them is its concern.
    Custom(Arc<str>),
}

impl AttributeKey {
    /// Creates a renderer-specific key.
    pub fn custom(name: impl Into<Arc<str>>) -> Self {
        Self::Custom(name.into())
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Font => f.write_str("font"),
            Self::ForegroundColor => f.write_str("foreground-color"),
            Self::BackgroundColor => f.write_str("background-color"),
            Self::Shadow => f.write_str("shadow"),
            Self::UnderlineStyle => f.write_str("underline-style"),
            Self::Link => f.write_str("link"),
            Self::Attachment => f.write_str("attachment"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

/// A hyperlink target, such as a URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link(Arc<str>);

impl Link {
    /// Creates a link to `target`.
    pub fn new(target: impl Into<Arc<str>>) -> Self {
        Self(target.into())
    }

    /// The link target.
    pub fn target(&self) -> &str {
        &self.0
    }
}

/// A concrete attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A font.
    Font(Font),
    /// A color, for either foreground or background.
    Color(Color),
    /// A drop shadow.
    Shadow(Shadow),
    /// An underline style.
    Underline(UnderlineStyle),
    /// A hyperlink target.
    Link(Link),
    /// An embedded object.
    Object(InlineObject),
    /// Free-form text, for renderer-specific keys.
    Text(Arc<str>),
    /// A number, for renderer-specific keys.
    Number(f64),
}

impl From<Font> for AttributeValue {
    fn from(value: Font) -> Self {
        Self::Font(value)
    }
}

impl From<Color> for AttributeValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Shadow> for AttributeValue {
    fn from(value: Shadow) -> Self {
        Self::Shadow(value)
    }
}

impl From<UnderlineStyle> for AttributeValue {
    fn from(value: UnderlineStyle) -> Self {
        Self::Underline(value)
    }
}

impl From<Link> for AttributeValue {
    fn from(value: Link) -> Self {
        Self::Link(value)
    }
}

impl From<InlineObject> for AttributeValue {
    fn from(value: InlineObject) -> Self {
        Self::Object(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

/// The set of attributes active over a stretch of text.
///
/// Each key maps to at most one value; setting a key again replaces its value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeDictionary {
    entries: HashMap<AttributeKey, AttributeValue>,
}

impl AttributeDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `key`, if any.
    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is bound.
    pub fn contains_key(&self, key: &AttributeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Binds `key` to `value`, returning the value it replaced.
    pub fn insert(&mut self, key: AttributeKey, value: AttributeValue) -> Option<AttributeValue> {
        self.entries.insert(key, value)
    }

    /// Unbinds `key`, returning its value. Unbinding an absent key is a no-op.
    pub fn remove(&mut self, key: &AttributeKey) -> Option<AttributeValue> {
        self.entries.remove(key)
    }

    /// Removes every binding, retaining allocated storage.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The number of bound keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the bindings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> {
        self.entries.iter()
    }

    /// The active font, if one is set.
    pub fn font(&self) -> Option<&Font> {
        match self.get(&AttributeKey::Font)? {
            AttributeValue::Font(font) => Some(font),
            _ => None,
        }
    }

    /// The active foreground color, if one is set.
    pub fn foreground_color(&self) -> Option<Color> {
        self.color(&AttributeKey::ForegroundColor)
    }

    /// The active background color, if one is set.
    pub fn background_color(&self) -> Option<Color> {
        self.color(&AttributeKey::BackgroundColor)
    }

    /// The active shadow, if one is set.
    pub fn shadow(&self) -> Option<Shadow> {
        match self.get(&AttributeKey::Shadow)? {
            AttributeValue::Shadow(shadow) => Some(*shadow),
            _ => None,
        }
    }

    /// The active underline style, if one is set.
    pub fn underline(&self) -> Option<UnderlineStyle> {
        match self.get(&AttributeKey::UnderlineStyle)? {
            AttributeValue::Underline(style) => Some(*style),
            _ => None,
        }
    }

    /// The active link, if one is set.
    pub fn link(&self) -> Option<&Link> {
        match self.get(&AttributeKey::Link)? {
            AttributeValue::Link(link) => Some(link),
            _ => None,
        }
    }

    /// The embedded object, if this is a placeholder range.
    pub fn attachment(&self) -> Option<&InlineObject> {
        match self.get(&AttributeKey::Attachment)? {
            AttributeValue::Object(object) => Some(object),
            _ => None,
        }
    }

    fn color(&self, key: &AttributeKey) -> Option<Color> {
        match self.get(key)? {
            AttributeValue::Color(color) => Some(*color),
            _ => None,
        }
    }
}

impl FromIterator<(AttributeKey, AttributeValue)> for AttributeDictionary {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, AttributeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(AttributeKey, AttributeValue); N]> for AttributeDictionary {
    fn from(entries: [(AttributeKey, AttributeValue); N]) -> Self {
        entries.into_iter().collect()
    }
}
