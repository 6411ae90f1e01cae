// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use style_primitives::FontTraits;

use crate::{AttributeKey, AttributeValue};

/// A symbolic style token whose concrete effect is decided when the document is resolved.
///
/// Font-trait markers depend on whichever font is active at their position, which is only known
/// once everything before them has been replayed, so they are stored symbolically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleMarker {
    /// Convert the active font to bold.
    Bold,
    /// Convert the active font to the regular weight.
    Unbold,
    /// Convert the active font to italic.
    Italic,
    /// Convert the active font to upright.
    Unitalic,
    /// Start a single underline.
    Underline,
    /// End the underline.
    NoUnderline,
    /// Start the emboss shadow.
    Emboss,
    /// End the emboss shadow.
    NoEmboss,
    /// Save the active attributes and continue from an empty set.
    ///
    /// Every `Push` must be matched by a later [`StyleMarker::Pop`].
    Push,
    /// Restore the attributes saved by the matching [`StyleMarker::Push`].
    Pop,
}

/// Markers that resolve to a font-trait conversion.
const FONT_TRAITS: [(StyleMarker, FontTraits); 4] = [
    (StyleMarker::Bold, FontTraits::BOLD),
    (StyleMarker::Unbold, FontTraits::UNBOLD),
    (StyleMarker::Italic, FontTraits::ITALIC),
    (StyleMarker::Unitalic, FontTraits::UNITALIC),
];

impl StyleMarker {
    /// The font-trait conversion this marker requests, if it is a font-trait marker.
    pub fn font_traits(self) -> Option<FontTraits> {
        FONT_TRAITS
            .iter()
            .find(|(marker, _)| *marker == self)
            .map(|(_, traits)| *traits)
    }

    /// Returns `true` for [`StyleMarker::Push`] and [`StyleMarker::Pop`].
    pub fn is_scope(self) -> bool {
        matches!(self, Self::Push | Self::Pop)
    }
}

/// One recorded instruction in a document's log.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    /// Bind an attribute from this position onward.
    Set(AttributeKey, AttributeValue),
    /// Unbind an attribute from this position onward.
    Clear(AttributeKey),
    /// A symbolic style token.
    Marker(StyleMarker),
}

impl From<StyleMarker> for Directive {
    fn from(marker: StyleMarker) -> Self {
        Self::Marker(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::StyleMarker;
    use style_primitives::FontTraits;

    #[test]
    fn font_trait_table() {
        assert_eq!(StyleMarker::Bold.font_traits(), Some(FontTraits::BOLD));
        assert_eq!(StyleMarker::Unbold.font_traits(), Some(FontTraits::UNBOLD));
        assert_eq!(StyleMarker::Italic.font_traits(), Some(FontTraits::ITALIC));
        assert_eq!(
            StyleMarker::Unitalic.font_traits(),
            Some(FontTraits::UNITALIC)
        );
        for marker in [
            StyleMarker::Underline,
            StyleMarker::NoUnderline,
            StyleMarker::Emboss,
            StyleMarker::NoEmboss,
            StyleMarker::Push,
            StyleMarker::Pop,
        ] {
            assert_eq!(marker.font_traits(), None, "{marker:?} is not a font trait");
        }
        assert!(StyleMarker::Push.is_scope() && StyleMarker::Pop.is_scope());
        assert!(!StyleMarker::Bold.is_scope());
    }
}
