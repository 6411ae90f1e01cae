// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use style_primitives::{palette, Color, InlineObject};

use crate::compositor::{check_scopes, CoalescedRanges, ResolvedRanges};
use crate::{
    AttributeKey, AttributeValue, Directive, Error, Fragment, Link, ResolveContext, ResolvedRange,
    StyleMarker, StyleValue,
};

/// The placeholder inserted into the text for each embedded object (U+FFFC).
pub const OBJECT_REPLACEMENT_CHARACTER: char = '\u{FFFC}';

/// The foreground color given to link text.
pub const LINK_COLOR: Color = palette::css::BLUE;

/// Text interleaved with style directives.
///
/// Appending is cheap and never resolves anything: each directive is stamped with the text length
/// at the moment it is appended, which keeps positions non-decreasing without a sort. Resolution
/// into concrete attribute runs happens later, in one pass, and leaves the document untouched.
///
/// Every append returns `&mut Self` for chaining. For value-style chaining, see the `<<`
/// operator implementations.
///
/// ```
/// use attributed_stream::{StyleMarker, TextDocument};
///
/// let mut doc = TextDocument::new();
/// doc.append("A").append(StyleMarker::Bold).append("B");
/// assert_eq!(doc.as_str(), "AB");
/// assert_eq!(doc.directives().next().map(|(position, _)| position), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextDocument {
    pub(crate) text: String,
    pub(crate) directives: Vec<(usize, Directive)>,
}

impl TextDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from text and a hand-built directive log.
    ///
    /// Positions must be non-decreasing, within the text and on UTF-8 character boundaries.
    /// `Push`/`Pop` balance is not checked here; [`TextDocument::try_resolve`] reports it.
    pub fn from_parts(
        text: impl Into<String>,
        directives: Vec<(usize, Directive)>,
    ) -> Result<Self, Error> {
        let text = text.into();
        let mut previous = 0;
        for (index, (position, _)) in directives.iter().enumerate() {
            let position = *position;
            if position > text.len() {
                return Err(Error::position_out_of_bounds(index, position, text.len()));
            }
            if position < previous {
                return Err(Error::non_monotonic_position(index, position, text.len()));
            }
            if !text.is_char_boundary(position) {
                return Err(Error::not_on_char_boundary(&text, index, position));
            }
            previous = position;
        }
        Ok(Self { text, directives })
    }

    /// Returns the text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterates over the directive log in order, with each directive's byte position.
    pub fn directives(&self) -> impl ExactSizeIterator<Item = (usize, &Directive)> {
        self.directives
            .iter()
            .map(|(position, directive)| (*position, directive))
    }

    /// Returns the number of directives in the log.
    pub fn directives_len(&self) -> usize {
        self.directives.len()
    }

    /// Removes all text and directives, retaining allocated storage.
    pub fn clear(&mut self) {
        self.text.clear();
        self.directives.clear();
    }

    /// Appends any [`Fragment`]: text, a style value, a marker, an embedded object, a link or a
    /// nested document.
    pub fn append<'a>(&mut self, fragment: impl Into<Fragment<'a>>) -> &mut Self {
        match fragment.into() {
            Fragment::Text(text) => self.append_text(text),
            Fragment::Value(value) => self.append_value(value),
            Fragment::Marker(marker) => self.append_marker(marker),
            Fragment::Embedded(object) => self.append_embedded(object),
            Fragment::Link(link) => self.append_link(link),
            Fragment::Document(document) => self.append_document(document),
        }
    }

    /// Appends plain text.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Binds a style value to the attribute key its kind selects.
    pub fn append_value(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        let (key, value) = value.into().into_attribute();
        self.set_attribute(key, value)
    }

    /// Binds `key` to `value` from the current end of the text onward.
    pub fn set_attribute(
        &mut self,
        key: AttributeKey,
        value: impl Into<AttributeValue>,
    ) -> &mut Self {
        self.push(Directive::Set(key, value.into()))
    }

    /// Unbinds `key` from the current end of the text onward.
    pub fn clear_attribute(&mut self, key: AttributeKey) -> &mut Self {
        self.push(Directive::Clear(key))
    }

    /// Appends a style marker.
    ///
    /// Appending [`StyleMarker::Push`] or [`StyleMarker::Pop`] directly makes the caller
    /// responsible for balancing them; [`TextDocument::append_document`] always does.
    pub fn append_marker(&mut self, marker: StyleMarker) -> &mut Self {
        self.push(Directive::Marker(marker))
    }

    /// Embeds an object as a single [`OBJECT_REPLACEMENT_CHARACTER`].
    ///
    /// The [`AttributeKey::Attachment`] binding covers only the placeholder. `None` appends
    /// nothing.
    pub fn append_embedded(&mut self, object: impl Into<Option<InlineObject>>) -> &mut Self {
        let Some(object) = object.into() else {
            return self;
        };
        self.set_attribute(AttributeKey::Attachment, object);
        self.text.push(OBJECT_REPLACEMENT_CHARACTER);
        self.clear_attribute(AttributeKey::Attachment)
    }

    /// Starts a link: binds the target, colors the text with [`LINK_COLOR`] and underlines it.
    ///
    /// These stay active until cleared, like any other attribute. `None` appends nothing.
    pub fn append_link(&mut self, link: impl Into<Option<Link>>) -> &mut Self {
        let Some(link) = link.into() else {
            return self;
        };
        self.set_attribute(AttributeKey::Link, link)
            .set_attribute(AttributeKey::ForegroundColor, LINK_COLOR)
            .append_marker(StyleMarker::Underline)
    }

    /// Appends `child` as a self-contained nested document.
    ///
    /// The child's text resolves against an empty attribute set, and whatever the child leaves
    /// active is discarded afterward, restoring this document's attributes.
    pub fn append_document(&mut self, child: &Self) -> &mut Self {
        let offset = self.text.len();
        self.append_marker(StyleMarker::Push);
        self.directives.extend(
            child
                .directives
                .iter()
                .map(|(position, directive)| (offset + position, directive.clone())),
        );
        self.text.push_str(&child.text);
        self.append_marker(StyleMarker::Pop)
    }

    fn push(&mut self, directive: Directive) -> &mut Self {
        self.directives.push((self.text.len(), directive));
        self
    }

    /// Returns an iterator over resolved ranges, using the default [`ResolveContext`].
    ///
    /// # Panics
    ///
    /// The iterator panics on a `Pop` with no matching `Push`, which can only come from
    /// hand-appended scope markers.
    pub fn resolved_ranges(&self) -> ResolvedRanges<'_> {
        ResolvedRanges::new(self, &ResolveContext::default())
    }

    /// Returns an iterator over resolved ranges, using `context`.
    pub fn resolved_ranges_with(&self, context: &ResolveContext) -> ResolvedRanges<'_> {
        ResolvedRanges::new(self, context)
    }

    /// Returns an iterator over resolved ranges, merging adjacent ranges with equal attributes.
    pub fn resolved_ranges_coalesced(&self) -> CoalescedRanges<'_> {
        CoalescedRanges::new(self.resolved_ranges())
    }

    /// Resolves the document into ranges using the default [`ResolveContext`].
    ///
    /// Resolution never modifies the document, so resolving twice gives identical output.
    ///
    /// # Panics
    ///
    /// Panics on a `Pop` with no matching `Push`. Use [`TextDocument::try_resolve`] for logs
    /// built by hand.
    pub fn resolve(&self) -> Vec<ResolvedRange> {
        self.resolve_with(&ResolveContext::default())
    }

    /// Resolves the document into ranges using `context`.
    ///
    /// # Panics
    ///
    /// Panics on a `Pop` with no matching `Push`.
    pub fn resolve_with(&self, context: &ResolveContext) -> Vec<ResolvedRange> {
        let ranges: Vec<_> = self.resolved_ranges_with(context).collect();
        log::debug!(
            "resolved {} directives over {} bytes into {} ranges",
            self.directives.len(),
            self.text.len(),
            ranges.len()
        );
        ranges
    }

    /// Resolves the document, reporting unbalanced scope markers as an error.
    pub fn try_resolve(&self, context: &ResolveContext) -> Result<Vec<ResolvedRange>, Error> {
        check_scopes(self)?;
        Ok(self.resolve_with(context))
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::from(String::from(text))
    }
}

impl From<String> for TextDocument {
    fn from(text: String) -> Self {
        Self {
            text,
            directives: Vec::new(),
        }
    }
}

impl From<StyleMarker> for TextDocument {
    fn from(marker: StyleMarker) -> Self {
        let mut document = Self::new();
        document.append_marker(marker);
        document
    }
}
