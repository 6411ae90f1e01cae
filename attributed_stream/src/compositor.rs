// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single forward pass that turns a directive log into attribute runs.

use core::iter::FusedIterator;
use core::mem;
use core::ops::Range;

use smallvec::SmallVec;
use style_primitives::{Font, FontTraits, Shadow, UnderlineStyle};

use crate::{
    AttributeDictionary, AttributeKey, AttributeValue, Directive, Error, StyleMarker, TextDocument,
};

/// Settings for resolving a [`TextDocument`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolveContext {
    base_font: Font,
}

impl ResolveContext {
    /// Creates a context with the default base font.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font that font-trait markers start from when no font attribute is active.
    #[must_use]
    pub fn with_base_font(mut self, font: Font) -> Self {
        self.base_font = font;
        self
    }

    /// The font that font-trait markers start from when no font attribute is active.
    pub fn base_font(&self) -> &Font {
        &self.base_font
    }
}

/// A contiguous range of text and the attributes active over all of it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRange {
    /// The byte range in the document's text.
    pub range: Range<usize>,
    /// The concrete attributes for this range.
    pub attributes: AttributeDictionary,
}

impl ResolvedRange {
    /// Returns the slice of `document` this range covers.
    ///
    /// Returns `None` if `document` is not the document this range was resolved from and the
    /// range does not fit its text.
    pub fn text<'d>(&self, document: &'d TextDocument) -> Option<&'d str> {
        document.as_str().get(self.range.clone())
    }
}

/// An iterator over the resolved ranges of a [`TextDocument`].
///
/// Ranges are yielded in order, never overlap, and together cover the whole text exactly once.
/// A new range starts at every directive position that lies past the previous range, even if
/// the attributes did not change; see [`CoalescedRanges`] for merged output.
#[derive(Clone, Debug)]
pub struct ResolvedRanges<'a> {
    document: &'a TextDocument,
    base_font: Font,
    current: AttributeDictionary,
    /// Whether the active font was derived from the base font rather than set explicitly.
    implicit_font: bool,
    scopes: SmallVec<[(AttributeDictionary, bool); 4]>,
    last: usize,
    index: usize,
}

impl<'a> ResolvedRanges<'a> {
    pub(crate) fn new(document: &'a TextDocument, context: &ResolveContext) -> Self {
        Self {
            document,
            base_font: context.base_font.clone(),
            current: AttributeDictionary::new(),
            implicit_font: false,
            scopes: SmallVec::new(),
            last: 0,
            index: 0,
        }
    }

    fn emit(&mut self, end: usize) -> ResolvedRange {
        let range = self.last..end;
        self.last = end;
        ResolvedRange {
            range,
            attributes: self.current.clone(),
        }
    }

    fn apply(&mut self, position: usize, directive: &Directive) {
        match directive {
            Directive::Set(key, value) => {
                if *key == AttributeKey::Font {
                    self.implicit_font = false;
                }
                self.current.insert(key.clone(), value.clone());
            }
            Directive::Clear(key) => {
                if *key == AttributeKey::Font {
                    self.implicit_font = false;
                }
                self.current.remove(key);
            }
            Directive::Marker(marker) => self.apply_marker(position, *marker),
        }
    }

    fn apply_marker(&mut self, position: usize, marker: StyleMarker) {
        match marker {
            StyleMarker::Bold | StyleMarker::Unbold | StyleMarker::Italic | StyleMarker::Unitalic => {
                let traits = marker
                    .font_traits()
                    .expect("font-trait marker missing from the trait table");
                self.apply_font_traits(traits);
            }
            StyleMarker::Underline => {
                self.current.insert(
                    AttributeKey::UnderlineStyle,
                    AttributeValue::Underline(UnderlineStyle::Single),
                );
            }
            StyleMarker::NoUnderline => {
                self.current.remove(&AttributeKey::UnderlineStyle);
            }
            StyleMarker::Emboss => {
                self.current
                    .insert(AttributeKey::Shadow, AttributeValue::Shadow(Shadow::EMBOSS));
            }
            StyleMarker::NoEmboss => {
                self.current.remove(&AttributeKey::Shadow);
            }
            StyleMarker::Push => {
                let outer = mem::take(&mut self.current);
                let implicit_font = mem::take(&mut self.implicit_font);
                self.scopes.push((outer, implicit_font));
                log::trace!("push at {position}, depth {}", self.scopes.len());
            }
            StyleMarker::Pop => {
                (self.current, self.implicit_font) = self
                    .scopes
                    .pop()
                    .expect("popped an empty scope stack: `Pop` without a matching `Push`");
                log::trace!("pop at {position}, depth {}", self.scopes.len());
            }
        }
    }

    /// Converts the active font, or the base font if none is active.
    ///
    /// A font derived from the base font that lands back on it unbinds the font key, so a
    /// toggle followed by its inverse leaves no trace. Explicitly set fonts are always kept.
    fn apply_font_traits(&mut self, traits: FontTraits) {
        let (source, implicit) = match self.current.font() {
            Some(font) => (font, self.implicit_font),
            None => (&self.base_font, true),
        };
        let font = source.with_traits(traits);
        if implicit && font == self.base_font {
            self.current.remove(&AttributeKey::Font);
            self.implicit_font = false;
        } else {
            self.current
                .insert(AttributeKey::Font, AttributeValue::Font(font));
            self.implicit_font = implicit;
        }
    }
}

impl Iterator for ResolvedRanges<'_> {
    type Item = ResolvedRange;

    fn next(&mut self) -> Option<Self::Item> {
        let document = self.document;
        while let Some((position, directive)) = document.directives.get(self.index) {
            if *position > self.last {
                return Some(self.emit(*position));
            }
            self.apply(*position, directive);
            self.index += 1;
        }
        if self.last < document.len() {
            return Some(self.emit(document.len()));
        }
        None
    }
}

impl FusedIterator for ResolvedRanges<'_> {}

/// An iterator over resolved ranges that merges adjacent ranges with equal attributes.
#[derive(Clone, Debug)]
pub struct CoalescedRanges<'a> {
    inner: ResolvedRanges<'a>,
    pending: Option<ResolvedRange>,
}

impl<'a> CoalescedRanges<'a> {
    pub(crate) fn new(inner: ResolvedRanges<'a>) -> Self {
        Self {
            inner,
            pending: None,
        }
    }
}

impl Iterator for CoalescedRanges<'_> {
    type Item = ResolvedRange;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = self.pending.take().or_else(|| self.inner.next())?;

        for next_run in self.inner.by_ref() {
            if next_run.range.start == run.range.end && next_run.attributes == run.attributes {
                run.range.end = next_run.range.end;
                continue;
            }
            self.pending = Some(next_run);
            break;
        }

        Some(run)
    }
}

/// Checks that every `Pop` in the log has a matching `Push` before it.
pub(crate) fn check_scopes(document: &TextDocument) -> Result<(), Error> {
    let mut depth = 0_usize;
    for (index, (position, directive)) in document.directives.iter().enumerate() {
        match directive {
            Directive::Marker(StyleMarker::Push) => depth += 1,
            Directive::Marker(StyleMarker::Pop) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::stack_underflow(index, *position, document.len()))?;
            }
            _ => {}
        }
    }
    Ok(())
}
