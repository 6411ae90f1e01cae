// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rich error type for attributed stream operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the offending directive's index in the log, its
/// byte position, and, for boundary failures, the enclosing UTF-8 character span.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Index of the offending directive in the log.
    index: usize,

    /// The byte position the offending directive is stamped with.
    position: usize,

    /// The length in bytes of the text at the time of failure.
    len: usize,

    /// Extra detail for boundary-related errors, when available.
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Index of the offending directive in the log.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The byte position of the offending directive.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The length in bytes of the text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    fn new(kind: ErrorKind, index: usize, position: usize, len: usize) -> Self {
        Self {
            kind,
            index,
            position,
            len,
            boundary: None,
        }
    }

    pub(crate) fn position_out_of_bounds(index: usize, position: usize, len: usize) -> Self {
        Self::new(ErrorKind::PositionOutOfBounds, index, position, len)
    }

    pub(crate) fn non_monotonic_position(index: usize, position: usize, len: usize) -> Self {
        Self::new(ErrorKind::NonMonotonicPosition, index, position, len)
    }

    pub(crate) fn stack_underflow(index: usize, position: usize, len: usize) -> Self {
        Self::new(ErrorKind::StackUnderflow, index, position, len)
    }

    pub(crate) fn not_on_char_boundary(text: &str, index: usize, position: usize) -> Self {
        let (char_start, char_end) =
            enclosing_char_span(text, position).unwrap_or((position, position));
        Self {
            boundary: Some(BoundaryInfo {
                char_start,
                char_end,
            }),
            ..Self::new(ErrorKind::NotOnCharBoundary, index, position, text.len())
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::PositionOutOfBounds => write!(
                f,
                "directive {} at {} out of bounds for len {}",
                self.index, self.position, self.len
            ),
            ErrorKind::NonMonotonicPosition => write!(
                f,
                "directive {} at {} precedes the directive before it",
                self.index, self.position
            ),
            ErrorKind::NotOnCharBoundary => {
                if let Some(b) = self.boundary {
                    write!(
                        f,
                        "directive {} at {} not on UTF-8 boundary (char {}..{})",
                        self.index, self.position, b.char_start, b.char_end
                    )
                } else {
                    write!(
                        f,
                        "directive {} at {} not on UTF-8 boundary",
                        self.index, self.position
                    )
                }
            }
            ErrorKind::StackUnderflow => write!(
                f,
                "directive {} at {}: pop without a matching push",
                self.index, self.position
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A directive was stamped past the end of the text.
    PositionOutOfBounds,

    /// A directive was stamped before the directive preceding it in the log.
    NonMonotonicPosition,

    /// A directive was stamped inside a multi-byte UTF-8 character.
    NotOnCharBoundary,

    /// A `Pop` marker had no matching `Push` before it.
    StackUnderflow,
}

/// The UTF-8 character enclosing a position that is not on a character boundary.
///
/// Returned by [`Error::boundary`] when the error kind is [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// The start byte index of the enclosing UTF-8 codepoint.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing UTF-8 codepoint.
    pub char_end: usize,
}

fn enclosing_char_span(text: &str, index: usize) -> Option<(usize, usize)> {
    if index > text.len() {
        return None;
    }
    if text.is_char_boundary(index) {
        return Some((index, index));
    }
    // A boundary exists at most 3 bytes away in either direction, and index 0 and the text
    // length are always boundaries.
    let start = (0..index).rev().find(|&i| text.is_char_boundary(i))?;
    let end = (index + 1..=text.len()).find(|&i| text.is_char_boundary(i))?;
    Some((start, end))
}
