// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled text built as a stream, resolved into attribute runs.
//!
//! A [`TextDocument`] accumulates text interleaved with style directives: attribute values
//! (fonts, colors, shadows), symbolic [`StyleMarker`]s such as bold or underline, embedded
//! objects, links and nested documents. Nothing is resolved while appending. When the final
//! representation is needed, one linear pass (see [`ResolvedRanges`]) replays the log against a
//! live [`AttributeDictionary`] and produces [`ResolvedRange`]s: ordered, non-overlapping byte
//! ranges covering the whole text, each with its concrete attributes.
//!
//! Markers are resolved lazily because their meaning depends on what is active at their
//! position: "bold" means "the font active here, converted to bold".
//!
//! ## Nested documents
//!
//! [`TextDocument::append_document`] brackets the child's directives with
//! [`StyleMarker::Push`]/[`StyleMarker::Pop`]. The child resolves against an empty attribute
//! set and the parent's attributes are restored after it.
//!
//! ## Indices
//!
//! All positions and ranges are **byte indices** into UTF-8 text.
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwarded to `style_primitives`.
//! - `libm`: Forwarded to `style_primitives` for `no_std` builds.
//!
//! ## Example
//!
//! ```
//! use attributed_stream::style_primitives::{palette, FontTraits};
//! use attributed_stream::{StyleMarker, TextDocument};
//!
//! let mut doc = TextDocument::from("A");
//! doc.append(StyleMarker::Bold).append("B").append(StyleMarker::Unbold).append("C");
//!
//! let ranges = doc.resolve();
//! assert_eq!(ranges.len(), 3);
//! assert_eq!(ranges[1].range, 1..2);
//! assert_eq!(
//!     ranges[1].attributes.font().map(|font| font.traits()),
//!     Some(FontTraits::BOLD)
//! );
//! assert!(ranges[2].attributes.is_empty());
//!
//! // Nested documents do not inherit the outer color.
//! let inner = TextDocument::from("y");
//! let outer = TextDocument::new() << palette::css::RED << "x" << &inner << "z";
//! let ranges = outer.resolve();
//! assert_eq!(ranges[1].attributes.foreground_color(), None);
//! assert_eq!(ranges[2].attributes.foreground_color(), Some(palette::css::RED));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub use style_primitives;

mod attribute;
mod compositor;
mod directive;
mod document;
mod error;
mod fragment;
mod ops;

#[cfg(test)]
mod tests;

pub use crate::attribute::{AttributeDictionary, AttributeKey, AttributeValue, Link};
pub use crate::compositor::{CoalescedRanges, ResolveContext, ResolvedRange, ResolvedRanges};
pub use crate::directive::{Directive, StyleMarker};
pub use crate::document::{TextDocument, LINK_COLOR, OBJECT_REPLACEMENT_CHARACTER};
pub use crate::error::{BoundaryInfo, Error, ErrorKind};
pub use crate::fragment::{Background, Fragment, StyleValue};
