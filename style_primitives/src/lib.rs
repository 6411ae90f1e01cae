// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value types for styled text streams.
//!
//! These are the "toolkit" values an attributed stream carries without interpreting much of
//! them: fonts (and the trait conversions that turn a font into its bold or italic sibling),
//! colors, drop shadows, underline styles and inline objects.
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwarded to `peniko`.
//! - `libm`: Forwarded to `peniko` for `no_std` builds.
//!
//! ## Example
//!
//! ```
//! use style_primitives::{Font, FontTraits, FontWeight};
//!
//! let body = Font::new("Helvetica", 13.0);
//! let bold = body.with_traits(FontTraits::BOLD);
//! assert_eq!(bold.weight(), FontWeight::BOLD);
//! assert_eq!(bold.with_traits(FontTraits::UNBOLD), body);
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

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("style_primitives requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod decoration;
mod font;
mod inline_object;
mod shadow;

pub use decoration::UnderlineStyle;
pub use font::{Font, FontStyle, FontTraits, FontWeight};
pub use inline_object::InlineObject;
pub use shadow::Shadow;

pub use peniko::color::palette;
pub use peniko::kurbo::Vec2;
pub use peniko::Color;
