// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-style chaining with `<<`.
//!
//! `doc << "text" << StyleMarker::Bold` consumes and returns the document, `&doc << x` extends a
//! copy, and `StyleMarker::Bold << "text"` starts a fresh document with the marker.

use core::ops::Shl;

use crate::{Fragment, StyleMarker, TextDocument};

impl<'a, T: Into<Fragment<'a>>> Shl<T> for TextDocument {
    type Output = Self;

    fn shl(mut self, rhs: T) -> Self {
        self.append(rhs);
        self
    }
}

impl<'a, T: Into<Fragment<'a>>> Shl<T> for &TextDocument {
    type Output = TextDocument;

    fn shl(self, rhs: T) -> TextDocument {
        self.clone() << rhs
    }
}

impl<'a, T: Into<Fragment<'a>>> Shl<T> for StyleMarker {
    type Output = TextDocument;

    fn shl(self, rhs: T) -> TextDocument {
        TextDocument::from(self) << rhs
    }
}
