// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A non-text object (an icon, an image) placed inline with text.
///
/// The object occupies exactly one placeholder character in the text it is embedded in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InlineObject {
    /// User-specified identifier, used to find which object in the output corresponds to which
    /// object in the input.
    pub id: u64,
    /// The width of the object in pixels.
    pub width: f32,
    /// The height of the object in pixels.
    pub height: f32,
}

impl InlineObject {
    /// Creates an inline object.
    pub fn new(id: u64, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}
