// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Line style of an underline decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnderlineStyle {
    /// A single thin line.
    #[default]
    Single,
    /// A single thick line.
    Thick,
    /// Two thin lines.
    Double,
}
