// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

/// Construction-time configuration for an [`Indenter`].
///
/// [`Indenter`]: crate::indenter::Indenter
#[derive(Debug, Clone, Copy)]
pub struct IndentOptions {
    /// Number of spaces added per nesting level.
    ///
    /// Zero disables indentation entirely:
    /// push and pop then always yield empty text,
    /// and no indent strings are ever cached.
    pub step_width: usize,
    /// Pre-sizes the backing storage of the indent cache.
    ///
    /// This is purely a performance hint;
    /// the cache grows on demand for documents
    /// nested deeper than this.
    pub initial_capacity: usize,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            step_width: 3,
            initial_capacity: 16,
        }
    }
}
