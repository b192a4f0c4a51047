// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::options::IndentOptions;

/// Creates indent strings using the stack paradigm.
///
/// A writer of nested markup pushes one level before each opening
/// construct and pops one level before each closing construct;
/// the returned text (a line feed followed by the spaces for that
/// nesting level, possibly empty) is written to the output
/// immediately preceding the construct.
///
/// Every indent string is synthesized at most once per depth and
/// cached, so documents with repeated sibling structure revisit
/// already constructed strings.
///
/// An `Indenter` holds mutable session state for exactly one
/// document being written; writing several documents concurrently
/// requires one instance per document.
#[derive(Debug)]
pub struct Indenter {
    /// Lazily filled, index-addressed store of indent strings.
    cache: Cache,
    /// Number of spaces added per nesting level.
    step: isize,
    /// Running number of spaces for the current level.
    width: isize,
    /// Stack position of the current level.
    ///
    /// Signed, so that popping more often than pushing
    /// stays representable and later pushes recover.
    index: isize,
}

impl Default for Indenter {
    fn default() -> Self {
        Self::new(&IndentOptions::default())
    }
}

impl Indenter {
    #[must_use]
    pub fn new(options: &IndentOptions) -> Self {
        Self {
            cache: Cache::new(options.initial_capacity),
            step: isize::try_from(options.step_width).unwrap_or(isize::MAX),
            width: 0,
            index: 0,
        }
    }

    /// Pushes one nesting level and returns the indent
    /// that precedes the construct being opened.
    ///
    /// The returned text belongs to the level that was current
    /// *before* this call; the level for the next request is
    /// already advanced when this returns.
    /// A push at the root level yields empty text,
    /// as the very first construct of a document
    /// needs no leading line feed.
    pub fn push(&mut self) -> &str {
        if self.step == 0 {
            return "";
        }
        let at = self.index;
        let width = self.width;
        self.index += 1;
        self.width += self.step;
        let text = self.acquire(at, width);
        if at == 0 { "" } else { text }
    }

    /// Pops one nesting level and returns the indent
    /// that precedes the construct being closed.
    ///
    /// Popping more often than pushing is not an error:
    /// the lookup index turns negative,
    /// which always misses the cache,
    /// and the result degrades to empty text.
    pub fn pop(&mut self) -> &str {
        if self.step == 0 {
            return "";
        }
        self.index -= 1;
        self.width -= self.step;
        let (at, width) = (self.index, self.width);
        self.acquire(at, width)
    }

    /// Number of indents cached so far (the cache's high-water mark).
    ///
    /// Advisory bookkeeping for diagnostics only.
    #[must_use]
    pub fn cached_levels(&self) -> usize {
        self.cache.size()
    }

    /// Acquires the indent stored at the given stack position,
    /// synthesizing and caching it first if this position
    /// was never visited before.
    ///
    /// Negative positions are never stored and always miss.
    fn acquire(&mut self, at: isize, width: isize) -> &str {
        if self.cache.get(at).is_none() {
            let Ok(slot) = usize::try_from(at) else {
                return "";
            };
            self.cache.set(slot, Self::create(width));
        }
        self.cache.get(at).unwrap_or("")
    }

    /// Synthesizes the indent text for the given number of spaces:
    /// a line feed, followed by exactly `width` spaces.
    /// Zero (or negative, after an underflow) widths
    /// still get the bare line feed.
    fn create(width: isize) -> String {
        let spaces = usize::try_from(width).unwrap_or_default();
        let mut text = String::with_capacity(spaces + 1);
        text.push('\n');
        text.extend(std::iter::repeat(' ').take(spaces));
        text
    }
}

/// An index-addressed string store,
/// owned by exactly one [`Indenter`]
/// and living exactly as long as it.
///
/// Slots are filled lazily and,
/// once set, never change.
#[derive(Debug)]
struct Cache {
    slots: Vec<Option<String>>,
    /// Highest index ever set.
    high: usize,
}

impl Cache {
    fn new(capacity: usize) -> Self {
        Self {
            // A zero hint would break the index-doubling growth below.
            slots: vec![None; capacity.max(1)],
            high: 0,
        }
    }

    fn size(&self) -> usize {
        self.high
    }

    /// The stored indent for `index`,
    /// or `None` for unset slots,
    /// indices beyond the backing length
    /// and negative indices.
    fn get(&self, index: isize) -> Option<&str> {
        let index = usize::try_from(index).ok()?;
        self.slots.get(index)?.as_deref()
    }

    /// Stores `text` at `index`,
    /// growing the backing storage to twice the requested index
    /// when it does not reach that far yet.
    /// Growth preserves all previously stored slots.
    fn set(&mut self, index: usize, text: String) {
        if index >= self.slots.len() {
            let grown = index * 2;
            tracing::trace!(
                "Growing indent cache from {} to {grown} slots",
                self.slots.len()
            );
            self.slots.resize(grown, None);
        }
        if index > self.high {
            self.high = index;
        }
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(text);
        }
    }
}
