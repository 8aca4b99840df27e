//! # Page Window
//!
//! The "how many products are visible" counter behind the Load More button.
//!
//! ## Window Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 PageWindow (page_size = 12, len = 30)                   │
//! │                                                                         │
//! │  new()            shown = 0                                            │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  reset(30)        shown = min(12, 30)      = 12   has_more = true      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  advance(30)      shown = min(12 + 12, 30) = 24   has_more = true      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  advance(30)      shown = min(24 + 12, 30) = 30   has_more = false     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  advance(30)      no-op, returns false                                 │
//! │                                                                         │
//! │  Only reset() may shrink the window. advance() never does.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The window never stores the collection length. Every operation takes the
//! current length, so the result depends only on `(shown, len)` and not on
//! how many times a button was tapped.

use serde::{Deserialize, Serialize};

use crate::validation::{validate_page_size, ValidationResult};

/// A clamped count of leading items that are visible.
///
/// ## Invariants
/// - `page_size >= 1`, fixed at construction
/// - `shown <= len` for the `len` last passed to [`reset`](Self::reset)
///   or [`advance`](Self::advance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    page_size: usize,
    shown: usize,
}

impl PageWindow {
    /// Creates an empty window with the given page size.
    pub fn new(page_size: usize) -> ValidationResult<Self> {
        validate_page_size(page_size)?;
        Ok(PageWindow {
            page_size,
            shown: 0,
        })
    }

    /// Returns the page size.
    #[inline]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of visible items.
    #[inline]
    pub const fn shown(&self) -> usize {
        self.shown
    }

    /// Resets to the first page of a collection of `len` items.
    pub fn reset(&mut self, len: usize) {
        self.shown = self.page_size.min(len);
    }

    /// Reveals one more page, clamped to `len`.
    ///
    /// Returns `true` if the window grew.
    pub fn advance(&mut self, len: usize) -> bool {
        if self.shown >= len {
            return false;
        }
        self.shown = self.shown.saturating_add(self.page_size).min(len);
        true
    }

    /// Returns true if items beyond the window exist.
    #[inline]
    pub const fn has_more(&self, len: usize) -> bool {
        self.shown < len
    }

    /// Number of visible items for a collection of `len` items.
    ///
    /// Equal to `shown()` whenever the invariant holds; used when slicing.
    #[inline]
    pub fn clamp(&self, len: usize) -> usize {
        self.shown.min(len)
    }

    /// Number of pages represented by the current window.
    pub fn pages_shown(&self) -> usize {
        self.shown.div_ceil(self.page_size)
    }
}
