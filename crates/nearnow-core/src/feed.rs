//! # Feed
//!
//! The fetched collection, the category list and the page window, kept as
//! one unit so they can only change together.
//!
//! ## State Changes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Feed<T, C> State                                │
//! │                                                                         │
//! │  Event                 items        categories      window             │
//! │  ─────                 ─────        ──────────      ──────             │
//! │  new()                 []           []              0                  │
//! │  replace(i, c)         i            c               min(page, |i|)     │
//! │  load_more()           (same)       (same)          +page, clamped     │
//! │  visible_items()       read only: items[..window]                      │
//! │                                                                         │
//! │  A failed fetch never reaches the feed, so it stays untouched.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pagination::PageWindow;
use crate::validation::ValidationResult;

/// Collection + categories + visible window.
#[derive(Debug, Clone, PartialEq)]
pub struct Feed<T, C> {
    items: Vec<T>,
    categories: Vec<C>,
    window: PageWindow,
}

impl<T, C> Feed<T, C> {
    /// Creates an empty feed.
    pub fn new(page_size: usize) -> ValidationResult<Self> {
        Ok(Feed {
            items: Vec::new(),
            categories: Vec::new(),
            window: PageWindow::new(page_size)?,
        })
    }

    /// Replaces items and categories wholesale and resets the window to
    /// the first page.
    pub fn replace(&mut self, items: Vec<T>, categories: Vec<C>) {
        self.items = items;
        self.categories = categories;
        self.window.reset(self.items.len());
    }

    /// Reveals one more page. Returns `true` if the window grew.
    pub fn load_more(&mut self) -> bool {
        self.window.advance(self.items.len())
    }

    /// The leading `window` items.
    pub fn visible_items(&self) -> &[T] {
        &self.items[..self.window.clamp(self.items.len())]
    }

    /// Returns true if items beyond the window exist.
    pub fn has_more(&self) -> bool {
        self.window.has_more(self.items.len())
    }

    /// Every fetched item, visible or not.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn categories(&self) -> &[C] {
        &self.categories
    }

    /// Number of visible items.
    pub fn window(&self) -> usize {
        self.window.shown()
    }

    pub fn page_size(&self) -> usize {
        self.window.page_size()
    }

    /// Number of fetched items.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Shown/total counts for the section subtitle.
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            shown: self.window(),
            total: self.total(),
        }
    }
}

// =============================================================================
// Page Summary
// =============================================================================

/// Shown/total counts for a paginated section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    /// Items currently visible.
    pub shown: usize,
    /// Items fetched in total.
    pub total: usize,
}

impl PageSummary {
    /// Returns true if items beyond the window exist.
    pub fn has_more(&self) -> bool {
        self.shown < self.total
    }

    /// Subtitle text for the section, e.g. `"Showing 12 of 30 products"`.
    ///
    /// An empty collection gets the generic browse prompt instead of
    /// `"Showing 0 of 0"`.
    pub fn label(&self, noun: &str) -> String {
        if self.total > 0 {
            format!("Showing {} of {} {}", self.shown, self.total, noun)
        } else {
            "Browse through our complete collection".to_string()
        }
    }
}
