//! # nearnow-core: Pure Home Feed Logic
//!
//! This crate holds the logic behind the Near & Now home screen as pure,
//! synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Home Feed Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View Layer (mobile client)                   │   │
//! │  │   Category strip ──► Product grid ──► "Load More" ──► Pull     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots / commands                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              nearnow-catalog (CatalogController)                │   │
//! │  │        concurrent fetch, load state, feed events                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nearnow-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ pagination │  │   feed    │  │   types   │  │  format   │  │   │
//! │  │   │ PageWindow │  │ Feed<T,C> │  │ Product   │  │ labels    │  │   │
//! │  │   │            │  │ Summary   │  │ LoadState │  │ tints     │  │   │
//! │  │   └────────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO ASYNC • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pagination`] - `PageWindow`, the clamped "how many are visible" counter
//! - [`feed`] - `Feed`, the collection + categories + window unit
//! - [`types`] - Domain types (Product, Category, LoadState)
//! - [`format`] - Category labels, placeholder images, tile tints
//! - [`validation`] - Page size rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use nearnow_core::feed::Feed;
//!
//! let mut feed: Feed<u32, String> = Feed::new(12).unwrap();
//! feed.replace((0..30).collect(), vec![]);
//!
//! assert_eq!(feed.visible_items().len(), 12);
//! feed.load_more();
//! feed.load_more();
//! assert_eq!(feed.visible_items().len(), 30);
//! assert!(!feed.has_more());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod feed;
pub mod format;
pub mod pagination;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use feed::{Feed, PageSummary};
pub use pagination::PageWindow;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of products revealed initially and per "Load More" press.
pub const DEFAULT_PAGE_SIZE: usize = 12;
