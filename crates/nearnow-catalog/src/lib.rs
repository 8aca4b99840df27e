//! # nearnow-catalog: Home Feed Controller
//!
//! Loads the product catalog and the category list for the Near & Now home
//! screen and hands products to the view a page at a time.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Home Feed Architecture                           │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 CatalogController (controller.rs)                │  │
//! │  │                                                                  │  │
//! │  │  load_all / refresh ── concurrent fetch of both sources          │  │
//! │  │  load_more ─────────── next page of already-fetched items        │  │
//! │  │  snapshot ──────────── consistent view of feed + load state      │  │
//! │  └──────┬─────────────────────────┬──────────────────────┬──────────┘  │
//! │         ▼                         ▼                      ▼              │
//! │  ┌────────────────┐  ┌────────────────────┐  ┌────────────────────┐    │
//! │  │ ProductSource  │  │  CategorySource    │  │ FeedEventEmitter   │    │
//! │  │ (source.rs)    │  │  (source.rs)       │  │ (events.rs)        │    │
//! │  └────────────────┘  └────────────────────┘  └────────────────────┘    │
//! │                                                                         │
//! │  CatalogConfig (config.rs): page size + source paths, TOML + env       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`controller`] - `CatalogController`, the pagination/fetch controller
//! - [`source`] - Source traits plus in-memory and JSON file sources
//! - [`events`] - Feed events for the view layer
//! - [`config`] - Configuration (page size, source paths)
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nearnow_catalog::{CatalogConfig, CatalogController, JsonFileSource};
//! use nearnow_core::{Category, Product};
//!
//! let config = CatalogConfig::load_or_default(None);
//! let products: JsonFileSource<Product> =
//!     JsonFileSource::new("products", &config.source.products_path);
//! let categories: JsonFileSource<Category> =
//!     JsonFileSource::new("categories", &config.source.categories_path);
//!
//! let controller = CatalogController::new(products, categories, config.page_size())?;
//! controller.load_all().await?;
//!
//! while controller.has_more() {
//!     controller.load_more();
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod source;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{CatalogConfig, FeedSettings, SourceSettings};
pub use controller::{CatalogController, FeedSnapshot, LoadKind, Loaded};
pub use error::{CatalogError, CatalogResult, FetchFailure};
pub use events::{FeedEvent, FeedEventEmitter, NoOpEmitter, RecordingEmitter, LOAD_FAILED_NOTICE};
pub use source::{CategorySource, JsonFileSource, ProductSource, SourceError, StaticSource};

/// Initialises `tracing` for the binaries.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=nearnow_catalog=trace` - Trace this crate only
/// - Default: `info,nearnow_catalog=debug`
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nearnow_catalog=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
