//! # Data Sources
//!
//! The two collaborators the feed pulls from: a product source and a
//! category source. Each returns its complete list in one call; there is no
//! server-side paging.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Source Implementations                         │
//! │                                                                         │
//! │  trait ProductSource            trait CategorySource                   │
//! │  fetch_all_items()              fetch_all_categories()                 │
//! │        ▲                                ▲                               │
//! │        ├────────────────┬───────────────┤                               │
//! │        │                │               │                               │
//! │  ┌─────┴──────────┐  ┌──┴───────────────┴──┐                            │
//! │  │ StaticSource<T>│  │ JsonFileSource<T>   │                            │
//! │  │ in-memory,     │  │ JSON array on disk, │                            │
//! │  │ switchable     │  │ read with tokio::fs │                            │
//! │  │ failure        │  │                     │                            │
//! │  └────────────────┘  └─────────────────────┘                            │
//! │                                                                         │
//! │  A backend client (REST, gRPC, ...) plugs in by implementing the       │
//! │  same traits.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

// =============================================================================
// Source Error
// =============================================================================

/// A failed fetch from one source.
///
/// The message is whatever the source reported (network, parsing,
/// authorization, ...); the controller treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source_name}: {message}")]
pub struct SourceError {
    source_name: String,
    message: String,
}

impl SourceError {
    pub fn new(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        SourceError {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Name of the source that failed, e.g. `"products"`.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// =============================================================================
// Source Traits
// =============================================================================

/// Supplies the complete product catalog.
#[async_trait]
pub trait ProductSource: Send + Sync {
    type Item: Clone + Send + Sync + 'static;

    /// Fetches every product, in server order.
    async fn fetch_all_items(&self) -> Result<Vec<Self::Item>, SourceError>;
}

/// Supplies the complete category list.
#[async_trait]
pub trait CategorySource: Send + Sync {
    type Category: Clone + Send + Sync + 'static;

    /// Fetches every category, in server order.
    async fn fetch_all_categories(&self) -> Result<Vec<Self::Category>, SourceError>;
}

// =============================================================================
// Static Source
// =============================================================================

/// In-memory source.
///
/// Cloning yields another handle to the same data, so a test or demo can
/// keep one handle and swap the contents (or inject a failure) while the
/// controller owns the other.
#[derive(Debug)]
pub struct StaticSource<T> {
    name: String,
    data: Arc<Mutex<Result<Vec<T>, String>>>,
    fetches: Arc<AtomicUsize>,
}

impl<T> Clone for StaticSource<T> {
    fn clone(&self) -> Self {
        StaticSource {
            name: self.name.clone(),
            data: Arc::clone(&self.data),
            fetches: Arc::clone(&self.fetches),
        }
    }
}

impl<T: Clone> StaticSource<T> {
    /// Creates a source that returns `items` on every fetch.
    pub fn new(name: impl Into<String>, items: Vec<T>) -> Self {
        StaticSource {
            name: name.into(),
            data: Arc::new(Mutex::new(Ok(items))),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Subsequent fetches return `items`.
    pub fn set_items(&self, items: Vec<T>) {
        *self.data.lock().unwrap_or_else(PoisonError::into_inner) = Ok(items);
    }

    /// Subsequent fetches fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.data.lock().unwrap_or_else(PoisonError::into_inner) = Err(message.into());
    }

    /// Number of fetches served so far, failed ones included.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn fetch(&self) -> Result<Vec<T>, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        data.clone()
            .map_err(|message| SourceError::new(self.name.clone(), message))
    }
}

#[async_trait]
impl<T> ProductSource for StaticSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Item = T;

    async fn fetch_all_items(&self) -> Result<Vec<T>, SourceError> {
        self.fetch()
    }
}

#[async_trait]
impl<T> CategorySource for StaticSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Category = T;

    async fn fetch_all_categories(&self) -> Result<Vec<T>, SourceError> {
        self.fetch()
    }
}

// =============================================================================
// JSON File Source
// =============================================================================

/// Source backed by a JSON array on disk.
///
/// The file is re-read on every fetch, so editing it and refreshing shows
/// the new contents.
#[derive(Debug, Clone)]
pub struct JsonFileSource<T> {
    name: String,
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> JsonFileSource<T> {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        JsonFileSource {
            name: name.into(),
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<T>, SourceError> {
        debug!(source = %self.name, path = ?self.path, "Reading JSON source");

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::new(self.name.clone(), e.to_string()))?;

        let records: Vec<T> = serde_json::from_slice(&bytes)
            .map_err(|e| SourceError::new(self.name.clone(), format!("invalid JSON: {}", e)))?;

        debug!(source = %self.name, count = records.len(), "JSON source read");
        Ok(records)
    }
}

#[async_trait]
impl<T> ProductSource for JsonFileSource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Item = T;

    async fn fetch_all_items(&self) -> Result<Vec<T>, SourceError> {
        self.read().await
    }
}

#[async_trait]
impl<T> CategorySource for JsonFileSource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Category = T;

    async fn fetch_all_categories(&self) -> Result<Vec<T>, SourceError> {
        self.read().await
    }
}
