//! # Domain Types
//!
//! Types shared by the feed controller and the mobile client.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │   LoadState     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  Idle           │       │
//! │  │  name           │   │  name (raw)     │   │  Loading        │       │
//! │  │  price          │   │  image_url      │   │  Error          │       │
//! │  │  image_url      │   │                 │   │                 │       │
//! │  └─────────────────┘   └────────┬────────┘   └─────────────────┘       │
//! │                                 │ link()                                │
//! │                                 ▼                                       │
//! │                        ┌─────────────────┐                              │
//! │                        │  CategoryLink   │  navigation payload          │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The feed itself is generic; it only needs [`Identified`] for keying.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::format::{format_category_name, placeholder_image_url};

// =============================================================================
// Identity
// =============================================================================

/// A record with a stable unique identifier.
///
/// The view uses the id as a list key; the controller never looks at any
/// other field.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Keeps the first record for each id, preserving order.
///
/// Sources may return the same record twice; the view keys rows on the id,
/// so duplicates are dropped before rendering.
pub fn distinct_by_id<T: Identified>(records: &[T]) -> Vec<&T> {
    let mut seen = HashSet::new();
    records.iter().filter(|r| seen.insert(r.id())).collect()
}

// =============================================================================
// Product
// =============================================================================

/// A product shown in the home grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Selling price in the store currency.
    pub price: f64,

    /// Price before discount, when the product is on offer.
    #[serde(default)]
    pub original_price: Option<f64>,

    #[serde(default)]
    pub image_url: Option<String>,

    /// Raw category name this product is listed under.
    #[serde(default)]
    pub category: Option<String>,

    /// Sale unit, e.g. "1 kg" or "500 ml".
    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Returns true if the product is discounted.
    pub fn is_on_offer(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }
}

impl Identified for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Category
// =============================================================================

/// A category tile in the "Shop by Category" strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,

    /// Stored name, e.g. `"fresh_fruits"`. Used as the navigation key.
    pub name: String,

    #[serde(default)]
    pub image_url: Option<String>,
}

impl Category {
    /// Human-readable label, e.g. `"Fresh Fruits"`.
    pub fn display_name(&self) -> String {
        format_category_name(&self.name)
    }

    /// The category artwork, or a placeholder captioned with the raw name.
    pub fn image_or_placeholder(&self) -> String {
        match self.image_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => placeholder_image_url(&self.name),
        }
    }

    /// Navigation payload for opening this category's product list.
    pub fn link(&self) -> CategoryLink {
        CategoryLink {
            category_id: self.name.clone(),
            category_name: self.display_name(),
        }
    }
}

impl Identified for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters passed to the category screen.
///
/// `category_id` carries the raw name, which is what the category screen
/// filters products by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLink {
    pub category_id: String,
    pub category_name: String,
}

// =============================================================================
// Load State
// =============================================================================

/// Fetch state of the feed.
///
/// ## State Machine
/// ```text
///        load_all / refresh            both fetches ok
///  Idle ───────────────────► Loading ─────────────────► Idle
///    ▲                          │
///    │                          │ either fetch fails
///    │                          ▼
///    └──── (next load) ───── Error
/// ```
/// `Error` is only left by another explicit load; nothing retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    /// No fetch in flight; data (possibly empty) is trustworthy.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed; previously loaded data is still shown.
    Error,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error)
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadState::Idle => write!(f, "idle"),
            LoadState::Loading => write!(f, "loading"),
            LoadState::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for LoadState {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(LoadState::Idle),
            "loading" => Ok(LoadState::Loading),
            "error" | "failed" => Ok(LoadState::Error),
            other => Err(CoreError::UnknownLoadState(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, image_url: Option<&str>) -> Category {
        Category {
            id: "cat-1".to_string(),
            name: name.to_string(),
            image_url: image_url.map(str::to_string),
        }
    }

    #[test]
    fn test_load_state_default_is_idle() {
        assert_eq!(LoadState::default(), LoadState::Idle);
    }

    #[test]
    fn test_load_state_parsing() {
        assert_eq!("idle".parse::<LoadState>().unwrap(), LoadState::Idle);
        assert_eq!("LOADING".parse::<LoadState>().unwrap(), LoadState::Loading);
        assert_eq!("failed".parse::<LoadState>().unwrap(), LoadState::Error);
        assert!("refreshing".parse::<LoadState>().is_err());
        assert_eq!(LoadState::Error.to_string(), "error");
    }

    #[test]
    fn test_category_link_uses_raw_name_as_id() {
        let link = category("fresh_fruits", None).link();
        assert_eq!(link.category_id, "fresh_fruits");
        assert_eq!(link.category_name, "Fresh Fruits");
    }

    #[test]
    fn test_category_image_fallback() {
        let with_image = category("dairy", Some("https://cdn.example/dairy.png"));
        assert_eq!(with_image.image_or_placeholder(), "https://cdn.example/dairy.png");

        let empty_image = category("dairy", Some(""));
        assert_eq!(
            empty_image.image_or_placeholder(),
            "https://via.placeholder.com/200x200?text=dairy"
        );

        let no_image = category("baby care", None);
        assert_eq!(
            no_image.image_or_placeholder(),
            "https://via.placeholder.com/200x200?text=baby%20care"
        );
    }

    #[test]
    fn test_product_from_minimal_json() {
        let json = r#"{ "id": "p-1", "name": "Amul Milk", "price": 28.0 }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id(), "p-1");
        assert!(product.in_stock);
        assert!(product.image_url.is_none());
        assert!(!product.is_on_offer());
    }

    #[test]
    fn test_distinct_by_id_keeps_first_occurrence() {
        let categories = vec![
            Category {
                id: "c-1".to_string(),
                name: "dairy".to_string(),
                image_url: None,
            },
            Category {
                id: "c-2".to_string(),
                name: "snacks".to_string(),
                image_url: None,
            },
            Category {
                id: "c-1".to_string(),
                name: "dairy_copy".to_string(),
                image_url: None,
            },
        ];

        let distinct = distinct_by_id(&categories);
        let names: Vec<&str> = distinct.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["dairy", "snacks"]);
    }

    #[test]
    fn test_product_on_offer() {
        let json = r#"{ "id": "p-2", "name": "Atta", "price": 240.0, "original_price": 275.0 }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.is_on_offer());
    }
}
