//! # Display Formatting
//!
//! Label and artwork helpers for the category strip.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Base URL of the placeholder image service used when a category has no
/// artwork of its own.
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/200x200";

/// Turns a stored category name into a display label.
///
/// Splits on underscores, hyphens and whitespace, title-cases each word and
/// joins with single spaces.
///
/// ```rust
/// use nearnow_core::format::format_category_name;
///
/// assert_eq!(format_category_name("fresh_fruits"), "Fresh Fruits");
/// assert_eq!(format_category_name("DAIRY-and  eggs"), "Dairy And Eggs");
/// ```
pub fn format_category_name(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Placeholder image URL carrying `label` as its caption.
pub fn placeholder_image_url(label: &str) -> String {
    format!(
        "{}?text={}",
        PLACEHOLDER_IMAGE_BASE,
        urlencoding::encode(label)
    )
}

// =============================================================================
// Tile Tint
// =============================================================================

/// Background shade of a category tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TileTint {
    Gray50,
    Gray100,
}

const TILE_TINTS: [TileTint; 4] = [
    TileTint::Gray50,
    TileTint::Gray100,
    TileTint::Gray50,
    TileTint::Gray100,
];

/// Tint for the tile at `index` in the category strip.
pub fn category_tint(index: usize) -> TileTint {
    TILE_TINTS[index % TILE_TINTS.len()]
}
