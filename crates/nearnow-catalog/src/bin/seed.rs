//! # Seed Data Generator
//!
//! Writes sample `products.json` and `categories.json` for the JSON sources.
//!
//! ## Usage
//! ```bash
//! # 60 products into ./data (default)
//! cargo run -p nearnow-catalog --bin seed
//!
//! # Custom amount and directory
//! cargo run -p nearnow-catalog --bin seed -- --count 200 --out ./fixtures
//! ```
//!
//! ## Generated Data
//! - One category per entry in `CATEGORIES`, some without artwork so the
//!   placeholder path gets exercised
//! - Products cycle through the categories; prices, offers and stock flags
//!   are derived from the index so runs are reproducible (ids are not)

use chrono::{Duration, Utc};
use std::env;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

use nearnow_catalog::{init_tracing, CatalogResult};
use nearnow_core::{Category, Product};

/// Category names and product names listed under them.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "fresh_fruits",
        &["Banana Robusta", "Apple Shimla", "Pomegranate", "Papaya", "Guava"],
    ),
    (
        "vegetables",
        &["Onion", "Potato", "Tomato Hybrid", "Coriander Bunch", "Green Chilli"],
    ),
    (
        "dairy_and_eggs",
        &["Toned Milk 500ml", "Paneer 200g", "Curd 400g", "Farm Eggs x6", "Butter 100g"],
    ),
    (
        "atta-rice-dal",
        &["Chakki Atta 5kg", "Basmati Rice 1kg", "Toor Dal 1kg", "Moong Dal 500g"],
    ),
    (
        "snacks",
        &["Aloo Bhujia", "Salted Chips", "Marie Biscuits", "Roasted Peanuts"],
    ),
    (
        "personal care",
        &["Neem Soap", "Herbal Shampoo", "Toothpaste 150g"],
    ),
];

const UNITS: &[&str] = &["1 pc", "500 g", "1 kg", "500 ml", "1 pack"];

fn main() -> CatalogResult<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let count = parse_count(&args);
    let out_dir = parse_out_dir(&args);

    info!(count, out = ?out_dir, "Generating seed data");

    let categories = build_categories();
    let products = build_products(count);

    std::fs::create_dir_all(&out_dir)?;
    std::fs::write(
        out_dir.join("categories.json"),
        serde_json::to_vec_pretty(&categories)?,
    )?;
    std::fs::write(
        out_dir.join("products.json"),
        serde_json::to_vec_pretty(&products)?,
    )?;

    info!(
        categories = categories.len(),
        products = products.len(),
        "Seed data written"
    );
    Ok(())
}

fn parse_count(args: &[String]) -> usize {
    flag_value(args, "--count")
        .and_then(|v| v.parse().ok())
        .unwrap_or(60)
}

fn parse_out_dir(args: &[String]) -> PathBuf {
    flag_value(args, "--out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn build_categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, (name, _))| Category {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            image_url: (i % 2 == 0)
                .then(|| format!("https://cdn.nearnow.example/categories/{}.png", i)),
        })
        .collect()
}

fn build_products(count: usize) -> Vec<Product> {
    let now = Utc::now();

    (0..count)
        .map(|i| {
            let (category, names) = CATEGORIES[i % CATEGORIES.len()];
            let name = names[(i / CATEGORIES.len()) % names.len()];
            let price = 10.0 + ((i * 37) % 490) as f64;
            let on_offer = i % 5 == 0;

            Product {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                price,
                original_price: on_offer.then(|| (price * 1.15).round()),
                image_url: Some(format!("https://cdn.nearnow.example/products/{}.jpg", i)),
                category: Some(category.to_string()),
                unit: Some(UNITS[i % UNITS.len()].to_string()),
                in_stock: i % 11 != 0,
                created_at: Some(now - Duration::minutes(i as i64)),
            }
        })
        .collect()
}
