//! # Terminal Feed Browser
//!
//! Drives a `CatalogController` from the terminal, standing in for the
//! home screen.
//!
//! ## Usage
//! ```bash
//! cargo run -p nearnow-catalog --bin seed
//! cargo run -p nearnow-catalog --bin browse
//!
//! # Custom config file
//! cargo run -p nearnow-catalog --bin browse -- --config ./home.toml
//! ```
//!
//! ## Commands
//! ```text
//! more    (m)   reveal the next page
//! refresh (r)   reload products and categories
//! quit    (q)   exit
//! ```

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use nearnow_catalog::{
    init_tracing, CatalogConfig, CatalogController, CatalogError, CatalogResult,
    FeedEventEmitter, FeedSnapshot, JsonFileSource,
};
use nearnow_core::format::category_tint;
use nearnow_core::{distinct_by_id, Category, LoadState, PageSummary, Product};

type Controller = CatalogController<JsonFileSource<Product>, JsonFileSource<Category>>;

/// Prints the error notice the way the app shows a toast.
struct ConsoleEmitter;

impl FeedEventEmitter for ConsoleEmitter {
    fn emit_state(&self, _state: LoadState) {}

    fn emit_window(&self, _summary: PageSummary) {}

    fn emit_error(&self, message: &str) {
        println!("\n  !! {}\n", message);
    }
}

#[tokio::main]
async fn main() -> CatalogResult<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    let config = CatalogConfig::load(config_path)?;
    info!(
        page_size = config.page_size(),
        products = ?config.source.products_path,
        categories = ?config.source.categories_path,
        "Starting feed browser"
    );

    let controller: Controller = CatalogController::with_emitter(
        JsonFileSource::new("products", &config.source.products_path),
        JsonFileSource::new("categories", &config.source.categories_path),
        config.page_size(),
        Arc::new(ConsoleEmitter),
    )?;

    load(&controller, false).await;
    render(&controller.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "more" | "m" => {
                if !controller.load_more() {
                    println!("  (everything is already shown)");
                }
            }
            "refresh" | "r" => load(&controller, true).await,
            "quit" | "q" => break,
            "" => continue,
            other => {
                println!("  unknown command '{}': more | refresh | quit", other);
                continue;
            }
        }
        render(&controller.snapshot());
    }

    Ok(())
}

async fn load(controller: &Controller, refresh: bool) {
    let result = if refresh {
        controller.refresh().await
    } else {
        controller.load_all().await
    };

    match result {
        Ok(_) => {}
        Err(CatalogError::FetchInProgress) => info!("Load already running, ignoring request"),
        Err(e) => warn!(error = %e, "Feed load failed"),
    }
}

fn render(snapshot: &FeedSnapshot<Product, Category>) {
    println!("Near & Now · Digital Dukan, Local Dil Se");
    println!();
    println!("Shop by Category");
    for (i, category) in distinct_by_id(&snapshot.categories).into_iter().enumerate() {
        println!(
            "  [{:?}] {} -> {}",
            category_tint(i),
            category.display_name(),
            category.image_or_placeholder()
        );
    }

    println!();
    println!("Our Products");
    println!("  {}", snapshot.summary.label("products"));

    if snapshot.load_state == LoadState::Loading {
        println!("  Loading products...");
    } else if snapshot.visible.is_empty() {
        println!("  No products available");
    } else {
        for product in distinct_by_id(&snapshot.visible) {
            let stock = if product.in_stock { "" } else { " (out of stock)" };
            println!(
                "  {:<28} {:>8.2}  {}{}",
                product.name,
                product.price,
                product.unit.as_deref().unwrap_or(""),
                stock
            );
        }
    }

    if snapshot.has_more() {
        println!("  [m] Load More Products");
    }
    println!();
}
