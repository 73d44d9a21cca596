//! Inventory CLI
//!
//! A command-line client for the Inventory API. Lists, inspects, and
//! mutates items over HTTP; `watch` re-fetches as filters are edited
//! interactively.

use clap::{Parser, Subcommand};
use core_config::Environment;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::Result;
use tracing::info;

mod client;
mod config;
mod filters;
mod watch;

use client::{ApiClient, ItemPayload, ItemsPage};
use config::Config;

#[derive(Parser)]
#[command(name = "inventory-cli")]
#[command(about = "Manage inventory items over the Inventory API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List items, optionally filtered and sorted
    List {
        /// Search in name and description
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by category (case-insensitive substring)
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by stock status (true or false)
        #[arg(long)]
        in_stock: Option<bool>,

        /// Lower price bound (inclusive)
        #[arg(long)]
        min_price: Option<f64>,

        /// Upper price bound (inclusive)
        #[arg(long)]
        max_price: Option<f64>,

        /// Sort field (id, name, price, category, createdAt, updatedAt)
        #[arg(long)]
        sort_by: Option<String>,

        /// Sort direction (asc or desc)
        #[arg(long, default_value = "asc")]
        sort_order: String,
    },

    /// Show a single item as JSON
    Get {
        /// Item ID
        id: u64,
    },

    /// Create a new item
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        price: f64,

        #[arg(long)]
        category: String,

        /// Mark the item out of stock on creation
        #[arg(long)]
        out_of_stock: bool,
    },

    /// Update fields of an existing item
    Update {
        /// Item ID
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        in_stock: Option<bool>,
    },

    /// Delete an item
    Delete {
        /// Item ID
        id: u64,
    },

    /// Check server health
    Health,

    /// Interactively edit filters and watch matching items
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let config = Config::from_env();
    let cli = Cli::parse();

    info!("Using API at {}", config.base_url);
    let client = ApiClient::new(config.base_url);

    match cli.command {
        Commands::List {
            search,
            category,
            in_stock,
            min_price,
            max_price,
            sort_by,
            sort_order,
        } => {
            let mut params = Vec::new();

            if let Some(search) = search {
                params.push(format!("search={}", urlencoding::encode(&search)));
            }
            if let Some(category) = category {
                params.push(format!("category={}", urlencoding::encode(&category)));
            }
            if let Some(in_stock) = in_stock {
                params.push(format!("inStock={}", in_stock));
            }
            if let Some(min_price) = min_price {
                params.push(format!("minPrice={}", min_price));
            }
            if let Some(max_price) = max_price {
                params.push(format!("maxPrice={}", max_price));
            }
            if let Some(sort_by) = sort_by {
                params.push(format!("sortBy={}", urlencoding::encode(&sort_by)));
                params.push(format!("sortOrder={}", sort_order));
            }

            let page = client.list_items(&params.join("&")).await?;
            print_items(&page);
        }

        Commands::Get { id } => {
            let item = client.get_item(id).await?;
            println!("{}", serde_json::to_string_pretty(&item)?);
        }

        Commands::Create {
            name,
            description,
            price,
            category,
            out_of_stock,
        } => {
            let payload = ItemPayload {
                name: Some(name),
                description: Some(description),
                price: Some(price),
                category: Some(category),
                in_stock: Some(!out_of_stock),
            };

            let item = client.create_item(&payload).await?;
            println!("{}", serde_json::to_string_pretty(&item)?);
        }

        Commands::Update {
            id,
            name,
            description,
            price,
            category,
            in_stock,
        } => {
            let payload = ItemPayload {
                name,
                description,
                price,
                category,
                in_stock,
            };

            let item = client.update_item(id, &payload).await?;
            println!("{}", serde_json::to_string_pretty(&item)?);
        }

        Commands::Delete { id } => {
            client.delete_item(id).await?;
            println!("Deleted item {id}");
        }

        Commands::Health => {
            let status = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }

        Commands::Watch => {
            watch::run(client).await?;
        }
    }

    Ok(())
}

/// Print a listing as one row per item plus a result counter
pub(crate) fn print_items(page: &ItemsPage) {
    if page.items.is_empty() {
        println!("No items found");
        return;
    }

    for item in &page.items {
        let stock = if item.in_stock {
            "in stock"
        } else {
            "out of stock"
        };
        println!(
            "#{:<5} {:<24} {:>9.2}  {:<10} {}",
            item.id, item.name, item.price, item.category, stock
        );
    }
    println!("{} of {} items", page.items.len(), page.total);
}
