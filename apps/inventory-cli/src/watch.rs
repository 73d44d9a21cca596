//! Interactive filter loop
//!
//! Reads filter edits from stdin, debounces them, and re-fetches the
//! matching items after each quiet period.

use std::sync::Arc;

use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::client::ApiClient;
use crate::filters::{Debouncer, FilterForm};

pub async fn run(client: ApiClient) -> Result<()> {
    let client = Arc::new(client);
    let mut form = FilterForm::default();
    let mut debouncer = Debouncer::default();

    println!("Watching {}", client.base_url());
    println!(
        "Edit filters as field=value (search, category, minPrice, maxPrice, sortBy, sortOrder)."
    );
    println!("'clear' resets all filters, 'quit' exits.");
    println!();

    fetch_and_print(&client, "").await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "clear" => form.clear(),
            _ => {
                let Some((field, value)) = input.split_once('=') else {
                    println!("Unrecognized input: {input}");
                    continue;
                };
                if !form.set(field.trim(), value.trim()) {
                    println!("Unknown filter field: {}", field.trim());
                    continue;
                }
            }
        }

        let query = form.to_query_string();
        let client = Arc::clone(&client);
        debouncer.schedule(async move {
            fetch_and_print(&client, &query).await;
        });
    }

    debouncer.flush().await;
    Ok(())
}

async fn fetch_and_print(client: &ApiClient, query: &str) {
    if query.is_empty() {
        println!("-- /items --");
    } else {
        println!("-- /items?{query} --");
    }

    match client.list_items(query).await {
        Ok(page) => crate::print_items(&page),
        Err(e) => println!("Fetch failed: {e}"),
    }
}
