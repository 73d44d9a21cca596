//! Pure item query pipeline
//!
//! Turns a collection of items plus optional criteria into a filtered,
//! ordered view. No I/O and no ambient state: everything the pipeline
//! needs arrives as arguments, which keeps it independently testable.

use std::cmp::Ordering;

use crate::models::{Item, ItemFilter, SortField, SortOrder};

/// Apply filters and sort to `items`, returning the resulting view.
///
/// Filters are AND-combined and an absent criterion leaves that dimension
/// unfiltered. Sort runs last and is stable: items with equal keys keep
/// their relative input order.
pub fn apply(items: Vec<Item>, filter: &ItemFilter) -> Vec<Item> {
    let mut result = items;

    if let Some(ref category) = filter.category {
        let needle = category.to_lowercase();
        result.retain(|item| item.category.to_string().to_lowercase().contains(&needle));
    }

    if let Some(in_stock) = filter.in_stock {
        result.retain(|item| item.in_stock == in_stock);
    }

    if let Some(min_price) = filter.min_price {
        result.retain(|item| item.price >= min_price);
    }

    if let Some(max_price) = filter.max_price {
        result.retain(|item| item.price <= max_price);
    }

    if let Some(ref search) = filter.search {
        let needle = search.to_lowercase();
        result.retain(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        });
    }

    if let Some(field) = filter.sort_by {
        sort_items(&mut result, field, filter.sort_order);
    }

    result
}

/// Stable sort; descending order reverses the comparison, not the slice,
/// so ties keep their input order either way.
fn sort_items(items: &mut [Item], field: SortField, order: SortOrder) {
    items.sort_by(|a, b| {
        let ordering = compare_by(a, b, field);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &Item, b: &Item, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Category => a
            .category
            .to_string()
            .to_lowercase()
            .cmp(&b.category.to_string().to_lowercase()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}
