use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    /// Milk and dairy products
    Dairy,
    /// Bread and baked goods
    Bakery,
    /// Fruit and vegetables
    Produce,
    /// Meat and poultry
    Meat,
    /// Oils, spices and staples
    Pantry,
    /// Rice, pasta and grains
    Grains,
}

/// Field an item listing can be sorted by
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SortField {
    Id,
    Name,
    Price,
    Category,
    CreatedAt,
    UpdatedAt,
}

/// Sort direction
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Item entity - an inventory record persisted in the JSON store
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned by the repository; immutable
    pub id: u64,
    /// Item name
    pub name: String,
    /// Item description
    pub description: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Product category
    pub category: Category,
    /// Whether the item is currently in stock
    pub in_stock: bool,
    /// Creation timestamp, set once server-side
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category: Category,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

/// DTO for a partial update of an existing item
///
/// Exactly the fields present in the request body are merged onto the
/// stored record. `id` and `created_at` are not updatable.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub in_stock: Option<bool>,
}

impl UpdateItem {
    /// True when the update carries no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.in_stock.is_none()
    }
}

impl Item {
    /// Assemble a new item from a CreateItem DTO and a repository-assigned id
    pub fn new(id: u64, input: CreateItem) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the fields present in `update` onto this item
    ///
    /// Always refreshes `updated_at`; `id` and `created_at` never change.
    pub fn apply_update(&mut self, update: UpdateItem) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
        self.updated_at = Utc::now();
    }
}

/// Raw query-string parameters for listing items
///
/// Everything arrives as text. Conversion into [`ItemFilter`] is lenient:
/// a value that fails to parse drops that criterion instead of rejecting
/// the whole request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ItemQuery {
    /// Filter by category (case-insensitive substring)
    pub category: Option<String>,
    /// Filter by stock status; the literal "true" matches in-stock items,
    /// any other value matches out-of-stock items
    pub in_stock: Option<String>,
    /// Lower price bound (inclusive)
    pub min_price: Option<String>,
    /// Upper price bound (inclusive)
    pub max_price: Option<String>,
    /// Search in name and description (case-insensitive substring)
    pub search: Option<String>,
    /// Field to sort by: id, name, price, category, createdAt, updatedAt
    pub sort_by: Option<String>,
    /// Sort direction: asc (default) or desc
    pub sort_order: Option<String>,
}

/// Parsed filter and sort criteria for one query call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
}

fn parse_price(raw: Option<String>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|p| !p.is_nan())
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}

impl From<ItemQuery> for ItemFilter {
    fn from(query: ItemQuery) -> Self {
        Self {
            category: non_empty(query.category),
            in_stock: query.in_stock.map(|raw| raw == "true"),
            min_price: parse_price(query.min_price),
            max_price: parse_price(query.max_price),
            search: non_empty(query.search),
            sort_by: query.sort_by.and_then(|raw| raw.parse().ok()),
            sort_order: query
                .sort_order
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_with_camel_case_keys() {
        let item = Item::new(
            1,
            CreateItem {
                name: "Milk".to_string(),
                description: "Fresh whole milk".to_string(),
                price: 6.0,
                category: Category::Dairy,
                in_stock: true,
            },
        );

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["category"], "Dairy");
        assert_eq!(value["inStock"], true);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("in_stock").is_none());
    }

    #[test]
    fn test_create_item_defaults_in_stock_to_true() {
        let input: CreateItem = serde_json::from_str(
            r#"{"name":"Milk","description":"Fresh","price":6,"category":"Dairy"}"#,
        )
        .unwrap();
        assert!(input.in_stock);
    }

    #[test]
    fn test_create_item_rejects_unknown_category() {
        let result: Result<CreateItem, _> = serde_json::from_str(
            r#"{"name":"Milk","description":"Fresh","price":6,"category":"Gadgets"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_update_is_empty() {
        assert!(UpdateItem::default().is_empty());
        assert!(
            !UpdateItem {
                in_stock: Some(false),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_apply_update_merges_only_present_fields() {
        let mut item = Item::new(
            1,
            CreateItem {
                name: "Milk".to_string(),
                description: "Fresh whole milk".to_string(),
                price: 6.0,
                category: Category::Dairy,
                in_stock: true,
            },
        );
        let created_at = item.created_at;

        item.apply_update(UpdateItem {
            price: Some(7.5),
            in_stock: Some(false),
            ..Default::default()
        });

        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Milk");
        assert_eq!(item.price, 7.5);
        assert!(!item.in_stock);
        assert_eq!(item.created_at, created_at);
        assert!(item.updated_at >= created_at);
    }

    #[test]
    fn test_filter_parses_valid_values() {
        let filter = ItemFilter::from(ItemQuery {
            category: Some("dai".to_string()),
            in_stock: Some("true".to_string()),
            min_price: Some("5".to_string()),
            max_price: Some("10.5".to_string()),
            search: Some("milk".to_string()),
            sort_by: Some("price".to_string()),
            sort_order: Some("desc".to_string()),
        });

        assert_eq!(filter.category.as_deref(), Some("dai"));
        assert_eq!(filter.in_stock, Some(true));
        assert_eq!(filter.min_price, Some(5.0));
        assert_eq!(filter.max_price, Some(10.5));
        assert_eq!(filter.search.as_deref(), Some("milk"));
        assert_eq!(filter.sort_by, Some(SortField::Price));
        assert_eq!(filter.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_filter_drops_unparseable_prices() {
        let filter = ItemFilter::from(ItemQuery {
            min_price: Some("abc".to_string()),
            max_price: Some("NaN".to_string()),
            ..Default::default()
        });

        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, None);
    }

    #[test]
    fn test_filter_in_stock_compares_against_literal_true() {
        let parse = |raw: &str| {
            ItemFilter::from(ItemQuery {
                in_stock: Some(raw.to_string()),
                ..Default::default()
            })
            .in_stock
        };

        assert_eq!(parse("true"), Some(true));
        assert_eq!(parse("false"), Some(false));
        assert_eq!(parse("yes"), Some(false));
        assert_eq!(
            ItemFilter::from(ItemQuery::default()).in_stock,
            None,
            "absent parameter must not filter"
        );
    }

    #[test]
    fn test_filter_drops_unknown_sort_field() {
        let filter = ItemFilter::from(ItemQuery {
            sort_by: Some("flavor".to_string()),
            sort_order: Some("sideways".to_string()),
            ..Default::default()
        });

        assert_eq!(filter.sort_by, None);
        assert_eq!(filter.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_filter_treats_empty_strings_as_absent() {
        let filter = ItemFilter::from(ItemQuery {
            category: Some(String::new()),
            search: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(filter.category, None);
        assert_eq!(filter.search, None);
    }

    #[test]
    fn test_sort_field_parses_camel_case() {
        assert_eq!("createdAt".parse::<SortField>(), Ok(SortField::CreatedAt));
        assert_eq!("updatedat".parse::<SortField>(), Ok(SortField::UpdatedAt));
        assert!("banana".parse::<SortField>().is_err());
    }
}
