use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product entity - a sellable catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Positive identifier, chosen by the caller on create
    pub id: i64,
    /// Display name, never empty
    pub name: String,
    /// Only unavailable products may be deleted
    pub available: bool,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, available: bool) -> Self {
        Self {
            id,
            name: name.into(),
            available,
        }
    }
}

fn default_available() -> bool {
    true
}

/// DTO for creating a new product
///
/// `name` is an `Option` so a missing field is reported as a validation
/// violation ("Required") instead of a deserialization error.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(range(min = 1, message = "ID must be a positive number"))]
    pub id: Option<i64>,
    #[validate(
        required(message = "Required"),
        length(min = 1, message = "Product name is required")
    )]
    pub name: Option<String>,
    #[serde(default = "default_available")]
    #[schema(default = true)]
    pub available: bool,
}

/// Sort order for product listings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortBy {
    /// Ascending id
    Id,
    /// Ascending name, case-insensitive
    Name,
    /// Available products first, otherwise stable
    Available,
}

/// Reads `sortBy` from a query string. Unknown or empty values map to `None`.
fn lenient_sort_by<'de, D>(deserializer: D) -> Result<Option<SortBy>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse::<SortBy>().ok()))
}

/// Filter options for one listing call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub sort_by: Option<SortBy>,
}

/// Query parameters accepted by `GET /products`
///
/// When `q` is present the request is served by the store's literal
/// substring search instead of the `search` filter.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive substring filter on product names
    pub search: Option<String>,
    /// Search term for product names (store search)
    pub q: Option<String>,
    /// Sorting parameter; unknown values keep the store order
    #[serde(default, deserialize_with = "lenient_sort_by")]
    pub sort_by: Option<SortBy>,
}

impl From<ProductQuery> for ProductFilter {
    fn from(query: ProductQuery) -> Self {
        Self {
            search: query.search,
            sort_by: query.sort_by,
        }
    }
}

/// Query parameters accepted by `GET /products/search`
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search term for product names; empty or absent returns every product
    #[serde(default)]
    pub q: String,
    /// Sorting parameter; unknown values keep the store order
    #[serde(default, deserialize_with = "lenient_sort_by")]
    pub sort_by: Option<SortBy>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_create_product_defaults_available_to_true() {
        let input: CreateProduct = serde_json::from_str(r#"{"name": "Fries"}"#).unwrap();
        assert!(input.available);
        assert_eq!(input.id, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_product_missing_name_is_required() {
        let input: CreateProduct = serde_json::from_str("{}").unwrap();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_create_product_rejects_empty_name_and_zero_id() {
        let input: CreateProduct =
            serde_json::from_str(r#"{"id": 0, "name": "", "available": false}"#).unwrap();
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("id"));
    }

    #[test]
    fn test_query_ignores_unknown_sort_values() {
        let query: ProductQuery = serde_json::from_str(r#"{"sortBy": "price"}"#).unwrap();
        assert_eq!(query.sort_by, None);

        let query: ProductQuery = serde_json::from_str(r#"{"sortBy": ""}"#).unwrap();
        assert_eq!(query.sort_by, None);

        let query: SearchQuery = serde_json::from_str(r#"{"sortBy": "name"}"#).unwrap();
        assert_eq!(query.sort_by, Some(SortBy::Name));

        let query: ProductQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.sort_by, None);
    }

    #[test]
    fn test_long_search_terms_are_valid() {
        let query = SearchQuery {
            q: "a".repeat(101),
            sort_by: None,
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_sort_by_parses_lowercase() {
        assert_eq!(SortBy::from_str("name").unwrap(), SortBy::Name);
        assert_eq!(SortBy::Available.to_string(), "available");
        let parsed: SortBy = serde_json::from_str("\"id\"").unwrap();
        assert_eq!(parsed, SortBy::Id);
        assert!(serde_json::from_str::<SortBy>("\"price\"").is_err());
    }
}
