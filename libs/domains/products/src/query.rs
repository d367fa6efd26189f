//! Pure filter/sort engine over a product sequence.

use std::cmp::Ordering;

use crate::models::{Product, ProductFilter, SortBy};

/// Applies `filter` to `products`, returning a new sequence.
///
/// Filtering happens before sorting. All sorts are stable, so entries that
/// compare equal keep their store order. Without `sort_by` the store order is kept.
pub fn apply(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    let mut result: Vec<Product> = match filter.search.as_deref().filter(|s| !s.is_empty()) {
        Some(term) => {
            let needle = term.to_lowercase();
            products
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        None => products.to_vec(),
    };

    if let Some(sort_by) = filter.sort_by {
        sort(&mut result, sort_by);
    }

    result
}

/// Stable in-place sort by the given key.
pub fn sort(products: &mut [Product], sort_by: SortBy) {
    match sort_by {
        SortBy::Id => products.sort_by_key(|p| p.id),
        SortBy::Name => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortBy::Available => products.sort_by_key(|p| !p.available),
    }
}

/// Case-insensitive name ordering; on a case-only tie lowercase sorts first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Fries", true),
            Product::new(2, "Big Mac", true),
            Product::new(3, "Drink", false),
            Product::new(4, "6 pc. McNuggets", true),
            Product::new(5, "12 pc. McNuggets", false),
            Product::new(6, "(New) Cheeseburger", false),
            Product::new(7, "Sundae", true),
        ]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_no_options_keeps_store_order() {
        let products = catalog();
        let result = apply(&products, &ProductFilter::default());
        assert_eq!(result, products);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filter = ProductFilter {
            search: Some("MCNUG".to_string()),
            sort_by: None,
        };
        assert_eq!(ids(&apply(&catalog(), &filter)), vec![4, 5]);
    }

    #[test]
    fn test_empty_search_is_ignored() {
        let filter = ProductFilter {
            search: Some(String::new()),
            sort_by: None,
        };
        assert_eq!(apply(&catalog(), &filter).len(), 7);
    }

    #[test]
    fn test_sort_by_name() {
        let filter = ProductFilter {
            search: None,
            sort_by: Some(SortBy::Name),
        };
        assert_eq!(ids(&apply(&catalog(), &filter)), vec![6, 5, 4, 2, 3, 1, 7]);
    }

    #[test]
    fn test_sort_by_available_is_stable() {
        let filter = ProductFilter {
            search: None,
            sort_by: Some(SortBy::Available),
        };
        assert_eq!(ids(&apply(&catalog(), &filter)), vec![1, 2, 4, 7, 3, 5, 6]);
    }

    #[test]
    fn test_sort_by_id() {
        let mut products = catalog();
        products.reverse();
        let filter = ProductFilter {
            search: None,
            sort_by: Some(SortBy::Id),
        };
        assert_eq!(ids(&apply(&products, &filter)), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_filter_then_sort_is_idempotent() {
        let filter = ProductFilter {
            search: Some("c".to_string()),
            sort_by: Some(SortBy::Available),
        };
        let once = apply(&catalog(), &filter);
        let twice = apply(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let products = catalog();
        let filter = ProductFilter {
            search: None,
            sort_by: Some(SortBy::Name),
        };
        let _ = apply(&products, &filter);
        assert_eq!(products, catalog());
    }

    #[test]
    fn test_compare_names_case_tie_break() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("a", "A"), Ordering::Less);
        assert_eq!(compare_names("Drink", "Drink"), Ordering::Equal);
    }
}
