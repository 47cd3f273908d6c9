//! Case-insensitive search over the catalog.

use crate::domain::product::model::Product;

/// Returns true when `needle` (already lowercased) occurs in the title,
/// category or description of `product`.
fn matches(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// Filters `products` by `term`, keeping catalog order.
///
/// A term that is blank after trimming returns every product. Otherwise the
/// term is matched as typed (untrimmed), so `"bag "` does not match `"bag"`.
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    if term.trim().is_empty() {
        return products.iter().collect();
    }

    let needle = term.to_lowercase();
    products.iter().filter(|p| matches(p, &needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::ProductId;
    use proptest::prelude::*;

    fn make_product(id: i64, title: &str, category: &str, description: &str) -> Product {
        Product::from_repository(
            ProductId::new(id),
            title.to_string(),
            10.0,
            description.to_string(),
            category.to_string(),
            "https://example.com/img.jpg".to_string(),
            None,
        )
    }

    fn catalog() -> Vec<Product> {
        vec![
            make_product(1, "Fjallraven Backpack", "men's clothing", "Fits 15 inch laptops"),
            make_product(2, "Gold Dragon Bracelet", "jewelery", "From our Legends Collection"),
            make_product(3, "SanDisk SSD PLUS 1TB", "electronics", "Easy upgrade for faster boot"),
            make_product(4, "Rain Jacket", "women's clothing", "Lightweight and perfect for trips"),
        ]
    }

    #[test]
    fn should_return_all_products_when_term_is_empty() {
        let products = catalog();
        assert_eq!(filter_products(&products, "").len(), 4);
        assert_eq!(filter_products(&products, "   ").len(), 4);
    }

    #[test]
    fn should_match_title_case_insensitively() {
        let products = catalog();
        let result = filter_products(&products, "BACKPACK");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new(1));
    }

    #[test]
    fn should_match_category() {
        let products = catalog();
        let result = filter_products(&products, "clothing");
        let ids: Vec<_> = result.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn should_match_description() {
        let products = catalog();
        let result = filter_products(&products, "legends");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Gold Dragon Bracelet");
    }

    #[test]
    fn should_return_nothing_when_no_field_matches() {
        let products = catalog();
        assert!(filter_products(&products, "submarine").is_empty());
    }

    #[test]
    fn should_not_trim_non_blank_term() {
        let products = catalog();
        assert!(filter_products(&products, "jacket ").is_empty());
    }

    proptest! {
        #[test]
        fn should_match_any_substring_of_a_title(start in 0usize..10, len in 1usize..8) {
            let products = catalog();
            let title = &products[0].title;
            let start = start.min(title.len() - 1);
            let end = (start + len).min(title.len());
            let term = &title[start..end];
            prop_assume!(!term.trim().is_empty());

            let result = filter_products(&products, &term.to_uppercase());
            prop_assert!(result.iter().any(|p| p.id == products[0].id));
        }

        #[test]
        fn should_only_return_products_that_match(term in "[a-zA-Z ]{0,6}") {
            let products = catalog();
            let result = filter_products(&products, &term);
            if term.trim().is_empty() {
                prop_assert_eq!(result.len(), products.len());
            } else {
                let needle = term.to_lowercase();
                for product in result {
                    prop_assert!(matches(product, &needle));
                }
            }
        }
    }
}
