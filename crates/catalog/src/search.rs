//! In-memory product search with relevance scoring.
//!
//! Mirrors the site's client-side search: case-insensitive term matching
//! over name, description and ingredients, optional category and rating
//! filters, results ordered by score then rating.

use crate::catalog::Catalog;
use crate::product::{Category, Product};

const SCORE_NAME_EXACT: u32 = 100;
const SCORE_NAME_TERM: u32 = 50;
const SCORE_DESCRIPTION_TERM: u32 = 20;
const SCORE_INGREDIENT_TERM: u32 = 10;

/// Filters applied before scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFilters {
    pub category: Option<Category>,
    /// Minimum average rating, inclusive.
    pub min_rating: f32,
}

/// A scored search result borrowing from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub product: &'a Product,
    pub category: Category,
    pub score: u32,
}

/// Search the catalog.
///
/// An empty query returns filter-only results in catalog order; otherwise
/// only products matching at least one term are returned, best score first,
/// ties broken by rating (descending).
pub fn search<'a>(
    catalog: &'a Catalog,
    query: &str,
    filters: SearchFilters,
    limit: usize,
) -> Vec<SearchHit<'a>> {
    let normalized = query.trim().to_lowercase();
    let terms: Vec<&str> = normalized.split_whitespace().collect();

    let mut hits: Vec<SearchHit<'a>> = Vec::new();
    for section in catalog.sections() {
        if filters.category.is_some_and(|c| c != section.category) {
            continue;
        }
        for product in &section.products {
            if product.rating < filters.min_rating {
                continue;
            }
            let score = score_product(product, &normalized, &terms);
            if terms.is_empty() || score > 0 {
                hits.push(SearchHit {
                    product,
                    category: section.category,
                    score,
                });
            }
        }
    }

    // Stable sort keeps catalog order for equal (score, rating) pairs.
    // Filter-only results (no terms) stay in catalog order.
    if !terms.is_empty() {
        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.product.rating.total_cmp(&a.product.rating))
        });
    }
    hits.truncate(limit);
    hits
}

fn score_product(product: &Product, full_query: &str, terms: &[&str]) -> u32 {
    if terms.is_empty() {
        return 0;
    }

    let name = product.name.to_lowercase();
    let description = product.description.to_lowercase();
    let ingredients: Vec<String> = product
        .ingredients
        .iter()
        .map(|i| i.to_lowercase())
        .collect();

    let mut score = 0;
    if name == full_query {
        score += SCORE_NAME_EXACT;
    }
    for term in terms {
        if name.contains(term) {
            score += SCORE_NAME_TERM;
        }
        if description.contains(term) {
            score += SCORE_DESCRIPTION_TERM;
        }
        if ingredients.iter().any(|i| i.contains(term)) {
            score += SCORE_INGREDIENT_TERM;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    const NO_LIMIT: usize = usize::MAX;

    #[test]
    fn name_terms_outrank_ingredient_only_matches() {
        let catalog = data::catalog();
        let hits = search(&catalog, "oil", SearchFilters::default(), NO_LIMIT);

        // Only the hair mask carries "oil" in its name; everything after it
        // matched on description or ingredients alone.
        assert!(hits.len() > 1);
        assert_eq!(hits[0].product.name, "Argan Oil Hair Mask");
        assert!(
            hits[1..]
                .iter()
                .all(|h| !h.product.name.to_lowercase().contains("oil"))
        );
    }

    #[test]
    fn exact_name_match_ranks_first() {
        let catalog = data::catalog();
        let hits = search(
            &catalog,
            "Matte Liquid Lipstick",
            SearchFilters::default(),
            NO_LIMIT,
        );

        assert_eq!(hits[0].product.name, "Matte Liquid Lipstick");
    }

    #[test]
    fn ingredient_terms_match() {
        let catalog = data::catalog();
        let hits = search(&catalog, "rosemary", SearchFilters::default(), NO_LIMIT);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product.name, "Herbal Hair Growth Serum");
    }

    #[test]
    fn category_filter_limits_results() {
        let catalog = data::catalog();
        let filters = SearchFilters {
            category: Some(Category::Hair),
            ..Default::default()
        };
        let hits = search(&catalog, "", filters, NO_LIMIT);

        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.category == Category::Hair));
    }

    #[test]
    fn min_rating_filter_excludes_lower_rated_products() {
        let catalog = data::catalog();
        let filters = SearchFilters {
            min_rating: 4.8,
            ..Default::default()
        };
        let hits = search(&catalog, "", filters, NO_LIMIT);

        assert!(!hits.is_empty());
        assert!(hits.iter().all(|h| h.product.rating >= 4.8));
    }

    #[test]
    fn empty_query_returns_catalog_order() {
        let catalog = data::catalog();
        let hits = search(&catalog, "", SearchFilters::default(), NO_LIMIT);

        let ids: Vec<u32> = hits.iter().map(|h| h.product.id.as_u32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn limit_truncates_results() {
        let catalog = data::catalog();
        let hits = search(&catalog, "", SearchFilters::default(), 3);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let catalog = data::catalog();
        let hits = search(&catalog, "xyzzy", SearchFilters::default(), NO_LIMIT);
        assert!(hits.is_empty());
    }
}
