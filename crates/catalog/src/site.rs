//! Site structure: brand, catalog, featured subset, palette.

use serde::Serialize;

use bella_core::{DomainError, DomainResult, ProductId};

use crate::brand::BrandInfo;
use crate::catalog::Catalog;
use crate::data;
use crate::product::Category;

/// A featured-product pick: position `index` within `category`'s section.
///
/// Featured products are references into the catalog, never independent
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedPick {
    pub category: Category,
    pub index: usize,
}

impl FeaturedPick {
    pub const fn new(category: Category, index: usize) -> Self {
        Self { category, index }
    }

    /// Resolve the pick to the id of the product at that position.
    ///
    /// Fails when the (category, position) pair does not exist. This is a
    /// programmer error in the authored data, so there is no recovery path.
    pub fn resolve(&self, catalog: &Catalog) -> DomainResult<ProductId> {
        let products = catalog.products_in(self.category);
        products.get(self.index).map(|p| p.id).ok_or_else(|| {
            DomainError::invariant(format!(
                "featured pick {}[{}] out of range (section has {} products)",
                self.category,
                self.index,
                products.len(),
            ))
        })
    }
}

/// Color palette for the site, role name to hex color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub gray: String,
    pub light_gray: String,
    pub white: String,
}

impl ColorScheme {
    /// (role, color) pairs in a fixed order.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("gray", self.gray.as_str()),
            ("light_gray", self.light_gray.as_str()),
            ("white", self.white.as_str()),
        ]
    }
}

/// The terminal artifact of the builder: everything the site needs, in one
/// read-only aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteStructure {
    pub brand: BrandInfo,
    pub catalog: Catalog,
    /// Ordered featured-product ids, resolved from positional picks.
    pub featured: Vec<ProductId>,
    /// Category display names, in navigation order.
    pub categories: Vec<&'static str>,
    pub colors: ColorScheme,
}

/// Build the full site structure in a fixed, deterministic order.
///
/// No inputs, no side effects. The only failure mode is a featured pick
/// that does not name an existing (category, position) pair.
pub fn build_site() -> DomainResult<SiteStructure> {
    let catalog = data::catalog();
    let featured = data::featured_picks()
        .iter()
        .map(|pick| pick.resolve(&catalog))
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(SiteStructure {
        brand: data::brand_info(),
        catalog,
        featured,
        categories: Category::ALL.iter().map(|c| c.display_name()).collect(),
        colors: data::color_scheme(),
    })
}

/// Summary statistics reported by the builder binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total_products: usize,
    pub categories: usize,
    pub featured: usize,
}

impl CatalogSummary {
    pub fn of(site: &SiteStructure) -> Self {
        Self {
            total_products: site.catalog.total_products(),
            categories: site.categories.len(),
            featured: site.featured.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn build_site_reports_expected_counts() {
        let site = build_site().unwrap();
        let summary = CatalogSummary::of(&site);

        assert_eq!(summary.total_products, 11);
        assert_eq!(summary.categories, 5);
        assert_eq!(summary.featured, 4);
    }

    #[test]
    fn featured_entries_reference_existing_products() {
        let site = build_site().unwrap();
        for id in &site.featured {
            assert!(
                site.catalog.product_by_id(*id).is_some(),
                "featured id {id} not present in the catalog"
            );
        }
    }

    #[test]
    fn product_ids_are_unique_across_the_catalog() {
        let catalog = data::catalog();
        let mut seen = HashSet::new();
        for product in catalog.products() {
            assert!(seen.insert(product.id), "duplicate product id {}", product.id);
        }
    }

    #[test]
    fn total_products_equals_sum_of_section_lengths() {
        let site = build_site().unwrap();
        let sum: usize = site
            .catalog
            .sections()
            .iter()
            .map(|s| s.products.len())
            .sum();
        assert_eq!(site.catalog.total_products(), sum);
    }

    #[test]
    fn category_count_matches_the_fixed_list() {
        let site = build_site().unwrap();
        assert_eq!(site.categories.len(), Category::ALL.len());
        assert_eq!(
            site.categories,
            vec!["Face", "Lips", "Skincare", "Hair", "Body"]
        );
    }

    #[test]
    fn out_of_range_featured_pick_fails_construction() {
        let catalog = data::catalog();
        let err = FeaturedPick::new(Category::Lips, 99)
            .resolve(&catalog)
            .unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => {
                assert!(msg.contains("lips[99]"), "unexpected message: {msg}");
            }
            other => panic!("expected InvariantViolation, got {other:?}"),
        }
    }

    #[test]
    fn color_scheme_entries_keep_role_order() {
        let colors = data::color_scheme();
        let roles: Vec<&str> = colors.entries().iter().map(|(role, _)| *role).collect();
        assert_eq!(
            roles,
            vec!["primary", "secondary", "accent", "gray", "light_gray", "white"]
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: any in-range pick resolves to the product at that
            /// exact position.
            #[test]
            fn in_range_picks_resolve_to_the_positioned_product(
                cat_idx in 0usize..Category::ALL.len(),
                offset in 0usize..16,
            ) {
                let catalog = data::catalog();
                let category = Category::ALL[cat_idx];
                let section = catalog.products_in(category);
                let index = offset % section.len();

                let id = FeaturedPick::new(category, index).resolve(&catalog).unwrap();
                prop_assert_eq!(id, section[index].id);
            }

            /// Property: any index at or past the section length fails with
            /// an invariant violation.
            #[test]
            fn out_of_range_picks_always_fail(
                cat_idx in 0usize..Category::ALL.len(),
                excess in 0usize..1000,
            ) {
                let catalog = data::catalog();
                let category = Category::ALL[cat_idx];
                let len = catalog.products_in(category).len();

                let result = FeaturedPick::new(category, len + excess).resolve(&catalog);
                prop_assert!(matches!(result, Err(DomainError::InvariantViolation(_))));
            }
        }
    }
}
