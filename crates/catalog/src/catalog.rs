//! Category grouping: ordered product sections per category.

use serde::{Deserialize, Serialize};

use bella_core::ProductId;

use crate::product::{Category, Product};

/// One category's ordered products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: Category,
    pub products: Vec<Product>,
}

/// The full catalog: every product, grouped by category in authoring order.
///
/// A product belongs to exactly one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    sections: Vec<CategorySection>,
}

impl Catalog {
    pub fn new(sections: Vec<CategorySection>) -> Self {
        Self { sections }
    }

    /// Sections in authoring order.
    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    /// Products for one category. Empty if the category has no section.
    pub fn products_in(&self, category: Category) -> &[Product] {
        self.sections
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.products.as_slice())
            .unwrap_or(&[])
    }

    /// All products, sections first, then position within the section.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.sections.iter().flat_map(|s| s.products.iter())
    }

    /// Look up a product by id.
    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products().find(|p| p.id == id)
    }

    /// Total product count across all sections.
    pub fn total_products(&self) -> usize {
        self.sections.iter().map(|s| s.products.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::data;
    use crate::product::Category;

    use bella_core::ProductId;

    #[test]
    fn every_category_has_a_section() {
        let catalog = data::catalog();
        for category in Category::ALL {
            assert!(
                !catalog.products_in(category).is_empty(),
                "no products authored for {category}"
            );
        }
    }

    #[test]
    fn products_iterate_in_authoring_order() {
        let catalog = data::catalog();
        let ids: Vec<u32> = catalog.products().map(|p| p.id.as_u32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn product_by_id_finds_authored_products() {
        let catalog = data::catalog();
        let product = catalog.product_by_id(ProductId::new(8)).unwrap();
        assert_eq!(product.name, "Argan Oil Hair Mask");

        assert!(catalog.product_by_id(ProductId::new(99)).is_none());
    }
}
