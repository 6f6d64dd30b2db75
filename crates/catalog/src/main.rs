use bella_catalog::{CatalogSummary, build_site};

fn main() -> anyhow::Result<()> {
    bella_observability::init();

    let site = build_site()?;
    let summary = CatalogSummary::of(&site);

    tracing::info!(brand = %site.brand.name, "product and brand data built");
    tracing::info!(total = summary.total_products, "products across all categories");
    tracing::info!(count = summary.categories, "categories");
    tracing::info!(count = summary.featured, "featured products");

    Ok(())
}
