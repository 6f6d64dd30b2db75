//! The hand-authored catalog data.
//!
//! Display copy for the Chandra Bella Naturals site. Prices are
//! pre-formatted strings; ids are assigned manually and must stay unique
//! across every section.

use bella_core::ProductId;

use crate::brand::BrandInfo;
use crate::catalog::{Catalog, CategorySection};
use crate::product::{Category, Product};
use crate::site::{ColorScheme, FeaturedPick};

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    price: &str,
    image: &str,
    rating: f32,
    reviews: u32,
    description: &str,
    ingredients: &[&str],
    usage: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: price.to_string(),
        image: image.to_string(),
        rating,
        reviews,
        description: description.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        usage: usage.to_string(),
    }
}

/// The full category grouping, in authoring order.
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        CategorySection {
            category: Category::Face,
            products: vec![
                product(
                    1,
                    "Radiant Glow Foundation",
                    "₹899",
                    "/images/foundation.jpg",
                    4.8,
                    156,
                    "Natural coverage foundation with SPF 30 protection",
                    &["Jojoba Oil", "Vitamin E", "Zinc Oxide", "Argan Oil"],
                    "Apply with brush or fingers, blend evenly for natural coverage",
                ),
                product(
                    2,
                    "Himalayan Clay Face Mask",
                    "₹549",
                    "/images/face-mask.jpg",
                    4.9,
                    203,
                    "Deep cleansing mask with natural Himalayan clay",
                    &["Himalayan Pink Clay", "Rose Water", "Aloe Vera", "Tea Tree Oil"],
                    "Apply thin layer, leave for 15 minutes, rinse with warm water",
                ),
                product(
                    3,
                    "Vitamin C Brightening Serum",
                    "₹1299",
                    "/images/vitamin-c-serum.jpg",
                    4.7,
                    89,
                    "Brightening serum with 20% Vitamin C for radiant skin",
                    &["Vitamin C", "Hyaluronic Acid", "Niacinamide", "Green Tea Extract"],
                    "Apply 2-3 drops on clean face, follow with moisturizer",
                ),
            ],
        },
        CategorySection {
            category: Category::Lips,
            products: vec![
                product(
                    4,
                    "Organic Tinted Lip Balm",
                    "₹299",
                    "/images/lip-balm.jpg",
                    4.6,
                    124,
                    "Nourishing lip balm with natural tint and SPF protection",
                    &["Shea Butter", "Coconut Oil", "Beeswax", "Natural Fruit Extracts"],
                    "Apply generously to lips throughout the day",
                ),
                product(
                    5,
                    "Matte Liquid Lipstick",
                    "₹699",
                    "/images/liquid-lipstick.jpg",
                    4.5,
                    178,
                    "Long-lasting matte lipstick in vibrant shades",
                    &["Natural Waxes", "Plant-based Pigments", "Vitamin E", "Jojoba Oil"],
                    "Apply from center of lips outward, allow to dry",
                ),
            ],
        },
        CategorySection {
            category: Category::Skincare,
            products: vec![
                product(
                    6,
                    "Rose & Hibiscus Toner",
                    "₹499",
                    "/images/toner.jpg",
                    4.8,
                    267,
                    "Hydrating toner with rose water and hibiscus extract",
                    &["Rose Water", "Hibiscus Extract", "Witch Hazel", "Glycerin"],
                    "Apply with cotton pad or spray directly on face after cleansing",
                ),
                product(
                    7,
                    "Niacinamide + Zinc Serum",
                    "₹799",
                    "/images/niacinamide-serum.jpg",
                    4.9,
                    145,
                    "Pore-minimizing serum for oily and acne-prone skin",
                    &["Niacinamide 10%", "Zinc PCA", "Hyaluronic Acid", "Chamomile Extract"],
                    "Apply 2-3 drops to clean skin, morning and evening",
                ),
            ],
        },
        CategorySection {
            category: Category::Hair,
            products: vec![
                product(
                    8,
                    "Argan Oil Hair Mask",
                    "₹649",
                    "/images/hair-mask.jpg",
                    4.7,
                    198,
                    "Deep conditioning hair mask with pure Moroccan Argan oil",
                    &["Argan Oil", "Coconut Oil", "Shea Butter", "Keratin Protein"],
                    "Apply to damp hair, leave for 20 minutes, rinse thoroughly",
                ),
                product(
                    9,
                    "Herbal Hair Growth Serum",
                    "₹999",
                    "/images/hair-serum.jpg",
                    4.6,
                    87,
                    "Stimulating hair serum with natural herbs for growth",
                    &["Rosemary Oil", "Peppermint Oil", "Biotin", "Saw Palmetto"],
                    "Massage into scalp daily, do not rinse",
                ),
            ],
        },
        CategorySection {
            category: Category::Body,
            products: vec![
                product(
                    10,
                    "Lavender Body Butter",
                    "₹449",
                    "/images/body-butter.jpg",
                    4.8,
                    156,
                    "Rich moisturizing body butter with calming lavender",
                    &["Shea Butter", "Cocoa Butter", "Lavender Oil", "Vitamin E"],
                    "Massage onto clean, dry skin for deep hydration",
                ),
                product(
                    11,
                    "Exfoliating Body Scrub",
                    "₹599",
                    "/images/body-scrub.jpg",
                    4.7,
                    134,
                    "Gentle exfoliating scrub with sea salt and essential oils",
                    &["Dead Sea Salt", "Coconut Oil", "Sugar", "Essential Oils"],
                    "Massage onto wet skin in circular motions, rinse well",
                ),
            ],
        },
    ])
}

/// Bestsellers shown on the landing page, as positional picks into the
/// category sections.
pub fn featured_picks() -> [FeaturedPick; 4] {
    [
        FeaturedPick::new(Category::Face, 0),     // Radiant Glow Foundation
        FeaturedPick::new(Category::Lips, 1),     // Matte Liquid Lipstick
        FeaturedPick::new(Category::Skincare, 0), // Rose & Hibiscus Toner
        FeaturedPick::new(Category::Hair, 0),     // Argan Oil Hair Mask
    ]
}

/// Brand identity record.
pub fn brand_info() -> BrandInfo {
    BrandInfo {
        name: "The Chandra Bella Naturals".to_string(),
        tagline: "Embrace Your Natural Beauty".to_string(),
        mission: "To provide pure, natural beauty products that enhance your \
                  inherent radiance while caring for your skin and the environment."
            .to_string(),
        story: "Founded with a passion for natural beauty, The Chandra Bella \
                Naturals believes that true beauty comes from within and is \
                enhanced by pure, natural ingredients. Our carefully curated \
                products are crafted with love, using only the finest botanical \
                extracts and time-tested natural remedies."
            .to_string(),
        values: vec![
            "100% Natural Ingredients".to_string(),
            "Cruelty-Free & Vegan".to_string(),
            "Sustainable Packaging".to_string(),
            "Ethically Sourced".to_string(),
            "Dermatologically Tested".to_string(),
        ],
    }
}

/// Site color palette.
pub fn color_scheme() -> ColorScheme {
    ColorScheme {
        primary: "#8B5E83".to_string(),
        secondary: "#E6E6FA".to_string(),
        accent: "#9370DB".to_string(),
        gray: "#808080".to_string(),
        light_gray: "#F5F5F5".to_string(),
        white: "#FFFFFF".to_string(),
    }
}
