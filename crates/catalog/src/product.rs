//! Product records and the fixed category set.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use bella_core::{DomainError, ProductId};

/// The fixed set of catalog categories.
///
/// Products are assigned to exactly one category at authoring time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Face,
    Lips,
    Skincare,
    Hair,
    Body,
}

impl Category {
    /// Canonical authoring/display order.
    pub const ALL: [Category; 5] = [
        Category::Face,
        Category::Lips,
        Category::Skincare,
        Category::Hair,
        Category::Body,
    ];

    /// Lowercase key, as used in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Face => "face",
            Category::Lips => "lips",
            Category::Skincare => "skincare",
            Category::Hair => "hair",
            Category::Body => "body",
        }
    }

    /// Capitalized name shown in the site navigation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Face => "Face",
            Category::Lips => "Lips",
            Category::Skincare => "Skincare",
            Category::Hair => "Hair",
            Category::Body => "Body",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "face" => Ok(Category::Face),
            "lips" => Ok(Category::Lips),
            "skincare" => Ok(Category::Skincare),
            "hair" => Ok(Category::Hair),
            "body" => Ok(Category::Body),
            other => Err(DomainError::validation(format!(
                "unknown category: {other}"
            ))),
        }
    }
}

/// A single catalog product. Flat record, no relationships.
///
/// `price` is display copy, pre-formatted with its currency symbol; the
/// catalog never does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
    /// Average review rating, 0 to 5.
    pub rating: f32,
    /// Number of reviews behind `rating`.
    pub reviews: u32,
    pub description: String,
    /// Ordered as printed on the packaging.
    pub ingredients: Vec<String>,
    pub usage: String,
}
