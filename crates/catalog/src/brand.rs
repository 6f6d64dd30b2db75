//! Brand identity copy.

use serde::{Deserialize, Serialize};

/// Flat brand record: constructed once, immutable for the life of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInfo {
    pub name: String,
    pub tagline: String,
    pub mission: String,
    pub story: String,
    /// Ordered value statements shown on the About page.
    pub values: Vec<String>,
}
