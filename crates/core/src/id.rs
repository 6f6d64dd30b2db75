//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a product in the catalog.
///
/// Ids are small integers assigned by hand at authoring time. Uniqueness
/// across the whole catalog is a test-time property, not a runtime check.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u32 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}
