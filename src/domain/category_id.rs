use serde::{Deserialize, Deserializer, Serialize};

use super::AppError;

/// A validated category identifier.
///
/// Guarantees: positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CategoryId(u32);

impl CategoryId {
    pub fn new(id: u32) -> Result<Self, AppError> {
        if id == 0 {
            return Err(AppError::InvalidCategoryId(id));
        }
        Ok(Self(id))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CategoryId> for u32 {
    fn from(val: CategoryId) -> Self {
        val.0
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u32::deserialize(deserializer)?;
        CategoryId::new(id).map_err(serde::de::Error::custom)
    }
}
