use serde::{Deserialize, Deserializer, Serialize};

use super::AppError;

/// Namespace prefix for duplicate-name cache keys.
const CACHE_NAMESPACE: &str = "duplicate_names";

/// The (shop, language) pair within which category names must be unique.
///
/// Guarantees:
/// - Both identifiers are positive
/// - Two scopes are equal iff both components are equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScopeKey {
    shop_id: u32,
    language_id: u32,
}

impl ScopeKey {
    pub fn new(shop_id: u32, language_id: u32) -> Result<Self, AppError> {
        if shop_id == 0 || language_id == 0 {
            return Err(AppError::InvalidScope { shop_id, language_id });
        }
        Ok(Self { shop_id, language_id })
    }

    pub fn shop_id(&self) -> u32 {
        self.shop_id
    }

    pub fn language_id(&self) -> u32 {
        self.language_id
    }

    /// Deterministic cache key for the duplicate-name set of this scope.
    ///
    /// Injective across scopes: the fixed `_shop_` / `_lang_` markers keep
    /// distinct (shop, language) pairs from colliding.
    pub fn cache_key(&self) -> String {
        format!("{}_shop_{}_lang_{}", CACHE_NAMESPACE, self.shop_id, self.language_id)
    }
}

impl std::fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "shop {} / language {}", self.shop_id, self.language_id)
    }
}

impl<'de> Deserialize<'de> for ScopeKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            shop_id: u32,
            language_id: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        ScopeKey::new(raw.shop_id, raw.language_id).map_err(serde::de::Error::custom)
    }
}
