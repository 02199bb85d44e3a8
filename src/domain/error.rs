use thiserror::Error;

/// Library-wide error type for display-name resolution.
///
/// Collaborator failures surface to the caller unchanged: there is no retry,
/// no fallback to a cache bypass, and no partial display name.
#[derive(Debug, Error)]
pub enum AppError {
    /// Category repository could not complete a fetch.
    #[error("category repository failure: {details}")]
    Repository { details: String },

    /// No breadcrumb parts exist for the requested category.
    #[error("no breadcrumb parts found for category {category}")]
    BreadcrumbNotFound { category: u32 },

    /// Cache store read or write failed.
    #[error("cache store failure: {details}")]
    Cache { details: String },

    /// Cached payload could not be encoded or decoded.
    #[error("cache payload serialization failed: {0}")]
    CacheSerialization(#[from] serde_json::Error),

    /// Scope identifiers must both be positive.
    #[error("invalid scope: shop_id={shop_id}, language_id={language_id} (both must be positive)")]
    InvalidScope { shop_id: u32, language_id: u32 },

    /// Category identifier must be positive.
    #[error("invalid category id '{0}': must be positive")]
    InvalidCategoryId(u32),
}

impl AppError {
    pub fn repository<S: Into<String>>(details: S) -> Self {
        AppError::Repository { details: details.into() }
    }

    pub fn cache<S: Into<String>>(details: S) -> Self {
        AppError::Cache { details: details.into() }
    }
}
