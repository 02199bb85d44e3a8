use crate::domain::{AppError, CategoryId, ScopeKey};

/// Read-only access to category data, scoped to shop and language.
///
/// Implementations must be deterministic for a given scope at a given
/// instant; the caching layer relies on repeated fetches being idempotent.
pub trait CategoryRepository {
    /// Names that occur more than once within `scope`, in stable order.
    fn duplicate_names(&self, scope: &ScopeKey) -> Result<Vec<String>, AppError>;

    /// Ancestor-to-self path of category names for `category`, localized to
    /// `language_id`. The category's own name is the last element.
    fn breadcrumb_parts(
        &self,
        category: CategoryId,
        language_id: u32,
    ) -> Result<Vec<String>, AppError>;
}

impl<T: CategoryRepository + ?Sized> CategoryRepository for &T {
    fn duplicate_names(&self, scope: &ScopeKey) -> Result<Vec<String>, AppError> {
        (**self).duplicate_names(scope)
    }

    fn breadcrumb_parts(
        &self,
        category: CategoryId,
        language_id: u32,
    ) -> Result<Vec<String>, AppError> {
        (**self).breadcrumb_parts(category, language_id)
    }
}
