use crate::domain::{AppError, BreadcrumbFormatter, CategoryId, ScopeKey};
use crate::ports::{CacheStore, CategoryRepository};
use crate::services::DuplicateNameProvider;

/// Resolves the user-facing display name for a category.
///
/// A category whose name is unique within its scope keeps that name. A
/// category whose name collides with another category in the same scope is
/// labeled with a short breadcrumb instead, e.g. `Men > Shoes`.
///
/// Collaborators are injected at construction; the separator between
/// breadcrumb elements is the only configuration.
pub struct DisplayNameResolver<R, C> {
    repository: R,
    cache: C,
    formatter: BreadcrumbFormatter,
}

impl<R, C> DisplayNameResolver<R, C>
where
    R: CategoryRepository,
    C: CacheStore,
{
    pub fn new<S: Into<String>>(repository: R, cache: C, separator: S) -> Self {
        Self { repository, cache, formatter: BreadcrumbFormatter::new(separator) }
    }

    /// Resolve the display name for `category`, fetching breadcrumb parts
    /// from the repository when the name turns out to be a duplicate.
    ///
    /// Callers without special freshness needs should pass `use_cache: true`;
    /// `false` forces a fresh duplicate-name fetch on every call.
    pub fn build(
        &self,
        category_name: &str,
        scope: &ScopeKey,
        category: CategoryId,
        use_cache: bool,
    ) -> Result<String, AppError> {
        if !self.is_duplicate(category_name, scope, use_cache)? {
            return Ok(category_name.to_string());
        }

        let parts = self.repository.breadcrumb_parts(category, scope.language_id())?;
        Ok(self.formatter.format(&parts))
    }

    /// Same as [`build`](Self::build), with breadcrumb parts supplied by the
    /// caller. Saves a repository round trip when the caller already has the
    /// path at hand.
    pub fn build_with_breadcrumbs(
        &self,
        category_name: &str,
        scope: &ScopeKey,
        parts: &[String],
        use_cache: bool,
    ) -> Result<String, AppError> {
        if !self.is_duplicate(category_name, scope, use_cache)? {
            return Ok(category_name.to_string());
        }

        Ok(self.formatter.format(parts))
    }

    // Exact, case-sensitive membership test against the scope's duplicates.
    fn is_duplicate(
        &self,
        category_name: &str,
        scope: &ScopeKey,
        use_cache: bool,
    ) -> Result<bool, AppError> {
        let duplicates =
            DuplicateNameProvider::fetch(&self.repository, &self.cache, scope, use_cache)?;
        Ok(duplicates.iter().any(|name| name == category_name))
    }
}
