use std::collections::HashMap;

use crate::domain::{AppError, CategoryId, ScopeKey};
use crate::ports::CategoryRepository;

/// Category repository over fixed in-memory data.
///
/// Scopes with no registered entry report an empty duplicate set; missing
/// breadcrumb data is an error, matching a backend that has no row for the
/// requested category.
#[derive(Debug, Clone, Default)]
pub struct StaticCategoryRepository {
    duplicates: HashMap<ScopeKey, Vec<String>>,
    breadcrumbs: HashMap<(CategoryId, u32), Vec<String>>,
}

impl StaticCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicates(mut self, scope: ScopeKey, names: &[&str]) -> Self {
        self.duplicates.insert(scope, names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn with_breadcrumbs(
        mut self,
        category: CategoryId,
        language_id: u32,
        parts: &[&str],
    ) -> Self {
        self.breadcrumbs
            .insert((category, language_id), parts.iter().map(|p| p.to_string()).collect());
        self
    }
}

impl CategoryRepository for StaticCategoryRepository {
    fn duplicate_names(&self, scope: &ScopeKey) -> Result<Vec<String>, AppError> {
        Ok(self.duplicates.get(scope).cloned().unwrap_or_default())
    }

    fn breadcrumb_parts(
        &self,
        category: CategoryId,
        language_id: u32,
    ) -> Result<Vec<String>, AppError> {
        self.breadcrumbs
            .get(&(category, language_id))
            .cloned()
            .ok_or(AppError::BreadcrumbNotFound { category: category.get() })
    }
}
