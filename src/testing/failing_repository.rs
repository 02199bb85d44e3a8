use crate::domain::{AppError, CategoryId, ScopeKey};
use crate::ports::CategoryRepository;

/// Mock repository whose every operation fails.
#[derive(Debug)]
pub struct FailingRepository {
    details: String,
}

impl FailingRepository {
    pub fn new<S: Into<String>>(details: S) -> Self {
        Self { details: details.into() }
    }
}

impl CategoryRepository for FailingRepository {
    fn duplicate_names(&self, _scope: &ScopeKey) -> Result<Vec<String>, AppError> {
        Err(AppError::repository(&self.details))
    }

    fn breadcrumb_parts(
        &self,
        _category: CategoryId,
        _language_id: u32,
    ) -> Result<Vec<String>, AppError> {
        Err(AppError::repository(&self.details))
    }
}
