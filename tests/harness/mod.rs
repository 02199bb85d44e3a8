#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use catlabel::{AppError, CategoryId, CategoryRepository, ScopeKey, StaticCategoryRepository};

/// Repository double that records how often each operation runs.
#[derive(Debug, Default)]
pub struct RecordingRepository {
    inner: StaticCategoryRepository,
    duplicate_calls: AtomicUsize,
    breadcrumb_calls: AtomicUsize,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicates(mut self, scope: ScopeKey, names: &[&str]) -> Self {
        self.inner = self.inner.with_duplicates(scope, names);
        self
    }

    pub fn with_breadcrumbs(
        mut self,
        category: CategoryId,
        language_id: u32,
        parts: &[&str],
    ) -> Self {
        self.inner = self.inner.with_breadcrumbs(category, language_id, parts);
        self
    }

    pub fn duplicate_calls(&self) -> usize {
        self.duplicate_calls.load(Ordering::SeqCst)
    }

    pub fn breadcrumb_calls(&self) -> usize {
        self.breadcrumb_calls.load(Ordering::SeqCst)
    }
}

impl CategoryRepository for RecordingRepository {
    fn duplicate_names(&self, scope: &ScopeKey) -> Result<Vec<String>, AppError> {
        self.duplicate_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.duplicate_names(scope)
    }

    fn breadcrumb_parts(
        &self,
        category: CategoryId,
        language_id: u32,
    ) -> Result<Vec<String>, AppError> {
        self.breadcrumb_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.breadcrumb_parts(category, language_id)
    }
}

/// Repository double whose every operation fails.
#[derive(Debug)]
pub struct BrokenRepository;

impl CategoryRepository for BrokenRepository {
    fn duplicate_names(&self, _scope: &ScopeKey) -> Result<Vec<String>, AppError> {
        Err(AppError::repository("connection refused"))
    }

    fn breadcrumb_parts(
        &self,
        _category: CategoryId,
        _language_id: u32,
    ) -> Result<Vec<String>, AppError> {
        Err(AppError::repository("connection refused"))
    }
}

pub fn path(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}
