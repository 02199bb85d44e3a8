use crate::domain::{AppError, ScopeKey};
use crate::ports::{CacheStore, CategoryRepository};

/// Service answering which category names are duplicated within a scope.
///
/// Wraps the repository fetch in an optional cache layer keyed per scope.
/// There is no miss synchronization: concurrent callers racing on the same
/// scope may both fetch and both store, last write wins. The repository
/// fetch is idempotent, so this costs a redundant round trip, nothing more.
pub struct DuplicateNameProvider;

impl DuplicateNameProvider {
    /// Fetch the duplicate-name set for `scope`.
    ///
    /// With `use_cache` set, a stored value is returned verbatim without
    /// touching the repository; a miss fetches from the repository and
    /// stores the result under the scope's key. Without it, the cache is
    /// neither read nor written.
    pub fn fetch<R, C>(
        repository: &R,
        cache: &C,
        scope: &ScopeKey,
        use_cache: bool,
    ) -> Result<Vec<String>, AppError>
    where
        R: CategoryRepository,
        C: CacheStore,
    {
        if !use_cache {
            return repository.duplicate_names(scope);
        }

        let key = scope.cache_key();
        if cache.is_stored(&key) {
            return cache.retrieve(&key);
        }

        let names = repository.duplicate_names(scope)?;
        cache.store(&key, &names)?;
        Ok(names)
    }
}
