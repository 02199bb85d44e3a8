use crate::domain::AppError;

/// String-keyed cache for duplicate-name sets.
///
/// Eviction and TTL belong to the backend; this crate never invalidates
/// entries itself. A backend that cannot answer `is_stored` should report
/// `false` and let the real failure surface on `retrieve` or `store`.
pub trait CacheStore {
    /// Whether a value is stored under `key`.
    fn is_stored(&self, key: &str) -> bool;

    /// The value stored under `key`, verbatim.
    fn retrieve(&self, key: &str) -> Result<Vec<String>, AppError>;

    /// Store `value` under `key`, replacing any previous value.
    fn store(&self, key: &str, value: &[String]) -> Result<(), AppError>;
}

impl<T: CacheStore + ?Sized> CacheStore for &T {
    fn is_stored(&self, key: &str) -> bool {
        (**self).is_stored(key)
    }

    fn retrieve(&self, key: &str) -> Result<Vec<String>, AppError> {
        (**self).retrieve(key)
    }

    fn store(&self, key: &str, value: &[String]) -> Result<(), AppError> {
        (**self).store(key, value)
    }
}
