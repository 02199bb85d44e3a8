mod cache_store;
mod category_repository;

pub use cache_store::CacheStore;
pub use category_repository::CategoryRepository;
