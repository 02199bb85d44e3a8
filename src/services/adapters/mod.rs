mod memory_cache_store;
mod static_category_repository;

pub use memory_cache_store::MemoryCacheStore;
pub use static_category_repository::StaticCategoryRepository;
