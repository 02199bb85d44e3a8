mod adapters;
mod display_name_resolver;
mod duplicate_name_provider;

pub use adapters::{MemoryCacheStore, StaticCategoryRepository};
pub use display_name_resolver::DisplayNameResolver;
pub use duplicate_name_provider::DuplicateNameProvider;
