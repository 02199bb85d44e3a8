//! catlabel: resolve user-facing display names for shop categories.
//!
//! Category names are only unique within a (shop, language) scope. When a
//! name collides with another category in the same scope, the resolver
//! substitutes a short breadcrumb-derived label (immediate parent plus the
//! category itself) so users can tell the entries apart.
//!
//! Storage access and cache eviction live behind the [`ports`] traits; this
//! crate only defines the lookup discipline and the label policy.

pub mod domain;
pub mod ports;
pub mod services;


pub use domain::{AppError, BreadcrumbFormatter, CategoryId, ScopeKey};
pub use ports::{CacheStore, CategoryRepository};
pub use services::{
    DisplayNameResolver, DuplicateNameProvider, MemoryCacheStore, StaticCategoryRepository,
};
