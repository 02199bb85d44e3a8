mod breadcrumb;
mod category_id;
mod error;
mod scope;

pub use breadcrumb::BreadcrumbFormatter;
pub use category_id::CategoryId;
pub use error::AppError;
pub use scope::ScopeKey;
