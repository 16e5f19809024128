pub mod error;
pub mod ids;
pub mod product;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use ids::{CategoryId, ProductId};
pub use product::Product;
