//! Error handling for the cipher engine

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export validation utilities module (not as a nested function)
pub use validate as validation;

// Specialized result types for different operations
pub type CatalogResult<T> = Result<T>;
