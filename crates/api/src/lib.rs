//! Public API traits and types for the mcrypt engine
//!
//! This crate provides the surface shared by every other crate in the
//! workspace: the error type, the descriptor types the capability catalog
//! hands out, and the cipher-unit boundary that the engine drives.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::CipherUnit;
