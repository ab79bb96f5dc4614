//! Common implementations and shared functionality for the mcrypt engine
//!
//! Key material, IVs and chunk buffers that may hold plaintext live in the
//! containers defined here so that they are wiped on every exit path.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretVec, ZeroizeGuard};
