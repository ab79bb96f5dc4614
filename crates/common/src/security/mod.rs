//! Security primitives for handling key material and plaintext buffers

pub mod secret;

pub use secret::{SecretVec, ZeroizeGuard};
