//! Built-in cipher units for the mcrypt engine
//!
//! This crate provides the block ciphers, stream ciphers and modes of
//! operation that back the catalog entries of the engine, together with a
//! registry that binds an algorithm unit and a mode unit into a single
//! [`mcrypt_api::CipherUnit`].
//!
//! # Security Features
//!
//! - Expanded key schedules and feedback registers are zeroized on drop
//! - Rijndael uses branchless GF(2^8) arithmetic instead of lookup tables
//! - Keying errors never echo key material

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations and modes of operation
pub mod block;
pub use block::{BlockCipher, Idea, Rijndael};

// Stream cipher implementations
pub mod stream;
pub use stream::{Arcfour, StreamCipher};

// Name-based registry of cipher units
pub mod registry;
pub use registry::{algorithm_unit, load, mode_unit, AlgorithmUnit, ModeUnit, ModuleUnit};

// Re-export security types from mcrypt-common
pub use mcrypt_common::security::SecretVec;
