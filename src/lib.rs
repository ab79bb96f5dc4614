//! # mcrypt
//!
//! A named-algorithm cipher engine. Pick an algorithm and a mode of
//! operation by name, key the resulting context, and transform in-memory
//! buffers or unbounded streams of any length.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mcrypt = "0.3"
//! ```
//!
//! ```
//! use mcrypt::prelude::*;
//!
//! let mut ctx = TransformContext::new("idea", "ncfb")?;
//! ctx.key(&[7u8; 16], Some(&[0u8; 8]))?;
//!
//! let mut ciphertext = Vec::new();
//! ctx.encrypt_file(&b"any length at all"[..], &mut ciphertext, &StreamOptions::for_encrypt())?;
//!
//! ctx.reinit()?;
//! let plaintext = ctx.decrypt(&ciphertext, true)?;
//! assert_eq!(plaintext, b"any length at all");
//!
//! assert_eq!(mcrypt::get_block_size("blowfish")?, 8);
//! # Ok::<(), mcrypt::Error>(())
//! ```
//!
//! ## Features
//!
//! - `rand` (default): random key and IV generation on a context
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`mcrypt-api`]: error type, descriptors and the cipher-unit trait
//! - [`mcrypt-common`]: zeroizing secret containers
//! - [`mcrypt-params`]: built-in algorithm and mode tables
//! - [`mcrypt-algorithms`]: block ciphers, stream ciphers and modes
//! - [`mcrypt-engine`]: catalog, transform context and stream driver

pub use mcrypt_algorithms as algorithms;
pub use mcrypt_api as api;
pub use mcrypt_common as common;
pub use mcrypt_engine as engine;
pub use mcrypt_params as params;

pub use mcrypt_api::{Error, Result};
pub use mcrypt_engine::metadata::{
    get_block_size, get_iv_size, get_key_size, get_key_sizes, has_iv, is_block_algorithm,
    is_block_algorithm_mode, is_block_mode, list_algorithms, list_modes,
};
pub use mcrypt_engine::{
    configure, decrypt_file, encrypt_file, transform_stream, Catalog, EngineConfig,
    StreamOptions, TransformContext,
};

/// Common imports for mcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Direction, Error, Result};

    // Re-export the engine surface
    pub use crate::engine::{Catalog, EngineConfig, StreamOptions, TransformContext};

    // Re-export the cipher-unit boundary
    pub use crate::api::CipherUnit;

    // Re-export security types
    pub use crate::common::{SecretVec, ZeroizeGuard};
}
