//! Transform engine for named cipher algorithms and modes
//!
//! This crate turns an algorithm name and a mode name into a stateful
//! [`TransformContext`] that encrypts and decrypts in-memory buffers of any
//! length, and drives that context over unbounded `Read`/`Write` streams.
//!
//! # Overview
//!
//! - [`Catalog`] resolves names into descriptors and checks that the block
//!   or stream nature of an algorithm matches the mode it is paired with.
//! - [`TransformContext`] owns one keyed cipher unit, the stored key and
//!   IV, and applies either zero padding or the fixlength length-recovery
//!   trailer to block modes.
//! - [`stream`] processes data in bounded chunks while producing exactly
//!   the bytes the single-buffer path would.
//! - [`metadata`] answers sizing questions by name, with no context.
//!
//! # Example
//!
//! ```
//! use mcrypt_engine::TransformContext;
//!
//! let mut ctx = TransformContext::new("rijndael-128", "cbc")?;
//! ctx.key(&[0x2b; 16], Some(&[0u8; 16]))?;
//!
//! let ciphertext = ctx.encrypt(b"attack at dawn", true)?;
//! assert_eq!(ciphertext.len(), 16);
//!
//! ctx.reinit()?;
//! assert_eq!(ctx.decrypt(&ciphertext, true)?, b"attack at dawn");
//! # Ok::<(), mcrypt_engine::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod context;
pub mod global;
pub mod metadata;
pub mod padding;
pub mod stream;

pub use catalog::{AlgorithmEntry, Catalog, ModeEntry};
pub use config::EngineConfig;
pub use context::TransformContext;
pub use global::configure;
pub use stream::{decrypt_file, encrypt_file, transform_stream, StreamOptions};

// Re-export the API error system
pub use mcrypt_api::{Direction, Error, Result};
