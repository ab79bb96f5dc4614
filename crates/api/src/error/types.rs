//! Error type definitions for engine operations

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{AcceptedKeySizes, Direction, NameKind};

/// Primary error type for engine operations
///
/// Every failure propagates synchronously to the caller; nothing is retried
/// or recovered internally.
#[derive(Debug, Error)]
pub enum Error {
    /// An algorithm, mode or cipher unit name is not registered
    #[error("unknown {kind} '{name}'")]
    UnknownName {
        /// What kind of name failed to resolve
        kind: NameKind,
        /// The name as supplied by the caller
        name: String,
    },

    /// The algorithm/mode combination violates the block/stream invariant
    #[error("{reason} ({algorithm}/{mode})")]
    IncompatiblePairing {
        algorithm: String,
        mode: String,
        reason: &'static str,
    },

    /// Key material of a length the algorithm does not accept
    #[error("invalid key length {actual} for {algorithm} (accepted: {accepted})")]
    KeySize {
        algorithm: String,
        actual: usize,
        accepted: AcceptedKeySizes,
    },

    /// The mode needs an IV and none was supplied
    #[error("mode '{mode}' requires an iv")]
    IvRequired { mode: String },

    /// IV of the wrong length
    #[error("iv size for this algorithm must be {expected} (got {actual})")]
    IvSize { expected: usize, actual: usize },

    /// Transform attempted before the context was keyed
    #[error("context is not keyed: init method not run")]
    NotKeyed,

    /// Transform in the direction opposite to the one the keyed state has run
    #[error("context is running {started}; reinit before {requested}")]
    DirectionMismatch {
        started: Direction,
        requested: Direction,
    },

    /// Underlying stream read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A cipher unit was handed a buffer it cannot process
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// A plugin descriptor manifest could not be parsed or contradicts its unit
    #[error("invalid manifest {}: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },

    /// Process-wide configuration was attempted a second time
    #[error("engine already configured")]
    AlreadyConfigured,
}

/// Result type for engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `UnknownName` error
    pub fn unknown(kind: NameKind, name: impl Into<String>) -> Self {
        Self::UnknownName {
            kind,
            name: name.into(),
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}
