//! Constant values for mcrypt cipher operations
//!
//! This crate holds the descriptor tables of the built-in catalog: the key,
//! IV and block geometry of every known algorithm and the classification
//! flags of every mode of operation. It has no dependencies so that both the
//! cipher units and the engine can agree on the same numbers.

#![no_std]
#![forbid(unsafe_code)]

pub mod algorithms;
pub mod modes;

pub use algorithms::{AlgorithmParams, BUILTIN_ALGORITHMS};
pub use modes::{ModeParams, BUILTIN_MODES};

/// Default number of algorithm blocks per stream driver chunk
pub const DEFAULT_BUFFER_BLOCKS: usize = 1024;
