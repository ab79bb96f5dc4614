//! Trait definitions for the cipher-unit boundary

pub mod unit;

pub use unit::CipherUnit;
