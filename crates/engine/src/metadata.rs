//! Instance-free metadata queries
//!
//! Sizing and classification by name alone, answered from the process-wide
//! catalog without loading a cipher unit.

use mcrypt_api::Result;

use crate::catalog::Catalog;

/// Maximum key size of `algorithm` in bytes
pub fn get_key_size(algorithm: &str) -> Result<usize> {
    Ok(Catalog::global().resolve_algorithm(algorithm)?.descriptor.key_size)
}

/// Discrete key sizes of `algorithm`; empty when any size up to the maximum works
pub fn get_key_sizes(algorithm: &str) -> Result<Vec<usize>> {
    Ok(Catalog::global()
        .resolve_algorithm(algorithm)?
        .descriptor
        .key_sizes
        .clone())
}

pub fn get_block_size(algorithm: &str) -> Result<usize> {
    Ok(Catalog::global().resolve_algorithm(algorithm)?.descriptor.block_size)
}

pub fn get_iv_size(algorithm: &str) -> Result<usize> {
    Ok(Catalog::global().resolve_algorithm(algorithm)?.descriptor.iv_size)
}

pub fn is_block_algorithm(algorithm: &str) -> Result<bool> {
    Ok(Catalog::global()
        .resolve_algorithm(algorithm)?
        .descriptor
        .is_block_algorithm)
}

pub fn is_block_mode(mode: &str) -> Result<bool> {
    Ok(Catalog::global().resolve_mode(mode)?.descriptor.is_block_mode)
}

pub fn is_block_algorithm_mode(mode: &str) -> Result<bool> {
    Ok(Catalog::global()
        .resolve_mode(mode)?
        .descriptor
        .is_block_algorithm_mode)
}

/// Whether `mode` takes an IV
pub fn has_iv(mode: &str) -> Result<bool> {
    Ok(Catalog::global().resolve_mode(mode)?.descriptor.requires_iv)
}

/// Every algorithm name, sorted
pub fn list_algorithms() -> Vec<String> {
    Catalog::global().algorithms().map(|a| a.name.clone()).collect()
}

/// Every mode name, sorted
pub fn list_modes() -> Vec<String> {
    Catalog::global().modes().map(|m| m.name.clone()).collect()
}
