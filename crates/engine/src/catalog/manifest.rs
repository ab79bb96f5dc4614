//! Descriptor manifests
//!
//! A plugin directory holds one TOML file per entry. Each file describes an
//! algorithm or a mode and names the cipher unit that implements it; the
//! declared geometry must agree with that unit.
//!
//! ```toml
//! # algorithms/rijndael-256key.toml
//! unit = "rijndael"
//! key_size = 32
//! key_sizes = [32]
//! iv_size = 16
//! block_size = 16
//! is_block_algorithm = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use mcrypt_api::{AlgorithmDescriptor, Error, ModeDescriptor, Result};
use serde::Deserialize;

use super::{AlgorithmEntry, ModeEntry};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AlgorithmManifest {
    name: Option<String>,
    unit: String,
    key_size: usize,
    #[serde(default)]
    key_sizes: Vec<usize>,
    #[serde(default)]
    iv_size: usize,
    block_size: usize,
    is_block_algorithm: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModeManifest {
    name: Option<String>,
    unit: String,
    is_block_mode: bool,
    is_block_algorithm_mode: bool,
    requires_iv: bool,
}

fn invalid(path: &Path, message: impl Into<String>) -> Error {
    Error::Manifest {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

/// `*.toml` files in `dir`, sorted so later files win deterministically
fn manifest_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn parse<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<(T, String)> {
    let text = fs::read_to_string(path)?;
    let manifest = toml::from_str(&text).map_err(|e| invalid(path, e.message().to_string()))?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| invalid(path, "file name is not valid UTF-8"))?
        .to_string();
    Ok((manifest, stem))
}

fn algorithm_entry(path: &Path) -> Result<AlgorithmEntry> {
    let (manifest, stem): (AlgorithmManifest, String) = parse(path)?;
    let name = manifest.name.unwrap_or(stem);

    if name.is_empty() {
        return Err(invalid(path, "name must not be empty"));
    }
    if manifest.key_size == 0 || manifest.block_size == 0 {
        return Err(invalid(path, "key_size and block_size must be non-zero"));
    }
    if manifest.key_sizes.iter().any(|&size| size == 0 || size > manifest.key_size) {
        return Err(invalid(path, "key_sizes must lie in 1..=key_size"));
    }

    let unit = mcrypt_algorithms::algorithm_unit(&manifest.unit)
        .ok_or_else(|| invalid(path, format!("unknown algorithm unit '{}'", manifest.unit)))?;
    if unit.block_size() != manifest.block_size {
        return Err(invalid(
            path,
            format!(
                "block_size {} contradicts unit '{}' ({})",
                manifest.block_size,
                unit.name,
                unit.block_size()
            ),
        ));
    }
    if unit.is_block() != manifest.is_block_algorithm {
        return Err(invalid(
            path,
            format!("is_block_algorithm contradicts unit '{}'", unit.name),
        ));
    }
    // block modes feed the IV into a block-wide register
    if unit.is_block() && manifest.iv_size != 0 && manifest.iv_size != unit.block_size() {
        return Err(invalid(
            path,
            format!(
                "iv_size {} contradicts unit '{}' (0 or {})",
                manifest.iv_size,
                unit.name,
                unit.block_size()
            ),
        ));
    }

    Ok(AlgorithmEntry {
        descriptor: AlgorithmDescriptor {
            name,
            key_size: manifest.key_size,
            key_sizes: manifest.key_sizes,
            iv_size: manifest.iv_size,
            block_size: manifest.block_size,
            is_block_algorithm: manifest.is_block_algorithm,
        },
        unit: Some(manifest.unit),
    })
}

fn mode_entry(path: &Path) -> Result<ModeEntry> {
    let (manifest, stem): (ModeManifest, String) = parse(path)?;
    let name = manifest.name.unwrap_or(stem);

    if name.is_empty() {
        return Err(invalid(path, "name must not be empty"));
    }

    let unit = mcrypt_algorithms::mode_unit(&manifest.unit)
        .ok_or_else(|| invalid(path, format!("unknown mode unit '{}'", manifest.unit)))?;
    if unit.is_block_algorithm_mode() != manifest.is_block_algorithm_mode {
        return Err(invalid(
            path,
            format!("is_block_algorithm_mode contradicts unit '{}'", unit.name),
        ));
    }
    if unit.is_block_mode() != manifest.is_block_mode {
        return Err(invalid(
            path,
            format!("is_block_mode contradicts unit '{}'", unit.name),
        ));
    }

    Ok(ModeEntry {
        descriptor: ModeDescriptor {
            name,
            is_block_mode: manifest.is_block_mode,
            is_block_algorithm_mode: manifest.is_block_algorithm_mode,
            requires_iv: manifest.requires_iv,
        },
        unit: Some(manifest.unit),
    })
}

/// Parse every algorithm manifest in `dir`
pub(super) fn load_algorithms(dir: &Path) -> Result<Vec<AlgorithmEntry>> {
    manifest_paths(dir)?
        .iter()
        .map(|path| algorithm_entry(path))
        .collect()
}

/// Parse every mode manifest in `dir`
pub(super) fn load_modes(dir: &Path) -> Result<Vec<ModeEntry>> {
    manifest_paths(dir)?.iter().map(|path| mode_entry(path)).collect()
}
