//! Capability catalog
//!
//! Static metadata for every known algorithm and mode, keyed by name, plus
//! the name of the cipher unit that implements each entry. The catalog is
//! built once (from the built-in tables and, optionally, descriptor
//! manifests) and is read-only afterwards, so it is shared freely.

mod manifest;

use std::collections::BTreeMap;

use mcrypt_api::error::CatalogResult;
use mcrypt_api::{AlgorithmDescriptor, Error, ModeDescriptor, NameKind};
use mcrypt_params::{AlgorithmParams, ModeParams, BUILTIN_ALGORITHMS, BUILTIN_MODES};
use tracing::debug;

use crate::config::EngineConfig;

/// An algorithm known to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmEntry {
    /// Sizing and classification metadata
    pub descriptor: AlgorithmDescriptor,
    /// Name of the implementing cipher unit; `None` for metadata-only entries
    pub unit: Option<String>,
}

/// A mode known to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeEntry {
    /// Classification metadata
    pub descriptor: ModeDescriptor,
    /// Name of the implementing mode unit; `None` for metadata-only entries
    pub unit: Option<String>,
}

impl From<&AlgorithmParams> for AlgorithmEntry {
    fn from(params: &AlgorithmParams) -> Self {
        Self {
            descriptor: AlgorithmDescriptor {
                name: params.name.to_string(),
                key_size: params.key_size,
                key_sizes: params.key_sizes.to_vec(),
                iv_size: params.iv_size,
                block_size: params.block_size,
                is_block_algorithm: params.is_block_algorithm,
            },
            unit: params.unit.map(str::to_string),
        }
    }
}

impl From<&ModeParams> for ModeEntry {
    fn from(params: &ModeParams) -> Self {
        Self {
            descriptor: ModeDescriptor {
                name: params.name.to_string(),
                is_block_mode: params.is_block_mode,
                is_block_algorithm_mode: params.is_block_algorithm_mode,
                requires_iv: params.requires_iv,
            },
            unit: Some(params.name.to_string()),
        }
    }
}

/// Name-indexed algorithm and mode metadata
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    algorithms: BTreeMap<String, AlgorithmEntry>,
    modes: BTreeMap<String, ModeEntry>,
}

impl Catalog {
    /// Catalog holding only the built-in entries
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for params in BUILTIN_ALGORITHMS {
            catalog.insert_algorithm(params.into());
        }
        for params in BUILTIN_MODES {
            catalog.insert_mode(params.into());
        }
        debug!(
            algorithms = catalog.algorithms.len(),
            modes = catalog.modes.len(),
            "built-in catalog ready"
        );
        catalog
    }

    /// Built-in entries plus every manifest found in the configured directories
    ///
    /// A manifest entry with the same name as a built-in entry replaces it.
    pub fn load(config: &EngineConfig) -> CatalogResult<Self> {
        let mut catalog = Self::builtin();

        if let Some(dir) = &config.algorithm_dir {
            let entries = manifest::load_algorithms(dir)?;
            debug!(dir = %dir.display(), count = entries.len(), "loaded algorithm manifests");
            for entry in entries {
                catalog.insert_algorithm(entry);
            }
        }

        if let Some(dir) = &config.mode_dir {
            let entries = manifest::load_modes(dir)?;
            debug!(dir = %dir.display(), count = entries.len(), "loaded mode manifests");
            for entry in entries {
                catalog.insert_mode(entry);
            }
        }

        Ok(catalog)
    }

    /// The process-wide catalog
    ///
    /// Falls back to [`Catalog::builtin`] unless [`crate::configure`] ran first.
    pub fn global() -> &'static Catalog {
        crate::global::catalog()
    }

    fn insert_algorithm(&mut self, entry: AlgorithmEntry) {
        if self
            .algorithms
            .insert(entry.descriptor.name.clone(), entry)
            .is_some()
        {
            debug!("algorithm entry replaced by manifest");
        }
    }

    fn insert_mode(&mut self, entry: ModeEntry) {
        if self.modes.insert(entry.descriptor.name.clone(), entry).is_some() {
            debug!("mode entry replaced by manifest");
        }
    }

    /// Look up an algorithm by exact name
    pub fn resolve_algorithm(&self, name: &str) -> CatalogResult<&AlgorithmEntry> {
        self.algorithms
            .get(name)
            .ok_or_else(|| Error::unknown(NameKind::Algorithm, name))
    }

    /// Look up a mode by exact name
    pub fn resolve_mode(&self, name: &str) -> CatalogResult<&ModeEntry> {
        self.modes
            .get(name)
            .ok_or_else(|| Error::unknown(NameKind::Mode, name))
    }

    /// Check the block/stream compatibility of an algorithm and a mode
    pub fn validate_pairing(
        &self,
        algorithm: &AlgorithmDescriptor,
        mode: &ModeDescriptor,
    ) -> CatalogResult<()> {
        let reason = match (mode.is_block_algorithm_mode, algorithm.is_block_algorithm) {
            (true, false) => "block mode used with stream algorithm",
            (false, true) => "stream mode used with block algorithm",
            _ => return Ok(()),
        };
        Err(Error::IncompatiblePairing {
            algorithm: algorithm.name.clone(),
            mode: mode.name.clone(),
            reason,
        })
    }

    /// All algorithm descriptors, ordered by name
    pub fn algorithms(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.algorithms.values().map(|entry| &entry.descriptor)
    }

    /// All mode descriptors, ordered by name
    pub fn modes(&self) -> impl Iterator<Item = &ModeDescriptor> {
        self.modes.values().map(|entry| &entry.descriptor)
    }
}
