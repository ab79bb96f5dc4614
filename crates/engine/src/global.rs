//! Process-wide engine state
//!
//! The global catalog is set at most once. Either [`configure`] installs a
//! catalog built from an [`EngineConfig`], or the first lookup installs the
//! built-in catalog; after that the state never changes.

use mcrypt_api::{Error, Result};
use mcrypt_params::DEFAULT_BUFFER_BLOCKS;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::EngineConfig;

struct Global {
    catalog: Catalog,
    buffer_blocks: usize,
}

static GLOBAL: OnceCell<Global> = OnceCell::new();

/// Configure the process-wide catalog and stream defaults
///
/// Must run before any lookup through the global catalog. Fails with
/// [`Error::AlreadyConfigured`] once the global state exists, whether it
/// came from an earlier call or from a lookup that installed the built-ins.
pub fn configure(config: EngineConfig) -> Result<()> {
    if GLOBAL.get().is_some() {
        return Err(Error::AlreadyConfigured);
    }
    config.validate()?;
    let catalog = Catalog::load(&config)?;
    GLOBAL
        .set(Global {
            catalog,
            buffer_blocks: config.buffer_blocks,
        })
        .map_err(|_| Error::AlreadyConfigured)?;
    debug!(buffer_blocks = config.buffer_blocks, "engine configured");
    Ok(())
}

/// Whether the global state has been installed
pub fn is_configured() -> bool {
    GLOBAL.get().is_some()
}

pub(crate) fn catalog() -> &'static Catalog {
    &GLOBAL
        .get_or_init(|| Global {
            catalog: Catalog::builtin(),
            buffer_blocks: DEFAULT_BUFFER_BLOCKS,
        })
        .catalog
}

/// Default stream chunk size in blocks
pub fn buffer_blocks() -> usize {
    GLOBAL
        .get()
        .map_or(DEFAULT_BUFFER_BLOCKS, |global| global.buffer_blocks)
}
