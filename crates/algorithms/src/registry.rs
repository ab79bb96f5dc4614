//! Name-based registry of the built-in cipher units
//!
//! An algorithm unit knows how to key a primitive; a mode unit knows how to
//! wrap a keyed primitive in a mode of operation. [`load`] binds one of each
//! into a [`ModuleUnit`], the opaque [`CipherUnit`] the engine drives.

use core::fmt;

use mcrypt_api::{CipherUnit, Direction, Error as CoreError, NameKind, Result as CoreResult};

use crate::block::modes::{Cbc, Cfb, Ctr, Ecb, ModeOfOperation, Ncfb, Nofb, Ofb};
use crate::block::{BlockCipher, Idea, Rijndael};
use crate::error::{Error, Result};
use crate::stream::{Arcfour, StreamCipher, StreamMode};

/// Constructor for a keyed block cipher
pub type BlockConstructor = fn(&[u8]) -> Result<Box<dyn BlockCipher>>;

/// Constructor for a keyed stream cipher
pub type StreamConstructor = fn(&[u8]) -> Result<Box<dyn StreamCipher>>;

/// How an algorithm unit builds its primitive
#[derive(Clone, Copy)]
pub enum Primitive {
    /// A block cipher with a fixed block size
    Block {
        /// Block size in bytes
        block_size: usize,
        /// Keyed constructor
        new: BlockConstructor,
    },
    /// A byte-oriented stream cipher
    Stream {
        /// Keyed constructor
        new: StreamConstructor,
    },
}

/// A registered algorithm implementation
pub struct AlgorithmUnit {
    /// Unit name, referenced by catalog entries
    pub name: &'static str,
    /// Primitive constructor
    pub primitive: Primitive,
}

impl AlgorithmUnit {
    /// Whether the unit is a block cipher
    pub fn is_block(&self) -> bool {
        matches!(self.primitive, Primitive::Block { .. })
    }

    /// Block size in bytes, 1 for stream ciphers
    pub fn block_size(&self) -> usize {
        match self.primitive {
            Primitive::Block { block_size, .. } => block_size,
            Primitive::Stream { .. } => 1,
        }
    }
}

impl fmt::Debug for AlgorithmUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmUnit")
            .field("name", &self.name)
            .field("is_block", &self.is_block())
            .field("block_size", &self.block_size())
            .finish()
    }
}

/// Which mode of operation a mode unit builds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining
    Cbc,
    /// 8-bit cipher feedback
    Cfb,
    /// 8-bit output feedback
    Ofb,
    /// Full-block cipher feedback
    Ncfb,
    /// Full-block output feedback
    Nofb,
    /// Counter
    Ctr,
    /// Pass-through to a stream cipher
    Stream,
}

/// A registered mode implementation
#[derive(Debug)]
pub struct ModeUnit {
    /// Unit name, referenced by catalog entries
    pub name: &'static str,
    /// Mode built by this unit
    pub kind: ModeKind,
}

impl ModeUnit {
    /// Whether the mode wraps a block cipher
    pub fn is_block_algorithm_mode(&self) -> bool {
        self.kind != ModeKind::Stream
    }

    /// Whether the mode only accepts whole blocks
    pub fn is_block_mode(&self) -> bool {
        matches!(
            self.kind,
            ModeKind::Ecb | ModeKind::Cbc | ModeKind::Ncfb | ModeKind::Nofb | ModeKind::Ctr
        )
    }

    /// Key the algorithm and wrap it in this mode
    pub fn build(
        &self,
        algorithm: &AlgorithmUnit,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Box<dyn ModeOfOperation>> {
        match algorithm.primitive {
            Primitive::Stream { new } => {
                if self.kind != ModeKind::Stream {
                    return Err(Error::param("mode", "block mode used with stream algorithm"));
                }
                Ok(Box::new(StreamMode::new(new(key)?)))
            }
            Primitive::Block { new, .. } => {
                let cipher = new(key)?;
                let mode: Box<dyn ModeOfOperation> = match self.kind {
                    ModeKind::Ecb => Box::new(Ecb::new(cipher)),
                    ModeKind::Cbc => Box::new(Cbc::new(cipher, iv)?),
                    ModeKind::Cfb => Box::new(Cfb::new(cipher, iv)?),
                    ModeKind::Ofb => Box::new(Ofb::new(cipher, iv)?),
                    ModeKind::Ncfb => Box::new(Ncfb::new(cipher, iv)?),
                    ModeKind::Nofb => Box::new(Nofb::new(cipher, iv)?),
                    ModeKind::Ctr => Box::new(Ctr::new(cipher, iv)?),
                    ModeKind::Stream => {
                        return Err(Error::param("mode", "stream mode used with block algorithm"))
                    }
                };
                Ok(mode)
            }
        }
    }
}

fn new_rijndael(key: &[u8]) -> Result<Box<dyn BlockCipher>> {
    Ok(Box::new(Rijndael::new(key)?))
}

fn new_idea(key: &[u8]) -> Result<Box<dyn BlockCipher>> {
    Ok(Box::new(Idea::new(key)?))
}

fn new_arcfour(key: &[u8]) -> Result<Box<dyn StreamCipher>> {
    Ok(Box::new(Arcfour::new(key)?))
}

static ALGORITHM_UNITS: &[AlgorithmUnit] = &[
    AlgorithmUnit {
        name: "arcfour",
        primitive: Primitive::Stream { new: new_arcfour },
    },
    AlgorithmUnit {
        name: "idea",
        primitive: Primitive::Block {
            block_size: 8,
            new: new_idea,
        },
    },
    AlgorithmUnit {
        name: "rijndael",
        primitive: Primitive::Block {
            block_size: 16,
            new: new_rijndael,
        },
    },
];

static MODE_UNITS: &[ModeUnit] = &[
    ModeUnit { name: "cbc", kind: ModeKind::Cbc },
    ModeUnit { name: "cfb", kind: ModeKind::Cfb },
    ModeUnit { name: "ctr", kind: ModeKind::Ctr },
    ModeUnit { name: "ecb", kind: ModeKind::Ecb },
    ModeUnit { name: "ncfb", kind: ModeKind::Ncfb },
    ModeUnit { name: "nofb", kind: ModeKind::Nofb },
    ModeUnit { name: "ofb", kind: ModeKind::Ofb },
    ModeUnit { name: "stream", kind: ModeKind::Stream },
];

/// Look up an algorithm unit by name
pub fn algorithm_unit(name: &str) -> Option<&'static AlgorithmUnit> {
    ALGORITHM_UNITS.iter().find(|unit| unit.name == name)
}

/// Look up a mode unit by name
pub fn mode_unit(name: &str) -> Option<&'static ModeUnit> {
    MODE_UNITS.iter().find(|unit| unit.name == name)
}

/// All registered algorithm units
pub fn algorithm_units() -> &'static [AlgorithmUnit] {
    ALGORITHM_UNITS
}

/// All registered mode units
pub fn mode_units() -> &'static [ModeUnit] {
    MODE_UNITS
}

/// Bind an algorithm unit and a mode unit into an unkeyed cipher unit
pub fn load(algorithm: &str, mode: &str) -> CoreResult<ModuleUnit> {
    let algorithm_unit =
        algorithm_unit(algorithm).ok_or_else(|| CoreError::unknown(NameKind::CipherUnit, algorithm))?;
    let mode_unit = mode_unit(mode).ok_or_else(|| CoreError::unknown(NameKind::CipherUnit, mode))?;

    if algorithm_unit.is_block() != mode_unit.is_block_algorithm_mode() {
        return Err(CoreError::IncompatiblePairing {
            algorithm: algorithm.to_string(),
            mode: mode.to_string(),
            reason: if algorithm_unit.is_block() {
                "stream mode used with block algorithm"
            } else {
                "block mode used with stream algorithm"
            },
        });
    }

    Ok(ModuleUnit {
        algorithm: algorithm_unit,
        mode: mode_unit,
        state: None,
    })
}

/// A loaded algorithm+mode pair
///
/// Holds no key material until [`CipherUnit::init_state`] succeeds; the
/// keyed mode (cipher schedule and feedback registers) is dropped, and
/// therefore zeroized, on `deinit` or when the unit goes away.
pub struct ModuleUnit {
    algorithm: &'static AlgorithmUnit,
    mode: &'static ModeUnit,
    state: Option<Box<dyn ModeOfOperation>>,
}

impl ModuleUnit {
    /// Name of the algorithm unit
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name
    }

    /// Name of the mode unit
    pub fn mode_name(&self) -> &'static str {
        self.mode.name
    }
}

impl CipherUnit for ModuleUnit {
    fn init_state(&mut self, key: &[u8], iv: &[u8]) -> CoreResult<()> {
        self.state = None;
        self.state = Some(self.mode.build(self.algorithm, key, iv)?);
        Ok(())
    }

    fn transform(&mut self, buffer: &mut [u8], direction: Direction) -> CoreResult<()> {
        let state = self.state.as_mut().ok_or(CoreError::NotKeyed)?;
        match direction {
            Direction::Encrypt => state.encrypt(buffer)?,
            Direction::Decrypt => state.decrypt(buffer)?,
        }
        Ok(())
    }

    fn deinit(&mut self) {
        self.state = None;
    }

    fn is_initialized(&self) -> bool {
        self.state.is_some()
    }
}

impl fmt::Debug for ModuleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleUnit")
            .field("algorithm", &self.algorithm.name)
            .field("mode", &self.mode.name)
            .field("initialized", &self.state.is_some())
            .finish()
    }
}
