//! Transform context
//!
//! A [`TransformContext`] owns one loaded cipher unit together with the key
//! and IV it was keyed with. It applies zero padding or the fixlength
//! trailer around the unit for block modes and passes everything else
//! through byte for byte.

use core::fmt;
use std::io::{Read, Write};

use mcrypt_api::{
    AlgorithmDescriptor, CipherUnit, Direction, Error, ModeDescriptor, NameKind, Result,
};
use mcrypt_common::SecretVec;
use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

#[cfg(feature = "rand")]
use rand::{CryptoRng, RngCore};

use crate::catalog::Catalog;
use crate::padding;
use crate::stream::{self, StreamOptions};

/// Stateful encryption/decryption context for one algorithm and mode
///
/// Not `Sync`-safe to share: every transform advances the mode's feedback
/// state, so concurrent use needs external serialization. Key and IV are
/// zeroized on [`deinit`](Self::deinit) and on drop.
///
/// After keying, the first transform fixes the direction of the feedback
/// state; the other direction is refused until [`reinit`](Self::reinit).
pub struct TransformContext {
    algorithm: AlgorithmDescriptor,
    mode: ModeDescriptor,
    unit: Box<dyn CipherUnit>,
    key: Option<SecretVec>,
    iv: Option<SecretVec>,
    // None until the first transform after keying
    direction: Option<Direction>,
}

impl TransformContext {
    /// Create an unkeyed context from the process-wide catalog
    pub fn new(algorithm: &str, mode: &str) -> Result<Self> {
        Self::with_catalog(Catalog::global(), algorithm, mode)
    }

    /// Create an unkeyed context from an explicit catalog
    pub fn with_catalog(catalog: &Catalog, algorithm: &str, mode: &str) -> Result<Self> {
        let algorithm_entry = catalog.resolve_algorithm(algorithm)?;
        let mode_entry = catalog.resolve_mode(mode)?;
        catalog.validate_pairing(&algorithm_entry.descriptor, &mode_entry.descriptor)?;

        let algorithm_unit = algorithm_entry
            .unit
            .as_deref()
            .ok_or_else(|| Error::unknown(NameKind::CipherUnit, algorithm))?;
        let mode_unit = mode_entry
            .unit
            .as_deref()
            .ok_or_else(|| Error::unknown(NameKind::CipherUnit, mode))?;
        let unit = mcrypt_algorithms::load(algorithm_unit, mode_unit)?;

        debug!(algorithm, mode, unit = ?unit, "transform context created");
        Ok(Self {
            algorithm: algorithm_entry.descriptor.clone(),
            mode: mode_entry.descriptor.clone(),
            unit: Box::new(unit),
            key: None,
            iv: None,
            direction: None,
        })
    }

    /// Key the context and reset the mode's feedback state
    ///
    /// Key and IV lengths are validated before anything is stored. If the
    /// unit itself rejects the material, the previous key and IV (if any)
    /// are restored and re-applied. Keying an already keyed context
    /// replaces its material.
    pub fn key(&mut self, key: &[u8], iv: Option<&[u8]>) -> Result<()> {
        let accepted = self.algorithm.accepted_key_sizes();
        if key.is_empty() || !accepted.accepts(key.len()) {
            return Err(Error::KeySize {
                algorithm: self.algorithm.name.clone(),
                actual: key.len(),
                accepted,
            });
        }

        match iv {
            None if self.mode.requires_iv => {
                return Err(Error::IvRequired {
                    mode: self.mode.name.clone(),
                })
            }
            Some(iv) if iv.len() != self.algorithm.iv_size => {
                return Err(Error::IvSize {
                    expected: self.algorithm.iv_size,
                    actual: iv.len(),
                })
            }
            _ => {}
        }

        let previous_key = self.key.replace(SecretVec::from_slice(key));
        let previous_iv = core::mem::replace(&mut self.iv, iv.map(SecretVec::from_slice));

        if let Err(err) = self.init_unit() {
            self.key = previous_key;
            self.iv = previous_iv;
            if self.key.is_none() || self.init_unit().is_err() {
                self.deinit();
            }
            return Err(err);
        }
        debug!(
            algorithm = %self.algorithm.name,
            mode = %self.mode.name,
            key_len = key.len(),
            iv = iv.is_some(),
            "context keyed"
        );
        Ok(())
    }

    /// Reset the unit to the state right after keying
    ///
    /// Needed before decrypting with the context that just encrypted, since
    /// encryption advances feedback state.
    pub fn reinit(&mut self) -> Result<()> {
        self.init_unit()?;
        trace!(algorithm = %self.algorithm.name, mode = %self.mode.name, "context reinitialized");
        Ok(())
    }

    /// Drop key material and return to the unkeyed state
    pub fn deinit(&mut self) {
        self.key = None;
        self.iv = None;
        self.direction = None;
        self.unit.deinit();
    }

    fn init_unit(&mut self) -> Result<()> {
        self.direction = None;
        let key = self.key.as_ref().ok_or(Error::NotKeyed)?;
        let default_iv;
        let iv = match &self.iv {
            Some(iv) => iv.as_slice(),
            None => {
                default_iv = SecretVec::zeroed(self.algorithm.iv_size);
                default_iv.as_slice()
            }
        };
        self.unit.init_state(key.as_slice(), iv)
    }

    /// Encrypt `data`, zero-padding block modes
    ///
    /// With `fixlength` the output of a block mode carries the length
    /// remainder in its last byte and is always longer than `data`.
    pub fn encrypt(&mut self, data: &[u8], fixlength: bool) -> Result<Vec<u8>> {
        self.begin(Direction::Encrypt)?;
        let unit = self.unit_len();
        let mut buffer = Zeroizing::new(padding::pad(data, unit, fixlength));
        self.transform_in_place(&mut buffer, Direction::Encrypt)?;
        trace!(input = data.len(), output = buffer.len(), fixlength, "encrypted buffer");
        Ok(core::mem::take(&mut *buffer))
    }

    /// Decrypt `data`
    ///
    /// Block modes ignore a trailing partial block. With `fixlength` the
    /// length recorded by a fixlength encryption is restored; without it the
    /// zero padding is returned as is.
    pub fn decrypt(&mut self, data: &[u8], fixlength: bool) -> Result<Vec<u8>> {
        self.begin(Direction::Decrypt)?;
        let unit = self.unit_len();
        let whole = padding::whole_units(data.len(), unit);
        let mut buffer = Zeroizing::new(data[..whole].to_vec());
        self.transform_in_place(&mut buffer, Direction::Decrypt)?;

        if fixlength && unit > 1 {
            let keep = padding::recovered_len(&buffer, unit);
            buffer[keep..].zeroize();
            buffer.truncate(keep);
        }
        trace!(input = data.len(), output = buffer.len(), fixlength, "decrypted buffer");
        Ok(core::mem::take(&mut *buffer))
    }

    /// Encrypt everything from `input` into `output`
    pub fn encrypt_file<R: Read, W: Write>(
        &mut self,
        input: R,
        output: W,
        options: &StreamOptions,
    ) -> Result<()> {
        stream::transform_stream(self, Direction::Encrypt, input, output, options)
    }

    /// Decrypt everything from `input` into `output`
    pub fn decrypt_file<R: Read, W: Write>(
        &mut self,
        input: R,
        output: W,
        options: &StreamOptions,
    ) -> Result<()> {
        stream::transform_stream(self, Direction::Decrypt, input, output, options)
    }

    /// Run the unit over a buffer already shaped for the mode
    pub(crate) fn transform_in_place(
        &mut self,
        buffer: &mut [u8],
        direction: Direction,
    ) -> Result<()> {
        self.ensure_keyed()?;
        if buffer.is_empty() {
            return Ok(());
        }
        self.unit.transform(buffer, direction)
    }

    /// Check the context is keyed and bind the feedback state to `direction`
    pub(crate) fn begin(&mut self, direction: Direction) -> Result<()> {
        self.ensure_keyed()?;
        match self.direction {
            Some(started) if started != direction => Err(Error::DirectionMismatch {
                started,
                requested: direction,
            }),
            _ => {
                self.direction = Some(direction);
                Ok(())
            }
        }
    }

    fn ensure_keyed(&self) -> Result<()> {
        if self.is_keyed() {
            Ok(())
        } else {
            Err(Error::NotKeyed)
        }
    }

    /// Granularity of the transform: the block size for block modes, else 1
    pub(crate) fn unit_len(&self) -> usize {
        if self.mode.is_block_mode {
            self.algorithm.block_size.max(1)
        } else {
            1
        }
    }

    /// Random key of the algorithm's maximum key size
    #[cfg(feature = "rand")]
    pub fn generate_key<R: RngCore + CryptoRng>(&self, rng: &mut R) -> SecretVec {
        let mut key = SecretVec::zeroed(self.algorithm.key_size);
        rng.fill_bytes(key.as_mut_slice());
        key
    }

    /// Random IV of the algorithm's IV size
    #[cfg(feature = "rand")]
    pub fn generate_iv<R: RngCore + CryptoRng>(&self, rng: &mut R) -> SecretVec {
        let mut iv = SecretVec::zeroed(self.algorithm.iv_size);
        rng.fill_bytes(iv.as_mut_slice());
        iv
    }

    /// Whether a key has been accepted and the unit initialized
    pub fn is_keyed(&self) -> bool {
        self.key.is_some() && self.unit.is_initialized()
    }

    /// Selected algorithm name
    pub fn algorithm(&self) -> &str {
        &self.algorithm.name
    }

    /// Selected mode name
    pub fn mode(&self) -> &str {
        &self.mode.name
    }

    pub fn get_key_size(&self) -> usize {
        self.algorithm.key_size
    }

    pub fn get_key_sizes(&self) -> &[usize] {
        &self.algorithm.key_sizes
    }

    pub fn get_iv_size(&self) -> usize {
        self.algorithm.iv_size
    }

    pub fn get_block_size(&self) -> usize {
        self.algorithm.block_size
    }

    /// Whether the mode uses an IV
    pub fn has_iv(&self) -> bool {
        self.mode.requires_iv
    }

    pub fn is_block_algorithm(&self) -> bool {
        self.algorithm.is_block_algorithm
    }

    pub fn is_block_mode(&self) -> bool {
        self.mode.is_block_mode
    }

    pub fn is_block_algorithm_mode(&self) -> bool {
        self.mode.is_block_algorithm_mode
    }
}

impl fmt::Debug for TransformContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformContext")
            .field("algorithm", &self.algorithm.name)
            .field("mode", &self.mode.name)
            .field("keyed", &self.is_keyed())
            .finish_non_exhaustive()
    }
}
