//! The boundary between the engine and an opaque cipher+mode implementation

use crate::error::Result;
use crate::types::Direction;

/// A loaded algorithm+mode pair
///
/// Units are acquired once per context and owned exclusively by it. They
/// carry the keyed cipher state and any feedback state of the mode; both
/// are mutated by every `transform` call, so a unit is `Send` but never
/// shared between threads.
pub trait CipherUnit: Send {
    /// Key the unit and reset any feedback state from `iv`
    ///
    /// Calling this again with the same material must restore exactly the
    /// state a fresh unit would have after its first `init_state`.
    fn init_state(&mut self, key: &[u8], iv: &[u8]) -> Result<()>;

    /// Transform `buffer` in place
    ///
    /// Block modes require a whole number of algorithm blocks; stream and
    /// byte-feedback modes accept any length.
    fn transform(&mut self, buffer: &mut [u8], direction: Direction) -> Result<()>;

    /// Drop keyed state, zeroizing it
    fn deinit(&mut self);

    /// Whether `init_state` has succeeded since the last `deinit`
    fn is_initialized(&self) -> bool;
}
