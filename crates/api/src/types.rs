//! Descriptor and marker types shared across the engine

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Direction of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Which namespace a name failed to resolve in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Algorithm name unknown to the catalog
    Algorithm,
    /// Mode name unknown to the catalog
    Mode,
    /// Catalog knows the name, but no implementation is registered for it
    CipherUnit,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Algorithm => f.write_str("algorithm"),
            NameKind::Mode => f.write_str("mode"),
            NameKind::CipherUnit => f.write_str("cipher unit"),
        }
    }
}

/// Key lengths an algorithm accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptedKeySizes {
    /// Exactly one of these lengths
    Discrete(Vec<usize>),
    /// Any non-empty key up to this length
    UpTo(usize),
}

impl AcceptedKeySizes {
    /// Check a key length against the accepted set
    pub fn accepts(&self, len: usize) -> bool {
        match self {
            AcceptedKeySizes::Discrete(sizes) => sizes.contains(&len),
            AcceptedKeySizes::UpTo(max) => len > 0 && len <= *max,
        }
    }
}

impl fmt::Display for AcceptedKeySizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcceptedKeySizes::Discrete(sizes) => {
                let mut first = true;
                for size in sizes {
                    if !first {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", size)?;
                    first = false;
                }
                Ok(())
            }
            AcceptedKeySizes::UpTo(max) => write!(f, "1..={}", max),
        }
    }
}

/// Static capabilities of a cipher algorithm
///
/// `key_size` is the maximum accepted key length; `key_sizes` lists the
/// discrete lengths, and is empty when any length up to `key_size` works.
/// Stream algorithms report a `block_size` of 1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AlgorithmDescriptor {
    pub name: String,
    pub key_size: usize,
    pub key_sizes: Vec<usize>,
    pub iv_size: usize,
    pub block_size: usize,
    pub is_block_algorithm: bool,
}

impl AlgorithmDescriptor {
    /// The key lengths this algorithm accepts
    pub fn accepted_key_sizes(&self) -> AcceptedKeySizes {
        if self.key_sizes.is_empty() {
            AcceptedKeySizes::UpTo(self.key_size)
        } else {
            AcceptedKeySizes::Discrete(self.key_sizes.clone())
        }
    }
}

/// Static capabilities of a mode of operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ModeDescriptor {
    pub name: String,
    /// Output length must be a multiple of the algorithm block size
    pub is_block_mode: bool,
    /// The mode pairs with block algorithms only
    pub is_block_algorithm_mode: bool,
    pub requires_iv: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discrete_key_sizes_are_exact() {
        let sizes = AcceptedKeySizes::Discrete(vec![16, 24, 32]);
        assert!(sizes.accepts(16));
        assert!(sizes.accepts(32));
        assert!(!sizes.accepts(17));
        assert!(!sizes.accepts(0));
    }

    #[test]
    fn open_key_sizes_are_bounded() {
        let sizes = AcceptedKeySizes::UpTo(56);
        assert!(sizes.accepts(1));
        assert!(sizes.accepts(56));
        assert!(!sizes.accepts(57));
        assert!(!sizes.accepts(0));
    }

    #[test]
    fn descriptor_picks_key_size_policy() {
        let desc = AlgorithmDescriptor {
            name: "blowfish".into(),
            key_size: 56,
            key_sizes: vec![],
            iv_size: 8,
            block_size: 8,
            is_block_algorithm: true,
        };
        assert_eq!(desc.accepted_key_sizes(), AcceptedKeySizes::UpTo(56));
    }
}
