//! Constants for the built-in cipher algorithms

/// Static description of one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmParams {
    /// Catalog name
    pub name: &'static str,
    /// Maximum key size in bytes
    pub key_size: usize,
    /// Discrete accepted key sizes; empty means any length up to `key_size`
    pub key_sizes: &'static [usize],
    /// IV size in bytes
    pub iv_size: usize,
    /// Block size in bytes (1 for byte-oriented stream ciphers)
    pub block_size: usize,
    /// Whether the algorithm is a block cipher
    pub is_block_algorithm: bool,
    /// Name of the cipher unit implementing the algorithm, if one ships
    pub unit: Option<&'static str>,
}

/// Rijndael with a 128-bit block
pub const RIJNDAEL_128: &str = "rijndael-128";
/// Rijndael block size in bytes
pub const RIJNDAEL_BLOCK_SIZE: usize = 16;
/// Rijndael key sizes in bytes
pub const RIJNDAEL_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// IDEA
pub const IDEA: &str = "idea";
/// IDEA key size in bytes
pub const IDEA_KEY_SIZE: usize = 16;
/// IDEA block size in bytes
pub const IDEA_BLOCK_SIZE: usize = 8;

/// Arcfour (RC4 compatible)
pub const ARCFOUR: &str = "arcfour";
/// Arcfour maximum key size in bytes
pub const ARCFOUR_MAX_KEY_SIZE: usize = 256;

/// Built-in algorithm table, sorted by name
pub const BUILTIN_ALGORITHMS: &[AlgorithmParams] = &[
    AlgorithmParams {
        name: ARCFOUR,
        key_size: ARCFOUR_MAX_KEY_SIZE,
        key_sizes: &[],
        iv_size: 0,
        block_size: 1,
        is_block_algorithm: false,
        unit: Some("arcfour"),
    },
    AlgorithmParams {
        name: "blowfish",
        key_size: 56,
        key_sizes: &[],
        iv_size: 8,
        block_size: 8,
        is_block_algorithm: true,
        unit: None,
    },
    AlgorithmParams {
        name: "cast-256",
        key_size: 32,
        key_sizes: &RIJNDAEL_KEY_SIZES,
        iv_size: 16,
        block_size: 16,
        is_block_algorithm: true,
        unit: None,
    },
    AlgorithmParams {
        name: "enigma",
        key_size: 13,
        key_sizes: &[],
        iv_size: 0,
        block_size: 1,
        is_block_algorithm: false,
        unit: None,
    },
    AlgorithmParams {
        name: IDEA,
        key_size: IDEA_KEY_SIZE,
        key_sizes: &[IDEA_KEY_SIZE],
        iv_size: IDEA_BLOCK_SIZE,
        block_size: IDEA_BLOCK_SIZE,
        is_block_algorithm: true,
        unit: Some("idea"),
    },
    AlgorithmParams {
        name: RIJNDAEL_128,
        key_size: 32,
        key_sizes: &RIJNDAEL_KEY_SIZES,
        iv_size: RIJNDAEL_BLOCK_SIZE,
        block_size: RIJNDAEL_BLOCK_SIZE,
        is_block_algorithm: true,
        unit: Some("rijndael"),
    },
    AlgorithmParams {
        name: "saferplus",
        key_size: 32,
        key_sizes: &RIJNDAEL_KEY_SIZES,
        iv_size: 16,
        block_size: 16,
        is_block_algorithm: true,
        unit: None,
    },
    AlgorithmParams {
        name: "tripledes",
        key_size: 24,
        key_sizes: &[24],
        iv_size: 8,
        block_size: 8,
        is_block_algorithm: true,
        unit: None,
    },
    AlgorithmParams {
        name: "twofish",
        key_size: 32,
        key_sizes: &RIJNDAEL_KEY_SIZES,
        iv_size: 16,
        block_size: 16,
        is_block_algorithm: true,
        unit: None,
    },
    // WAKE reports a 32-byte IV even though it is a stream algorithm.
    AlgorithmParams {
        name: "wake",
        key_size: 32,
        key_sizes: &[32],
        iv_size: 32,
        block_size: 1,
        is_block_algorithm: false,
        unit: None,
    },
];

/// Look up a built-in algorithm by exact name
pub fn find(name: &str) -> Option<&'static AlgorithmParams> {
    BUILTIN_ALGORITHMS.iter().find(|a| a.name == name)
}
