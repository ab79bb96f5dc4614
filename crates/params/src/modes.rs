//! Constants for the built-in modes of operation

/// Static description of one mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeParams {
    /// Catalog name
    pub name: &'static str,
    /// Whether the mode processes whole blocks only
    pub is_block_mode: bool,
    /// Whether the mode must be paired with a block algorithm
    pub is_block_algorithm_mode: bool,
    /// Whether keying requires an explicit IV
    pub requires_iv: bool,
}

/// Electronic codebook
pub const ECB: &str = "ecb";
/// Cipher block chaining
pub const CBC: &str = "cbc";
/// 8-bit cipher feedback
pub const CFB: &str = "cfb";
/// 8-bit output feedback
pub const OFB: &str = "ofb";
/// Full-block cipher feedback
pub const NCFB: &str = "ncfb";
/// Full-block output feedback
pub const NOFB: &str = "nofb";
/// Counter mode
pub const CTR: &str = "ctr";
/// Pass-through to a stream algorithm
pub const STREAM: &str = "stream";

const fn mode(
    name: &'static str,
    is_block_mode: bool,
    is_block_algorithm_mode: bool,
    requires_iv: bool,
) -> ModeParams {
    ModeParams {
        name,
        is_block_mode,
        is_block_algorithm_mode,
        requires_iv,
    }
}

/// Built-in mode table, sorted by name
pub const BUILTIN_MODES: &[ModeParams] = &[
    mode(CBC, true, true, true),
    mode(CFB, false, true, true),
    mode(CTR, true, true, true),
    mode(ECB, true, true, false),
    mode(NCFB, true, true, true),
    mode(NOFB, true, true, true),
    mode(OFB, false, true, true),
    mode(STREAM, false, false, false),
];

/// Look up a built-in mode by exact name
pub fn find(name: &str) -> Option<&'static ModeParams> {
    BUILTIN_MODES.iter().find(|m| m.name == name)
}
