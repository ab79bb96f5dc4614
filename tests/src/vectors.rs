//! Known-answer vectors for the built-in cipher units
//!
//! Rijndael vectors are from NIST SP 800-38A (F.1.1, F.2.1, F.3.7, F.5.1,
//! and the first two blocks of F.3.13 and F.4.1 for the n-bit modes).

/// One known-answer case, all fields hex encoded
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    pub algorithm: &'static str,
    pub mode: &'static str,
    pub key: &'static str,
    pub iv: Option<&'static str>,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

const AES_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const AES_IV: &str = "000102030405060708090a0b0c0d0e0f";
const AES_CTR_IV: &str = "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";
const AES_PT: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";

pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        algorithm: "rijndael-128",
        mode: "ecb",
        key: AES_KEY,
        iv: None,
        plaintext: AES_PT,
        ciphertext: "3ad77bb40d7a3660a89ecaf32466ef97f5d3d58503b9699de785895a96fdbaaf",
    },
    KnownAnswer {
        algorithm: "rijndael-128",
        mode: "cbc",
        key: AES_KEY,
        iv: Some(AES_IV),
        plaintext: AES_PT,
        ciphertext: "7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2",
    },
    KnownAnswer {
        algorithm: "rijndael-128",
        mode: "cfb",
        key: AES_KEY,
        iv: Some(AES_IV),
        plaintext: "6bc1bee22e409f96e93d7e117393172aae2d",
        ciphertext: "3b79424c9c0dd436bace9e0ed4586a4f32b9",
    },
    KnownAnswer {
        algorithm: "rijndael-128",
        mode: "ncfb",
        key: AES_KEY,
        iv: Some(AES_IV),
        plaintext: AES_PT,
        ciphertext: "3b3fd92eb72dad20333449f8e83cfb4ac8a64537a0b3a93fcde3cdad9f1ce58b",
    },
    KnownAnswer {
        algorithm: "rijndael-128",
        mode: "nofb",
        key: AES_KEY,
        iv: Some(AES_IV),
        plaintext: AES_PT,
        ciphertext: "3b3fd92eb72dad20333449f8e83cfb4a7789508d16918f03f53c52dac54ed825",
    },
    KnownAnswer {
        algorithm: "rijndael-128",
        mode: "ctr",
        key: AES_KEY,
        iv: Some(AES_CTR_IV),
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "874d6191b620e3261bef6864990db6ce",
    },
    KnownAnswer {
        algorithm: "idea",
        mode: "ecb",
        key: "0a0c0e10121416181a1c1e2022242628",
        iv: None,
        plaintext: "0001020304050607",
        ciphertext: "3223edc0f33ba078",
    },
    KnownAnswer {
        algorithm: "arcfour",
        mode: "stream",
        key: "4b6579",
        iv: None,
        plaintext: "506c61696e74657874",
        ciphertext: "bbf316e8d940af0ad3",
    },
    KnownAnswer {
        algorithm: "arcfour",
        mode: "stream",
        key: "57696b69",
        iv: None,
        plaintext: "7065646961",
        ciphertext: "1021bf0420",
    },
    KnownAnswer {
        algorithm: "arcfour",
        mode: "stream",
        key: "536563726574",
        iv: None,
        plaintext: "41747461636b206174206461776e",
        ciphertext: "45a01f645fc35b383552544b9bf5",
    },
];
