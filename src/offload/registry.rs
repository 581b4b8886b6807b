//! Static algorithm descriptor registry. The menu is closed at build time:
//! every descriptor carries its engine algorithm resolution, and looking up a
//! name outside the menu is a configuration defect, not a runtime error.

use crate::{
    offload::{aead, cipher},
    tls::{AeadAlgorithm, CipherAlgorithm, HashAlgorithm},
};
use sha2::{Digest, Sha256, Sha384};

pub static AES128_CTR: CipherAlgorithm = CipherAlgorithm {
    name: "AES128-CTR",
    key_size: 16,
    block_size: 1,
    iv_size: 16,
    setup: cipher::aes128ctr_setup,
};

pub static AES256_CTR: CipherAlgorithm = CipherAlgorithm {
    name: "AES256-CTR",
    key_size: 32,
    block_size: 1,
    iv_size: 16,
    setup: cipher::aes256ctr_setup,
};

pub static AES128_GCM: AeadAlgorithm = AeadAlgorithm {
    name: "AES128-GCM",
    ctr_cipher: &AES128_CTR,
    key_size: 16,
    iv_size: 12,
    tag_size: 16,
    setup: aead::aes128gcm_setup,
};

pub static AES256_GCM: AeadAlgorithm = AeadAlgorithm {
    name: "AES256-GCM",
    ctr_cipher: &AES256_CTR,
    key_size: 32,
    iv_size: 12,
    tag_size: 16,
    setup: aead::aes256gcm_setup,
};

pub static SHA256: HashAlgorithm = HashAlgorithm {
    name: "sha256",
    digest_size: 32,
    block_size: 64,
    digest: sha256_digest,
};

pub static SHA384: HashAlgorithm = HashAlgorithm {
    name: "sha384",
    digest_size: 48,
    block_size: 128,
    digest: sha384_digest,
};

fn sha256_digest(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data).to_vec()
}

fn sha384_digest(data: &[u8]) -> Vec<u8> {
    Sha384::digest(data).to_vec()
}

/// Looks up a cipher descriptor by its advertised name.
///
/// # Panics
/// On an unknown name; the algorithm menu is closed at build time.
pub fn cipher_by_name(name: &str) -> &'static CipherAlgorithm {
    match name {
        "AES128-CTR" => &AES128_CTR,
        "AES256-CTR" => &AES256_CTR,
        other => panic!("unknown cipher algorithm: {other}"),
    }
}

/// Looks up an AEAD descriptor by its advertised name.
///
/// # Panics
/// On an unknown name; the algorithm menu is closed at build time.
pub fn aead_by_name(name: &str) -> &'static AeadAlgorithm {
    match name {
        "AES128-GCM" => &AES128_GCM,
        "AES256-GCM" => &AES256_GCM,
        other => panic!("unknown AEAD algorithm: {other}"),
    }
}
