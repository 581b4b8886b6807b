//! The offload implementation of the [`crate::tls`] contract: context
//! adapters submitting operation descriptors to the engine, the static
//! algorithm registry and the cipher-suite table.

pub mod aead;
pub mod cipher;
pub mod registry;
pub mod suites;

use crate::{
    engine::CryptoEngine,
    tls::{AeadContext, CipherContext},
};

/// Resolves `name` in the registry and sets up a cipher context over `engine`.
///
/// # Panics
/// On a name outside the closed algorithm menu (configuration defect).
pub fn setup_cipher(
    name: &str,
    engine: &mut CryptoEngine,
    is_encrypt: bool,
    key: &[u8],
) -> Box<dyn CipherContext> {
    registry::cipher_by_name(name).setup_context(engine, is_encrypt, key)
}

/// Resolves `name` in the registry and sets up an AEAD context over `engine`.
///
/// # Panics
/// On a name outside the closed algorithm menu (configuration defect).
pub fn setup_aead(
    name: &str,
    engine: &mut CryptoEngine,
    is_encrypt: bool,
    key: &[u8],
) -> Box<dyn AeadContext> {
    registry::aead_by_name(name).setup_context(engine, is_encrypt, key)
}
