//! The pluggable callback contract expected by the transport-security library.
//!
//! The library negotiates a cipher suite, calls the selected algorithm's setup
//! entry point with the freshly derived traffic secret, and from then on drives
//! the returned context record by record. Algorithm descriptors are static and
//! closed; the library only ever reads them.

use crate::{engine::CryptoEngine, error::Result};

/// Stream-cipher context, e.g. for header protection. One per direction and
/// epoch; `init` binds the IV, each `transform` is a one-shot keystream
/// application over `input`.
pub trait CipherContext {
    fn init(&mut self, iv: &[u8]);

    /// Applies the keystream to `input`, writing the result into `output`.
    /// `output` must hold at least `input.len()` bytes; the result is
    /// available when the call returns.
    fn transform(&mut self, engine: &CryptoEngine, output: &mut [u8], input: &[u8]);

    /// Tears the context down and releases its key from the engine.
    fn dispose(self: Box<Self>, engine: &mut CryptoEngine);
}

/// AEAD context protecting record payloads. One per direction and epoch.
pub trait AeadContext {
    /// Seals `input`, placing ciphertext and then the authentication tag into
    /// `output` (which must hold `input.len() + tag_size` bytes). Returns the
    /// number of bytes written. `seq` is part of the contract but unused: the
    /// engine is handed the explicit per-record IV instead.
    fn encrypt(
        &mut self,
        engine: &CryptoEngine,
        output: &mut [u8],
        input: &[u8],
        seq: u64,
        iv: &[u8],
        aad: &[u8],
    ) -> usize;

    /// Opens `input` (ciphertext followed by the tag), writing
    /// `input.len() - tag_size` plaintext bytes into `output` and returning
    /// that length.
    ///
    /// # Errors
    /// [`crate::OffloadError::DecryptionFailure`] when the engine reports an
    /// authentication failure or the input is shorter than the tag.
    fn decrypt(
        &mut self,
        engine: &CryptoEngine,
        output: &mut [u8],
        input: &[u8],
        iv: &[u8],
        aad: &[u8],
    ) -> Result<usize>;

    /// Tears the context down and releases its key from the engine.
    fn dispose(self: Box<Self>, engine: &mut CryptoEngine);
}

pub type CipherSetupFn =
    fn(&'static CipherAlgorithm, &mut CryptoEngine, bool, &[u8]) -> Box<dyn CipherContext>;

pub type AeadSetupFn =
    fn(&'static AeadAlgorithm, &mut CryptoEngine, bool, &[u8]) -> Box<dyn AeadContext>;

/// Static descriptor of a stream cipher: capability advertisement plus the
/// setup entry point that installs a key and wires up a context.
#[derive(Debug, Clone, Copy)]
pub struct CipherAlgorithm {
    pub name: &'static str,
    pub key_size: usize,
    pub block_size: usize,
    pub iv_size: usize,
    pub setup: CipherSetupFn,
}

impl CipherAlgorithm {
    /// Installs `key` into the engine and returns a wired-up cipher context.
    ///
    /// # Panics
    /// Key installation is fatal on a key of the wrong size.
    pub fn setup_context(
        &'static self,
        engine: &mut CryptoEngine,
        is_encrypt: bool,
        key: &[u8],
    ) -> Box<dyn CipherContext> {
        (self.setup)(self, engine, is_encrypt, key)
    }
}

/// Static descriptor of an AEAD algorithm. `ctr_cipher` is the companion
/// stream cipher the library uses for header protection alongside this AEAD.
#[derive(Debug, Clone, Copy)]
pub struct AeadAlgorithm {
    pub name: &'static str,
    pub ctr_cipher: &'static CipherAlgorithm,
    pub key_size: usize,
    pub iv_size: usize,
    pub tag_size: usize,
    pub setup: AeadSetupFn,
}

impl AeadAlgorithm {
    /// Installs `key` into the engine and returns a wired-up AEAD context.
    ///
    /// # Panics
    /// Key installation is fatal on a key of the wrong size.
    pub fn setup_context(
        &'static self,
        engine: &mut CryptoEngine,
        is_encrypt: bool,
        key: &[u8],
    ) -> Box<dyn AeadContext> {
        (self.setup)(self, engine, is_encrypt, key)
    }
}

/// Hash identity composed into cipher suites; the digest fn backs the
/// library's transcript and key-schedule hashing.
#[derive(Debug, Clone, Copy)]
pub struct HashAlgorithm {
    pub name: &'static str,
    pub digest_size: usize,
    pub block_size: usize,
    pub digest: fn(&[u8]) -> Vec<u8>,
}

/// Negotiable combination of an AEAD and a hash, identified by its TLS suite
/// id.
#[derive(Debug, Clone, Copy)]
pub struct CipherSuite {
    pub id: u16,
    pub aead: &'static AeadAlgorithm,
    pub hash: &'static HashAlgorithm,
}
