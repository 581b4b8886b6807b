//! Cipher context adapter: one encrypt descriptor per transform call.

use crate::{
    engine::{CryptoAlg, CryptoEngine, KeyIndex, OpDescriptor, OpId, OpStatus, TagSlot},
    tls::{CipherAlgorithm, CipherContext},
};

const MAX_IV_SIZE: usize = 16;

struct OffloadCipherContext {
    op_id: OpId,
    key_index: KeyIndex,
    iv: [u8; MAX_IV_SIZE],
    iv_size: usize,
}

pub(crate) fn aes128ctr_setup(
    alg: &'static CipherAlgorithm,
    engine: &mut CryptoEngine,
    is_encrypt: bool,
    key: &[u8],
) -> Box<dyn CipherContext> {
    setup(
        alg,
        CryptoAlg::Aes128Ctr,
        OpId::Aes128CtrEnc,
        engine,
        is_encrypt,
        key,
    )
}

pub(crate) fn aes256ctr_setup(
    alg: &'static CipherAlgorithm,
    engine: &mut CryptoEngine,
    is_encrypt: bool,
    key: &[u8],
) -> Box<dyn CipherContext> {
    setup(
        alg,
        CryptoAlg::Aes256Ctr,
        OpId::Aes256CtrEnc,
        engine,
        is_encrypt,
        key,
    )
}

// CTR is its own inverse, so decrypt contexts use the encrypt op id as well.
fn setup(
    alg: &'static CipherAlgorithm,
    crypto_alg: CryptoAlg,
    op_id: OpId,
    engine: &mut CryptoEngine,
    _is_encrypt: bool,
    key: &[u8],
) -> Box<dyn CipherContext> {
    log::debug!("setting up {} cipher context", alg.name);
    let key_index = engine.key_add(crypto_alg, key);
    Box::new(OffloadCipherContext {
        op_id,
        key_index,
        iv: [0u8; MAX_IV_SIZE],
        iv_size: alg.iv_size,
    })
}

impl CipherContext for OffloadCipherContext {
    fn init(&mut self, iv: &[u8]) {
        assert_eq!(iv.len(), self.iv_size, "IV size mismatch for cipher init");
        self.iv[..iv.len()].copy_from_slice(iv);
    }

    fn transform(&mut self, engine: &CryptoEngine, output: &mut [u8], input: &[u8]) {
        let mut op = OpDescriptor {
            op: self.op_id,
            key_index: self.key_index,
            iv: &self.iv[..self.iv_size],
            aad: &[],
            src: input,
            dst: &mut output[..input.len()],
            tag: TagSlot::None,
            status: OpStatus::Pending,
        };
        engine.process_ops(std::slice::from_mut(&mut op));
        debug_assert_eq!(op.status, OpStatus::Completed);
    }

    fn dispose(self: Box<Self>, engine: &mut CryptoEngine) {
        engine.key_del(self.key_index);
    }
}
