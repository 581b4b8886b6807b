//! AEAD context adapter: one descriptor per encrypt/decrypt call, tag placed
//! behind the ciphertext.

use crate::{
    engine::{CryptoAlg, CryptoEngine, KeyIndex, OpDescriptor, OpId, OpStatus, TagSlot},
    error::{OffloadError, Result},
    tls::{AeadAlgorithm, AeadContext},
};

struct OffloadAeadContext {
    enc_op: OpId,
    dec_op: OpId,
    key_index: KeyIndex,
    tag_size: usize,
}

pub(crate) fn aes128gcm_setup(
    alg: &'static AeadAlgorithm,
    engine: &mut CryptoEngine,
    is_encrypt: bool,
    key: &[u8],
) -> Box<dyn AeadContext> {
    setup(
        alg,
        CryptoAlg::Aes128Gcm,
        OpId::Aes128GcmEnc,
        OpId::Aes128GcmDec,
        engine,
        is_encrypt,
        key,
    )
}

pub(crate) fn aes256gcm_setup(
    alg: &'static AeadAlgorithm,
    engine: &mut CryptoEngine,
    is_encrypt: bool,
    key: &[u8],
) -> Box<dyn AeadContext> {
    setup(
        alg,
        CryptoAlg::Aes256Gcm,
        OpId::Aes256GcmEnc,
        OpId::Aes256GcmDec,
        engine,
        is_encrypt,
        key,
    )
}

// Installed keys serve both directions; `is_encrypt` is part of the setup
// contract but both op ids are wired regardless.
fn setup(
    alg: &'static AeadAlgorithm,
    crypto_alg: CryptoAlg,
    enc_op: OpId,
    dec_op: OpId,
    engine: &mut CryptoEngine,
    _is_encrypt: bool,
    key: &[u8],
) -> Box<dyn AeadContext> {
    log::debug!("setting up {} AEAD context", alg.name);
    let key_index = engine.key_add(crypto_alg, key);
    Box::new(OffloadAeadContext {
        enc_op,
        dec_op,
        key_index,
        tag_size: alg.tag_size,
    })
}

impl AeadContext for OffloadAeadContext {
    fn encrypt(
        &mut self,
        engine: &CryptoEngine,
        output: &mut [u8],
        input: &[u8],
        _seq: u64,
        iv: &[u8],
        aad: &[u8],
    ) -> usize {
        let len = input.len();
        let (dst, tag) = output[..len + self.tag_size].split_at_mut(len);
        let mut op = OpDescriptor {
            op: self.enc_op,
            key_index: self.key_index,
            iv,
            aad,
            src: input,
            dst,
            tag: TagSlot::Produce(tag),
            status: OpStatus::Pending,
        };
        engine.process_ops(std::slice::from_mut(&mut op));
        debug_assert_eq!(op.status, OpStatus::Completed);
        len + self.tag_size
    }

    fn decrypt(
        &mut self,
        engine: &CryptoEngine,
        output: &mut [u8],
        input: &[u8],
        iv: &[u8],
        aad: &[u8],
    ) -> Result<usize> {
        if input.len() < self.tag_size {
            log::debug!("AEAD input shorter than the authentication tag");
            return Err(OffloadError::DecryptionFailure);
        }
        let len = input.len() - self.tag_size;
        let (src, tag) = input.split_at(len);
        let mut op = OpDescriptor {
            op: self.dec_op,
            key_index: self.key_index,
            iv,
            aad,
            src,
            dst: &mut output[..len],
            tag: TagSlot::Verify(tag),
            status: OpStatus::Pending,
        };
        engine.process_ops(std::slice::from_mut(&mut op));
        if op.status == OpStatus::Completed {
            Ok(len)
        } else {
            Err(OffloadError::DecryptionFailure)
        }
    }

    fn dispose(self: Box<Self>, engine: &mut CryptoEngine) {
        engine.key_del(self.key_index);
    }
}

#[cfg(test)]
mod test {
    use crate::{engine::CryptoEngine, error::OffloadError, offload::setup_aead};
    use pretty_assertions::assert_eq;
    use rand::Rng;
    use test_case::test_case;

    const TAG_SIZE: usize = 16;

    #[test_case("AES128-GCM", 16; "Aes128Gcm")]
    #[test_case("AES256-GCM", 32; "Aes256Gcm")]
    fn round_trip_random_record(name: &str, key_size: usize) {
        let mut engine = CryptoEngine::new();
        let mut ctx = setup_aead(name, &mut engine, true, &vec![0x42u8; key_size]);

        let mut payload = vec![0u8; 128];
        rand::rng().fill(payload.as_mut_slice());
        let iv = [9u8; 12];
        let aad = b"record header";

        let mut sealed = vec![0u8; payload.len() + TAG_SIZE];
        let written = ctx.encrypt(&engine, &mut sealed, &payload, 0, &iv, aad);
        assert_eq!(written, payload.len() + TAG_SIZE);

        let mut opened = vec![0u8; payload.len()];
        let read = ctx.decrypt(&engine, &mut opened, &sealed, &iv, aad).unwrap();
        assert_eq!(read, payload.len());
        assert_eq!(opened, payload);
    }

    #[test]
    fn hello_seals_to_21_bytes() {
        let mut engine = CryptoEngine::new();
        let mut ctx = setup_aead("AES128-GCM", &mut engine, true, &[0u8; 16]);
        let iv = [0u8; 12];

        let mut sealed = [0u8; 5 + TAG_SIZE];
        let written = ctx.encrypt(&engine, &mut sealed, b"hello", 0, &iv, b"");
        assert_eq!(written, 21);

        let mut opened = [0u8; 5];
        let read = ctx.decrypt(&engine, &mut opened, &sealed, &iv, b"").unwrap();
        assert_eq!(read, 5);
        assert_eq!(&opened, b"hello");
    }

    #[test]
    fn tampered_tag_fails_decryption() {
        let mut engine = CryptoEngine::new();
        let mut ctx = setup_aead("AES256-GCM", &mut engine, true, &[0x24u8; 32]);
        let iv = [3u8; 12];

        let mut sealed = vec![0u8; 32 + TAG_SIZE];
        ctx.encrypt(&engine, &mut sealed, &[0x55u8; 32], 0, &iv, b"aad");
        *sealed.last_mut().unwrap() ^= 0x80;

        let mut opened = [0u8; 32];
        assert_eq!(
            ctx.decrypt(&engine, &mut opened, &sealed, &iv, b"aad"),
            Err(OffloadError::DecryptionFailure)
        );
    }

    #[test]
    fn input_shorter_than_tag_fails_decryption() {
        let mut engine = CryptoEngine::new();
        let mut ctx = setup_aead("AES128-GCM", &mut engine, true, &[0u8; 16]);
        let mut opened = [0u8; 0];
        assert_eq!(
            ctx.decrypt(&engine, &mut opened, &[0u8; 7], &[0u8; 12], b""),
            Err(OffloadError::DecryptionFailure)
        );
    }

    #[test]
    fn dispose_releases_the_key() {
        let mut engine = CryptoEngine::new();
        let ctx = setup_aead("AES128-GCM", &mut engine, true, &[0u8; 16]);
        assert_eq!(engine.installed_keys(), 1);
        ctx.dispose(&mut engine);
        assert_eq!(engine.installed_keys(), 0);
    }

    #[test]
    #[should_panic(expected = "unknown AEAD algorithm")]
    fn unknown_aead_name_is_fatal() {
        let mut engine = CryptoEngine::new();
        setup_aead("CHACHA20-POLY1305", &mut engine, true, &[0u8; 32]);
    }
}
