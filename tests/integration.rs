use pretty_assertions::assert_eq;
use rand::Rng;

use crypto_offload::{
    engine::CryptoEngine,
    offload::suites::{suite_by_id, CIPHER_SUITES, TLS_AES_256_GCM_SHA384},
    tls::CipherSuite,
};

fn protect_unprotect_1000_records(suite: &'static CipherSuite) {
    let mut engine = CryptoEngine::new();
    let key = vec![0x5au8; suite.aead.key_size];
    let mut sealer = suite.aead.setup_context(&mut engine, true, &key);
    let mut opener = suite.aead.setup_context(&mut engine, false, &key);

    let mut rng = rand::rng();
    for seq in 0..1000u64 {
        let len = rng.random_range(1..1200);
        let mut payload = vec![0u8; len];
        rng.fill(payload.as_mut_slice());

        let mut iv = [0u8; 12];
        iv[4..].copy_from_slice(&seq.to_be_bytes());
        let aad = seq.to_be_bytes();

        let mut sealed = vec![0u8; len + suite.aead.tag_size];
        let written = sealer.encrypt(&engine, &mut sealed, &payload, seq, &iv, &aad);
        assert_eq!(written, len + suite.aead.tag_size);

        let mut opened = vec![0u8; len];
        let read = opener
            .decrypt(&engine, &mut opened, &sealed, &iv, &aad)
            .unwrap();
        assert_eq!(read, len);
        assert_eq!(opened, payload);
    }

    sealer.dispose(&mut engine);
    opener.dispose(&mut engine);
    assert_eq!(engine.installed_keys(), 0);
}

#[test]
fn protect_records_with_strongest_suite() {
    protect_unprotect_1000_records(CIPHER_SUITES[0]);
}

#[test]
fn protect_records_with_fallback_suite() {
    protect_unprotect_1000_records(CIPHER_SUITES[1]);
}

#[test]
fn negotiated_suite_resolves_to_working_contexts() {
    let suite = suite_by_id(TLS_AES_256_GCM_SHA384).unwrap();
    protect_unprotect_1000_records(suite);
}

// The companion CTR cipher derives header-protection masks from a ciphertext
// sample used as the IV; the mask must be stable for a given key and sample.
#[test]
fn header_protection_mask_is_deterministic() {
    let suite = CIPHER_SUITES[0];
    let hp_alg = suite.aead.ctr_cipher;
    let key = vec![0x21u8; hp_alg.key_size];
    let sample = [0xaau8; 16];

    let mask_once = || {
        let mut engine = CryptoEngine::new();
        let mut hp = hp_alg.setup_context(&mut engine, true, &key);
        hp.init(&sample);
        let mut mask = [0u8; 5];
        hp.transform(&engine, &mut mask, &[0u8; 5]);
        hp.dispose(&mut engine);
        mask
    };

    assert_eq!(mask_once(), mask_once());
    assert_ne!(mask_once(), [0u8; 5]);
}
