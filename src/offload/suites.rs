//! Cipher-suite table consumed by handshake negotiation: ordered strongest
//! first, read-only.

use crate::{offload::registry, tls::CipherSuite};

pub const TLS_AES_128_GCM_SHA256: u16 = 0x1301;
pub const TLS_AES_256_GCM_SHA384: u16 = 0x1302;

pub static AES256_GCM_SHA384: CipherSuite = CipherSuite {
    id: TLS_AES_256_GCM_SHA384,
    aead: &registry::AES256_GCM,
    hash: &registry::SHA384,
};

pub static AES128_GCM_SHA256: CipherSuite = CipherSuite {
    id: TLS_AES_128_GCM_SHA256,
    aead: &registry::AES128_GCM,
    hash: &registry::SHA256,
};

/// Suites offered to the transport-security library, strongest first.
pub static CIPHER_SUITES: [&CipherSuite; 2] = [&AES256_GCM_SHA384, &AES128_GCM_SHA256];

/// Finds an offered suite by its TLS suite id.
pub fn suite_by_id(id: u16) -> Option<&'static CipherSuite> {
    CIPHER_SUITES.iter().copied().find(|suite| suite.id == id)
}
