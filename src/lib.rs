//! # crypto-offload
//! Offload adapter for a secure transport's handshake and record protection.
//! The embedded transport-security library delegates bulk cryptography through
//! pluggable cipher/AEAD callback tables; this crate implements those tables on
//! top of a centralized, batched crypto engine that addresses key material
//! through opaque key indices and processes key-indexed operation descriptors.
//!
//! - [`tls`] carries the callback contract and algorithm/suite descriptors
//!   consumed by the transport-security library.
//! - [`engine`] is the batched engine: key table, operation descriptors and
//!   the software backend executing them.
//! - [`offload`] wires the two together: context adapters, the algorithm
//!   registry and the cipher-suite table.
//!
//! The engine handle is passed explicitly through every call; there is no
//! process-wide crypto state.

#![deny(clippy::missing_panics_doc)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![warn(
    clippy::doc_markdown,
    clippy::semicolon_if_nothing_returned,
    clippy::single_match_else,
    clippy::inconsistent_struct_constructor,
    clippy::map_unwrap_or,
    clippy::match_same_arms
)]

pub mod engine;
/// error definitions
pub mod error;
pub mod offload;
/// callback contract toward the transport-security library
pub mod tls;

pub use engine::CryptoEngine;
pub use error::OffloadError;
pub use offload::{setup_aead, setup_cipher};
