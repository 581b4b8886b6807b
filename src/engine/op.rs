//! Operation descriptors and the accumulate-then-flush batch around them.

use crate::{
    engine::{CryptoEngine, KeyIndex},
    error::{OffloadError, Result},
};

/// Algorithm families understood by the engine's key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoAlg {
    Aes128Ctr,
    Aes256Ctr,
    Aes128Gcm,
    Aes256Gcm,
}

impl CryptoAlg {
    pub const fn key_size(self) -> usize {
        match self {
            Self::Aes128Ctr | Self::Aes128Gcm => 16,
            Self::Aes256Ctr | Self::Aes256Gcm => 32,
        }
    }

    pub const fn iv_size(self) -> usize {
        match self {
            Self::Aes128Ctr | Self::Aes256Ctr => 16,
            Self::Aes128Gcm | Self::Aes256Gcm => 12,
        }
    }
}

/// Operation identifiers. Adapters resolve their algorithm to these once at
/// setup; the hot path never compares strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpId {
    Aes128CtrEnc,
    Aes256CtrEnc,
    Aes128GcmEnc,
    Aes128GcmDec,
    Aes256GcmEnc,
    Aes256GcmDec,
}

impl OpId {
    pub const fn alg(self) -> CryptoAlg {
        match self {
            Self::Aes128CtrEnc => CryptoAlg::Aes128Ctr,
            Self::Aes256CtrEnc => CryptoAlg::Aes256Ctr,
            Self::Aes128GcmEnc | Self::Aes128GcmDec => CryptoAlg::Aes128Gcm,
            Self::Aes256GcmEnc | Self::Aes256GcmDec => CryptoAlg::Aes256Gcm,
        }
    }
}

/// Per-op result, filled by the engine during processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpStatus {
    #[default]
    Pending,
    Completed,
    AuthFailed,
}

/// Where the authentication tag lives for an operation: produced into the
/// destination on encrypt, verified from the source on decrypt, absent for
/// plain cipher transforms.
#[derive(Debug)]
pub enum TagSlot<'a> {
    None,
    Produce(&'a mut [u8]),
    Verify(&'a [u8]),
}

/// One unit of work for the engine. A transient stack record, fully rebuilt
/// per call; lengths travel with the slices. `src` and `dst` are separate
/// borrows, the backend copies source into destination before operating so
/// callers never have to alias buffers.
#[derive(Debug)]
pub struct OpDescriptor<'a> {
    pub op: OpId,
    pub key_index: KeyIndex,
    pub iv: &'a [u8],
    pub aad: &'a [u8],
    pub src: &'a [u8],
    pub dst: &'a mut [u8],
    pub tag: TagSlot<'a>,
    pub status: OpStatus,
}

/// Descriptor batch for callers that have several records ready in one
/// processing pass: accumulate with [`push`](Self::push), then submit the
/// whole vector once with [`flush`](Self::flush).
#[derive(Debug, Default)]
pub struct OpBatch<'a> {
    ops: Vec<OpDescriptor<'a>>,
}

impl<'a> OpBatch<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ops: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, op: OpDescriptor<'a>) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Submits all accumulated descriptors as a single bulk vector and clears
    /// the batch.
    ///
    /// # Errors
    /// [`OffloadError::BatchIncomplete`] when any descriptor did not complete,
    /// carrying the number of failed operations.
    ///
    /// # Panics
    /// Propagates the fatal conditions of [`CryptoEngine::process_ops`].
    pub fn flush(&mut self, engine: &CryptoEngine) -> Result<()> {
        engine.process_ops(&mut self.ops);
        let failed = self
            .ops
            .iter()
            .filter(|op| op.status != OpStatus::Completed)
            .count();
        self.ops.clear();
        if failed == 0 {
            Ok(())
        } else {
            log::debug!("batch flush left {failed} operations incomplete");
            Err(OffloadError::BatchIncomplete(failed))
        }
    }
}
