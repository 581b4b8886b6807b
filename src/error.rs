/// Represents either success(T) or a failure ([`OffloadError`])
pub type Result<T> = std::result::Result<T, OffloadError>;

/// Recoverable failures surfaced by the offload adapter.
///
/// Configuration mistakes (an algorithm name outside the closed, build-time
/// menu) and engine-internal key failures are deliberately not represented
/// here; both are programming defects and abort the process instead.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum OffloadError {
    /// the engine reported an authentication failure for an AEAD record
    #[error("Failed to authenticate record")]
    DecryptionFailure,

    /// one or more descriptors in a flushed batch did not complete
    #[error("{0} operations in the batch did not complete")]
    BatchIncomplete(usize),
}
