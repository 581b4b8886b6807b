//! Batched crypto engine: a key table plus synchronous, in-place processing of
//! operation descriptors. Software execution lives in [`sw`]; a hardware
//! backend would plug in at the same descriptor boundary.

mod op;
mod sw;

pub use op::{CryptoAlg, OpBatch, OpDescriptor, OpId, OpStatus, TagSlot};

/// Opaque handle identifying key material installed in the engine's key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyIndex(u32);

#[derive(Debug)]
struct KeySlot {
    alg: CryptoAlg,
    material: Vec<u8>,
}

/// The engine owning the key table. Handed explicitly to every adapter call;
/// `&mut` receivers on the key operations make exclusive access a compile-time
/// requirement rather than a runtime convention.
#[derive(Debug, Default)]
pub struct CryptoEngine {
    keys: Vec<Option<KeySlot>>,
}

impl CryptoEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs raw key material for the given algorithm family and returns
    /// its index. Identical material is never deduplicated; every installation
    /// yields a fresh index.
    ///
    /// # Panics
    /// When the material length does not match the algorithm's key size. Key
    /// installation is assumed to succeed; a shape violation is a defect in
    /// the caller, not a runtime condition.
    pub fn key_add(&mut self, alg: CryptoAlg, material: &[u8]) -> KeyIndex {
        assert_eq!(
            material.len(),
            alg.key_size(),
            "{alg:?} key must be {} bytes",
            alg.key_size()
        );
        let index = KeyIndex(self.keys.len() as u32);
        self.keys.push(Some(KeySlot {
            alg,
            material: material.to_vec(),
        }));
        log::debug!("installed {alg:?} key at index {}", index.0);
        index
    }

    /// Retires a key slot. The index is tombstoned and never reassigned, so a
    /// stale descriptor can only hit a hole, not somebody else's key.
    pub fn key_del(&mut self, index: KeyIndex) {
        if let Some(slot) = self.keys.get_mut(index.0 as usize) {
            *slot = None;
            log::debug!("released key index {}", index.0);
        }
    }

    /// Number of currently installed (non-retired) keys.
    pub fn installed_keys(&self) -> usize {
        self.keys.iter().flatten().count()
    }

    /// Processes every descriptor in the slice synchronously, filling results
    /// and per-op status in place. The slice is the bulk vector: callers with
    /// several records ready submit them in one pass (see [`OpBatch`]).
    ///
    /// # Panics
    /// When a descriptor references a retired or never-installed key index, or
    /// when its op id does not match the installed key's algorithm family.
    pub fn process_ops(&self, ops: &mut [OpDescriptor<'_>]) {
        for op in ops.iter_mut() {
            let key = self.key(op.key_index);
            assert_eq!(
                op.op.alg(),
                key.alg,
                "descriptor op family does not match installed key"
            );
            sw::process_one(&key.material, op);
        }
    }

    fn key(&self, index: KeyIndex) -> &KeySlot {
        self.keys
            .get(index.0 as usize)
            .and_then(Option::as_ref)
            .unwrap_or_else(|| panic!("no key installed at index {}", index.0))
    }
}
