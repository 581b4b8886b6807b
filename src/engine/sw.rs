//! Software backend: executes one descriptor with the RustCrypto crates.
//! Key and IV shape violations are engine-internal defects and abort; only
//! AEAD authentication failure is reported through the descriptor status.

use aes_gcm::{
    aes::{Aes128, Aes256},
    AeadInPlace, Aes128Gcm, Aes256Gcm, KeyInit,
};
use cipher::{generic_array::GenericArray, KeyIvInit, StreamCipher};
use ctr::Ctr128BE;

use super::op::{OpDescriptor, OpId, OpStatus, TagSlot};

pub(super) fn process_one(material: &[u8], op: &mut OpDescriptor<'_>) {
    debug_assert_eq!(op.iv.len(), op.op.alg().iv_size());
    match op.op {
        OpId::Aes128CtrEnc => ctr_transform::<Ctr128BE<Aes128>>(material, op),
        OpId::Aes256CtrEnc => ctr_transform::<Ctr128BE<Aes256>>(material, op),
        OpId::Aes128GcmEnc => gcm_encrypt::<Aes128Gcm>(material, op),
        OpId::Aes256GcmEnc => gcm_encrypt::<Aes256Gcm>(material, op),
        OpId::Aes128GcmDec => gcm_decrypt::<Aes128Gcm>(material, op),
        OpId::Aes256GcmDec => gcm_decrypt::<Aes256Gcm>(material, op),
    }
}

fn ctr_transform<C>(material: &[u8], op: &mut OpDescriptor<'_>)
where
    C: KeyIvInit + StreamCipher,
{
    let len = op.src.len();
    op.dst[..len].copy_from_slice(op.src);
    let mut ctr = C::new_from_slices(material, op.iv).expect("Invalid key or IV length");
    ctr.apply_keystream(&mut op.dst[..len]);
    op.status = OpStatus::Completed;
}

fn gcm_encrypt<A>(material: &[u8], op: &mut OpDescriptor<'_>)
where
    A: KeyInit + AeadInPlace,
{
    let len = op.src.len();
    op.dst[..len].copy_from_slice(op.src);
    let gcm = A::new_from_slice(material).expect("Invalid key length");
    let tag = gcm
        .encrypt_in_place_detached(GenericArray::from_slice(op.iv), op.aad, &mut op.dst[..len])
        .expect("Invalid encrypt descriptor");
    match &mut op.tag {
        TagSlot::Produce(out) => out.copy_from_slice(tag.as_slice()),
        _ => panic!("encrypt descriptor without a tag destination"),
    }
    op.status = OpStatus::Completed;
}

fn gcm_decrypt<A>(material: &[u8], op: &mut OpDescriptor<'_>)
where
    A: KeyInit + AeadInPlace,
{
    let tag = match &op.tag {
        TagSlot::Verify(tag) => *tag,
        _ => panic!("decrypt descriptor without a tag source"),
    };
    let len = op.src.len();
    op.dst[..len].copy_from_slice(op.src);
    let gcm = A::new_from_slice(material).expect("Invalid key length");
    match gcm.decrypt_in_place_detached(
        GenericArray::from_slice(op.iv),
        op.aad,
        &mut op.dst[..len],
        GenericArray::from_slice(tag),
    ) {
        Ok(()) => op.status = OpStatus::Completed,
        Err(err) => {
            log::debug!("Decryption failed: {err}");
            op.status = OpStatus::AuthFailed;
        }
    }
}
