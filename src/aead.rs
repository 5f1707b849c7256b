//======================================================================
// src/aead.rs
// Xoodyak AEAD (RustCrypto `aead` traits).
//
// Transcript: KeyedXoodyak(key), absorb(nonce), absorb(ad), crypt(msg),
// squeeze(16) as the tag.
//======================================================================

use crate::keyed::KeyedXoodyak;
use aead::{
    consts::{U0, U16},
    AeadCore, AeadInPlace, Key, KeyInit, KeySizeUser, Nonce, Tag,
};
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroize;

/// Xoodyak AEAD cipher with a 128-bit key, nonce and tag.
#[derive(Clone)]
pub struct XoodyakAead {
    /// Session right after key absorption, cloned per message.
    initial: KeyedXoodyak,
}

impl XoodyakAead {
    fn session(&self, nonce: &Nonce<Self>, associated_data: &[u8]) -> KeyedXoodyak {
        let mut session = self.initial.clone();
        session.absorb(nonce);
        session.absorb(associated_data);
        session
    }
}

impl KeySizeUser for XoodyakAead {
    type KeySize = U16;
}

impl KeyInit for XoodyakAead {
    fn new(key: &Key<Self>) -> Self {
        Self { initial: KeyedXoodyak::new(key) }
    }
}

impl AeadCore for XoodyakAead {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl AeadInPlace for XoodyakAead {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        let mut session = self.session(nonce, associated_data);
        session.encrypt_in_place(buffer);

        let mut tag = Tag::<Self>::default();
        session.squeeze_into(&mut tag);
        Ok(tag)
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        let mut session = self.session(nonce, associated_data);
        session.decrypt_in_place(buffer);

        let mut expected = Tag::<Self>::default();
        session.squeeze_into(&mut expected);
        let valid: bool = expected.as_slice().ct_eq(tag.as_slice()).into();
        expected.as_mut_slice().zeroize();

        if valid {
            Ok(())
        } else {
            debug!(len = buffer.len(), "xoodyak tag mismatch");
            // Never release unauthenticated plaintext.
            buffer.zeroize();
            Err(aead::Error)
        }
    }
}
