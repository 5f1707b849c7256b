//======================================================================
// src/keyed.rs
// Xoodyak keyed mode: AEAD 구성요소, squeeze_key, ratchet.
//======================================================================

use crate::consts::KEYED_ABSORB_RATE;
use crate::duplex::{Direction, Duplex, Flag, Mode};
use crate::error::Error;
use tracing::trace;
use zeroize::Zeroize;

/// A Xoodyak session in keyed mode.
///
/// A typical AEAD transcript is `absorb(nonce)`, `absorb(ad)`,
/// `encrypt(plaintext)`, then `squeeze(16)` for the tag. Clone a session to
/// fork an encryptor and a decryptor from the same authenticated prefix.
#[derive(Clone)]
pub struct KeyedXoodyak {
    duplex: Duplex,
}

impl KeyedXoodyak {
    /// Starts a keyed session.
    ///
    /// # Panics
    ///
    /// If `key` is empty or longer than 43 bytes.
    pub fn new(key: &[u8]) -> Self {
        Self::with_id_and_counter(key, &[], &[])
    }

    /// Starts a keyed session with a key identifier.
    ///
    /// # Panics
    ///
    /// If `key` is empty or `key.len() + id.len() + 1 > 44`.
    pub fn with_id(key: &[u8], id: &[u8]) -> Self {
        Self::with_id_and_counter(key, id, &[])
    }

    /// Starts a keyed session diversified by `counter`.
    ///
    /// # Panics
    ///
    /// If `key` is empty or longer than 43 bytes.
    pub fn with_counter(key: &[u8], counter: &[u8]) -> Self {
        Self::with_id_and_counter(key, &[], counter)
    }

    /// # Panics
    ///
    /// If `key` is empty or `key.len() + id.len() + 1 > 44`.
    pub fn with_id_and_counter(key: &[u8], id: &[u8], counter: &[u8]) -> Self {
        match Self::try_new(key, id, counter) {
            Ok(session) => session,
            Err(err) => panic!("invalid keyed session parameters: {err}"),
        }
    }

    /// Fallible constructor behind [`new`](Self::new) and friends.
    ///
    /// Absorbs `key ‖ id ‖ len(id)` as one block, then the counter (if any)
    /// one byte per permutation.
    pub fn try_new(key: &[u8], id: &[u8], counter: &[u8]) -> Result<Self, Error> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        let len = key.len() + id.len() + 1;
        if len > KEYED_ABSORB_RATE {
            return Err(Error::too_long(len));
        }

        let mut duplex = Duplex::new(Mode::Keyed);

        let mut buffer = [0u8; KEYED_ABSORB_RATE];
        buffer[..key.len()].copy_from_slice(key);
        buffer[key.len()..len - 1].copy_from_slice(id);
        buffer[len - 1] = id.len() as u8;
        duplex.absorb_any(&buffer[..len], KEYED_ABSORB_RATE, Flag::AbsorbKey);
        buffer.zeroize();

        if !counter.is_empty() {
            duplex.absorb_counter(counter);
        }

        trace!(
            key_len = key.len(),
            id_len = id.len(),
            counter_len = counter.len(),
            "keyed session initialised"
        );
        Ok(Self { duplex })
    }

    /// Absorbs `data` as one input (nonce, associated data, ...).
    pub fn absorb(&mut self, data: &[u8]) {
        self.duplex.absorb(data);
    }

    pub fn encrypt(&mut self, plaintext: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(plaintext.len());
        self.encrypt_to(plaintext, &mut out);
        out
    }

    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(ciphertext.len());
        self.decrypt_to(ciphertext, &mut out);
        out
    }

    /// Appends the encryption of `plaintext` to `out`.
    pub fn encrypt_to(&mut self, plaintext: &[u8], out: &mut Vec<u8>) {
        let start = out.len();
        out.extend_from_slice(plaintext);
        self.duplex.crypt(&mut out[start..], Direction::Encrypt);
    }

    /// Appends the decryption of `ciphertext` to `out`.
    pub fn decrypt_to(&mut self, ciphertext: &[u8], out: &mut Vec<u8>) {
        let start = out.len();
        out.extend_from_slice(ciphertext);
        self.duplex.crypt(&mut out[start..], Direction::Decrypt);
    }

    pub fn encrypt_in_place(&mut self, buffer: &mut [u8]) {
        self.duplex.crypt(buffer, Direction::Encrypt);
    }

    pub fn decrypt_in_place(&mut self, buffer: &mut [u8]) {
        self.duplex.crypt(buffer, Direction::Decrypt);
    }

    /// Squeezes `count` bytes, e.g. an authentication tag.
    pub fn squeeze(&mut self, count: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(count);
        self.squeeze_to(&mut out, count);
        out
    }

    pub fn squeeze_to(&mut self, out: &mut Vec<u8>, count: usize) {
        self.duplex.squeeze_to(out, count, Flag::Squeeze);
    }

    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        self.duplex.squeeze_any(out, Flag::Squeeze);
    }

    /// Squeezes `count` bytes of derived key material.
    ///
    /// Uses its own domain flag, so the output never equals [`squeeze`](Self::squeeze).
    pub fn squeeze_key(&mut self, count: usize) -> Vec<u8> {
        let mut out = vec![0u8; count];
        self.duplex.squeeze_key(&mut out);
        out
    }

    pub fn squeeze_key_into(&mut self, out: &mut [u8]) {
        self.duplex.squeeze_key(out);
    }

    /// Makes earlier states unrecoverable from the current one.
    pub fn ratchet(&mut self) {
        self.duplex.ratchet();
        trace!("keyed session ratcheted");
    }

    #[cfg(test)]
    pub(crate) fn duplex(&self) -> &Duplex {
        &self.duplex
    }
}
