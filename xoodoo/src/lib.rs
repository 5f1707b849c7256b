//======================================================================
// xoodoo/src/lib.rs
// Xoodoo[12] 순열 크레이트의 진입점.
//======================================================================
//! The Xoodoo[12] permutation.
//!
//! The 384-bit state is stored as 48 bytes and viewed as three planes
//! (A, B, C) of four little-endian 32-bit lanes. [`Xoodoo::permute`] runs the
//! twelve-round permutation through the backend selected at compile time:
//! plain `u32` arithmetic by default, or `core::simd` with the `simd` feature.

#![no_std]
#![cfg_attr(feature = "simd", feature(portable_simd))]

// --- Module declarations ---
pub mod consts;
mod backends;

#[cfg(test)]
mod tests;

use consts::{PLANES, PLANE_WORDS, STATE_BYTES, STATE_WORDS};
use core::ops::{Index, IndexMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A Xoodoo state: 48 bytes, permuted in place.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Xoodoo {
    state: [u8; STATE_BYTES],
}

impl Xoodoo {
    /// Creates the all-zero state.
    pub const fn new() -> Self {
        Self { state: [0; STATE_BYTES] }
    }

    /// Creates a state from its byte representation.
    pub const fn from_bytes(state: [u8; STATE_BYTES]) -> Self {
        Self { state }
    }

    /// Applies the twelve-round permutation.
    pub fn permute(&mut self) {
        let mut words = self.to_words();
        backends::permutation(&mut words);
        for (chunk, word) in self.state.chunks_exact_mut(4).zip(words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        words.zeroize();
    }

    pub fn bytes(&self) -> &[u8; STATE_BYTES] {
        &self.state
    }

    pub fn bytes_mut(&mut self) -> &mut [u8; STATE_BYTES] {
        &mut self.state
    }

    /// Returns the three planes as lane arrays, `[A, B, C]`.
    pub fn planes(&self) -> [[u32; PLANE_WORDS]; PLANES] {
        let words = self.to_words();
        core::array::from_fn(|plane| core::array::from_fn(|lane| words[plane * PLANE_WORDS + lane]))
    }

    fn to_words(&self) -> [u32; STATE_WORDS] {
        let s = &self.state;
        core::array::from_fn(|i| u32::from_le_bytes([s[4 * i], s[4 * i + 1], s[4 * i + 2], s[4 * i + 3]]))
    }
}

impl Default for Xoodoo {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Xoodoo {
    type Output = u8;

    #[inline(always)]
    fn index(&self, index: usize) -> &u8 {
        &self.state[index]
    }
}

impl IndexMut<usize> for Xoodoo {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.state[index]
    }
}
