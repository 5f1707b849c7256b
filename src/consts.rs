//======================================================================
// src/consts.rs
// 각종 상수 정의 (rates, sizes)
//======================================================================

pub use xoodoo::consts::STATE_BYTES;

/// Absorb and squeeze rate of the hash mode, in bytes.
pub const HASH_RATE: usize = 16;

/// Absorb rate of the keyed mode, in bytes.
pub const KEYED_ABSORB_RATE: usize = 44;

/// Squeeze (and crypt) rate of the keyed mode, in bytes.
pub const KEYED_SQUEEZE_RATE: usize = 24;

/// Bytes squeezed and re-absorbed by a ratchet.
pub const RATCHET_RATE: usize = 16;

/// The optional session counter is absorbed one byte per permutation.
pub const COUNTER_RATE: usize = 1;

/// Default digest length of [`Hash`](crate::Hash).
pub const DIGEST_SIZE: usize = 32;

/// AEAD key, nonce and tag sizes.
pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 16;
pub const TAG_SIZE: usize = 16;
