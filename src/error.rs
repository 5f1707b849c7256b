//! Errors reported by the fallible keyed constructor.

use crate::consts::KEYED_ABSORB_RATE;

/// Invalid keyed session parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The key is empty.
    #[error("key must not be empty")]
    EmptyKey,
    /// `key ‖ id ‖ len(id)` does not fit in one keyed absorb block.
    #[error("key and id need {len} bytes, at most {max} are allowed")]
    KeyTooLong {
        /// Bytes needed: key length + id length + 1.
        len: usize,
        /// The keyed absorb rate.
        max: usize,
    },
}

impl Error {
    pub(crate) fn too_long(len: usize) -> Self {
        Self::KeyTooLong { len, max: KEYED_ABSORB_RATE }
    }
}
