//======================================================================
// src/hash.rs
// Xoodyak hash mode: absorb / squeeze 세션.
//======================================================================

use crate::duplex::{Duplex, Flag, Mode};

/// A Xoodyak session in hash mode.
///
/// Every [`absorb`](Self::absorb) call is a separate, domain-separated
/// input: `absorb(b"ab")` differs from `absorb(b"a"); absorb(b"b")`.
/// For streaming input use [`Hasher`](crate::Hasher) or [`Hash`](crate::Hash).
#[derive(Clone)]
pub struct Xoodyak {
    duplex: Duplex,
}

impl Xoodyak {
    pub fn new() -> Self {
        Self { duplex: Duplex::new(Mode::Hash) }
    }

    /// Absorbs `data` as one input. An empty slice is still an input.
    pub fn absorb(&mut self, data: &[u8]) {
        self.duplex.absorb(data);
    }

    /// Squeezes `count` bytes of output.
    pub fn squeeze(&mut self, count: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(count);
        self.squeeze_to(&mut out, count);
        out
    }

    /// Appends `count` bytes of output to `out`.
    pub fn squeeze_to(&mut self, out: &mut Vec<u8>, count: usize) {
        self.duplex.squeeze_to(out, count, Flag::Squeeze);
    }

    /// Fills `out` with output.
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        self.duplex.squeeze_any(out, Flag::Squeeze);
    }

    #[cfg(test)]
    pub(crate) fn duplex(&self) -> &Duplex {
        &self.duplex
    }
}

impl Default for Xoodyak {
    fn default() -> Self {
        Self::new()
    }
}
