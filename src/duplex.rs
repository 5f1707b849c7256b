//======================================================================
// src/duplex.rs
// Cyclist duplex: Xoodoo 상태 위에서 Up/Down 단계를 관리합니다.
//======================================================================

use crate::consts::{
    COUNTER_RATE, HASH_RATE, KEYED_ABSORB_RATE, KEYED_SQUEEZE_RATE, RATCHET_RATE, STATE_BYTES,
};
use xoodoo::Xoodoo;
use zeroize::Zeroize;

const LAST: usize = STATE_BYTES - 1;

/// Whether the state holds fresh permutation output or absorbed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    Hash,
    Keyed,
}

/// Domain separation byte folded into the last state byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Flag {
    Zero = 0x00,
    AbsorbKey = 0x02,
    Absorb = 0x03,
    Ratchet = 0x10,
    SqueezeKey = 0x20,
    Squeeze = 0x40,
    Crypt = 0x80,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Encrypt,
    Decrypt,
}

/// Splits `data` into `rate`-sized blocks. Empty input still yields one empty block.
fn blocks(data: &[u8], rate: usize) -> impl Iterator<Item = &[u8]> + '_ {
    let mut chunks = data.chunks(rate);
    let first = chunks.next().unwrap_or(&[]);
    core::iter::once(first).chain(chunks)
}

/// The duplex object shared by the hash and keyed sessions.
///
/// Cloning copies the whole state, which is how a session is forked.
#[derive(Clone)]
pub(crate) struct Duplex {
    state: Xoodoo,
    phase: Phase,
    mode: Mode,
    absorb_rate: usize,
    squeeze_rate: usize,
}

impl Duplex {
    pub(crate) fn new(mode: Mode) -> Self {
        let (absorb_rate, squeeze_rate) = match mode {
            Mode::Hash => (HASH_RATE, HASH_RATE),
            Mode::Keyed => (KEYED_ABSORB_RATE, KEYED_SQUEEZE_RATE),
        };
        Self {
            state: Xoodoo::new(),
            phase: Phase::Up,
            mode,
            absorb_rate,
            squeeze_rate,
        }
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &Xoodoo {
        &self.state
    }

    #[inline(always)]
    fn fold_flag(&mut self, flag: Flag) {
        self.state[LAST] ^= match self.mode {
            Mode::Hash => flag as u8 & 0x01,
            Mode::Keyed => flag as u8,
        };
    }

    /// Down without a block: pads at byte 0.
    pub(crate) fn down(&mut self, flag: Flag) {
        self.phase = Phase::Down;
        self.state[0] ^= 0x01;
        self.fold_flag(flag);
    }

    pub(crate) fn down_block(&mut self, block: &[u8], flag: Flag) {
        debug_assert!(block.len() < STATE_BYTES);
        self.phase = Phase::Down;
        for (i, byte) in block.iter().enumerate() {
            self.state[i] ^= byte;
        }
        self.state[block.len()] ^= 0x01;
        self.fold_flag(flag);
    }

    pub(crate) fn up(&mut self, flag: Flag) {
        self.phase = Phase::Up;
        if self.mode == Mode::Keyed {
            self.state[LAST] ^= flag as u8;
        }
        self.state.permute();
    }

    /// Up, then copies the first `out.len()` bytes of the state.
    pub(crate) fn up_into(&mut self, flag: Flag, out: &mut [u8]) {
        self.up(flag);
        out.copy_from_slice(&self.state.bytes()[..out.len()]);
    }

    /// One block of an absorption; forces a permutation if the last step was a Down.
    pub(crate) fn absorb_block(&mut self, block: &[u8], flag: Flag) {
        if self.phase != Phase::Up {
            self.up(Flag::Zero);
        }
        self.down_block(block, flag);
    }

    /// Absorbs `data` in `rate`-byte blocks; only the first block carries `flag`.
    pub(crate) fn absorb_any(&mut self, data: &[u8], rate: usize, flag: Flag) {
        let mut flag = flag;
        for block in blocks(data, rate) {
            self.absorb_block(block, flag);
            flag = Flag::Zero;
        }
    }

    /// Absorbs caller data at the mode's absorb rate.
    pub(crate) fn absorb(&mut self, data: &[u8]) {
        self.absorb_any(data, self.absorb_rate, Flag::Absorb);
    }

    /// Fills `out` with squeezed bytes, `squeeze_rate` per permutation.
    pub(crate) fn squeeze_any(&mut self, out: &mut [u8], flag: Flag) {
        let mut chunks = out.chunks_mut(self.squeeze_rate);
        match chunks.next() {
            Some(first) => self.up_into(flag, first),
            None => self.up(flag),
        }
        for chunk in chunks {
            self.down(Flag::Zero);
            self.up_into(Flag::Zero, chunk);
        }
    }

    /// Appends `count` squeezed bytes to `out`.
    pub(crate) fn squeeze_to(&mut self, out: &mut Vec<u8>, count: usize, flag: Flag) {
        let start = out.len();
        out.resize(start + count, 0);
        self.squeeze_any(&mut out[start..], flag);
    }

    fn assert_keyed(&self, operation: &str) {
        assert!(
            self.mode == Mode::Keyed,
            "{operation} is only available on keyed sessions"
        );
    }

    /// Absorbs the session counter, one byte per permutation.
    pub(crate) fn absorb_counter(&mut self, counter: &[u8]) {
        self.assert_keyed("counter absorption");
        self.absorb_any(counter, COUNTER_RATE, Flag::Zero);
    }

    /// Encrypts or decrypts `buffer` in place, 24 bytes per permutation.
    ///
    /// Each block's plaintext is absorbed back, so both directions follow
    /// the same transcript.
    pub(crate) fn crypt(&mut self, buffer: &mut [u8], direction: Direction) {
        self.assert_keyed("crypt");
        let mut flag = Flag::Crypt;
        let mut plaintext = [0u8; KEYED_SQUEEZE_RATE];
        let mut offset = 0;
        loop {
            let end = (offset + KEYED_SQUEEZE_RATE).min(buffer.len());
            let block = &mut buffer[offset..end];

            self.up(flag);
            flag = Flag::Zero;

            for (i, byte) in block.iter_mut().enumerate() {
                let input = *byte;
                *byte ^= self.state[i];
                plaintext[i] = match direction {
                    Direction::Encrypt => input,
                    Direction::Decrypt => *byte,
                };
            }
            let len = block.len();
            self.down_block(&plaintext[..len], Flag::Zero);

            offset = end;
            if offset >= buffer.len() {
                break;
            }
        }
        plaintext.zeroize();
    }

    pub(crate) fn squeeze_key(&mut self, out: &mut [u8]) {
        self.assert_keyed("squeeze_key");
        self.squeeze_any(out, Flag::SqueezeKey);
    }

    /// Folds a one-way function of the state back into itself.
    pub(crate) fn ratchet(&mut self) {
        self.assert_keyed("ratchet");
        let mut scratch = [0u8; RATCHET_RATE];
        self.squeeze_any(&mut scratch, Flag::Ratchet);
        self.absorb_any(&scratch, self.absorb_rate, Flag::Zero);
        scratch.zeroize();
    }
}
