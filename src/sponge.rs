//======================================================================
// src/sponge.rs
// RustCrypto `digest` 어댑터: Hasher (XOF) 와 Hash (32바이트 고정 출력).
//======================================================================

use crate::consts::HASH_RATE;
use crate::duplex::{Duplex, Flag, Mode};
use digest::{
    block_buffer::Lazy,
    consts::{U16, U32},
    core_api::{
        Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, ExtendableOutputCore,
        FixedOutputCore, OutputSizeUser, UpdateCore, XofReaderCore, XofReaderCoreWrapper,
    },
    HashMarker, Output, Reset,
};

//======================================================================
// XoodyakHashCore - 스트리밍 absorb
//======================================================================

/// Streaming core equivalent to a single [`Xoodyak::absorb`](crate::Xoodyak::absorb)
/// of the concatenated input.
///
/// The lazy block buffer keeps the last full block back, so the final block
/// handed to `finalize_xof_core` is never empty unless the whole input was.
#[derive(Clone)]
pub struct XoodyakHashCore {
    duplex: Duplex,
    flag: Flag,
}

impl XoodyakHashCore {
    #[inline]
    fn absorb_block(&mut self, block: &[u8]) {
        self.duplex.absorb_block(block, self.flag);
        self.flag = Flag::Zero;
    }
}

impl Default for XoodyakHashCore {
    fn default() -> Self {
        Self {
            duplex: Duplex::new(Mode::Hash),
            flag: Flag::Absorb,
        }
    }
}

impl HashMarker for XoodyakHashCore {}

// HASH_RATE bytes per block.
impl BlockSizeUser for XoodyakHashCore {
    type BlockSize = U16;
}

impl BufferKindUser for XoodyakHashCore {
    type BufferKind = Lazy;
}

impl UpdateCore for XoodyakHashCore {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.absorb_block(block);
        }
    }
}

impl ExtendableOutputCore for XoodyakHashCore {
    type ReaderCore = XoodyakXofReader;

    fn finalize_xof_core(&mut self, buffer: &mut Buffer<Self>) -> Self::ReaderCore {
        let last = buffer.get_data();
        if self.flag == Flag::Absorb || !last.is_empty() {
            self.absorb_block(last);
        }
        XoodyakXofReader {
            duplex: self.duplex.clone(),
            started: false,
        }
    }
}

impl Reset for XoodyakHashCore {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

//======================================================================
// XoodyakXofReader - 출력 생성(Squeezing) 담당
//======================================================================

/// XOF reader; yields exactly the bytes of [`Xoodyak::squeeze`](crate::Xoodyak::squeeze).
#[derive(Clone)]
pub struct XoodyakXofReader {
    duplex: Duplex,
    started: bool,
}

impl BlockSizeUser for XoodyakXofReader {
    type BlockSize = U16;
}

impl XofReaderCore for XoodyakXofReader {
    #[inline]
    fn read_block(&mut self) -> Block<Self> {
        let mut block = Block::<Self>::default();
        debug_assert_eq!(block.len(), HASH_RATE);
        if self.started {
            self.duplex.down(Flag::Zero);
            self.duplex.up_into(Flag::Zero, &mut block);
        } else {
            self.started = true;
            self.duplex.up_into(Flag::Squeeze, &mut block);
        }
        block
    }
}

//======================================================================
// 고정 길이 출력 래퍼
//======================================================================

/// Wraps [`XoodyakHashCore`] with a fixed 32-byte output.
#[derive(Clone, Default)]
pub struct FixedOutputCoreWrapper(XoodyakHashCore);

impl HashMarker for FixedOutputCoreWrapper {}

impl BlockSizeUser for FixedOutputCoreWrapper {
    type BlockSize = <XoodyakHashCore as BlockSizeUser>::BlockSize;
}

impl BufferKindUser for FixedOutputCoreWrapper {
    type BufferKind = <XoodyakHashCore as BufferKindUser>::BufferKind;
}

impl UpdateCore for FixedOutputCoreWrapper {
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.0.update_blocks(blocks);
    }
}

impl OutputSizeUser for FixedOutputCoreWrapper {
    type OutputSize = U32;
}

impl FixedOutputCore for FixedOutputCoreWrapper {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let mut reader = self.0.finalize_xof_core(buffer);
        for chunk in out.chunks_exact_mut(HASH_RATE) {
            chunk.copy_from_slice(&reader.read_block());
        }
    }
}

impl Reset for FixedOutputCoreWrapper {
    fn reset(&mut self) {
        self.0.reset();
    }
}

/// Streaming Xoodyak with extendable output.
pub type Hasher = CoreWrapper<XoodyakHashCore>;

/// Streaming Xoodyak with a 32-byte digest.
pub type Hash = CoreWrapper<FixedOutputCoreWrapper>;

/// Reader returned by [`Hasher`]'s `finalize_xof`.
pub type XofReader = XofReaderCoreWrapper<XoodyakXofReader>;
