//======================================================================
// xoodoo/src/consts.rs
// 순열에 사용되는 상수 정의
//======================================================================

/// Number of 32-bit lanes per plane.
pub const PLANE_WORDS: usize = 4;

/// Number of planes (A, B, C).
pub const PLANES: usize = 3;

/// The internal state size in 32-bit words.
pub const STATE_WORDS: usize = PLANES * PLANE_WORDS;

/// The internal state size in bytes.
pub const STATE_BYTES: usize = STATE_WORDS * 4;

/// 라운드 상수 (RC), one per round, injected into lane 0 of plane A.
pub const ROUND_CONSTANTS: [u32; 12] = [
    0x058, 0x038, 0x3c0, 0x0d0, 0x120, 0x014,
    0x060, 0x02c, 0x380, 0x0f0, 0x1a0, 0x012,
];

/// θ column-parity rotations.
pub const THETA_ROT_A: u32 = 5;
pub const THETA_ROT_B: u32 = 14;

/// ρ-west rotation applied to plane C.
pub const RHO_WEST_C: u32 = 11;

/// ρ-east rotations applied to planes B and C.
pub const RHO_EAST_B: u32 = 1;
pub const RHO_EAST_C: u32 = 8;
