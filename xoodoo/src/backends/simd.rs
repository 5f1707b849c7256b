use crate::consts::*;
use core::simd::{simd_swizzle, u32x4, Simd};

/// Lane-wise rotate left of every 32-bit word.
#[inline(always)]
fn rotl(x: u32x4, n: u32) -> u32x4 {
    (x << Simd::splat(n)) | (x >> Simd::splat(32 - n))
}

/// The Xoodoo[12] permutation using one portable SIMD vector per plane.
#[inline(always)]
pub(crate) fn permutation(state: &mut [u32; STATE_WORDS]) {
    let mut a = u32x4::from_slice(&state[0..PLANE_WORDS]);
    let mut b = u32x4::from_slice(&state[PLANE_WORDS..2 * PLANE_WORDS]);
    let mut c = u32x4::from_slice(&state[2 * PLANE_WORDS..]);

    for &rc in ROUND_CONSTANTS.iter() {
        let p = simd_swizzle!(a ^ b ^ c, [3, 0, 1, 2]);
        let e = rotl(p, THETA_ROT_A) ^ rotl(p, THETA_ROT_B);
        a ^= e;
        b ^= e;
        c ^= e;

        b = simd_swizzle!(b, [3, 0, 1, 2]);
        c = rotl(c, RHO_WEST_C);

        a[0] ^= rc;

        a ^= !b & c;
        b ^= !c & a;
        c ^= !a & b;

        b = rotl(b, RHO_EAST_B);
        c = rotl(simd_swizzle!(c, [2, 3, 0, 1]), RHO_EAST_C);
    }

    a.copy_to_slice(&mut state[0..PLANE_WORDS]);
    b.copy_to_slice(&mut state[PLANE_WORDS..2 * PLANE_WORDS]);
    c.copy_to_slice(&mut state[2 * PLANE_WORDS..]);
}
