//======================================================================
// Xoodoo Crate Test Suite
//======================================================================
#![cfg(test)]

use crate::consts::STATE_BYTES;
use crate::Xoodoo;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

#[test]
fn xoodoo_384_iterations_from_zero() {
    let mut xoodoo = Xoodoo::new();
    for _ in 0..384 {
        xoodoo.permute();
    }

    let [a, b, c] = xoodoo.planes();
    assert_eq!(a, [0xfe04fab0, 0x42d5d8ce, 0x29c62ee7, 0x2a7ae5cf]);
    assert_eq!(b, [0xea36eba3, 0x14649e0a, 0xfe12521b, 0xfe2eff69]);
    assert_eq!(c, [0xf1826ca5, 0xfc4c41e0, 0x1597394f, 0xeb092faf]);
}

#[test]
fn lanes_are_little_endian() {
    let mut bytes = [0u8; STATE_BYTES];
    bytes[0] = 0x01;
    bytes[3] = 0x80;
    bytes[20] = 0xaa; // plane B, lane 1, lowest byte
    bytes[47] = 0x7f; // plane C, lane 3, highest byte
    let xoodoo = Xoodoo::from_bytes(bytes);

    let [a, b, c] = xoodoo.planes();
    assert_eq!(a[0], 0x8000_0001);
    assert_eq!(b[1], 0x0000_00aa);
    assert_eq!(c[3], 0x7f00_0000);
    assert_eq!(xoodoo[47], 0x7f);
}

#[test]
fn permutation_is_deterministic_and_diffuses() {
    let mut rng = ChaCha8Rng::from_seed([7; 32]);
    let mut bytes = [0u8; STATE_BYTES];
    rng.fill_bytes(&mut bytes);

    let mut x = Xoodoo::from_bytes(bytes);
    let mut y = x.clone();
    x.permute();
    y.permute();
    assert!(x == y, "Same input must give the same output");

    // Flipping a single input bit should change most of the output.
    let mut flipped = bytes;
    flipped[17] ^= 0x04;
    let mut z = Xoodoo::from_bytes(flipped);
    z.permute();
    let differing = x.bytes().iter().zip(z.bytes()).filter(|(l, r)| l != r).count();
    assert!(differing > STATE_BYTES / 2, "Only {differing} bytes changed");
}

#[test]
fn index_mut_writes_through() {
    let mut xoodoo = Xoodoo::default();
    xoodoo[0] ^= 0x01;
    xoodoo[STATE_BYTES - 1] ^= 0x80;
    assert_eq!(xoodoo.bytes()[0], 0x01);
    assert_eq!(xoodoo.bytes_mut()[STATE_BYTES - 1], 0x80);
}

#[test]
#[cfg(feature = "simd")]
fn simd_vs_soft_consistency() {
    use crate::backends::{simd, soft};
    use crate::consts::STATE_WORDS;

    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    for _ in 0..64 {
        let mut soft_state = [0u32; STATE_WORDS];
        for word in soft_state.iter_mut() {
            *word = rng.next_u32();
        }
        let mut simd_state = soft_state;

        soft::permutation(&mut soft_state);
        simd::permutation(&mut simd_state);

        assert_eq!(soft_state, simd_state, "SIMD and Soft backends must produce identical states");
    }
}
