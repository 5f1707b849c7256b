use crate::consts::*;

type Plane = [u32; PLANE_WORDS];

/// Cyclic lane shift: `out[i] = plane[i - n mod 4]`.
#[inline(always)]
fn shift_lanes(plane: Plane, n: usize) -> Plane {
    core::array::from_fn(|i| plane[(i + PLANE_WORDS - n) % PLANE_WORDS])
}

#[inline(always)]
fn rotate_words(plane: Plane, n: u32) -> Plane {
    plane.map(|word| word.rotate_left(n))
}

#[inline(always)]
fn xor_into(plane: &mut Plane, other: &Plane) {
    for (word, rhs) in plane.iter_mut().zip(other) {
        *word ^= rhs;
    }
}

/// The Xoodoo[12] permutation on three planes of four 32-bit lanes.
#[inline(always)]
pub(crate) fn permutation(state: &mut [u32; STATE_WORDS]) {
    let mut a: Plane = core::array::from_fn(|i| state[i]);
    let mut b: Plane = core::array::from_fn(|i| state[PLANE_WORDS + i]);
    let mut c: Plane = core::array::from_fn(|i| state[2 * PLANE_WORDS + i]);

    for &rc in ROUND_CONSTANTS.iter() {
        // 1. θ: column parity mixing
        let p: Plane = core::array::from_fn(|i| a[i] ^ b[i] ^ c[i]);
        let p = shift_lanes(p, 1);
        let e = p.map(|word| word.rotate_left(THETA_ROT_A) ^ word.rotate_left(THETA_ROT_B));
        xor_into(&mut a, &e);
        xor_into(&mut b, &e);
        xor_into(&mut c, &e);

        // 2. ρ-west
        b = shift_lanes(b, 1);
        c = rotate_words(c, RHO_WEST_C);

        // 3. ι
        a[0] ^= rc;

        // 4. χ: each plane update sees the previously updated ones.
        for i in 0..PLANE_WORDS {
            a[i] ^= !b[i] & c[i];
        }
        for i in 0..PLANE_WORDS {
            b[i] ^= !c[i] & a[i];
        }
        for i in 0..PLANE_WORDS {
            c[i] ^= !a[i] & b[i];
        }

        // 5. ρ-east
        b = rotate_words(b, RHO_EAST_B);
        c = rotate_words(shift_lanes(c, 2), RHO_EAST_C);
    }

    state[..PLANE_WORDS].copy_from_slice(&a);
    state[PLANE_WORDS..2 * PLANE_WORDS].copy_from_slice(&b);
    state[2 * PLANE_WORDS..].copy_from_slice(&c);
}
