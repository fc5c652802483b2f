//! HARMONIA-NG internal computations
//!
//! This module contains the low-level bitwise functions, the message
//! schedule, and the round logic used by the HARMONIA-NG hash function.
//!
//! It is intentionally kept separate from the public hashing interface to:
//! - make the core algorithm easier to audit
//! - isolate performance-critical logic
//! - share one arithmetic definition between the scalar and 4-way back-ends
//!
//! All operations use fixed-size integer arithmetic modulo 2³². Rotation
//! amounts are drawn from tables indexed by the round number alone, so
//! control flow never depends on message content.

use crate::hash::harmonia_ng::{
    CROSS_STREAM_ROT, DIGEST_SIZE, EDGE_ROT_LEFT, EDGE_ROT_RIGHT, FIBONACCI, GOLDEN_GAMMA,
    PHI_CONSTANTS, RECIPROCAL_CONSTANTS, ROTATION_PATTERNS, ROUND_PATTERNS, ROUNDS,
};

/// Schedule sigma function σ₀ with a round-dependent base rotation `r`.
///
/// Defined as:
/// σ₀(x) = ROTRʳ(x) ⊕ ROTRʳ⁺¹¹(x) ⊕ SHR³(x)
#[inline(always)]
pub(crate) fn sigma0(x: u32, r: u32) -> u32 {
    x.rotate_right(r) ^ x.rotate_right(r + 11) ^ (x >> 3)
}

/// Schedule sigma function σ₁ with a round-dependent base rotation `r`.
///
/// Defined as:
/// σ₁(x) = ROTRʳ(x) ⊕ ROTRʳ⁺²(x) ⊕ SHR¹⁰(x)
#[inline(always)]
pub(crate) fn sigma1(x: u32, r: u32) -> u32 {
    x.rotate_right(r) ^ x.rotate_right(r + 2) ^ (x >> 10)
}

/// Expands a 64-byte block into the 32-word message schedule.
///
/// The first 16 words are the block parsed big-endian; the remaining 16 are
/// derived with σ₀/σ₁ whose base rotations vary per index (`7 + i mod 5`
/// and `17 + i mod 4`), plus a `FIBONACCI[i mod 12]` additive term.
pub(crate) fn expand_message(block: &[u8; 64]) -> [u32; 32] {
    let mut w = [0u32; 32];

    // Parse first 16 words (big-endian)
    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    // Expand to 32 words
    for i in 16..32 {
        let r1 = 7 + (i % 5) as u32;
        let r2 = 17 + (i % 4) as u32;

        let s0 = sigma0(w[i - 15], r1);
        let s1 = sigma1(w[i - 2], r2);

        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1)
            .wrapping_add(FIBONACCI[i % 12]);
    }

    w
}

/// Performs one HARMONIA-NG quarter round.
///
/// This is the ChaCha quarter-round shape parameterized by four rotation
/// amounts. It mixes four 32-bit words of one stream using addition modulo
/// 2³², XOR, and left rotations, and is the fundamental source of diffusion
/// and non-linearity in the round function.
///
/// The function is branchless and runs in constant time.
#[inline(always)]
pub(crate) fn quarter_round(
    state: &mut [u32; 8],
    a: usize,
    b: usize,
    c: usize,
    d: usize,
    [r1, r2, r3, r4]: [u32; 4],
) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(r1);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(r2);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(r3);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(r4);
}

/// Perturbs the boundary words of one stream.
///
/// The edge words are rotated, XORed with a Fibonacci-scaled golden
/// constant keyed by `round`, then both receive the upper half of their
/// XOR as an additive interaction term.
pub(crate) fn edge_protection(state: &mut [u32; 8], round: usize) {
    let fib = FIBONACCI[round % 12].wrapping_mul(GOLDEN_GAMMA);

    // Left edge
    state[0] = state[0].rotate_right(EDGE_ROT_LEFT) ^ fib;

    // Right edge
    state[7] = state[7].rotate_left(EDGE_ROT_RIGHT) ^ !fib;

    // Edge interaction
    let interaction = (state[0] ^ state[7]) >> 16;
    state[0] = state[0].wrapping_add(interaction);
    state[7] = state[7].wrapping_add(interaction);
}

/// Couples the two streams through a rotated XOR.
///
/// The loop updates in place: iterations 5–7 read complementary words that
/// earlier iterations have already rewritten. This ordering is part of the
/// wire contract.
pub(crate) fn cross_stream_diffusion(g: &mut [u32; 8], c: &mut [u32; 8]) {
    for i in 0..8 {
        let temp = g[i] ^ c[(i + 3) % 8];
        g[i] = g[i].wrapping_add(temp.rotate_right(CROSS_STREAM_ROT));
        c[i] ^= temp.rotate_left(CROSS_STREAM_ROT);
    }
}

/// Executes all 32 rounds of the HARMONIA-NG compression function.
///
/// Each round injects one schedule word into the head of each stream (the
/// schedule is walked forward for the golden stream and backward for the
/// complementary stream), XORs a per-round golden/reciprocal constant into
/// the stream middles, then applies column and diagonal quarter-rounds to
/// both streams. Cross-stream diffusion runs every 4 rounds and edge
/// protection every 8. The Davies–Meyer feedforward adds the incoming state
/// back into the result.
///
/// # Parameters
/// - `state_g`: The golden stream (8 × 32-bit words), updated in place
/// - `state_c`: The complementary stream (8 × 32-bit words), updated in place
/// - `w`: The 32-word message schedule
pub(crate) fn all_rounds(state_g: &mut [u32; 8], state_c: &mut [u32; 8], w: &[u32; 32]) {
    // Load the streams into working copies
    let mut g = *state_g;
    let mut c = *state_c;

    for r in 0..ROUNDS {
        let rotations = ROTATION_PATTERNS[ROUND_PATTERNS[r] as usize];
        let k_phi = PHI_CONSTANTS[r % 16];
        let k_rec = RECIPROCAL_CONSTANTS[r % 16];

        // Message injection
        g[0] = g[0].wrapping_add(w[r]);
        c[0] = c[0].wrapping_add(w[31 - r]);

        // Constant injection
        g[4] ^= k_phi;
        c[4] ^= k_rec;

        // Column quarter-rounds (golden stream)
        quarter_round(&mut g, 0, 1, 2, 3, rotations);
        quarter_round(&mut g, 4, 5, 6, 7, rotations);

        // Diagonal quarter-rounds (golden stream)
        quarter_round(&mut g, 0, 5, 2, 7, rotations);
        quarter_round(&mut g, 4, 1, 6, 3, rotations);

        // Column quarter-rounds (complementary stream)
        quarter_round(&mut c, 0, 1, 2, 3, rotations);
        quarter_round(&mut c, 4, 5, 6, 7, rotations);

        // Diagonal quarter-rounds (complementary stream)
        quarter_round(&mut c, 0, 5, 2, 7, rotations);
        quarter_round(&mut c, 4, 1, 6, 3, rotations);

        // Cross-stream diffusion every 4 rounds
        if (r + 1) % 4 == 0 {
            cross_stream_diffusion(&mut g, &mut c);
        }

        // Edge protection every 8 rounds
        if (r + 1) % 8 == 0 {
            edge_protection(&mut g, r);
            edge_protection(&mut c, r);
        }
    }

    // Davies–Meyer: add the compressed streams to the incoming state
    for i in 0..8 {
        state_g[i] = state_g[i].wrapping_add(g[i]);
        state_c[i] = state_c[i].wrapping_add(c[i]);
    }
}

/// Fuses the two streams into the final 32-byte digest.
///
/// A last edge protection pass runs with round indices 32 (golden) and 33
/// (complementary), then each output word combines one word from each
/// stream with a per-position rotation (`(i·3 + 5) mod 16 + 1`) and a `PHI`
/// additive perturbation, serialized big-endian.
pub(crate) fn fuse_streams(state_g: &[u32; 8], state_c: &[u32; 8]) -> [u8; DIGEST_SIZE] {
    let mut g = *state_g;
    let mut c = *state_c;

    // Final edge protection
    edge_protection(&mut g, 32);
    edge_protection(&mut c, 33);

    // Fuse streams and serialize
    let mut digest = [0u8; DIGEST_SIZE];

    for i in 0..8 {
        let rot = (i as u32 * 3 + 5) % 16 + 1;

        let fused = (g[i].rotate_right(rot) ^ c[i].rotate_left(rot)).wrapping_add(PHI_CONSTANTS[i]);

        digest[i * 4..i * 4 + 4].copy_from_slice(&fused.to_be_bytes());
    }

    digest
}
