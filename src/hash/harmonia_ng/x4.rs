//! HARMONIA-NG 4-way parallel hashing
//!
//! This module hashes four independent, equal-length messages at once by
//! lifting every 32-bit word of the scalar algorithm to a 4-lane vector:
//! lane `k` of each state word belongs to message `k`.
//!
//! ```text
//! g[0] = [msg0_g0, msg1_g0, msg2_g0, msg3_g0]
//! g[1] = [msg0_g1, msg1_g1, msg2_g1, msg3_g1]
//! ...
//! ```
//!
//! With this layout every operation of the round function (addition, XOR,
//! rotation, cross-stream indexing) stays lane-local, so the variant is a
//! pure reorganization of the scalar arithmetic: for each lane `k` the
//! output equals `harmonia_ng(msgs[k])` bit for bit. Lanes only cross at
//! the very end, when each digest is serialized separately.
//!
//! The lane type is written so the compiler can keep it in one SIMD
//! register: all lane operations are elementwise, and the quarter-round
//! receives its rotation amounts as const generics, which materializes
//! every rotation in the hot loop as a compile-time shift pair.

use core::array;
use core::ops::{BitXor, BitXorAssign, Shr};

use crate::hash::harmonia_ng::{
    BLOCK_SIZE, COMPLEMENT_INIT, CROSS_STREAM_ROT, DIGEST_SIZE, EDGE_ROT_LEFT, EDGE_ROT_RIGHT,
    FIBONACCI, GOLDEN_GAMMA, GOLDEN_INIT, PHI_CONSTANTS, RECIPROCAL_CONSTANTS, ROUND_PATTERNS,
    ROUNDS,
};

/// Four 32-bit words, one per message lane.
///
/// Arithmetic is elementwise and mirrors the scalar `u32` API
/// (`wrapping_add`, `rotate_left`, `rotate_right`), so the vector pipeline
/// reads like the scalar one.
#[derive(Clone, Copy)]
pub(crate) struct U32x4([u32; 4]);

impl U32x4 {
    #[inline(always)]
    fn splat(x: u32) -> Self {
        Self([x; 4])
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i].wrapping_add(rhs.0[i])))
    }

    #[inline(always)]
    fn rotate_left(self, n: u32) -> Self {
        Self(array::from_fn(|i| self.0[i].rotate_left(n)))
    }

    #[inline(always)]
    fn rotate_right(self, n: u32) -> Self {
        Self(array::from_fn(|i| self.0[i].rotate_right(n)))
    }
}

impl BitXor for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] ^ rhs.0[i]))
    }
}

impl BitXorAssign for U32x4 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl Shr<u32> for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        Self(array::from_fn(|i| self.0[i] >> n))
    }
}

/// 4-lane quarter round with compile-time rotation amounts.
#[inline(always)]
fn quarter_round_x4<const R1: u32, const R2: u32, const R3: u32, const R4: u32>(
    state: &mut [U32x4; 8],
    a: usize,
    b: usize,
    c: usize,
    d: usize,
) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(R1);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(R2);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(R3);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(R4);
}

/// Column and diagonal quarter-rounds of one round, on both streams.
#[inline(always)]
fn round_x4<const R1: u32, const R2: u32, const R3: u32, const R4: u32>(
    g: &mut [U32x4; 8],
    c: &mut [U32x4; 8],
) {
    quarter_round_x4::<R1, R2, R3, R4>(g, 0, 1, 2, 3);
    quarter_round_x4::<R1, R2, R3, R4>(g, 4, 5, 6, 7);
    quarter_round_x4::<R1, R2, R3, R4>(g, 0, 5, 2, 7);
    quarter_round_x4::<R1, R2, R3, R4>(g, 4, 1, 6, 3);

    quarter_round_x4::<R1, R2, R3, R4>(c, 0, 1, 2, 3);
    quarter_round_x4::<R1, R2, R3, R4>(c, 4, 5, 6, 7);
    quarter_round_x4::<R1, R2, R3, R4>(c, 0, 5, 2, 7);
    quarter_round_x4::<R1, R2, R3, R4>(c, 4, 1, 6, 3);
}

/// Edge protection lifted to four lanes. The Fibonacci-scaled constant is
/// identical across lanes, so it is computed once and broadcast.
fn edge_protection_x4(state: &mut [U32x4; 8], round: usize) {
    let fib = FIBONACCI[round % 12].wrapping_mul(GOLDEN_GAMMA);

    state[0] = state[0].rotate_right(EDGE_ROT_LEFT) ^ U32x4::splat(fib);
    state[7] = state[7].rotate_left(EDGE_ROT_RIGHT) ^ U32x4::splat(!fib);

    let interaction = (state[0] ^ state[7]) >> 16;
    state[0] = state[0].wrapping_add(interaction);
    state[7] = state[7].wrapping_add(interaction);
}

/// Cross-stream diffusion lifted to four lanes, with the same sequential
/// in-place ordering as the scalar transform.
fn cross_stream_diffusion_x4(g: &mut [U32x4; 8], c: &mut [U32x4; 8]) {
    for i in 0..8 {
        let temp = g[i] ^ c[(i + 3) % 8];
        g[i] = g[i].wrapping_add(temp.rotate_right(CROSS_STREAM_ROT));
        c[i] ^= temp.rotate_left(CROSS_STREAM_ROT);
    }
}

/// Parses and expands four 64-byte blocks into a vectorized schedule: word
/// `w[i]` holds schedule word `i` of all four messages.
fn expand_message_x4(blocks: &[&[u8; 64]; 4]) -> [U32x4; 32] {
    let mut w = [U32x4::splat(0); 32];

    // Parse first 16 words of each lane (big-endian)
    for (i, slot) in w.iter_mut().enumerate().take(16) {
        *slot = U32x4(array::from_fn(|lane| {
            u32::from_be_bytes(blocks[lane][i * 4..i * 4 + 4].try_into().unwrap())
        }));
    }

    // Expand to 32 words
    for i in 16..32 {
        let r1 = 7 + (i % 5) as u32;
        let r2 = 17 + (i % 4) as u32;

        let s0 = w[i - 15].rotate_right(r1) ^ w[i - 15].rotate_right(r1 + 11) ^ (w[i - 15] >> 3);
        let s1 = w[i - 2].rotate_right(r2) ^ w[i - 2].rotate_right(r2 + 2) ^ (w[i - 2] >> 10);

        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1)
            .wrapping_add(U32x4::splat(FIBONACCI[i % 12]));
    }

    w
}

/// Compresses one 64-byte block of each message, all four in parallel.
fn compress_x4(blocks: &[&[u8; 64]; 4], state_g: &mut [U32x4; 8], state_c: &mut [U32x4; 8]) {
    let w = expand_message_x4(blocks);

    let mut g = *state_g;
    let mut c = *state_c;

    for r in 0..ROUNDS {
        // Message injection
        g[0] = g[0].wrapping_add(w[r]);
        c[0] = c[0].wrapping_add(w[31 - r]);

        // Constant injection
        g[4] ^= U32x4::splat(PHI_CONSTANTS[r % 16]);
        c[4] ^= U32x4::splat(RECIPROCAL_CONSTANTS[r % 16]);

        // Quarter-rounds, dispatched so every rotation amount is a
        // compile-time immediate
        match ROUND_PATTERNS[r] {
            0 => round_x4::<12, 8, 16, 7>(&mut g, &mut c),
            1 => round_x4::<11, 9, 13, 5>(&mut g, &mut c),
            2 => round_x4::<8, 16, 7, 12>(&mut g, &mut c),
            3 => round_x4::<16, 7, 12, 8>(&mut g, &mut c),
            4 => round_x4::<7, 12, 8, 16>(&mut g, &mut c),
            5 => round_x4::<13, 5, 11, 9>(&mut g, &mut c),
            6 => round_x4::<9, 13, 5, 11>(&mut g, &mut c),
            _ => round_x4::<5, 11, 9, 13>(&mut g, &mut c),
        }

        // Cross-stream diffusion every 4 rounds
        if (r + 1) % 4 == 0 {
            cross_stream_diffusion_x4(&mut g, &mut c);
        }

        // Edge protection every 8 rounds
        if (r + 1) % 8 == 0 {
            edge_protection_x4(&mut g, r);
            edge_protection_x4(&mut c, r);
        }
    }

    // Davies–Meyer feedforward
    for i in 0..8 {
        state_g[i] = state_g[i].wrapping_add(g[i]);
        state_c[i] = state_c[i].wrapping_add(c[i]);
    }
}

/// Fuses both vector streams and scatters each lane into its own digest.
///
/// The lane scatter here is the only point in the pipeline where data
/// crosses lanes.
fn finalize_x4(state_g: &[U32x4; 8], state_c: &[U32x4; 8]) -> [[u8; DIGEST_SIZE]; 4] {
    let mut g = *state_g;
    let mut c = *state_c;

    // Final edge protection
    edge_protection_x4(&mut g, 32);
    edge_protection_x4(&mut c, 33);

    let mut digests = [[0u8; DIGEST_SIZE]; 4];

    for i in 0..8 {
        let rot = (i as u32 * 3 + 5) % 16 + 1;

        let fused = (g[i].rotate_right(rot) ^ c[i].rotate_left(rot))
            .wrapping_add(U32x4::splat(PHI_CONSTANTS[i]));

        for (lane, digest) in digests.iter_mut().enumerate() {
            digest[i * 4..i * 4 + 4].copy_from_slice(&fused.0[lane].to_be_bytes());
        }
    }

    digests
}

/// Computes the HARMONIA-NG hash of four equal-length messages in parallel.
///
/// # Parameters
/// - `msgs`: Four input messages of identical length
///
/// # Returns
/// One 32-byte digest per message; `digests[k]` equals
/// `harmonia_ng(msgs[k])` exactly.
///
/// # Panics
/// Panics if the four messages do not have the same length.
pub fn harmonia_ng_x4(msgs: [&[u8]; 4]) -> [[u8; DIGEST_SIZE]; 4] {
    let len = msgs[0].len();
    for msg in &msgs[1..] {
        assert_eq!(msg.len(), len, "all four messages must have the same length");
    }

    // Initialize state: each lane gets the same initial value
    let mut state_g = GOLDEN_INIT.map(U32x4::splat);
    let mut state_c = COMPLEMENT_INIT.map(U32x4::splat);

    // Process full blocks straight from the inputs
    let mut offset = 0;
    while offset + BLOCK_SIZE <= len {
        let blocks: [&[u8; 64]; 4] =
            array::from_fn(|m| msgs[m][offset..offset + BLOCK_SIZE].try_into().unwrap());
        compress_x4(&blocks, &mut state_g, &mut state_c);
        offset += BLOCK_SIZE;
    }

    // Padding is identical across lanes since the lengths match
    let remaining = len - offset;
    let bit_len = (len as u64).wrapping_mul(8);

    let mut buffers = [[0u8; 64]; 4];
    for (buffer, msg) in buffers.iter_mut().zip(&msgs) {
        buffer[..remaining].copy_from_slice(&msg[offset..]);
        buffer[remaining] = 0x80;
    }

    // If there is not enough space for the length field, process these
    // blocks and use an additional set of zeroed blocks.
    if remaining + 1 > 56 {
        let blocks: [&[u8; 64]; 4] = array::from_fn(|m| &buffers[m]);
        compress_x4(&blocks, &mut state_g, &mut state_c);
        buffers = [[0u8; 64]; 4];
    }

    // Append the message length in bits as a 64-bit big-endian integer
    for buffer in &mut buffers {
        buffer[56..].copy_from_slice(&bit_len.to_be_bytes());
    }

    let blocks: [&[u8; 64]; 4] = array::from_fn(|m| &buffers[m]);
    compress_x4(&blocks, &mut state_g, &mut state_c);

    finalize_x4(&state_g, &state_c)
}
