//! HARMONIA-NG core hashing functions
//!
//! This module implements the public face of the HARMONIA-NG hash function:
//!
//! - the compression function operating on 512-bit blocks
//! - a streaming context for incremental hashing
//! - a complete one-shot hashing function for arbitrary-length input
//!
//! The implementation is designed to be minimal, explicit, and suitable
//! for use as a low-level primitive.

use crate::hash::harmonia_ng::computations::{all_rounds, expand_message, fuse_streams};
use crate::hash::harmonia_ng::{BLOCK_SIZE, COMPLEMENT_INIT, DIGEST_SIZE, GOLDEN_INIT};

/// Compresses a single 512-bit message block.
///
/// This function expands the 64-byte block into the 32-word schedule and
/// runs the 32-round permutation over both streams, updating them in place
/// (the Davies–Meyer feedforward is included).
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state_g`: The golden stream (8 × 32-bit words)
/// - `state_c`: The complementary stream (8 × 32-bit words)
///
/// # Notes
/// - Input words are interpreted as big-endian, regardless of host
///   endianness.
pub fn compress(block: &[u8; 64], state_g: &mut [u32; 8], state_c: &mut [u32; 8]) {
    let w = expand_message(block);

    all_rounds(state_g, state_c, &w);
}

/// Streaming HARMONIA-NG context.
///
/// Holds both stream states, a partial-block buffer, and the total number
/// of bytes processed. Input may be fed in arbitrary slices; digests are
/// identical for any split of the same message.
///
/// ```
/// use harmonia::hash::{HarmoniaNg, harmonia_ng};
///
/// let mut ctx = HarmoniaNg::new();
/// ctx.update(b"Harm");
/// ctx.update(b"onia");
/// assert_eq!(ctx.finalize(), harmonia_ng(b"Harmonia"));
/// ```
#[derive(Clone)]
pub struct HarmoniaNg {
    state_g: [u32; 8],
    state_c: [u32; 8],
    buffer: [u8; 64],
    buffer_len: usize,
    total_len: u64,
}

impl HarmoniaNg {
    /// Creates a context with the golden and complementary initial values,
    /// an empty buffer, and a zeroed length counter.
    pub fn new() -> Self {
        Self {
            state_g: GOLDEN_INIT,
            state_c: COMPLEMENT_INIT,
            buffer: [0u8; 64],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Absorbs input bytes into the context.
    ///
    /// Buffered bytes are completed into a block first; full blocks are
    /// then compressed straight from `input` without copying; any trailing
    /// partial block is buffered for the next call.
    pub fn update(&mut self, mut input: &[u8]) {
        self.total_len = self.total_len.wrapping_add(input.len() as u64);

        // Try to complete a buffered block
        if self.buffer_len > 0 {
            let to_copy = (BLOCK_SIZE - self.buffer_len).min(input.len());

            self.buffer[self.buffer_len..self.buffer_len + to_copy]
                .copy_from_slice(&input[..to_copy]);
            self.buffer_len += to_copy;
            input = &input[to_copy..];

            if self.buffer_len == BLOCK_SIZE {
                compress(&self.buffer, &mut self.state_g, &mut self.state_c);
                self.buffer_len = 0;
            }
        }

        // Process full blocks directly from the input
        while input.len() >= BLOCK_SIZE {
            let block: &[u8; 64] = input[..BLOCK_SIZE].try_into().unwrap();
            compress(block, &mut self.state_g, &mut self.state_c);
            input = &input[BLOCK_SIZE..];
        }

        // Buffer remaining bytes
        if !input.is_empty() {
            self.buffer[..input.len()].copy_from_slice(input);
            self.buffer_len = input.len();
        }
    }

    /// Applies padding and produces the 32-byte digest, consuming the
    /// context.
    ///
    /// Padding appends `0x80`, zero-fills to byte 56 of the final block
    /// (spilling into an extra block when necessary), and encodes the total
    /// message length in bits as a 64-bit big-endian integer.
    pub fn finalize(mut self) -> [u8; DIGEST_SIZE] {
        let bit_len = self.total_len.wrapping_mul(8);

        // Append the padding bit (0x80)
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // If there is not enough space for the length field, process this
        // block and use an additional zeroed block.
        if self.buffer_len > 56 {
            self.buffer[self.buffer_len..].fill(0);
            compress(&self.buffer, &mut self.state_g, &mut self.state_c);
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..56].fill(0);

        // Append the message length in bits as a 64-bit big-endian integer
        self.buffer[56..].copy_from_slice(&bit_len.to_be_bytes());

        // Final compression
        compress(&self.buffer, &mut self.state_g, &mut self.state_c);

        fuse_streams(&self.state_g, &self.state_c)
    }
}

impl Default for HarmoniaNg {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the HARMONIA-NG hash of the given input.
///
/// One-shot equivalent of [`HarmoniaNg::new`] + [`HarmoniaNg::update`] +
/// [`HarmoniaNg::finalize`]; full blocks are compressed straight from the
/// input slice, so no buffering beyond the final partial block occurs.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// The final HARMONIA-NG digest as 32 bytes (`[u8; 32]`).
pub fn harmonia_ng(input: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut ctx = HarmoniaNg::new();
    ctx.update(input);
    ctx.finalize()
}
