//! HARMONIA-NG 256-bit hash function.
//!
//! HARMONIA-NG is an ARX (Add/Rotate/Xor) hash function producing a 32-byte
//! digest. It follows the Merkle–Damgård construction with a Davies–Meyer
//! feedforward and operates on two independent 8-word streams of 32-bit
//! words: the *golden* stream, seeded with the SHA-2 square-root constants,
//! and the *complementary* stream, seeded with golden-ratio material.
//!
//! # Algorithm Overview
//!
//! 1. **Message expansion**: each 64-byte block is parsed as 16 big-endian
//!    words and expanded to a 32-word schedule using SHA-2-style sigma
//!    functions with round-dependent rotations and a Fibonacci additive term.
//! 2. **Rounds**: 32 rounds of ChaCha-style column and diagonal
//!    quarter-rounds on both streams, with per-round rotation patterns,
//!    message injection (forward into the golden stream, reversed into the
//!    complementary stream) and golden-ratio constant injection.
//! 3. **Coupling**: every 4 rounds the streams are mixed through a rotated
//!    XOR (cross-stream diffusion); every 8 rounds the boundary words of
//!    each stream are perturbed (edge protection).
//! 4. **Feedforward**: the pre-compression state is added back into the
//!    post-compression state, word by word.
//! 5. **Fusion**: after the last block, one word from each stream is fused
//!    per output word with a per-position rotation and a `PHI` additive
//!    perturbation, serialized big-endian.
//!
//! # Back-ends
//!
//! - `core`: streaming context (`HarmoniaNg`) and one-shot hashing.
//! - `x4`: 4-way parallel variant hashing four equal-length messages at
//!   once. It is a pure reorganization of the scalar arithmetic and is
//!   bit-compatible with four scalar calls.
//!
//! All rotation amounts are fixed per round and drawn from lookup tables
//! indexed by the round number alone; control flow never depends on message
//! content.

pub(crate) mod computations;
pub mod core;
pub mod x4;

/// Digest length in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Message block length in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Number of rounds in the compression function.
pub(crate) const ROUNDS: usize = 32;

/// First 12 Fibonacci numbers, used as additive terms in the message
/// schedule and as multipliers in edge protection.
pub(crate) const FIBONACCI: [u32; 12] = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

/// Golden ratio constants (derived from φ), injected into the golden stream
/// and used as additive perturbations during stream fusion.
pub(crate) const PHI_CONSTANTS: [u32; 16] = [
    0x9E37605A, 0xDAC1E0F2, 0xF287A338, 0xFA8CFC04,
    0xFD805AA6, 0xCCF29760, 0xFF8184C3, 0xFF850D11,
    0xCC32476B, 0x98767486, 0xFFF82080, 0x30E4E2F3,
    0xFCC3ACC1, 0xE5216F38, 0xF30E4CC9, 0x948395F6,
];

/// Reciprocal golden ratio constants (derived from 1/φ), injected into the
/// complementary stream.
pub(crate) const RECIPROCAL_CONSTANTS: [u32; 16] = [
    0x7249217F, 0x5890EB7C, 0x4786B47C, 0x4C51DBE8,
    0x4E4DA61B, 0x4F76650C, 0x4F2F1A2A, 0x4F6CE289,
    0x4F1ADF40, 0x4E84BABC, 0x4F22D993, 0x497FA704,
    0x4F514F19, 0x4E8F43B8, 0x508E2FD9, 0x4B5F94A4,
];

/// Initial state of the golden stream.
pub(crate) const GOLDEN_INIT: [u32; 8] = [
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A,
    0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

/// Initial state of the complementary stream.
pub(crate) const COMPLEMENT_INIT: [u32; 8] = [
    0x9E3779B9, 0x7F4A7C15, 0xF39CC060, 0x5CEDC834,
    0x2FE12A6D, 0x4786B47C, 0xC8A5E2F0, 0x3A8D6B7F,
];

/// The eight quarter-round rotation quadruples `(R1, R2, R3, R4)`.
///
/// Patterns 0–4 are rotations of the base set A = (7, 12, 8, 16), patterns
/// 5–7 of the base set B = (5, 11, 9, 13).
pub(crate) const ROTATION_PATTERNS: [[u32; 4]; 8] = [
    [12, 8, 16, 7],
    [11, 9, 13, 5],
    [8, 16, 7, 12],
    [16, 7, 12, 8],
    [7, 12, 8, 16],
    [13, 5, 11, 9],
    [9, 13, 5, 11],
    [5, 11, 9, 13],
];

/// Per-round index into [`ROTATION_PATTERNS`], generated from a Fibonacci
/// word over the two base rotation sets.
pub(crate) const ROUND_PATTERNS: [u8; 32] = [
    0, 1, 2, 3, 1, 4, 1, 0, 2, 5, 0, 4, 1, 0, 6, 3,
    0, 7, 0, 1, 2, 3, 1, 4, 0, 1, 2, 5, 0, 4, 1, 0,
];

/// Rotation applied to the left edge word during edge protection.
pub(crate) const EDGE_ROT_LEFT: u32 = 7;

/// Rotation applied to the right edge word during edge protection.
pub(crate) const EDGE_ROT_RIGHT: u32 = 13;

/// Rotation used by the cross-stream diffusion coupling.
pub(crate) const CROSS_STREAM_ROT: u32 = 11;

/// Multiplier applied to Fibonacci numbers in edge protection (⌊2³²/φ⌋).
pub(crate) const GOLDEN_GAMMA: u32 = 0x9E3779B9;
