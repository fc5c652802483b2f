//! HARMONIA-NG cryptographic hashing
//!
//! This crate provides a pure-Rust implementation of HARMONIA-NG, a 256-bit
//! ARX hash function built on golden-ratio and Fibonacci constants. It is a
//! Merkle–Damgård construction with a Davies–Meyer feedforward, driven by a
//! ChaCha-style quarter-round over two independent 8-word streams.
//!
//! The focus is on **clarity, predictability, and auditability**. All
//! components are dependency-free, explicit in their semantics, and produce
//! bit-identical output across platforms and back-ends.
//!
//! # Module overview
//!
//! - `hash`
//!   The HARMONIA-NG hash function: a streaming context, a one-shot
//!   convenience function, and a 4-way parallel variant that hashes four
//!   equal-length messages at once while remaining bit-compatible with the
//!   scalar path.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Identical digests from the scalar and 4-way back-ends
//!
//! HARMONIA-NG carries no cryptanalytic security claim; the contract of this
//! crate is exact, reproducible output against the published test vectors.

pub mod hash;
