//! Hash algorithms exposed by the crate.
//!
//! Currently includes HARMONIA-NG with a pure-Rust implementation.

pub mod harmonia_ng;

/// Re-export of the HARMONIA-NG convenience functions and streaming context.
pub use harmonia_ng::core::{HarmoniaNg, harmonia_ng};
pub use harmonia_ng::x4::harmonia_ng_x4;
