//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Used to bind run reports to a stable digest. Nothing in `board` depends
//! on this module.

pub mod canon;
pub mod hash;
