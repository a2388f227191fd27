//! Octile Kernel: the deterministic core of the 8-puzzle solver.
//!
//! # API Surface
//!
//! - [`board::state::PuzzleState`] -- a validated permutation of the 3x3 grid
//! - [`board::moves`] -- blank-swap move generation and application
//! - [`heuristic::manhattan_distance`] -- distance estimate used by informed search
//! - [`proof::hash::canonical_hash`] / [`proof::canon::canonical_json_bytes`] --
//!   digests for run reports
//!
//! # Module Dependency Direction
//!
//! `board` ← `heuristic`, `proof` stands alone.
//!
//! One-way only. No cycles. The kernel knows nothing about search.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod heuristic;
pub mod proof;
