//! Board model: the 3x3 permutation and the moves that act on it.
//!
//! `state` ← `moves`. A board is only ever changed by swapping the blank
//! with an orthogonal neighbour, so every reachable board stays a
//! permutation of `0..=8`.

pub mod moves;
pub mod state;
