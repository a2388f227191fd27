//! Octile Search: one expansion loop, four frontier disciplines.
//!
//! This crate provides the search layer for the 8-puzzle. It depends only on
//! `octile_kernel`; it does NOT depend on `octile_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! octile_kernel  ←  octile_search  ←  octile_harness
//! (board, hash)     (frontier, engine)  (reports, drivers, CLI)
//! ```
//!
//! # Key types
//!
//! - [`search::SearchEngine`]: run-to-completion and single-step search
//! - [`frontier::Frontier`]: trait for frontier ordering policies
//! - [`policy::Strategy`]: the four built-in strategies
//! - [`node::NodeArena`]: index-based node storage and path reconstruction
//! - [`stats::SearchStats`]: counters reported by the engine

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
