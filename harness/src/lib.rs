//! Octile Harness: run configuration, drivers and reports for the search.
//!
//! The harness builds engines, drives them to completion or through a
//! step budget, and packages the result as a [`report::SearchReport`]
//! with a deterministic digest.
//!
//! The harness does NOT implement search logic; it delegates to
//! `octile_search`. The `octile` binary is a thin clap front end over
//! [`runner`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod driver;
pub mod policy;
pub mod report;
pub mod runner;
