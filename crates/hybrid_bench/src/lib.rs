//! Collaborator tooling around `hybrid_sort`: seeded dataset generation,
//! the one-integer-per-line file format, and a timing harness that also
//! reports key comparisons.

pub mod cli;
pub mod data;
pub mod run;
