//! stocklens — technical indicator analysis for historical stock data.
//!
//! Hexagonal architecture: indicator and correlation logic in [`domain`],
//! port traits in [`ports`], concrete implementations in [`adapters`].

pub mod cli;
pub mod domain;
pub mod ports;
pub mod adapters;
