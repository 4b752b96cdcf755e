//! Core domain types and indicator logic.

pub mod analysis;
pub mod correlation;
pub mod error;
pub mod indicator;
pub mod price_series;
