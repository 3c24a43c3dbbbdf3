//! Indicator implementations.
//!
//! Only the trailing simple moving average is needed; it is computed once
//! per refresh from the fetched history.

pub mod sma;

pub use sma::Sma;
