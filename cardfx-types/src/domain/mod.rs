//! Pure domain types and rules.
//!
//! Nothing in this module performs IO; the current date is always injected
//! by the caller so every function stays deterministic.

pub mod date;
pub mod settlement;

pub use date::{DateIntent, ResolvedDate};
pub use settlement::{RateQuote, SettlementRequest, SettlementResult};
