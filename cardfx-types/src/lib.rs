//! # cardfx Types
//!
//! Domain types and port traits for the card settlement conversion client.
//! This crate has ZERO external IO dependencies - only data structures,
//! the date-resolution rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types (DateIntent, SettlementRequest, RateQuote)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Domain and provider error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::date::{self, DateIntent, ResolvedDate, PROVIDER_DATE_FORMAT};
pub use domain::settlement::{RateQuote, SettlementRequest, SettlementResult};
pub use error::{DomainError, ProviderError, SettleError};
pub use ports::RateProvider;
