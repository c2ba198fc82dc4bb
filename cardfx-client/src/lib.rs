//! # cardfx Client
//!
//! Settlement service and HTTP adapter for the card rate provider.
//!
//! ## Architecture
//!
//! - `service` - Application service (orchestrates settlement lookups)
//! - `mastercard` - HTTP adapter for the provider's endpoints
//! - `wire` - serde types for the provider's JSON envelope and payloads
//!
//! The service is generic over `P: RateProvider`, allowing the HTTP
//! adapter to be swapped for a test double.

pub mod mastercard;
pub mod service;
mod wire;


pub use mastercard::MastercardClient;
pub use service::SettlementService;
