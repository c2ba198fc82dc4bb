//! Port traits (interfaces for adapters).
//!
//! The settlement service depends on these traits, not on a concrete
//! HTTP client.

mod provider;

pub use provider::RateProvider;
