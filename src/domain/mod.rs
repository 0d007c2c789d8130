//! Domain modules organized as vertical slices.
//!
//! Each payload sub-module contains:
//! - `mod.rs`: Rich domain types (validated, display-ready)
//! - `wire.rs`: Raw serde structs matching the service's JSON
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `client.rs`: Sub-client with the HTTP call for that endpoint
//!
//! `forecast` holds the pure transforms from a prediction to display cards.

pub mod forecast;
pub mod history;
pub mod prediction;
pub mod validation;
