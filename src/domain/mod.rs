//! Domain modules organized as vertical slices.
//!
//! Each upstream-backed sub-module contains (`payment` is a table only):
//! - `mod.rs`: Rich domain types and fixed lookup tables
//! - `wire.rs`: Raw serde structs matching upstream requests/responses
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `client.rs`: Sub-client with HTTP methods

pub mod market;
pub mod order;
pub mod payment;
pub mod price;
