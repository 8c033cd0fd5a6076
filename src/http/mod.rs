//! HTTP client layer: `RwaHttp`, one method per upstream endpoint.

pub mod client;

pub use client::RwaHttp;
