//! Core, DOM-free primitives for the request console.
//!
//! Everything here compiles natively so the whole pipeline can be unit-tested
//! without a browser; the wasm layer only supplies attribute sources, a fetch
//! transport, a clock and output regions.
pub mod config;
pub mod contract;
pub mod fields;
pub mod language;
pub mod pipeline;
pub mod query;
pub mod regions;
pub mod render;
pub mod request;
pub mod transport;
