//! Search Engine Client Module
//!
//! The boundary between the gateway and the external full-text search engine.
//!
//! ## Core Concepts
//! - **Abstraction**: The `SearchEngine` trait is the single seam both pipelines
//!   depend on, so tests can substitute a fake engine for the real one.
//! - **Transport**: `ElasticClient` speaks the Elasticsearch REST API over HTTP
//!   (`_bulk` for batched writes, `_search` for queries) against a fixed index.
//! - **Readiness**: Connection establishment retries on a fixed interval, without
//!   bound, before the service starts accepting requests.
//!
//! ## Submodules
//! - **`client`**: The `SearchEngine` trait and the reqwest-backed implementation.
//! - **`error`**: The engine-boundary error taxonomy.
//! - **`types`**: Raw wire types for decoding engine query responses.

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;
