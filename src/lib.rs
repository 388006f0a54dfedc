//! Document Search Gateway Library
//!
//! This library crate defines the core modules that make up the gateway service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The gateway is composed of four loosely coupled subsystems:
//!
//! - **`engine`**: The search engine client boundary. Defines the `SearchEngine`
//!   trait and the Elasticsearch-backed implementation that issues bulk-index and
//!   query calls over HTTP, plus the connect-with-retry readiness gate.
//! - **`ingestion`**: The document intake pipeline. Validates submitted documents,
//!   assigns identifiers and creation timestamps, and commits each batch as a
//!   single bulk write.
//! - **`search`**: The query pipeline. Turns free-text queries plus pagination
//!   parameters into fuzzy multi-field engine queries and projects raw hits into
//!   the stable response contract.
//! - **`config`**: Environment-derived runtime settings (engine URL, bind address).

pub mod config;
pub mod engine;
pub mod ingestion;
pub mod response;
pub mod search;
