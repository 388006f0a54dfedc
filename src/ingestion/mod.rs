//! Ingestion Service Module
//!
//! Handles the intake of client-submitted documents into the search index.
//!
//! ## Workflow
//! 1. **Validation**: The request body must be a JSON array of `{title, content}`
//!    submissions; anything else is rejected before any work happens.
//! 2. **Staging**: Each submission gets a fresh unique identifier and a UTC
//!    creation timestamp, producing the canonical `Document`.
//! 3. **Commit**: The whole batch goes to the engine in exactly one bulk write;
//!    the call's outcome is the outcome of the batch.

pub mod handlers;
pub mod pipeline;
pub mod types;
