//! Search Service Module
//!
//! The query side of the gateway: free text in, ranked documents out.
//!
//! ## Overview
//! This module translates a client query plus optional pagination parameters
//! into a structured fuzzy multi-field engine query, executes it, and reshapes
//! the engine's raw result into the stable response contract.
//!
//! ## Responsibilities
//! - **Validation**: A query string must be present and non-empty; pagination
//!   values that fail to parse fall back to documented defaults.
//! - **Query construction**: A `multi_match` over `title` and `content` with a
//!   fixed fuzziness and minimum-should-match policy.
//! - **Projection**: Each raw hit payload is strictly decoded into a
//!   `DocumentView`; a hit that cannot be decoded is dropped, never fatal.
//!
//! ## Submodules
//! - **`query`**: Query-body construction, pagination defaulting, hit projection.
//! - **`handlers`**: HTTP request handler for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod query;
pub mod types;
