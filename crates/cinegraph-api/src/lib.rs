//! GraphQL server for the Cinegraph movie graph.
//!
//! This crate exposes people, movies, and the relationships between them
//! over a single `/graphql` endpoint.
//!
//! # Modules
//!
//! - [`schema`] - GraphQL schema definition (node types and query root)
//! - [`server`] - HTTP server implementation

#![deny(clippy::unwrap_used)]

pub mod schema;
pub mod server;

pub use schema::{build_schema, MovieSchema};
