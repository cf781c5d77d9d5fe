//! Cinegraph Graph: Neo4j client for the movie graph.
//!
//! All graph reads flow through the [`MovieStore`] trait. [`GraphClient`]
//! implements it against a live Neo4j server over bolt; [`MemoryStore`]
//! implements it in process for tests and local development.

pub mod client;
pub mod memory;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use memory::MemoryStore;
pub use store::{MovieStore, SharedStore};
