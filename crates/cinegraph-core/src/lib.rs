//! cinegraph-core: Shared types, configuration, and error handling for Cinegraph.
//!
//! This crate provides the foundational types used across all Cinegraph components:
//! - Node types (Person, Movie) projected out of the movie graph
//! - Relationship types (ActedIn, Follows, etc.) and the traversals over them
//! - Case-insensitive key filters for the top-level listings
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod filter;
pub mod types;

pub use crate::config::Settings;
pub use error::CinegraphError;
pub use filter::KeyFilter;
pub use types::{Direction, Label, Movie, Node, Person, Relationship, Traversal};
