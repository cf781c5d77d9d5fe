//! The read interface every movie graph backend implements.

use std::sync::Arc;

use async_trait::async_trait;
use cinegraph_core::{KeyFilter, Movie, Node, Person, Traversal};

use crate::client::GraphError;

/// Read access to the movie graph.
///
/// Implementations hold no per-request state. Each call is one round trip
/// to the backing store and returns rows in store traversal order, without
/// deduplication.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// List Person nodes, optionally restricted to the filter's names.
    async fn people(&self, filter: &KeyFilter) -> Result<Vec<Person>, GraphError>;

    /// List Movie nodes, optionally restricted to the filter's titles.
    async fn movies(&self, filter: &KeyFilter) -> Result<Vec<Movie>, GraphError>;

    /// Walk `traversal` from the node whose key matches `key`
    /// case-insensitively, returning the nodes at the other end.
    async fn traverse(&self, traversal: Traversal, key: &str) -> Result<Vec<Node>, GraphError>;
}

/// A store handle shared by every resolver of a schema.
pub type SharedStore = Arc<dyn MovieStore>;
