//! GraphQL schema definition.
//!
//! - [`types`] - Person and Movie, with their lazily resolved relationship fields
//! - [`query`] - Top-level `people` and `movies` listings

mod query;
mod types;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use cinegraph_graph::SharedStore;

pub use query::QueryRoot;
pub use types::*;

/// The GraphQL schema type for the Cinegraph server.
pub type MovieSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Create a new GraphQL schema reading from the given store.
///
/// The store is the only state the resolvers share. Nothing fetched through
/// it is kept between requests.
pub fn build_schema(store: SharedStore) -> MovieSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}
