//! GraphQL query resolvers.

use async_graphql::{Context, Object, Result};
use cinegraph_core::KeyFilter;

use super::types::{store, Movie, Person};

/// Root query type for the GraphQL schema.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List people. With a non-empty `names`, only people whose name matches
    /// one of the entries, ignoring case.
    async fn people(
        &self,
        ctx: &Context<'_>,
        names: Option<Vec<Option<String>>>,
    ) -> Result<Vec<Person>> {
        let filter = KeyFilter::from_input(names);
        let people = store(ctx)?.people(&filter).await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to list people");
            e
        })?;
        Ok(people.into_iter().map(Person::from).collect())
    }

    /// List movies. With a non-empty `titles`, only movies whose title matches
    /// one of the entries, ignoring case.
    async fn movies(
        &self,
        ctx: &Context<'_>,
        titles: Option<Vec<Option<String>>>,
    ) -> Result<Vec<Movie>> {
        let filter = KeyFilter::from_input(titles);
        let movies = store(ctx)?.movies(&filter).await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to list movies");
            e
        })?;
        Ok(movies.into_iter().map(Movie::from).collect())
    }
}
