//! GraphQL node types.
//!
//! Scalar fields are whatever the statement that produced the node
//! returned. Relationship fields go back to the store each time they are
//! selected, so every nested selection is its own round trip.

use async_graphql::{ComplexObject, Context, Error, Result, SimpleObject};
use async_trait::async_trait;
use cinegraph_core::{self as model, Node, Relationship, Traversal};
use cinegraph_graph::SharedStore;

pub(crate) fn store<'a>(ctx: &Context<'a>) -> Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

/// A node that can load its relationships on demand.
#[async_trait]
pub trait Related: Sync {
    /// The identity value traversals start from.
    fn key(&self) -> &str;

    /// Walk `traversal` from this node.
    ///
    /// A store failure is logged and becomes an error on the calling field
    /// only.
    async fn related(&self, ctx: &Context<'_>, traversal: Traversal) -> Result<Vec<Node>> {
        let store = store(ctx)?;
        store.traverse(traversal, self.key()).await.map_err(|e| {
            tracing::warn!(
                %traversal,
                key = self.key(),
                error = %e,
                "Failed to resolve relationship"
            );
            Error::from(e)
        })
    }
}

fn into_movies(nodes: Vec<Node>) -> Vec<Movie> {
    nodes
        .into_iter()
        .filter_map(Node::into_movie)
        .map(Movie::from)
        .collect()
}

fn into_people(nodes: Vec<Node>) -> Vec<Person> {
    nodes
        .into_iter()
        .filter_map(Node::into_person)
        .map(Person::from)
        .collect()
}

// ── Person ───────────────────────────────────────────────────────

/// A person who acted in, directed, produced, wrote, or reviewed movies.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Person {
    pub name: String,
    pub born: Option<i64>,
}

impl From<model::Person> for Person {
    fn from(p: model::Person) -> Self {
        Self {
            name: p.name,
            born: p.born,
        }
    }
}

impl Related for Person {
    fn key(&self) -> &str {
        &self.name
    }
}

#[ComplexObject]
impl Person {
    /// Movies this person acted in.
    async fn acted_in(&self, ctx: &Context<'_>) -> Result<Option<Vec<Movie>>> {
        let nodes = self
            .related(ctx, Traversal::outgoing(Relationship::ActedIn))
            .await?;
        Ok(Some(into_movies(nodes)))
    }

    /// Movies this person directed.
    async fn directed(&self, ctx: &Context<'_>) -> Result<Option<Vec<Movie>>> {
        let nodes = self
            .related(ctx, Traversal::outgoing(Relationship::Directed))
            .await?;
        Ok(Some(into_movies(nodes)))
    }

    /// Movies this person produced.
    async fn produced(&self, ctx: &Context<'_>) -> Result<Option<Vec<Movie>>> {
        let nodes = self
            .related(ctx, Traversal::outgoing(Relationship::Produced))
            .await?;
        Ok(Some(into_movies(nodes)))
    }

    /// Movies this person wrote.
    async fn wrote(&self, ctx: &Context<'_>) -> Result<Option<Vec<Movie>>> {
        let nodes = self
            .related(ctx, Traversal::outgoing(Relationship::Wrote))
            .await?;
        Ok(Some(into_movies(nodes)))
    }

    /// Movies this person reviewed.
    async fn reviewed(&self, ctx: &Context<'_>) -> Result<Option<Vec<Movie>>> {
        let nodes = self
            .related(ctx, Traversal::outgoing(Relationship::Reviewed))
            .await?;
        Ok(Some(into_movies(nodes)))
    }

    /// People this person follows.
    async fn follows(&self, ctx: &Context<'_>) -> Result<Option<Vec<Person>>> {
        let nodes = self
            .related(ctx, Traversal::outgoing(Relationship::Follows))
            .await?;
        Ok(Some(into_people(nodes)))
    }

    /// People who follow this person.
    async fn followers(&self, ctx: &Context<'_>) -> Result<Option<Vec<Person>>> {
        let nodes = self
            .related(ctx, Traversal::incoming(Relationship::Follows))
            .await?;
        Ok(Some(into_people(nodes)))
    }
}

// ── Movie ────────────────────────────────────────────────────────

/// A movie and the people credited on it.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Movie {
    pub title: String,
    pub released: Option<i64>,
    pub tagline: Option<String>,
}

impl From<model::Movie> for Movie {
    fn from(m: model::Movie) -> Self {
        Self {
            title: m.title,
            released: m.released,
            tagline: m.tagline,
        }
    }
}

impl Related for Movie {
    fn key(&self) -> &str {
        &self.title
    }
}

#[ComplexObject]
impl Movie {
    /// People who acted in this movie.
    async fn actors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Person>>> {
        let nodes = self
            .related(ctx, Traversal::incoming(Relationship::ActedIn))
            .await?;
        Ok(Some(into_people(nodes)))
    }

    /// People who directed this movie.
    async fn directors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Person>>> {
        let nodes = self
            .related(ctx, Traversal::incoming(Relationship::Directed))
            .await?;
        Ok(Some(into_people(nodes)))
    }

    /// People who produced this movie.
    async fn producers(&self, ctx: &Context<'_>) -> Result<Option<Vec<Person>>> {
        let nodes = self
            .related(ctx, Traversal::incoming(Relationship::Produced))
            .await?;
        Ok(Some(into_people(nodes)))
    }

    /// People who wrote this movie.
    async fn writers(&self, ctx: &Context<'_>) -> Result<Option<Vec<Person>>> {
        let nodes = self
            .related(ctx, Traversal::incoming(Relationship::Wrote))
            .await?;
        Ok(Some(into_people(nodes)))
    }

    /// People who reviewed this movie.
    async fn reviewers(&self, ctx: &Context<'_>) -> Result<Option<Vec<Person>>> {
        let nodes = self
            .related(ctx, Traversal::incoming(Relationship::Reviewed))
            .await?;
        Ok(Some(into_people(nodes)))
    }
}
