//! In-process movie graph for tests and local development.
//!
//! Mirrors the statements in [`crate::queries`]: keys are compared
//! lowercased, filtered listings yield one pass over the nodes per filter
//! entry, and rows come back in insertion order.

use std::collections::HashSet;

use async_trait::async_trait;
use cinegraph_core::{Direction, KeyFilter, Label, Movie, Node, Person, Relationship, Traversal};

use crate::client::GraphError;
use crate::store::MovieStore;

/// A stored, directed edge between two node keys.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Edge {
    relationship: Relationship,
    start: String,
    end: String,
}

/// An immutable in-memory graph built up front with the `with_*` methods.
#[derive(Debug, Default)]
pub struct MemoryStore {
    people: Vec<Person>,
    movies: Vec<Movie>,
    edges: Vec<Edge>,
    failing: HashSet<Relationship>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, name: &str, born: Option<i64>) -> Self {
        self.people.push(Person::new(name, born));
        self
    }

    pub fn with_movie(mut self, title: &str, released: Option<i64>, tagline: Option<&str>) -> Self {
        self.movies
            .push(Movie::new(title, released, tagline.map(str::to_string)));
        self
    }

    /// Add `(start)-[:relationship]->(end)`, keyed by the exact stored
    /// name or title of each end.
    pub fn with_edge(mut self, start: &str, relationship: Relationship, end: &str) -> Self {
        self.edges.push(Edge {
            relationship,
            start: start.to_string(),
            end: end.to_string(),
        });
        self
    }

    /// Make every traversal over `relationship` fail as if the store
    /// connection had dropped.
    pub fn with_failing(mut self, relationship: Relationship) -> Self {
        self.failing.insert(relationship);
        self
    }

    fn nodes_with_key<'a>(
        &'a self,
        label: Label,
        key: &'a str,
    ) -> Box<dyn Iterator<Item = Node> + 'a> {
        match label {
            Label::Person => Box::new(
                self.people
                    .iter()
                    .filter(move |p| p.name == key)
                    .cloned()
                    .map(Node::Person),
            ),
            Label::Movie => Box::new(
                self.movies
                    .iter()
                    .filter(move |m| m.title == key)
                    .cloned()
                    .map(Node::Movie),
            ),
        }
    }
}

/// Rows of a listing: every node, or one pass per filter entry.
fn list<T: Clone>(nodes: &[T], filter: &KeyFilter, key: impl Fn(&T) -> &str) -> Vec<T> {
    match filter {
        KeyFilter::All => nodes.to_vec(),
        KeyFilter::AnyOf(values) => values
            .iter()
            .flat_map(|value| {
                nodes
                    .iter()
                    .filter(|n| key(*n).to_lowercase() == *value)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect(),
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn people(&self, filter: &KeyFilter) -> Result<Vec<Person>, GraphError> {
        Ok(list(&self.people, filter, |p| p.name.as_str()))
    }

    async fn movies(&self, filter: &KeyFilter) -> Result<Vec<Movie>, GraphError> {
        Ok(list(&self.movies, filter, |m| m.title.as_str()))
    }

    async fn traverse(&self, traversal: Traversal, key: &str) -> Result<Vec<Node>, GraphError> {
        if self.failing.contains(&traversal.relationship) {
            return Err(GraphError::Connection(format!(
                "connection lost while traversing {traversal}"
            )));
        }

        let key = key.to_lowercase();
        let anchor = traversal.anchor();
        let target = traversal.target();

        let mut out = Vec::new();
        for edge in self
            .edges
            .iter()
            .filter(|e| e.relationship == traversal.relationship)
        {
            let (near, far) = match traversal.direction {
                Direction::Outgoing => (&edge.start, &edge.end),
                Direction::Incoming => (&edge.end, &edge.start),
            };
            if near.to_lowercase() != key {
                continue;
            }
            // One row per matching anchor node, as MATCH would produce.
            let anchors = self.nodes_with_key(anchor, near).count();
            for _ in 0..anchors {
                out.extend(self.nodes_with_key(target, far));
            }
        }
        Ok(out)
    }
}
