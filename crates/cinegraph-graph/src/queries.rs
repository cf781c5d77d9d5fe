//! Read operations and Cypher query builder for the movie graph.
//!
//! Labels and relationship types come from closed enums and are formatted
//! into the statement text. Names and titles supplied by clients are only
//! ever bound as parameters.

use async_trait::async_trait;
use neo4rs::{query, Row};

use cinegraph_core::{Direction, KeyFilter, Label, Movie, Node, Person, Traversal};

use crate::client::{GraphClient, GraphError};
use crate::store::MovieStore;

// ── Cypher Builders ──────────────────────────────────────────────

/// Projection of a node bound to `n` into the column names the row
/// decoders expect.
fn return_clause(label: Label) -> &'static str {
    match label {
        Label::Person => "RETURN n.name AS name, n.born AS born",
        Label::Movie => "RETURN n.title AS title, n.released AS released, n.tagline AS tagline",
    }
}

/// Statement listing every node of `label`, or the nodes whose lowercased
/// key equals one of the `$keys` parameter's entries.
pub fn list_cypher(label: Label, filtered: bool) -> String {
    let ret = return_clause(label);
    if filtered {
        let key = label.key_property();
        format!(
            "UNWIND $keys AS key
             MATCH (n:{label})
             WHERE toLower(n.{key}) = key
             {ret}"
        )
    } else {
        format!(
            "MATCH (n:{label})
             {ret}"
        )
    }
}

/// Statement walking `traversal` from the anchor node matched by `$key`.
pub fn traverse_cypher(traversal: Traversal) -> String {
    let anchor = traversal.anchor();
    let target = traversal.target();
    let rel = traversal.relationship;
    let key = anchor.key_property();
    let pattern = match traversal.direction {
        Direction::Outgoing => format!("(a:{anchor})-[:{rel}]->(n:{target})"),
        Direction::Incoming => format!("(a:{anchor})<-[:{rel}]-(n:{target})"),
    };
    let ret = return_clause(target);
    format!(
        "MATCH {pattern}
         WHERE toLower(a.{key}) = toLower($key)
         {ret}"
    )
}

// ── Row Decoding ─────────────────────────────────────────────────

fn decode_err(label: Label, column: &str, e: impl std::fmt::Display) -> GraphError {
    GraphError::Decode {
        label: label.to_string(),
        reason: format!("column {column}: {e}"),
    }
}

pub(crate) fn person_from_row(row: &Row) -> Result<Person, GraphError> {
    let name: String = row
        .get("name")
        .map_err(|e| decode_err(Label::Person, "name", e))?;
    let born: Option<i64> = row
        .get("born")
        .map_err(|e| decode_err(Label::Person, "born", e))?;
    Ok(Person { name, born })
}

pub(crate) fn movie_from_row(row: &Row) -> Result<Movie, GraphError> {
    let title: String = row
        .get("title")
        .map_err(|e| decode_err(Label::Movie, "title", e))?;
    let released: Option<i64> = row
        .get("released")
        .map_err(|e| decode_err(Label::Movie, "released", e))?;
    let tagline: Option<String> = row
        .get("tagline")
        .map_err(|e| decode_err(Label::Movie, "tagline", e))?;
    Ok(Movie {
        title,
        released,
        tagline,
    })
}

fn node_from_row(label: Label, row: &Row) -> Result<Node, GraphError> {
    match label {
        Label::Person => person_from_row(row).map(Node::Person),
        Label::Movie => movie_from_row(row).map(Node::Movie),
    }
}

// ── Store Implementation ─────────────────────────────────────────

impl GraphClient {
    async fn list_rows(&self, label: Label, filter: &KeyFilter) -> Result<Vec<Row>, GraphError> {
        let q = if filter.is_all() {
            query(&list_cypher(label, false))
        } else {
            let keys = filter.values();
            if keys.is_empty() {
                return Ok(Vec::new());
            }
            query(&list_cypher(label, true)).param("keys", keys.to_vec())
        };

        let rows = self.query_rows(q).await?;
        tracing::debug!(
            label = %label,
            filtered = !filter.is_all(),
            keys = filter.values().len(),
            rows = rows.len(),
            "Listed nodes"
        );
        Ok(rows)
    }
}

#[async_trait]
impl MovieStore for GraphClient {
    async fn people(&self, filter: &KeyFilter) -> Result<Vec<Person>, GraphError> {
        let rows = self.list_rows(Label::Person, filter).await?;
        rows.iter().map(person_from_row).collect()
    }

    async fn movies(&self, filter: &KeyFilter) -> Result<Vec<Movie>, GraphError> {
        let rows = self.list_rows(Label::Movie, filter).await?;
        rows.iter().map(movie_from_row).collect()
    }

    async fn traverse(&self, traversal: Traversal, key: &str) -> Result<Vec<Node>, GraphError> {
        let q = query(&traverse_cypher(traversal)).param("key", key.to_string());

        let rows = self.query_rows(q).await?;
        tracing::debug!(%traversal, key, rows = rows.len(), "Traversed relationship");

        let target = traversal.target();
        rows.iter().map(|row| node_from_row(target, row)).collect()
    }
}
