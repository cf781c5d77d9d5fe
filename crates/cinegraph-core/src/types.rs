//! Core domain types for the Cinegraph movie graph.
//!
//! Nodes are transient projections of what the store returned for a single
//! statement. They carry scalar properties only; relationships are resolved
//! on demand by walking a [`Traversal`] from a node's key.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Node Types ────────────────────────────────────────────────────

/// A person in the movie graph, identified by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub born: Option<i64>,
}

impl Person {
    pub fn new(name: impl Into<String>, born: Option<i64>) -> Self {
        Self {
            name: name.into(),
            born,
        }
    }
}

/// A movie in the movie graph, identified by title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub released: Option<i64>,
    pub tagline: Option<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>, released: Option<i64>, tagline: Option<String>) -> Self {
        Self {
            title: title.into(),
            released,
            tagline,
        }
    }
}

/// Union of all node types returned by a traversal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "label")]
pub enum Node {
    Person(Person),
    Movie(Movie),
}

impl Node {
    /// The identity value of this node (a person's name or a movie's title).
    pub fn key(&self) -> &str {
        match self {
            Node::Person(p) => &p.name,
            Node::Movie(m) => &m.title,
        }
    }

    pub fn into_person(self) -> Option<Person> {
        match self {
            Node::Person(p) => Some(p),
            Node::Movie(_) => None,
        }
    }

    pub fn into_movie(self) -> Option<Movie> {
        match self {
            Node::Movie(m) => Some(m),
            Node::Person(_) => None,
        }
    }
}

/// Node label as stored in the graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Label {
    Person,
    Movie,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Person => "Person",
            Label::Movie => "Movie",
        }
    }

    /// The property that identifies nodes of this label.
    pub fn key_property(&self) -> &'static str {
        match self {
            Label::Person => "name",
            Label::Movie => "title",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Relationship Types ────────────────────────────────────────────

/// The type of a stored, directed relationship.
///
/// Every relationship starts at a Person. All but `Follows` end at a Movie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relationship {
    ActedIn,
    Directed,
    Produced,
    Wrote,
    Reviewed,
    Follows,
}

impl Relationship {
    pub const ALL: [Relationship; 6] = [
        Relationship::ActedIn,
        Relationship::Directed,
        Relationship::Produced,
        Relationship::Wrote,
        Relationship::Reviewed,
        Relationship::Follows,
    ];

    /// The relationship type name used in Cypher.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::ActedIn => "ACTED_IN",
            Relationship::Directed => "DIRECTED",
            Relationship::Produced => "PRODUCED",
            Relationship::Wrote => "WROTE",
            Relationship::Reviewed => "REVIEWED",
            Relationship::Follows => "FOLLOWS",
        }
    }

    pub fn start_label(&self) -> Label {
        Label::Person
    }

    pub fn end_label(&self) -> Label {
        match self {
            Relationship::Follows => Label::Person,
            _ => Label::Movie,
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which end of a relationship the traversal starts from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Follow the edge from its start node to its end node.
    Outgoing,
    /// Follow the edge backwards, from its end node to its start node.
    Incoming,
}

/// A relationship walked in one direction, e.g. `Person -[:ACTED_IN]-> Movie`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Traversal {
    pub relationship: Relationship,
    pub direction: Direction,
}

impl Traversal {
    pub const fn outgoing(relationship: Relationship) -> Self {
        Self {
            relationship,
            direction: Direction::Outgoing,
        }
    }

    pub const fn incoming(relationship: Relationship) -> Self {
        Self {
            relationship,
            direction: Direction::Incoming,
        }
    }

    /// Label of the node the traversal starts from.
    pub fn anchor(&self) -> Label {
        match self.direction {
            Direction::Outgoing => self.relationship.start_label(),
            Direction::Incoming => self.relationship.end_label(),
        }
    }

    /// Label of the nodes the traversal yields.
    pub fn target(&self) -> Label {
        match self.direction {
            Direction::Outgoing => self.relationship.end_label(),
            Direction::Incoming => self.relationship.start_label(),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Outgoing => write!(
                f,
                "({})-[:{}]->({})",
                self.anchor(),
                self.relationship,
                self.target()
            ),
            Direction::Incoming => write!(
                f,
                "({})<-[:{}]-({})",
                self.anchor(),
                self.relationship,
                self.target()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_serializes_screaming_snake() {
        let json = serde_json::to_string(&Relationship::ActedIn).unwrap();
        assert_eq!(json, "\"ACTED_IN\"");

        for rel in Relationship::ALL {
            let json = serde_json::to_string(&rel).unwrap();
            assert_eq!(json, format!("\"{}\"", rel.as_str()));
        }
    }

    #[test]
    fn only_follows_ends_at_person() {
        for rel in Relationship::ALL {
            assert_eq!(rel.start_label(), Label::Person);
            let expected = if rel == Relationship::Follows {
                Label::Person
            } else {
                Label::Movie
            };
            assert_eq!(rel.end_label(), expected, "{rel}");
        }
    }

    #[test]
    fn incoming_traversal_swaps_anchor_and_target() {
        let acted_in = Traversal::outgoing(Relationship::ActedIn);
        assert_eq!(acted_in.anchor(), Label::Person);
        assert_eq!(acted_in.target(), Label::Movie);

        let actors = Traversal::incoming(Relationship::ActedIn);
        assert_eq!(actors.anchor(), Label::Movie);
        assert_eq!(actors.target(), Label::Person);

        let followers = Traversal::incoming(Relationship::Follows);
        assert_eq!(followers.anchor(), Label::Person);
        assert_eq!(followers.target(), Label::Person);
    }

    #[test]
    fn traversal_display_reads_like_a_pattern() {
        assert_eq!(
            Traversal::outgoing(Relationship::Wrote).to_string(),
            "(Person)-[:WROTE]->(Movie)"
        );
        assert_eq!(
            Traversal::incoming(Relationship::Directed).to_string(),
            "(Movie)<-[:DIRECTED]-(Person)"
        );
    }

    #[test]
    fn node_key_and_narrowing() {
        let node = Node::Movie(Movie::new("The Matrix", Some(1999), None));
        assert_eq!(node.key(), "The Matrix");
        assert!(node.clone().into_person().is_none());
        assert_eq!(node.into_movie().unwrap().released, Some(1999));

        let node = Node::Person(Person::new("Keanu Reeves", Some(1964)));
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"label\":\"Person\""));
        assert_eq!(node.key(), "Keanu Reeves");
    }

    #[test]
    fn key_property_per_label() {
        assert_eq!(Label::Person.key_property(), "name");
        assert_eq!(Label::Movie.key_property(), "title");
    }
}
