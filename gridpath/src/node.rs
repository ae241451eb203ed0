//! Search nodes and their canonical keys

use crate::error::SearchError;
use crate::position::{Direction, Position};
use std::fmt;
use std::hash::Hash;

/// A state the search engine can explore
///
/// Identity is the value itself: two nodes that compare equal are the same
/// node no matter when or how they were discovered. Implementors must keep
/// `Eq`/`Hash` consistent with [`position`](SearchNode::position) plus
/// [`aux_fields`](SearchNode::aux_fields), so that [`NodeKey`] is a faithful
/// serialization of the identity.
pub trait SearchNode: Clone + Eq + Hash {
    /// Grid position of this node
    fn position(&self) -> Position;

    /// Auxiliary state beyond the position, as `(field, value)` pairs
    fn aux_fields(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Canonical key of this node
    fn key(&self) -> NodeKey {
        NodeKey::of(self)
    }
}

impl SearchNode for Position {
    fn position(&self) -> Position {
        *self
    }
}

/// Auxiliary per-node state carried alongside a position
///
/// `()` means "position only"; [`Direction`] serializes as `facing`.
pub trait AuxState: Clone + Eq + Hash {
    fn fields(&self) -> Vec<(&'static str, String)>;
}

impl AuxState for () {
    fn fields(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

impl AuxState for Direction {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("facing", self.to_string())]
    }
}

/// A position paired with auxiliary state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node<S = ()> {
    pub pos: Position,
    pub state: S,
}

impl<S> Node<S> {
    pub const fn new(pos: Position, state: S) -> Self {
        Self { pos, state }
    }
}

impl<S: AuxState> SearchNode for Node<S> {
    fn position(&self) -> Position {
        self.pos
    }

    fn aux_fields(&self) -> Vec<(&'static str, String)> {
        self.state.fields()
    }
}

/// A node together with its known or tentative cost from the start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored<N> {
    pub node: N,
    pub score: u64,
}

impl<N> Scored<N> {
    pub const fn new(node: N, score: u64) -> Self {
        Self { node, score }
    }
}

/// Canonical textual key of a node
///
/// Fields are sorted by name and joined with `;`, each written as
/// `name:value`. The position is the field `pos`, written `pos:{row,col}`.
/// A node facing east at row 13, column 1 has the key
/// `facing:east;pos:{13,1}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(String);

const POS_FIELD: &str = "pos";

impl NodeKey {
    /// Serialize a node into its canonical key
    pub fn of<N: SearchNode + ?Sized>(node: &N) -> Self {
        let pos = node.position();
        let mut fields = node.aux_fields();
        fields.push((POS_FIELD, format!("{{{},{}}}", pos.row, pos.col)));
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let key = fields
            .iter()
            .map(|(name, value)| format!("{name}:{value}"))
            .collect::<Vec<_>>()
            .join(";");
        Self(key)
    }

    /// Wrap an already serialized key without validating it
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the position segment of this key
    pub fn position(&self) -> Result<Position, SearchError> {
        let malformed = || SearchError::MalformedNodeKey(self.0.clone());

        let segment = self
            .0
            .split(';')
            .find_map(|field| field.strip_prefix("pos:"))
            .ok_or_else(malformed)?;
        let (row, col) = segment
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .and_then(|s| s.split_once(','))
            .ok_or_else(malformed)?;

        let row = row.trim().parse().map_err(|_| malformed())?;
        let col = col.trim().parse().map_err(|_| malformed())?;
        Ok(Position::new(row, col))
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
