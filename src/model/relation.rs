//! Relation (edge) in the family graph.

use serde::{Deserialize, Serialize};
use super::MemberId;

/// Opaque relation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RelId(pub u64);

impl std::fmt::Display for RelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The only two primitive edge types ever stored.
///
/// Sibling, uncle, in-law and the rest are derived at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelationType {
    /// Directed, parent → child.
    Parent,
    /// Undirected; endpoint order carries no meaning.
    Spouse,
    /// Any type this build does not understand. Ignored by the index.
    #[serde(other)]
    Unknown,
}

impl RelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Parent => "PARENT",
            RelationType::Spouse => "SPOUSE",
            RelationType::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored edge between two members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub id: RelId,
    pub from_id: MemberId,
    pub to_id: MemberId,
    #[serde(rename = "type")]
    pub rel_type: RelationType,
}

impl Relation {
    pub fn new(id: RelId, from_id: MemberId, to_id: MemberId, rel_type: RelationType) -> Self {
        Self { id, from_id, to_id, rel_type }
    }

    pub fn parent(id: RelId, parent: MemberId, child: MemberId) -> Self {
        Self::new(id, parent, child, RelationType::Parent)
    }

    pub fn spouse(id: RelId, a: MemberId, b: MemberId) -> Self {
        Self::new(id, a, b, RelationType::Spouse)
    }

    pub fn touches(&self, member: MemberId) -> bool {
        self.from_id == member || self.to_id == member
    }

    /// The "other" end of the relation from the given member.
    pub fn other_end(&self, from: MemberId) -> Option<MemberId> {
        if from == self.from_id { Some(self.to_id) }
        else if from == self.to_id { Some(self.from_id) }
        else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_is_absorbed() {
        let rel: Relation = serde_json::from_str(
            r#"{"id":7,"from_id":1,"to_id":2,"type":"GODPARENT"}"#,
        ).unwrap();
        assert_eq!(rel.rel_type, RelationType::Unknown);
    }

    #[test]
    fn test_other_end() {
        let rel = Relation::spouse(RelId(1), MemberId(1), MemberId(2));
        assert_eq!(rel.other_end(MemberId(1)), Some(MemberId(2)));
        assert_eq!(rel.other_end(MemberId(2)), Some(MemberId(1)));
        assert_eq!(rel.other_end(MemberId(3)), None);
        assert!(rel.touches(MemberId(2)));
    }
}
