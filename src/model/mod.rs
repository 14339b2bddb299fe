//! # Family Graph Model
//!
//! Plain data types that cross every boundary: store ↔ index ↔ finder ↔
//! classifier ↔ caller.
//!
//! Design rule: this module is pure data. No I/O or locking happens here.

pub mod member;
pub mod relation;
pub mod path;
pub mod kinship;

pub use member::{Member, MemberDraft, MemberId, Gender};
pub use relation::{Relation, RelationType, RelId};
pub use path::{KinshipPath, PathOutcome, Seniority, Side, SpouseHops, Chain, Sides};
pub use kinship::Kinship;

use serde::{Deserialize, Serialize};

/// An immutable view of the tree: the engine's only input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub members: Vec<Member>,
    pub relations: Vec<Relation>,
}

impl Snapshot {
    pub fn new(members: Vec<Member>, relations: Vec<Relation>) -> Self {
        Self { members, relations }
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Drop a member and every relation touching it.
    pub fn without_member(mut self, id: MemberId) -> Self {
        self.members.retain(|m| m.id != id);
        self.relations.retain(|r| !r.touches(id));
        self
    }
}
