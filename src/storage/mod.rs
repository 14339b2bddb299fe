//! # Family Store Trait
//!
//! The contract between the data-entry surface and whatever holds the
//! member/relation collections. The engine never talks to a store directly:
//! it consumes a [`Snapshot`] (or an index built from one).
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | In-memory, for embedding and tests |

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::model::*;
use crate::{Error, RelationshipEngine, Result};

pub use memory::MemoryStore;

// ============================================================================
// Attachments
// ============================================================================

/// Which end of the new edge the new member takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeRole {
    /// New member is the parent of the anchor.
    ParentOfAnchor,
    /// New member is the child of the anchor.
    ChildOfAnchor,
    /// New member is married to the anchor.
    SpouseOfAnchor,
}

/// How a newly added member relates to an existing anchor member.
///
/// Only direct links create an edge. The rest name a derived relationship:
/// they set the generation hint and nothing else. A stored PARENT edge always
/// joins adjacent generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attachment {
    Parent,
    Child,
    Sibling,
    Grandparent,
    Grandchild,
    Spouse,
    SpouseParent,
    SpouseSibling,
    ChildSpouse,
    PaternalParentSibling,
    MaternalParentSibling,
    ElderParentSibling,
    SiblingChild,
    MaternalSiblingChild,
    CoParentInLaw,
    SpouseExtended,
}

impl Attachment {
    pub const ALL: [Attachment; 16] = [
        Attachment::Parent,
        Attachment::Child,
        Attachment::Sibling,
        Attachment::Grandparent,
        Attachment::Grandchild,
        Attachment::Spouse,
        Attachment::SpouseParent,
        Attachment::SpouseSibling,
        Attachment::ChildSpouse,
        Attachment::PaternalParentSibling,
        Attachment::MaternalParentSibling,
        Attachment::ElderParentSibling,
        Attachment::SiblingChild,
        Attachment::MaternalSiblingChild,
        Attachment::CoParentInLaw,
        Attachment::SpouseExtended,
    ];

    /// Generation of the new member relative to the anchor (negative = older).
    pub fn generation_offset(self) -> i32 {
        use Attachment::*;
        match self {
            Grandparent => -2,
            Parent | SpouseParent | PaternalParentSibling | MaternalParentSibling
            | ElderParentSibling => -1,
            Sibling | Spouse | SpouseSibling | CoParentInLaw | SpouseExtended => 0,
            Child | ChildSpouse | SiblingChild | MaternalSiblingChild => 1,
            Grandchild => 2,
        }
    }

    /// The single edge stored alongside the new member, if any.
    pub fn edge(self) -> Option<EdgeRole> {
        match self {
            Attachment::Parent => Some(EdgeRole::ParentOfAnchor),
            Attachment::Child => Some(EdgeRole::ChildOfAnchor),
            Attachment::Spouse => Some(EdgeRole::SpouseOfAnchor),
            _ => None,
        }
    }

    /// `(from, to, type)` of the edge between `new` and `anchor`.
    pub fn relation_between(self, new: MemberId, anchor: MemberId) -> Option<(MemberId, MemberId, RelationType)> {
        self.edge().map(|role| match role {
            EdgeRole::ParentOfAnchor => (new, anchor, RelationType::Parent),
            EdgeRole::ChildOfAnchor => (anchor, new, RelationType::Parent),
            EdgeRole::SpouseOfAnchor => (anchor, new, RelationType::Spouse),
        })
    }
}

// ============================================================================
// FamilyStore Trait
// ============================================================================

/// Member/relation CRUD.
///
/// Deleting a member always cascades to every relation touching it, so a
/// snapshot never carries edges to a member the store has forgotten.
pub trait FamilyStore: Send + Sync {
    // ========================================================================
    // Members
    // ========================================================================

    /// Create a member with an explicit generation hint.
    fn add_member(&self, draft: MemberDraft, generation: i32) -> Result<MemberId>;

    /// Create a member next to `anchor`, together with the edge the
    /// attachment implies.
    ///
    /// Default: two separate writes. Stores that can should override this to
    /// make the pair atomic.
    fn add_member_related(
        &self,
        draft: MemberDraft,
        anchor: MemberId,
        attachment: Attachment,
    ) -> Result<MemberId> {
        let base = self
            .get_member(anchor)
            .ok_or_else(|| Error::NotFound(format!("Member {anchor}")))?;
        let id = self.add_member(draft, base.generation + attachment.generation_offset())?;
        if let Some((from, to, rel_type)) = attachment.relation_between(id, anchor) {
            self.add_relation(from, to, rel_type)?;
        }
        Ok(id)
    }

    fn get_member(&self, id: MemberId) -> Option<Member>;

    /// Replace an existing member's fields. The id must already exist.
    fn update_member(&self, member: Member) -> Result<()>;

    /// Delete a member and every relation touching it. Returns true if it existed.
    fn delete_member(&self, id: MemberId) -> Result<bool>;

    // ========================================================================
    // Relations
    // ========================================================================

    /// Create an edge. Both endpoints must exist; unknown types are rejected.
    fn add_relation(&self, from: MemberId, to: MemberId, rel_type: RelationType) -> Result<RelId>;

    fn delete_relation(&self, id: RelId) -> Result<bool>;

    /// Every relation with `id` at either end.
    fn relations_of(&self, id: MemberId) -> Vec<Relation>;

    // ========================================================================
    // Views
    // ========================================================================

    fn member_count(&self) -> usize;

    fn relation_count(&self) -> usize;

    /// Consistent copy of both collections.
    fn snapshot(&self) -> Snapshot;

    fn members(&self) -> Vec<Member> {
        self.snapshot().members
    }

    fn relations(&self) -> Vec<Relation> {
        self.snapshot().relations
    }

    /// Engine over the current contents.
    ///
    /// Default: rebuild the index from a fresh snapshot on every call.
    fn engine(&self) -> RelationshipEngine {
        RelationshipEngine::from_snapshot(&self.snapshot())
    }
}
