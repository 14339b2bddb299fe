//! Family index: constant-time adjacency over one snapshot.
//!
//! Built in a single pass over the relations. Nothing is validated: self
//! loops, cycles and edges to missing members are kept exactly as given.
//! Duplicate edges collapse so each adjacency list behaves as a set.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::*;

/// Adjacency list. Most members have at most two parents and one spouse.
pub type Adjacent = SmallVec<[MemberId; 2]>;

const EMPTY: &[MemberId] = &[];

/// Read-only adjacency maps for one (members, relations) snapshot.
#[derive(Debug, Clone, Default)]
pub struct FamilyIndex {
    members: HashMap<MemberId, Member>,
    parents: HashMap<MemberId, Adjacent>,
    children: HashMap<MemberId, Adjacent>,
    spouses: HashMap<MemberId, Adjacent>,
    relation_count: usize,
}

impl FamilyIndex {
    /// Build the index. Pure function of its inputs.
    pub fn build(members: &[Member], relations: &[Relation]) -> Self {
        let mut index = Self {
            members: members.iter().map(|m| (m.id, m.clone())).collect(),
            ..Self::default()
        };

        let mut dangling = 0usize;
        for rel in relations {
            match rel.rel_type {
                RelationType::Parent => {
                    push_unique(index.parents.entry(rel.to_id).or_default(), rel.from_id);
                    push_unique(index.children.entry(rel.from_id).or_default(), rel.to_id);
                }
                RelationType::Spouse => {
                    push_unique(index.spouses.entry(rel.from_id).or_default(), rel.to_id);
                    push_unique(index.spouses.entry(rel.to_id).or_default(), rel.from_id);
                }
                RelationType::Unknown => continue,
            }
            index.relation_count += 1;
            if !index.exists(rel.from_id) || !index.exists(rel.to_id) {
                dangling += 1;
            }
        }

        if dangling > 0 {
            tracing::warn!(dangling, "relations reference members missing from the snapshot");
        }
        tracing::debug!(
            members = index.members.len(),
            relations = index.relation_count,
            "family index built"
        );
        index
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self::build(&snapshot.members, &snapshot.relations)
    }

    pub fn exists(&self, id: MemberId) -> bool {
        self.members.contains_key(&id)
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    pub fn gender_of(&self, id: MemberId) -> Option<Gender> {
        self.members.get(&id).map(|m| m.gender)
    }

    /// Parents as recorded, including ids with no member behind them.
    pub fn parents_of(&self, id: MemberId) -> &[MemberId] {
        self.parents.get(&id).map_or(EMPTY, |v| v.as_slice())
    }

    pub fn children_of(&self, id: MemberId) -> &[MemberId] {
        self.children.get(&id).map_or(EMPTY, |v| v.as_slice())
    }

    pub fn spouses_of(&self, id: MemberId) -> &[MemberId] {
        self.spouses.get(&id).map_or(EMPTY, |v| v.as_slice())
    }

    pub fn is_spouse(&self, a: MemberId, b: MemberId) -> bool {
        self.spouses_of(a).contains(&b)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Typed relations kept (unknown types excluded).
    pub fn relation_count(&self) -> usize {
        self.relation_count
    }
}

fn push_unique(list: &mut Adjacent, id: MemberId) {
    if !list.contains(&id) {
        list.push(id);
    }
}
