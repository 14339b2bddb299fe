//! In-memory family store.
//!
//! This is the reference implementation of `FamilyStore`. Both collections
//! and the adjacency list sit behind one `RwLock`, so every multi-step write
//! (member + edge, cascading delete) is atomic with respect to readers.
//!
//! Every write bumps a revision counter. `engine()` memoizes the family index
//! per revision: repeated queries against unchanged data reuse one index,
//! and any mutation invalidates it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use parking_lot::RwLock;

use crate::index::FamilyIndex;
use crate::model::*;
use crate::{EngineConfig, Error, RelationshipEngine, Result};
use super::{Attachment, FamilyStore};

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory member/relation storage. Cloning yields another handle to the
/// same data.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

struct MemoryInner {
    tables: RwLock<Tables>,
    next_member_id: AtomicU64,
    next_rel_id: AtomicU64,
    revision: AtomicU64,
    /// (revision, index) of the last engine handed out.
    cached_index: RwLock<Option<(u64, Arc<FamilyIndex>)>>,
    config: EngineConfig,
}

#[derive(Default)]
struct Tables {
    members: HashMap<MemberId, Member>,
    relations: HashMap<RelId, Relation>,
    /// member_id → ids of relations touching it
    adjacency: HashMap<MemberId, Vec<RelId>>,
}

impl Tables {
    fn insert_relation(&mut self, rel: Relation) {
        self.adjacency.entry(rel.from_id).or_default().push(rel.id);
        if rel.from_id != rel.to_id {
            self.adjacency.entry(rel.to_id).or_default().push(rel.id);
        }
        self.relations.insert(rel.id, rel);
    }

    fn remove_relation(&mut self, id: RelId) -> Option<Relation> {
        let rel = self.relations.remove(&id)?;
        for end in [rel.from_id, rel.to_id] {
            if let Some(ids) = self.adjacency.get_mut(&end) {
                ids.retain(|rid| *rid != id);
            }
        }
        Some(rel)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Store whose engines use the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            inner: Arc::new(MemoryInner {
                tables: RwLock::new(Tables::default()),
                next_member_id: AtomicU64::new(1),
                next_rel_id: AtomicU64::new(1),
                revision: AtomicU64::new(0),
                cached_index: RwLock::new(None),
                config,
            }),
        }
    }

    /// Seed a store from a snapshot (e.g. an imported backup).
    ///
    /// Relations whose endpoints are missing from the snapshot are dropped.
    /// New ids continue after the largest id seen.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self::from_snapshot_with_config(snapshot, EngineConfig::default())
    }

    /// Seed from a snapshot, with engines built under `config`.
    pub fn from_snapshot_with_config(snapshot: Snapshot, config: EngineConfig) -> Self {
        let store = Self::with_config(config);
        {
            let mut tables = store.inner.tables.write();
            let mut max_member = 0;
            for member in snapshot.members {
                max_member = max_member.max(member.id.0);
                tables.members.insert(member.id, member);
            }
            let mut max_rel = 0;
            let mut dropped = 0usize;
            for rel in snapshot.relations {
                max_rel = max_rel.max(rel.id.0);
                let known = tables.members.contains_key(&rel.from_id)
                    && tables.members.contains_key(&rel.to_id);
                if known && rel.rel_type != RelationType::Unknown {
                    tables.insert_relation(rel);
                } else {
                    dropped += 1;
                }
            }
            if dropped > 0 {
                tracing::warn!(dropped, "relations dropped while seeding store");
            }
            store.inner.next_member_id.store(max_member + 1, Ordering::Relaxed);
            store.inner.next_rel_id.store(max_rel + 1, Ordering::Relaxed);
        }
        store
    }

    /// Current revision. Changes on every successful write, while the write
    /// lock is still held.
    pub fn revision(&self) -> u64 {
        self.inner.revision.load(Ordering::Acquire)
    }

    fn bump(&self) {
        self.inner.revision.fetch_add(1, Ordering::AcqRel);
    }

    fn next_member_id(&self) -> MemberId {
        MemberId(self.inner.next_member_id.fetch_add(1, Ordering::Relaxed))
    }

    fn next_rel_id(&self) -> RelId {
        RelId(self.inner.next_rel_id.fetch_add(1, Ordering::Relaxed))
    }

    fn check_relation(tables: &Tables, from: MemberId, to: MemberId, rel_type: RelationType) -> Result<()> {
        if rel_type == RelationType::Unknown {
            return Err(Error::InvalidInput("relation type must be PARENT or SPOUSE".into()));
        }
        if !tables.members.contains_key(&from) {
            return Err(Error::NotFound(format!("Source member {from}")));
        }
        if !tables.members.contains_key(&to) {
            return Err(Error::NotFound(format!("Target member {to}")));
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FamilyStore impl
// ============================================================================

impl FamilyStore for MemoryStore {
    fn add_member(&self, draft: MemberDraft, generation: i32) -> Result<MemberId> {
        if draft.name.trim().is_empty() {
            return Err(Error::InvalidInput("member name is empty".into()));
        }
        let id = self.next_member_id();
        let mut tables = self.inner.tables.write();
        tables.members.insert(id, draft.into_member(id, generation));
        self.bump();
        Ok(id)
    }

    /// Atomic: the member and its edge appear together or not at all.
    fn add_member_related(
        &self,
        draft: MemberDraft,
        anchor: MemberId,
        attachment: Attachment,
    ) -> Result<MemberId> {
        if draft.name.trim().is_empty() {
            return Err(Error::InvalidInput("member name is empty".into()));
        }
        let mut tables = self.inner.tables.write();
        let base = tables
            .members
            .get(&anchor)
            .ok_or_else(|| Error::NotFound(format!("Member {anchor}")))?;
        let generation = base.generation + attachment.generation_offset();

        let id = self.next_member_id();
        tables.members.insert(id, draft.into_member(id, generation));
        if let Some((from, to, rel_type)) = attachment.relation_between(id, anchor) {
            let rel = Relation::new(self.next_rel_id(), from, to, rel_type);
            tables.insert_relation(rel);
        }
        self.bump();
        drop(tables);

        tracing::debug!(%id, %anchor, ?attachment, generation, "member added");
        Ok(id)
    }

    fn get_member(&self, id: MemberId) -> Option<Member> {
        self.inner.tables.read().members.get(&id).cloned()
    }

    fn update_member(&self, member: Member) -> Result<()> {
        let mut tables = self.inner.tables.write();
        let slot = tables
            .members
            .get_mut(&member.id)
            .ok_or_else(|| Error::NotFound(format!("Member {}", member.id)))?;
        *slot = member;
        self.bump();
        Ok(())
    }

    fn delete_member(&self, id: MemberId) -> Result<bool> {
        let mut tables = self.inner.tables.write();
        if tables.members.remove(&id).is_none() {
            return Ok(false);
        }
        let rel_ids = tables.adjacency.remove(&id).unwrap_or_default();
        let mut cascaded = 0usize;
        for rid in rel_ids {
            if tables.remove_relation(rid).is_some() {
                cascaded += 1;
            }
        }
        self.bump();
        drop(tables);

        tracing::info!(%id, cascaded, "member deleted");
        Ok(true)
    }

    fn add_relation(&self, from: MemberId, to: MemberId, rel_type: RelationType) -> Result<RelId> {
        let mut tables = self.inner.tables.write();
        Self::check_relation(&tables, from, to, rel_type)?;
        let id = self.next_rel_id();
        tables.insert_relation(Relation::new(id, from, to, rel_type));
        self.bump();
        Ok(id)
    }

    fn delete_relation(&self, id: RelId) -> Result<bool> {
        let mut tables = self.inner.tables.write();
        let removed = tables.remove_relation(id).is_some();
        if removed {
            self.bump();
        }
        Ok(removed)
    }

    fn relations_of(&self, id: MemberId) -> Vec<Relation> {
        let tables = self.inner.tables.read();
        tables
            .adjacency
            .get(&id)
            .map(|ids| ids.iter().filter_map(|rid| tables.relations.get(rid).cloned()).collect())
            .unwrap_or_default()
    }

    fn member_count(&self) -> usize {
        self.inner.tables.read().members.len()
    }

    fn relation_count(&self) -> usize {
        self.inner.tables.read().relations.len()
    }

    /// Sorted by id, so equal contents give equal snapshots.
    fn snapshot(&self) -> Snapshot {
        let tables = self.inner.tables.read();
        let mut members: Vec<Member> = tables.members.values().cloned().collect();
        let mut relations: Vec<Relation> = tables.relations.values().cloned().collect();
        members.sort_by_key(|m| m.id);
        relations.sort_by_key(|r| r.id);
        Snapshot { members, relations }
    }

    fn engine(&self) -> RelationshipEngine {
        // Writers bump the revision while holding the write lock, so the
        // revision read under the read lock matches the data read with it.
        let tables = self.inner.tables.read();
        let revision = self.revision();

        if let Some((rev, index)) = self.inner.cached_index.read().as_ref() {
            if *rev == revision {
                return RelationshipEngine::from_index(Arc::clone(index)).with_config(self.inner.config);
            }
        }

        let members: Vec<Member> = tables.members.values().cloned().collect();
        let relations: Vec<Relation> = tables.relations.values().cloned().collect();
        drop(tables);

        let index = Arc::new(FamilyIndex::build(&members, &relations));
        *self.inner.cached_index.write() = Some((revision, Arc::clone(&index)));
        tracing::debug!(revision, "engine index rebuilt");
        RelationshipEngine::from_index(index).with_config(self.inner.config)
    }
}

// ============================================================================
// Tests
// ============================================================================
