//! # kinship: Family Tree Relationship Resolution
//!
//! Build a family tree from two primitive edges (PARENT, SPOUSE) and ask what
//! one member is to another, answered with a side- and gender-specific
//! kinship term rather than a generic "uncle" or "cousin".
//!
//! ## Design Principles
//!
//! 1. **Two stored edges**: only PARENT and SPOUSE are ground truth; every
//!    other relationship is derived at query time
//! 2. **Snapshot engines**: a `RelationshipEngine` is an immutable view over
//!    one (members, relations) snapshot; rebuild it when the data changes
//! 3. **Total queries**: unknown ids, cycles and distant relatives degrade to
//!    labels, never errors
//! 4. **Swappable vocabulary**: the finder and classifier produce a
//!    structural `Kinship`; a `Vocabulary` table turns it into a word
//!
//! ## Quick Start
//!
//! ```rust
//! use kinship::{Gender, Member, MemberId, Relation, RelId, RelationshipEngine};
//!
//! let members = vec![
//!     Member::new(MemberId(1), "Ram", Gender::Male),
//!     Member::new(MemberId(2), "Sita", Gender::Female),
//!     Member::new(MemberId(3), "Shyam", Gender::Male),
//! ];
//! let relations = vec![
//!     Relation::spouse(RelId(1), MemberId(1), MemberId(2)),
//!     Relation::parent(RelId(2), MemberId(1), MemberId(3)),
//! ];
//!
//! let engine = RelationshipEngine::new(&members, &relations);
//! assert_eq!(engine.find_relationship(MemberId(3), MemberId(1)), "बुबा");
//! assert_eq!(engine.find_relationship(MemberId(3), MemberId(2)), "आमा");
//! assert_eq!(engine.find_relationship(MemberId(1), MemberId(3)), "छोरा");
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod index;
pub mod finder;
pub mod classify;
pub mod storage;
pub mod export;

use std::sync::Arc;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Member, MemberDraft, MemberId, Gender,
    Relation, RelationType, RelId,
    KinshipPath, PathOutcome, Seniority, Side, SpouseHops,
    Kinship, Snapshot,
};

// ============================================================================
// Re-exports: Engine parts
// ============================================================================

pub use index::FamilyIndex;
pub use finder::{find_path, EngineConfig, PathFinder, TieBreak, DEFAULT_MAX_DEPTH};
pub use classify::{classify, classify_path, NepaliVocabulary, Vocabulary};

// ============================================================================
// Re-exports: Storage
// ============================================================================

pub use storage::{Attachment, EdgeRole, FamilyStore, MemoryStore};

// ============================================================================
// Relationship Engine
// ============================================================================

/// Everything one query produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: PathOutcome,
    pub kinship: Kinship,
    pub label: &'static str,
}

/// The single entry point for relationship queries.
///
/// Holds a shared, read-only [`FamilyIndex`], so an engine is cheap to clone
/// and safe to query from many threads.
#[derive(Debug, Clone)]
pub struct RelationshipEngine<V: Vocabulary = NepaliVocabulary> {
    index: Arc<FamilyIndex>,
    config: EngineConfig,
    vocabulary: V,
}

impl RelationshipEngine<NepaliVocabulary> {
    /// Build an engine over one (members, relations) snapshot.
    pub fn new(members: &[Member], relations: &[Relation]) -> Self {
        Self::from_index(Arc::new(FamilyIndex::build(members, relations)))
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self::new(&snapshot.members, &snapshot.relations)
    }

    /// Reuse an index that was already built for this snapshot.
    pub fn from_index(index: Arc<FamilyIndex>) -> Self {
        Self { index, config: EngineConfig::default(), vocabulary: NepaliVocabulary }
    }
}

impl<V: Vocabulary> RelationshipEngine<V> {
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Same index and config, different term table.
    pub fn with_vocabulary<W: Vocabulary>(self, vocabulary: W) -> RelationshipEngine<W> {
        RelationshipEngine { index: self.index, config: self.config, vocabulary }
    }

    /// What `b` is to `a`, as a term from the engine's vocabulary.
    ///
    /// Total: `(x, x)` is always the self term, and unknown ids give the
    /// "no relation" term.
    pub fn find_relationship(&self, a: MemberId, b: MemberId) -> &'static str {
        self.resolve(a, b).label
    }

    /// What `b` is to `a`, as a structural kinship.
    pub fn kinship(&self, a: MemberId, b: MemberId) -> Kinship {
        let outcome = self.find_path(a, b);
        self.classify_outcome(&outcome, b)
    }

    /// Path, kinship and label for one query.
    pub fn resolve(&self, a: MemberId, b: MemberId) -> Resolution {
        let outcome = self.find_path(a, b);
        let kinship = self.classify_outcome(&outcome, b);
        let label = self.vocabulary.term(&kinship);
        tracing::debug!(%a, %b, %kinship, label, "relationship resolved");
        Resolution { outcome, kinship, label }
    }

    /// Structural path only, without classification.
    pub fn find_path(&self, a: MemberId, b: MemberId) -> PathOutcome {
        PathFinder::new(&self.index, self.config).find(a, b)
    }

    pub fn index(&self) -> &FamilyIndex {
        &self.index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn classify_outcome(&self, outcome: &PathOutcome, target: MemberId) -> Kinship {
        match outcome {
            PathOutcome::Found(_) => match self.index.gender_of(target) {
                Some(gender) => classify(outcome, gender),
                None => Kinship::NotRelated,
            },
            // Gender is irrelevant for the sentinels.
            _ => classify(outcome, Gender::Male),
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors from the store and export surfaces. Relationship queries never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
