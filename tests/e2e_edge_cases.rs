//! Edge-case tests: malformed graphs, unknown ids, and depth limits.
//!
//! Queries are total. Nothing here may panic or hang.

use kinship::{
    EngineConfig, FamilyStore, Gender, Kinship, Member, MemberDraft, MemberId, MemoryStore,
    NepaliVocabulary, PathOutcome, Relation, RelationType, RelId, RelationshipEngine,
};

fn man(id: u64) -> Member {
    Member::new(MemberId(id), format!("man-{id}"), Gender::Male)
}

fn woman(id: u64) -> Member {
    Member::new(MemberId(id), format!("woman-{id}"), Gender::Female)
}

fn parent(rid: u64, p: u64, c: u64) -> Relation {
    Relation::parent(RelId(rid), MemberId(p), MemberId(c))
}

// ============================================================================
// 1. Unknown and missing ids
// ============================================================================

#[test]
fn test_unknown_ids() {
    let engine = RelationshipEngine::new(&[man(1)], &[]);
    assert_eq!(engine.find_relationship(MemberId(1), MemberId(999)), NepaliVocabulary::NOT_RELATED);
    assert_eq!(engine.find_relationship(MemberId(999), MemberId(1)), NepaliVocabulary::NOT_RELATED);
    assert_eq!(engine.find_relationship(MemberId(999), MemberId(999)), NepaliVocabulary::SELF);
}

#[test]
fn test_empty_tree() {
    let engine = RelationshipEngine::new(&[], &[]);
    assert_eq!(engine.kinship(MemberId(1), MemberId(2)), Kinship::NotRelated);
    assert_eq!(engine.index().member_count(), 0);
}

#[test]
fn test_disconnected_members() {
    let engine = RelationshipEngine::new(&[man(1), woman(2)], &[]);
    assert_eq!(engine.find_path(MemberId(1), MemberId(2)), PathOutcome::Disconnected);
    assert_eq!(engine.find_relationship(MemberId(1), MemberId(2)), NepaliVocabulary::NOT_RELATED);
}

#[test]
fn test_dangling_relation_is_ignored() {
    // Parent edge from a member that is not in the snapshot.
    let relations = [parent(1, 1, 2), parent(2, 404, 2), parent(3, 1, 3)];
    let engine = RelationshipEngine::new(&[man(1), man(2), man(3)], &relations);
    assert_eq!(engine.find_relationship(MemberId(2), MemberId(1)), "बुबा");
    assert_eq!(engine.find_relationship(MemberId(2), MemberId(3)), "दाजुभाइ");
    assert_eq!(engine.find_relationship(MemberId(2), MemberId(404)), NepaliVocabulary::NOT_RELATED);
}

#[test]
fn test_unknown_relation_type_is_ignored() {
    let relations = [Relation::new(RelId(1), MemberId(1), MemberId(2), RelationType::Unknown)];
    let engine = RelationshipEngine::new(&[man(1), man(2)], &relations);
    assert_eq!(engine.kinship(MemberId(1), MemberId(2)), Kinship::NotRelated);
    assert_eq!(engine.index().relation_count(), 0);
}

// ============================================================================
// 2. Malformed structure
// ============================================================================

#[test]
fn test_parent_cycle_terminates() {
    let relations = [parent(1, 1, 2), parent(2, 2, 1)];
    let engine = RelationshipEngine::new(&[man(1), man(2)], &relations);
    assert!(engine.kinship(MemberId(1), MemberId(2)).is_defined());
    assert!(engine.kinship(MemberId(2), MemberId(1)).is_defined());
}

#[test]
fn test_self_parent_terminates() {
    let relations = [parent(1, 1, 1), parent(2, 1, 2)];
    let engine = RelationshipEngine::new(&[man(1), man(2)], &relations);
    assert_eq!(engine.find_relationship(MemberId(2), MemberId(1)), "बुबा");
    assert_eq!(engine.find_relationship(MemberId(1), MemberId(1)), NepaliVocabulary::SELF);
}

#[test]
fn test_duplicate_edges_collapse() {
    let relations = [parent(1, 1, 2), parent(2, 1, 2), Relation::spouse(RelId(3), MemberId(1), MemberId(3))];
    let engine = RelationshipEngine::new(&[man(1), man(2), woman(3)], &relations);
    assert_eq!(engine.index().parents_of(MemberId(2)), &[MemberId(1)]);
    assert_eq!(engine.find_relationship(MemberId(1), MemberId(3)), "श्रीमती");
}

#[test]
fn test_more_than_two_parents() {
    // Child 4 has three parents; 5 shares only the third.
    let members = [man(1), woman(2), man(3), man(4), woman(5)];
    let relations = [parent(1, 1, 4), parent(2, 2, 4), parent(3, 3, 4), parent(4, 3, 5)];
    let engine = RelationshipEngine::new(&members, &relations);
    assert_eq!(engine.find_relationship(MemberId(4), MemberId(3)), "बुबा");
    assert_eq!(engine.find_relationship(MemberId(4), MemberId(5)), "दिदीबहिनी");
}

#[test]
fn test_half_siblings_through_mother() {
    let members = [woman(1), man(2), man(3)];
    let relations = [parent(1, 1, 2), parent(2, 1, 3)];
    let engine = RelationshipEngine::new(&members, &relations);
    let resolution = engine.resolve(MemberId(2), MemberId(3));
    assert_eq!(resolution.label, "दाजुभाइ");
    assert_eq!(resolution.outcome.path().unwrap().ancestor, Some(MemberId(1)));
}

// ============================================================================
// 3. Depth bound
// ============================================================================

fn line(len: u64) -> (Vec<Member>, Vec<Relation>) {
    let members = (0..len).map(man).collect();
    let relations = (1..len).map(|i| parent(i, i - 1, i)).collect();
    (members, relations)
}

#[test]
fn test_ancestors_beyond_default_depth_are_not_found() {
    let (members, relations) = line(12);
    let engine = RelationshipEngine::new(&members, &relations);
    assert_eq!(engine.kinship(MemberId(11), MemberId(0)), Kinship::NotRelated);
    // Within the bound, but outside the vocabulary.
    assert_eq!(engine.kinship(MemberId(11), MemberId(3)), Kinship::Other);
    assert_eq!(engine.find_relationship(MemberId(11), MemberId(3)), NepaliVocabulary::DISTANT);
}

#[test]
fn test_configured_depth() {
    let (members, relations) = line(12);
    let config = EngineConfig { max_depth: 2, ..EngineConfig::default() };
    let engine = RelationshipEngine::new(&members, &relations).with_config(config);
    assert_eq!(engine.find_relationship(MemberId(11), MemberId(9)), "बाजे");
    assert_eq!(engine.kinship(MemberId(11), MemberId(8)), Kinship::NotRelated);
}

// ============================================================================
// 4. Stale ids after deletion
// ============================================================================

#[test]
fn test_deleted_member_is_not_related() {
    let store = MemoryStore::new();
    let father = store.add_member(MemberDraft::new("Ram", Gender::Male), 0).unwrap();
    let son = store
        .add_member_related(MemberDraft::new("Shyam", Gender::Male), father, kinship::Attachment::Child)
        .unwrap();
    assert_eq!(store.engine().find_relationship(son, father), "बुबा");

    assert!(store.delete_member(father).unwrap());
    assert!(store.relations_of(son).is_empty());
    assert_eq!(store.relation_count(), 0);
    assert_eq!(store.engine().find_relationship(son, father), NepaliVocabulary::NOT_RELATED);
}
