//! End-to-end tests for relationships that cross a marriage: in-laws,
//! spouses of blood relatives, and co-parents-in-law.

use chrono::NaiveDate;
use kinship::{Gender, Kinship, Member, MemberId, Relation, RelId, RelationshipEngine, Seniority, SpouseHops};
use pretty_assertions::assert_eq;

// ============================================================================
// Fixture
// ============================================================================
//
//   Hari(1) ~ Gita(2)                       Bishnu(9)
//        |                                     |
//   +----+--------------+------------+     +---+--------+----------+
//   Radha(5)         Ram(3)    Krishna(4)  Sita(6)   Hira(10)  Kamala(11)
//   1958 ~ Mohan(15) 1960      1965        1962      1967      1970 ~ Dipak(16)
//                     ~ Sita(6)  ~ Laxmi(12)
//                     |
//                  Shyam(7) ~ Anita(13) <- Prakash(14)

const HARI: MemberId = MemberId(1);
const GITA: MemberId = MemberId(2);
const RAM: MemberId = MemberId(3);
const KRISHNA: MemberId = MemberId(4);
const RADHA: MemberId = MemberId(5);
const SITA: MemberId = MemberId(6);
const SHYAM: MemberId = MemberId(7);
const BISHNU: MemberId = MemberId(9);
const HIRA: MemberId = MemberId(10);
const KAMALA: MemberId = MemberId(11);
const LAXMI: MemberId = MemberId(12);
const ANITA: MemberId = MemberId(13);
const PRAKASH: MemberId = MemberId(14);
const MOHAN: MemberId = MemberId(15);
const DIPAK: MemberId = MemberId(16);

fn year(y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, 1, 1).unwrap()
}

fn family() -> RelationshipEngine {
    let members = vec![
        Member::new(HARI, "Hari", Gender::Male),
        Member::new(GITA, "Gita", Gender::Female),
        Member::new(RAM, "Ram", Gender::Male).born(year(1960)),
        Member::new(KRISHNA, "Krishna", Gender::Male).born(year(1965)),
        Member::new(RADHA, "Radha", Gender::Female).born(year(1958)),
        Member::new(SITA, "Sita", Gender::Female).born(year(1962)),
        Member::new(SHYAM, "Shyam", Gender::Male).born(year(1990)),
        Member::new(BISHNU, "Bishnu", Gender::Male),
        Member::new(HIRA, "Hira", Gender::Male).born(year(1967)),
        Member::new(KAMALA, "Kamala", Gender::Female).born(year(1970)),
        Member::new(LAXMI, "Laxmi", Gender::Female),
        Member::new(ANITA, "Anita", Gender::Female),
        Member::new(PRAKASH, "Prakash", Gender::Male),
        Member::new(MOHAN, "Mohan", Gender::Male),
        Member::new(DIPAK, "Dipak", Gender::Male),
    ];

    let parent = [
        (HARI, RAM),
        (GITA, RAM),
        (HARI, KRISHNA),
        (GITA, KRISHNA),
        (HARI, RADHA),
        (GITA, RADHA),
        (RAM, SHYAM),
        (SITA, SHYAM),
        (BISHNU, SITA),
        (BISHNU, HIRA),
        (BISHNU, KAMALA),
        (PRAKASH, ANITA),
    ];
    let spouse = [
        (HARI, GITA),
        (RAM, SITA),
        (KRISHNA, LAXMI),
        (RADHA, MOHAN),
        (KAMALA, DIPAK),
        (SHYAM, ANITA),
    ];

    let relations: Vec<Relation> = parent
        .iter()
        .map(|&(p, c)| (p, c, true))
        .chain(spouse.iter().map(|&(a, b)| (a, b, false)))
        .enumerate()
        .map(|(i, (a, b, is_parent))| {
            let id = RelId(i as u64 + 1);
            if is_parent { Relation::parent(id, a, b) } else { Relation::spouse(id, a, b) }
        })
        .collect();

    RelationshipEngine::new(&members, &relations)
}

// ============================================================================
// 1. Spouse's parents and children's spouses
// ============================================================================

#[test]
fn test_parents_in_law() {
    let engine = family();
    assert_eq!(engine.find_relationship(SITA, HARI), "ससुरा");
    assert_eq!(engine.find_relationship(SITA, GITA), "सासू");
    assert_eq!(engine.find_relationship(RAM, BISHNU), "ससुरा");
    assert_eq!(engine.find_relationship(ANITA, RAM), "ससुरा");
    assert_eq!(engine.find_relationship(ANITA, SITA), "सासू");
}

#[test]
fn test_children_in_law() {
    let engine = family();
    assert_eq!(engine.find_relationship(RAM, ANITA), "बुहारी");
    assert_eq!(engine.find_relationship(SITA, ANITA), "बुहारी");
    assert_eq!(engine.find_relationship(BISHNU, RAM), "ज्वाइँ");
}

#[test]
fn test_child_in_law_path_shape() {
    let engine = family();
    let resolution = engine.resolve(RAM, ANITA);
    let path = resolution.outcome.path().unwrap();
    assert_eq!(path.hops, SpouseHops::End { relative: Gender::Male });
    assert_eq!(path.to, SHYAM);
    assert_eq!((path.up, path.down), (0, 1));
}

// ============================================================================
// 2. Spouse's siblings
// ============================================================================

#[test]
fn test_husbands_siblings() {
    let engine = family();
    assert_eq!(engine.find_relationship(SITA, KRISHNA), "देवर");
    assert_eq!(engine.find_relationship(SITA, RADHA), "आमाजु");
}

#[test]
fn test_wifes_siblings() {
    let engine = family();
    assert_eq!(engine.find_relationship(RAM, HIRA), "सालो");
    assert_eq!(engine.find_relationship(RAM, KAMALA), "साली");
    assert_eq!(
        engine.kinship(RAM, HIRA),
        Kinship::SpouseSibling { gender: Gender::Male, spouse: Gender::Female, seniority: Seniority::Younger }
    );
}

// ============================================================================
// 3. Siblings' spouses
// ============================================================================

#[test]
fn test_sibling_spouses() {
    let engine = family();
    assert_eq!(engine.find_relationship(RAM, LAXMI), "भाइबुहारी");
    assert_eq!(engine.find_relationship(RAM, MOHAN), "भिनाजु");
}

#[test]
fn test_parent_sibling_spouses() {
    let engine = family();
    assert_eq!(engine.find_relationship(SHYAM, LAXMI), "काकी");
    assert_eq!(engine.find_relationship(SHYAM, MOHAN), "फुपाजु");
}

// ============================================================================
// 4. Two marriages apart
// ============================================================================

#[test]
fn test_spouse_sibling_spouses() {
    let engine = family();
    assert_eq!(engine.find_relationship(SITA, LAXMI), "देउरानी");
    assert_eq!(engine.find_relationship(RAM, DIPAK), "साढु");
}

#[test]
fn test_co_parents_in_law() {
    let engine = family();
    assert_eq!(engine.find_relationship(RAM, PRAKASH), "सम्धी");
    assert_eq!(engine.kinship(SITA, PRAKASH), Kinship::CoParentInLaw(Gender::Male));
    assert_eq!(engine.find_relationship(PRAKASH, RAM), "सम्धी");
}
