//! Member (person node) in the family graph.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque member identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(pub u64);

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary gender tag. Every kinship term is selected over this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Lineage side a step through a parent of this gender lands on.
    pub fn side(self) -> super::Side {
        match self {
            Gender::Male => super::Side::Paternal,
            Gender::Female => super::Side::Maternal,
        }
    }
}

/// A person in the family tree.
///
/// `generation` is a display hint assigned at creation time. Relationship
/// math never reads it; everything is derived from PARENT/SPOUSE edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub gender: Gender,
    #[serde(default)]
    pub generation: i32,
    /// Used to order siblings and parent's-siblings (elder vs younger terms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Opaque to the engine; owned by the presentation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
            generation: 0,
            birth_date: None,
            address: None,
            phone: None,
            photo_uri: None,
        }
    }

    pub fn with_generation(mut self, generation: i32) -> Self {
        self.generation = generation;
        self
    }

    pub fn born(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }
}

/// Member fields supplied by the data-entry form, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub gender: Gender,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub photo_uri: Option<String>,
}

impl MemberDraft {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            birth_date: None,
            address: None,
            phone: None,
            photo_uri: None,
        }
    }

    pub fn born(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub(crate) fn into_member(self, id: MemberId, generation: i32) -> Member {
        Member {
            id,
            name: self.name,
            gender: self.gender,
            generation,
            birth_date: self.birth_date,
            address: self.address,
            phone: self.phone,
            photo_uri: self.photo_uri,
        }
    }
}
