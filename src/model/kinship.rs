//! Kinship: a named relationship, independent of any vocabulary.
//!
//! Every variant is gendered by the target member. Side and seniority fields
//! carry exactly what the vocabulary needs to pick one term.

use serde::{Deserialize, Serialize};
use super::{Gender, Seniority, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kinship {
    Myself,
    Spouse(Gender),
    Parent(Gender),
    Child(Gender),
    Sibling { gender: Gender, seniority: Seniority },
    Grandparent { gender: Gender, side: Side },
    Grandchild(Gender),
    GreatGrandparent(Gender),
    GreatGrandchild(Gender),
    /// Parent's sibling. `side` is the connecting parent; `seniority` compares
    /// the target with that parent.
    ParentSibling { gender: Gender, side: Side, seniority: Seniority },
    /// Spouse of a parent's sibling. `seniority` is the blood sibling's.
    ParentSiblingSpouse { gender: Gender, side: Side, seniority: Seniority },
    /// Sibling's child. `side` is the gender line of the connecting sibling.
    SiblingChild { gender: Gender, side: Side },
    /// Parent's sibling's child. `seniority` compares the cousins themselves.
    Cousin { gender: Gender, seniority: Seniority },
    /// Spouse of a sibling. `seniority` is the blood sibling's.
    SiblingSpouse { gender: Gender, seniority: Seniority },
    ChildSpouse(Gender),
    GrandchildSpouse(Gender),
    SpouseParent(Gender),
    /// Sibling of the querying member's spouse, who has gender `spouse`.
    SpouseSibling { gender: Gender, spouse: Gender, seniority: Seniority },
    /// Spouse of the spouse's sibling. `seniority` is the blood sibling's.
    SpouseSiblingSpouse { gender: Gender, spouse: Gender, seniority: Seniority },
    /// Parent of a child's spouse.
    CoParentInLaw(Gender),
    /// Connected, but beyond the modeled vocabulary.
    Other,
    /// Disconnected, or an id that names no member.
    NotRelated,
}

impl Kinship {
    /// True for every variant that names an actual relationship.
    pub fn is_defined(&self) -> bool {
        !matches!(self, Kinship::Other | Kinship::NotRelated)
    }

    /// Gender of the target, when the term carries one.
    pub fn gender(&self) -> Option<Gender> {
        use Kinship::*;
        match *self {
            Spouse(g) | Parent(g) | Child(g) | Grandchild(g) | GreatGrandparent(g)
            | GreatGrandchild(g) | ChildSpouse(g) | GrandchildSpouse(g)
            | SpouseParent(g) | CoParentInLaw(g) => Some(g),
            Sibling { gender, .. } | Grandparent { gender, .. }
            | ParentSibling { gender, .. } | ParentSiblingSpouse { gender, .. }
            | SiblingChild { gender, .. } | Cousin { gender, .. }
            | SiblingSpouse { gender, .. } | SpouseSibling { gender, .. }
            | SpouseSiblingSpouse { gender, .. } => Some(gender),
            Myself | Other | NotRelated => None,
        }
    }

    /// Converse relationship class, used by symmetry checks. Gender is not
    /// swapped; callers fill in the other member's gender.
    pub fn is_converse_of(&self, other: &Kinship) -> bool {
        use Kinship::*;
        matches!(
            (self, other),
            (Parent(_), Child(_)) | (Child(_), Parent(_))
                | (Spouse(_), Spouse(_))
                | (Sibling { .. }, Sibling { .. })
                | (Grandparent { .. }, Grandchild(_)) | (Grandchild(_), Grandparent { .. })
                | (SpouseParent(_), ChildSpouse(_)) | (ChildSpouse(_), SpouseParent(_))
                | (CoParentInLaw(_), CoParentInLaw(_))
                | (Myself, Myself)
        )
    }
}

impl std::fmt::Display for Kinship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Kinship::*;
        let g = |g: &Gender, m: &'static str, w: &'static str| if *g == Gender::Male { m } else { w };
        match self {
            Myself => write!(f, "self"),
            Spouse(x) => write!(f, "{}", g(x, "husband", "wife")),
            Parent(x) => write!(f, "{}", g(x, "father", "mother")),
            Child(x) => write!(f, "{}", g(x, "son", "daughter")),
            Sibling { gender, seniority } => write!(f, "{:?} {}", seniority, g(gender, "brother", "sister")),
            Grandparent { gender, side } => write!(f, "{:?} {}", side, g(gender, "grandfather", "grandmother")),
            Grandchild(x) => write!(f, "{}", g(x, "grandson", "granddaughter")),
            GreatGrandparent(x) => write!(f, "{}", g(x, "great-grandfather", "great-grandmother")),
            GreatGrandchild(x) => write!(f, "{}", g(x, "great-grandson", "great-granddaughter")),
            ParentSibling { gender, side, seniority } => write!(f, "{:?} {:?} {}", side, seniority, g(gender, "uncle", "aunt")),
            ParentSiblingSpouse { gender, side, seniority } => write!(f, "{:?} {:?} {} by marriage", side, seniority, g(gender, "uncle", "aunt")),
            SiblingChild { gender, side } => write!(f, "{:?} {}", side, g(gender, "nephew", "niece")),
            Cousin { gender, seniority } => write!(f, "{:?} cousin {}", seniority, g(gender, "brother", "sister")),
            SiblingSpouse { gender, seniority } => write!(f, "{:?} sibling's {}", seniority, g(gender, "husband", "wife")),
            ChildSpouse(x) => write!(f, "{}", g(x, "son-in-law", "daughter-in-law")),
            GrandchildSpouse(x) => write!(f, "grandchild's {}", g(x, "husband", "wife")),
            SpouseParent(x) => write!(f, "{}", g(x, "father-in-law", "mother-in-law")),
            SpouseSibling { gender, spouse, seniority } => write!(f, "{:?} {}'s {}", seniority, g(spouse, "husband", "wife"), g(gender, "brother", "sister")),
            SpouseSiblingSpouse { gender, spouse, seniority } => write!(f, "{:?} {}'s sibling's {}", seniority, g(spouse, "husband", "wife"), g(gender, "husband", "wife")),
            CoParentInLaw(x) => write!(f, "co-{}-in-law", g(x, "father", "mother")),
            Other => write!(f, "distant relative"),
            NotRelated => write!(f, "no relation"),
        }
    }
}
