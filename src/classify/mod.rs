//! Relationship classifier: maps a path shape to a [`Kinship`].
//!
//! The table is keyed by (spouse-hop pattern, up, down) and refined by the
//! recorded side flags, seniority and target gender. Pure lookup: no
//! recursion, no allocation, no index access.

pub mod vocabulary;

pub use vocabulary::{NepaliVocabulary, Vocabulary};

use crate::model::*;

/// Classify a finder outcome for a target of the given gender.
pub fn classify(outcome: &PathOutcome, target: Gender) -> Kinship {
    match outcome {
        PathOutcome::Same => Kinship::Myself,
        PathOutcome::Disconnected => Kinship::NotRelated,
        PathOutcome::Found(path) => classify_path(path, target),
    }
}

/// Classify one kinship path. Shapes outside the table yield [`Kinship::Other`].
pub fn classify_path(path: &KinshipPath, gender: Gender) -> Kinship {
    use Kinship::*;
    use SpouseHops as H;

    let seniority = path.seniority;
    // Only read in arms where the matching distance is at least one.
    let near = path.near_side().unwrap_or(Side::Paternal);
    let far = path.far_side().unwrap_or(Side::Paternal);

    match (path.hops, path.up, path.down) {
        (H::Direct, _, _) => Spouse(gender),

        // Blood line
        (H::None, 1, 0) => Parent(gender),
        (H::None, 0, 1) => Child(gender),
        (H::None, 1, 1) => Sibling { gender, seniority },
        (H::None, 2, 0) => Grandparent { gender, side: near },
        (H::None, 0, 2) => Grandchild(gender),
        (H::None, 3, 0) => GreatGrandparent(gender),
        (H::None, 0, 3) => GreatGrandchild(gender),
        (H::None, 2, 1) => ParentSibling { gender, side: near, seniority },
        (H::None, 1, 2) => SiblingChild { gender, side: far },
        (H::None, 2, 2) => Cousin { gender, seniority },

        // Blood relatives of the spouse
        (H::Start { .. }, 1, 0) => SpouseParent(gender),
        (H::Start { .. }, 0, 1) => Child(gender),
        (H::Start { .. }, 0, 2) => Grandchild(gender),
        (H::Start { spouse }, 1, 1) => SpouseSibling { gender, spouse, seniority },
        // A spouse's nephews and nieces take the spouse's own terms.
        (H::Start { .. }, 1, 2) => SiblingChild { gender, side: far },

        // Spouses of blood relatives
        (H::End { .. }, 1, 0) => Parent(gender),
        (H::End { .. }, 2, 0) => Grandparent { gender, side: near },
        (H::End { .. }, 0, 1) => ChildSpouse(gender),
        (H::End { .. }, 0, 2) => GrandchildSpouse(gender),
        (H::End { .. }, 1, 1) => SiblingSpouse { gender, seniority },
        (H::End { .. }, 2, 1) => ParentSiblingSpouse { gender, side: near, seniority },

        // Spouse's relative's spouse
        (H::Both { .. }, 1, 0) => SpouseParent(gender),
        (H::Both { spouse, .. }, 1, 1) => SpouseSiblingSpouse { gender, spouse, seniority },

        // Child's spouse's parent
        (H::Middle { descent: 1 }, 1, 0) => CoParentInLaw(gender),

        _ => Other,
    }
}

// ============================================================================
// Tests
// ============================================================================
