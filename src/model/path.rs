//! Kinship path: the structural shape of a relationship between two members.
//!
//! Produced by the finder, consumed by the classifier, dropped after one query.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use super::{Gender, MemberId};

/// Ancestor chain, nearest parent first. Bounded by the search depth.
pub type Chain = SmallVec<[MemberId; 4]>;

/// Side flags matching a [`Chain`] position by position.
pub type Sides = SmallVec<[Side; 4]>;

/// Lineage side of one upward hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Hop through a male parent.
    Paternal,
    /// Hop through a female parent.
    Maternal,
}

/// Birth order of the target's branch relative to the querying member's branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seniority {
    Elder,
    Younger,
    /// No birth dates, equal dates, or not applicable to the path shape.
    Unknown,
}

/// Where spouse edges were used to bridge blood lines.
///
/// The blood segment of the path always runs `from → to`; this tells how the
/// query endpoints attach to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpouseHops {
    /// Pure blood relation: `from` is A, `to` is B.
    None,
    /// B is A's spouse. The blood segment is empty.
    Direct,
    /// A ~ `from`: B is a blood relative of A's spouse.
    Start { spouse: Gender },
    /// `to` ~ B: B is the spouse of A's blood relative `to`.
    End { relative: Gender },
    /// A ~ `from` and `to` ~ B: spouse's blood relative's spouse.
    Both { spouse: Gender, relative: Gender },
    /// A descends `descent` generations to X, X ~ `from`, and `from` is a
    /// blood relative of B.
    Middle { descent: usize },
}

impl SpouseHops {
    /// Number of spouse edges crossed.
    pub fn count(&self) -> usize {
        match self {
            SpouseHops::None => 0,
            SpouseHops::Direct | SpouseHops::Start { .. }
            | SpouseHops::End { .. } | SpouseHops::Middle { .. } => 1,
            SpouseHops::Both { .. } => 2,
        }
    }
}

/// Structural descriptor of the relationship between two members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KinshipPath {
    /// Start of the blood segment.
    pub from: MemberId,
    /// End of the blood segment.
    pub to: MemberId,
    /// Nearest common ancestor of `from` and `to`. `None` for a direct spouse.
    pub ancestor: Option<MemberId>,
    /// Generations from `from` up to the ancestor.
    pub up: usize,
    /// Generations from the ancestor down to `to`.
    pub down: usize,
    /// Ancestors of `from` on the way up, nearest first, ending at the ancestor.
    pub up_chain: Chain,
    /// Ancestors of `to` on the way up, nearest first, ending at the ancestor.
    pub down_chain: Chain,
    pub up_sides: Sides,
    pub down_sides: Sides,
    pub hops: SpouseHops,
    pub seniority: Seniority,
    /// One ancestor step went through a parent's spouse instead of a PARENT
    /// edge (step-parent), on either side.
    #[serde(default)]
    pub step: bool,
}

impl KinshipPath {
    /// Path for a direct spouse link.
    pub fn spouse(a: MemberId, b: MemberId) -> Self {
        Self {
            from: a,
            to: b,
            ancestor: None,
            up: 0,
            down: 0,
            up_chain: Chain::new(),
            down_chain: Chain::new(),
            up_sides: Sides::new(),
            down_sides: Sides::new(),
            hops: SpouseHops::Direct,
            seniority: Seniority::Unknown,
            step: false,
        }
    }

    /// Blood distance plus spouse edges (and any descent before a middle hop).
    pub fn cost(&self) -> usize {
        let descent = match self.hops {
            SpouseHops::Middle { descent } => descent,
            _ => 0,
        };
        self.up + self.down + descent + self.hops.count()
    }

    /// Side of the first hop above `from`, if any.
    pub fn near_side(&self) -> Option<Side> {
        self.up_sides.first().copied()
    }

    /// Side of the first hop above `to`, if any.
    pub fn far_side(&self) -> Option<Side> {
        self.down_sides.first().copied()
    }
}

/// Result of path-finding between two members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathOutcome {
    /// Both ids name the same member.
    Same,
    Found(KinshipPath),
    /// No blood or marital bridge within the depth bound, or an unknown id.
    Disconnected,
}

impl PathOutcome {
    pub fn path(&self) -> Option<&KinshipPath> {
        match self {
            PathOutcome::Found(p) => Some(p),
            _ => None,
        }
    }
}
