//! Ancestor path finder: turns two member ids into a [`KinshipPath`].
//!
//! The search runs in tiers and stops at the first tier that produces a path:
//!
//! 1. same member
//! 2. direct spouse
//! 3. blood: nearest common ancestor of both bounded ascents
//! 4. one spouse hop at an endpoint (A's spouse's relative, relative's spouse)
//! 5. one spouse hop below A (A's descendant's spouse's relative)
//! 6. two spouse hops (spouse's relative's spouse)
//!
//! Ascents may take one step through a parent's spouse (a step-parent), and
//! descents one step through a spouse's child. Data entry often links a
//! mother only by her SPOUSE edge, and her family is still blood family.
//!
//! Every ascent and descent stops at `max_depth`, so malformed or cyclic
//! graphs always terminate.

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::index::FamilyIndex;
use crate::model::*;

/// Generations searched in each direction before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 8;

// ============================================================================
// Configuration
// ============================================================================

/// Which line wins when two common ancestors are equally near.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    /// Father's line first.
    PaternalFirst,
    MaternalFirst,
}

impl TieBreak {
    fn rank(self, side: Side) -> u8 {
        match (self, side) {
            (TieBreak::PaternalFirst, Side::Paternal) | (TieBreak::MaternalFirst, Side::Maternal) => 0,
            _ => 1,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_depth: usize,
    pub tie_break: TieBreak,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, tie_break: TieBreak::PaternalFirst }
    }
}

// ============================================================================
// Ascent
// ============================================================================

/// Preferred route from a member up to one of its ancestors.
#[derive(Debug, Clone, Default)]
struct Route {
    chain: Chain,
    sides: Sides,
    /// One hop went to a parent's spouse. At most one per route.
    step: bool,
}

impl Route {
    fn depth(&self) -> usize {
        self.chain.len()
    }

    fn extend(&self, id: MemberId, side: Side, step: bool) -> Route {
        let mut next = self.clone();
        next.chain.push(id);
        next.sides.push(side);
        next.step |= step;
        next
    }
}

/// Every ancestor reachable within the bound, the start member included at
/// depth zero.
#[derive(Debug, Default)]
struct Ascent {
    routes: HashMap<MemberId, Route>,
}

/// Best blood connection found between two members.
struct Blood<'r> {
    ancestor: MemberId,
    up: &'r Route,
    down: &'r Route,
}

// ============================================================================
// PathFinder
// ============================================================================

/// Per-query search state. Ascents are memoized so spouse substitutions
/// reuse the walks already done.
pub struct PathFinder<'a> {
    index: &'a FamilyIndex,
    config: EngineConfig,
    ascents: HashMap<MemberId, Ascent>,
}

impl<'a> PathFinder<'a> {
    pub fn new(index: &'a FamilyIndex, config: EngineConfig) -> Self {
        Self { index, config, ascents: HashMap::new() }
    }

    /// Find the shortest meaningful kinship path from `a` to `b`.
    pub fn find(&mut self, a: MemberId, b: MemberId) -> PathOutcome {
        if a == b {
            return PathOutcome::Same;
        }
        if !self.index.exists(a) || !self.index.exists(b) {
            tracing::debug!(%a, %b, "unknown member in query");
            return PathOutcome::Disconnected;
        }
        if self.index.is_spouse(a, b) {
            return PathOutcome::Found(KinshipPath::spouse(a, b));
        }
        if let Some(path) = self.blood_path(a, b, SpouseHops::None) {
            tracing::trace!(%a, %b, up = path.up, down = path.down, "blood path");
            return PathOutcome::Found(path);
        }
        if let Some(path) = self.endpoint_hop(a, b) {
            tracing::trace!(%a, %b, hops = ?path.hops, "endpoint spouse hop");
            return PathOutcome::Found(path);
        }
        if let Some(path) = self.middle_hop(a, b) {
            tracing::trace!(%a, %b, hops = ?path.hops, "middle spouse hop");
            return PathOutcome::Found(path);
        }
        if let Some(path) = self.double_hop(a, b) {
            tracing::trace!(%a, %b, "double spouse hop");
            return PathOutcome::Found(path);
        }
        PathOutcome::Disconnected
    }

    // ========================================================================
    // Tiers
    // ========================================================================

    /// B is a blood relative of A's spouse, or the spouse of A's blood relative.
    fn endpoint_hop(&mut self, a: MemberId, b: MemberId) -> Option<KinshipPath> {
        let mut candidates = Vec::new();

        for s in self.spouses(a, &[a, b]) {
            let Some(spouse) = self.gender(s) else { continue };
            candidates.extend(self.blood_path(s, b, SpouseHops::Start { spouse }));
        }
        for s in self.spouses(b, &[a, b]) {
            let Some(relative) = self.gender(s) else { continue };
            candidates.extend(self.blood_path(a, s, SpouseHops::End { relative }));
        }

        // Stable min: Start candidates were pushed first and win ties.
        candidates.into_iter().reduce(|best, p| if p.cost() < best.cost() { p } else { best })
    }

    /// A's descendant X is married to `from`, and `from` is a blood relative of B.
    fn middle_hop(&mut self, a: MemberId, b: MemberId) -> Option<KinshipPath> {
        let mut best: Option<KinshipPath> = None;

        for (x, descent) in self.descendants(a) {
            for y in self.spouses(x, &[a, b]) {
                if let Some(path) = self.blood_path(y, b, SpouseHops::Middle { descent }) {
                    if best.as_ref().is_none_or(|p| path.cost() < p.cost()) {
                        best = Some(path);
                    }
                }
            }
        }
        best
    }

    /// A ~ S, S blood-related to T, T ~ B.
    fn double_hop(&mut self, a: MemberId, b: MemberId) -> Option<KinshipPath> {
        let mut best: Option<KinshipPath> = None;

        for s in self.spouses(a, &[a, b]) {
            for t in self.spouses(b, &[a, b]) {
                let (Some(spouse), Some(relative)) = (self.gender(s), self.gender(t)) else {
                    continue;
                };
                if let Some(path) = self.blood_path(s, t, SpouseHops::Both { spouse, relative }) {
                    if best.as_ref().is_none_or(|p| path.cost() < p.cost()) {
                        best = Some(path);
                    }
                }
            }
        }
        best
    }

    // ========================================================================
    // Blood search
    // ========================================================================

    /// Nearest common ancestor of `from` and `to`, packaged as a path.
    fn blood_path(&mut self, from: MemberId, to: MemberId, hops: SpouseHops) -> Option<KinshipPath> {
        self.ensure_ascent(from);
        self.ensure_ascent(to);

        let blood = self.nearest_common_ancestor(from, to)?;
        let up = blood.up.depth();
        let down = blood.down.depth();
        let seniority = self.seniority(from, to, blood.up, blood.down);

        Some(KinshipPath {
            from,
            to,
            ancestor: Some(blood.ancestor),
            up,
            down,
            up_chain: blood.up.chain.clone(),
            down_chain: blood.down.chain.clone(),
            up_sides: blood.up.sides.clone(),
            down_sides: blood.down.sides.clone(),
            hops,
            seniority,
            step: blood.up.step || blood.down.step,
        })
    }

    /// Minimize combined distance, then step-parent hops, then apply the side
    /// tie-break to A's route, then B's, then the ancestor id.
    fn nearest_common_ancestor(&self, from: MemberId, to: MemberId) -> Option<Blood<'_>> {
        let asc_from = self.ascents.get(&from)?;
        let asc_to = self.ascents.get(&to)?;
        let tie = self.config.tie_break;
        let key = |r: &Route| -> SmallVec<[u8; 4]> { r.sides.iter().map(|s| tie.rank(*s)).collect() };
        let steps = |b: &Blood<'_>| u8::from(b.up.step) + u8::from(b.down.step);

        asc_from
            .routes
            .iter()
            .filter_map(|(anc, up)| asc_to.routes.get(anc).map(|down| Blood { ancestor: *anc, up, down }))
            .min_by(|x, y| {
                (x.up.depth() + x.down.depth())
                    .cmp(&(y.up.depth() + y.down.depth()))
                    .then_with(|| steps(x).cmp(&steps(y)))
                    .then_with(|| key(x.up).cmp(&key(y.up)))
                    .then_with(|| key(x.down).cmp(&key(y.down)))
                    .then_with(|| x.ancestor.cmp(&y.ancestor))
            })
    }

    fn ensure_ascent(&mut self, start: MemberId) {
        if !self.ascents.contains_key(&start) {
            let ascent = self.ascend(start);
            self.ascents.insert(start, ascent);
        }
    }

    /// Breadth-first walk up the PARENT edges, one generation per round.
    ///
    /// Parents are expanded in tie-break order, and a round records every
    /// blood hop before any step-parent hop, so the first route recorded for
    /// an ancestor is the shortest and the preferred one among equals. A
    /// step-parent sits at the same depth as the parent it is married to.
    fn ascend(&self, start: MemberId) -> Ascent {
        let mut routes: HashMap<MemberId, Route> = HashMap::new();
        routes.insert(start, Route::default());
        let mut frontier = vec![start];

        while !frontier.is_empty() {
            let mut blood = Vec::new();
            let mut married = Vec::new();

            for node in &frontier {
                let Some(route) = routes.get(node) else { continue };
                if route.depth() >= self.config.max_depth {
                    continue;
                }
                let parents = self.ordered_parents(*node);
                for &parent in &parents {
                    let Some(gender) = self.gender(parent) else { continue };
                    blood.push((parent, route.extend(parent, gender.side(), false)));
                }
                if route.step {
                    continue;
                }
                for &parent in &parents {
                    for spouse in self.spouses(parent, &parents) {
                        let Some(gender) = self.gender(spouse) else { continue };
                        married.push((spouse, route.extend(spouse, gender.side(), true)));
                    }
                }
            }

            let mut next = Vec::new();
            for (id, route) in blood.into_iter().chain(married) {
                if !routes.contains_key(&id) {
                    routes.insert(id, route);
                    next.push(id);
                }
            }
            frontier = next;
        }
        Ascent { routes }
    }

    fn ordered_parents(&self, id: MemberId) -> SmallVec<[MemberId; 2]> {
        let tie = self.config.tie_break;
        let mut parents: SmallVec<[(u8, MemberId); 2]> = self
            .index
            .parents_of(id)
            .iter()
            .filter_map(|p| self.gender(*p).map(|g| (tie.rank(g.side()), *p)))
            .collect();
        parents.sort_unstable();
        parents.into_iter().map(|(_, p)| p).collect()
    }

    /// Descendants of `root` within the bound, each with its generation gap.
    /// A spouse's child counts as a child, at most once along each line.
    fn descendants(&self, root: MemberId) -> Vec<(MemberId, usize)> {
        let mut seen = HashSet::new();
        seen.insert(root);
        let mut out = Vec::new();
        let mut queue = VecDeque::from([(root, 0usize, false)]);

        while let Some((node, depth, step)) = queue.pop_front() {
            if depth >= self.config.max_depth {
                continue;
            }
            let mut children: SmallVec<[(bool, MemberId); 4]> = self
                .index
                .children_of(node)
                .iter()
                .map(|c| (step, *c))
                .collect();
            if !step {
                for spouse in self.spouses(node, &[root]) {
                    children.extend(self.index.children_of(spouse).iter().map(|c| (true, *c)));
                }
            }
            children.retain(|(_, c)| self.index.exists(*c));
            children.sort_unstable_by_key(|(step, c)| (*step, *c));
            for (step, child) in children {
                if seen.insert(child) {
                    out.push((child, depth + 1));
                    queue.push_back((child, depth + 1, step));
                }
            }
        }
        out
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Existing spouses of `id`, sorted, without the excluded ids.
    fn spouses(&self, id: MemberId, exclude: &[MemberId]) -> SmallVec<[MemberId; 2]> {
        let mut out: SmallVec<[MemberId; 2]> = self
            .index
            .spouses_of(id)
            .iter()
            .copied()
            .filter(|s| self.index.exists(*s) && !exclude.contains(s))
            .collect();
        out.sort_unstable();
        out
    }

    fn gender(&self, id: MemberId) -> Option<Gender> {
        self.index.gender_of(id)
    }

    /// Birth order of the `to` side against the `from` side. Same-generation
    /// paths compare the endpoints; otherwise the two branch heads directly
    /// below the common ancestor are compared.
    fn seniority(&self, from: MemberId, to: MemberId, up: &Route, down: &Route) -> Seniority {
        let head = |start: MemberId, route: &Route| match route.depth() {
            0 => None,
            1 => Some(start),
            d => route.chain.get(d - 2).copied(),
        };
        let heads = if up.depth() == down.depth() && up.depth() > 0 {
            (Some(from), Some(to))
        } else {
            (head(from, up), head(to, down))
        };
        let (Some(ha), Some(hb)) = heads else {
            return Seniority::Unknown;
        };
        if ha == hb {
            return Seniority::Unknown;
        }
        let born = |id| self.index.member(id).and_then(|m| m.birth_date);
        match (born(ha), born(hb)) {
            (Some(da), Some(db)) if db < da => Seniority::Elder,
            (Some(da), Some(db)) if db > da => Seniority::Younger,
            _ => Seniority::Unknown,
        }
    }
}

/// Convenience wrapper: one-shot search with a fresh finder.
pub fn find_path(index: &FamilyIndex, a: MemberId, b: MemberId, config: EngineConfig) -> PathOutcome {
    PathFinder::new(index, config).find(a, b)
}

// ============================================================================
// Tests
// ============================================================================
