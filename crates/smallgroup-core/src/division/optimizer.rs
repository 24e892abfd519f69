//! Partition optimizer.
//!
//! Exact optimal partitioning is combinatorial, so this is a two-phase local
//! search that converges to a local optimum, not necessarily the global one.
//! Rosters are tens of members, so that tradeoff is fine in practice.
//!
//! 1. Seed: members are bucketed by attribute signature (role first, so leaders
//!    come out ahead of everyone else), each bucket is shuffled with the caller's
//!    RNG, and the concatenation is dealt round-robin across the groups.
//! 2. Improve: every pass scores every cross-group pair swap and applies the one
//!    with the largest strict gain. Ties go to the swap that leaves fewer groups
//!    flagged as imbalanced, then to the lowest `(i, j)` pair. Stops when a pass
//!    finds nothing, or after `max_passes`.
//!
//! Each pass is O(n²) with O(1) scoring per pair thanks to per-group
//! [`Composition`] counts.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::division::{imbalance, scorer, Composition, TargetSize};
use crate::models::{FaithStatus, Gender, Group, Member, Partition, Role};

/// Upper bound on improvement passes. Each pass applies one swap, so this is
/// far beyond what a roster of a few dozen people needs.
pub const DEFAULT_MAX_PASSES: usize = 1_000;

/// Gains and ties closer than this are treated as equal.
const SCORE_EPSILON: f64 = 1e-9;

/// Number of groups for `n` members at the requested size.
///
/// `round(n / target)` with exact halves rounding up, never below 1. Zero
/// members means zero groups.
pub fn group_count(n: usize, target: TargetSize) -> usize {
    let t = target.get();
    if n == 0 {
        return 0;
    }
    if n <= t {
        return 1;
    }
    ((2 * n + t) / (2 * t)).max(1)
}

/// Group sizes for `n` members in `groups` groups: the first `n % groups`
/// groups get one extra member.
pub fn size_plan(n: usize, groups: usize) -> Vec<usize> {
    if groups == 0 {
        return Vec::new();
    }
    let base = n / groups;
    let extra = n % groups;
    (0..groups)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

#[derive(Debug, Clone)]
pub struct PartitionOptimizer {
    max_passes: usize,
}

impl Default for PartitionOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PASSES)
    }
}

impl PartitionOptimizer {
    pub fn new(max_passes: usize) -> Self {
        Self { max_passes }
    }

    /// Split `members` into groups of about `target` people.
    ///
    /// The only randomness is the bucket shuffle in the seed phase, drawn from
    /// `rng`; a seeded RNG gives reproducible groupings.
    pub fn optimize<R: Rng + ?Sized>(
        &self,
        members: &[Member],
        target: TargetSize,
        rng: &mut R,
    ) -> Partition {
        let groups = group_count(members.len(), target);
        if groups == 0 {
            debug!("No members to divide");
            return Partition::empty();
        }

        let mut search = Search::seeded(members, groups, rng);
        let (passes, converged, score_trace) = search.improve(self.max_passes);

        if converged {
            debug!(
                members = members.len(),
                groups,
                passes,
                swaps = score_trace.len().saturating_sub(1),
                "Optimizer reached a local optimum"
            );
        } else {
            warn!(
                members = members.len(),
                groups,
                passes,
                "Optimizer hit the pass cap before converging; returning best partition so far"
            );
        }

        Partition {
            groups: search.into_groups(),
            passes,
            converged,
            score_trace,
        }
    }
}

/// Attribute signature used to stratify the seed. Field order is sort order.
type Signature = (Role, FaithStatus, Gender);

fn signature(member: &Member) -> Signature {
    (member.role, member.faith_status, member.gender)
}

#[derive(Debug, Clone, Copy)]
struct Swap {
    first: usize,
    second: usize,
    gain: f64,
    flagged_after: usize,
    compositions: (Composition, Composition),
}

impl Swap {
    /// Larger gain wins; on a tie, fewer flagged groups. Earlier pairs are
    /// visited first, so keeping the incumbent on a full tie favors the lower index.
    fn beats(&self, other: &Swap) -> bool {
        if self.gain > other.gain + SCORE_EPSILON {
            return true;
        }
        (self.gain - other.gain).abs() <= SCORE_EPSILON && self.flagged_after < other.flagged_after
    }
}

/// Working state of the local search. Members are referred to by their index
/// in the input slice.
struct Search<'a> {
    members: &'a [Member],
    slots: Vec<Vec<usize>>,
    group_of: Vec<usize>,
    compositions: Vec<Composition>,
    scores: Vec<f64>,
    flagged: Vec<bool>,
}

impl<'a> Search<'a> {
    fn seeded<R: Rng + ?Sized>(members: &'a [Member], groups: usize, rng: &mut R) -> Self {
        let mut strata: BTreeMap<Signature, Vec<usize>> = BTreeMap::new();
        for (index, member) in members.iter().enumerate() {
            strata.entry(signature(member)).or_default().push(index);
        }

        let mut order = Vec::with_capacity(members.len());
        for (_, mut bucket) in strata {
            bucket.shuffle(rng);
            order.extend(bucket);
        }

        // Dealing n members round-robin over g groups yields exactly size_plan(n, g)
        let mut slots = vec![Vec::new(); groups];
        for (position, index) in order.into_iter().enumerate() {
            slots[position % groups].push(index);
        }

        Self::from_slots(members, slots)
    }

    fn from_slots(members: &'a [Member], slots: Vec<Vec<usize>>) -> Self {
        let mut group_of = vec![0; members.len()];
        for (group, slot) in slots.iter().enumerate() {
            for &index in slot {
                group_of[index] = group;
            }
        }
        let compositions: Vec<Composition> = slots
            .iter()
            .map(|slot| Composition::of(slot.iter().map(|&i| &members[i])))
            .collect();
        let scores = compositions.iter().map(scorer::score_composition).collect();
        let flagged = compositions.iter().map(imbalance::is_flagged).collect();

        Self {
            members,
            slots,
            group_of,
            compositions,
            scores,
            flagged,
        }
    }

    fn total_score(&self) -> f64 {
        self.scores.iter().sum()
    }

    fn flagged_count(&self) -> usize {
        self.flagged.iter().filter(|&&f| f).count()
    }

    /// Runs improvement passes; returns `(passes, converged, score_trace)`.
    fn improve(&mut self, max_passes: usize) -> (usize, bool, Vec<f64>) {
        let mut trace = vec![self.total_score()];
        let mut passes = 0;

        while passes < max_passes {
            passes += 1;
            match self.best_swap() {
                Some(swap) => {
                    self.apply(&swap);
                    trace.push(self.total_score());
                }
                None => return (passes, true, trace),
            }
        }

        // The cap may land exactly on a local optimum
        let converged = self.best_swap().is_none();
        (passes, converged, trace)
    }

    fn best_swap(&self) -> Option<Swap> {
        let n = self.members.len();
        let flagged_now = self.flagged_count();
        let mut best: Option<Swap> = None;

        for first in 0..n {
            for second in (first + 1)..n {
                let (a, b) = (self.group_of[first], self.group_of[second]);
                if a == b {
                    continue;
                }
                let (outgoing, incoming) = (&self.members[first], &self.members[second]);
                // Same signature: nothing about either group changes
                if signature(outgoing) == signature(incoming) {
                    continue;
                }

                let next_a = self.compositions[a].swapped(outgoing, incoming);
                let next_b = self.compositions[b].swapped(incoming, outgoing);
                let gain = scorer::score_composition(&next_a) + scorer::score_composition(&next_b)
                    - self.scores[a]
                    - self.scores[b];
                if gain <= SCORE_EPSILON {
                    continue;
                }

                let flagged_before = usize::from(self.flagged[a]) + usize::from(self.flagged[b]);
                let flagged_pair = usize::from(imbalance::is_flagged(&next_a))
                    + usize::from(imbalance::is_flagged(&next_b));
                let candidate = Swap {
                    first,
                    second,
                    gain,
                    flagged_after: flagged_now - flagged_before + flagged_pair,
                    compositions: (next_a, next_b),
                };

                if best.as_ref().map_or(true, |current| candidate.beats(current)) {
                    best = Some(candidate);
                }
            }
        }

        best
    }

    fn apply(&mut self, swap: &Swap) {
        let (first, second) = (swap.first, swap.second);
        let (a, b) = (self.group_of[first], self.group_of[second]);

        // The incoming member takes the outgoing member's slot
        for slot in self.slots[a].iter_mut().filter(|s| **s == first) {
            *slot = second;
        }
        for slot in self.slots[b].iter_mut().filter(|s| **s == second) {
            *slot = first;
        }
        self.group_of[first] = b;
        self.group_of[second] = a;

        let (next_a, next_b) = swap.compositions;
        for (group, composition) in [(a, next_a), (b, next_b)] {
            self.compositions[group] = composition;
            self.scores[group] = scorer::score_composition(&composition);
            self.flagged[group] = imbalance::is_flagged(&composition);
        }
    }

    fn into_groups(self) -> Vec<Group> {
        let members = self.members;
        self.slots
            .into_iter()
            .map(|slot| Group::new(slot.into_iter().map(|i| members[i].clone()).collect()))
            .collect()
    }
}
