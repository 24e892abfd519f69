//! Shannon diversity scoring.
//!
//! A group's score is the unweighted sum of the Shannon index (natural log) of
//! its gender, faith status, and role distributions. Empty groups score 0.

use crate::models::{FaithStatus, Gender, Member, Role};

/// Per-attribute category counts for one group.
///
/// The optimizer keeps one of these per group so a candidate swap can be
/// scored without walking the member lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composition {
    gender: [usize; Gender::ALL.len()],
    faith: [usize; FaithStatus::ALL.len()],
    role: [usize; Role::ALL.len()],
    size: usize,
}

impl Composition {
    pub fn of<'a>(members: impl IntoIterator<Item = &'a Member>) -> Self {
        let mut composition = Self::default();
        for member in members {
            composition.add(member);
        }
        composition
    }

    pub fn add(&mut self, member: &Member) {
        self.gender[member.gender.index()] += 1;
        self.faith[member.faith_status.index()] += 1;
        self.role[member.role.index()] += 1;
        self.size += 1;
    }

    /// Panics in debug builds if `member` was never added.
    pub fn remove(&mut self, member: &Member) {
        debug_assert!(self.size > 0, "removing from an empty composition");
        self.gender[member.gender.index()] -= 1;
        self.faith[member.faith_status.index()] -= 1;
        self.role[member.role.index()] -= 1;
        self.size -= 1;
    }

    /// Composition after `outgoing` leaves and `incoming` joins.
    pub fn swapped(&self, outgoing: &Member, incoming: &Member) -> Self {
        let mut next = *self;
        next.remove(outgoing);
        next.add(incoming);
        next
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn count_gender(&self, gender: Gender) -> usize {
        self.gender[gender.index()]
    }

    pub fn count_faith(&self, status: FaithStatus) -> usize {
        self.faith[status.index()]
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.role[role.index()]
    }
}

/// Shannon index `-sum(p * ln p)` over the observed categories.
pub fn shannon_index(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.ln()
        })
        .sum()
}

pub fn score_composition(composition: &Composition) -> f64 {
    if composition.size == 0 {
        return 0.0;
    }
    shannon_index(&composition.gender)
        + shannon_index(&composition.faith)
        + shannon_index(&composition.role)
}

/// Diversity score of one group.
pub fn score(members: &[Member]) -> f64 {
    score_composition(&Composition::of(members))
}
