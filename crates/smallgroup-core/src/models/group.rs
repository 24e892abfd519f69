use serde::{Deserialize, Serialize};

use crate::division::{imbalance, scorer};
use crate::models::{Member, Role};

/// One discussion group produced by the optimizer.
///
/// Member order is the order the optimizer left them in; exports preserve it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub members: Vec<Member>,
}

impl Group {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn score(&self) -> f64 {
        scorer::score(&self.members)
    }

    pub fn is_imbalanced(&self) -> bool {
        imbalance::flag(&self.members)
    }

    pub fn leader_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_leader()).count()
    }

    pub fn has_facilitator(&self) -> bool {
        self.members.iter().any(|m| m.role == Role::Facilitator)
    }
}

/// Ordered list of groups for one division run.
///
/// Built fresh per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub groups: Vec<Group>,
    /// Improvement passes the local search ran.
    pub passes: usize,
    /// False when the pass cap was hit while an improving swap still existed.
    pub converged: bool,
    /// Total score after seeding, then after each accepted swap.
    pub score_trace: Vec<f64>,
}

impl Partition {
    /// The "nothing to divide" result.
    pub fn empty() -> Self {
        Self {
            groups: Vec::new(),
            passes: 0,
            converged: true,
            score_trace: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Group::size).sum()
    }

    /// Sum of every group's diversity score.
    pub fn total_score(&self) -> f64 {
        self.groups.iter().map(Group::score).sum()
    }
}
