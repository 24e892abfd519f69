use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::division::{export, DivisionError, PartitionOptimizer, TargetSize};
use crate::models::{Group, Member};

/// One numbered group as shown to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct GroupView {
    /// 1-based, in optimizer output order.
    pub number: usize,
    pub members: Vec<Member>,
    pub size: usize,
    pub score: f64,
    pub imbalanced: bool,
    pub leader_count: usize,
    pub has_facilitator: bool,
}

impl GroupView {
    fn from_group(number: usize, group: Group) -> Self {
        Self {
            number,
            size: group.size(),
            score: group.score(),
            imbalanced: group.is_imbalanced(),
            leader_count: group.leader_count(),
            has_facilitator: group.has_facilitator(),
            members: group.members,
        }
    }
}

/// Result of a division request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Division {
    pub groups: Vec<GroupView>,
    /// Markdown-style text for copy/paste.
    pub export_text: String,
    /// The optimizer stopped at its pass cap rather than a local optimum.
    pub unoptimized: bool,
}

impl Division {
    /// True when nobody was present; callers show "nothing to divide".
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Runs the optimizer over a present-member snapshot and dresses up the result.
///
/// Holds configuration only. Each call works on its own snapshot, so one
/// service can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct GroupDivisionService {
    optimizer: PartitionOptimizer,
    seed: Option<u64>,
}

impl GroupDivisionService {
    pub fn new(optimizer: PartitionOptimizer) -> Self {
        Self {
            optimizer,
            seed: None,
        }
    }

    /// Fix the RNG seed so repeated calls produce the same grouping.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Divide `present_members` into groups of about `target_size`.
    ///
    /// Rejects a non-positive `target_size` before any work is done. An empty
    /// snapshot is not an error and yields an empty `Division`.
    pub fn divide(
        &self,
        present_members: &[Member],
        target_size: i64,
    ) -> Result<Division, DivisionError> {
        let target = TargetSize::try_from(target_size)?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(self.divide_with_rng(present_members, target, &mut rng))
    }

    /// Like [`divide`](Self::divide) with a validated size and a caller-supplied RNG.
    pub fn divide_with_rng<R: Rng + ?Sized>(
        &self,
        present_members: &[Member],
        target: TargetSize,
        rng: &mut R,
    ) -> Division {
        let partition = self.optimizer.optimize(present_members, target, rng);
        let unoptimized = !partition.converged;

        let groups: Vec<GroupView> = partition
            .groups
            .into_iter()
            .enumerate()
            .map(|(i, group)| GroupView::from_group(i + 1, group))
            .collect();
        let export_text = export::render(&groups);

        info!(
            members = present_members.len(),
            target = target.get(),
            groups = groups.len(),
            imbalanced = groups.iter().filter(|g| g.imbalanced).count(),
            unoptimized,
            "Divided present members into groups"
        );

        Division {
            groups,
            export_text,
            unoptimized,
        }
    }
}
