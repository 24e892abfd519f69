//! Splitting the present members into diverse discussion groups.
//!
//! Leaves first:
//!
//! - [`scorer`]: Shannon diversity of one group, summed over gender, faith status, and role
//! - [`imbalance`]: flags groups with a lone member of one gender
//! - [`optimizer`]: seeded round-robin assignment followed by pairwise-swap hill climbing
//! - [`service`]: validates the request, runs the optimizer, and builds the views and export

pub mod error;
pub mod export;
pub mod imbalance;
pub mod optimizer;
pub mod scorer;
pub mod service;
pub mod target;

pub use error::DivisionError;
pub use optimizer::{group_count, size_plan, PartitionOptimizer, DEFAULT_MAX_PASSES};
pub use scorer::Composition;
pub use service::{Division, GroupDivisionService, GroupView};
pub use target::TargetSize;
