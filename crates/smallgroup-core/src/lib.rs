//! Core library for smallgroup.
//!
//! Takes a snapshot of the people present on a given day and splits them into
//! discussion groups of near-equal size that are as mixed as possible across
//! gender, faith status, and role.
//!
//! - [`models`]: `Member` records and the `Group`/`Partition` result types
//! - [`division`]: diversity scoring, imbalance detection, the partition
//!   optimizer, and the `GroupDivisionService` that ties them together
//! - [`roster`]: loads a roster document and answers "who is present on this date"
//!
//! The division code is pure and synchronous. It does no I/O and keeps no state
//! between calls, so it is safe to call from any thread.

pub mod division;
pub mod models;
pub mod roster;

pub use division::{
    Division, DivisionError, GroupDivisionService, GroupView, PartitionOptimizer, TargetSize,
};
pub use models::{EducationStatus, FaithStatus, Gender, Group, Member, Partition, Role};
pub use roster::{AttendanceRecord, Roster, RosterError};
