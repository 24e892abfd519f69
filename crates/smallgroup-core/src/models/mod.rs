//! Data models for roster members and division results.
//!
//! - `Member`: one person on the roster with the attributes the optimizer mixes on
//! - `Gender`, `FaithStatus`, `Role`: the categorical attributes that are scored
//! - `EducationStatus`: display-only attribute carried along with the member
//! - `Group`, `Partition`: output of the partition optimizer

pub mod group;
pub mod member;

pub use group::{Group, Partition};
pub use member::{EducationStatus, FaithStatus, Gender, Member, Role};
