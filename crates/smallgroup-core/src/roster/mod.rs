//! Roster snapshot adapter.
//!
//! The roster itself (member records, attendance toggles) is owned elsewhere.
//! This module reads an exported roster document and answers the one question
//! the division code needs: who is present on a given date.

pub mod error;
pub mod snapshot;

pub use error::RosterError;
pub use snapshot::{AttendanceRecord, Roster};
