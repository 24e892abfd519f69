use std::collections::{HashMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Member;
use crate::roster::RosterError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub member_id: i64,
    pub date: NaiveDate,
    pub present: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Exported roster: every member plus the attendance log.
///
/// ```json
/// {
///   "members": [{ "id": 1, "surname": "Zhang", "given_name": "San", "gender": "M",
///                 "faith_status": "baptized", "role": "facilitator" }],
///   "attendance": [{ "member_id": 1, "date": "2024-03-01", "present": true }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl Roster {
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let contents = std::fs::read_to_string(path)?;
        let roster = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            members = roster.members.len(),
            attendance = roster.attendance.len(),
            "Loaded roster"
        );
        Ok(roster)
    }

    /// Parse and validate a roster document.
    pub fn from_json(contents: &str) -> Result<Self, RosterError> {
        let roster: Roster = serde_json::from_str(contents)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Member ids must be unique and every attendance record must point at a member.
    pub fn validate(&self) -> Result<(), RosterError> {
        let mut ids = HashSet::with_capacity(self.members.len());
        for member in &self.members {
            if !ids.insert(member.id) {
                return Err(RosterError::DuplicateMember(member.id));
            }
        }
        if let Some(record) = self.attendance.iter().find(|r| !ids.contains(&r.member_id)) {
            return Err(RosterError::UnknownMember(record.member_id));
        }
        Ok(())
    }

    pub fn active_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.active)
    }

    /// Attendance on `date` by member id. A later record for the same member
    /// and date overrides an earlier one.
    pub fn attendance_on(&self, date: NaiveDate) -> HashMap<i64, bool> {
        self.attendance
            .iter()
            .filter(|r| r.date == date)
            .map(|r| (r.member_id, r.present))
            .collect()
    }

    /// Active members marked present on `date`, in roster order.
    pub fn present_on(&self, date: NaiveDate) -> Vec<Member> {
        let attendance = self.attendance_on(date);
        self.active_members()
            .filter(|m| attendance.get(&m.id).copied().unwrap_or(false))
            .cloned()
            .collect()
    }
}
