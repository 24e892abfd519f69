use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub enum Gender {
    #[serde(rename = "M", alias = "m")]
    Male,
    #[serde(rename = "F", alias = "f")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter code used in exports.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum FaithStatus {
    Baptized,
    Believer,
    Seeker,
    Unknown,
}

impl FaithStatus {
    pub const ALL: [FaithStatus; 4] = [
        FaithStatus::Baptized,
        FaithStatus::Believer,
        FaithStatus::Seeker,
        FaithStatus::Unknown,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for FaithStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaithStatus::Baptized => write!(f, "baptized"),
            FaithStatus::Believer => write!(f, "believer"),
            FaithStatus::Seeker => write!(f, "seeker"),
            FaithStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Leadership role within the fellowship.
///
/// Variant order matters: leaders sort before everyone else, which is what the
/// optimizer relies on when it deals out its seed assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Counselor,
    Facilitator,
    /// No leadership role. Stored as `"none"`; older rosters use `"regular"`.
    #[serde(rename = "none", alias = "regular")]
    Regular,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Counselor, Role::Facilitator, Role::Regular];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_leader(self) -> bool {
        matches!(self, Role::Counselor | Role::Facilitator)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Counselor => write!(f, "counselor"),
            Role::Facilitator => write!(f, "facilitator"),
            Role::Regular => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum EducationStatus {
    Undergraduate,
    Graduate,
    Graduated,
}

/// A roster member as handed to the division code.
///
/// Only `gender`, `faith_status`, and `role` feed the diversity score. The
/// remaining fields ride along so callers can render them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Member {
    pub id: i64,
    pub surname: String,
    pub given_name: String,
    pub gender: Gender,
    pub faith_status: FaithStatus,
    pub role: Role,
    #[serde(default)]
    pub education_status: Option<EducationStatus>,
    #[serde(default)]
    pub prep_attended: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Member {
    /// "Surname GivenName", the form used in group exports.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.surname, self.given_name)
    }

    pub fn is_leader(&self) -> bool {
        self.role.is_leader()
    }
}
