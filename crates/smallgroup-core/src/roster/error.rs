use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid roster document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate member id {0} in roster")]
    DuplicateMember(i64),

    #[error("Attendance record references unknown member id {0}")]
    UnknownMember(i64),
}
