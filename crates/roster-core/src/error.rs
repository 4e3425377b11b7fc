use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Activity is full")]
    ActivityFull(String),

    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },

    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    #[error("config not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Coarse classification the transport layer maps onto status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Invalid,
    Internal,
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::ActivityNotFound(_) | RosterError::NotRegistered { .. } => {
                ErrorKind::NotFound
            }
            RosterError::AlreadySignedUp { .. } | RosterError::ActivityFull(_) => {
                ErrorKind::Conflict
            }
            RosterError::InvalidSeed(_) => ErrorKind::Invalid,
            RosterError::ConfigNotFound(_) | RosterError::Io(_) | RosterError::Yaml(_) => {
                ErrorKind::Internal
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_messages_match_wire_details() {
        assert_eq!(
            RosterError::ActivityNotFound("Chess Club".into()).to_string(),
            "Activity not found"
        );
        assert_eq!(
            RosterError::AlreadySignedUp {
                activity: "Chess Club".into(),
                email: "a@test.com".into(),
            }
            .to_string(),
            "Student is already signed up"
        );
        assert_eq!(
            RosterError::ActivityFull("Chess Club".into()).to_string(),
            "Activity is full"
        );
        assert_eq!(
            RosterError::NotRegistered {
                activity: "Chess Club".into(),
                email: "a@test.com".into(),
            }
            .to_string(),
            "Student is not registered for this activity"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(
            RosterError::ActivityNotFound("x".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(RosterError::ActivityFull("x".into()).kind(), ErrorKind::Conflict);
        assert_eq!(
            RosterError::InvalidSeed("bad".into()).kind(),
            ErrorKind::Invalid
        );
        let io = std::io::Error::other("disk full");
        assert_eq!(RosterError::Io(io).kind(), ErrorKind::Internal);
    }
}
