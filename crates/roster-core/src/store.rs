use crate::activity::Activity;
use crate::error::{Result, RosterError};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Confirmation
// ---------------------------------------------------------------------------

/// Result of a successful roster mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    SignedUp { activity: String, email: String },
    Withdrawn { activity: String, email: String },
}

impl Confirmation {
    pub fn activity(&self) -> &str {
        match self {
            Confirmation::SignedUp { activity, .. } | Confirmation::Withdrawn { activity, .. } => {
                activity
            }
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Confirmation::SignedUp { email, .. } | Confirmation::Withdrawn { email, .. } => email,
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::SignedUp { activity, email } => {
                write!(f, "Signed up {email} for {activity}")
            }
            Confirmation::Withdrawn { activity, email } => {
                write!(f, "Removed {email} from {activity}")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// RosterSnapshot
// ---------------------------------------------------------------------------

/// Owned copy of the roster, in roster order. Serializes as a JSON object
/// keyed by activity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSnapshot {
    activities: Vec<Activity>,
}

impl RosterSnapshot {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Serialize for RosterSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for a in &self.activities {
            map.serialize_entry(&a.name, a)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// RosterStore
// ---------------------------------------------------------------------------

/// Owns the roster and enforces the signup/withdraw invariants.
///
/// Not internally synchronised: callers that share a store across threads
/// must serialise access (the server holds it behind a single mutex).
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    activities: Vec<Activity>,
    index: HashMap<String, usize>,
}

impl RosterStore {
    /// Build a store from seed activities, preserving their order.
    pub fn from_activities<I>(activities: I) -> Result<Self>
    where
        I: IntoIterator<Item = Activity>,
    {
        let mut store = Self::default();
        for activity in activities {
            activity.check_invariants().map_err(RosterError::InvalidSeed)?;
            if store.index.contains_key(&activity.name) {
                return Err(RosterError::InvalidSeed(format!(
                    "duplicate activity name '{}'",
                    activity.name
                )));
            }
            store
                .index
                .insert(activity.name.clone(), store.activities.len());
            store.activities.push(activity);
        }
        Ok(store)
    }

    pub fn with_default_seed() -> Result<Self> {
        Self::from_activities(crate::seed::default_activities())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn get_activity(&self, name: &str) -> Option<&Activity> {
        self.index.get(name).map(|&i| &self.activities[i])
    }

    fn activity_mut(&mut self, name: &str) -> Result<&mut Activity> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.activities[i]),
            None => Err(RosterError::ActivityNotFound(name.to_string())),
        }
    }

    // ---------------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------------

    pub fn list_activities(&self) -> RosterSnapshot {
        RosterSnapshot {
            activities: self.activities.clone(),
        }
    }

    // ---------------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------------

    /// Append `email` to the activity's participants. Preconditions are
    /// checked in order (exists, not registered, has room) before any mutation.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<Confirmation> {
        let activity = self.activity_mut(activity_name)?;
        if activity.is_registered(email) {
            return Err(RosterError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }
        if activity.is_full() {
            return Err(RosterError::ActivityFull(activity_name.to_string()));
        }
        activity.participants.push(email.to_string());
        Ok(Confirmation::SignedUp {
            activity: activity_name.to_string(),
            email: email.to_string(),
        })
    }

    /// Remove exactly one occurrence of `email` from the activity.
    pub fn withdraw(&mut self, activity_name: &str, email: &str) -> Result<Confirmation> {
        let activity = self.activity_mut(activity_name)?;
        let pos = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RosterError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;
        activity.participants.remove(pos);
        Ok(Confirmation::Withdrawn {
            activity: activity_name.to_string(),
            email: email.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
