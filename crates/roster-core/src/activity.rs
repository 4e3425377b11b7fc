use serde::Serialize;

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// One signup-able offering. The name is the roster key and is serialized as
/// the map key on the wire, so it is skipped in the record body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip_serializing)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    /// Check the per-activity invariants: positive capacity, no duplicate
    /// participant, and participant count within capacity.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.max_participants == 0 {
            return Err(format!("'{}' has zero max_participants", self.name));
        }
        let mut seen = std::collections::HashSet::new();
        for p in &self.participants {
            if !seen.insert(p.as_str()) {
                return Err(format!("'{}' lists '{p}' more than once", self.name));
            }
        }
        if self.participants.len() > self.max_participants {
            return Err(format!(
                "'{}' has {} participants but max_participants is {}",
                self.name,
                self.participants.len(),
                self.max_participants
            ));
        }
        Ok(())
    }
}
