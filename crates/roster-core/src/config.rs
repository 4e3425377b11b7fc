use crate::activity::Activity;
use crate::error::{Result, RosterError};
use crate::seed;
use crate::store::RosterStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "roster.yaml";
pub const CONFIG_ENV: &str = "ROSTER_CONFIG";

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ActivitySeed
// ---------------------------------------------------------------------------

/// On-disk form of an activity. Unlike the wire form, the name is a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySeed {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: usize,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl From<ActivitySeed> for Activity {
    fn from(s: ActivitySeed) -> Self {
        Activity::new(s.name, s.description, s.schedule, s.max_participants)
            .with_participants(s.participants)
    }
}

impl From<Activity> for ActivitySeed {
    fn from(a: Activity) -> Self {
        Self {
            name: a.name,
            description: a.description,
            schedule: a.schedule,
            max_participants: a.max_participants,
            participants: a.participants,
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub open_browser: bool,
    #[serde(default = "default_activities")]
    pub activities: Vec<ActivitySeed>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_activities() -> Vec<ActivitySeed> {
    seed::default_activities()
        .into_iter()
        .map(ActivitySeed::from)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open_browser: false,
            activities: default_activities(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RosterError::ConfigNotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Load `path` when given; otherwise `./roster.yaml` if present, else defaults.
    /// An explicit path that does not exist is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                if local.exists() {
                    Self::load(&local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(path, data.as_bytes())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.activities.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "no activities configured; the roster will be empty".to_string(),
            });
        }

        let mut names = std::collections::HashSet::new();
        for seed in &self.activities {
            if !names.insert(seed.name.as_str()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("duplicate activity name '{}'", seed.name),
                });
            }

            let activity = Activity::from(seed.clone());
            if let Err(msg) = activity.check_invariants() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: msg,
                });
            } else if activity.is_full() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("'{}' is already full", seed.name),
                });
            }

            if seed.name.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: "activity with an empty name".to_string(),
                });
            }
        }

        warnings
    }

    pub fn build_store(&self) -> Result<RosterStore> {
        RosterStore::from_activities(self.activities.iter().cloned().map(Activity::from))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
