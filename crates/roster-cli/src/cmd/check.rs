use crate::output::print_json;
use anyhow::{bail, Context};
use roster_core::config::{Config, WarnLevel};
use std::path::Path;

pub fn run(config_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path).context("failed to load config")?;
    let warnings = config.validate();
    let errors = warnings
        .iter()
        .filter(|w| w.level == WarnLevel::Error)
        .count();

    if json {
        print_json(&serde_json::json!({
            "ok": errors == 0,
            "activities": config.activities.len(),
            "warnings": warnings,
        }))?;
    } else {
        for w in &warnings {
            let tag = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("{tag}: {}", w.message);
        }
        if errors == 0 {
            println!("ok: {} activities", config.activities.len());
        }
    }

    if errors > 0 {
        bail!("config has {errors} error(s)");
    }
    Ok(())
}
