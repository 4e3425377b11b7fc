use crate::output::{print_json, print_table};
use anyhow::Context;
use roster_core::config::Config;
use std::path::Path;

pub fn run(config_path: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path).context("failed to load config")?;
    let store = config.build_store().context("invalid activity roster")?;
    let snapshot = store.list_activities();

    if json {
        return print_json(&snapshot);
    }

    if snapshot.is_empty() {
        println!("No activities.");
        return Ok(());
    }

    let rows = snapshot
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.schedule.clone(),
                format!("{}/{}", a.participants.len(), a.max_participants),
                a.spots_left().to_string(),
            ]
        })
        .collect();
    print_table(&["NAME", "SCHEDULE", "ENROLLED", "SPOTS"], rows);
    Ok(())
}
