//! Write the export payload for an events file.

use std::path::PathBuf;

use rinkview_common::config::AppConfig;

use super::load_dashboard;
use crate::FilterArgs;

pub fn run(
    path: PathBuf,
    output: Option<PathBuf>,
    filter: FilterArgs,
    config: AppConfig,
) -> anyhow::Result<()> {
    let dashboard = load_dashboard(&path, &filter, config)?;
    let payload = dashboard.export(!filter.is_empty())?;

    let written = match output {
        Some(file) => {
            payload.write_file(&file)?;
            file
        }
        None => payload.write_to(".")?,
    };

    println!(
        "Exported {} event(s) to {}",
        payload.event_count,
        written.display()
    );
    Ok(())
}
