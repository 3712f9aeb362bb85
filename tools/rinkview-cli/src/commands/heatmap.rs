//! Print density buckets for one overlay.

use std::path::PathBuf;

use rinkview_analysis::heatmap::{HeatmapLayer, OverlayKind};
use rinkview_analysis::orientation::Orienter;
use rinkview_common::config::AppConfig;

use super::load_game;
use crate::FilterArgs;

pub fn run(
    path: PathBuf,
    kind: OverlayKind,
    top: usize,
    json: bool,
    filter: FilterArgs,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let (game, events) = load_game(&path)?;
    let filtered = filter.to_state().apply(&events);
    let orienter = Orienter::new(game.clone(), config.view.orientation);
    let layer = HeatmapLayer::build(kind, filtered.iter().copied(), &orienter, &config.density);

    if json {
        println!("{}", serde_json::to_string_pretty(&layer)?);
        return Ok(());
    }

    println!(
        "{} {} density ({:?} frame): {} point(s) in {} bucket(s)",
        game.title(),
        kind.id(),
        orienter.mode(),
        layer.total(),
        layer.spots.len()
    );
    if layer.is_empty() {
        println!("  no located events");
        return Ok(());
    }

    let mut spots: Vec<_> = layer.spots.iter().collect();
    spots.sort_by(|a, b| b.bucket.count.cmp(&a.bucket.count));
    println!("  {:<14} {:>5} {:>9} {:>7} {:>7}", "bucket", "count", "intensity", "radius", "opacity");
    for spot in spots.into_iter().take(top) {
        println!(
            "  {:<14} {:>5} {:>9.2} {:>7.1} {:>7.2}",
            spot.bucket.bucket_key, spot.bucket.count, spot.intensity, spot.radius, spot.opacity
        );
    }

    Ok(())
}
