//! Report events that cannot be placed on the timeline or the rink.

use std::path::PathBuf;

use rinkview_analysis::timeline::to_absolute_time;
use rinkview_model::event::{RINK_LENGTH_FT, RINK_WIDTH_FT};
use rinkview_model::viewport::Point2D;

use super::load_game;

fn on_rink(p: Point2D) -> bool {
    (0.0..=RINK_LENGTH_FT).contains(&p.x) && (0.0..=RINK_WIDTH_FT).contains(&p.y)
}

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating events at: {}", path.display());

    let (game, events) = load_game(&path)?;
    println!("  Game: {}", game.title());
    println!("  Events: {}", events.len());

    let mut issues = Vec::new();
    for event in &events {
        if let Err(e) = to_absolute_time(event.period, &event.clock) {
            issues.push(format!("event {}: {e}", event.id));
        }
        if event.has_partial_coordinates() {
            issues.push(format!("event {}: coordinate pair is half present", event.id));
        }
        for point in [event.position(), event.target_position()].into_iter().flatten() {
            if !on_rink(point) {
                issues.push(format!(
                    "event {}: ({}, {}) is off the rink",
                    event.id, point.x, point.y
                ));
            }
        }
        if !game.owns(event) {
            issues.push(format!("event {}: belongs to a different game", event.id));
        }
    }

    if issues.is_empty() {
        println!("\nAll events are usable.");
    } else {
        println!("\nValidation issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
        println!(
            "\n{} issue(s) found. Affected events are left out of time or rink views.",
            issues.len()
        );
    }

    Ok(())
}
