//! Show game identity and headline counts.

use std::path::PathBuf;

use rinkview_analysis::summary::SummaryStats;
use rinkview_analysis::timeline::Timeline;
use rinkview_common::clock::format_game_time;
use rinkview_common::config::AppConfig;
use rinkview_model::event::event_types;
use rinkview_model::taxonomy::{EventColorMap, EventTypeGroup};

use super::load_game;

pub fn run(path: PathBuf, config: &AppConfig) -> anyhow::Result<()> {
    let (game, events) = load_game(&path)?;
    let timeline = Timeline::build(&events);
    let summary = SummaryStats::from_events(&events);
    let max_time = timeline.max_time_or(config.timeline.empty_max_time_secs);

    println!("Game: {}", game.title());
    println!("  Date: {}", game.game_date);
    println!("  Home: {}", game.home_team);
    println!("  Away: {}", game.away_team);
    println!();

    println!("Timeline:");
    println!("  Events: {} ({} placed)", events.len(), timeline.len());
    if !timeline.skipped().is_empty() {
        println!("  Unplaced: {}", timeline.skipped().len());
    }
    println!("  Length: {} ({}s)", format_game_time(max_time), max_time);
    for marker in timeline.period_markers() {
        println!("  {} ends at {}s", marker.label, marker.time);
    }
    println!();

    println!("Summary:");
    println!("  Shots: {}", summary.shots);
    println!("  Goals: {}", summary.goals);
    println!("  Penalties: {}", summary.penalties);
    println!("  Shot accuracy: {:.1}%", summary.shot_accuracy_pct);
    for group in EventTypeGroup::ALL {
        let count = summary.group_count(group);
        if count > 0 {
            println!("  {}: {}", group.label(), count);
        }
    }
    println!();

    println!("Event types:");
    let colors = EventColorMap::from_types(event_types(&events));
    for (event_type, color) in colors.entries() {
        println!("  {event_type} {color}");
    }

    Ok(())
}
