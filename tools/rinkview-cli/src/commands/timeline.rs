//! Print the ordered, filtered timeline.

use std::path::PathBuf;

use rinkview_analysis::timeline::Timeline;
use rinkview_common::clock::format_game_time;
use rinkview_common::config::AppConfig;

use super::load_game;
use crate::FilterArgs;

pub fn run(path: PathBuf, filter: FilterArgs, config: &AppConfig) -> anyhow::Result<()> {
    let (game, events) = load_game(&path)?;
    let state = filter.to_state();
    let filtered = state.apply(&events);
    let timeline = Timeline::build(filtered.iter().copied());

    println!("{} ({})", game.title(), game.game_date);
    if !filter.is_empty() {
        let selection = state.selection();
        println!(
            "  team={} player={} group={}",
            selection.team, selection.player, selection.event_type_group
        );
    }
    println!();

    let mut markers = timeline.period_markers().into_iter().peekable();
    for placed in timeline.events() {
        let e = &placed.event;
        let details = e.details().join(", ");
        println!(
            "{:>9}  #{:<5} {:<16} {:<24} {}{}",
            format_game_time(placed.absolute_time),
            e.id,
            e.team,
            e.player,
            e.event_type,
            if details.is_empty() {
                String::new()
            } else {
                format!(" ({details})")
            }
        );
        while let Some(marker) = markers.next_if(|m| m.time <= placed.absolute_time) {
            if marker.time == placed.absolute_time {
                println!("---- end of {} ----", marker.label);
            }
        }
    }

    println!();
    println!(
        "{} event(s), length {}s",
        timeline.len(),
        timeline.max_time_or(config.timeline.empty_max_time_secs)
    );
    for skipped in timeline.skipped() {
        println!("  skipped event {}: {}", skipped.event_id, skipped.error);
    }

    Ok(())
}
