//! Replay events against the wall clock.

use std::path::PathBuf;

use rinkview_common::clock::format_game_time;
use rinkview_common::config::AppConfig;
use rinkview_session::Dashboard;

use super::load_dashboard;
use crate::FilterArgs;

pub async fn run(
    path: PathBuf,
    from: u32,
    filter: FilterArgs,
    config: AppConfig,
) -> anyhow::Result<()> {
    let mut dashboard = load_dashboard(&path, &filter, config)?;
    dashboard.scrub_to(from);

    let (width, height) = (1000.0, 500.0);
    let title = dashboard
        .game()
        .map(|g| g.title())
        .unwrap_or_default();
    println!(
        "Playing {} from {} to {} (Ctrl-C to stop)",
        title,
        format_game_time(dashboard.clock().current_time()),
        format_game_time(dashboard.clock().max_time())
    );

    print_active(&dashboard, width, height);
    dashboard.play()?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let tick = tokio::select! {
            tick = dashboard.next_tick() => tick,
            _ = &mut ctrl_c => None,
        };
        let Some(tick) = tick else {
            break;
        };
        if dashboard.on_tick(tick) {
            print_active(&dashboard, width, height);
        }
    }

    dashboard.pause();
    println!(
        "Stopped at {}",
        format_game_time(dashboard.clock().current_time())
    );
    Ok(())
}

fn print_active(dashboard: &Dashboard, width: f64, height: f64) {
    let view = dashboard.view(width, height);
    for marker in &view.active_markers {
        let number = marker
            .number
            .map(|n| format!("#{n} "))
            .unwrap_or_default();
        println!(
            "{:>9}  {:<16} {}{:<24} {:<16} ({:.1}, {:.1})",
            view.time_label,
            marker.team,
            number,
            marker.player,
            marker.event_type,
            marker.position.x,
            marker.position.y
        );
    }
}
