//! Per-event rink markers and pass arrows.
//!
//! Positions are oriented rink feet; projecting to pixels is the caller's
//! job via [`crate::geometry::RinkScales`]. Events without a full
//! coordinate pair produce nothing here.

use rinkview_model::game::Roster;
use rinkview_model::taxonomy::EventColorMap;
use rinkview_model::viewport::Point2D;
use serde::Serialize;

use crate::orientation::Orienter;
use crate::timeline::TimelineEvent;

/// One dot on the rink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventMarker {
    pub event_id: u64,
    pub absolute_time: u32,
    pub event_type: String,
    pub team: String,
    pub player: String,
    pub color: &'static str,
    pub position: Point2D,
    /// Jersey number, when the roster knows the player.
    pub number: Option<u32>,
}

/// Markers for every event that has a location.
pub fn event_markers<'a, I>(
    events: I,
    orienter: &Orienter,
    colors: &EventColorMap,
    roster: &Roster,
) -> Vec<EventMarker>
where
    I: IntoIterator<Item = &'a TimelineEvent>,
{
    events
        .into_iter()
        .filter_map(|te| {
            let position = orienter.position(&te.event)?;
            Some(EventMarker {
                event_id: te.id(),
                absolute_time: te.absolute_time,
                event_type: te.event.event_type.clone(),
                team: te.event.team.clone(),
                player: te.event.player.clone(),
                color: colors.color_for(&te.event.event_type),
                position,
                number: roster.number_for(&te.event.player),
            })
        })
        .collect()
}

/// A pass from the primary to the target location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassArrow {
    pub event_id: u64,
    pub from: Point2D,
    pub to: Point2D,
    /// `play` is a completed pass, `incomplete play` is not.
    pub successful: bool,
}

/// Arrows for pass events carrying both coordinate pairs.
pub fn pass_arrows<'a, I>(events: I, orienter: &Orienter) -> Vec<PassArrow>
where
    I: IntoIterator<Item = &'a TimelineEvent>,
{
    events
        .into_iter()
        .filter_map(|te| {
            let successful = match te.event.normalized_type().as_str() {
                "play" => true,
                "incomplete play" => false,
                _ => return None,
            };
            Some(PassArrow {
                event_id: te.id(),
                from: orienter.position(&te.event)?,
                to: orienter.target_position(&te.event)?,
                successful,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Timeline;
    use rinkview_common::Orientation;
    use rinkview_model::event::GameEvent;
    use rinkview_model::game::{Game, PlayerInfo};

    fn events() -> Vec<GameEvent> {
        serde_json::from_value(serde_json::json!([
            {"id": 1, "period": 1, "clock": "19:50", "team": "Canada", "player": "Sarah Nurse",
             "event": "Play", "x_coordinate": 60.0, "y_coordinate": 20.0,
             "player_2": "Marie-Philip Poulin", "x_coordinate_2": 90.0, "y_coordinate_2": 30.0},
            {"id": 2, "period": 1, "clock": "19:40", "team": "USA", "player": "Hilary Knight",
             "event": "Incomplete Play", "x_coordinate": 60.0, "y_coordinate": 20.0,
             "x_coordinate_2": 90.0, "y_coordinate_2": 30.0},
            {"id": 3, "period": 1, "clock": "19:30", "team": "USA", "player": "Hilary Knight",
             "event": "Shot", "x_coordinate": 20.0, "y_coordinate": 40.0},
            {"id": 4, "period": 1, "clock": "19:20", "team": "USA", "player": "Hilary Knight",
             "event": "Takeaway"},
            {"id": 5, "period": 1, "clock": "19:10", "team": "Canada", "player": "Sarah Nurse",
             "event": "Penalty Taken", "x_coordinate": 100.0, "y_coordinate": 42.5,
             "player_2": "Hilary Knight", "x_coordinate_2": 110.0, "y_coordinate_2": 40.0}
        ]))
        .unwrap()
    }

    fn orienter() -> Orienter {
        Orienter::new(Game::new(1, "2022-02-17", "Canada", "USA"), Orientation::HomeLeft)
    }

    #[test]
    fn test_markers_skip_missing_coordinates() {
        let events = events();
        let timeline = Timeline::build(&events);
        let colors = EventColorMap::from_types(events.iter().map(|e| e.normalized_type()));
        let roster = Roster::new(&[PlayerInfo {
            id: 7,
            name: "sarah nurse".into(),
            number: Some(20),
        }]);

        let markers = event_markers(timeline.events(), &orienter(), &colors, &roster);
        let ids: Vec<u64> = markers.iter().map(|m| m.event_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);
        assert_eq!(markers[0].number, Some(20));
        assert_eq!(markers[1].number, None);
        assert_eq!(markers[1].position, Point2D::new(140.0, 65.0));
        assert_eq!(markers[0].color, colors.color_for("play"));
    }

    #[test]
    fn test_arrows_orient_both_ends_together() {
        let events = events();
        let timeline = Timeline::build(&events);
        let arrows = pass_arrows(timeline.events(), &orienter());

        assert_eq!(arrows.len(), 2);
        assert!(arrows[0].successful);
        assert_eq!(arrows[0].from, Point2D::new(60.0, 20.0));
        assert_eq!(arrows[0].to, Point2D::new(90.0, 30.0));

        assert!(!arrows[1].successful);
        assert_eq!(arrows[1].from, Point2D::new(140.0, 65.0));
        assert_eq!(arrows[1].to, Point2D::new(110.0, 55.0));
    }
}
