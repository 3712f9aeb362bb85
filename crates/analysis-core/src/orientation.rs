//! Perspective normalisation.
//!
//! Raw coordinates are recorded from the eventing team's point of view, so
//! one physical spot can arrive as two different points. Every consumer
//! (markers, pass arrows, heatmaps) goes through [`Orienter`] so the same
//! flip rule applies everywhere.

use rinkview_common::Orientation;
use rinkview_model::event::{GameEvent, RINK_LENGTH_FT, RINK_WIDTH_FT};
use rinkview_model::game::{Game, TeamSide};
use rinkview_model::viewport::Point2D;

/// Whether a point recorded by `recording_team` must be flipped.
///
/// Under [`Orientation::HomeLeft`] anything not recorded by the home team
/// flips, including unrecognised team names. [`Orientation::Absolute`]
/// always flips.
pub fn should_flip(recording_team: &str, game: &Game, mode: Orientation) -> bool {
    match mode {
        Orientation::Absolute => true,
        Orientation::HomeLeft => game.side_of(recording_team) != Some(TeamSide::Home),
    }
}

/// Rotate a point half a turn about the rink centre when the rule says so.
pub fn orient_coordinates(
    point: Point2D,
    recording_team: &str,
    game: &Game,
    mode: Orientation,
) -> Point2D {
    if should_flip(recording_team, game, mode) {
        flip(point)
    } else {
        point
    }
}

fn flip(point: Point2D) -> Point2D {
    Point2D::new(RINK_LENGTH_FT - point.x, RINK_WIDTH_FT - point.y)
}

/// Orientation rule bound to one game.
#[derive(Debug, Clone)]
pub struct Orienter {
    game: Game,
    mode: Orientation,
}

impl Orienter {
    pub fn new(game: Game, mode: Orientation) -> Self {
        Self { game, mode }
    }

    pub fn mode(&self) -> Orientation {
        self.mode
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Oriented primary location of an event.
    pub fn position(&self, event: &GameEvent) -> Option<Point2D> {
        event.position().map(|p| self.orient(p, &event.team))
    }

    /// Oriented target location, flipped under the same condition as
    /// [`Self::position`].
    pub fn target_position(&self, event: &GameEvent) -> Option<Point2D> {
        event.target_position().map(|p| self.orient(p, &event.team))
    }

    pub fn orient(&self, point: Point2D, recording_team: &str) -> Point2D {
        orient_coordinates(point, recording_team, &self.game, self.mode)
    }
}
