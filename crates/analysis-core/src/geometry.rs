//! Rink geometry: data-space (rink feet) to render-space mapping and the
//! fixed surface markings.
//!
//! The rink keeps its 200:85 aspect ratio inside a container of any size.
//! One uniform scale factor (`min(scale_x, scale_y)`) is used for positions
//! and for every radius or line width derived from feet, so circles stay
//! round when the container's aspect differs from the rink's.
//!
//! Data Y grows upward; render Y grows downward. This is the only axis
//! change made here. Team-perspective flips belong to
//! [`crate::orientation`].

use rinkview_model::event::{RINK_LENGTH_FT, RINK_WIDTH_FT};
use rinkview_model::viewport::Point2D;
use serde::Serialize;

/// Default share of the container the rink occupies.
pub const DEFAULT_FILL_RATIO: f64 = 0.9;

/// Corner radius of the boards.
pub const CORNER_RADIUS_FT: f64 = 28.0;
/// Centre (red) line.
pub const CENTER_LINE_X_FT: f64 = 100.0;
/// Blue lines, measured from each end board.
pub const BLUE_LINE_FROM_BOARD_FT: f64 = 75.0;
/// Goal lines, measured from each end board.
pub const GOAL_LINE_FROM_BOARD_FT: f64 = 11.0;
/// Centre circle and end-zone face-off circles share this radius.
pub const FACEOFF_CIRCLE_RADIUS_FT: f64 = 15.0;
/// End-zone face-off spots sit this far out from the goal line.
pub const FACEOFF_SPOT_FROM_GOAL_LINE_FT: f64 = 20.0;
/// Neutral-zone face-off spots sit this far inside the blue lines.
pub const NEUTRAL_SPOT_FROM_BLUE_LINE_FT: f64 = 5.0;
/// Lateral offset of every non-centre face-off spot from the long axis.
pub const FACEOFF_SPOT_OFFSET_Y_FT: f64 = 22.0;
/// Face-off dot radius.
pub const FACEOFF_DOT_RADIUS_FT: f64 = 1.0;

/// Mapping from rink feet to render pixels for one container size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RinkScales {
    /// Container width in pixels.
    pub width: f64,
    /// Container height in pixels.
    pub height: f64,
    /// Left edge of the rink rectangle.
    pub left: f64,
    /// Top edge of the rink rectangle.
    pub top: f64,
    /// Pixels per foot, shared by both axes.
    pub scale: f64,
    /// Rendered rink width in pixels.
    pub rink_width_px: f64,
    /// Rendered rink height in pixels.
    pub rink_height_px: f64,
}

impl RinkScales {
    /// Scales for a container using [`DEFAULT_FILL_RATIO`].
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_fill(width, height, DEFAULT_FILL_RATIO)
    }

    /// Scales for a container, letting the rink fill `fill_ratio` of the
    /// limiting axis.
    pub fn with_fill(width: f64, height: f64, fill_ratio: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let fill = fill_ratio.clamp(0.0, 1.0);

        let scale_x = width * fill / RINK_LENGTH_FT;
        let scale_y = height * fill / RINK_WIDTH_FT;
        let scale = scale_x.min(scale_y);

        let rink_width_px = RINK_LENGTH_FT * scale;
        let rink_height_px = RINK_WIDTH_FT * scale;

        Self {
            width,
            height,
            left: (width - rink_width_px) / 2.0,
            top: (height - rink_height_px) / 2.0,
            scale,
            rink_width_px,
            rink_height_px,
        }
    }

    /// Render X for a data X in feet.
    pub fn to_screen_x(&self, x_ft: f64) -> f64 {
        self.left + x_ft * self.scale
    }

    /// Render Y for a data Y in feet.
    pub fn to_screen_y(&self, y_ft: f64) -> f64 {
        self.top + (RINK_WIDTH_FT - y_ft) * self.scale
    }

    pub fn to_screen(&self, p: Point2D) -> Point2D {
        Point2D::new(self.to_screen_x(p.x), self.to_screen_y(p.y))
    }

    /// Data point under a render point; `None` for a degenerate container.
    pub fn to_data(&self, screen: Point2D) -> Option<Point2D> {
        if self.scale <= 0.0 {
            return None;
        }
        Some(Point2D::new(
            (screen.x - self.left) / self.scale,
            RINK_WIDTH_FT - (screen.y - self.top) / self.scale,
        ))
    }

    /// Convert a length in feet (radius, line width) to pixels.
    pub fn feet_to_px(&self, feet: f64) -> f64 {
        feet * self.scale
    }
}

/// Colour class of a rink marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkingKind {
    Boards,
    RedLine,
    BlueLine,
    GoalLine,
    CenterCircle,
    FaceoffCircle,
    FaceoffDot,
}

/// A fixed rink marking, in rink feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Marking {
    /// Rounded rectangle covering the whole surface, anchored at its
    /// top-left corner.
    Boards {
        origin: Point2D,
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    /// Full-width vertical line at `x`.
    Line { x: f64, kind: MarkingKind },
    /// Outlined or filled circle.
    Circle {
        center: Point2D,
        radius: f64,
        kind: MarkingKind,
    },
}

impl Marking {
    /// Same marking in render pixels.
    pub fn project(&self, scales: &RinkScales) -> Marking {
        match *self {
            Marking::Boards {
                origin,
                width,
                height,
                corner_radius,
            } => Marking::Boards {
                origin: scales.to_screen(origin),
                width: scales.feet_to_px(width),
                height: scales.feet_to_px(height),
                corner_radius: scales.feet_to_px(corner_radius),
            },
            Marking::Line { x, kind } => Marking::Line {
                x: scales.to_screen_x(x),
                kind,
            },
            Marking::Circle {
                center,
                radius,
                kind,
            } => Marking::Circle {
                center: scales.to_screen(center),
                radius: scales.feet_to_px(radius),
                kind,
            },
        }
    }
}

/// All surface markings, built from the geometric constants.
pub fn rink_markings() -> Vec<Marking> {
    let center_y = RINK_WIDTH_FT / 2.0;
    let mut markings = vec![
        Marking::Boards {
            origin: Point2D::new(0.0, RINK_WIDTH_FT),
            width: RINK_LENGTH_FT,
            height: RINK_WIDTH_FT,
            corner_radius: CORNER_RADIUS_FT,
        },
        Marking::Line {
            x: CENTER_LINE_X_FT,
            kind: MarkingKind::RedLine,
        },
        Marking::Circle {
            center: Point2D::new(CENTER_LINE_X_FT, center_y),
            radius: FACEOFF_CIRCLE_RADIUS_FT,
            kind: MarkingKind::CenterCircle,
        },
        Marking::Circle {
            center: Point2D::new(CENTER_LINE_X_FT, center_y),
            radius: FACEOFF_DOT_RADIUS_FT,
            kind: MarkingKind::FaceoffDot,
        },
    ];

    let blue_lines = [
        BLUE_LINE_FROM_BOARD_FT,
        RINK_LENGTH_FT - BLUE_LINE_FROM_BOARD_FT,
    ];
    let goal_lines = [
        GOAL_LINE_FROM_BOARD_FT,
        RINK_LENGTH_FT - GOAL_LINE_FROM_BOARD_FT,
    ];
    for x in blue_lines {
        markings.push(Marking::Line {
            x,
            kind: MarkingKind::BlueLine,
        });
    }
    for x in goal_lines {
        markings.push(Marking::Line {
            x,
            kind: MarkingKind::GoalLine,
        });
    }

    let end_zone_spots = [
        GOAL_LINE_FROM_BOARD_FT + FACEOFF_SPOT_FROM_GOAL_LINE_FT,
        RINK_LENGTH_FT - GOAL_LINE_FROM_BOARD_FT - FACEOFF_SPOT_FROM_GOAL_LINE_FT,
    ];
    let neutral_spots = [
        BLUE_LINE_FROM_BOARD_FT + NEUTRAL_SPOT_FROM_BLUE_LINE_FT,
        RINK_LENGTH_FT - BLUE_LINE_FROM_BOARD_FT - NEUTRAL_SPOT_FROM_BLUE_LINE_FT,
    ];
    let spot_rows = [
        center_y - FACEOFF_SPOT_OFFSET_Y_FT,
        center_y + FACEOFF_SPOT_OFFSET_Y_FT,
    ];

    for x in end_zone_spots {
        for y in spot_rows {
            markings.push(Marking::Circle {
                center: Point2D::new(x, y),
                radius: FACEOFF_CIRCLE_RADIUS_FT,
                kind: MarkingKind::FaceoffCircle,
            });
            markings.push(Marking::Circle {
                center: Point2D::new(x, y),
                radius: FACEOFF_DOT_RADIUS_FT,
                kind: MarkingKind::FaceoffDot,
            });
        }
    }
    for x in neutral_spots {
        for y in spot_rows {
            markings.push(Marking::Circle {
                center: Point2D::new(x, y),
                radius: FACEOFF_DOT_RADIUS_FT,
                kind: MarkingKind::FaceoffDot,
            });
        }
    }

    markings
}
