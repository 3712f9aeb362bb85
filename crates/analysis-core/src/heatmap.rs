//! Density aggregation for heatmap overlays.
//!
//! [`aggregate`] is a pure function of its point list: it knows nothing
//! about filters or overlay kinds. Callers hand it an already-filtered,
//! already-oriented point set and recompute from scratch whenever that set
//! changes.

use std::collections::BTreeMap;

use rinkview_common::{DensityConfig, DensityStyle};
use rinkview_model::event::GameEvent;
use rinkview_model::viewport::Point2D;
use serde::{Deserialize, Serialize};

use crate::orientation::Orienter;

/// Largest supported rounding precision; keeps scaled keys well inside `i64`.
const MAX_PRECISION: u32 = 6;

/// One fixed-precision grid cell and the number of points that fell in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityBucket {
    /// Rounded coordinates joined as `"x,y"`.
    pub bucket_key: String,
    pub x: f64,
    pub y: f64,
    pub count: usize,
}

/// Bucket points by coordinates rounded to `precision` decimal places.
///
/// Non-finite points are skipped. Buckets come back ordered by `(x, y)`.
pub fn aggregate<I>(points: I, precision: u32) -> Vec<DensityBucket>
where
    I: IntoIterator<Item = Point2D>,
{
    let precision = precision.min(MAX_PRECISION);
    let factor = 10f64.powi(precision as i32);

    let mut cells: BTreeMap<(i64, i64), usize> = BTreeMap::new();
    for point in points {
        if !point.x.is_finite() || !point.y.is_finite() {
            continue;
        }
        let key = (
            (point.x * factor).round() as i64,
            (point.y * factor).round() as i64,
        );
        *cells.entry(key).or_insert(0) += 1;
    }

    let width = precision as usize;
    cells
        .into_iter()
        .map(|((kx, ky), count)| {
            let x = kx as f64 / factor;
            let y = ky as f64 / factor;
            DensityBucket {
                bucket_key: format!("{x:.width$},{y:.width$}"),
                x,
                y,
                count,
            }
        })
        .collect()
}

/// Largest bucket count, or 1 when there are no buckets.
pub fn max_count(buckets: &[DensityBucket]) -> usize {
    buckets.iter().map(|b| b.count).max().unwrap_or(1).max(1)
}

/// Bucket count relative to `max_count`, in `(0, 1]` for non-empty buckets.
pub fn intensity_of(bucket: &DensityBucket, max_count: usize) -> f64 {
    bucket.count as f64 / max_count.max(1) as f64
}

fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + t * (max - min)
}

/// A bucket with its render radius and opacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensitySpot {
    #[serde(flatten)]
    pub bucket: DensityBucket,
    pub intensity: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl DensitySpot {
    pub fn new(bucket: DensityBucket, max_count: usize, style: &DensityStyle) -> Self {
        let intensity = intensity_of(&bucket, max_count);
        Self {
            bucket,
            intensity,
            radius: lerp(style.radius_min, style.radius_max, intensity),
            opacity: lerp(style.opacity_min, style.opacity_max, intensity),
        }
    }
}

/// Which points feed an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayKind {
    /// Events typed `shot`.
    Shot,
    /// Events typed `goal`.
    Goal,
    /// Every event with coordinates.
    Event,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 3] = [OverlayKind::Shot, OverlayKind::Goal, OverlayKind::Event];

    pub fn includes(self, event: &GameEvent) -> bool {
        match self {
            OverlayKind::Shot => event.normalized_type() == "shot",
            OverlayKind::Goal => event.normalized_type() == "goal",
            OverlayKind::Event => true,
        }
    }

    pub fn style(self, config: &DensityConfig) -> DensityStyle {
        match self {
            OverlayKind::Shot => config.shot,
            OverlayKind::Goal => config.goal,
            OverlayKind::Event => config.event,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            OverlayKind::Shot => "shot",
            OverlayKind::Goal => "goal",
            OverlayKind::Event => "event",
        }
    }
}

impl std::str::FromStr for OverlayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shot" | "shots" => Ok(OverlayKind::Shot),
            "goal" | "goals" => Ok(OverlayKind::Goal),
            "event" | "events" => Ok(OverlayKind::Event),
            other => Err(format!("unknown overlay kind: {other}")),
        }
    }
}

/// Oriented locations of the events an overlay draws from.
pub fn overlay_points<'a, I>(kind: OverlayKind, events: I, orienter: &Orienter) -> Vec<Point2D>
where
    I: IntoIterator<Item = &'a GameEvent>,
{
    events
        .into_iter()
        .filter(|e| kind.includes(e))
        .filter_map(|e| orienter.position(e))
        .collect()
}

/// A fully styled overlay, positions in oriented rink feet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapLayer {
    pub kind: OverlayKind,
    pub max_count: usize,
    pub spots: Vec<DensitySpot>,
}

impl HeatmapLayer {
    /// Build one overlay from a filtered event set.
    pub fn build<'a, I>(
        kind: OverlayKind,
        events: I,
        orienter: &Orienter,
        config: &DensityConfig,
    ) -> Self
    where
        I: IntoIterator<Item = &'a GameEvent>,
    {
        let buckets = aggregate(overlay_points(kind, events, orienter), config.precision);
        let max_count = max_count(&buckets);
        let style = kind.style(config);
        let spots = buckets
            .into_iter()
            .map(|b| DensitySpot::new(b, max_count, &style))
            .collect();

        tracing::trace!(overlay = kind.id(), max_count, "built heatmap layer");
        Self {
            kind,
            max_count,
            spots,
        }
    }

    /// Total points represented.
    pub fn total(&self) -> usize {
        self.spots.iter().map(|s| s.bucket.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}
