//! Rinkview Analysis Core
//!
//! The spatiotemporal layer between raw event records and a rendered rink:
//! - **Timeline:** Period clocks folded into one monotonic game timeline
//! - **Geometry:** Rink-feet to render-space scales and rink markings
//! - **Orientation:** One canonical rule for flipping team-relative coordinates
//! - **Heatmap:** Fixed-precision density buckets and their render intensity
//! - **Filter:** The single team/player/event-group predicate every view uses
//! - **Markers & Summary:** Per-event markers, pass arrows, and counts
//!
//! This crate is pure computation: no I/O, no timers.
//! All inputs are data; all outputs are data.

pub mod filter;
pub mod geometry;
pub mod heatmap;
pub mod markers;
pub mod orientation;
pub mod summary;
pub mod timeline;

pub use filter::FilterState;
pub use geometry::RinkScales;
pub use heatmap::{aggregate, DensityBucket, HeatmapLayer, OverlayKind};
pub use orientation::Orienter;
pub use summary::SummaryStats;
pub use timeline::{to_absolute_time, Timeline, TimelineEvent};
