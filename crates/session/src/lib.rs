//! Rinkview Session
//!
//! The stateful half of Rinkview. Everything derived lives in
//! `rinkview-analysis`; this crate owns the inputs and the two
//! asynchronous actors:
//! - **Playback:** a pure clock plus an RAII interval timer that feeds it
//! - **Viewport:** pan/zoom with an Idle/Dragging pointer state machine
//! - **Loader:** latest-request-wins guard for game data responses
//! - **Dashboard:** the composition root that recomputes views on demand

pub mod dashboard;
pub mod loader;
pub mod playback;
pub mod viewport;

pub use dashboard::{Dashboard, DashboardView};
pub use loader::{GameLoader, RequestToken};
pub use playback::{PlaybackClock, PlaybackState, PlaybackTick, PlaybackTimer};
pub use viewport::{DragState, ViewportController};
