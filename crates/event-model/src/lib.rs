//! Rinkview Data Model
//!
//! Defines the data contracts shared by every Rinkview crate:
//! - **Games:** Immutable game identity and roster information
//! - **Events:** Clock-stamped, coordinate-tagged play-by-play records
//! - **Taxonomy:** Event-type grouping and deterministic colouring
//! - **Selection:** Team/player/event-group filter selections
//! - **Viewport:** Pan/zoom transform applied on top of rink rendering
//! - **Export:** The JSON payload written on explicit user request
//!
//! Event coordinates are in rink feet: `x` in `[0, 200]`, `y` in `[0, 85]`.

pub mod event;
pub mod export;
pub mod game;
pub mod selection;
pub mod taxonomy;
pub mod viewport;

pub use event::*;
pub use export::*;
pub use game::*;
pub use selection::*;
pub use taxonomy::*;
pub use viewport::*;
