//! Library-independent description of what the map shows.
//!
//! The frontend turns these values into Leaflet objects one to one.

pub mod marker;
pub mod viewport;

pub use marker::{marker_specs, MarkerSpec, MARKER_ANCHOR, MARKER_SIZE};
pub use viewport::Viewport;
