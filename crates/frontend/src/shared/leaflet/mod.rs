//! Leaflet integration.
//!
//! Leaflet itself is included by `index.html`; this module binds the few
//! primitives the story map needs and wraps the map in an owned handle.

mod bindings;
mod handle;
mod loader;

pub use handle::MapHandle;
pub use loader::{is_loaded, wait_until_loaded};
