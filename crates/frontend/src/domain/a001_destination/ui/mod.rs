pub mod details;
pub mod list;
pub mod map;
pub mod section;

pub use section::DestinationSection;

use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_destination::DestinationId;
use map::MapController;

/// Shared click handling of list entries and markers: select, then
/// recenter the map when one exists.
pub fn select_and_focus(ctx: AppGlobalContext, map: MapController, id: DestinationId) {
    if let Some(viewport) = ctx.select(id) {
        map.focus(viewport);
    }
}
