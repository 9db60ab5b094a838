use crate::shared::leaflet::MapHandle;
use contracts::shared::map::Viewport;
use contracts::shared::error::MapError;
use leptos::prelude::*;

/// Lifecycle of the map inside its view
#[derive(Debug, Clone, PartialEq)]
pub enum MapStatus {
    /// Waiting for destinations or for the container to mount
    Idle,
    /// Waiting for the library, building markers
    Loading,
    /// Map shown with this many markers
    Ready(usize),
    Failed(MapError),
}

/// Slot holding the map of the current view.
///
/// The handle is `!Send`, so it lives in local storage; the controller
/// itself is `Copy` and is shared through context with every component that
/// needs to move the map.
#[derive(Clone, Copy)]
pub struct MapController {
    slot: StoredValue<Option<MapHandle>, LocalStorage>,
    pub status: RwSignal<MapStatus>,
}

impl MapController {
    pub fn new() -> Self {
        Self {
            slot: StoredValue::new_local(None),
            status: RwSignal::new(MapStatus::Idle),
        }
    }

    /// Store a freshly built map.
    ///
    /// Returns `false` if the owning view is already gone; the handle is then
    /// dropped, which removes the map again.
    pub fn install(&self, handle: MapHandle) -> bool {
        let markers = handle.marker_count();
        let installed = self
            .slot
            .try_update_value(move |slot| *slot = Some(handle))
            .is_some();
        if installed {
            self.status.set(MapStatus::Ready(markers));
        }
        installed
    }

    pub fn fail(&self, error: MapError) {
        log::error!("Map unavailable: {}", error);
        let _ = self.status.try_set(MapStatus::Failed(error));
    }

    /// Start an initialization unless one already ran or is running
    pub fn begin_loading(&self) -> bool {
        if self.status.get_untracked() != MapStatus::Idle {
            return false;
        }
        self.status.set(MapStatus::Loading);
        true
    }

    /// Recenter on a selection; no-op without a map
    pub fn focus(&self, viewport: Viewport) {
        let _ = self.slot.try_with_value(|slot| {
            if let Some(handle) = slot {
                handle.set_view(viewport);
            }
        });
    }

    /// Destroy the map, if any
    pub fn release(&self) {
        if let Some(Some(handle)) = self.slot.try_update_value(Option::take) {
            drop(handle);
        }
        let _ = self.status.try_set(MapStatus::Idle);
    }
}

impl Default for MapController {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_map_controller() -> MapController {
    use_context::<MapController>().expect("MapController context not found")
}
