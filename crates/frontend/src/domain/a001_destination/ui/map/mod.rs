mod legend;
mod state;

pub use legend::CategoryLegend;
pub use state::{use_map_controller, MapController, MapStatus};

use super::select_and_focus;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::leaflet::{wait_until_loaded, MapHandle};
use contracts::shared::map::marker_specs;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Element id of the map canvas
pub const MAP_CONTAINER_ID: &str = "map";

/// Leaflet map with one marker per destination.
///
/// The map is created once the destinations are loaded and the canvas is in
/// the DOM, and destroyed when this component is disposed.
#[component]
pub fn DestinationMap() -> impl IntoView {
    let ctx = use_global_context();
    let map = use_map_controller();
    let container = NodeRef::<leptos::html::Div>::new();

    let destinations = Memo::new(move |_| ctx.catalog.with(|c| c.destinations().to_vec()));

    Effect::new(move |_| {
        if ctx.loading.get() {
            return;
        }
        let specs = destinations.with(|list| marker_specs(list));
        if specs.is_empty() {
            return;
        }
        let Some(element) = container.get() else {
            return;
        };
        if !map.begin_loading() {
            return;
        }

        let config = ctx.config.get_untracked();
        spawn_local(async move {
            let result = match wait_until_loaded(config.map.library_timeout_ms).await {
                Ok(()) => MapHandle::mount(&element, &config, &specs, move |id| {
                    select_and_focus(ctx, map, id)
                }),
                Err(e) => Err(e),
            };
            match result {
                Ok(handle) => {
                    if !map.install(handle) {
                        log!("🗺️ map view gone before the map was ready");
                    }
                }
                Err(e) => map.fail(e),
            }
        });
    });

    on_cleanup(move || {
        log!("💥 DestinationMap DESTROYED");
        map.release();
    });

    let overlay = move || match map.status.get() {
        MapStatus::Idle | MapStatus::Ready(_) => None,
        MapStatus::Loading => Some(
            view! {
                <div class="map-view__overlay">
                    <span>"Memuat peta..."</span>
                </div>
            }
            .into_any(),
        ),
        MapStatus::Failed(error) => Some(
            view! {
                <div class="map-view__overlay map-view__overlay--error" role="alert">
                    {icon("alert")}
                    <strong>"Peta tidak dapat dimuat"</strong>
                    <span class="map-view__error-detail">{error.to_string()}</span>
                </div>
            }
            .into_any(),
        ),
    };

    view! {
        <div class="map-view">
            <div id=MAP_CONTAINER_ID node_ref=container class="map-view__canvas"></div>
            {overlay}
            <CategoryLegend />
        </div>
    }
}
