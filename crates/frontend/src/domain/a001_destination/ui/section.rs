use super::details::DestinationDetails;
use super::list::DestinationList;
use super::map::{DestinationMap, MapController};
use crate::layout::header::Section;
use leptos::prelude::*;

/// The `#peta` section: detail panel and list beside the map.
///
/// Owns the map slot, so the map lives exactly as long as this section.
#[component]
pub fn DestinationSection() -> impl IntoView {
    provide_context(MapController::new());

    view! {
        <section id=Section::Map.anchor_id() class="explorer">
            <div class="explorer__card">
                <aside class="explorer__panel">
                    <div class="explorer__panel-inner">
                        <h2 class="explorer__panel-title">"Detail Lokasi"</h2>
                        <DestinationDetails />
                        <DestinationList />
                    </div>
                </aside>
                <div class="explorer__map">
                    <DestinationMap />
                </div>
            </div>
        </section>
    }
}
