use super::map::use_map_controller;
use super::select_and_focus;
use crate::layout::global_context::use_global_context;
use crate::shared::components::ui::CategoryBadge;
use contracts::domain::a001_destination::Destination;
use contracts::shared::format::format_place;
use leptos::prelude::*;

/// Scrollable list of every destination; clicking an entry selects it
#[component]
pub fn DestinationList() -> impl IntoView {
    let ctx = use_global_context();
    let map = use_map_controller();

    let destinations = Memo::new(move |_| ctx.catalog.with(|c| c.destinations().to_vec()));
    let count = move || destinations.with(|list| list.len());

    view! {
        <div class="destination-list">
            <h4 class="destination-list__title">
                {move || format!("Semua Lokasi ({})", count())}
            </h4>
            <Show
                when=move || { count() > 0 }
                fallback=|| view! {
                    <p class="destination-list__empty">"Belum ada lokasi untuk ditampilkan."</p>
                }
            >
                <div class="destination-list__items">
                    <For
                        each=move || destinations.get()
                        key=|destination| destination.id
                        children=move |destination: Destination| {
                            let id = destination.id;
                            let is_selected = move || ctx.catalog.with(|c| c.is_selected(id));
                            view! {
                                <button
                                    class="destination-list__item"
                                    class:destination-list__item--selected=is_selected
                                    data-destination-id=id.value().to_string()
                                    on:click=move |_| select_and_focus(ctx, map, id)
                                >
                                    <div class="destination-list__row">
                                        <span class="destination-list__name">{destination.title.clone()}</span>
                                        <CategoryBadge category=destination.category.clone() compact=true />
                                    </div>
                                    <p class="destination-list__place">
                                        {format_place(&destination.location, &destination.province)}
                                    </p>
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
