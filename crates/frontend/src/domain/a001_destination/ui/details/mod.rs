use crate::layout::global_context::use_global_context;
use crate::shared::components::ui::CategoryBadge;
use crate::shared::icons::icon;
use contracts::domain::a001_destination::Destination;
use contracts::shared::format::{format_coordinates, format_place_line};
use leptos::prelude::*;

/// Details of the selected destination
#[component]
pub fn DestinationDetails() -> impl IntoView {
    let ctx = use_global_context();
    let selected = Memo::new(move |_| ctx.selected());

    view! {
        <div class="destination-details">
            {move || match selected.get() {
                Some(destination) => view! { <SelectedDestination destination=destination /> }.into_any(),
                None => view! {
                    <div class="destination-details__empty">
                        <div class="destination-details__empty-icon">{icon("map")}</div>
                        <p>"Klik pada marker di peta untuk melihat detail lokasi"</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SelectedDestination(destination: Destination) -> impl IntoView {
    // Reset with every selection since this component is rebuilt per record
    let image_failed = RwSignal::new(false);

    let image = destination.image_url().map(|src| {
        view! {
            <img
                class="destination-details__image"
                class:destination-details__image--hidden=move || image_failed.get()
                src=src.to_string()
                alt=destination.title.clone()
                loading="lazy"
                on:error=move |_| image_failed.set(true)
            />
        }
    });

    view! {
        <div class="destination-details__body">
            {image}
            <div class="destination-details__heading">
                <h3 class="destination-details__title">{destination.title.clone()}</h3>
                <CategoryBadge category=destination.category.clone() />
            </div>
            <p class="destination-details__place">
                {format_place_line(&destination.location, &destination.province)}
            </p>
            <p class="destination-details__description">{destination.description.clone()}</p>
            <div class="destination-details__facts">
                <p>
                    <strong>"Sumber:"</strong>
                    " "
                    {destination.source.clone()}
                </p>
                <p>
                    <strong>"Koordinat:"</strong>
                    " "
                    {format_coordinates(&destination.coordinates)}
                </p>
            </div>
        </div>
    }
}
