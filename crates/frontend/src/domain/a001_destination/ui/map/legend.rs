use crate::shared::components::ui::CategoryDot;
use contracts::enums::Category;
use leptos::prelude::*;

/// Marker colors of the known categories; anything else is gray
#[component]
pub fn CategoryLegend() -> impl IntoView {
    view! {
        <ul class="map-legend">
            {Category::known().into_iter().map(|category| {
                let label = category.label().to_string();
                view! {
                    <li class="map-legend__item">
                        <CategoryDot category=category />
                        <span>{label}</span>
                    </li>
                }
            }).collect_view()}
            <li class="map-legend__item">
                <CategoryDot category=Category::Other(String::new()) />
                <span>"Lainnya"</span>
            </li>
        </ul>
    }
}
