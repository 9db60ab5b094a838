use crate::domain::a001_destination::ui::map::MAP_CONTAINER_ID;
use crate::layout::header::Section;
use crate::shared::scroll::scroll_to_section;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id=Section::Hero.anchor_id() class="hero">
            <div class="hero__content">
                <h1 class="hero__title">
                    "Peta" <span class="hero__accent">" Sejarah"</span> " Indonesia"
                </h1>
                <p class="hero__lead">
                    "Jelajahi situs-situs bersejarah dan budaya Indonesia melalui peta interaktif. "
                    "Klik pada marker untuk mengetahui cerita di balik setiap lokasi."
                </p>
                <div class="hero__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| scroll_to_section(MAP_CONTAINER_ID)
                    >
                        "Jelajahi Peta"
                    </Button>
                </div>
            </div>
        </section>
    }
}
