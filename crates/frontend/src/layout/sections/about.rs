use crate::layout::header::Section;
use crate::shared::components::page_header::SectionHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;

const FEATURES: [(&str, &str, &str, &str); 3] = [
    (
        "map",
        "feature-card__icon--red",
        "Peta Interaktif",
        "Jelajahi lokasi dengan mudah melalui peta yang responsif",
    ),
    (
        "book",
        "feature-card__icon--green",
        "Informasi Lengkap",
        "Detail sejarah dan budaya setiap lokasi tersedia",
    ),
    (
        "target",
        "feature-card__icon--blue",
        "Navigasi Mudah",
        "Klik marker atau daftar untuk langsung menuju lokasi",
    ),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::About.anchor_id() class="about">
            <div class="about__content">
                <SectionHeader
                    title="Tentang Peta Sejarah Indonesia"
                    subtitle="Peta interaktif ini menampilkan berbagai situs bersejarah, budaya, dan penting di seluruh Indonesia. \
                        Setiap marker mewakili lokasi dengan nilai sejarah dan budaya yang tinggi, dilengkapi dengan informasi \
                        detail untuk membantu Anda memahami kekayaan warisan Indonesia."
                />
                <div class="about__features">
                    {FEATURES.into_iter().map(|(icon_name, tone, title, text)| view! {
                        <div class="feature-card">
                            <div class=format!("feature-card__icon {}", tone)>{icon(icon_name)}</div>
                            <h3 class="feature-card__title">{title}</h3>
                            <p class="feature-card__text">{text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
