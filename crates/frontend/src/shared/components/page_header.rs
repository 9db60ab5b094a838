use leptos::prelude::*;

/// Centered heading of a page section
#[component]
pub fn SectionHeader(
    /// Section title (required)
    #[prop(into)]
    title: String,

    /// Optional lead paragraph
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-header__title">{title}</h2>
            {subtitle.map(|s| view! {
                <p class="section-header__subtitle">{s}</p>
            })}
        </div>
    }
}
