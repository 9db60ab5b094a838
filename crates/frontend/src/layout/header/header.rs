use crate::shared::scroll::scroll_to_section;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

/// Scroll targets of the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Map,
    About,
}

impl Section {
    pub fn all() -> [Section; 3] {
        [Section::Hero, Section::Map, Section::About]
    }

    /// Element id of the section on the page
    pub fn anchor_id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Map => "peta",
            Section::About => "tentang",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Beranda",
            Section::Map => "Peta Interaktif",
            Section::About => "Tentang",
        }
    }
}

/// Sticky top bar with the brand and the section links
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="navbar">
            <div class="navbar__content">
                <div class="navbar__brand">
                    <div class="brand-logo"><div class="brand-logo__dot"></div></div>
                    <h1 class="navbar__title">"Peta Bercerita"</h1>
                </div>
                <nav class="navbar__links">
                    {Section::all().into_iter().map(|section| {
                        view! {
                            <button
                                class="navbar__link"
                                on:click=move |_| scroll_to_section(section.anchor_id())
                            >
                                {section.label()}
                            </button>
                        }
                    }).collect_view()}
                </nav>
                <ThemeToggle />
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_anchors() {
        let ids: Vec<_> = Section::all().iter().map(|s| s.anchor_id()).collect();
        assert_eq!(ids, ["hero", "peta", "tentang"]);
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(Section::Map.label(), "Peta Interaktif");
        assert_eq!(Section::About.label(), "Tentang");
    }
}
