pub mod footer;
pub mod global_context;
pub mod header;
pub mod sections;

use leptos::prelude::*;

/// Page frame: sticky navigation bar, the sections, footer.
///
/// ```text
/// +------------------------------------------+
/// |              Header (navbar)             |
/// +------------------------------------------+
/// |              children (sections)         |
/// +------------------------------------------+
/// |              Footer                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
