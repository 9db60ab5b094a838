use crate::domain::a001_destination::api::load_catalog;
use crate::domain::a001_destination::ui::DestinationSection;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::sections::{AboutSection, HeroSection};
use crate::layout::Shell;
use crate::shared::config::{apply_log_level, load_app_config};
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    // Startup: configuration first, then the destination data it points to
    Effect::new(move |_| {
        spawn_local(async move {
            let config = load_app_config().await;
            apply_log_level(&config);
            let catalog = load_catalog(&config.data.url).await;
            ctx.finish_loading(config, catalog);
        });
    });

    view! {
        <ThemeProvider>
            <Show
                when=move || !ctx.loading.get()
                fallback=|| view! { <LoadingScreen /> }
            >
                <Shell>
                    <HeroSection />
                    <DestinationSection />
                    <AboutSection />
                </Shell>
            </Show>
        </ThemeProvider>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <Spinner />
            <p class="loading-screen__text">"Memuat peta dan data destinasi..."</p>
        </div>
    }
}
