use contracts::domain::a001_destination::{Destination, DestinationCatalog, DestinationId};
use contracts::domain::common::AggregateId;
use contracts::shared::config::AppConfig;
use contracts::shared::map::Viewport;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::window;

/// Query parameter carrying the selected destination
const SELECTION_PARAM: &str = "lokasi";

/// Page-wide state: configuration, the destination catalog and the
/// selection inside it.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: RwSignal<AppConfig>,
    pub catalog: RwSignal<DestinationCatalog>,
    pub loading: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            config: RwSignal::new(AppConfig::default()),
            catalog: RwSignal::new(DestinationCatalog::default()),
            loading: RwSignal::new(true),
        }
    }

    /// Publish the loaded data and leave the loading state.
    ///
    /// A destination id found in the URL takes precedence over the default
    /// first-record selection.
    pub fn finish_loading(&self, config: AppConfig, mut catalog: DestinationCatalog) {
        if let Some(id) = selected_id_from_query(&current_search()) {
            if catalog.select(id).is_none() {
                log::warn!("Destination {} from URL not found", id.value());
            }
        }
        log::info!(
            "Catalog ready: {} destinations, selected {:?}",
            catalog.len(),
            catalog.selected_id().map(|id| id.value())
        );
        self.config.set(config);
        self.catalog.set(catalog);
        self.loading.set(false);
    }

    pub fn selected(&self) -> Option<Destination> {
        self.catalog.with(|c| c.selected().cloned())
    }

    /// Select a destination, returning the viewport to focus when it exists
    pub fn select(&self, id: DestinationId) -> Option<Viewport> {
        let map_config = self.config.with_untracked(|c| c.map.clone());
        let mut viewport = None;
        self.catalog.update(|c| {
            viewport = c.select_and_focus(id, &map_config);
        });
        leptos::logging::log!("📍 select: id={} found={}", id.value(), viewport.is_some());
        viewport
    }

    /// Mirror the selection into the `?lokasi=` query parameter
    pub fn init_router_integration(&self) {
        let catalog = self.catalog;
        Effect::new(move |_| {
            let Some(id) = catalog.with(|c| c.selected_id()) else {
                return;
            };
            let search = current_search();
            let new_url = format!("?{}", selection_query(&search, id));

            // Only update URL if it actually changed
            if search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Destination id from a `location.search` string
pub fn selected_id_from_query(search: &str) -> Option<DestinationId> {
    query_params(search)
        .get(SELECTION_PARAM)
        .and_then(|value| DestinationId::from_string(value).ok())
}

/// Query string (without `?`) selecting `id`, keeping the other
/// parameters of `search`
pub fn selection_query(search: &str, id: DestinationId) -> String {
    let mut params = query_params(search);
    params.insert(SELECTION_PARAM.to_string(), id.as_string());
    serde_qs::to_string(&params).unwrap_or_default()
}

fn query_params(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_id_from_query() {
        assert_eq!(selected_id_from_query("?lokasi=7"), Some(DestinationId::new(7)));
        assert_eq!(
            selected_id_from_query("?tema=gelap&lokasi=12"),
            Some(DestinationId::new(12))
        );
        assert_eq!(selected_id_from_query(""), None);
        assert_eq!(selected_id_from_query("?lokasi=abc"), None);
        assert_eq!(selected_id_from_query("?active=a002"), None);
    }

    #[test]
    fn test_selection_query_round_trip() {
        let query = selection_query("", DestinationId::new(42));
        assert_eq!(query, "lokasi=42");
        assert_eq!(
            selected_id_from_query(&format!("?{}", query)),
            Some(DestinationId::new(42))
        );
    }

    #[test]
    fn test_selection_query_keeps_other_params() {
        let query = selection_query("?utm_source=brosur&lokasi=3", DestinationId::new(8));
        assert_eq!(query, "lokasi=8&utm_source=brosur");

        let query = selection_query("?tema=gelap", DestinationId::new(2));
        assert!(query.contains("tema=gelap"));
        assert_eq!(
            selected_id_from_query(&format!("?{}", query)),
            Some(DestinationId::new(2))
        );
    }
}
