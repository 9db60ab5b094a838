use super::bindings::{self, FeatureGroup, Map};
use contracts::domain::a001_destination::{Coordinates, DestinationId};
use contracts::shared::config::AppConfig;
use contracts::shared::error::MapError;
use contracts::shared::map::{MarkerSpec, Viewport, MARKER_ANCHOR, MARKER_SIZE};
use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DivIconOptions<'a> {
    html: &'a str,
    class_name: &'static str,
    icon_size: [u32; 2],
    icon_anchor: [u32; 2],
}

/// A live Leaflet map with its markers.
///
/// Dropping the handle removes the map from its container and releases the
/// marker click handlers, so the handle must live exactly as long as the
/// view that shows it.
pub struct MapHandle {
    map: Map,
    // Kept alive for the markers' click events
    _markers: FeatureGroup,
    _listeners: Vec<Closure<dyn FnMut()>>,
    marker_count: usize,
}

impl MapHandle {
    /// Build the map inside `container`: base tiles, one marker per spec and
    /// a view fitted around all markers.
    ///
    /// `on_select` runs with the destination id whenever a marker is clicked.
    pub fn mount<F>(
        container: &HtmlElement,
        config: &AppConfig,
        specs: &[MarkerSpec],
        on_select: F,
    ) -> Result<Self, MapError>
    where
        F: Fn(DestinationId) + Clone + 'static,
    {
        let map = bindings::map(container).map_err(|e| MapError::Init(js_error_text(&e)))?;

        let initial = config.map.initial_viewport();
        map.set_view(&lat_lng(initial.center), f64::from(initial.zoom));

        let tile_options = to_js(&TileLayerOptions {
            attribution: &config.tiles.attribution,
            max_zoom: config.tiles.max_zoom,
        })?;
        bindings::tile_layer(&config.tiles.url, &tile_options).add_to(&map);

        let group = bindings::feature_group();
        let mut listeners = Vec::with_capacity(specs.len());
        for spec in specs {
            let marker = bindings::marker(&lat_lng(spec.position), &marker_options(spec)?);
            marker.bind_popup(&spec.popup_html);

            let id = spec.id;
            let on_select = on_select.clone();
            let listener = Closure::<dyn FnMut()>::new(move || on_select(id));
            marker.on("click", listener.as_ref().unchecked_ref());
            listeners.push(listener);

            group.add_layer(&marker);
        }
        group.add_to(&map);

        if !specs.is_empty() {
            map.fit_bounds(&group.get_bounds().pad(config.map.fit_padding));
        }

        log::info!("Map created with {} markers", specs.len());

        Ok(Self {
            map,
            _markers: group,
            _listeners: listeners,
            marker_count: specs.len(),
        })
    }

    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    pub fn set_view(&self, viewport: Viewport) {
        self.map
            .set_view(&lat_lng(viewport.center), f64::from(viewport.zoom));
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        match self.map.remove() {
            Ok(_) => log::debug!("Map removed ({} markers)", self.marker_count),
            Err(e) => log::warn!("Map removal failed: {}", js_error_text(&e)),
        }
    }
}

fn lat_lng(position: Coordinates) -> JsValue {
    Array::of2(&JsValue::from_f64(position.lat), &JsValue::from_f64(position.lng)).into()
}

fn marker_options(spec: &MarkerSpec) -> Result<JsValue, MapError> {
    let icon = bindings::div_icon(&to_js(&DivIconOptions {
        html: &spec.icon_html,
        class_name: "custom-marker",
        icon_size: [MARKER_SIZE, MARKER_SIZE],
        icon_anchor: [MARKER_ANCHOR, MARKER_ANCHOR],
    })?);

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("icon"), &icon)
        .map_err(|e| MapError::Init(js_error_text(&e)))?;
    Ok(options.into())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| MapError::Init(e.to_string()))
}

fn js_error_text(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
