use crate::events::EventSink;
use food_map_core::{City, MapWidget, UiEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Leaflet is loaded by index.html and exposed as the global `L`.
#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn create_map(container_id: &str) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: u8) -> Map;

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_layer_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn create_marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setPopupContent)]
    fn set_popup_content(this: &Marker, content: &JsValue) -> Marker;

    #[wasm_bindgen(method)]
    fn on(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;

    #[wasm_bindgen(method, js_name = getElement)]
    fn get_element(this: &Marker) -> Option<web_sys::HtmlElement>;
}

const HIGHLIGHT_CLASS: &str = "highlight-marker";

#[derive(serde::Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

fn lat_lng(lat: f64, lng: f64) -> JsValue {
    js_sys::Array::of2(&lat.into(), &lng.into()).into()
}

/// Leaflet-backed map widget.
pub struct LeafletMap {
    container_id: String,
    map: Option<Map>,
    sink: EventSink,
}

impl LeafletMap {
    pub fn new(container_id: impl Into<String>, sink: EventSink) -> Self {
        Self {
            container_id: container_id.into(),
            map: None,
            sink,
        }
    }

    /// Popup body: the city name in bold. Built as an element so the name
    /// is never parsed as markup.
    fn popup_content(label: &str) -> JsValue {
        let strong = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.create_element("strong").ok());
        match strong {
            Some(strong) => {
                strong.set_text_content(Some(label));
                strong.into()
            }
            None => JsValue::from_str(label),
        }
    }
}

impl MapWidget for LeafletMap {
    type Marker = Marker;

    fn initialize(&mut self, center_lat: f64, center_lng: f64, zoom: u8) {
        let map = create_map(&self.container_id);
        map.set_view(&lat_lng(center_lat, center_lng), zoom);
        self.map = Some(map);
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) {
        let Some(map) = &self.map else {
            tracing::warn!("tile layer added before the map exists");
            return;
        };
        match serde_wasm_bindgen::to_value(&TileOptions { attribution }) {
            Ok(options) => {
                tile_layer(url_template, &options).add_layer_to(map);
            }
            Err(err) => tracing::error!(error = %err, "failed to build tile layer options"),
        }
    }

    fn place_marker(&mut self, city: &'static City) -> Marker {
        let marker = create_marker(&lat_lng(city.lat, city.lng));
        if let Some(map) = &self.map {
            marker.add_marker_to(map);
        }

        let sink = self.sink.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            sink.ui(UiEvent::MarkerClicked(city.key.to_string()));
        });
        marker.on("click", on_click.as_ref().unchecked_ref());
        // markers live as long as the page
        on_click.forget();

        marker
    }

    fn bind_popup(&mut self, marker: &Marker, label: &str) {
        marker.bind_popup(&Self::popup_content(label));
    }

    fn set_popup_content(&mut self, marker: &Marker, label: &str) {
        marker.set_popup_content(&Self::popup_content(label));
    }

    fn set_highlight_state(&mut self, marker: &Marker, highlighted: bool) {
        let Some(icon) = marker.get_element() else {
            tracing::debug!("marker icon not rendered yet");
            return;
        };
        if let Err(err) = icon
            .class_list()
            .toggle_with_force(HIGHLIGHT_CLASS, highlighted)
        {
            tracing::warn!(?err, "failed to toggle marker highlight");
        }
    }

    fn pan_to(&mut self, lat: f64, lng: f64, zoom: u8) {
        if let Some(map) = &self.map {
            map.set_view(&lat_lng(lat, lng), zoom);
        }
    }
}
