// Leaflet bindings. The page loads Leaflet itself and exposes the global `L`.

use crate::domain::model::{LatLng, PolygonStyle, TileLayerSpec};
use crate::domain::ports::MapWidget;
use crate::utils::error::{PageError, Result};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn create_map(container_id: &str) -> std::result::Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView, catch)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = fitBounds, catch)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue) -> std::result::Result<JsValue, JsValue>;

    pub type LeafletLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer, catch)]
    fn tile_layer(url_template: &str, options: &JsValue) -> std::result::Result<LeafletLayer, JsValue>;

    #[wasm_bindgen(js_namespace = L, js_name = polygon, catch)]
    fn polygon(latlngs: &JsValue, options: &JsValue) -> std::result::Result<LeafletLayer, JsValue>;

    #[wasm_bindgen(js_namespace = L, js_name = marker, catch)]
    fn marker(latlng: &JsValue) -> std::result::Result<LeafletLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo, catch)]
    fn add_to(this: &LeafletLayer, map: &LeafletMap) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = bindPopup, catch)]
    fn bind_popup(this: &LeafletLayer, html: &str) -> std::result::Result<JsValue, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

/// Leaflet option objects and coordinate arrays go through JSON.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| widget_error("JSON.parse", e))
}

fn widget_error(call: &str, err: JsValue) -> PageError {
    let detail = err.as_string().unwrap_or_else(|| format!("{:?}", err));
    PageError::widget(format!("{} failed: {}", call, detail))
}

#[derive(Default)]
pub struct LeafletWidget {
    map: Option<LeafletMap>,
}

impl LeafletWidget {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self) -> Result<&LeafletMap> {
        self.map
            .as_ref()
            .ok_or_else(|| PageError::widget("map view has not been created"))
    }

    fn attach(&self, layer: LeafletLayer, call: &str) -> Result<LeafletLayer> {
        layer.add_to(self.map()?).map_err(|e| widget_error(call, e))?;
        Ok(layer)
    }
}

impl MapWidget for LeafletWidget {
    type Layer = LeafletLayer;

    fn create_view(&mut self, container_id: &str, center: LatLng, zoom: u8) -> Result<()> {
        let map = create_map(container_id).map_err(|e| widget_error("L.map", e))?;
        map.set_view(&to_js(&center)?, zoom)
            .map_err(|e| widget_error("setView", e))?;
        self.map = Some(map);
        Ok(())
    }

    fn add_tile_layer(&mut self, tiles: &TileLayerSpec) -> Result<()> {
        let options = to_js(&TileOptions {
            attribution: &tiles.attribution,
            max_zoom: tiles.max_zoom,
        })?;
        let layer =
            tile_layer(&tiles.url_template, &options).map_err(|e| widget_error("L.tileLayer", e))?;
        self.attach(layer, "tileLayer.addTo")?;
        Ok(())
    }

    fn add_polygon(&mut self, points: &[LatLng], style: &PolygonStyle) -> Result<LeafletLayer> {
        let layer = polygon(&to_js(points)?, &to_js(style)?)
            .map_err(|e| widget_error("L.polygon", e))?;
        self.attach(layer, "polygon.addTo")
    }

    fn add_marker(&mut self, at: LatLng) -> Result<LeafletLayer> {
        let layer = marker(&to_js(&at)?).map_err(|e| widget_error("L.marker", e))?;
        self.attach(layer, "marker.addTo")
    }

    fn bind_popup(&mut self, layer: &LeafletLayer, html: &str) -> Result<()> {
        layer
            .bind_popup(html)
            .map_err(|e| widget_error("bindPopup", e))?;
        Ok(())
    }

    fn fit_bounds(&mut self, points: &[LatLng]) -> Result<()> {
        self.map()?
            .fit_bounds(&to_js(points)?)
            .map_err(|e| widget_error("fitBounds", e))?;
        Ok(())
    }
}
