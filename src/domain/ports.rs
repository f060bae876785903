use crate::domain::model::{LatLng, PolygonStyle, TileLayerSpec};
use crate::utils::error::Result;

/// Blocking user feedback (`window.alert` in the browser).
pub trait Notifier {
    fn notify(&self, message: &str);
}

pub trait TextField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

pub trait ClassToggle {
    fn set_class(&self, class: &str, enabled: bool);
    fn has_class(&self, class: &str) -> bool;
}

pub trait Resettable {
    /// Restore every field to its default value.
    fn reset(&self);
}

pub trait ScrollTarget {
    /// Smoothly scroll so the element's top edge is at the top of the viewport.
    fn scroll_into_view_smooth(&self);
}

pub trait StyleSink {
    fn set_style(&self, property: &str, value: &str);
}

pub trait Attributes {
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Read access to the hosting page. Every lookup is optional; a missing element is `None` or empty.
pub trait Document {
    type Element: Clone;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;
    fn forms(&self) -> Vec<Self::Element>;
    /// Every `a[href^="#"]`, in document order.
    fn fragment_links(&self) -> Vec<Self::Element>;
    /// Rendered text of the body.
    fn body_text(&self) -> String;
}

/// The embeddable map library. Layers are opaque handles owned by the widget.
pub trait MapWidget {
    type Layer;

    fn create_view(&mut self, container_id: &str, center: LatLng, zoom: u8) -> Result<()>;
    fn add_tile_layer(&mut self, tiles: &TileLayerSpec) -> Result<()>;
    fn add_polygon(&mut self, points: &[LatLng], style: &PolygonStyle) -> Result<Self::Layer>;
    fn add_marker(&mut self, at: LatLng) -> Result<Self::Layer>;
    fn bind_popup(&mut self, layer: &Self::Layer, html: &str) -> Result<()>;
    fn fit_bounds(&mut self, points: &[LatLng]) -> Result<()>;
}
