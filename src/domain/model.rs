use serde::{Deserialize, Serialize};

/// A `(latitude, longitude)` pair, serialized as a two-element array like the map widget expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(point: LatLng) -> Self {
        [point.lat, point.lng]
    }
}

/// A named place shown as a map marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
}

impl Location {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    pub fn popup_html(&self) -> String {
        format!("<b>{}</b><br>{}", self.name, self.description)
    }
}

/// Country outline. Always four corners, ordered NW, NE, SE, SW.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPolygon {
    pub points: [LatLng; 4],
}

impl BoundaryPolygon {
    /// South-west and north-east corners of the bounding box.
    pub fn bounding_box(&self) -> (LatLng, LatLng) {
        let mut south_west = self.points[0];
        let mut north_east = self.points[0];
        for point in &self.points[1..] {
            south_west.lat = south_west.lat.min(point.lat);
            south_west.lng = south_west.lng.min(point.lng);
            north_east.lat = north_east.lat.max(point.lat);
            north_east.lng = north_east.lng.max(point.lng);
        }
        (south_west, north_east)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonStyle {
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayerSpec {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

/// User-facing feedback produced by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    EmptySearch,
    Found { query: String },
    NotFound { query: String },
    Subscribed,
    InvalidEmail,
    MessageReceived,
}

/// The closed set of browser events the controller listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Ready,
    Click,
    KeyPress,
    Submit,
    Load,
    Intersection,
}

impl EventKind {
    /// DOM event type name. `Ready` is `DOMContentLoaded` on the document.
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Ready => "DOMContentLoaded",
            EventKind::Click => "click",
            EventKind::KeyPress => "keypress",
            EventKind::Submit => "submit",
            EventKind::Load => "load",
            EventKind::Intersection => "intersection",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Map,
    Search,
    Subscribe,
    DonationAmounts,
    Forms,
    SmoothScroll,
    ScrollReveal,
}

/// What the adapter should do with the native event after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Default,
    PreventDefault,
}

/// Inline style values applied to an animated element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: String,
    pub transform: String,
    pub transition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_of_rectangle() {
        let polygon = BoundaryPolygon {
            points: [
                LatLng::new(26.0, 88.0),
                LatLng::new(26.0, 92.0),
                LatLng::new(20.0, 92.0),
                LatLng::new(20.0, 88.0),
            ],
        };
        let (sw, ne) = polygon.bounding_box();
        assert_eq!(sw, LatLng::new(20.0, 88.0));
        assert_eq!(ne, LatLng::new(26.0, 92.0));
    }

    #[test]
    fn test_latlng_serializes_as_pair() {
        let json = serde_json::to_string(&LatLng::new(23.8103, 90.4125)).unwrap();
        assert_eq!(json, "[23.8103,90.4125]");
    }

    #[test]
    fn test_popup_html() {
        let location = Location {
            name: "Sylhet".to_string(),
            lat: 24.8949,
            lng: 91.8687,
            description: "Education & Spiritual".to_string(),
        };
        assert_eq!(location.popup_html(), "<b>Sylhet</b><br>Education & Spiritual");
    }
}
