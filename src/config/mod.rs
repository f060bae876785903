#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{
    BoundaryPolygon, LatLng, Location, Notice, ObserverOptions, PolygonStyle, RevealStyle,
    TileLayerSpec,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

/// Everything the page controller needs to know about the hosting site.
///
/// `Default` is the production site; a TOML file only has to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub map: MapConfig,
    pub search: SearchConfig,
    pub subscribe: SubscribeConfig,
    pub donation: DonationConfig,
    pub anchors: AnchorConfig,
    pub reveal: RevealConfig,
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub container_id: String,
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: TileLayerSpec,
    pub boundary: BoundaryPolygon,
    pub boundary_style: PolygonStyle,
    pub boundary_popup: String,
    pub capital: Location,
    pub locations: Vec<Location>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map".to_string(),
            center: LatLng::new(23.685, 90.3563),
            zoom: 7,
            tiles: TileLayerSpec {
                url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                attribution: "© OpenStreetMap contributors".to_string(),
                max_zoom: 18,
            },
            boundary: BoundaryPolygon {
                points: [
                    LatLng::new(26.631945, 88.028336),
                    LatLng::new(26.631945, 92.673668),
                    LatLng::new(20.743329, 92.673668),
                    LatLng::new(20.743329, 88.028336),
                ],
            },
            boundary_style: PolygonStyle {
                color: "#2c5f2d".to_string(),
                fill_color: "#97cc04".to_string(),
                fill_opacity: 0.5,
                weight: 3,
            },
            boundary_popup:
                "<b>Bangladesh</b><br>Our primary area of operation<br>Serving 25+ communities"
                    .to_string(),
            capital: location(
                "Dhaka",
                23.8103,
                90.4125,
                "Capital of Bangladesh<br>Multiple programs active",
            ),
            locations: vec![
                location("Chittagong", 22.3569, 91.7832, "Economic & Education"),
                location("Rajshahi", 24.3745, 88.6042, "Agricultural Development"),
                location("Khulna", 22.8456, 89.5403, "Environmental & Health"),
                location("Sylhet", 24.8949, 91.8687, "Education & Spiritual"),
                location("Barisal", 22.7010, 90.3535, "Health & Nutrition"),
                location("Rangpur", 25.7439, 89.2752, "Economic Empowerment"),
                location("Mymensingh", 24.7471, 90.4203, "Education & Healthcare"),
            ],
        }
    }
}

fn location(name: &str, lat: f64, lng: f64, description: &str) -> Location {
    Location {
        name: name.to_string(),
        lat,
        lng,
        description: description.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub button_id: String,
    pub input_id: String,
    pub trigger_key: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            button_id: "searchBtn".to_string(),
            input_id: "searchInput".to_string(),
            trigger_key: "Enter".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribeConfig {
    pub button_id: String,
    pub input_id: String,
}

impl Default for SubscribeConfig {
    fn default() -> Self {
        Self {
            button_id: "subscribeBtn".to_string(),
            input_id: "emailInput".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationConfig {
    pub button_class: String,
    pub selected_class: String,
}

impl Default for DonationConfig {
    fn default() -> Self {
        Self {
            button_class: "amount-btn".to_string(),
            selected_class: "selected".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Fragment hrefs that scroll smoothly. Anything else keeps the native jump.
    pub smooth_targets: Vec<String>,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            smooth_targets: ["#", "#donate", "#contact", "#contact-form", "#social"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub classes: Vec<String>,
    pub threshold: f64,
    pub root_margin: String,
    pub offset_px: u32,
    pub duration_secs: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            classes: ["focus-card", "help-card", "region-card", "stat", "impact-item"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            offset_px: 20,
            duration_secs: 0.6,
        }
    }
}

impl RevealConfig {
    pub fn hidden_style(&self) -> RevealStyle {
        RevealStyle {
            opacity: "0".to_string(),
            transform: format!("translateY({}px)", self.offset_px),
            transition: Some(format!(
                "opacity {d}s ease, transform {d}s ease",
                d = self.duration_secs
            )),
        }
    }

    pub fn revealed_style(&self) -> RevealStyle {
        RevealStyle {
            opacity: "1".to_string(),
            transform: "translateY(0)".to_string(),
            transition: None,
        }
    }

    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions {
            threshold: self.threshold,
            root_margin: self.root_margin.clone(),
        }
    }
}

/// Notification texts. `{query}` is replaced with the normalized search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub empty_search: String,
    pub found: String,
    pub not_found: String,
    pub subscribed: String,
    pub invalid_email: String,
    pub form_submitted: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_search: "Please enter a search term.".to_string(),
            found: "Found \"{query}\" on this page. Use Ctrl+F (Cmd+F on Mac) to highlight all instances."
                .to_string(),
            not_found:
                "No results found for \"{query}\" on this page. Try searching on other pages."
                    .to_string(),
            subscribed: "Thank you for subscribing! We will keep you updated on our work."
                .to_string(),
            invalid_email: "Please enter a valid email address.".to_string(),
            form_submitted: "Thank you for your message! We will get back to you soon."
                .to_string(),
        }
    }
}

impl Messages {
    pub fn render(&self, notice: &Notice) -> String {
        match notice {
            Notice::EmptySearch => self.empty_search.clone(),
            Notice::Found { query } => self.found.replace("{query}", query),
            Notice::NotFound { query } => self.not_found.replace("{query}", query),
            Notice::Subscribed => self.subscribed.clone(),
            Notice::InvalidEmail => self.invalid_email.clone(),
            Notice::MessageReceived => self.form_submitted.clone(),
        }
    }
}
