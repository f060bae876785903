use crate::config::SiteConfig;
use crate::utils::error::{PageError, Result};
use crate::utils::validation::{
    validate_dom_name, validate_fragment, validate_non_empty_string, validate_range,
    validate_tile_template, Validate,
};
use std::path::Path;

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PageError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，未指定的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        let map = &self.map;
        validate_dom_name("map.container_id", &map.container_id)?;
        validate_tile_template("map.tiles.url_template", &map.tiles.url_template)?;
        validate_range("map.tiles.max_zoom", map.tiles.max_zoom, 0, 22)?;
        validate_range("map.zoom", map.zoom, 0, map.tiles.max_zoom)?;
        validate_range("map.boundary_style.fill_opacity", map.boundary_style.fill_opacity, 0.0, 1.0)?;

        validate_non_empty_string("map.capital.name", &map.capital.name)?;
        for (index, location) in map.locations.iter().enumerate() {
            validate_non_empty_string(&format!("map.locations[{}].name", index), &location.name)?;
        }

        validate_dom_name("search.button_id", &self.search.button_id)?;
        validate_dom_name("search.input_id", &self.search.input_id)?;
        validate_non_empty_string("search.trigger_key", &self.search.trigger_key)?;
        validate_dom_name("subscribe.button_id", &self.subscribe.button_id)?;
        validate_dom_name("subscribe.input_id", &self.subscribe.input_id)?;
        validate_dom_name("donation.button_class", &self.donation.button_class)?;
        validate_dom_name("donation.selected_class", &self.donation.selected_class)?;

        for target in &self.anchors.smooth_targets {
            validate_fragment("anchors.smooth_targets", target)?;
        }

        for class in &self.reveal.classes {
            validate_dom_name("reveal.classes", class)?;
        }
        validate_range("reveal.threshold", self.reveal.threshold, 0.0, 1.0)?;
        validate_range("reveal.duration_secs", self.reveal.duration_secs, 0.0, 10.0)?;

        Ok(())
    }
}
