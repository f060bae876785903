use anyhow::Result;
use site_behavior::{HeadlessPage, HeadlessSession, Node, PageError, SiteConfig};
use tempfile::TempDir;

#[test]
fn test_load_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("site.toml");
    std::fs::write(
        &config_path,
        r##"
[map]
container_id = "region-map"
zoom = 8

[[map.locations]]
name = "Cox's Bazar"
lat = 21.4272
lng = 92.0058
description = "Disaster Relief"

[anchors]
smooth_targets = ["#", "#volunteer"]

[messages]
form_submitted = "Thanks!"
"##,
    )?;

    let config = SiteConfig::from_file(&config_path)?;
    assert_eq!(config.map.container_id, "region-map");
    assert_eq!(config.map.locations.len(), 1);
    assert_eq!(config.map.capital.name, "Dhaka");
    assert_eq!(config.messages.form_submitted, "Thanks!");
    assert_eq!(
        config.messages.subscribed,
        "Thank you for subscribing! We will keep you updated on our work."
    );

    let page = HeadlessPage::new();
    page.add(Node::new("div").id("region-map"));
    let link = page.add(Node::new("a").href("#volunteer"));
    page.add(Node::new("section").id("volunteer"));
    let form = page.add(Node::new("form"));
    let session = HeadlessSession::ready(page, config);

    assert_eq!(session.map().unwrap().markers(), 2);
    session.click(&link);
    assert_eq!(session.page().scrolled_to(), vec!["volunteer"]);
    session.submit(&form);
    assert_eq!(session.notices(), vec!["Thanks!".to_string()]);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = SiteConfig::from_file(temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(PageError::IoError(_))));
}

#[test]
fn test_bad_tile_template_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("site.toml");
    std::fs::write(
        &config_path,
        r#"
[map.tiles]
url_template = "tiles/{z}/{x}/{y}.png"
attribution = "local"
max_zoom = 12
"#,
    )?;

    let result = SiteConfig::from_file(&config_path);
    assert!(matches!(
        result,
        Err(PageError::InvalidConfigValueError { ref field, .. }) if field == "map.tiles.url_template"
    ));
    Ok(())
}
