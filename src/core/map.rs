use crate::config::MapConfig;
use crate::core::{MapWidget, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapSummary {
    pub markers: usize,
    pub polygons: usize,
}

/// Builds the site map on `widget`: view, tiles, country outline, capital, regional
/// markers, then fits the view to the outline's bounding box.
pub fn init_map<W: MapWidget>(widget: &mut W, config: &MapConfig) -> Result<MapSummary> {
    let mut summary = MapSummary::default();

    widget.create_view(&config.container_id, config.center, config.zoom)?;
    widget.add_tile_layer(&config.tiles)?;

    let outline = widget.add_polygon(&config.boundary.points, &config.boundary_style)?;
    summary.polygons += 1;

    let capital = widget.add_marker(config.capital.position())?;
    widget.bind_popup(&capital, &config.capital.popup_html())?;
    summary.markers += 1;

    for location in &config.locations {
        let marker = widget.add_marker(location.position())?;
        widget.bind_popup(&marker, &location.popup_html())?;
        summary.markers += 1;
    }

    widget.bind_popup(&outline, &config.boundary_popup)?;

    let (south_west, north_east) = config.boundary.bounding_box();
    widget.fit_bounds(&[south_west, north_east])?;

    tracing::debug!(
        markers = summary.markers,
        polygons = summary.polygons,
        "map initialized"
    );
    Ok(summary)
}
