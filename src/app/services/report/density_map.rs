//! Interactive heat map of incident locations

use super::markup::html_escape;
use crate::app::models::DensityMap;
use crate::config::ReportConfig;
use crate::constants::map_assets;
use crate::Result;

/// Render a standalone Leaflet document with a heat layer over every point
pub fn render_density_map(map: &DensityMap, config: &ReportConfig) -> Result<String> {
    let points: Vec<[f64; 2]> = map
        .points
        .iter()
        .map(|p| [p.latitude, p.longitude])
        .collect();
    let points_json = serde_json::to_string(&points)?;
    let center_json = serde_json::to_string(&[map.center.latitude, map.center.longitude])?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Hotspots</title>
    <link rel="stylesheet" href="{leaflet_css}">
    <style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
    <div id="map"></div>
    <script src="{leaflet_js}"></script>
    <script src="{heat_js}"></script>
    <script>
        var map = L.map('map').setView({center}, {zoom});
        L.tileLayer('{tile_url}', {{ attribution: '{attribution}' }}).addTo(map);
        L.heatLayer({points}, {{ radius: {radius}, blur: {blur} }}).addTo(map);
    </script>
</body>
</html>
"#,
        title = html_escape(&config.page_title),
        leaflet_css = map_assets::LEAFLET_CSS,
        leaflet_js = map_assets::LEAFLET_JS,
        heat_js = map_assets::LEAFLET_HEAT_JS,
        center = center_json,
        zoom = config.map_zoom,
        tile_url = map_assets::TILE_URL,
        attribution = map_assets::TILE_ATTRIBUTION,
        points = points_json,
        radius = config.heat_radius,
        blur = config.heat_blur,
    ))
}
