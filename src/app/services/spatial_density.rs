//! Spatial density input for the hotspot map
//!
//! Every classified record contributes one point, in record order, with no
//! deduplication or weighting. The suggested map center is the arithmetic
//! mean of all latitudes and of all longitudes. An empty record sequence has
//! no center, so it is reported as [`Error::DegenerateInput`] instead of
//! producing NaN coordinates.

use crate::app::models::{BoundingBox, ClassifiedRecord, DensityMap, GeoPoint};
use crate::{Error, Result};
use tracing::{debug, info};

/// Stage name carried by the degenerate input signal
pub const STAGE_NAME: &str = "spatial density";

/// Build the density map input from classified records
pub fn build_density_map(records: &[ClassifiedRecord]) -> Result<DensityMap> {
    if records.is_empty() {
        return Err(Error::degenerate_input(STAGE_NAME));
    }

    let points: Vec<GeoPoint> = records.iter().map(ClassifiedRecord::location).collect();
    let center = mean_center(&points);
    let bounds = bounding_box(&points);

    info!(
        "Density map: {} points centered at ({:.5}, {:.5})",
        points.len(),
        center.latitude,
        center.longitude
    );
    debug!(
        "Density bounds: lat [{}, {}], lng [{}, {}]",
        bounds.min_latitude, bounds.max_latitude, bounds.min_longitude, bounds.max_longitude
    );

    Ok(DensityMap {
        points,
        center,
        bounds,
    })
}

fn mean_center(points: &[GeoPoint]) -> GeoPoint {
    let n = points.len() as f64;
    let (lat_sum, lng_sum) = points.iter().fold((0.0, 0.0), |(lat, lng), p| {
        (lat + p.latitude, lng + p.longitude)
    });
    GeoPoint {
        latitude: lat_sum / n,
        longitude: lng_sum / n,
    }
}

fn bounding_box(points: &[GeoPoint]) -> BoundingBox {
    points.iter().fold(
        BoundingBox {
            min_latitude: f64::INFINITY,
            max_latitude: f64::NEG_INFINITY,
            min_longitude: f64::INFINITY,
            max_longitude: f64::NEG_INFINITY,
        },
        |b, p| BoundingBox {
            min_latitude: b.min_latitude.min(p.latitude),
            max_latitude: b.max_latitude.max(p.latitude),
            min_longitude: b.min_longitude.min(p.longitude),
            max_longitude: b.max_longitude.max(p.longitude),
        },
    )
}
