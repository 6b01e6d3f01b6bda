//! Land polygon loading and land-constrained coordinate sampling.
//!
//! The polygon set is loaded once at startup from a GeoJSON source (for
//! example the Natural Earth "Admin 0 - Countries" dataset) and treated as
//! immutable for the rest of the run. Sampling draws uniform points over the
//! full longitude/latitude ranges and rejects those that fall in the ocean.

mod polygons;
mod sampler;

pub use polygons::{GeoError, LandPolygons};
pub use sampler::CoordinateSampler;

use geo_types::Point;

/// A longitude/latitude pair.
///
/// Longitude is in [-180, 180], latitude in [-90, 90]. Every coordinate
/// produced by [`CoordinateSampler`] additionally lies inside at least one
/// polygon of the loaded [`LandPolygons`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.lon, coordinate.lat)
    }
}
