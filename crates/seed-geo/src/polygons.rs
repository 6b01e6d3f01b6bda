//! Immutable land polygon set with point-in-polygon queries.

use crate::Coordinate;
use geo::Contains;
use geo_types::{Geometry, GeometryCollection, MultiPolygon, Point, Polygon};
use geojson::GeoJson;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the polygon set.
///
/// All of these are fatal configuration errors: without a usable polygon set
/// no valid coordinate can ever be produced, so the run must abort before
/// any connection attempt.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The geometry source could not be read.
    #[error("failed to read geometry source {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The geometry source is not valid GeoJSON.
    #[error("failed to parse geometry source {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: geojson::Error,
    },

    /// The source parsed but contained no polygon geometry at all.
    #[error("geometry source contains no polygons, no land coordinate can be produced")]
    EmptyGeometry,
}

/// An immutable set of closed planar regions, loaded once at startup.
pub struct LandPolygons {
    polygons: MultiPolygon<f64>,
}

impl LandPolygons {
    /// Load the polygon set from a GeoJSON file.
    ///
    /// All `Polygon` and `MultiPolygon` geometries in the file are collected;
    /// other geometry kinds are skipped. An empty result is an error.
    pub fn from_geojson_file(path: &Path) -> Result<Self, GeoError> {
        let raw = std::fs::read_to_string(path).map_err(|source| GeoError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let geojson: GeoJson = raw.parse().map_err(|source| GeoError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let collection =
            GeometryCollection::<f64>::try_from(&geojson).map_err(|source| GeoError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut polygons: Vec<Polygon<f64>> = Vec::new();
        for geometry in collection.0 {
            match geometry {
                Geometry::Polygon(polygon) => polygons.push(polygon),
                Geometry::MultiPolygon(multi) => polygons.extend(multi.0),
                other => {
                    tracing::debug!("skipping non-polygon geometry in {:?}: {:?}", path, kind(&other));
                }
            }
        }

        tracing::info!("loaded {} land polygons from {:?}", polygons.len(), path);
        Self::from_polygons(polygons)
    }

    /// Build the set from already-constructed polygons.
    pub fn from_polygons(polygons: Vec<Polygon<f64>>) -> Result<Self, GeoError> {
        if polygons.is_empty() {
            return Err(GeoError::EmptyGeometry);
        }
        Ok(Self {
            polygons: MultiPolygon::new(polygons),
        })
    }

    /// Whether the coordinate falls within any polygon of the set.
    ///
    /// Pure query over immutable state.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.polygons.contains(&Point::from(*coordinate))
    }

    /// Number of polygons in the set.
    pub fn len(&self) -> usize {
        self.polygons.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.0.is_empty()
    }
}

fn kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::LineString;
    use std::io::Write;

    fn rectangle(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (min_lon, min_lat),
                (max_lon, min_lat),
                (max_lon, max_lat),
                (min_lon, max_lat),
                (min_lon, min_lat),
            ]),
            vec![],
        )
    }

    #[test]
    fn test_contains_inside_and_outside() {
        let land = LandPolygons::from_polygons(vec![rectangle(0.0, 0.0, 10.0, 10.0)]).unwrap();

        assert!(land.contains(&Coordinate { lon: 5.0, lat: 5.0 }));
        assert!(!land.contains(&Coordinate {
            lon: -5.0,
            lat: 5.0
        }));
        assert!(!land.contains(&Coordinate {
            lon: 5.0,
            lat: 85.0
        }));
    }

    #[test]
    fn test_contains_any_polygon_of_the_set() {
        let land = LandPolygons::from_polygons(vec![
            rectangle(0.0, 0.0, 10.0, 10.0),
            rectangle(100.0, -50.0, 120.0, -30.0),
        ])
        .unwrap();

        assert!(land.contains(&Coordinate { lon: 5.0, lat: 5.0 }));
        assert!(land.contains(&Coordinate {
            lon: 110.0,
            lat: -40.0
        }));
        assert!(!land.contains(&Coordinate {
            lon: 50.0,
            lat: 50.0
        }));
    }

    #[test]
    fn test_empty_polygon_set_is_rejected() {
        let result = LandPolygons::from_polygons(vec![]);
        assert!(matches!(result, Err(GeoError::EmptyGeometry)));
    }

    #[test]
    fn test_load_from_geojson_file() {
        let geojson = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"name": "square"},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": {"name": "capital"},
                    "geometry": {"type": "Point", "coordinates": [5.0, 5.0]}
                }
            ]
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(geojson.as_bytes()).unwrap();

        let land = LandPolygons::from_geojson_file(file.path()).unwrap();
        assert_eq!(land.len(), 1);
        assert!(land.contains(&Coordinate { lon: 5.0, lat: 5.0 }));
        assert!(!land.contains(&Coordinate {
            lon: 15.0,
            lat: 5.0
        }));
    }

    #[test]
    fn test_load_missing_file() {
        let result = LandPolygons::from_geojson_file(Path::new("/nonexistent/geodata.geojson"));
        assert!(matches!(result, Err(GeoError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_geojson() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not geojson at all").unwrap();

        let result = LandPolygons::from_geojson_file(file.path());
        assert!(matches!(result, Err(GeoError::Parse { .. })));
    }

    #[test]
    fn test_geojson_with_only_points_is_empty() {
        let geojson = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {"type": "Point", "coordinates": [5.0, 5.0]}
                }
            ]
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(geojson.as_bytes()).unwrap();

        let result = LandPolygons::from_geojson_file(file.path());
        assert!(matches!(result, Err(GeoError::EmptyGeometry)));
    }
}
