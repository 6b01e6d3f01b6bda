//! Rejection sampling of coordinates constrained to the land polygon set.

use crate::{Coordinate, LandPolygons};
use rand::Rng;

/// Produces coordinates that are guaranteed to lie on land.
///
/// The sampler borrows the polygon set and carries no other state; callers
/// supply the RNG, so independent calls never share mutable state.
pub struct CoordinateSampler<'a> {
    land: &'a LandPolygons,
}

impl<'a> CoordinateSampler<'a> {
    pub fn new(land: &'a LandPolygons) -> Self {
        Self { land }
    }

    /// Draw uniform candidates over the full valid ranges until one falls
    /// inside a land polygon.
    ///
    /// The loop is unbounded: on a polygon set covering a vanishing fraction
    /// of the globe this can run arbitrarily long. The empty set, which
    /// could never terminate, is rejected at load time.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Coordinate {
        loop {
            let candidate = Coordinate {
                lon: rng.gen_range(-180.0..=180.0),
                lat: rng.gen_range(-90.0..=90.0),
            };
            if self.land.contains(&candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{LineString, Polygon};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

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
    fn test_all_samples_are_on_land() {
        // Two disjoint "continents" covering roughly a quarter of the globe,
        // so rejection terminates quickly while still exercising misses.
        let land = LandPolygons::from_polygons(vec![
            rectangle(-180.0, -90.0, 0.0, 0.0),
            rectangle(90.0, 45.0, 180.0, 90.0),
        ])
        .unwrap();
        let sampler = CoordinateSampler::new(&land);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let coordinate = sampler.sample(&mut rng);
            assert!(
                land.contains(&coordinate),
                "sampled coordinate off land: {coordinate:?}"
            );
            assert!((-180.0..=180.0).contains(&coordinate.lon));
            assert!((-90.0..=90.0).contains(&coordinate.lat));
        }
    }

    #[test]
    fn test_samples_are_not_all_identical() {
        let land = LandPolygons::from_polygons(vec![rectangle(-90.0, -45.0, 90.0, 45.0)]).unwrap();
        let sampler = CoordinateSampler::new(&land);
        let mut rng = StdRng::seed_from_u64(7);

        let first = sampler.sample(&mut rng);
        let distinct = (0..100).any(|_| sampler.sample(&mut rng) != first);
        assert!(distinct);
    }
}
