use geo::{Distance, Haversine};

/// Great-circle distance in meters between two `(lon, lat)` points.
pub fn haversine_distance<P>(from: P, to: P) -> f64
where
    P: Into<geo::Point>,
{
    let haversine = Haversine;

    haversine.distance(from.into(), to.into())
}
