use super::*;
use thiserror::Error;
use wgw_entities as e;

#[derive(Debug, Error)]
#[error("Invalid coordinate: {lat},{lng}")]
pub struct InvalidCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl TryFrom<Coordinate> for e::geo::MapPoint {
    type Error = InvalidCoordinate;
    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        let Coordinate { lat, lng } = from;
        e::geo::MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(InvalidCoordinate { lat, lng })
    }
}

impl From<e::place::PlaceCandidate> for NominatimPlace {
    fn from(from: e::place::PlaceCandidate) -> Self {
        let e::place::PlaceCandidate { full_name, pos } = from;
        let (lat, lon) = pos.to_lat_lng_deg();
        Self {
            display_name: full_name,
            lat: lat.to_string(),
            lon: lon.to_string(),
        }
    }
}
