use crate::{
    entities::ParseError,
    gateways::{geocode::GeocodingError, geolocate::GeolocationError},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed place candidate: {0}")]
    MalformedCandidate(#[from] ParseError),
    #[error("Geocoding is unavailable: {0}")]
    GeocodeUnavailable(#[from] GeocodingError),
    #[error("Unable to locate the user: {0}")]
    Geolocation(#[from] GeolocationError),
    #[error("There is no suggestion #{0}")]
    NoSuchSuggestion(usize),
}
