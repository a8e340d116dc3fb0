use crate::{entities::MapPoint, usecases::NewPlaceCandidate};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodingQuery {
    pub text: String,
    /// Bias the results towards this position.
    pub near: Option<MapPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodingError {
    #[error("Geocoding request failed: {0}")]
    Network(String),
    #[error("Geocoding service responded with status {0}")]
    Status(u16),
    #[error("Malformed geocoding response: {0}")]
    Response(String),
}

/// Resolves free text into (unvalidated) place candidates.
///
/// The candidates are expected in the order of their relevance.
pub trait GeocodingGateway {
    fn search(&self, query: &GeocodingQuery) -> Result<Vec<NewPlaceCandidate>, GeocodingError>;
}
