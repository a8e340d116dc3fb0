use wgw_core::{
    entities::MapPoint,
    gateways::geolocate::{GeolocationError, GeolocationGateway},
};

/// A geolocation service that always reports the same position.
///
/// Without a position every request fails as unavailable.
#[derive(Debug, Clone, Default)]
pub struct FixedPosition {
    pos: Option<MapPoint>,
}

impl FixedPosition {
    pub const fn new(pos: Option<MapPoint>) -> Self {
        Self { pos }
    }

    pub const fn unavailable() -> Self {
        Self { pos: None }
    }
}

impl GeolocationGateway for FixedPosition {
    fn current_position(&self) -> Result<MapPoint, GeolocationError> {
        self.pos.ok_or(GeolocationError::Unavailable)
    }
}
