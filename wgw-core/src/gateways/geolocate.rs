use crate::entities::MapPoint;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Access to the current position has been denied")]
    Denied,
    #[error("The current position is unavailable")]
    Unavailable,
    #[error("Timed out while determining the current position")]
    Timeout,
}

pub trait GeolocationGateway {
    fn current_position(&self) -> Result<MapPoint, GeolocationError>;
}
