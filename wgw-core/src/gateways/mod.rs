pub mod geocode;
pub mod geolocate;
pub mod render;
