pub mod geolocation;
pub mod nominatim;
