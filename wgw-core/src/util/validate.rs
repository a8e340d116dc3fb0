use crate::{
    entities::{MapPoint, ParseError, PlaceCandidate},
    usecases::NewPlaceCandidate,
};

/// Only non-blank queries with a minimum number of characters
/// are worth sending to the geocoding service.
pub fn is_searchable(text: &str, min_len: usize) -> bool {
    text.trim().chars().count() >= min_len
}

pub fn place_candidate(c: &NewPlaceCandidate) -> Result<PlaceCandidate, ParseError> {
    let NewPlaceCandidate {
        display_name,
        lat,
        lon,
    } = c;
    let pos = MapPoint::parse_lat_lng_deg(lat, lon)?;
    Ok(PlaceCandidate::new(display_name.clone(), pos))
}
