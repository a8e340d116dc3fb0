use anyhow::Result;
use std::time::Duration;
use url::Url;
use wgw_boundary::NominatimPlace;
use wgw_core::{
    gateways::geocode::{GeocodingError, GeocodingGateway, GeocodingQuery},
    usecases::NewPlaceCandidate,
};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

/// A geocoding gateway based on the search API of Nominatim
/// (<https://nominatim.org/release-docs/latest/api/Search/>).
#[derive(Debug, Clone)]
pub struct Nominatim {
    search_url: Url,
    client: reqwest::blocking::Client,
}

impl Nominatim {
    /// The usage policy of the public instance demands
    /// an identifying user agent.
    pub fn new(base_url: &Url, user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base_url = base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let search_url = base_url.join("search")?;
        let mut builder = reqwest::blocking::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        log::info!("Using Nominatim geocoding at {search_url}");
        Ok(Self { search_url, client })
    }
}

fn search_url(base: &Url, query: &GeocodingQuery) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("format", "json")
            .append_pair("q", &query.text);
        if let Some(pos) = query.near {
            let (lat, lng) = pos.to_lat_lng_deg();
            pairs
                .append_pair("lat", &lat.to_string())
                .append_pair("lon", &lng.to_string());
        }
    }
    url
}

fn parse_response(body: &str) -> Result<Vec<NewPlaceCandidate>, GeocodingError> {
    let places: Vec<NominatimPlace> =
        serde_json::from_str(body).map_err(|err| GeocodingError::Response(err.to_string()))?;
    Ok(places.into_iter().map(new_place_candidate).collect())
}

// NOTE:
// We cannot impl From<T> here, because the JSON struct
// and the candidate both are outside this crate.
fn new_place_candidate(from: NominatimPlace) -> NewPlaceCandidate {
    let NominatimPlace {
        display_name,
        lat,
        lon,
    } = from;
    NewPlaceCandidate {
        display_name,
        lat,
        lon,
    }
}

impl GeocodingGateway for Nominatim {
    fn search(&self, query: &GeocodingQuery) -> Result<Vec<NewPlaceCandidate>, GeocodingError> {
        let url = search_url(&self.search_url, query);
        log::debug!("Requesting {url}");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| GeocodingError::Network(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Nominatim responded with {status}");
            return Err(GeocodingError::Status(status.as_u16()));
        }
        let body = response
            .text()
            .map_err(|err| GeocodingError::Network(err.to_string()))?;
        parse_response(&body)
    }
}
