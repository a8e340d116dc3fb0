use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A single search result of the Nominatim API
/// (`/search?format=json`).
///
/// Nominatim delivers the coordinates as strings.
/// Missing fields are tolerated here and rejected
/// later during validation.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NominatimPlace {
    #[serde(default)]
    pub display_name : String,
    #[serde(default)]
    pub lat          : String,
    #[serde(default)]
    pub lon          : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LineStyle {
    pub color: String,
    pub weight: u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct InfoPanel {
    pub title: String,
    pub address: String,
    pub distance: String,
}

/// A render command as it is sent to a map frontend.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(tag = "cmd", rename_all = "kebab-case")]
pub enum RenderCommand {
    AddTileLayer {
        url_template: String,
        attribution: String,
    },
    SetView {
        center: Coordinate,
        zoom: u8,
    },
    AddMarker {
        layer: u64,
        pos: Coordinate,
        #[serde(skip_serializing_if = "Option::is_none")]
        popup: Option<String>,
    },
    AddPolyline {
        layer: u64,
        points: Vec<Coordinate>,
        style: LineStyle,
    },
    RemoveLayer {
        layer: u64,
    },
    InvalidateSize,
    ShowSuggestions {
        names: Vec<String>,
    },
    HideSuggestions,
    ShowInfoPanel(InfoPanel),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_nominatim_search_result() {
        let json = r#"[
          {
            "place_id": 88066702,
            "licence": "Data © OpenStreetMap contributors, ODbL 1.0. http://osm.org/copyright",
            "osm_type": "relation",
            "osm_id": 7444,
            "lat": "48.8588897",
            "lon": "2.3200410217200766",
            "class": "boundary",
            "type": "administrative",
            "place_rank": 15,
            "importance": 0.8845663630228834,
            "addresstype": "suburb",
            "name": "Paris",
            "display_name": "Paris, Île-de-France, France métropolitaine, France",
            "boundingbox": ["48.8155755", "48.9021560", "2.2241220", "2.4697602"]
          },
          {
            "display_name": "Paris, Lamar County, Texas, United States"
          }
        ]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(
            places[0].display_name,
            "Paris, Île-de-France, France métropolitaine, France"
        );
        assert_eq!(places[0].lat, "48.8588897");
        assert_eq!(places[0].lon, "2.3200410217200766");
        assert!(places[1].lat.is_empty());
    }

    #[test]
    fn serialize_tagged_render_command() {
        let cmd = RenderCommand::SetView {
            center: Coordinate { lat: 1.5, lng: 2.0 },
            zoom: 14,
        };
        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            r#"{"cmd":"set-view","center":{"lat":1.5,"lng":2.0},"zoom":14}"#
        );
        assert_eq!(
            serde_json::to_string(&RenderCommand::HideSuggestions).unwrap(),
            r#"{"cmd":"hide-suggestions"}"#
        );
    }
}
