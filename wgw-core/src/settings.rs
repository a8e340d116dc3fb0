use crate::{
    entities::MapPoint,
    render::{LineStyle, TileLayer},
};

#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub initial_center: MapPoint,
    pub initial_zoom: u8,
    /// Zoom level when focusing the user or a selected place.
    pub focus_zoom: u8,
    pub tile_layer: TileLayer,
    pub route_style: LineStyle,
    /// Shorter queries are not sent to the geocoding service.
    pub min_query_len: usize,
    pub max_suggestions: usize,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            initial_center: MapPoint::from_lat_lng_deg(20.5937, 78.9629),
            initial_zoom: 5,
            focus_zoom: 14,
            tile_layer: TileLayer {
                url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
                attribution: "© OpenStreetMap".into(),
            },
            route_style: LineStyle {
                color: "red".into(),
                weight: 4,
            },
            min_query_len: 3,
            max_suggestions: 5,
        }
    }
}
