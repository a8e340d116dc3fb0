use crate::geo::MapPoint;

/// A place that has been found by a geocoding service.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    /// The full, comma separated name, e.g. "Paris, Île-de-France, France".
    pub full_name: String,
    pub pos: MapPoint,
}

impl PlaceCandidate {
    pub fn new(full_name: impl Into<String>, pos: MapPoint) -> Self {
        Self {
            full_name: full_name.into(),
            pos,
        }
    }

    /// The leading part of the name before the first comma.
    pub fn title(&self) -> &str {
        self.full_name
            .split_once(',')
            .map_or(self.full_name.as_str(), |(title, _)| title)
    }

    pub fn address(&self) -> &str {
        &self.full_name
    }
}
