use crate::entities::MapPoint;
use std::fmt;

/// Shown instead of a distance as long as the user has not been located.
pub const LOCATE_YOURSELF_FIRST: &str = "Locate yourself first";

/// Handle of a visual resource on the map (marker, polyline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

impl LayerId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStyle {
    pub color: String,
    pub weight: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceInfo {
    Km(f64),
    LocateYourselfFirst,
}

impl fmt::Display for DistanceInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Km(km) => write!(f, "{km:.2} km"),
            Self::LocateYourselfFirst => f.write_str(LOCATE_YOURSELF_FIRST),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoPanel {
    pub title: String,
    pub address: String,
    pub distance: DistanceInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    AddTileLayer(TileLayer),
    SetView {
        center: MapPoint,
        zoom: u8,
    },
    AddMarker {
        layer: LayerId,
        pos: MapPoint,
        popup: Option<String>,
    },
    AddPolyline {
        layer: LayerId,
        points: [MapPoint; 2],
        style: LineStyle,
    },
    RemoveLayer(LayerId),
    /// Recalculate the map size after the layout has changed.
    InvalidateSize,
    ShowSuggestions(Vec<String>),
    HideSuggestions,
    ShowInfoPanel(InfoPanel),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_distance_with_two_decimals() {
        assert_eq!(DistanceInfo::Km(1148.09).to_string(), "1148.09 km");
        assert_eq!(DistanceInfo::Km(12.5).to_string(), "12.50 km");
        assert_eq!(DistanceInfo::Km(0.0).to_string(), "0.00 km");
        assert_eq!(
            DistanceInfo::LocateYourselfFirst.to_string(),
            "Locate yourself first"
        );
    }
}
