pub use wgw_boundary::*;

use wgw_core::{entities as e, render as r};

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the render commands both are outside this crate.

    pub fn render_command(from: r::RenderCommand) -> RenderCommand {
        use r::RenderCommand as C;
        match from {
            C::AddTileLayer(r::TileLayer {
                url_template,
                attribution,
            }) => RenderCommand::AddTileLayer {
                url_template,
                attribution,
            },
            C::SetView { center, zoom } => RenderCommand::SetView {
                center: center.into(),
                zoom,
            },
            C::AddMarker { layer, pos, popup } => RenderCommand::AddMarker {
                layer: layer.to_raw(),
                pos: pos.into(),
                popup,
            },
            C::AddPolyline {
                layer,
                points,
                style,
            } => RenderCommand::AddPolyline {
                layer: layer.to_raw(),
                points: points.into_iter().map(Coordinate::from).collect(),
                style: line_style(style),
            },
            C::RemoveLayer(layer) => RenderCommand::RemoveLayer {
                layer: layer.to_raw(),
            },
            C::InvalidateSize => RenderCommand::InvalidateSize,
            C::ShowSuggestions(names) => RenderCommand::ShowSuggestions { names },
            C::HideSuggestions => RenderCommand::HideSuggestions,
            C::ShowInfoPanel(panel) => RenderCommand::ShowInfoPanel(info_panel(panel)),
        }
    }

    pub fn line_style(from: r::LineStyle) -> LineStyle {
        let r::LineStyle { color, weight } = from;
        LineStyle { color, weight }
    }

    pub fn info_panel(from: r::InfoPanel) -> InfoPanel {
        let r::InfoPanel {
            title,
            address,
            distance,
        } = from;
        InfoPanel {
            title,
            address,
            distance: distance.to_string(),
        }
    }

    pub fn place_candidates(from: Vec<e::PlaceCandidate>) -> Vec<NominatimPlace> {
        from.into_iter().map(NominatimPlace::from).collect()
    }
}
