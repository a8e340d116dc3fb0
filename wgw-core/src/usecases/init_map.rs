use super::prelude::*;

/// The commands to set up an empty map.
pub fn init_map(settings: &MapSettings) -> Vec<RenderCommand> {
    vec![
        RenderCommand::AddTileLayer(settings.tile_layer.clone()),
        RenderCommand::SetView {
            center: settings.initial_center,
            zoom: settings.initial_zoom,
        },
    ]
}
