use super::prelude::*;
use crate::gateways::geolocate::GeolocationError;

pub const USER_MARKER_POPUP: &str = "You are here";

/// Take over a freshly determined user position.
///
/// On failure the session stays untouched and every
/// distance keeps being reported as unknown.
pub fn locate_user(
    state: &mut SessionState,
    settings: &MapSettings,
    position: std::result::Result<MapPoint, GeolocationError>,
) -> Result<Vec<RenderCommand>> {
    let pos = position?;
    if !pos.is_valid() {
        return Err(GeolocationError::Unavailable.into());
    }
    log::debug!("User located at {pos}");
    let mut commands = Vec::with_capacity(3);
    if let Some(marker) = state.user_marker.take() {
        commands.push(RenderCommand::RemoveLayer(marker));
    }
    let marker = state.next_layer_id();
    commands.push(RenderCommand::AddMarker {
        layer: marker,
        pos,
        popup: Some(USER_MARKER_POPUP.to_owned()),
    });
    commands.push(RenderCommand::SetView {
        center: pos,
        zoom: settings.focus_zoom,
    });
    state.user_marker = Some(marker);
    state.user_pos = Some(pos);
    Ok(commands)
}
