use super::prelude::*;
use crate::util::validate;

/// A place candidate as delivered by the geocoding service.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPlaceCandidate {
    pub display_name : String,
    pub lat          : String,
    pub lon          : String,
}

/// Select a place that has not been validated yet.
///
/// Fails with [`Error::MalformedCandidate`] and leaves the session
/// untouched if the coordinates could not be parsed.
pub fn select_place(
    state: &mut SessionState,
    settings: &MapSettings,
    new_candidate: &NewPlaceCandidate,
) -> Result<Vec<RenderCommand>> {
    let place = validate::place_candidate(new_candidate)?;
    Ok(select_candidate(state, settings, place))
}

pub fn select_candidate(
    state: &mut SessionState,
    settings: &MapSettings,
    place: PlaceCandidate,
) -> Vec<RenderCommand> {
    let mut commands = vec![RenderCommand::HideSuggestions];
    if let Some(prev) = state.destination.take() {
        commands.push(RenderCommand::RemoveLayer(prev.marker));
        if let Some(route) = prev.route {
            commands.push(RenderCommand::RemoveLayer(route));
        }
    }

    let pos = place.pos;
    let marker = state.next_layer_id();
    commands.push(RenderCommand::AddMarker {
        layer: marker,
        pos,
        popup: None,
    });
    commands.push(RenderCommand::SetView {
        center: pos,
        zoom: settings.focus_zoom,
    });

    let (route, distance) = match state.user_pos {
        Some(user_pos) => {
            let route = state.next_layer_id();
            commands.push(RenderCommand::AddPolyline {
                layer: route,
                points: [user_pos, pos],
                style: settings.route_style.clone(),
            });
            (Some(route), DistanceInfo::Km(distance_km(user_pos, pos)))
        }
        None => (None, DistanceInfo::LocateYourselfFirst),
    };

    commands.push(RenderCommand::ShowInfoPanel(InfoPanel {
        title: place.title().to_owned(),
        address: place.address().to_owned(),
        distance,
    }));
    log::debug!("Selected place '{}' at {}", place.title(), pos);
    state.destination = Some(Destination {
        place,
        marker,
        route,
    });
    commands
}

/// Select one of the current suggestions by its position in the list.
pub fn select_suggestion(
    state: &mut SessionState,
    settings: &MapSettings,
    index: usize,
) -> Result<Vec<RenderCommand>> {
    let place = state
        .suggestions
        .get(index)
        .cloned()
        .ok_or(Error::NoSuchSuggestion(index))?;
    Ok(select_candidate(state, settings, place))
}

/// Select the top suggestion, if any.
pub fn select_first_suggestion(
    state: &mut SessionState,
    settings: &MapSettings,
) -> Vec<RenderCommand> {
    select_suggestion(state, settings, 0).unwrap_or_else(|_| {
        log::debug!("No suggestion available to select");
        vec![]
    })
}
