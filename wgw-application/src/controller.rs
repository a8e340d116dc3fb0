use crate::{
    usecases::{NewPlaceCandidate, QueryStart, SuggestionRequest},
    *,
};
use std::time::{Duration, Instant};

pub const DEFAULT_RESIZE_SETTLE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Settings {
    pub map: MapSettings,
    /// Time for the layout to settle before the map size is recalculated.
    pub resize_settle_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map: MapSettings::default(),
            resize_settle_delay: DEFAULT_RESIZE_SETTLE_DELAY,
        }
    }
}

/// Everything that can happen on the UI surface
/// or is reported back by a collaborator.
#[derive(Debug)]
pub enum UiEvent {
    /// The text of the search input has changed.
    SearchInput(String),
    SearchButtonClicked,
    SuggestionClicked(usize),
    /// A place has been chosen outside of the suggestion list.
    PlaceSubmitted(NewPlaceCandidate),
    LocateMeClicked,
    Located(Result<MapPoint, GeolocationError>),
    SuggestionsReceived {
        seq: RequestSeq,
        result: usecases::Result<Vec<PlaceCandidate>>,
    },
    Resized(Instant),
    Tick(Instant),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Render(RenderCommand),
    /// Look up suggestions and report them back with
    /// [`UiEvent::SuggestionsReceived`].
    Geocode(SuggestionRequest),
    /// Determine the current position and report it back
    /// with [`UiEvent::Located`].
    Locate,
}

/// Owns the session and dispatches every [`UiEvent`] to its handler.
#[derive(Debug)]
pub struct MapController {
    settings: Settings,
    session: SessionState,
    invalidate_size_at: Option<Instant>,
}

impl MapController {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            session: SessionState::new(),
            invalidate_size_at: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// When the next [`UiEvent::Tick`] is expected.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.invalidate_size_at
    }

    pub fn start(&self) -> Vec<Effect> {
        render(usecases::init_map(&self.settings.map))
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        let Self {
            settings,
            session,
            invalidate_size_at,
        } = self;
        let map = &settings.map;
        match event {
            UiEvent::SearchInput(text) => {
                match usecases::begin_suggestion_query(session, map, &text) {
                    QueryStart::TooShort => render(vec![RenderCommand::HideSuggestions]),
                    QueryStart::Request(req) => vec![Effect::Geocode(req)],
                }
            }
            UiEvent::SearchButtonClicked => {
                render(usecases::select_first_suggestion(session, map))
            }
            UiEvent::SuggestionClicked(index) => {
                render_or_log(usecases::select_suggestion(session, map, index))
            }
            UiEvent::PlaceSubmitted(candidate) => {
                render_or_log(usecases::select_place(session, map, &candidate))
            }
            UiEvent::LocateMeClicked => vec![Effect::Locate],
            UiEvent::Located(position) => {
                render_or_log(usecases::locate_user(session, map, position))
            }
            UiEvent::SuggestionsReceived { seq, result } => {
                render(usecases::apply_suggestions(session, seq, result))
            }
            UiEvent::Resized(at) => {
                // Subsequent resize events postpone the recalculation
                *invalidate_size_at = Some(at + settings.resize_settle_delay);
                vec![]
            }
            UiEvent::Tick(now) => match *invalidate_size_at {
                Some(due) if now >= due => {
                    *invalidate_size_at = None;
                    render(vec![RenderCommand::InvalidateSize])
                }
                _ => vec![],
            },
        }
    }
}

fn render(commands: Vec<RenderCommand>) -> Vec<Effect> {
    commands.into_iter().map(Effect::Render).collect()
}

fn render_or_log(result: usecases::Result<Vec<RenderCommand>>) -> Vec<Effect> {
    match result {
        Ok(commands) => render(commands),
        Err(err) => {
            log::warn!("{err}");
            vec![]
        }
    }
}
