use crate::{prelude::*, usecases::{NewPlaceCandidate, SuggestionRequest}, *};
use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

const DELHI: (f64, f64) = (28.6139, 77.2090);

fn new_candidate(name: &str, lat: &str, lon: &str) -> NewPlaceCandidate {
    NewPlaceCandidate {
        display_name: name.into(),
        lat: lat.into(),
        lon: lon.into(),
    }
}

fn mumbai() -> PlaceCandidate {
    PlaceCandidate::new(
        "Mumbai, Maharashtra, India",
        MapPoint::from_lat_lng_deg(19.0760, 72.8777),
    )
}

fn pune() -> PlaceCandidate {
    PlaceCandidate::new("Pune, Maharashtra, India", MapPoint::from_lat_lng_deg(18.5204, 73.8567))
}

fn render_commands(effects: Vec<Effect>) -> Vec<RenderCommand> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Render(cmd) => Some(cmd),
            _ => None,
        })
        .collect()
}

fn geocode_request(effects: Vec<Effect>) -> SuggestionRequest {
    match effects.as_slice() {
        [Effect::Geocode(req)] => req.clone(),
        _ => panic!("Expected a single geocoding request: {effects:?}"),
    }
}

#[derive(Clone)]
struct StaticGeocoder {
    results: Vec<NewPlaceCandidate>,
    queries: Arc<Mutex<Vec<GeocodingQuery>>>,
}

impl StaticGeocoder {
    fn new(results: Vec<NewPlaceCandidate>) -> Self {
        Self {
            results,
            queries: Default::default(),
        }
    }
}

impl GeocodingGateway for StaticGeocoder {
    fn search(&self, query: &GeocodingQuery) -> Result<Vec<NewPlaceCandidate>, GeocodingError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.results.clone())
    }
}

struct StaticPosition(Result<MapPoint, GeolocationError>);

impl GeolocationGateway for StaticPosition {
    fn current_position(&self) -> Result<MapPoint, GeolocationError> {
        self.0
    }
}

mod controller {
    use super::*;

    #[test]
    fn start_renders_tile_layer_and_initial_view() {
        let ctrl = MapController::new(Settings::default());
        let cmds = render_commands(ctrl.start());
        assert_eq!(cmds.len(), 2);
        assert!(matches!(cmds[0], RenderCommand::AddTileLayer(_)));
        assert!(matches!(cmds[1], RenderCommand::SetView { zoom: 5, .. }));
    }

    #[test]
    fn short_input_hides_suggestions_without_request() {
        let mut ctrl = MapController::new(Settings::default());
        let effects = ctrl.handle(UiEvent::SearchInput("Mu".into()));
        assert_eq!(effects, vec![Effect::Render(RenderCommand::HideSuggestions)]);
        assert!(ctrl.session().pending_request().is_none());
    }

    #[test]
    fn only_the_latest_response_is_shown() {
        let mut ctrl = MapController::new(Settings::default());
        let first = geocode_request(ctrl.handle(UiEvent::SearchInput("Mum".into())));
        let second = geocode_request(ctrl.handle(UiEvent::SearchInput("Pun".into())));
        assert_ne!(first.seq, second.seq);

        let effects = ctrl.handle(UiEvent::SuggestionsReceived {
            seq: second.seq,
            result: Ok(vec![pune()]),
        });
        assert_eq!(
            render_commands(effects),
            vec![RenderCommand::ShowSuggestions(vec![
                "Pune, Maharashtra, India".into()
            ])]
        );

        // The slower response of the superseded request arrives late
        let effects = ctrl.handle(UiEvent::SuggestionsReceived {
            seq: first.seq,
            result: Ok(vec![mumbai()]),
        });
        assert!(effects.is_empty());
        assert_eq!(ctrl.session().suggestions(), &[pune()]);
    }

    #[test]
    fn search_button_selects_first_suggestion() {
        let mut ctrl = MapController::new(Settings::default());
        assert!(render_commands(ctrl.handle(UiEvent::SearchButtonClicked)).is_empty());

        let req = geocode_request(ctrl.handle(UiEvent::SearchInput("Mum".into())));
        ctrl.handle(UiEvent::SuggestionsReceived {
            seq: req.seq,
            result: Ok(vec![mumbai(), pune()]),
        });
        let cmds = render_commands(ctrl.handle(UiEvent::SearchButtonClicked));
        assert_eq!(cmds[0], RenderCommand::HideSuggestions);
        assert_eq!(
            ctrl.session().destination().map(|d| &d.place),
            Some(&mumbai())
        );
    }

    #[test]
    fn clicking_a_missing_suggestion_renders_nothing() {
        let mut ctrl = MapController::new(Settings::default());
        assert!(ctrl.handle(UiEvent::SuggestionClicked(3)).is_empty());
        assert!(ctrl.session().destination().is_none());
    }

    #[test]
    fn locate_me_requests_position() {
        let mut ctrl = MapController::new(Settings::default());
        assert_eq!(ctrl.handle(UiEvent::LocateMeClicked), vec![Effect::Locate]);
        let effects = ctrl.handle(UiEvent::Located(Err(GeolocationError::Denied)));
        assert!(effects.is_empty());
        assert!(ctrl.session().user_pos().is_none());
    }

    #[test]
    fn resize_invalidates_size_once_after_settling() {
        let mut ctrl = MapController::new(Settings::default());
        let t0 = Instant::now();
        assert!(ctrl.handle(UiEvent::Resized(t0)).is_empty());
        assert!(ctrl
            .handle(UiEvent::Resized(t0 + Duration::from_millis(100)))
            .is_empty());
        assert_eq!(
            ctrl.next_deadline(),
            Some(t0 + Duration::from_millis(400))
        );

        assert!(ctrl
            .handle(UiEvent::Tick(t0 + Duration::from_millis(350)))
            .is_empty());
        assert_eq!(
            ctrl.handle(UiEvent::Tick(t0 + Duration::from_millis(400))),
            vec![Effect::Render(RenderCommand::InvalidateSize)]
        );
        assert!(ctrl
            .handle(UiEvent::Tick(t0 + Duration::from_secs(1)))
            .is_empty());
        assert!(ctrl.next_deadline().is_none());
    }
}

mod runtime {
    use super::*;

    fn runtime(
        results: Vec<NewPlaceCandidate>,
        position: Result<MapPoint, GeolocationError>,
    ) -> Runtime<StaticPosition, Vec<RenderCommand>> {
        let _ = env_logger::builder().is_test(true).try_init();
        Runtime::new(
            Settings::default(),
            StaticGeocoder::new(results),
            StaticPosition(position),
            vec![],
        )
    }

    #[test]
    fn search_select_and_measure_distance() {
        let (lat, lng) = DELHI;
        let mut rt = runtime(
            vec![
                new_candidate("Mumbai, Maharashtra, India", "19.0760", "72.8777"),
                new_candidate("Broken", "north", ""),
            ],
            Ok(MapPoint::from_lat_lng_deg(lat, lng)),
        );
        rt.start();
        assert_eq!(rt.renderer().len(), 2);

        rt.dispatch(UiEvent::LocateMeClicked);
        assert_eq!(
            rt.controller().session().user_pos(),
            Some(MapPoint::from_lat_lng_deg(lat, lng))
        );

        rt.dispatch(UiEvent::SearchInput("Mumbai".into()));
        assert_eq!(rt.pending_lookups(), 1);
        assert!(rt.wait_for_lookups(Duration::from_secs(5)));
        assert_eq!(rt.pending_lookups(), 0);
        assert_eq!(
            rt.renderer().last(),
            Some(&RenderCommand::ShowSuggestions(vec![
                "Mumbai, Maharashtra, India".into()
            ]))
        );

        rt.renderer_mut().clear();
        rt.dispatch(UiEvent::SuggestionClicked(0));
        let panel = rt.renderer().iter().find_map(|cmd| match cmd {
            RenderCommand::ShowInfoPanel(panel) => Some(panel.clone()),
            _ => None,
        });
        let panel = panel.expect("info panel");
        assert_eq!(panel.title, "Mumbai");
        assert_eq!(panel.distance.to_string(), "1148.09 km");
        assert!(rt
            .renderer()
            .iter()
            .any(|cmd| matches!(cmd, RenderCommand::AddPolyline { .. })));
    }

    #[test]
    fn lookup_uses_current_position_as_bias() {
        let (lat, lng) = DELHI;
        let geocoder = StaticGeocoder::new(vec![]);
        let mut rt = Runtime::new(
            Settings::default(),
            geocoder.clone(),
            StaticPosition(Ok(MapPoint::from_lat_lng_deg(lat, lng))),
            vec![],
        );
        rt.dispatch(UiEvent::LocateMeClicked);
        rt.dispatch(UiEvent::SearchInput("  Agra ".into()));
        assert!(rt.wait_for_lookups(Duration::from_secs(5)));
        assert_eq!(rt.renderer().last(), Some(&RenderCommand::HideSuggestions));
        assert_eq!(
            *geocoder.queries.lock().unwrap(),
            vec![GeocodingQuery {
                text: "Agra".into(),
                near: Some(MapPoint::from_lat_lng_deg(lat, lng)),
            }]
        );
    }

    /// Answers after a delay for one particular text.
    struct SlowGeocoder {
        slow_text: &'static str,
        delay: Duration,
    }

    impl GeocodingGateway for SlowGeocoder {
        fn search(
            &self,
            query: &GeocodingQuery,
        ) -> Result<Vec<NewPlaceCandidate>, GeocodingError> {
            if query.text == self.slow_text {
                std::thread::sleep(self.delay);
            }
            let name = format!("{}, India", query.text);
            Ok(vec![new_candidate(&name, "18.5204", "73.8567")])
        }
    }

    #[test]
    fn wait_only_for_the_latest_lookup() {
        let mut rt = Runtime::new(
            Settings::default(),
            SlowGeocoder {
                slow_text: "Mumbai",
                delay: Duration::from_secs(2),
            },
            StaticPosition(Err(GeolocationError::Unavailable)),
            vec![],
        );
        rt.dispatch(UiEvent::SearchInput("Mumbai".into()));
        assert!(!rt.wait_for_lookups(Duration::from_millis(10)));
        assert_eq!(rt.pending_lookups(), 1);

        rt.dispatch(UiEvent::SearchInput("Pune".into()));
        let started = Instant::now();
        assert!(rt.wait_for_lookups(Duration::from_secs(5)));
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(rt.controller().session().pending_request().is_none());
        assert_eq!(
            rt.renderer().last(),
            Some(&RenderCommand::ShowSuggestions(vec!["Pune, India".into()]))
        );
        // The superseded lookup is still running
        assert_eq!(rt.pending_lookups(), 1);
    }

    #[test]
    fn pump_without_responses_does_nothing() {
        let mut rt = runtime(vec![], Err(GeolocationError::Unavailable));
        assert_eq!(rt.pump(), 0);
        assert!(rt.wait_for_lookups(Duration::from_millis(1)));
        rt.dispatch(UiEvent::LocateMeClicked);
        assert!(rt.renderer().is_empty());
    }
}
