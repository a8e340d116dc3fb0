use anyhow::Result;
use std::{
    io::{BufRead, Write},
    thread,
    time::{Duration, Instant},
};
use wgw_application::prelude::*;
use wgw_core::{gateways::geolocate::GeolocationGateway, usecases::NewPlaceCandidate};

mod command;
mod renderer;

pub use self::{command::*, renderer::*};

const UNNAMED_PLACE: &str = "Selected place";

/// Reads commands line by line until the input ends or `quit` is entered.
pub fn run<L, W, I>(
    rt: &mut Runtime<L, ConsoleRenderer<W>>,
    input: I,
    wait_for_response: Duration,
) -> Result<()>
where
    L: GeolocationGateway,
    W: Write,
    I: BufRead,
{
    rt.start();
    for line in input.lines() {
        let line = line?;
        // Late responses of previous searches
        rt.pump();
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(err) => {
                rt.renderer_mut()
                    .message(format_args!("{err} (enter 'help' to list all commands)"))?;
                continue;
            }
        };
        log::debug!("Console command: {cmd:?}");
        match cmd {
            Command::Type(text) => {
                rt.dispatch(UiEvent::SearchInput(text));
                if !rt.wait_for_lookups(wait_for_response) {
                    log::warn!("No suggestions received within {wait_for_response:?}");
                }
            }
            Command::Go => rt.dispatch(UiEvent::SearchButtonClicked),
            Command::Pick(n) => rt.dispatch(UiEvent::SuggestionClicked(n - 1)),
            Command::Goto { lat, lon, name } => {
                let display_name = name.unwrap_or_else(|| UNNAMED_PLACE.to_owned());
                rt.dispatch(UiEvent::PlaceSubmitted(NewPlaceCandidate {
                    display_name,
                    lat,
                    lon,
                }));
            }
            Command::Locate(None) => rt.dispatch(UiEvent::LocateMeClicked),
            Command::Locate(Some(pos)) => rt.dispatch(UiEvent::Located(Ok(pos))),
            Command::Resize => {
                rt.dispatch(UiEvent::Resized(Instant::now()));
                if let Some(due) = rt.controller().next_deadline() {
                    thread::sleep(due.saturating_duration_since(Instant::now()));
                }
                rt.tick(Instant::now());
            }
            Command::Help => rt.renderer_mut().message(HELP)?,
            Command::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgw_core::{
        entities::MapPoint,
        gateways::{
            geocode::{GeocodingError, GeocodingGateway, GeocodingQuery},
            geolocate::GeolocationError,
        },
    };

    struct StaticGeocoder(Vec<NewPlaceCandidate>);

    impl GeocodingGateway for StaticGeocoder {
        fn search(
            &self,
            _: &GeocodingQuery,
        ) -> std::result::Result<Vec<NewPlaceCandidate>, GeocodingError> {
            Ok(self.0.clone())
        }
    }

    struct Delhi;

    impl GeolocationGateway for Delhi {
        fn current_position(&self) -> std::result::Result<MapPoint, GeolocationError> {
            Ok(MapPoint::from_lat_lng_deg(28.6139, 77.2090))
        }
    }

    fn run_console(format: OutputFormat, input: &str) -> String {
        let settings = Settings {
            resize_settle_delay: Duration::from_millis(10),
            ..Default::default()
        };
        let geocoder = StaticGeocoder(vec![NewPlaceCandidate {
            display_name: "Mumbai, Maharashtra, India".into(),
            lat: "19.0760".into(),
            lon: "72.8777".into(),
        }]);
        let renderer = ConsoleRenderer::new(Vec::new(), format);
        let mut rt = Runtime::new(settings, geocoder, Delhi, renderer);
        run(&mut rt, input.as_bytes(), Duration::from_secs(5)).unwrap();
        String::from_utf8(rt.renderer().output().clone()).unwrap()
    }

    #[test]
    fn search_locate_and_select() {
        let out = run_console(
            OutputFormat::Text,
            "locate\ntype Mum\npick 1\nquit\ntype ignored\n",
        );
        assert!(out.contains("marker #1 28.6139,77.209 \"You are here\""));
        assert!(out.contains("suggestions\n  1. Mumbai, Maharashtra, India\n"));
        assert!(out.contains("info        Mumbai\n"));
        assert!(out.contains("Distance: 1148.09 km"));
        assert!(!out.contains("ignored"));
    }

    #[test]
    fn select_place_without_position() {
        let out = run_console(OutputFormat::Text, "goto 19.0760 72.8777 Mumbai, India\n");
        assert!(out.contains("Distance: Locate yourself first"));
        assert!(!out.contains("route"));
    }

    #[test]
    fn report_invalid_commands() {
        let out = run_console(OutputFormat::Text, "pick 0\nfly\n");
        assert!(out.contains("Invalid suggestion number '0'"));
        assert!(out.contains("Unknown command 'fly'"));
    }

    #[test]
    fn resize_invalidates_size() {
        let out = run_console(OutputFormat::Json, "resize\n");
        assert_eq!(out.lines().last(), Some(r#"{"cmd":"invalidate-size"}"#));
    }
}
