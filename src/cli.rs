use crate::{
    adapters::json::to_json,
    config::{self, Config},
    console::{self, ConsoleRenderer, OutputFormat},
};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::{io, path::PathBuf};
use wgw_application::prelude::Runtime;
use wgw_core::{gateways::geocode::GeocodingQuery, usecases, util::validate};
use wgw_entities::geo::{distance_km, MapPoint};
use wgw_gateways::{geolocation::FixedPosition, nominatim::Nominatim};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Configuration file (default: wegweiser.toml)
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive map session controlled from stdin (default).
    Console,

    /// Great-circle distance in km between two positions.
    Distance {
        /// Start position "lat,lng"
        #[arg(allow_hyphen_values = true)]
        from: MapPoint,

        /// Target position "lat,lng"
        #[arg(allow_hyphen_values = true)]
        to: MapPoint,
    },

    /// Look up place suggestions.
    Search {
        text: String,

        /// Prefer results around this position "lat,lng".
        #[arg(long, allow_hyphen_values = true)]
        near: Option<MapPoint>,
    },
}

pub fn run(args: Args) -> Result<()> {
    let Args {
        config_file,
        output,
        command,
    } = args;
    match command.unwrap_or(Command::Console) {
        Command::Distance { from, to } => {
            let km = distance_km(from, to);
            match output {
                OutputFormat::Text => println!("{km:.2} km"),
                OutputFormat::Json => println!("{}", serde_json::json!({ "km": km })),
            }
        }
        Command::Search { text, near } => {
            let cfg = Config::try_load_from_file_or_default(config_file)?;
            let map = &cfg.app.map;
            if !validate::is_searchable(&text, map.min_query_len) {
                return Err(anyhow!(
                    "The search text must contain at least {} characters",
                    map.min_query_len
                ));
            }
            let gateway = geocoding_gateway(&cfg.geocoding)?;
            let query = GeocodingQuery {
                text: text.trim().to_owned(),
                near,
            };
            let places = usecases::fetch_suggestions(&gateway, &query, map.max_suggestions)?;
            match output {
                OutputFormat::Text => {
                    for (i, place) in places.iter().enumerate() {
                        println!("{}. {} ({})", i + 1, place.full_name, place.pos);
                    }
                }
                OutputFormat::Json => {
                    let places = to_json::place_candidates(places);
                    println!("{}", serde_json::to_string(&places)?);
                }
            }
        }
        Command::Console => {
            let cfg = Config::try_load_from_file_or_default(config_file)?;
            let geocoding = geocoding_gateway(&cfg.geocoding)?;
            let geolocation = FixedPosition::new(cfg.geolocation.position);
            if cfg.geolocation.position.is_none() {
                log::info!("No position configured: locating yourself requires 'locate <lat,lng>'");
            }
            let renderer = ConsoleRenderer::new(io::stdout().lock(), output);
            let mut rt = Runtime::new(cfg.app, geocoding, geolocation, renderer);
            console::run(&mut rt, io::stdin().lock(), cfg.search.wait_for_response)?;
        }
    }
    Ok(())
}

fn geocoding_gateway(cfg: &config::Geocoding) -> Result<Nominatim> {
    match &cfg.gateway {
        config::GeocodingGateway::Nominatim {
            base_url,
            user_agent,
            timeout,
        } => Nominatim::new(base_url, user_agent, *timeout),
    }
}
