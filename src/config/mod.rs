use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};
use url::Url;
use wgw_application::prelude::Settings;
use wgw_core::{
    entities::MapPoint,
    render::{LineStyle, TileLayer},
    settings::MapSettings,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "wegweiser.toml";

const ENV_NAME_NOMINATIM_URL: &str = "NOMINATIM_URL";

pub struct Config {
    pub app: Settings,
    pub search: Search,
    pub geocoding: Geocoding,
    pub geolocation: Geolocation,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(base_url) = env::var(ENV_NAME_NOMINATIM_URL) {
            let GeocodingGateway::Nominatim { base_url: url, .. } = &mut cfg.geocoding.gateway;
            *url = base_url.parse()?;
        }
        Ok(cfg)
    }
}

pub struct Search {
    /// How long the console waits for pending suggestions.
    pub wait_for_response: Duration,
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

pub enum GeocodingGateway {
    Nominatim {
        base_url: Url,
        user_agent: String,
        timeout: Option<Duration>,
    },
}

pub struct Geolocation {
    /// Reported as the current position of the user.
    pub position: Option<MapPoint>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            map,
            search,
            geocoding,
            gateway,
            geolocation,
        } = from;

        let raw::Map {
            initial_center,
            initial_zoom,
            focus_zoom,
            tile_url_template,
            tile_attribution,
            route_color,
            route_weight,
            resize_settle_delay,
        } = map.unwrap_or_default();

        let raw::Search {
            min_query_len,
            max_suggestions,
            wait_for_response,
        } = search.unwrap_or_default();

        if max_suggestions == 0 {
            return Err(anyhow!("At least one suggestion must be shown"));
        }

        let map = MapSettings {
            initial_center: initial_center.parse()?,
            initial_zoom,
            focus_zoom,
            tile_layer: TileLayer {
                url_template: tile_url_template,
                attribution: tile_attribution,
            },
            route_style: LineStyle {
                color: route_color,
                weight: route_weight,
            },
            min_query_len,
            max_suggestions,
        };
        let app = Settings {
            map,
            resize_settle_delay,
        };
        let search = Search { wait_for_response };

        let gw_name = geocoding
            .and_then(|g| g.gateway)
            .ok_or_else(|| anyhow!("No geocoding gateway configured"))?;
        let gateway = gateway.unwrap_or_default();
        let geocoding_gateway = match gw_name {
            raw::GeocodingGateway::Nominatim => {
                let raw::Nominatim {
                    base_url,
                    user_agent,
                    timeout,
                } = gateway
                    .nominatim
                    .ok_or_else(|| anyhow!("Missing 'nominatim' gateway configuration"))?;
                if user_agent.trim().is_empty() {
                    return Err(anyhow!("Nominatim requires a user agent"));
                }
                GeocodingGateway::Nominatim {
                    base_url: base_url.parse()?,
                    user_agent,
                    timeout,
                }
            }
        };
        let geocoding = Geocoding {
            gateway: geocoding_gateway,
        };

        let raw::Geolocation { position } = geolocation.unwrap_or_default();
        let position = position.map(|pos| pos.parse::<MapPoint>()).transpose()?;
        let geolocation = Geolocation { position };

        Ok(Self {
            app,
            search,
            geocoding,
            geolocation,
        })
    }
}
