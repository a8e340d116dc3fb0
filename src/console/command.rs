use std::str::FromStr;
use thiserror::Error;
use wgw_core::entities::{MapPoint, ParseError};

pub const HELP: &str = "\
Commands:
  type <text>               search for places (at least 3 characters)
  go                        select the first suggestion
  pick <n>                  select suggestion number n
  goto <lat> <lon> [name]   select a place by its position
  locate [lat,lng]          determine (or set) your own position
  resize                    simulate a resize of the map container
  help                      show this help
  quit                      leave the console";

/// A single line of console input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Type(String),
    Go,
    /// 1-based index into the current suggestions.
    Pick(usize),
    Goto {
        lat: String,
        lon: String,
        name: Option<String>,
    },
    Locate(Option<MapPoint>),
    Resize,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("Missing {0}")]
    MissingArgument(&'static str),
    #[error("Invalid suggestion number '{0}'")]
    InvalidNumber(String),
    #[error(transparent)]
    Position(#[from] ParseError),
}

impl FromStr for Command {
    type Err = CommandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, args) = split_first_word(s);
        let cmd = match name.to_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "type" => Self::Type(args.to_owned()),
            "go" => Self::Go,
            "pick" => {
                if args.is_empty() {
                    return Err(CommandError::MissingArgument("suggestion number"));
                }
                let n = args
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| CommandError::InvalidNumber(args.to_owned()))?;
                Self::Pick(n)
            }
            "goto" => {
                let (lat, rest) = split_first_word(args);
                let (lon, name) = split_first_word(rest);
                if lat.is_empty() {
                    return Err(CommandError::MissingArgument("latitude"));
                }
                if lon.is_empty() {
                    return Err(CommandError::MissingArgument("longitude"));
                }
                Self::Goto {
                    lat: lat.to_owned(),
                    lon: lon.to_owned(),
                    name: (!name.is_empty()).then(|| name.to_owned()),
                }
            }
            "locate" => {
                let pos = if args.is_empty() {
                    None
                } else {
                    Some(args.parse()?)
                };
                Self::Locate(pos)
            }
            "resize" => Self::Resize,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(name.to_owned())),
        };
        Ok(cmd)
    }
}

fn split_first_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    s.split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim()))
        .unwrap_or((s, ""))
}
