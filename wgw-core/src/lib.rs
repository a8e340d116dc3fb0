//! Headless core of the map widget: session state, usecases
//! and the ports to the outer collaborators.

pub mod gateways;
pub mod render;
pub mod session;
pub mod settings;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use wgw_entities::{geo::*, place::*};
}
