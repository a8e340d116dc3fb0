//! Wiring of the headless map widget: UI events are dispatched
//! to the usecases and their effects are executed.

mod controller;
mod runtime;

pub mod prelude {
    pub use super::{controller::*, runtime::*};
}

pub(crate) use wgw_core::{
    entities::*,
    gateways::{geocode::*, geolocate::*, render::*},
    render::*,
    session::*,
    settings::MapSettings,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;
