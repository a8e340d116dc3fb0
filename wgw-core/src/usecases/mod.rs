mod error;
mod init_map;
mod locate_user;
mod query_suggestions;
mod select_place;


pub use self::{
    error::Error, init_map::*, locate_user::*, query_suggestions::*, select_place::*,
};

pub type Result<T> = std::result::Result<T, Error>;

mod prelude {
    pub use super::{error::Error, Result};
    pub use crate::{
        entities::*,
        render::*,
        session::*,
        settings::MapSettings,
    };
}
