pub mod error;
pub mod game;
pub mod media;
pub mod vote;

#[cfg(feature = "ssr")]
pub mod app_state;

pub use error::Error;
pub use game::*;
pub use media::*;
pub use vote::*;

#[cfg(feature = "ssr")]
pub use app_state::AppState;
