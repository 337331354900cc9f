pub mod config;
pub mod error;
pub mod models;

pub use config::BreatherConfig;
pub use error::BreatherError;
pub use models::quote::{quote_at, QUOTES};
pub use models::track::TrackEvent;
