mod api_error;
mod catalog;
mod spotify;

pub use api_error::ApiError;
pub use catalog::*;
pub use spotify::SpotifyClient;
