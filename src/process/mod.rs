mod classifier;
mod collector;
mod date_extractor;
mod explorer;
mod models;

pub use classifier::classify_album;
pub use collector::collect_live_albums;
pub use date_extractor::*;
pub use explorer::{ArtistGraphExplorer, ArtistScore, ExplorationReport, ExplorationState};
pub use models::{DateSource, LiveAlbums, LiveEntry};
