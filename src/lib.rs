pub mod api_client;
pub mod configuration;
pub mod foundation;
pub mod process;
pub mod render;
pub mod startup;

pub use api_client::{CatalogApi, SpotifyClient};
pub use configuration::*;
pub use process::{collect_live_albums, extract_title_date, ArtistGraphExplorer};
pub use render::{render_html, Chronology};
