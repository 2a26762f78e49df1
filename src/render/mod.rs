mod chronology;
mod html;

pub use chronology::{AlbumRow, Chronology, Cover, YearBucket, YearSection};
pub use html::render_html;
