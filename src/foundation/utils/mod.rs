mod string_utils;

pub use string_utils::{escape_html, normalize_artist_id};
