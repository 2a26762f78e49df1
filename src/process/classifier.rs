use crate::api_client::{Album, ApiError, CatalogApi};
use crate::process::{extract_title_date, release_date_key, DateSource, LiveEntry, TitleDate};
use log::trace;

/// Decides whether `album` is a dated live album.
///
/// Titles carrying a full date are keyed on it. When `include_no_date` is set,
/// undated `Live At/In/From` titles are keyed on the album's release date, which
/// costs one extra catalog lookup. Everything else yields `None`.
pub async fn classify_album(
    api: &dyn CatalogApi,
    album: Album,
    include_no_date: bool,
) -> Result<Option<LiveEntry>, ApiError> {
    match extract_title_date(&album.name) {
        TitleDate::Dated(key) => Ok(Some(LiveEntry {
            key,
            album,
            source: DateSource::Title,
        })),
        TitleDate::LivePhrase if include_no_date => {
            let full = api.get_album(&album.id).await?;
            match full.release_date.as_deref() {
                Some(release_date) => Ok(Some(LiveEntry {
                    key: release_date_key(release_date),
                    album,
                    source: DateSource::ReleaseDate,
                })),
                None => {
                    trace!("No release date for '{}', skipping", album.name);
                    Ok(None)
                }
            }
        }
        _ => {
            trace!("No date found in '{}'", album.name);
            Ok(None)
        }
    }
}
