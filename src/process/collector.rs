use crate::api_client::{ApiError, CatalogApi, ALBUM_PAGE_SIZE, ALBUM_TYPE};
use crate::process::{classify_album, LiveAlbums};
use log::debug;

/// Collects the live albums of an artist.
///
/// Pages through the whole album catalog, `ALBUM_PAGE_SIZE` at a time, until a
/// page comes back short, and classifies every album on the way. An empty result
/// means no album qualified; it is not an error. Nothing is returned until the
/// last page has been read.
///
/// # Arguments
///
/// * `api` - The catalog to read from.
/// * `artist_id` - The artist whose albums are collected.
/// * `include_no_date` - Also keep undated `Live At/In/From` albums, keyed on their release date.
///
pub async fn collect_live_albums(
    api: &dyn CatalogApi,
    artist_id: &str,
    include_no_date: bool,
) -> Result<LiveAlbums, ApiError> {
    let mut live_albums = LiveAlbums::new();
    let mut offset = 0;

    loop {
        let batch = api
            .list_albums(artist_id, ALBUM_TYPE, ALBUM_PAGE_SIZE, offset)
            .await?;
        let batch_len = batch.len();
        debug!(
            "Artist {}: {} albums at offset {}",
            artist_id, batch_len, offset
        );

        for album in batch {
            if let Some(entry) = classify_album(api, album, include_no_date).await? {
                live_albums.push(entry);
            }
        }

        offset += ALBUM_PAGE_SIZE;
        if batch_len != ALBUM_PAGE_SIZE as usize {
            break;
        }
    }

    Ok(live_albums)
}
