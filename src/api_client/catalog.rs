//! The catalog contract the live-album pipeline needs from a music metadata service.
//!
//! Components never reach for a shared session; they receive something implementing
//! [`CatalogApi`] and call it directly, which lets tests swap in a mock.

use crate::api_client::ApiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Page size accepted by the album listing endpoint.
pub const ALBUM_PAGE_SIZE: u32 = 50;

/// Album group requested when listing an artist's releases.
pub const ALBUM_TYPE: &str = "album";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// An album record as returned by the catalog.
///
/// `release_date` is only guaranteed on the full album lookup; listing pages may
/// carry it too but nothing relies on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Album {
    pub fn external_url(&self) -> &str {
        self.external_urls.spotify.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// One page of an artist's albums, at most `limit` long.
    async fn list_albums(
        &self,
        artist_id: &str,
        album_type: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Album>, ApiError>;

    /// Full album detail, including its release date.
    async fn get_album(&self, album_id: &str) -> Result<Album, ApiError>;

    async fn get_artist(&self, artist_id: &str) -> Result<Artist, ApiError>;

    /// Related artists in the order the service ranks them.
    async fn get_related_artists(&self, artist_id: &str) -> Result<Vec<Artist>, ApiError>;
}
