//! Spotify Web API implementation of [`CatalogApi`].
//!
//! Authenticates with the client-credentials grant, applies the configured timeout
//! to every request and retries transient failures (rate limiting, 5xx, timeouts)
//! with a bounded number of attempts.

use crate::api_client::{Album, ApiError, Artist, CatalogApi};
use crate::configuration::ApiSettings;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::Mutex;

/// First backoff step for retried 5xx and transport failures.
const BASE_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct Paging<T> {
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct RelatedArtists {
    artists: Vec<Artist>,
}

pub struct SpotifyClient {
    client: Client,
    settings: ApiSettings,
    access_token: Mutex<String>,
}

impl SpotifyClient {
    /// Builds a client and acquires its first access token.
    ///
    /// Any failure here is reported as [`ApiError::Authentication`], so callers can
    /// stop before doing any other work.
    pub async fn authenticate(settings: &ApiSettings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| ApiError::Authentication(e.to_string()))?;

        let token = request_token(&client, settings).await?;

        Ok(Self {
            client,
            settings: settings.clone(),
            access_token: Mutex::new(token),
        })
    }

    async fn refresh_token(&self) -> Result<(), ApiError> {
        let token = request_token(&self.client, &self.settings).await?;
        *self.access_token.lock().await = token;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!(
            "{}{}",
            self.settings.api_base_url.trim_end_matches('/'),
            path
        );
        let mut attempt = 0;
        let mut refreshed = false;

        loop {
            match self.send_once(&url, query).await {
                Ok(value) => return Ok(value),
                Err(ApiError::Status { status: 401, .. }) if !refreshed => {
                    debug!("Access token rejected, requesting a new one");
                    self.refresh_token().await?;
                    refreshed = true;
                }
                Err(e) if e.is_transient() && attempt < self.settings.max_retries => {
                    let delay = retry_delay(&e, attempt);
                    warn!(
                        "{} failed ({}), retrying in {:?} ({}/{})",
                        path,
                        e,
                        delay,
                        attempt + 1,
                        self.settings.max_retries
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let token = self.access_token.lock().await.clone();
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::RateLimited {
                retry_after: parse_retry_after(response.headers()),
            });
        }
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(error_from_body(status.as_u16(), &body));
        }

        let body = response.bytes().await?;
        decode_body(&body)
    }
}

#[async_trait]
impl CatalogApi for SpotifyClient {
    async fn list_albums(
        &self,
        artist_id: &str,
        album_type: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Album>, ApiError> {
        let page: Paging<Album> = self
            .get_json(
                &format!("/artists/{}/albums", artist_id),
                &[
                    ("include_groups", album_type.to_string()),
                    ("limit", limit.to_string()),
                    ("offset", offset.to_string()),
                ],
            )
            .await?;
        Ok(page.items)
    }

    async fn get_album(&self, album_id: &str) -> Result<Album, ApiError> {
        self.get_json(&format!("/albums/{}", album_id), &[]).await
    }

    async fn get_artist(&self, artist_id: &str) -> Result<Artist, ApiError> {
        self.get_json(&format!("/artists/{}", artist_id), &[]).await
    }

    async fn get_related_artists(&self, artist_id: &str) -> Result<Vec<Artist>, ApiError> {
        let related: RelatedArtists = self
            .get_json(&format!("/artists/{}/related-artists", artist_id), &[])
            .await?;
        Ok(related.artists)
    }
}

async fn request_token(client: &Client, settings: &ApiSettings) -> Result<String, ApiError> {
    if settings.client_id.is_empty() || settings.client_secret.is_empty() {
        return Err(ApiError::Authentication(
            "client_id and client_secret must be set in the configuration".to_string(),
        ));
    }

    let response = client
        .post(&settings.token_url)
        .basic_auth(&settings.client_id, Some(&settings.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| ApiError::Authentication(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body: Value = response.json().await.unwrap_or(Value::Null);
        let reason = body["error_description"]
            .as_str()
            .or_else(|| body["error"].as_str())
            .unwrap_or("Unknown error");
        return Err(ApiError::Authentication(format!(
            "token request returned {}: {}",
            status, reason
        )));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Authentication(e.to_string()))?;
    Ok(token.access_token)
}

/// Turns a non-success Web API response into an error, reading the
/// `{"error": {"status", "message"}}` body when present.
fn error_from_body(status: u16, body: &Value) -> ApiError {
    let message = body["error"]["message"]
        .as_str()
        .or_else(|| body["error"].as_str())
        .unwrap_or("Unknown error")
        .to_string();
    ApiError::Status { status, message }
}

/// Decodes a success body, keeping malformed JSON apart from transport failures.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

fn retry_delay(error: &ApiError, attempt: u32) -> Duration {
    match error {
        ApiError::RateLimited {
            retry_after: Some(delay),
        } => *delay,
        _ => BASE_BACKOFF * 2u32.saturating_pow(attempt),
    }
}
