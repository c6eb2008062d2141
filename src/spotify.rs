use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, Instrument, Span};

use crate::models::{
    playlist_model::{CreatedPlaylistModel, NewPlaylistModel},
    track_model::AddTracksModel,
};

pub const DEFAULT_API_BASE: &str = "https://api.spotify.com";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} for url: {url}")]
    Status { status: StatusCode, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

/// One authenticated JSON POST. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, access_token: &str, body: Value) -> Result<Reply, ApiError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, access_token: &str, body: Value) -> Result<Reply, ApiError> {
        // `json` also sets `Content-Type: application/json`
        let response = self
            .client
            .post(url)
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(Reply { status, body })
    }
}

pub struct SpotifyClient<T = HttpTransport> {
    transport: T,
    api_base: String,
    span: Span,
}

impl<T: Transport> SpotifyClient<T> {
    pub fn new(transport: T, api_base: &str, span: Span) -> Self {
        Self {
            transport,
            api_base: api_base.trim_end_matches('/').to_string(),
            span,
        }
    }

    /// Creates a private playlist for `user_id`. Every failure is logged and
    /// collapses to `None`, as does a response without an id.
    pub async fn create_playlist(
        &self,
        access_token: &str,
        user_id: &str,
        playlist_name: &str,
    ) -> Option<String> {
        async {
            match self.try_create_playlist(access_token, user_id, playlist_name).await {
                Ok(playlist_id) => {
                    info!(
                        "Created playlist '{playlist_name}' with ID: {}",
                        shown_id(playlist_id.as_deref())
                    );
                    playlist_id
                }
                Err(e) => {
                    error!("Error creating playlist: {e}");
                    None
                }
            }
        }
        .instrument(self.span.clone())
        .await
    }

    /// Appends `track_uris` to the playlist. `true` only on a 2xx response.
    pub async fn add_tracks_to_playlist(
        &self,
        access_token: &str,
        playlist_id: &str,
        track_uris: &[String],
    ) -> bool {
        async {
            match self.try_add_tracks(access_token, playlist_id, track_uris).await {
                Ok(()) => {
                    info!("Added {} tracks to playlist ID: {playlist_id}", track_uris.len());
                    true
                }
                Err(e) => {
                    error!("Error adding tracks to playlist: {e}");
                    false
                }
            }
        }
        .instrument(self.span.clone())
        .await
    }

    async fn try_create_playlist(
        &self,
        access_token: &str,
        user_id: &str,
        playlist_name: &str,
    ) -> Result<Option<String>, ApiError> {
        let url = format!("{}/v1/users/{user_id}/playlists", self.api_base);
        let body = serde_json::to_value(NewPlaylistModel::private(playlist_name))?;

        let reply = self.send(&url, access_token, body).await?;
        let created: CreatedPlaylistModel = serde_json::from_str(&reply.body)?;

        Ok(created.id)
    }

    async fn try_add_tracks(
        &self,
        access_token: &str,
        playlist_id: &str,
        track_uris: &[String],
    ) -> Result<(), ApiError> {
        let url = format!("{}/v1/playlists/{playlist_id}/tracks", self.api_base);
        let body = serde_json::to_value(AddTracksModel {
            uris: track_uris.to_vec(),
        })?;

        self.send(&url, access_token, body).await?;

        Ok(())
    }

    async fn send(&self, url: &str, access_token: &str, body: Value) -> Result<Reply, ApiError> {
        let reply = self.transport.post_json(url, access_token, body).await?;

        if !reply.status.is_success() {
            return Err(ApiError::Status {
                status: reply.status,
                url: url.to_string(),
            });
        }

        Ok(reply)
    }
}

/// Renders an id the way it is logged: bare, or `None` when absent.
fn shown_id(id: Option<&str>) -> &str {
    id.unwrap_or("None")
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedCall {
        pub url: String,
        pub access_token: String,
        pub body: Value,
    }

    /// Records every call and answers with a fixed reply, or with a
    /// transport failure when no reply is scripted.
    #[derive(Clone, Default)]
    pub struct RecordingTransport {
        reply: Option<(StatusCode, String)>,
        calls: Arc<Mutex<Vec<RecordedCall>>>,
    }

    impl RecordingTransport {
        pub fn replying(status: StatusCode, body: &str) -> Self {
            Self {
                reply: Some((status, body.to_string())),
                ..Default::default()
            }
        }

        pub fn unreachable() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn post_json(&self, url: &str, access_token: &str, body: Value) -> Result<Reply, ApiError> {
            self.calls.lock().unwrap().push(RecordedCall {
                url: url.to_string(),
                access_token: access_token.to_string(),
                body,
            });

            match &self.reply {
                Some((status, body)) => Ok(Reply {
                    status: *status,
                    body: body.clone(),
                }),
                // An unparsable URL fails in the builder without touching the network.
                None => Err(Client::new().post("not a url").build().unwrap_err().into()),
            }
        }
    }

    pub fn client(transport: &RecordingTransport) -> SpotifyClient<RecordingTransport> {
        SpotifyClient::new(transport.clone(), "https://api.test/", Span::none())
    }
}
