use serde::Serialize;

/// Body of `POST /v1/playlists/{playlist_id}/tracks`. URIs are sent exactly as given.
#[derive(Serialize, Debug, Clone)]
pub struct AddTracksModel {
    pub uris: Vec<String>,
}
