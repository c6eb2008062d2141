use serde::{Deserialize, Serialize};

/// Body of `POST /v1/users/{user_id}/playlists`.
#[derive(Debug, Serialize, Clone)]
pub struct NewPlaylistModel {
    pub name: String,
    pub public: bool,
}

impl NewPlaylistModel {
    pub fn private(name: &str) -> Self {
        Self {
            name: name.to_string(),
            public: false,
        }
    }
}

/// The part of the created playlist we care about. Everything else the
/// service sends back is ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct CreatedPlaylistModel {
    #[serde(default)]
    pub id: Option<String>,
}
