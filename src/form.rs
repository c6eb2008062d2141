use iced::{
    widget::{button, column, row, text, text_input},
    Alignment, Element, Length,
};

use crate::{
    spotify::{SpotifyClient, Transport},
    utils::split_track_uris,
};

const LABEL_WIDTH: f32 = 220.0;

/// Outcome of an action, shown to the user as a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info { title: String, body: String },
    Error { title: String, body: String },
}

impl Notice {
    fn success(body: String) -> Self {
        Notice::Info {
            title: "Success".to_string(),
            body,
        }
    }

    fn error(body: &str) -> Self {
        Notice::Error {
            title: "Error".to_string(),
            body: body.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Notice::Info { title, .. } | Notice::Error { title, .. } => title,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Notice::Info { body, .. } | Notice::Error { body, .. } => body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlaylist {
    pub access_token: String,
    pub user_id: String,
    pub playlist_name: String,
}

impl NewPlaylist {
    pub async fn submit<T: Transport>(self, client: &SpotifyClient<T>) -> Notice {
        let playlist_id = client
            .create_playlist(&self.access_token, &self.user_id, &self.playlist_name)
            .await;

        match playlist_id {
            Some(id) if !id.is_empty() => Notice::success(format!(
                "Playlist '{}' created successfully with ID: {id}",
                self.playlist_name
            )),
            _ => Notice::error("Failed to create playlist. See logs for details."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTracks {
    pub access_token: String,
    pub playlist_id: String,
    pub track_uris: Vec<String>,
}

impl NewTracks {
    pub async fn submit<T: Transport>(self, client: &SpotifyClient<T>) -> Notice {
        let added = client
            .add_tracks_to_playlist(&self.access_token, &self.playlist_id, &self.track_uris)
            .await;

        if added {
            Notice::success(format!(
                "Added {} tracks to playlist ID: {}",
                self.track_uris.len(),
                self.playlist_id
            ))
        } else {
            Notice::error("Failed to add tracks. See logs for details.")
        }
    }
}

#[derive(Debug, Clone)]
pub enum FormMessage {
    AccessTokenChanged(String),
    UserIdChanged(String),
    PlaylistNameChanged(String),
    TrackUrisChanged(String),
    CreatePlaylist,
    AddTracks,
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    pub access_token: String,
    pub user_id: String,
    pub playlist_name: String,
    pub track_uris: String,
}

impl Form {
    /// Applies an edit. Submit messages are left to the owner of the form.
    pub fn update(&mut self, message: FormMessage) {
        match message {
            FormMessage::AccessTokenChanged(value) => self.access_token = value,
            FormMessage::UserIdChanged(value) => self.user_id = value,
            FormMessage::PlaylistNameChanged(value) => self.playlist_name = value,
            FormMessage::TrackUrisChanged(value) => self.track_uris = value,
            FormMessage::CreatePlaylist | FormMessage::AddTracks => {}
        }
    }

    pub fn new_playlist(&self) -> Result<NewPlaylist, Notice> {
        if self.access_token.is_empty() || self.user_id.is_empty() || self.playlist_name.is_empty() {
            return Err(Notice::error(
                "Please enter Access Token, User ID, and Playlist Name.",
            ));
        }

        Ok(NewPlaylist {
            access_token: self.access_token.clone(),
            user_id: self.user_id.clone(),
            playlist_name: self.playlist_name.clone(),
        })
    }

    /// The playlist id is read from the User ID field.
    pub fn new_tracks(&self) -> Result<NewTracks, Notice> {
        let playlist_id = &self.user_id;

        if self.access_token.is_empty() || playlist_id.is_empty() || self.track_uris.is_empty() {
            return Err(Notice::error(
                "Please enter Access Token, Playlist ID, and Track URIs.",
            ));
        }

        Ok(NewTracks {
            access_token: self.access_token.clone(),
            playlist_id: playlist_id.clone(),
            track_uris: split_track_uris(&self.track_uris),
        })
    }

    pub fn view(&self, busy: bool) -> Element<FormMessage> {
        let create = button("Create Playlist").on_press_maybe((!busy).then_some(FormMessage::CreatePlaylist));
        let add = button("Add Tracks").on_press_maybe((!busy).then_some(FormMessage::AddTracks));

        column![
            field("Access Token:", &self.access_token, FormMessage::AccessTokenChanged),
            field("User ID:", &self.user_id, FormMessage::UserIdChanged),
            field("Playlist Name:", &self.playlist_name, FormMessage::PlaylistNameChanged),
            field(
                "Track URIs (comma-separated):",
                &self.track_uris,
                FormMessage::TrackUrisChanged
            ),
            row![create, add].spacing(20).padding([10, LABEL_WIDTH as u16 + 10]),
        ]
        .spacing(5)
        .into()
    }
}

fn field<'a>(
    label: &'a str,
    value: &'a str,
    on_input: fn(String) -> FormMessage,
) -> Element<'a, FormMessage> {
    row![
        text(label).width(Length::Fixed(LABEL_WIDTH)),
        text_input("", value).on_input(on_input).width(Length::Fill),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
