use std::sync::Arc;

use iced::widget::container;
use iced::Length::Fill;
use iced::{window, Element, Size, Task};
use tracing::{info, info_span};

mod config;
mod dialog;
mod form;
mod models;
mod spotify;
mod utils;

use crate::config::Config;
use crate::form::{Form, FormMessage, Notice};
use crate::spotify::{HttpTransport, SpotifyClient, DEFAULT_API_BASE};

fn main() -> iced::Result {
    let config = Config::load();

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .init();

    info!("Using Spotify API at {DEFAULT_API_BASE}");

    iced::application(Playlister::title, Playlister::update, Playlister::view)
        .window(window::Settings {
            size: Size::new(640.0, 240.0),
            ..Default::default()
        })
        .run_with(Playlister::new)
}

struct Playlister {
    form: Form,
    client: Arc<SpotifyClient>,
    // A request or dialog is outstanding
    busy: bool,
}

#[derive(Debug, Clone)]
enum Message {
    Form(FormMessage),
    Finished(Notice),
    DialogClosed,
}

impl Playlister {
    fn new() -> (Self, Task<Message>) {
        let client = SpotifyClient::new(HttpTransport::new(), DEFAULT_API_BASE, info_span!("spotify"));

        let playlister = Playlister {
            form: Form::default(),
            client: Arc::new(client),
            busy: false,
        };

        (playlister, Task::none())
    }

    fn title(&self) -> String {
        "Spotify Playlist Manager".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(FormMessage::CreatePlaylist) if self.busy => Task::none(),
            Message::Form(FormMessage::CreatePlaylist) => match self.form.new_playlist() {
                Ok(request) => {
                    let client = self.client.clone();
                    self.busy = true;

                    Task::perform(
                        async move { request.submit(&client).await },
                        Message::Finished,
                    )
                }
                Err(notice) => self.notify(notice),
            },
            Message::Form(FormMessage::AddTracks) if self.busy => Task::none(),
            Message::Form(FormMessage::AddTracks) => match self.form.new_tracks() {
                Ok(request) => {
                    let client = self.client.clone();
                    self.busy = true;

                    Task::perform(
                        async move { request.submit(&client).await },
                        Message::Finished,
                    )
                }
                Err(notice) => self.notify(notice),
            },
            Message::Form(form_message) => {
                self.form.update(form_message);
                Task::none()
            }
            Message::Finished(notice) => self.notify(notice),
            Message::DialogClosed => {
                self.busy = false;
                Task::none()
            }
        }
    }

    fn notify(&mut self, notice: Notice) -> Task<Message> {
        self.busy = true;
        Task::perform(dialog::show(notice), |_| Message::DialogClosed)
    }

    fn view(&self) -> Element<Message> {
        let content = self.form.view(self.busy).map(Message::Form);

        container(content).padding([10, 20]).width(Fill).height(Fill).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Playlister {
        let (mut playlister, _) = Playlister::new();
        playlister.form = Form {
            access_token: "T".into(),
            user_id: "U".into(),
            playlist_name: "N".into(),
            track_uris: "spotify:track:1".into(),
        };
        playlister
    }

    #[test]
    fn second_create_while_in_flight_is_ignored() {
        let mut playlister = filled();

        let first = playlister.update(Message::Form(FormMessage::CreatePlaylist));
        assert_eq!(first.units(), 1);
        assert!(playlister.busy);

        let second = playlister.update(Message::Form(FormMessage::CreatePlaylist));
        assert_eq!(second.units(), 0);
    }

    #[test]
    fn add_tracks_while_in_flight_is_ignored() {
        let mut playlister = filled();

        let _ = playlister.update(Message::Form(FormMessage::CreatePlaylist));
        let add = playlister.update(Message::Form(FormMessage::AddTracks));

        assert_eq!(add.units(), 0);
    }

    #[test]
    fn stays_busy_until_result_dialog_is_closed() {
        let mut playlister = filled();

        let _ = playlister.update(Message::Form(FormMessage::AddTracks));
        assert!(playlister.busy);

        let dialog = playlister.update(Message::Finished(Notice::Info {
            title: "Success".into(),
            body: "Added 1 tracks to playlist ID: U".into(),
        }));
        assert_eq!(dialog.units(), 1);
        assert!(playlister.busy);

        let _ = playlister.update(Message::DialogClosed);
        assert!(!playlister.busy);

        let again = playlister.update(Message::Form(FormMessage::AddTracks));
        assert_eq!(again.units(), 1);
    }

    #[test]
    fn validation_error_opens_dialog_and_blocks_buttons() {
        let (mut playlister, _) = Playlister::new();

        let _ = playlister.update(Message::Form(FormMessage::CreatePlaylist));
        assert!(playlister.busy);

        let _ = playlister.update(Message::DialogClosed);
        assert!(!playlister.busy);
    }

    #[test]
    fn edits_reach_the_form() {
        let (mut playlister, _) = Playlister::new();

        let _ = playlister.update(Message::Form(FormMessage::UserIdChanged("U".into())));

        assert_eq!(playlister.form.user_id, "U");
        assert!(!playlister.busy);
    }
}
