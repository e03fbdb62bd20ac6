//! Application bootstrap.

use std::sync::Arc;

use iced::{Size, Task, Theme};
use tracing::warn;

use showcase_core::config::Settings;
use showcase_core::feed::WorksFeed;

use crate::messages::Message;
use crate::model::App;
use crate::{roster, update, view};

/// Build and run the iced application.
pub fn run(settings: Settings) -> iced::Result {
    let settings = Arc::new(settings);
    let boot_settings = Arc::clone(&settings);

    iced::application(move || boot(&boot_settings), update::update, view::view)
        .title("Works Showcase")
        .theme(|_: &App| Theme::Dark)
        .window(iced::window::Settings {
            size: Size::new(1180.0, 800.0),
            resizable: true,
            ..Default::default()
        })
        .run()
}

/// Initial state plus the boot tasks.
///
/// The works-list retrieval starts here, exactly once per run, whether
/// or not anything is ready to consume it yet. The embed-host readiness
/// signal is also delivered here - explicitly, instead of the global
/// player-API callback the original site relied on.
fn boot(settings: &Settings) -> (App, Task<Message>) {
    let app = App::new(settings.clone(), roster::bundled_roster());

    let fetch = match WorksFeed::new(&settings.site, &settings.feed) {
        Ok(client) => Task::perform(
            async move {
                client.fetch().await.map_err(|error| {
                    warn!("works feed failed: {}", error);
                    error.to_string()
                })
            },
            Message::WorksLoaded,
        ),
        Err(error) => {
            warn!("works feed client unavailable: {}", error);
            Task::done(Message::WorksLoaded(Err(error.to_string())))
        }
    };

    let embed_ready = Task::done(Message::EmbedHostReady);

    (app, Task::batch([fetch, embed_ready]))
}
