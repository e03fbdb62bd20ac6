//! Message handling.
//!
//! All state transitions live here, away from view code, so they can be
//! exercised without a display.

use std::sync::Arc;

use iced::Task;
use tracing::{info, warn};

use showcase_core::featured::FeaturedPick;
use showcase_core::models::WorkRecord;
use showcase_core::showcase::{LaneSpec, ShowcasePlan};

use crate::messages::Message;
use crate::model::{App, FeedState};

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::WorksLoaded(Ok(works)) => {
            info!("works list resolved with {} records", works.len());
            let works: Arc<[WorkRecord]> = works.into();

            // Both showcase sections and the spotlight are derived once
            // from the same resolved value. The plans stay fixed for the
            // rest of the run; only the spotlight re-picks on reload.
            app.rich_plan = ShowcasePlan::build(&works, LaneSpec::rich());
            app.compact_plan = ShowcasePlan::build(
                &works,
                LaneSpec::compact(app.settings.showcase.compact_cap),
            );
            app.featured = FeaturedPick::choose(&works, &app.settings.site);
            app.feed = FeedState::Ready(works);
            Task::none()
        }

        Message::WorksLoaded(Err(error)) => {
            // No partial rendering and no fallback cards; the showcase
            // and spotlight regions simply stay empty.
            warn!("works list unavailable: {}", error);
            app.feed = FeedState::Failed(error);
            Task::none()
        }

        Message::EmbedHostReady => {
            app.embed_ready = true;
            Task::none()
        }

        Message::ReloadFeatured => {
            // Re-pick from the stored feed value; never re-fetch.
            if let FeedState::Ready(works) = &app.feed {
                app.featured = FeaturedPick::choose(works, &app.settings.site);
            }
            Task::none()
        }

        Message::StepLeft => {
            app.carousel.step_left();
            Task::none()
        }

        Message::StepRight => {
            app.carousel.step_right();
            Task::none()
        }

        Message::CopyLink(url) => iced::clipboard::write(url),
    }
}
