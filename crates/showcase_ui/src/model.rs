//! Application state model.

use std::sync::Arc;

use showcase_core::carousel::Carousel;
use showcase_core::cards::CardVariant;
use showcase_core::config::Settings;
use showcase_core::featured::FeaturedPick;
use showcase_core::models::{MemberRecord, WorkRecord};
use showcase_core::showcase::ShowcasePlan;

/// Lifecycle of the one-shot works-list retrieval.
#[derive(Debug, Clone)]
pub enum FeedState {
    /// The boot task is still in flight.
    Loading,
    /// The resolved works list, shared read-only by every consumer.
    Ready(Arc<[WorkRecord]>),
    /// The retrieval failed; the showcase stays empty, no retry.
    Failed(String),
}

/// Top-level application state.
#[derive(Debug)]
pub struct App {
    pub settings: Settings,
    pub feed: FeedState,

    /// Explicit embed-host readiness signal, delivered once from boot.
    pub embed_ready: bool,

    /// Shuffled order for the main showcase (rich cards, uncapped).
    pub rich_plan: ShowcasePlan,
    /// Shuffled order for the preview strip (compact cards, capped).
    pub compact_plan: ShowcasePlan,

    /// The work currently in the spotlight.
    pub featured: Option<FeaturedPick>,

    /// Fixed member roster driving the carousel.
    pub roster: Vec<MemberRecord>,
    pub carousel: Carousel,
}

impl App {
    pub fn new(settings: Settings, roster: Vec<MemberRecord>) -> Self {
        let carousel = Carousel::new(roster.len());
        Self {
            settings,
            feed: FeedState::Loading,
            embed_ready: false,
            rich_plan: ShowcasePlan::empty(CardVariant::Rich),
            compact_plan: ShowcasePlan::empty(CardVariant::Compact),
            featured: None,
            roster,
            carousel,
        }
    }

    /// Embed stand-ins render only once the host has signalled
    /// readiness and the feed has resolved.
    pub fn embeds_active(&self) -> bool {
        self.embed_ready && matches!(self.feed, FeedState::Ready(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_model_is_empty_and_loading() {
        let app = App::new(Settings::default(), Vec::new());
        assert!(matches!(app.feed, FeedState::Loading));
        assert!(app.rich_plan.is_empty());
        assert!(app.compact_plan.is_empty());
        assert!(app.featured.is_none());
        assert!(!app.embeds_active());
    }

    #[test]
    fn carousel_sized_from_roster() {
        let roster = vec![
            MemberRecord {
                title: "t".into(),
                youtube_id: "y".into(),
                creator: "c".into(),
                description: "d".into(),
            };
            5
        ];
        let app = App::new(Settings::default(), roster);
        assert_eq!(app.carousel.member_count(), 5);
        assert_eq!(app.carousel.last_page(), 2);
    }
}
