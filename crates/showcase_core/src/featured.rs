//! Featured-work spotlight picker.
//!
//! Each pick selects one work uniformly at random from the resolved feed
//! and recomputes every display field from scratch; nothing about prior
//! picks is kept, so repeats are allowed. Reloading re-picks from the
//! stored feed value and issues no network request.

use rand::Rng;
use tracing::warn;

use crate::cards::member_profile_url;
use crate::config::SiteSettings;
use crate::models::WorkRecord;

/// The fields the spotlight region renders for one featured work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedPick {
    pub title: String,
    /// Link target of the title.
    pub work_url: String,
    pub author_name: String,
    /// Derived member-profile URL.
    pub author_url: String,
    /// Only rendered when the record actually has one.
    pub description: Option<String>,
    pub embed_html: String,
}

impl FeaturedPick {
    /// Pick one work uniformly at random.
    ///
    /// An empty feed yields `None`: the spotlight renders nothing. The
    /// original site left this case undefined; rendering nothing is the
    /// defined policy here.
    pub fn choose_with<R: Rng + ?Sized>(
        rng: &mut R,
        works: &[WorkRecord],
        site: &SiteSettings,
    ) -> Option<FeaturedPick> {
        if works.is_empty() {
            warn!("works list is empty, nothing to feature");
            return None;
        }
        let index = rng.random_range(0..works.len());
        Some(Self::from_record(&works[index], site))
    }

    /// `choose_with` using the thread RNG.
    pub fn choose(works: &[WorkRecord], site: &SiteSettings) -> Option<FeaturedPick> {
        Self::choose_with(&mut rand::rng(), works, site)
    }

    fn from_record(record: &WorkRecord, site: &SiteSettings) -> FeaturedPick {
        FeaturedPick {
            title: record.title.clone(),
            work_url: record.on_site_link.clone(),
            author_name: record.author_displayname.clone(),
            author_url: member_profile_url(site, &record.author_link),
            description: record.description.clone(),
            embed_html: record.embed_html.clone(),
        }
    }
}
