//! Dual-lane showcase planning.
//!
//! A `ShowcasePlan` fixes the shuffled (and optionally capped) record
//! order for one application run. The shell renders the plan into two
//! parallel lanes to create the seamless-loop effect; both lanes follow
//! the same plan, but each lane builds its own fresh card instances.
//! The plan is never mutated after creation - a featured-work reload
//! does not touch it.

use rand::Rng;

use crate::cards::{Card, CardVariant};
use crate::config::SiteSettings;
use crate::models::WorkRecord;
use crate::shuffle::shuffled_with;

/// Default card cap for the compact preview strip.
pub const MAX_COMPACT_CARDS: usize = 8;

/// How one showcase section presents its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneSpec {
    pub variant: CardVariant,
    /// Maximum cards per lane; `None` renders the whole shuffled list.
    pub cap: Option<usize>,
}

impl LaneSpec {
    /// The main showcase: rich cards, uncapped.
    pub fn rich() -> Self {
        Self {
            variant: CardVariant::Rich,
            cap: None,
        }
    }

    /// The preview strip: compact cards, capped.
    pub fn compact(cap: usize) -> Self {
        Self {
            variant: CardVariant::Compact,
            cap: Some(cap),
        }
    }
}

/// The fixed card order for one showcase section.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcasePlan {
    records: Vec<WorkRecord>,
    variant: CardVariant,
}

impl ShowcasePlan {
    /// Shuffle the record sequence and apply the lane cap.
    pub fn build_with<R: Rng + ?Sized>(
        rng: &mut R,
        records: &[WorkRecord],
        spec: LaneSpec,
    ) -> ShowcasePlan {
        let mut shuffled = shuffled_with(rng, records);
        if let Some(cap) = spec.cap {
            shuffled.truncate(cap);
        }
        ShowcasePlan {
            records: shuffled,
            variant: spec.variant,
        }
    }

    /// `build_with` using the thread RNG.
    pub fn build(records: &[WorkRecord], spec: LaneSpec) -> ShowcasePlan {
        Self::build_with(&mut rand::rng(), records, spec)
    }

    /// An empty plan; what a failed feed leaves behind.
    pub fn empty(variant: CardVariant) -> ShowcasePlan {
        ShowcasePlan {
            records: Vec::new(),
            variant,
        }
    }

    /// The planned record order.
    pub fn records(&self) -> &[WorkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build the card sequence for one lane.
    ///
    /// Each call produces fresh card instances in plan order, so the two
    /// lanes share record order but never share units.
    pub fn lane_cards(&self, site: &SiteSettings) -> Vec<Card> {
        self.records
            .iter()
            .map(|record| Card::build(record, self.variant, site))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_records(n: usize) -> Vec<WorkRecord> {
        (0..n)
            .map(|i| WorkRecord {
                id: i as i32,
                title: format!("work {}", i),
                description: None,
                on_site_link: format!("/w/{}", i),
                author_displayname: "A".to_string(),
                author_link: "a".to_string(),
                embed_html: "<iframe></iframe>".to_string(),
                collaborators: vec![],
                remix_original_work: None,
            })
            .collect()
    }

    fn site() -> SiteSettings {
        SiteSettings::default()
    }

    #[test]
    fn both_lanes_share_length_and_order() {
        let records = make_records(12);
        let mut rng = StdRng::seed_from_u64(3);
        let plan = ShowcasePlan::build_with(&mut rng, &records, LaneSpec::rich());

        let lane_a = plan.lane_cards(&site());
        let lane_b = plan.lane_cards(&site());

        assert_eq!(lane_a.len(), lane_b.len());
        assert_eq!(lane_a, lane_b);
    }

    #[test]
    fn plan_is_a_permutation_of_the_feed() {
        let records = make_records(12);
        let mut rng = StdRng::seed_from_u64(3);
        let plan = ShowcasePlan::build_with(&mut rng, &records, LaneSpec::rich());

        let mut planned: Vec<i32> = plan.records().iter().map(|r| r.id).collect();
        planned.sort_unstable();
        assert_eq!(planned, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn compact_spec_caps_long_feeds() {
        let records = make_records(20);
        let mut rng = StdRng::seed_from_u64(9);
        let plan =
            ShowcasePlan::build_with(&mut rng, &records, LaneSpec::compact(MAX_COMPACT_CARDS));

        assert_eq!(plan.len(), 8);
        assert_eq!(plan.lane_cards(&site()).len(), 8);
    }

    #[test]
    fn compact_spec_passes_short_feeds_whole() {
        let records = make_records(5);
        let mut rng = StdRng::seed_from_u64(9);
        let plan =
            ShowcasePlan::build_with(&mut rng, &records, LaneSpec::compact(MAX_COMPACT_CARDS));

        assert_eq!(plan.len(), 5);
    }

    #[test]
    fn rich_spec_is_uncapped() {
        let records = make_records(40);
        let plan = ShowcasePlan::build(&records, LaneSpec::rich());
        assert_eq!(plan.len(), 40);
    }

    #[test]
    fn compact_cards_carry_no_links() {
        let records = make_records(3);
        let plan = ShowcasePlan::build(&records, LaneSpec::compact(MAX_COMPACT_CARDS));
        for card in plan.lane_cards(&site()) {
            assert!(card.title.is_none());
            assert!(card.author.is_none());
        }
    }
}
