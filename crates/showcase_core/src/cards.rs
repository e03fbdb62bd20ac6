//! Card planning for the showcase lanes.
//!
//! A card is the renderable unit for one work. Two variants exist:
//! - `Compact`: carries exactly the record's embed markup, nothing else.
//! - `Rich`: additionally carries the titled on-site link and the link
//!   to the author's member profile.
//!
//! Cards never carry descriptions; only the featured spotlight shows
//! those. Building a card has no side effects.

use crate::config::SiteSettings;
use crate::models::WorkRecord;

/// Which card shape to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    /// Clickable title + author link around the embed.
    Rich,
    /// Embed only, no interactive wrapping.
    Compact,
}

/// A labelled link carried by a rich card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub label: String,
    pub url: String,
}

/// One renderable showcase card.
///
/// The variant is fully expressed by the optional links; compact cards
/// carry `None` for both.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// The record's trusted embed markup, carried verbatim.
    pub embed_html: String,
    /// Titled link to the work's page. `None` for compact cards.
    pub title: Option<CardLink>,
    /// Link to the author's member profile. `None` for compact cards.
    pub author: Option<CardLink>,
}

impl Card {
    /// Build one card from a work record.
    pub fn build(record: &WorkRecord, variant: CardVariant, site: &SiteSettings) -> Card {
        let (title, author) = match variant {
            CardVariant::Compact => (None, None),
            CardVariant::Rich => (
                Some(CardLink {
                    label: record.title.clone(),
                    url: record.on_site_link.clone(),
                }),
                Some(CardLink {
                    label: record.author_displayname.clone(),
                    url: member_profile_url(site, &record.author_link),
                }),
            ),
        };

        Card {
            embed_html: record.embed_html.clone(),
            title,
            author,
        }
    }
}

/// Derive the member profile URL from a record's `author_link`.
///
/// The feed has published both shapes over time: a pre-built profile URL
/// (absolute, or a site-relative `.html` path) and a bare member
/// identifier. URLs pass through, site-relative paths are resolved
/// against the site base, and bare identifiers are interpolated into the
/// profile path.
pub fn member_profile_url(site: &SiteSettings, author_link: &str) -> String {
    if author_link.contains("://") {
        return author_link.to_string();
    }
    let base = site.base_url.trim_end_matches('/');
    if author_link.ends_with(".html") {
        return format!("{}/{}", base, author_link.trim_start_matches('/'));
    }
    format!("{}/members/{}.html", base, author_link)
}

/// Resolve a site-relative link to an absolute URL.
pub fn resolve_site_url(site: &SiteSettings, link: &str) -> String {
    if link.contains("://") {
        return link.to_string();
    }
    format!(
        "{}/{}",
        site.base_url.trim_end_matches('/'),
        link.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> WorkRecord {
        WorkRecord {
            id: 0,
            title: "T".to_string(),
            description: None,
            on_site_link: "/w/1".to_string(),
            author_displayname: "A".to_string(),
            author_link: "a1".to_string(),
            embed_html: "<iframe></iframe>".to_string(),
            collaborators: vec![],
            remix_original_work: None,
        }
    }

    fn site() -> SiteSettings {
        SiteSettings {
            base_url: "https://utvpc.club".to_string(),
        }
    }

    #[test]
    fn rich_card_links_title_and_author() {
        let card = Card::build(&make_record(), CardVariant::Rich, &site());

        let title = card.title.unwrap();
        assert_eq!(title.label, "T");
        assert_eq!(title.url, "/w/1");

        let author = card.author.unwrap();
        assert_eq!(author.label, "A");
        assert_eq!(author.url, "https://utvpc.club/members/a1.html");
    }

    #[test]
    fn compact_card_is_embed_only() {
        let card = Card::build(&make_record(), CardVariant::Compact, &site());
        assert_eq!(card.embed_html, "<iframe></iframe>");
        assert!(card.title.is_none());
        assert!(card.author.is_none());
    }

    #[test]
    fn profile_url_interpolates_bare_identifier() {
        assert_eq!(
            member_profile_url(&site(), "a1"),
            "https://utvpc.club/members/a1.html"
        );
    }

    #[test]
    fn profile_url_passes_through_prebuilt_shapes() {
        assert_eq!(
            member_profile_url(&site(), "https://elsewhere.example/m/a1"),
            "https://elsewhere.example/m/a1"
        );
        assert_eq!(
            member_profile_url(&site(), "/members/mimori.html"),
            "https://utvpc.club/members/mimori.html"
        );
    }

    #[test]
    fn resolve_site_url_handles_relative_links() {
        assert_eq!(
            resolve_site_url(&site(), "/w/1"),
            "https://utvpc.club/w/1"
        );
        assert_eq!(
            resolve_site_url(&site(), "https://youtu.be/x"),
            "https://youtu.be/x"
        );
    }
}
