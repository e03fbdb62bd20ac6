//! Data models shared across the showcase.
//!
//! `WorkRecord` mirrors one entry of the site's `works_list.json` feed;
//! `MemberRecord` is one entry of the bundled member roster. Both are
//! read-only after load - nothing in this crate mutates them.

use serde::{Deserialize, Serialize};

/// One showcased creative work, as published by the works-list feed.
///
/// Records are immutable for the lifetime of one application run.
/// Consumers receive shared read-only views and never mutate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// Feed-assigned position id. Unused by the showcase logic.
    #[serde(default)]
    pub id: i32,
    pub title: String,
    /// Short blurb; null or absent in the feed for many works.
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the work's page on the club site.
    pub on_site_link: String,
    pub author_displayname: String,
    /// Either a bare member identifier or a pre-built profile URL,
    /// depending on the feed generation. See `cards::member_profile_url`.
    pub author_link: String,
    /// Trusted markup fragment produced by the site generator
    /// (iframe embed, image, or audio figure).
    pub embed_html: String,
    #[serde(default)]
    pub collaborators: Vec<String>,
    #[serde(default)]
    pub remix_original_work: Option<String>,
}

/// One entry of the fixed member roster shown by the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub title: String,
    #[serde(rename = "youtubeId")]
    pub youtube_id: String,
    pub creator: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_record_decodes_feed_shape() {
        let json = r#"{
            "id": 3,
            "title": "夜の歌",
            "description": null,
            "on_site_link": "/works/releases/yoru.html",
            "author_displayname": "三森",
            "author_link": "/members/mimori.html",
            "embed_html": "<div class=\"youtube-embed-container\"><iframe src=\"https://www.youtube.com/embed/abc\"></iframe></div>"
        }"#;
        let record: WorkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "夜の歌");
        assert_eq!(record.description, None);
        assert!(record.collaborators.is_empty());
    }

    #[test]
    fn work_record_tolerates_unknown_fields() {
        let json = r#"{
            "title": "T",
            "on_site_link": "/w/1",
            "author_displayname": "A",
            "author_link": "a1",
            "embed_html": "<iframe></iframe>",
            "something_new": true
        }"#;
        let record: WorkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 0);
        assert_eq!(record.author_link, "a1");
    }

    #[test]
    fn member_record_uses_feed_casing() {
        let json = r#"{
            "title": "初投稿曲",
            "youtubeId": "dQw4w9WgXcQ",
            "creator": "mimori",
            "description": "デビュー作"
        }"#;
        let member: MemberRecord = serde_json::from_str(json).unwrap();
        assert_eq!(member.youtube_id, "dQw4w9WgXcQ");
    }
}
