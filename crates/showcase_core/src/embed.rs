//! Classification of trusted embed markup fragments.
//!
//! The site generator emits three markup families for a work's embed:
//! a player iframe (YouTube / NicoDouga), a plain image, or an audio
//! figure. The desktop shell cannot host the markup directly, so this
//! module extracts the source URL to drive an embed stand-in. The
//! fragment itself is never rewritten.

/// The source behind a work's embed markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedSource {
    /// A player iframe; the contained URL is the player page.
    Frame(String),
    /// A cover or still image.
    Image(String),
    /// An audio file with a download link.
    Audio(String),
    /// Markup this shell has no stand-in for (tweets, oEmbed blobs).
    Unknown,
}

impl EmbedSource {
    /// Inspect a markup fragment and classify its embed source.
    pub fn classify(fragment: &str) -> EmbedSource {
        if let Some(url) = tag_attr(fragment, "<iframe", "src") {
            return EmbedSource::Frame(url);
        }
        if let Some(url) = tag_attr(fragment, "<audio", "src") {
            return EmbedSource::Audio(url);
        }
        // The generator writes images with `href` rather than `src`;
        // accept both spellings.
        if let Some(url) =
            tag_attr(fragment, "<img", "src").or_else(|| tag_attr(fragment, "<img", "href"))
        {
            return EmbedSource::Image(url);
        }
        EmbedSource::Unknown
    }

    /// The extracted URL, when one exists.
    pub fn url(&self) -> Option<&str> {
        match self {
            EmbedSource::Frame(url) | EmbedSource::Image(url) | EmbedSource::Audio(url) => {
                Some(url)
            }
            EmbedSource::Unknown => None,
        }
    }
}

/// Find `attr="…"` inside the first occurrence of `tag` in `fragment`.
///
/// The attribute name must be whole: a preceding non-whitespace character
/// (as in `data-src`) does not match `src`.
fn tag_attr(fragment: &str, tag: &str, attr: &str) -> Option<String> {
    let start = fragment.find(tag)?;
    let tag_body = &fragment[start..];
    let end = tag_body.find('>').unwrap_or(tag_body.len());
    let tag_body = &tag_body[..end];

    let needle = format!("{}=\"", attr);
    let mut from = 0;
    while let Some(pos) = tag_body[from..].find(&needle) {
        let at = from + pos;
        let starts_attr = tag_body[..at]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        if starts_attr {
            let value = &tag_body[at + needle.len()..];
            let value_end = value.find('"')?;
            return Some(value[..value_end].to_string());
        }
        from = at + needle.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_youtube_iframe() {
        let fragment = r#"<div class="youtube-embed-container"><iframe src="https://www.youtube.com/embed/abc123" title="Youtube Video Player" height="360" width="640"></iframe></div>"#;
        assert_eq!(
            EmbedSource::classify(fragment),
            EmbedSource::Frame("https://www.youtube.com/embed/abc123".to_string())
        );
    }

    #[test]
    fn classifies_audio_figure() {
        let fragment = r#"<figure><audio controls src="/uploads/song.mp3"></audio><a href="/uploads/song.mp3">DL</a></figure>"#;
        assert_eq!(
            EmbedSource::classify(fragment),
            EmbedSource::Audio("/uploads/song.mp3".to_string())
        );
    }

    #[test]
    fn classifies_generator_image_spelling() {
        // The generator emits `img href=…`.
        let fragment = r#"<img href="/covers/a.jpg" alt="cover">"#;
        assert_eq!(
            EmbedSource::classify(fragment),
            EmbedSource::Image("/covers/a.jpg".to_string())
        );
    }

    #[test]
    fn data_attributes_are_not_sources() {
        let lazy = r#"<iframe data-src="https://example.com/x"></iframe>"#;
        assert_eq!(EmbedSource::classify(lazy), EmbedSource::Unknown);

        let both = r#"<iframe data-src="https://example.com/x" src="https://example.com/y"></iframe>"#;
        assert_eq!(
            EmbedSource::classify(both),
            EmbedSource::Frame("https://example.com/y".to_string())
        );
    }

    #[test]
    fn unknown_markup_has_no_url() {
        let source = EmbedSource::classify(r#"<blockquote class="twitter-tweet"></blockquote>"#);
        assert_eq!(source, EmbedSource::Unknown);
        assert_eq!(source.url(), None);
    }
}
