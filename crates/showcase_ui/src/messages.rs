//! Application messages (events).

use showcase_core::models::WorkRecord;

/// Everything the shell can react to.
#[derive(Debug, Clone)]
pub enum Message {
    /// The one-shot works-list retrieval finished.
    ///
    /// The structured `FeedError` is logged where it occurs; the message
    /// carries the display string.
    WorksLoaded(Result<Vec<WorkRecord>, String>),

    /// The embedding host is ready to show embed stand-ins.
    /// Delivered exactly once during boot.
    EmbedHostReady,

    /// Reload button clicked: re-pick the featured work.
    ReloadFeatured,

    /// Member carousel arrows.
    StepLeft,
    StepRight,

    /// Copy a card or spotlight link to the clipboard.
    CopyLink(String),
}
