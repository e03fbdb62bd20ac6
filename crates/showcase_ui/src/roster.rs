//! The bundled member roster.
//!
//! The carousel runs over a fixed, statically-known roster shipped with
//! the application; it has no network dependency.

use showcase_core::models::MemberRecord;

/// Parse the roster bundled at compile time.
pub fn bundled_roster() -> Vec<MemberRecord> {
    serde_json::from_str(include_str!("../assets/members.json"))
        .expect("bundled member roster is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_roster_parses() {
        let roster = bundled_roster();
        assert!(!roster.is_empty());
        assert!(roster.iter().all(|m| !m.youtube_id.is_empty()));
    }
}
