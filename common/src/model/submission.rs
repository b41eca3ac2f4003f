use serde::{Deserialize, Serialize};

/// One protected upload as the roster query endpoint reports it.
///
/// A `Submission` is created server-side during ingestion; the client only
/// ever observes it, first in the snapshot returned by
/// `GET /dashboard/videos/{user_email}` and later through live notifications.
///
/// `id` is the merge key: no two entries in a user's roster share an `id`,
/// and an authoritative update carrying a known `id` replaces that entry's
/// mutable fields (`flagged`, `active_matches`) in place without moving the
/// entry or touching the immutable ones (`fingerprint`, `created_at`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Server-assigned identifier, stable and unique per user.
    pub id: i64,
    /// Owner of the upload.
    pub user_email: String,
    /// Stored filename as the ingestion service kept it.
    pub filename: String,
    /// Display title, user-editable at upload time.
    pub title: String,
    /// Free-text description; may be empty.
    #[serde(default)]
    pub description: String,
    /// Server-computed content fingerprint, immutable once set. Opaque to
    /// the client.
    pub fingerprint: String,
    /// Whether the matching pipeline currently flags this upload. Mutable in
    /// place as new matches arrive; older backends omit the field entirely.
    #[serde(default)]
    pub flagged: bool,
    /// Matches currently held against this upload's fingerprint. Owned by
    /// the submission; omitted by the endpoint when empty.
    #[serde(default)]
    pub active_matches: Vec<ActiveMatch>,
    /// Creation timestamp, server-formatted. Displayed verbatim.
    pub created_at: String,
}

/// One external candidate match against a submission's fingerprint.
///
/// The similarity score is not normalized to a fixed range by this layer; it
/// is displayed as-is and its `video_url` is the usual input to a rescan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveMatch {
    /// Identifier of the crawled external record that matched.
    pub crawled_video_id: i64,
    /// Source URL the match was crawled from.
    pub video_url: String,
    /// Similarity score, treated opaquely.
    pub similarity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r#"{
            "id": 7,
            "user_email": "a@b.c",
            "filename": "clip.mp4",
            "title": "clip",
            "fingerprint": "abc123",
            "created_at": "2026-01-01T00:00:00Z"
        }"#;
        let sub: Submission = serde_json::from_str(json).unwrap();
        assert!(!sub.flagged);
        assert!(sub.active_matches.is_empty());
        assert_eq!(sub.description, "");
    }

    #[test]
    fn full_record_round_trips() {
        let json = r#"{
            "id": 7,
            "user_email": "a@b.c",
            "filename": "clip.mp4",
            "title": "clip",
            "description": "holiday cut",
            "fingerprint": "abc123",
            "flagged": true,
            "active_matches": [
                { "crawled_video_id": 99, "video_url": "http://pirate.example/v/1", "similarity": 0.93 }
            ],
            "created_at": "2026-01-01T00:00:00Z"
        }"#;
        let sub: Submission = serde_json::from_str(json).unwrap();
        assert!(sub.flagged);
        assert_eq!(sub.active_matches.len(), 1);
        assert_eq!(sub.active_matches[0].crawled_video_id, 99);

        let back: Submission =
            serde_json::from_str(&serde_json::to_string(&sub).unwrap()).unwrap();
        assert_eq!(back, sub);
    }

    #[test]
    fn null_roster_body_is_empty() {
        let parsed: Option<Vec<Submission>> = serde_json::from_str("null").unwrap();
        assert!(parsed.unwrap_or_default().is_empty());
    }
}
