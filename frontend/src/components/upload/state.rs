//! Draft state for the upload controller.
//!
//! The draft is ephemeral: it lives only between payload selection and the
//! terminal outcome of the one submission request, and every terminal
//! transition clears it completely.

use regex::Regex;

/// Lifecycle phase of the current draft.
///
/// `Ready` requires a selected payload; `Submitting` means the single
/// ingestion request is in flight and further submits are rejected until it
/// settles.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DraftPhase {
    Idle,
    Ready,
    Submitting,
}

/// Outcome of the last settled submission, rendered inline under the form.
#[derive(Clone, PartialEq)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

pub struct UploadComponent {
    /// Selected binary payload; present only between selection and the
    /// terminal transition.
    pub file: Option<web_sys::File>,
    /// Display title. Seeded from the payload filename on every selection,
    /// freely editable afterwards.
    pub title: String,
    /// Free-text description, defaults empty.
    pub description: String,
    pub phase: DraftPhase,
    pub outcome: Option<Outcome>,
}

impl UploadComponent {
    pub fn new() -> Self {
        Self {
            file: None,
            title: String::new(),
            description: String::new(),
            phase: DraftPhase::Idle,
            outcome: None,
        }
    }

    /// Whether a submit may proceed right now. False while `Submitting`, so
    /// a second confirmation mid-flight is rejected.
    pub fn can_submit(&self) -> bool {
        self.phase == DraftPhase::Ready && self.file.is_some()
    }

    /// Seeds the title from a freshly selected payload. The policy is
    /// re-seed on every selection: prior user edits do not survive picking
    /// another file.
    pub fn seed_title(&mut self, filename: &str) {
        self.title = derive_title(filename);
    }

    /// Terminal transition: record the outcome and return to a blank draft.
    /// Runs unconditionally for success and failure alike.
    pub fn settle(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.file = None;
        self.title.clear();
        self.description.clear();
        self.phase = DraftPhase::Idle;
    }
}

/// Strips the final extension from a filename to produce the title seed.
pub fn derive_title(filename: &str) -> String {
    let re = Regex::new(r"\.[^./]+$").unwrap();
    re.replace(filename, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_filename_without_extension() {
        assert_eq!(derive_title("clip.mp4"), "clip");
        assert_eq!(derive_title("archive.tar.gz"), "archive.tar");
        assert_eq!(derive_title("no_extension"), "no_extension");
        // A dotfile is all extension; the seed is empty and the user types
        // a title themselves.
        assert_eq!(derive_title(".hidden"), "");
    }

    #[test]
    fn selection_reseeds_over_user_edits() {
        let mut draft = UploadComponent::new();
        draft.seed_title("clip.mp4");
        assert_eq!(draft.title, "clip");

        draft.title = "My edited title".to_string();
        draft.seed_title("other.mov");
        assert_eq!(draft.title, "other");
    }

    #[test]
    fn terminal_transition_clears_the_draft() {
        for success in [true, false] {
            let mut draft = UploadComponent::new();
            draft.seed_title("clip.mp4");
            draft.description = "mine".to_string();
            draft.phase = DraftPhase::Submitting;

            draft.settle(Outcome {
                success,
                message: "done".to_string(),
            });

            assert!(draft.file.is_none());
            assert!(draft.title.is_empty());
            assert!(draft.description.is_empty());
            assert_eq!(draft.phase, DraftPhase::Idle);
            assert!(draft.outcome.is_some());
        }
    }

    #[test]
    fn submit_guard_rejects_idle_and_in_flight() {
        let mut draft = UploadComponent::new();
        assert!(!draft.can_submit());

        draft.phase = DraftPhase::Submitting;
        assert!(!draft.can_submit());

        // Ready without a payload is still not submittable.
        draft.phase = DraftPhase::Ready;
        assert!(!draft.can_submit());
    }
}
