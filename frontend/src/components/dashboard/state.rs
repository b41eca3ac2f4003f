//! Roster state for the dashboard.
//!
//! `RosterState` holds everything the view derives from: the ordered roster
//! as the endpoint returned it, the search term, the selection, and the
//! loading/error/live flags. It touches no DOM and no network, so every
//! roster rule lives here as a plain testable method. The component struct
//! below pairs it with the live channel handle, which is the only
//! non-host-testable piece.

use common::model::submission::Submission;

use super::channel::LiveChannel;

/// In-memory projection of the caller's known submissions.
pub struct RosterState {
    /// Roster entries in endpoint order. The client imposes no ordering of
    /// its own; `id` is the merge key.
    pub entries: Vec<Submission>,
    /// Current search term; the filtered view is derived on demand.
    pub search_term: String,
    /// Selection is an identifier reference, never a value snapshot. It is
    /// re-resolved against `entries` at read time.
    pub selected_id: Option<i64>,
    /// True only while the snapshot fetch is outstanding.
    pub loading: bool,
    /// Human-readable error from the last snapshot fetch, if it failed.
    pub error: Option<String>,
    /// True while the live channel is open. Events observed while this is
    /// false are discarded, which covers teardown races.
    pub live: bool,
}

impl RosterState {
    pub fn new(loading: bool) -> Self {
        Self {
            entries: Vec::new(),
            search_term: String::new(),
            selected_id: None,
            loading,
            error: None,
            live: false,
        }
    }

    /// No-identity activation: empty roster, not loading, nothing pending.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.selected_id = None;
        self.loading = false;
        self.error = None;
        self.live = false;
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Wholesale replacement with the authoritative snapshot.
    pub fn load_succeeded(&mut self, entries: Vec<Submission>) {
        self.entries = entries;
        self.error = None;
        self.loading = false;
    }

    pub fn load_failed(&mut self, error: String) {
        self.entries.clear();
        self.error = Some(error);
        self.loading = false;
    }

    /// Applies one authoritative update, merging by identifier.
    ///
    /// A known id replaces that entry's mutable fields (`flagged`,
    /// `active_matches`) in place: position, `fingerprint`, and `created_at`
    /// are left untouched. An unknown id appends.
    pub fn apply_update(&mut self, update: Submission) {
        match self.entries.iter_mut().find(|e| e.id == update.id) {
            Some(entry) => {
                entry.flagged = update.flagged;
                entry.active_matches = update.active_matches;
            }
            None => self.entries.push(update),
        }
    }

    /// Derived filtered view: entries whose title contains the search term
    /// as a case-insensitive substring. Pure and non-mutating.
    pub fn filtered(&self) -> Vec<&Submission> {
        let needle = self.search_term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Resolves the selected identifier against the current roster. Returns
    /// `None` when nothing is selected or the id is no longer known.
    pub fn selected(&self) -> Option<&Submission> {
        let id = self.selected_id?;
        self.entries.iter().find(|e| e.id == id)
    }
}

/// The dashboard component: roster state plus the live channel handle.
pub struct DashboardComponent {
    pub roster: RosterState,
    pub channel: Option<LiveChannel>,
    /// Activation session counter. Every activation bumps it, and every
    /// async settlement (snapshot, live event, channel fault) carries the
    /// session that spawned it; stale sessions are dropped on arrival.
    pub session: u64,
}

impl DashboardComponent {
    pub fn new(loading: bool) -> Self {
        Self {
            roster: RosterState::new(loading),
            channel: None,
            session: 0,
        }
    }

    /// Closes the live channel if one is open. Idempotent; also flips the
    /// roster to non-live first so in-flight events get discarded.
    pub fn close_channel(&mut self) {
        self.roster.live = false;
        if let Some(mut channel) = self.channel.take() {
            channel.close();
        }
    }

    /// Whether a settlement tagged with `session` belongs to the current
    /// activation.
    pub fn accepts(&self, session: u64) -> bool {
        self.session == session
    }

    /// Applies a snapshot settlement, unless it was spawned by an earlier
    /// activation: a slow response for a previous identity must not replace
    /// the current identity's roster. Returns whether anything was applied.
    pub fn settle_snapshot(
        &mut self,
        session: u64,
        result: Result<Vec<Submission>, String>,
    ) -> bool {
        if !self.accepts(session) {
            return false;
        }
        match result {
            Ok(entries) => self.roster.load_succeeded(entries),
            Err(error) => self.roster.load_failed(error),
        }
        true
    }

    /// Whether a live event tagged with `session` may surface as a notice.
    /// Events from an earlier activation, and events observed after the
    /// channel closed, are discarded.
    pub fn surface_event(&self, session: u64) -> bool {
        self.accepts(session) && self.roster.live
    }

    /// Handles a channel fault for `session`: the current session degrades
    /// to snapshot-only, a stale session's fault is ignored.
    pub fn channel_faulted(&mut self, session: u64) {
        if self.accepts(session) {
            self.close_channel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(id: i64, title: &str, flagged: bool) -> Submission {
        Submission {
            id,
            user_email: "a@b.c".to_string(),
            filename: format!("{}.mp4", title),
            title: title.to_string(),
            description: String::new(),
            fingerprint: format!("fp-{}", id),
            flagged,
            active_matches: Vec::new(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn no_identity_activation_is_a_no_op_state() {
        let mut roster = RosterState::new(true);
        roster.reset();
        assert!(!roster.loading);
        assert!(roster.entries.is_empty());
        assert!(roster.error.is_none());
        assert!(!roster.live);
    }

    #[test]
    fn merge_by_identifier_updates_in_place() {
        let mut roster = RosterState::new(false);
        roster.load_succeeded(vec![submission(1, "first", false), submission(2, "second", false)]);

        let mut update = submission(1, "first", true);
        update.active_matches.push(common::model::submission::ActiveMatch {
            crawled_video_id: 9,
            video_url: "https://pirate.example/v/9".to_string(),
            similarity: 0.8,
        });
        // Immutable fields of an update must not leak into the entry.
        update.fingerprint = "fp-other".to_string();
        roster.apply_update(update);

        assert_eq!(roster.entries.len(), 2);
        assert_eq!(roster.entries[0].id, 1);
        assert!(roster.entries[0].flagged);
        assert_eq!(roster.entries[0].active_matches.len(), 1);
        assert_eq!(roster.entries[0].fingerprint, "fp-1");
        assert_eq!(roster.entries[1].id, 2);
        assert!(!roster.entries[1].flagged);
    }

    #[test]
    fn unknown_identifier_appends() {
        let mut roster = RosterState::new(false);
        roster.load_succeeded(vec![submission(1, "first", false)]);
        roster.apply_update(submission(3, "third", false));
        assert_eq!(roster.entries.len(), 2);
        assert_eq!(roster.entries[1].id, 3);
    }

    #[test]
    fn filtering_is_pure_and_case_insensitive() {
        let mut roster = RosterState::new(false);
        roster.load_succeeded(vec![
            submission(1, "Holiday Reel", false),
            submission(2, "concert", false),
        ]);
        roster.search_term = "REEL".to_string();

        let first = roster.filtered();
        let second = roster.filtered();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, 1);
        assert_eq!(
            first.iter().map(|e| e.id).collect::<Vec<_>>(),
            second.iter().map(|e| e.id).collect::<Vec<_>>()
        );
        // The underlying roster is untouched.
        assert_eq!(roster.entries.len(), 2);
    }

    #[test]
    fn empty_search_term_matches_everything() {
        let mut roster = RosterState::new(false);
        roster.load_succeeded(vec![submission(1, "a", false), submission(2, "b", false)]);
        assert_eq!(roster.filtered().len(), 2);
    }

    #[test]
    fn selection_tracks_the_latest_entry_data() {
        let mut roster = RosterState::new(false);
        roster.load_succeeded(vec![submission(1, "first", false)]);
        roster.selected_id = Some(1);

        roster.apply_update(submission(1, "first", true));
        let selected = roster.selected().unwrap();
        assert!(selected.flagged);

        // A selection pointing at a vanished id resolves to nothing.
        roster.load_succeeded(vec![submission(2, "second", false)]);
        assert!(roster.selected().is_none());
    }

    #[test]
    fn snapshot_failure_leaves_empty_roster_with_error() {
        let mut roster = RosterState::new(false);
        roster.load_succeeded(vec![submission(1, "first", false)]);
        roster.begin_load();
        roster.load_failed("Failed to fetch your uploads.".to_string());
        assert!(roster.entries.is_empty());
        assert!(!roster.loading);
        assert_eq!(roster.error.as_deref(), Some("Failed to fetch your uploads."));
    }

    #[test]
    fn stale_snapshot_cannot_replace_a_later_sessions_roster() {
        let mut component = DashboardComponent::new(true);
        // First activation: a slow fetch for the old identity is in flight.
        component.session = 1;
        // Identity switch re-activates before the old fetch settles.
        component.session = 2;

        assert!(component.settle_snapshot(2, Ok(vec![submission(20, "mine", false)])));
        // The old identity's response lands last and must be dropped.
        assert!(!component.settle_snapshot(1, Ok(vec![submission(10, "theirs", false)])));

        assert_eq!(component.roster.entries.len(), 1);
        assert_eq!(component.roster.entries[0].id, 20);
    }

    #[test]
    fn stale_snapshot_failure_is_dropped_too() {
        let mut component = DashboardComponent::new(true);
        component.session = 2;
        assert!(component.settle_snapshot(2, Ok(vec![submission(20, "mine", false)])));
        assert!(!component.settle_snapshot(1, Err("old failure".to_string())));
        assert!(component.roster.error.is_none());
        assert_eq!(component.roster.entries.len(), 1);
    }

    #[test]
    fn events_surface_only_for_the_live_current_session() {
        let mut component = DashboardComponent::new(false);
        component.session = 2;
        component.roster.live = true;

        assert!(component.surface_event(2));
        // Queued event from a channel the previous activation already closed.
        assert!(!component.surface_event(1));

        // Teardown: nothing surfaces afterwards, current session included.
        component.close_channel();
        assert!(!component.surface_event(2));
    }

    #[test]
    fn stale_channel_fault_does_not_kill_the_current_channel() {
        let mut component = DashboardComponent::new(false);
        component.session = 2;
        component.roster.live = true;

        component.channel_faulted(1);
        assert!(component.roster.live);

        component.channel_faulted(2);
        assert!(!component.roster.live);
    }
}
