use common::model::submission::Submission;

/// Async settlements carry the activation session that spawned them; the
/// component drops any settlement whose session is no longer current, so a
/// slow response from a previous identity can never land in a later one.
#[derive(Clone)]
pub enum Msg {
    SearchChanged(String),
    Select(i64),
    ClearSelection,
    /// Snapshot fetch settled: the authoritative roster in endpoint order,
    /// or the human-readable error to record.
    SnapshotSettled(u64, Result<Vec<Submission>, String>),
    /// One inbound live event; the payload is opaque text for display.
    ChannelEvent(u64, String),
    /// The live channel faulted. Degrades this session to snapshot-only.
    ChannelFaulted(u64),
    /// Rescan requested for a match's source URL from the detail panel.
    Rescan(String),
}
