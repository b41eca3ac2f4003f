use yew::prelude::*;

/// Properties for the roster dashboard.
#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Resolved identity of the caller. With `None` the dashboard is a
    /// terminal no-op: empty roster, not loading, no network, no channel.
    /// A change of value restarts the whole activation sequence.
    #[prop_or_default]
    pub user_email: Option<String>,
}
