//! Update logic and activation sequence for the roster dashboard.
//!
//! `activate` runs the sequence from the component lifecycle: close any
//! previous channel first (the close-before-reopen invariant), then either
//! settle into the no-identity no-op state or start the snapshot fetch and
//! open the live channel. The two are deliberately not ordered against each
//! other: events are opaque notices, not deltas that would need ordering
//! with respect to the snapshot.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::submission::Submission;

use crate::components::rescan::submit_rescan;
use crate::notify::{show_notice, NoticeKind};

use super::channel::LiveChannel;
use super::messages::Msg;
use super::state::DashboardComponent;

const SNAPSHOT_FAILURE: &str = "Failed to fetch your uploads.";

pub fn activate(component: &mut DashboardComponent, ctx: &Context<DashboardComponent>) {
    component.close_channel();
    // Everything spawned below is tagged with this activation's session;
    // settlements from earlier activations get dropped on arrival.
    component.session = component.session.wrapping_add(1);
    let session = component.session;

    let Some(email) = ctx.props().user_email.clone() else {
        component.roster.reset();
        return;
    };

    component.roster.begin_load();

    let link = ctx.link().clone();
    {
        // Email is appended verbatim; the endpoint expects it unencoded.
        let url = format!("/dashboard/videos/{}", email);
        spawn_local(async move {
            let result = match Request::get(&url).send().await {
                Ok(resp) if resp.ok() => {
                    // The endpoint may answer `null` instead of `[]`.
                    match resp.json::<Option<Vec<Submission>>>().await {
                        Ok(list) => Ok(list.unwrap_or_default()),
                        Err(err) => {
                            error!("roster snapshot malformed:", err.to_string());
                            Err(SNAPSHOT_FAILURE.to_string())
                        }
                    }
                }
                Ok(resp) => {
                    error!("roster snapshot rejected with status", resp.status());
                    Err(SNAPSHOT_FAILURE.to_string())
                }
                Err(err) => {
                    error!("roster snapshot transport error:", err.to_string());
                    Err(SNAPSHOT_FAILURE.to_string())
                }
            };
            link.send_message(Msg::SnapshotSettled(session, result));
        });
    }

    // Opened regardless of how the snapshot fetch ends. A failed open just
    // leaves the session snapshot-only.
    if let Ok(channel) = LiveChannel::open(&email, session, ctx.link()) {
        component.roster.live = true;
        component.channel = Some(channel);
    }
}

pub fn update(
    component: &mut DashboardComponent,
    _ctx: &Context<DashboardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SearchChanged(term) => {
            component.roster.search_term = term;
            true
        }
        Msg::Select(id) => {
            component.roster.selected_id = Some(id);
            true
        }
        Msg::ClearSelection => {
            component.roster.selected_id = None;
            true
        }
        Msg::SnapshotSettled(session, result) => component.settle_snapshot(session, result),
        Msg::ChannelEvent(session, text) => {
            // Events racing a teardown or an identity switch are dropped,
            // including ones already queued when the switch happened.
            if component.surface_event(session) {
                show_notice(NoticeKind::Info, &text);
            }
            false
        }
        Msg::ChannelFaulted(session) => {
            component.channel_faulted(session);
            false
        }
        Msg::Rescan(url) => {
            submit_rescan(url);
            false
        }
    }
}
