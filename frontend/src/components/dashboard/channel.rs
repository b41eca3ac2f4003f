//! Live notification channel handle.
//!
//! Wraps one server-push event stream scoped to a single user. Ownership is
//! exclusive to the dashboard; the handle closes idempotently and closes
//! itself on drop. There is no automatic reconnection: a channel fault
//! degrades the session to snapshot-only.

use std::cell::Cell;
use std::rc::Rc;

use futures::StreamExt;
use gloo_console::error;
use gloo_net::eventsource::futures::EventSource;
use yew::html::Scope;
use yew::platform::spawn_local;

use super::messages::Msg;
use super::state::DashboardComponent;

pub struct LiveChannel {
    source: Option<EventSource>,
    /// Shared with the forwarding task; once set, no further event is
    /// surfaced even if one is already sitting in the stream.
    closed: Rc<Cell<bool>>,
}

impl LiveChannel {
    /// Opens the channel for `user_email` and starts forwarding inbound
    /// message text to the dashboard, tagged with the activation `session`
    /// that owns this channel. The scope parameter is percent-encoded; the
    /// payload itself stays opaque.
    pub fn open(
        user_email: &str,
        session: u64,
        link: &Scope<DashboardComponent>,
    ) -> Result<Self, ()> {
        let scope = String::from(js_sys::encode_uri_component(user_email));
        let url = format!("/dashboard/notifications?user_email={}", scope);

        let mut source = EventSource::new(&url).map_err(|err| {
            error!("live channel open failed:", err.to_string());
        })?;
        let mut stream = source.subscribe("message").map_err(|err| {
            error!("live channel subscribe failed:", err.to_string());
        })?;

        let closed = Rc::new(Cell::new(false));
        let guard = closed.clone();
        let link = link.clone();
        spawn_local(async move {
            loop {
                match stream.next().await {
                    Some(Ok((_, event))) => {
                        if guard.get() {
                            break;
                        }
                        if let Some(text) = event.data().as_string() {
                            link.send_message(Msg::ChannelEvent(session, text));
                        }
                    }
                    Some(Err(_)) => {
                        if !guard.get() {
                            link.send_message(Msg::ChannelFaulted(session));
                        }
                        break;
                    }
                    None => break,
                }
            }
        });

        Ok(Self {
            source: Some(source),
            closed,
        })
    }

    /// Closes the channel. Idempotent and safe to call multiple times.
    pub fn close(&mut self) {
        self.closed.set(true);
        if let Some(source) = self.source.take() {
            source.close();
        }
    }
}

impl Drop for LiveChannel {
    fn drop(&mut self) {
        self.close();
    }
}
