//! Rescan trigger: normalize a source URL and enqueue it for re-crawling.
//!
//! The action is stateless and fire-and-forget: one request per invocation,
//! no retries, no coalescing. It is invoked from the free-entry bar below and
//! from the per-match buttons in the dashboard detail panel.

use gloo_console::error;
use gloo_net::http::Request;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::{RescanReceipt, RescanRequest};

use crate::notify::{show_notice, NoticeKind};

/// Normalizes a raw URL for submission to the crawler.
///
/// Whitespace is trimmed, a missing scheme becomes `https://`, and an
/// explicit `http://` is upgraded. An explicit `https://` is never touched.
/// Only the normalized form ever goes over the wire.
pub fn normalize_rescan_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some(rest) = trimmed.strip_prefix("http://") {
        format!("https://{}", rest)
    } else if trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Submits one rescan request for `raw_url`.
///
/// Concurrent invocations are independent; the outcome surfaces only as a
/// transient notice (the endpoint's confirmation verbatim on success, a
/// generic notice on any failure).
pub fn submit_rescan(raw_url: String) {
    let url = normalize_rescan_url(&raw_url);
    spawn_local(async move {
        let request = Request::post("/crawler/submit").json(&RescanRequest { url });
        let response = match request {
            Ok(req) => req.send().await,
            Err(err) => {
                error!("rescan request build failed:", err.to_string());
                show_notice(NoticeKind::Negative, "Rescan request failed. Please try again.");
                return;
            }
        };
        match response {
            Ok(resp) if resp.ok() => match resp.json::<RescanReceipt>().await {
                Ok(receipt) => show_notice(NoticeKind::Positive, &receipt.message),
                Err(_) => {
                    show_notice(NoticeKind::Negative, "Rescan request failed. Please try again.")
                }
            },
            Ok(resp) => {
                error!("rescan rejected with status", resp.status());
                show_notice(NoticeKind::Negative, "Rescan request failed. Please try again.");
            }
            Err(err) => {
                error!("rescan request error:", err.to_string());
                show_notice(NoticeKind::Negative, "Rescan request failed. Please try again.");
            }
        }
    });
}

pub enum Msg {
    UrlEntered(String),
    Submit,
}

/// Free-entry widget for operator-triggered rescans.
pub struct RescanBar {
    url_entry: String,
}

impl Component for RescanBar {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            url_entry: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UrlEntered(value) => {
                self.url_entry = value;
                false
            }
            Msg::Submit => {
                if self.url_entry.trim().is_empty() {
                    return false;
                }
                submit_rescan(std::mem::take(&mut self.url_entry));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UrlEntered(input.value())
        });
        let onkeydown =
            link.batch_callback(|e: KeyboardEvent| (e.key() == "Enter").then_some(Msg::Submit));

        html! {
            <div class="rescan-bar">
                <input
                    type="text"
                    placeholder="Paste a suspicious URL to rescan..."
                    value={self.url_entry.clone()}
                    {oninput}
                    {onkeydown}
                />
                <button class="primary-btn" onclick={link.callback(|_| Msg::Submit)}>
                    {"Rescan"}
                </button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_rescan_url;

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(normalize_rescan_url("example.com"), "https://example.com");
    }

    #[test]
    fn http_is_upgraded() {
        assert_eq!(
            normalize_rescan_url("http://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn https_is_untouched() {
        assert_eq!(
            normalize_rescan_url("https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            normalize_rescan_url("  example.com  "),
            "https://example.com"
        );
    }

    #[test]
    fn path_and_query_survive() {
        assert_eq!(
            normalize_rescan_url("http://host.example/watch?v=1"),
            "https://host.example/watch?v=1"
        );
    }
}
