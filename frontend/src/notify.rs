//! Transient notice toasts.
//!
//! Every user-facing outcome in the app (upload result, rescan confirmation,
//! live-channel signal) surfaces through `show_notice`: a floating `div`
//! injected into the body that removes itself after a few seconds. Notices
//! are non-blocking and carry no internal error detail.

use web_sys::HtmlElement;

/// Visual flavor of a notice; selects the toast background.
#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Positive,
    Negative,
    Info,
}

/// Displays a temporary notice at the bottom of the screen.
///
/// Safe to call from any context: if the DOM is unavailable the notice is
/// silently dropped. The toast removes itself after three seconds.
pub fn show_notice(kind: NoticeKind, message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = wasm_bindgen::JsCast::unchecked_into(toast);
                let background = match kind {
                    NoticeKind::Positive => "rgba(0, 95, 99, 0.92)",
                    NoticeKind::Negative => "rgba(158, 32, 32, 0.92)",
                    NoticeKind::Info => "rgba(0, 0, 0, 0.8)",
                };
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
