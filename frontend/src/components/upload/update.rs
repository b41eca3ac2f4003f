//! Update function for the upload controller.
//!
//! Elm-style: receives the current draft, the `Context`, and a `Msg`,
//! mutates the draft, and returns whether the view should re-render.
//!
//! Submission semantics
//! - Preconditions (payload selected, identity resolved) are checked
//!   synchronously; a missing identity settles the draft as failed with no
//!   network call.
//! - Exactly one multipart request per confirmation, no retries; further
//!   confirmations are rejected while it is in flight.
//! - Success requires a 2xx response and a body carrying the new record id;
//!   everything else surfaces as one generic failure notice.

use gloo_console::error;
use gloo_net::http::Request;
use web_sys::FormData;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::upload::UploadReceipt;

use super::messages::Msg;
use super::state::{DraftPhase, Outcome, UploadComponent};

const GENERIC_FAILURE: &str = "Upload failed. Please try again.";

pub fn update(component: &mut UploadComponent, ctx: &Context<UploadComponent>, msg: Msg) -> bool {
    match msg {
        Msg::FileSelected(file) => {
            component.seed_title(&file.name());
            component.file = Some(file);
            component.phase = DraftPhase::Ready;
            component.outcome = None;
            true
        }
        Msg::TitleChanged(title) => {
            component.title = title;
            true
        }
        Msg::DescriptionChanged(description) => {
            component.description = description;
            true
        }
        Msg::Submit => {
            if !component.can_submit() {
                return false;
            }
            let Some(user_email) = ctx.props().user_email.clone() else {
                // Precondition failure: terminal, and terminal always clears.
                component.settle(Outcome {
                    success: false,
                    message: "You are not signed in. Sign in and try again.".to_string(),
                });
                return true;
            };
            let Some(file) = component.file.clone() else {
                return false;
            };

            let form = match FormData::new() {
                Ok(form) => form,
                Err(_) => {
                    component.settle(Outcome {
                        success: false,
                        message: GENERIC_FAILURE.to_string(),
                    });
                    return true;
                }
            };
            form.append_with_blob("file", &file).ok();
            form.append_with_str("user_email", &user_email).ok();
            form.append_with_str("name", &component.title).ok();
            form.append_with_str("description", &component.description).ok();

            component.phase = DraftPhase::Submitting;
            component.outcome = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                let settled = match Request::post("/upload").body(form) {
                    Ok(request) => match request.send().await {
                        Ok(resp) if resp.ok() => match resp.json::<UploadReceipt>().await {
                            Ok(receipt) => Ok(receipt.id),
                            Err(_) => Err(()),
                        },
                        Ok(resp) => {
                            error!("upload rejected with status", resp.status());
                            Err(())
                        }
                        Err(err) => {
                            error!("upload transport error:", err.to_string());
                            Err(())
                        }
                    },
                    Err(err) => {
                        error!("upload request build failed:", err.to_string());
                        Err(())
                    }
                };
                link.send_message(Msg::Settled(settled));
            });
            true
        }
        Msg::Settled(result) => {
            let outcome = match result {
                Ok(id) => Outcome {
                    success: true,
                    message: format!("Upload successful! Video ID: {}", id),
                },
                Err(()) => Outcome {
                    success: false,
                    message: GENERIC_FAILURE.to_string(),
                },
            };
            component.settle(outcome);
            true
        }
    }
}
