//! View rendering for the upload controller: file picker, title and
//! description fields, and the inline outcome banner.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::messages::Msg;
use super::state::{DraftPhase, UploadComponent};

pub fn view(component: &UploadComponent, ctx: &Context<UploadComponent>) -> Html {
    let link = ctx.link();

    let on_file_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(Msg::FileSelected)
    });
    let on_title_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::TitleChanged(input.value())
    });
    let on_description_input = link.callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::DescriptionChanged(area.value())
    });

    let submitting = component.phase == DraftPhase::Submitting;
    let disabled = submitting || !component.can_submit();

    html! {
        <div class="upload-card">
            <h2>{"Upload Your Content"}</h2>

            <div class="file-drop">
                <input
                    type="file"
                    id="upload-file-input"
                    accept="video/*,image/*"
                    onchange={on_file_change}
                />
                <label for="upload-file-input">
                    {
                        match &component.file {
                            Some(file) => html! { <span>{ file.name() }</span> },
                            None => html! { <span>{"Choose a file to upload"}</span> },
                        }
                    }
                </label>
            </div>

            {
                if component.file.is_some() {
                    html! {
                        <div class="form-field">
                            <label for="upload-title">{"Title"}</label>
                            <input
                                type="text"
                                id="upload-title"
                                value={component.title.clone()}
                                oninput={on_title_input}
                            />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="form-field">
                <label for="upload-description">{"Description"}</label>
                <textarea
                    id="upload-description"
                    rows="4"
                    placeholder="Enter a description for best results!"
                    value={component.description.clone()}
                    oninput={on_description_input}
                />
            </div>

            <button
                class="primary-btn"
                disabled={disabled}
                onclick={link.callback(|_| Msg::Submit)}
            >
                { if submitting { "Uploading..." } else { "Upload and Protect" } }
            </button>

            {
                match &component.outcome {
                    Some(outcome) => html! {
                        <div class={classes!(
                            "outcome-banner",
                            if outcome.success { "positive" } else { "negative" },
                        )}>
                            { outcome.message.clone() }
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}
