//! View rendering for the roster dashboard.
//!
//! Renders the search bar and rescan entry, then one of: a loading screen,
//! an error card, an empty-roster card, a no-search-results card, or the
//! filtered grid. A selected entry additionally gets a detail panel; the
//! selection is re-resolved by identifier on every render so it always shows
//! the latest known data.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::submission::Submission;

use crate::components::rescan::RescanBar;

use super::messages::Msg;
use super::state::DashboardComponent;

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();

    if component.roster.loading {
        return html! {
            <div class="dashboard-loading">{"Loading your uploads..."}</div>
        };
    }

    if ctx.props().user_email.is_none() {
        return html! {
            <div class="status-card">
                <h2>{"Not signed in"}</h2>
                <p>{"Sign in to see your protected uploads."}</p>
            </div>
        };
    }

    let on_search = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SearchChanged(input.value())
    });

    let filtered = component.roster.filtered();

    html! {
        <div class="dashboard-root">
            <div class="dashboard-toolbar">
                <RescanBar />
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search uploads..."
                    value={component.roster.search_term.clone()}
                    oninput={on_search}
                />
            </div>

            {
                if let Some(error) = &component.roster.error {
                    html! {
                        <div class="status-card negative">
                            <h2>{"Error Fetching Uploads"}</h2>
                            <p>{ error.clone() }</p>
                        </div>
                    }
                } else if component.roster.entries.is_empty() {
                    html! {
                        <div class="status-card">
                            <h2>{"No uploads yet"}</h2>
                            <p>{"Start by uploading your first piece of content!"}</p>
                        </div>
                    }
                } else if filtered.is_empty() {
                    html! {
                        <div class="status-card">
                            <h2>{"No results found"}</h2>
                            <p>{"Try adjusting your search term"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="upload-grid">
                            { for filtered.iter().map(|entry| roster_card(entry, link)) }
                        </div>
                    }
                }
            }

            {
                match component.roster.selected() {
                    Some(entry) => detail_panel(entry, link),
                    None => html! {},
                }
            }
        </div>
    }
}

fn roster_card(entry: &Submission, link: &Scope<DashboardComponent>) -> Html {
    let id = entry.id;
    html! {
        <div class="upload-card-item" onclick={link.callback(move |_| Msg::Select(id))}>
            <div class="card-title-row">
                <span class="card-title">{ entry.title.clone() }</span>
                {
                    if entry.flagged {
                        html! { <span class="badge flagged">{"Flagged"}</span> }
                    } else {
                        html! { <span class="badge clear">{"Clear"}</span> }
                    }
                }
            </div>
            <p class="card-meta">{ format!("Uploaded on {}", entry.created_at) }</p>
            <p class="card-description">
                {
                    if entry.description.is_empty() {
                        "No description provided.".to_string()
                    } else {
                        entry.description.clone()
                    }
                }
            </p>
        </div>
    }
}

fn detail_panel(entry: &Submission, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <div class="detail-panel">
            <div class="detail-header">
                <h2>{ entry.title.clone() }</h2>
                <button class="ghost-btn" onclick={link.callback(|_| Msg::ClearSelection)}>
                    {"Close"}
                </button>
            </div>
            <p>{ format!("Uploaded on {}", entry.created_at) }</p>
            <p><strong>{"Filename: "}</strong>{ entry.filename.clone() }</p>
            <p><strong>{"Description: "}</strong>
                { if entry.description.is_empty() { "N/A".to_string() } else { entry.description.clone() } }
            </p>
            <p><strong>{"Fingerprint: "}</strong>{ entry.fingerprint.clone() }</p>

            {
                if entry.active_matches.is_empty() {
                    html! { <p class="detail-clear">{"No active matches against this upload."}</p> }
                } else {
                    html! {
                        <div class="match-list">
                            <h3>{"Active matches"}</h3>
                            {
                                for entry.active_matches.iter().map(|m| {
                                    let url = m.video_url.clone();
                                    html! {
                                        <div class="match-row">
                                            <span class="match-url">{ m.video_url.clone() }</span>
                                            <span class="match-score">
                                                { format!("similarity {:.2}", m.similarity) }
                                            </span>
                                            <button
                                                class="primary-btn"
                                                onclick={link.callback(move |_| Msg::Rescan(url.clone()))}
                                            >
                                                {"Rescan source"}
                                            </button>
                                        </div>
                                    }
                                })
                            }
                        </div>
                    }
                }
            }
        </div>
    }
}
