//! Application shell: session identity and page navigation.
//!
//! The identity provider is external to this client; the shell stands in for
//! it with a plain email entry. The resolved identity (or its absence) is
//! threaded into the dashboard and upload components as a prop, so an
//! identity change flows through `Component::changed` and re-activates the
//! roster sync against the new user.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dashboard::DashboardComponent;
use crate::components::settings::SettingsComponent;
use crate::components::upload::UploadComponent;

#[derive(Clone, Copy, PartialEq)]
pub enum Page {
    Dashboard,
    Upload,
    Settings,
}

pub enum Msg {
    IdentityEntered(String),
    SignIn,
    SignOut,
    Navigate(Page),
}

pub struct App {
    /// Authenticated user's email, if any. `None` disables uploads and makes
    /// the dashboard a no-op.
    identity: Option<String>,
    identity_entry: String,
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            identity: None,
            identity_entry: String::new(),
            page: Page::Dashboard,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::IdentityEntered(value) => {
                self.identity_entry = value;
                false
            }
            Msg::SignIn => {
                let entry = self.identity_entry.trim().to_string();
                if entry.is_empty() {
                    return false;
                }
                self.identity = Some(entry);
                true
            }
            Msg::SignOut => {
                self.identity = None;
                self.identity_entry.clear();
                true
            }
            Msg::Navigate(page) => {
                self.page = page;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="app-root">
                <header class="app-header">
                    <span class="app-brand">{"SentinelReel"}</span>
                    { self.identity_bar(link) }
                </header>
                <nav class="app-nav">
                    { self.nav_button(link, Page::Dashboard, "Dashboard") }
                    { self.nav_button(link, Page::Upload, "Upload") }
                    { self.nav_button(link, Page::Settings, "Settings") }
                </nav>
                <main class="app-main">
                    {
                        match self.page {
                            Page::Dashboard => html! {
                                <DashboardComponent user_email={self.identity.clone()} />
                            },
                            Page::Upload => html! {
                                <UploadComponent user_email={self.identity.clone()} />
                            },
                            Page::Settings => html! { <SettingsComponent /> },
                        }
                    }
                </main>
            </div>
        }
    }
}

impl App {
    fn identity_bar(&self, link: &Scope<Self>) -> Html {
        match &self.identity {
            Some(email) => html! {
                <div class="identity-bar">
                    <span class="identity-email">{ email.clone() }</span>
                    <button class="ghost-btn" onclick={link.callback(|_| Msg::SignOut)}>
                        {"Sign out"}
                    </button>
                </div>
            },
            None => {
                let oninput = link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::IdentityEntered(input.value())
                });
                let onkeydown = link.batch_callback(|e: KeyboardEvent| {
                    (e.key() == "Enter").then_some(Msg::SignIn)
                });
                html! {
                    <div class="identity-bar">
                        <input
                            type="email"
                            placeholder="you@example.com"
                            value={self.identity_entry.clone()}
                            {oninput}
                            {onkeydown}
                        />
                        <button class="primary-btn" onclick={link.callback(|_| Msg::SignIn)}>
                            {"Sign in"}
                        </button>
                    </div>
                }
            }
        }
    }

    fn nav_button(&self, link: &Scope<Self>, page: Page, label: &'static str) -> Html {
        html! {
            <button
                class={classes!("nav-btn", (self.page == page).then_some("active"))}
                onclick={link.callback(move |_| Msg::Navigate(page))}
            >
                { label }
            </button>
        }
    }
}
