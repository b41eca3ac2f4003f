//! Site settings: client-local allow/deny list editor.
//!
//! Both lists live only in component state; nothing is persisted and no
//! network is involved.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ListKind {
    Allowed,
    Denied,
}

pub enum Msg {
    EntryChanged(ListKind, String),
    Add(ListKind),
    Remove(ListKind, String),
}

pub struct SettingsComponent {
    allowed: Vec<String>,
    denied: Vec<String>,
    allowed_entry: String,
    denied_entry: String,
}

impl Component for SettingsComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            allowed: Vec::new(),
            denied: Vec::new(),
            allowed_entry: String::new(),
            denied_entry: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::EntryChanged(kind, value) => {
                *self.entry_mut(kind) = value;
                false
            }
            Msg::Add(kind) => {
                let entry = self.entry_mut(kind);
                let site = entry.trim().to_string();
                if site.is_empty() {
                    return false;
                }
                entry.clear();
                let list = self.list_mut(kind);
                if !list.contains(&site) {
                    list.push(site);
                }
                true
            }
            Msg::Remove(kind, site) => {
                self.list_mut(kind).retain(|s| s != &site);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="settings-root">
                <div class="settings-header">
                    <h1>{"Site Settings"}</h1>
                    <p>{"Manage your allowed and denied sites"}</p>
                </div>
                <div class="settings-grid">
                    { self.list_card(ctx, ListKind::Allowed, "Allowed Sites") }
                    { self.list_card(ctx, ListKind::Denied, "Denied Sites") }
                </div>
            </div>
        }
    }
}

impl SettingsComponent {
    fn entry_mut(&mut self, kind: ListKind) -> &mut String {
        match kind {
            ListKind::Allowed => &mut self.allowed_entry,
            ListKind::Denied => &mut self.denied_entry,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
        match kind {
            ListKind::Allowed => &mut self.allowed,
            ListKind::Denied => &mut self.denied,
        }
    }

    fn list_card(&self, ctx: &Context<Self>, kind: ListKind, title: &'static str) -> Html {
        let link = ctx.link();
        let (entry, sites) = match kind {
            ListKind::Allowed => (&self.allowed_entry, &self.allowed),
            ListKind::Denied => (&self.denied_entry, &self.denied),
        };
        let oninput = link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::EntryChanged(kind, input.value())
        });
        let onkeydown = link
            .batch_callback(move |e: KeyboardEvent| (e.key() == "Enter").then_some(Msg::Add(kind)));

        html! {
            <div class="settings-card">
                <h2>{ title }</h2>
                <div class="settings-entry">
                    <input
                        type="text"
                        placeholder="Enter site URL..."
                        value={entry.clone()}
                        {oninput}
                        {onkeydown}
                    />
                    <button class="primary-btn" onclick={link.callback(move |_| Msg::Add(kind))}>
                        {"Add"}
                    </button>
                </div>
                <div class="settings-list">
                    {
                        for sites.iter().map(|site| {
                            let site_owned = site.clone();
                            html! {
                                <div class="settings-item">
                                    <span>{ site.clone() }</span>
                                    <button
                                        class="ghost-btn"
                                        onclick={link.callback(move |_| {
                                            Msg::Remove(kind, site_owned.clone())
                                        })}
                                    >
                                        {"Remove"}
                                    </button>
                                </div>
                            }
                        })
                    }
                </div>
            </div>
        }
    }
}
