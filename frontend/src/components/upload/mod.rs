//! Upload submission controller: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, and view
//! rendering.
//!
//! One instance owns one in-flight upload draft. The draft walks
//! `Idle -> Ready -> Submitting` and both terminal outcomes return it to a
//! blank `Idle`, so a fresh submission always starts from an empty form.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UploadProps;
pub use state::{DraftPhase, Outcome, UploadComponent};

impl Component for UploadComponent {
    type Message = Msg;
    type Properties = UploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploadComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
