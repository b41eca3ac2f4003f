//! Roster dashboard: root module wiring the Yew `Component` implementation
//! with submodules for state, the live channel handle, update logic, and
//! view rendering.
//!
//! Responsibilities
//! - On activation, fetch the authoritative roster snapshot for the caller
//!   and, independently of its outcome, open one live notification channel.
//! - Re-run the whole activation whenever the caller identity prop changes,
//!   closing the previous channel before anything else so no event from the
//!   old identity leaks into the new session.
//! - On teardown, close the channel; events racing teardown are discarded.

use yew::prelude::*;

mod channel;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use channel::LiveChannel;
pub use messages::Msg;
pub use props::DashboardProps;
pub use state::{DashboardComponent, RosterState};

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        DashboardComponent::new(ctx.props().user_email.is_some())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::activate(self, ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().user_email != old_props.user_email {
            update::activate(self, ctx);
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.close_channel();
    }
}
