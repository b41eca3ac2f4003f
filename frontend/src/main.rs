use crate::app::App;

mod app;
mod components;
mod notify;

fn main() {
    yew::Renderer::<App>::new().render();
}
