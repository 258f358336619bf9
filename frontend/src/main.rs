use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod export;
mod filter;
mod modal;
mod normalize;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
