use yew::{classes, html, Callback, Component, Context, Html, Properties};

use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Page,
    pub on_navigate: Callback<Page>,
}

/// Top navigation bar; highlights the active page and reports clicks to the
/// `App` root through a callback.
pub struct NavBar;

impl Component for NavBar {
    type Message = ();
    type Properties = NavProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <nav class="nav-bar">
                <div class="nav-brand">{ "INSA Cyber Talent Yearbook" }</div>
                <div class="nav-links">
                    {
                        for Page::ALL.iter().map(|page| {
                            let page = *page;
                            let onclick = props.on_navigate.reform(move |_| page);
                            html! {
                                <button
                                    class={classes!("nav-link", (props.active == page).then_some("active"))}
                                    {onclick}
                                >
                                    { page.label() }
                                </button>
                            }
                        })
                    }
                </div>
            </nav>
        }
    }
}
