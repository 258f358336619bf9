use yew::{html, Component, Context, Html};

use crate::components::certificates::CertificatesPage;
use crate::components::gallery::GalleryPage;
use crate::components::nav::NavBar;
use crate::components::tribute::TributePage;
use crate::components::yearbook::YearbookPage;
use crate::config::Config;

/// The pages of the yearbook client. Selection lives in the `App` root;
/// there is no router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Yearbook,
    Gallery,
    Certificates,
    Tribute,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Yearbook, Page::Gallery, Page::Certificates, Page::Tribute];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Yearbook => "Yearbook",
            Page::Gallery => "Memory Gallery",
            Page::Certificates => "Certificates",
            Page::Tribute => "Tribute Wall",
        }
    }
}

pub enum AppMsg {
    Navigate(Page),
}

/// Root component: owns the configuration and the active page.
pub struct App {
    config: Config,
    page: Page,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: Config::from_env(),
            page: Page::Yearbook,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(page) => {
                if self.page != page {
                    self.page = page;
                    return true;
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(AppMsg::Navigate);
        let config = self.config.clone();

        html! {
            <div class="app-root">
                <NavBar active={self.page} {on_navigate} />
                {
                    match self.page {
                        Page::Yearbook => html! { <YearbookPage {config} /> },
                        Page::Gallery => html! { <GalleryPage {config} /> },
                        Page::Certificates => html! { <CertificatesPage {config} /> },
                        Page::Tribute => html! { <TributePage {config} /> },
                    }
                }
            </div>
        }
    }
}
