//! Yearbook page: the searchable student card grid.
//!
//! Responsibilities
//! - Re-export the page's types (`Msg`, `YearbookProps`, `YearbookPage`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, fetch the student collection and normalize it; the
//!   response carries the epoch of the fetch that produced it so a stale
//!   response is never applied.

use common::model::paginated::Paginated;
use common::model::student::Student;
use yew::platform::spawn_local;
use yew::prelude::*;

mod dialog;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::api::ApiClient;
use crate::normalize::normalize_students;
pub use messages::Msg;
pub use props::YearbookProps;
pub use state::YearbookPage;

impl Component for YearbookPage {
    type Message = Msg;
    type Properties = YearbookProps;

    fn create(_ctx: &Context<Self>) -> Self {
        YearbookPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let epoch = self.begin_fetch();
            fetch_students(ctx, epoch);
        }
    }
}

fn fetch_students(ctx: &Context<YearbookPage>, epoch: u32) {
    let link = ctx.link().clone();
    let config = ctx.props().config.clone();
    spawn_local(async move {
        let client = ApiClient::from_config(&config);
        let result = client
            .get_json::<Paginated<Student>>("/students/")
            .await
            .map(|page| normalize_students(page.results, &config));
        link.send_message(Msg::StudentsLoaded { epoch, result });
    });
}
