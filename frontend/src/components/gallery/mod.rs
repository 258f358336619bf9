//! Memory gallery page: memories grouped by category.
//!
//! Categories and memories are fetched sequentially inside one task, so the
//! page either gets a consistent pair or a single error. The response carries
//! the epoch of the fetch that produced it.

use common::model::category::MemoryCategory;
use common::model::memory::Memory;
use common::model::paginated::Paginated;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::api::{ApiClient, HttpError};
use crate::normalize::normalize_memories;
use messages::GalleryFetch;
pub use messages::Msg;
pub use props::GalleryProps;
pub use state::GalleryPage;

impl Component for GalleryPage {
    type Message = Msg;
    type Properties = GalleryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        GalleryPage::new()
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
            fetch_gallery(ctx, epoch);
        }
    }
}

fn fetch_gallery(ctx: &Context<GalleryPage>, epoch: u32) {
    let link = ctx.link().clone();
    let config = ctx.props().config.clone();
    spawn_local(async move {
        let client = ApiClient::from_config(&config);
        let result: Result<GalleryFetch, HttpError> = async {
            let categories = client
                .get_json::<Paginated<MemoryCategory>>("/memory-categories/")
                .await?
                .results;
            let memories = client
                .get_json::<Paginated<Memory>>("/memories/")
                .await?
                .results;
            Ok(GalleryFetch {
                categories,
                memories: normalize_memories(memories),
            })
        }
        .await;
        link.send_message(Msg::DataLoaded { epoch, result });
    });
}
