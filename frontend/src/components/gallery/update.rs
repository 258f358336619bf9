//! Update function for the memory gallery page.

use gloo_console::warn;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{GalleryData, GalleryPage};

pub fn update(component: &mut GalleryPage, _ctx: &Context<GalleryPage>, msg: Msg) -> bool {
    match msg {
        Msg::DataLoaded { epoch, result } => {
            let result = result.map(|fetch| {
                for warning in &fetch.memories.warnings {
                    warn!(format!("normalize: {}", warning.message));
                }
                GalleryData {
                    categories: fetch.categories,
                    memories: fetch.memories.records,
                }
            });
            component.apply_data(epoch, result)
        }
        Msg::SearchChanged(term) => {
            component.set_search(term);
            true
        }
        Msg::SelectCategory(category) => {
            component.set_category(category);
            true
        }
        Msg::ShowMemory(id) => {
            component.modal.open(id);
            true
        }
        Msg::DismissMemory => {
            component.modal.dismiss();
            true
        }
    }
}
