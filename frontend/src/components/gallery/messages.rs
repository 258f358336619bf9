use common::model::category::MemoryCategory;
use common::model::memory::Memory;

use crate::api::HttpError;
use crate::filter::CategoryFilter;
use crate::normalize::Normalized;

/// Raw result of the gallery's combined fetch, before warnings are logged.
pub struct GalleryFetch {
    pub categories: Vec<MemoryCategory>,
    pub memories: Normalized<Memory>,
}

pub enum Msg {
    DataLoaded {
        epoch: u32,
        result: Result<GalleryFetch, HttpError>,
    },
    SearchChanged(String),
    SelectCategory(CategoryFilter),
    ShowMemory(i64),
    DismissMemory,
}
