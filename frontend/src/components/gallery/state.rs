//! State for the memory gallery page.
//!
//! Categories and memories are fetched together in one task; the result is
//! tagged with the fetch epoch and dropped if a newer fetch has started.

use common::model::category::MemoryCategory;
use common::model::memory::Memory;

use crate::api::{FetchState, HttpError};
use crate::filter::{self, CategoryFilter, FilterQuery};
use crate::modal::ModalState;

/// Everything the gallery needs from one load.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryData {
    pub categories: Vec<MemoryCategory>,
    pub memories: Vec<Memory>,
}

pub struct GalleryPage {
    pub fetch: FetchState<GalleryData>,
    pub query: FilterQuery,
    pub modal: ModalState,
    pub epoch: u32,
    pub loaded: bool,
}

impl GalleryPage {
    pub fn new() -> Self {
        Self {
            fetch: FetchState::Idle,
            query: FilterQuery::default(),
            modal: ModalState::Closed,
            epoch: 0,
            loaded: false,
        }
    }

    pub fn begin_fetch(&mut self) -> u32 {
        self.epoch += 1;
        self.fetch = FetchState::Loading;
        self.epoch
    }

    /// Applies a fetch result from the current epoch; stale results are
    /// discarded. Returns whether anything changed.
    pub fn apply_data(&mut self, epoch: u32, result: Result<GalleryData, HttpError>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.fetch = match result {
            Ok(data) => FetchState::Loaded(data),
            Err(err) => FetchState::Failed(err.to_string()),
        };
        self.sync_modal();
        true
    }

    pub fn set_search(&mut self, term: String) {
        self.query.search = term;
        self.sync_modal();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
        self.sync_modal();
    }

    pub fn categories(&self) -> &[MemoryCategory] {
        self.fetch
            .data()
            .map(|data| data.categories.as_slice())
            .unwrap_or_default()
    }

    pub fn memories(&self) -> &[Memory] {
        self.fetch
            .data()
            .map(|data| data.memories.as_slice())
            .unwrap_or_default()
    }

    /// The filtered memories, in original order.
    pub fn visible(&self) -> Vec<&Memory> {
        filter::apply(self.memories(), &self.query)
    }

    pub fn memory_by_id(&self, id: i64) -> Option<&Memory> {
        self.memories().iter().find(|memory| memory.id == id)
    }

    pub fn selected(&self) -> Option<&Memory> {
        self.modal.selected().and_then(|id| self.memory_by_id(id))
    }

    fn sync_modal(&mut self) {
        let visible: Vec<i64> = self.visible().iter().map(|memory| memory.id).collect();
        self.modal.close_if_missing(|id| visible.contains(&id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> GalleryData {
        let categories = vec![MemoryCategory {
            id: 1,
            name: "Hackathons".to_string(),
            is_active: true,
            ..Default::default()
        }];
        let memories = vec![
            Memory {
                id: 1,
                title: "CTF finals".to_string(),
                category: Some(1),
                ..Default::default()
            },
            Memory {
                id: 2,
                title: "Graduation day".to_string(),
                category: None,
                ..Default::default()
            },
        ];
        GalleryData { categories, memories }
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut page = GalleryPage::new();
        let old = page.begin_fetch();
        let current = page.begin_fetch();

        assert!(!page.apply_data(old, Ok(data())));
        assert!(page.fetch.is_loading());
        assert!(page.apply_data(current, Ok(data())));
        assert_eq!(page.memories().len(), 2);
    }

    #[test]
    fn category_chip_change_closes_a_stale_modal() {
        let mut page = GalleryPage::new();
        let epoch = page.begin_fetch();
        page.apply_data(epoch, Ok(data()));

        page.modal.open(2);
        page.set_category(CategoryFilter::Only(1));
        assert_eq!(page.modal, ModalState::Closed);

        page.modal.open(1);
        page.set_category(CategoryFilter::All);
        assert_eq!(page.modal, ModalState::Open(1));
    }

    #[test]
    fn search_narrows_the_visible_memories() {
        let mut page = GalleryPage::new();
        let epoch = page.begin_fetch();
        page.apply_data(epoch, Ok(data()));

        page.set_search("graduation".to_string());
        let titles: Vec<&str> = page.visible().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Graduation day"]);
    }
}
