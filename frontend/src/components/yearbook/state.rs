//! State for the yearbook page.
//!
//! Holds the fetched student collection, the active filter query, and the
//! certificate-modal state. Responses are tagged with the epoch of the fetch
//! that produced them; `apply_students` drops anything stale, so a response
//! from an abandoned fetch can never overwrite newer data.

use crate::api::{FetchState, HttpError};
use crate::filter::{self, CategoryFilter, FilterQuery};
use crate::modal::ModalState;
use crate::normalize::StudentView;

/// One row of the static department table the upstream page hardcodes.
pub struct Department {
    pub id: i64,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const DEPARTMENTS: [Department; 5] = [
    Department { id: 1, name: "Cyber Security", icon: "🛡️", color: "#EF4444" },
    Department { id: 2, name: "Development", icon: "💻", color: "#3B82F6" },
    Department { id: 3, name: "Embedded Systems", icon: "🔌", color: "#10B981" },
    Department { id: 4, name: "Artificial Intelligence", icon: "🧠", color: "#8B5CF6" },
    Department { id: 5, name: "Aerospace", icon: "🚀", color: "#F59E0B" },
];

pub fn department_by_id(id: Option<i64>) -> Option<&'static Department> {
    id.and_then(|id| DEPARTMENTS.iter().find(|department| department.id == id))
}

pub struct YearbookPage {
    pub fetch: FetchState<Vec<StudentView>>,
    pub query: FilterQuery,
    pub modal: ModalState,
    /// Counter identifying the most recent fetch; bumped by `begin_fetch`.
    pub epoch: u32,
    /// Guard against running first-render initialization more than once.
    pub loaded: bool,
}

impl YearbookPage {
    pub fn new() -> Self {
        Self {
            fetch: FetchState::Idle,
            query: FilterQuery::default(),
            modal: ModalState::Closed,
            epoch: 0,
            loaded: false,
        }
    }

    /// Starts a new fetch: bumps the epoch, moves to `Loading`, and returns
    /// the epoch the response must carry to be applied.
    pub fn begin_fetch(&mut self) -> u32 {
        self.epoch += 1;
        self.fetch = FetchState::Loading;
        self.epoch
    }

    /// Applies a fetch result if it belongs to the current epoch. Stale
    /// results are discarded and leave the state untouched. Returns whether
    /// anything changed.
    pub fn apply_students(
        &mut self,
        epoch: u32,
        result: Result<Vec<StudentView>, HttpError>,
    ) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.fetch = match result {
            Ok(records) => FetchState::Loaded(records),
            Err(err) => FetchState::Failed(err.to_string()),
        };
        self.sync_modal();
        true
    }

    pub fn set_search(&mut self, term: String) {
        self.query.search = term;
        self.sync_modal();
    }

    pub fn set_department(&mut self, raw: &str) {
        self.query.category = CategoryFilter::parse(raw);
        self.sync_modal();
    }

    /// The filtered collection, in original order.
    pub fn visible(&self) -> Vec<&StudentView> {
        match self.fetch.data() {
            Some(records) => filter::apply(records, &self.query),
            None => Vec::new(),
        }
    }

    pub fn student_by_id(&self, id: i64) -> Option<&StudentView> {
        self.fetch
            .data()
            .and_then(|records| records.iter().find(|view| view.student.id == id))
    }

    pub fn selected(&self) -> Option<&StudentView> {
        self.modal.selected().and_then(|id| self.student_by_id(id))
    }

    fn sync_modal(&mut self) {
        let visible: Vec<i64> = self.visible().iter().map(|view| view.student.id).collect();
        self.modal.close_if_missing(|id| visible.contains(&id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::normalize::normalize_students;
    use common::model::student::Student;

    fn views(names: &[(i64, &str, i64)]) -> Vec<StudentView> {
        let students = names
            .iter()
            .map(|(id, name, department)| Student {
                id: *id,
                name: name.to_string(),
                department: Some(*department),
                ..Default::default()
            })
            .collect();
        let config = Config {
            api_base_url: "http://api.example".to_string(),
            verify_base_url: "http://verify.example".to_string(),
            request_timeout_ms: 10_000,
        };
        normalize_students(students, &config).records
    }

    #[test]
    fn stale_epoch_results_are_not_applied() {
        let mut page = YearbookPage::new();
        let first = page.begin_fetch();
        let second = page.begin_fetch();

        // The abandoned first fetch resolves late; nothing changes.
        let applied = page.apply_students(first, Ok(views(&[(1, "Old Data", 1)])));
        assert!(!applied);
        assert!(page.fetch.is_loading());

        let applied = page.apply_students(second, Ok(views(&[(2, "Sara Teshome", 2)])));
        assert!(applied);
        assert_eq!(page.visible().len(), 1);
    }

    #[test]
    fn failed_fetch_lands_in_the_error_state() {
        let mut page = YearbookPage::new();
        let epoch = page.begin_fetch();
        page.apply_students(
            epoch,
            Err(HttpError::Status {
                code: 503,
                text: "Service Unavailable".to_string(),
                detail: None,
            }),
        );
        assert_eq!(
            page.fetch,
            FetchState::Failed("HTTP 503 Service Unavailable".to_string())
        );
        assert!(page.visible().is_empty());
    }

    #[test]
    fn filter_change_closes_a_modal_whose_record_left_the_collection() {
        let mut page = YearbookPage::new();
        let epoch = page.begin_fetch();
        page.apply_students(
            epoch,
            Ok(views(&[(1, "Sara Teshome", 2), (2, "Michael Abebe", 3)])),
        );

        page.modal.open(2);
        page.set_search("sara".to_string());

        // Michael is filtered out, so his certificate viewer must not linger.
        assert_eq!(page.modal, ModalState::Closed);

        page.modal.open(1);
        page.set_department("2");
        assert_eq!(page.modal, ModalState::Open(1));
    }

    #[test]
    fn refetch_closes_a_modal_for_a_vanished_record() {
        let mut page = YearbookPage::new();
        let epoch = page.begin_fetch();
        page.apply_students(epoch, Ok(views(&[(5, "Dawit Assefa", 5)])));
        page.modal.open(5);

        let epoch = page.begin_fetch();
        page.apply_students(epoch, Ok(views(&[(9, "Hanan Mohammed", 4)])));
        assert_eq!(page.modal, ModalState::Closed);
    }

    #[test]
    fn department_table_lookup() {
        assert_eq!(department_by_id(Some(2)).map(|d| d.name), Some("Development"));
        assert_eq!(department_by_id(Some(42)).map(|d| d.name), None);
        assert_eq!(department_by_id(None).map(|d| d.name), None);
    }
}
