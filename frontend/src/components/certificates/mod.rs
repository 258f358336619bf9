//! Certificates page: certificate-focused cards from the student collection.
//!
//! Compact single-file page: the same student fetch as the yearbook, but the
//! cards lead with the external identifier and the view / download / verify
//! actions. The dialog shows the certificate image next to its public
//! verification link.

use common::model::paginated::Paginated;
use common::model::student::Student;
use gloo_console::warn;
use std::collections::HashSet;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, FetchState, HttpError};
use crate::components::banner::{empty_panel, error_banner, loading_panel};
use crate::components::page_header::PageHeader;
use crate::config::Config;
use crate::export::{ExportOutcome, Exporter};
use crate::modal::ModalState;
use crate::normalize::{normalize_students, Normalized, StudentView};
use crate::toast::show_toast;

#[derive(Properties, PartialEq, Clone)]
pub struct CertificatesProps {
    pub config: Config,
}

pub enum Msg {
    Loaded {
        epoch: u32,
        result: Result<Normalized<StudentView>, HttpError>,
    },
    Show(i64),
    Dismiss,
    Download(i64),
    DownloadFinished(ExportOutcome),
}

pub struct CertificatesPage {
    fetch: FetchState<Vec<StudentView>>,
    modal: ModalState,
    epoch: u32,
    loaded: bool,
}

impl CertificatesPage {
    fn apply(&mut self, epoch: u32, result: Result<Vec<StudentView>, HttpError>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.fetch = match result {
            Ok(records) => FetchState::Loaded(records),
            Err(err) => FetchState::Failed(err.to_string()),
        };
        let present: Vec<i64> = self.records().iter().map(|view| view.student.id).collect();
        self.modal.close_if_missing(|id| present.contains(&id));
        true
    }

    fn records(&self) -> &[StudentView] {
        self.fetch.data().map(Vec::as_slice).unwrap_or_default()
    }

    fn by_id(&self, id: i64) -> Option<&StudentView> {
        self.records().iter().find(|view| view.student.id == id)
    }
}

/// Number of distinct departments the certified students come from.
fn distinct_departments(records: &[StudentView]) -> usize {
    records
        .iter()
        .filter_map(|view| view.student.department)
        .collect::<HashSet<_>>()
        .len()
}

impl Component for CertificatesPage {
    type Message = Msg;
    type Properties = CertificatesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            fetch: FetchState::Idle,
            modal: ModalState::Closed,
            epoch: 0,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded { epoch, result } => {
                let result = result.map(|normalized| {
                    for warning in &normalized.warnings {
                        warn!(format!("normalize: {}", warning.message));
                    }
                    normalized.records
                });
                self.apply(epoch, result)
            }
            Msg::Show(id) => {
                self.modal.open(id);
                true
            }
            Msg::Dismiss => {
                self.modal.dismiss();
                true
            }
            Msg::Download(id) => {
                if let Some(view) = self.by_id(id) {
                    let url = view.certificate_url.clone();
                    let external_id = view.external_id.clone();
                    let exporter = Exporter::from_config(&ctx.props().config);
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let outcome = exporter.export_certificate(&url, &external_id).await;
                        link.send_message(Msg::DownloadFinished(outcome));
                    });
                }
                false
            }
            Msg::DownloadFinished(outcome) => {
                match outcome {
                    ExportOutcome::Saved(filename) => show_toast(&format!("Saved {filename}.")),
                    ExportOutcome::OpenedDirectly(err) => show_toast(&format!(
                        "{err}. Opened the certificate in a new tab instead."
                    )),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let body = match &self.fetch {
            FetchState::Idle | FetchState::Loading => loading_panel("Loading certificates..."),
            FetchState::Failed(message) => error_banner(message),
            FetchState::Loaded(records) if records.is_empty() => {
                empty_panel("No certificates have been issued yet.")
            }
            FetchState::Loaded(records) => html! {
                <>
                    { stats_strip(records) }
                    <div class="card-grid">
                        { for records.iter().map(|view| certificate_card(view, link)) }
                    </div>
                </>
            },
        };

        html! {
            <div class="page certificates-page">
                <PageHeader
                    title="INSA Cyber Talent Certificates"
                    subtitle="Official certificates for our cybersecurity graduates"
                    icon="📜"
                />
                { body }
                {
                    match self.modal.selected().and_then(|id| self.by_id(id)) {
                        Some(view) => certificate_modal(view, link),
                        None => html! {},
                    }
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.epoch += 1;
            self.fetch = FetchState::Loading;
            let epoch = self.epoch;
            let link = ctx.link().clone();
            let config = ctx.props().config.clone();
            spawn_local(async move {
                let client = ApiClient::from_config(&config);
                let result = client
                    .get_json::<Paginated<Student>>("/students/")
                    .await
                    .map(|page| normalize_students(page.results, &config));
                link.send_message(Msg::Loaded { epoch, result });
            });
        }
    }
}

fn stats_strip(records: &[StudentView]) -> Html {
    html! {
        <div class="stats-strip">
            <div class="stat">
                <div class="stat-value">{ records.len() }</div>
                <div class="stat-label">{ "Certificates" }</div>
            </div>
            <div class="stat">
                <div class="stat-value">{ distinct_departments(records) }</div>
                <div class="stat-label">{ "Departments" }</div>
            </div>
            <div class="stat">
                <div class="stat-value">{ records.len() }</div>
                <div class="stat-label">{ "Verifiable Online" }</div>
            </div>
        </div>
    }
}

fn certificate_card(view: &StudentView, link: &Scope<CertificatesPage>) -> Html {
    let id = view.student.id;
    html! {
        <div class="card certificate-card" key={id}>
            <div class="card-body">
                <span class="badge badge-id">{ &view.external_id }</span>
                <h3>{ &view.student.name }</h3>
                {
                    match view.student.department_name.as_deref() {
                        Some(department) => html! { <p class="card-department">{ department }</p> },
                        None => html! {},
                    }
                }
                <div class="card-actions">
                    <button class="btn" onclick={link.callback(move |_| Msg::Show(id))}>
                        { "View" }
                    </button>
                    <button class="btn btn-primary" onclick={link.callback(move |_| Msg::Download(id))}>
                        { "Download" }
                    </button>
                    <a class="btn btn-link" href={view.verification_url.clone()} target="_blank" rel="noopener">
                        { "Verify" }
                    </a>
                </div>
            </div>
        </div>
    }
}

fn certificate_modal(view: &StudentView, link: &Scope<CertificatesPage>) -> Html {
    let id = view.student.id;
    let on_dismiss = link.callback(|_| Msg::Dismiss);

    html! {
        <div class="modal-backdrop" onclick={on_dismiss.clone()}>
            <div class="modal" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                <div class="modal-header">
                    <h2>{ format!("Certificate — {}", view.student.name) }</h2>
                    <button class="btn btn-close" onclick={on_dismiss}>{ "✕" }</button>
                </div>
                <div class="modal-body">
                    <img
                        class="certificate-image"
                        src={view.certificate_url.clone()}
                        alt={format!("Certificate {}", view.external_id)}
                    />
                    <div class="verification-panel">
                        <p>{ "Anyone can confirm this certificate's authenticity at:" }</p>
                        <a href={view.verification_url.clone()} target="_blank" rel="noopener">
                            { &view.verification_url }
                        </a>
                    </div>
                </div>
                <div class="modal-actions">
                    <button class="btn btn-primary" onclick={link.callback(move |_| Msg::Download(id))}>
                        { "Download Certificate" }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(id: i64, name: &str, department: Option<i64>) -> StudentView {
        let config = Config {
            api_base_url: "http://api.example".to_string(),
            verify_base_url: "http://verify.example".to_string(),
            request_timeout_ms: 10_000,
        };
        let student = Student {
            id,
            name: name.to_string(),
            department,
            ..Default::default()
        };
        normalize_students(vec![student], &config).records.remove(0)
    }

    #[test]
    fn stale_results_leave_the_page_loading() {
        let mut page = CertificatesPage {
            fetch: FetchState::Idle,
            modal: ModalState::Closed,
            epoch: 0,
            loaded: false,
        };
        page.epoch = 2;
        assert!(!page.apply(1, Ok(vec![view(1, "Sara Teshome", Some(2))])));
        assert_eq!(page.fetch, FetchState::Idle);
        assert!(page.apply(2, Ok(vec![view(1, "Sara Teshome", Some(2))])));
        assert_eq!(page.records().len(), 1);
    }

    #[test]
    fn refetch_without_the_selected_record_closes_the_modal() {
        let mut page = CertificatesPage {
            fetch: FetchState::Idle,
            modal: ModalState::Closed,
            epoch: 1,
            loaded: false,
        };
        page.apply(1, Ok(vec![view(5, "Dawit Assefa", Some(5))]));
        page.modal.open(5);

        page.epoch = 2;
        page.apply(2, Ok(vec![view(9, "Hanan Mohammed", Some(4))]));
        assert_eq!(page.modal, ModalState::Closed);
    }

    #[test]
    fn department_stat_counts_distinct_ids() {
        let records = vec![
            view(1, "A", Some(1)),
            view(2, "B", Some(1)),
            view(3, "C", Some(3)),
            view(4, "D", None),
        ];
        assert_eq!(distinct_departments(&records), 2);
    }
}
