//! Update function for the yearbook page.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`, mutates
//! the state, and returns whether the view should re-render. Fetch results
//! are applied through the state's epoch guard; normalization warnings are
//! logged to the console and the partial collection renders anyway.

use gloo_console::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::export::{ExportOutcome, Exporter};
use crate::toast::show_toast;

use super::messages::Msg;
use super::state::YearbookPage;

pub fn update(component: &mut YearbookPage, ctx: &Context<YearbookPage>, msg: Msg) -> bool {
    match msg {
        Msg::StudentsLoaded { epoch, result } => {
            let result = result.map(|normalized| {
                for warning in &normalized.warnings {
                    warn!(format!("normalize: {}", warning.message));
                }
                normalized.records
            });
            component.apply_students(epoch, result)
        }
        Msg::SearchChanged(term) => {
            component.set_search(term);
            true
        }
        Msg::DepartmentChanged(raw) => {
            component.set_department(&raw);
            true
        }
        Msg::ShowCertificate(id) => {
            component.modal.open(id);
            true
        }
        Msg::DismissCertificate => {
            component.modal.dismiss();
            true
        }
        Msg::DownloadCertificate(id) => {
            if let Some(student) = component.student_by_id(id) {
                let url = student.certificate_url.clone();
                let external_id = student.external_id.clone();
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
                ExportOutcome::Saved(filename) => {
                    show_toast(&format!("Saved {filename}."));
                }
                ExportOutcome::OpenedDirectly(err) => {
                    show_toast(&format!(
                        "{err}. Opened the certificate in a new tab instead."
                    ));
                }
            }
            false
        }
    }
}
