//! Certificate dialog for the selected student.

use yew::html::Scope;
use yew::prelude::*;

use crate::normalize::StudentView;

use super::messages::Msg;
use super::state::YearbookPage;

/// Modal overlay showing the certificate image, the verification link, and a
/// download button. Clicking the backdrop or the close button dismisses it.
pub fn certificate_dialog(view: &StudentView, link: &Scope<YearbookPage>) -> Html {
    let id = view.student.id;
    let on_dismiss = link.callback(|_| Msg::DismissCertificate);
    let on_download = link.callback(move |_| Msg::DownloadCertificate(id));

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
                        alt={format!("Certificate for {}", view.student.name)}
                    />
                    <div class="verification-panel">
                        <span class="badge badge-id">{ &view.external_id }</span>
                        <a href={view.verification_url.clone()} target="_blank" rel="noopener">
                            { "Verify this certificate" }
                        </a>
                    </div>
                </div>
                <div class="modal-actions">
                    <button class="btn btn-primary" onclick={on_download}>
                        { "Download Certificate" }
                    </button>
                </div>
            </div>
        </div>
    }
}
