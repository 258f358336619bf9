//! Shared loading / error / empty panels used by every page.
//!
//! A failed fetch always ends in `error_banner`; nothing in the client
//! retries automatically or falls back to canned sample data.

use yew::{html, Html};

pub fn loading_panel(message: &str) -> Html {
    html! {
        <div class="panel panel-loading">
            <div class="spinner" />
            <p>{ message }</p>
        </div>
    }
}

pub fn error_banner(message: &str) -> Html {
    html! {
        <div class="panel panel-error">
            <p class="panel-error-title">{ "Something went wrong" }</p>
            <p>{ message }</p>
        </div>
    }
}

pub fn empty_panel(message: &str) -> Html {
    html! {
        <div class="panel panel-empty">
            <p>{ message }</p>
        </div>
    }
}
