//! Tribute wall: existing faculty tributes above a submission form.
//!
//! The form POSTs a [`NewTribute`] and, on success, resets itself, shows a
//! toast, and prepends the created tribute to the wall. A failed submission
//! keeps the form contents and shows the error as a toast.

use common::model::faculty::FacultyTribute;
use common::model::paginated::Paginated;
use common::requests::NewTribute;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, FetchState, HttpError};
use crate::components::banner::{empty_panel, error_banner, loading_panel};
use crate::components::page_header::PageHeader;
use crate::config::Config;
use crate::toast::show_toast;

#[derive(Properties, PartialEq, Clone)]
pub struct TributeProps {
    pub config: Config,
}

/// Form fields, edited in place until submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TributeForm {
    pub faculty_name: String,
    pub department: String,
    pub tribute_text: String,
    pub submitted_by: String,
}

impl TributeForm {
    /// A tribute needs at least a faculty name and a message.
    pub fn is_valid(&self) -> bool {
        !self.faculty_name.trim().is_empty() && !self.tribute_text.trim().is_empty()
    }

    pub fn to_request(&self) -> NewTribute {
        NewTribute {
            faculty_name: self.faculty_name.trim().to_string(),
            department: self.department.trim().to_string(),
            tribute_text: self.tribute_text.trim().to_string(),
            submitted_by: self.submitted_by.trim().to_string(),
        }
    }
}

pub enum Field {
    FacultyName,
    Department,
    TributeText,
    SubmittedBy,
}

pub enum Msg {
    Loaded {
        epoch: u32,
        result: Result<Vec<FacultyTribute>, HttpError>,
    },
    Edit(Field, String),
    Submit,
    Submitted(Result<FacultyTribute, HttpError>),
}

pub struct TributePage {
    fetch: FetchState<Vec<FacultyTribute>>,
    form: TributeForm,
    submitting: bool,
    epoch: u32,
    loaded: bool,
}

impl Component for TributePage {
    type Message = Msg;
    type Properties = TributeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            fetch: FetchState::Idle,
            form: TributeForm::default(),
            submitting: false,
            epoch: 0,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded { epoch, result } => {
                if epoch != self.epoch {
                    return false;
                }
                self.fetch = match result {
                    Ok(tributes) => FetchState::Loaded(tributes),
                    Err(err) => FetchState::Failed(err.to_string()),
                };
                true
            }
            Msg::Edit(field, value) => {
                match field {
                    Field::FacultyName => self.form.faculty_name = value,
                    Field::Department => self.form.department = value,
                    Field::TributeText => self.form.tribute_text = value,
                    Field::SubmittedBy => self.form.submitted_by = value,
                }
                true
            }
            Msg::Submit => {
                if self.submitting || !self.form.is_valid() {
                    return false;
                }
                self.submitting = true;
                let request = self.form.to_request();
                let link = ctx.link().clone();
                let config = ctx.props().config.clone();
                spawn_local(async move {
                    let client = ApiClient::from_config(&config);
                    let result = client
                        .post_json::<NewTribute, FacultyTribute>("/faculty/", &request)
                        .await;
                    link.send_message(Msg::Submitted(result));
                });
                true
            }
            Msg::Submitted(result) => {
                self.submitting = false;
                match result {
                    Ok(tribute) => {
                        show_toast("Thank you! Your tribute has been submitted.");
                        self.form = TributeForm::default();
                        if let FetchState::Loaded(tributes) = &mut self.fetch {
                            tributes.insert(0, tribute);
                        }
                    }
                    Err(err) => {
                        show_toast(&format!("Could not submit the tribute: {err}"));
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let wall = match &self.fetch {
            FetchState::Idle | FetchState::Loading => loading_panel("Loading tributes..."),
            FetchState::Failed(message) => error_banner(message),
            FetchState::Loaded(tributes) if tributes.is_empty() => {
                empty_panel("No tributes yet. Be the first to thank a mentor.")
            }
            FetchState::Loaded(tributes) => html! {
                <div class="card-grid">
                    { for tributes.iter().map(tribute_card) }
                </div>
            },
        };

        html! {
            <div class="page tribute-page">
                <PageHeader
                    title="Faculty Tribute Wall"
                    subtitle="Thank the mentors and instructors who shaped this journey"
                    icon="💐"
                />
                { wall }
                { build_form(self, link) }
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
                    .get_json::<Paginated<FacultyTribute>>("/faculty/")
                    .await
                    .map(|page| page.results);
                link.send_message(Msg::Loaded { epoch, result });
            });
        }
    }
}

fn tribute_card(tribute: &FacultyTribute) -> Html {
    html! {
        <div class="card tribute-card" key={tribute.id}>
            {
                match tribute.photo_url.as_deref() {
                    Some(photo) => html! { <img class="card-photo" src={photo.to_string()} alt={tribute.name.clone()} /> },
                    None => html! { <div class="card-photo placeholder">{ "💐" }</div> },
                }
            }
            <div class="card-body">
                <h3>{ &tribute.name }</h3>
                {
                    if tribute.position.is_empty() {
                        html! {}
                    } else {
                        html! { <p class="card-position">{ &tribute.position }</p> }
                    }
                }
                {
                    match tribute.department_name.as_deref() {
                        Some(department) => html! { <p class="card-department">{ department }</p> },
                        None => html! {},
                    }
                }
                <p class="tribute-message">{ &tribute.message }</p>
                {
                    match tribute.years_of_service {
                        Some(years) => html! { <p class="tribute-years">{ format!("{years} years of service") }</p> },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}

fn build_form(page: &TributePage, link: &Scope<TributePage>) -> Html {
    let text_input = |field: fn() -> Field| {
        link.callback(move |event: InputEvent| {
            Msg::Edit(field(), event.target_unchecked_into::<HtmlInputElement>().value())
        })
    };
    let on_text = link.callback(|event: InputEvent| {
        Msg::Edit(
            Field::TributeText,
            event.target_unchecked_into::<HtmlTextAreaElement>().value(),
        )
    });

    html! {
        <form
            class="tribute-form"
            onsubmit={link.callback(|event: SubmitEvent| {
                event.prevent_default();
                Msg::Submit
            })}
        >
            <h2>{ "Leave a Tribute" }</h2>
            <input
                type="text"
                placeholder="Faculty name"
                value={page.form.faculty_name.clone()}
                oninput={text_input(|| Field::FacultyName)}
            />
            <input
                type="text"
                placeholder="Department"
                value={page.form.department.clone()}
                oninput={text_input(|| Field::Department)}
            />
            <textarea
                placeholder="Your message of thanks"
                value={page.form.tribute_text.clone()}
                oninput={on_text}
            />
            <input
                type="text"
                placeholder="Your name"
                value={page.form.submitted_by.clone()}
                oninput={text_input(|| Field::SubmittedBy)}
            />
            <button
                type="submit"
                class="btn btn-primary"
                disabled={page.submitting || !page.form.is_valid()}
            >
                { if page.submitting { "Submitting..." } else { "Submit Tribute" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_requires_a_name_and_a_message() {
        let mut form = TributeForm::default();
        assert!(!form.is_valid());

        form.faculty_name = "Dr. Abebe".to_string();
        assert!(!form.is_valid());

        form.tribute_text = "Thank you for everything.".to_string();
        assert!(form.is_valid());

        form.faculty_name = "   ".to_string();
        assert!(!form.is_valid());
    }

    #[test]
    fn request_payload_is_trimmed() {
        let form = TributeForm {
            faculty_name: "  Dr. Abebe  ".to_string(),
            department: " Cyber Security ".to_string(),
            tribute_text: " Thank you. ".to_string(),
            submitted_by: " Sara ".to_string(),
        };
        let request = form.to_request();
        assert_eq!(request.faculty_name, "Dr. Abebe");
        assert_eq!(request.department, "Cyber Security");
        assert_eq!(request.tribute_text, "Thank you.");
        assert_eq!(request.submitted_by, "Sara");
    }
}
