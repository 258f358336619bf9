//! View rendering for the yearbook page.
//!
//! The page is a search box plus department select over a card grid, with a
//! certificate dialog overlay for the selected student. All data states
//! (loading, failed, empty, populated) render explicitly.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::api::FetchState;
use crate::components::banner::{empty_panel, error_banner, loading_panel};
use crate::components::page_header::PageHeader;
use crate::filter::CategoryFilter;
use crate::normalize::StudentView;

use super::dialog::certificate_dialog;
use super::messages::Msg;
use super::state::{department_by_id, YearbookPage, DEPARTMENTS};

pub fn view(component: &YearbookPage, ctx: &Context<YearbookPage>) -> Html {
    let link = ctx.link();

    let body = match &component.fetch {
        FetchState::Idle | FetchState::Loading => {
            loading_panel("Fetching student information and certificates...")
        }
        FetchState::Failed(message) => error_banner(message),
        FetchState::Loaded(_) => build_grid(component, link),
    };

    html! {
        <div class="page yearbook-page">
            <PageHeader
                title="INSA Cyber Talent Yearbook"
                subtitle="Meet the graduates of the INSA Cyber Talent program"
                icon="🎓"
            />
            { build_filter_bar(component, link) }
            { body }
            {
                match component.selected() {
                    Some(student) => certificate_dialog(student, link),
                    None => html! {},
                }
            }
        </div>
    }
}

fn build_filter_bar(component: &YearbookPage, link: &Scope<YearbookPage>) -> Html {
    let oninput = link.callback(|event: InputEvent| {
        Msg::SearchChanged(event.target_unchecked_into::<HtmlInputElement>().value())
    });
    let onchange = link.callback(|event: Event| {
        Msg::DepartmentChanged(event.target_unchecked_into::<HtmlSelectElement>().value())
    });
    let selected = component.query.category.as_value();

    html! {
        <div class="filter-bar">
            <input
                class="search-input"
                type="search"
                placeholder="Search students, departments, or projects..."
                value={component.query.search.clone()}
                {oninput}
            />
            <select class="department-select" value={selected} {onchange}>
                <option value="all" selected={component.query.category == CategoryFilter::All}>
                    { "All Departments" }
                </option>
                {
                    for DEPARTMENTS.iter().map(|department| {
                        let chosen = component.query.category == CategoryFilter::Only(department.id);
                        html! {
                            <option value={department.id.to_string()} selected={chosen}>
                                { format!("{} {}", department.icon, department.name) }
                            </option>
                        }
                    })
                }
            </select>
        </div>
    }
}

fn build_grid(component: &YearbookPage, link: &Scope<YearbookPage>) -> Html {
    let visible = component.visible();
    if visible.is_empty() {
        return empty_panel("No students match the current search.");
    }

    html! {
        <div class="card-grid">
            { for visible.iter().map(|student| student_card(student, link)) }
        </div>
    }
}

fn student_card(view: &StudentView, link: &Scope<YearbookPage>) -> Html {
    let student = &view.student;
    let id = student.id;
    let department = department_by_id(student.department);
    let badge_color = department.map_or("#6B7280", |d| d.color);

    html! {
        <div class="card student-card" key={id}>
            {
                match student.photo_url.as_deref() {
                    Some(photo) => html! { <img class="card-photo" src={photo.to_string()} alt={student.name.clone()} /> },
                    None => html! { <div class="card-photo placeholder">{ "🎓" }</div> },
                }
            }
            <div class="card-body">
                <h3>{ &student.name }</h3>
                <span class="badge" style={format!("background: {badge_color}")}>
                    {
                        match department {
                            Some(department) => format!("{} {}", department.icon, department.name),
                            None => student.department_name.clone().unwrap_or_else(|| "Unassigned".to_string()),
                        }
                    }
                </span>
                <span class="badge badge-id">{ &view.external_id }</span>
                {
                    if student.quote.is_empty() {
                        html! {}
                    } else {
                        html! { <blockquote class="card-quote">{ format!("\u{201c}{}\u{201d}", student.quote) }</blockquote> }
                    }
                }
                {
                    if student.highlight_tagline.is_empty() {
                        html! {}
                    } else {
                        html! { <p class="card-tagline">{ &student.highlight_tagline }</p> }
                    }
                }
                {
                    if student.last_words.is_empty() {
                        html! {}
                    } else {
                        html! { <p class="card-last-words">{ &student.last_words }</p> }
                    }
                }
                <button class="btn btn-primary" onclick={link.callback(move |_| Msg::ShowCertificate(id))}>
                    { "View Certificate" }
                </button>
            </div>
        </div>
    }
}
