//! View rendering for the memory gallery page.
//!
//! Layout: stats strip, search box, category chips, then one panel per active
//! category (tinted with the category color) and a final panel for
//! uncategorized memories. A detail dialog overlays the selected memory.

use common::model::memory::Memory;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::api::FetchState;
use crate::components::banner::{empty_panel, error_banner, loading_panel};
use crate::components::page_header::PageHeader;
use crate::filter::CategoryFilter;

use super::helpers::{
    distinct_contributors, distinct_years, format_date, group_by_category, panel_background,
    CategoryGroup,
};
use super::messages::Msg;
use super::state::GalleryPage;

pub fn view(component: &GalleryPage, ctx: &Context<GalleryPage>) -> Html {
    let link = ctx.link();

    let body = match &component.fetch {
        FetchState::Idle | FetchState::Loading => loading_panel("Loading memories..."),
        FetchState::Failed(message) => error_banner(message),
        FetchState::Loaded(_) => build_loaded(component, link),
    };

    html! {
        <div class="page gallery-page">
            <PageHeader
                title="Memory Board Gallery"
                subtitle="Relive the moments, challenges, and achievements of our community"
                icon="📸"
            />
            { body }
            {
                match component.selected() {
                    Some(memory) => memory_dialog(memory, link),
                    None => html! {},
                }
            }
        </div>
    }
}

fn build_loaded(component: &GalleryPage, link: &Scope<GalleryPage>) -> Html {
    html! {
        <>
            { build_stats(component) }
            { build_controls(component, link) }
            { build_groups(component, link) }
        </>
    }
}

fn build_stats(component: &GalleryPage) -> Html {
    let memories = component.memories();
    html! {
        <div class="stats-strip">
            { stat(memories.len(), "Total Memories") }
            { stat(component.categories().len(), "Categories") }
            { stat(distinct_contributors(memories), "Contributors") }
            { stat(distinct_years(memories), "Years") }
        </div>
    }
}

fn stat(value: usize, label: &str) -> Html {
    html! {
        <div class="stat">
            <div class="stat-value">{ value }</div>
            <div class="stat-label">{ label }</div>
        </div>
    }
}

fn build_controls(component: &GalleryPage, link: &Scope<GalleryPage>) -> Html {
    let oninput = link.callback(|event: InputEvent| {
        Msg::SearchChanged(event.target_unchecked_into::<HtmlInputElement>().value())
    });

    let all_chip = {
        let active = component.query.category == CategoryFilter::All;
        html! {
            <button
                class={classes!("chip", active.then_some("active"))}
                onclick={link.callback(|_| Msg::SelectCategory(CategoryFilter::All))}
            >
                { "All" }
            </button>
        }
    };

    html! {
        <div class="gallery-controls">
            <input
                class="search-input"
                type="search"
                placeholder="Search memories..."
                value={component.query.search.clone()}
                {oninput}
            />
            <div class="chip-row">
                { all_chip }
                {
                    for component
                        .categories()
                        .iter()
                        .filter(|category| category.is_active)
                        .map(|category| {
                            let id = category.id;
                            let active = component.query.category == CategoryFilter::Only(id);
                            html! {
                                <button
                                    class={classes!("chip", active.then_some("active"))}
                                    style={format!("border-color: {}", category.color)}
                                    onclick={link.callback(move |_| Msg::SelectCategory(CategoryFilter::Only(id)))}
                                >
                                    { format!("{} {}", category.icon, category.name) }
                                </button>
                            }
                        })
                }
            </div>
        </div>
    }
}

fn build_groups(component: &GalleryPage, link: &Scope<GalleryPage>) -> Html {
    let visible: Vec<&Memory> = component.visible();
    if visible.is_empty() {
        return empty_panel("No memories match the current filters.");
    }
    let visible: Vec<Memory> = visible.into_iter().cloned().collect();
    let grouped = group_by_category(component.categories(), &visible);

    html! {
        <>
            { for grouped.groups.iter().filter(|group| !group.memories.is_empty()).map(|group| category_panel(group, link)) }
            {
                if grouped.unassigned.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="category-panel" style={format!("background: {}", panel_background(""))}>
                            <h2>{ "More Memories" }</h2>
                            <div class="card-grid">
                                { for grouped.unassigned.iter().map(|memory| memory_card(memory, link)) }
                            </div>
                        </section>
                    }
                }
            }
        </>
    }
}

fn category_panel(group: &CategoryGroup<'_>, link: &Scope<GalleryPage>) -> Html {
    let category = group.category;
    html! {
        <section
            class="category-panel"
            style={format!("background: {}", panel_background(&category.color))}
        >
            <h2>
                <span class="category-icon">{ &category.icon }</span>
                { &category.name }
                <span class="category-count">{ format!("({})", group.memories.len()) }</span>
            </h2>
            {
                if category.description.is_empty() {
                    html! {}
                } else {
                    html! { <p class="category-description">{ &category.description }</p> }
                }
            }
            <div class="card-grid">
                { for group.memories.iter().map(|memory| memory_card(memory, link)) }
            </div>
        </section>
    }
}

fn memory_card(memory: &Memory, link: &Scope<GalleryPage>) -> Html {
    let id = memory.id;
    html! {
        <div
            class="card memory-card"
            key={id}
            onclick={link.callback(move |_| Msg::ShowMemory(id))}
        >
            {
                match memory.photo_url.as_deref() {
                    Some(photo) => html! { <img class="card-photo" src={photo.to_string()} alt={memory.title.clone()} /> },
                    None => html! { <div class="card-photo placeholder">{ "📷" }</div> },
                }
            }
            <div class="card-body">
                <h3>{ &memory.title }</h3>
                <p class="card-date">{ format_date(&memory.created_at) }</p>
            </div>
        </div>
    }
}

fn memory_dialog(memory: &Memory, link: &Scope<GalleryPage>) -> Html {
    let on_dismiss = link.callback(|_| Msg::DismissMemory);

    html! {
        <div class="modal-backdrop" onclick={on_dismiss.clone()}>
            <div class="modal" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                <div class="modal-header">
                    <h2>{ &memory.title }</h2>
                    <button class="btn btn-close" onclick={on_dismiss}>{ "✕" }</button>
                </div>
                <div class="modal-body">
                    {
                        match memory.photo_url.as_deref() {
                            Some(photo) => html! { <img class="memory-image" src={photo.to_string()} alt={memory.title.clone()} /> },
                            None => html! {},
                        }
                    }
                    {
                        if memory.caption.is_empty() {
                            html! {}
                        } else {
                            html! { <p class="memory-caption">{ &memory.caption }</p> }
                        }
                    }
                    <dl class="memory-meta">
                        <dt>{ "Date" }</dt>
                        <dd>{ format_date(&memory.created_at) }</dd>
                        {
                            match memory.author_name.as_deref() {
                                Some(author) => html! {
                                    <>
                                        <dt>{ "Shared by" }</dt>
                                        <dd>{ author }</dd>
                                    </>
                                },
                                None => html! {},
                            }
                        }
                        {
                            match memory.department_name.as_deref() {
                                Some(department) => html! {
                                    <>
                                        <dt>{ "Department" }</dt>
                                        <dd>{ department }</dd>
                                    </>
                                },
                                None => html! {},
                            }
                        }
                    </dl>
                    {
                        match (memory.category_name.as_deref(), memory.category_color.as_deref()) {
                            (Some(name), color) => html! {
                                <span
                                    class="badge"
                                    style={format!("background: {}", color.unwrap_or("#6B7280"))}
                                >
                                    {
                                        match memory.category_icon.as_deref() {
                                            Some(icon) => format!("{icon} {name}"),
                                            None => name.to_string(),
                                        }
                                    }
                                </span>
                            },
                            (None, _) => html! {},
                        }
                    }
                </div>
            </div>
        </div>
    }
}
