use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    /// Emoji token shown next to the title.
    #[prop_or_default]
    pub icon: AttrValue,
}

/// Shared page header: icon, title, subtitle.
pub struct PageHeader;

impl Component for PageHeader {
    type Message = ();
    type Properties = PageHeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <header class="page-header">
                <h1>
                    <span class="page-header-icon">{ props.icon.clone() }</span>
                    { props.title.clone() }
                </h1>
                <p class="page-header-subtitle">{ props.subtitle.clone() }</p>
            </header>
        }
    }
}
