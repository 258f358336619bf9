use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, PartialEq, Clone)]
pub struct GalleryProps {
    pub config: Config,
}
