use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, PartialEq, Clone)]
pub struct YearbookProps {
    /// Endpoint configuration, built once by the `App` root.
    pub config: Config,
}
