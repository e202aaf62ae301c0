pub mod pages;

use dioxus::prelude::*;
use grader_core::{Config, FormClient};
use pages::{AppLayout, AssignmentDetail, GroupTags};
use tracing::{error, info};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Modal definitions compiled into the bundle
const GRADER_YAML: &str = include_str!("../config/grader.yaml");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/courses/:course_id/assignments/:assignment_id")]
    AssignmentDetail { course_id: String, assignment_id: String },
    #[route("/courses/:course_id/assignments/:assignment_id/groups/:group_id?:role_id")]
    GroupTags {
        course_id: String,
        assignment_id: String,
        group_id: String,
        role_id: Option<String>,
    },
}

/// Parse the bundled config, falling back to the built-in modals.
pub fn load_config() -> Config {
    match Config::from_yaml_str(GRADER_YAML) {
        Ok(config) => {
            info!("Loaded {} modal definitions", config.modals.len());
            config
        }
        Err(e) => {
            error!("Bundled config is invalid, using defaults: {e}");
            Config::default()
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(|| FormClient::from_config(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
