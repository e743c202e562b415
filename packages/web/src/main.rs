use dioxus::prelude::*;

use ui::{TestimonialsWidget, WidgetConfig};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const WIDGET_TOML: &str = include_str!("../widget.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the embedded widget config, falling back to defaults.
fn load_config() -> WidgetConfig {
    match WidgetConfig::from_toml(WIDGET_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Invalid {}, using defaults: {}",
                WidgetConfig::filename(),
                e
            );
            WidgetConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        header {
            h1 { "Mergington High School" }
            h2 { "Extracurricular Activities" }
        }

        main {
            TestimonialsWidget { config }
        }
    }
}
