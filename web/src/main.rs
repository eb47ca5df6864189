use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::favicon;
use ui::dashboard::use_dashboard_provider;
use ui::views::{Automations, Dashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/automations")]
    Automations {},
}

// Shared theme, inlined so web and desktop render from the same file.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_automations(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Automations {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::init(Level::INFO).ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        automations: nav_automations,
    });

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    let dashboard = use_dashboard_provider();
    let site = dashboard.site.read().clone();
    let icon = favicon::favicon_data_uri(&site.favicon_emoji);

    rsx! {
        document::Title { "{site.title}" }
        document::Link { rel: "icon", href: "{icon}" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
