use dioxus::prelude::*;

use ui::i18n;
use ui::views::{About, Activities, Comparison, Guides, HiddenGems, Home, NotFound, Rentals};
use ui::SiteLayout;

// Paths must match `ui::core::pages::Page::url`; see the test below.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
        #[route("/home")]
        Home {},
        #[route("/comparison")]
        Comparison {},
        #[route("/rentals")]
        Rentals {},
        #[route("/guides")]
        Guides {},
        #[route("/hiddengems")]
        HiddenGems {},
        #[route("/activities")]
        Activities {},
        #[route("/about")]
        About {},
        #[redirect("/", || Route::Home {})]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Global reactive language code; LocaleSwitcher writes it, views read it.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        Router::<Route> {}
    }
}

/// Web wrapper around the shared `SiteLayout`, feeding it the live route path.
#[component]
fn WebLayout() -> Element {
    let route: Route = use_route();
    rsx! {
        SiteLayout { current_path: route.to_string(),
            Outlet::<Route> {}
        }
    }
}
