// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use api::{AdminClient, ApiConfig, AuthToken};
use dioxus::prelude::*;

use ui::admin::AdminDashboard;
use ui::use_auth_provider;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},

    // Admin routes with sidebar navigation
    #[layout(AdminLayout)]
        #[route("/admin")]
        Admin {},
}

const ADMIN_CSS: Asset = asset!("/assets/admin.css");

fn main() {
    #[cfg(feature = "desktop")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        tracing::info!(base_url = %config.base_url, "Starting admin dashboard");
        AdminClient::new(config)
    });
    use_auth_provider(AuthToken::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: ADMIN_CSS }

        Router::<Route> {}
    }
}

/// Layout for admin routes with sidebar navigation.
#[component]
fn AdminLayout() -> Element {
    rsx! {
        div { class: "admin-layout",
            aside { class: "admin-sidebar",
                div { class: "sidebar-header",
                    h1 { class: "sidebar-logo", "Bus Booking" }
                }
                nav { class: "sidebar-nav",
                    div { class: "nav-section",
                        span { class: "nav-section-title", "Menu" }
                        Link {
                            to: Route::Admin {},
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "▦" }
                            span { "Dashboard" }
                        }
                    }
                }
            }

            main { class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect / to /admin.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.push(Route::Admin {});
    });
    rsx! {}
}

/// Dashboard page.
#[component]
fn Admin() -> Element {
    rsx! {
        AdminDashboard {}
    }
}
