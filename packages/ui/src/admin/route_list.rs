//! Route list component.

use booking_core::{ResourceRef, Route};
use dioxus::prelude::*;

/// "Manage Routes" list with a delete action per route.
#[component]
pub fn RouteList(routes: Vec<Route>, on_delete: EventHandler<ResourceRef>) -> Element {
    rsx! {
        section { class: "manage-section",
            h2 { class: "section-title", "Manage Routes" }
            div { class: "card scroll-panel",
                if routes.is_empty() {
                    div { class: "empty-state",
                        p { "No routes yet" }
                    }
                } else {
                    ul { class: "item-list",
                        for route in routes.iter() {
                            {
                                let target = ResourceRef::Route(route.id);
                                rsx! {
                                    li { class: "item-row", key: "{route.id}",
                                        span { class: "item-title", "{route.label()}" }
                                        button {
                                            class: "btn btn-small btn-danger",
                                            onclick: move |_| on_delete.call(target),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
