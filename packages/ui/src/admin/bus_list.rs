//! Bus list component.

use booking_core::{Bus, ResourceRef};
use dioxus::prelude::*;

/// Props for BusList component.
#[derive(Props, Clone, PartialEq)]
pub struct BusListProps {
    /// Buses to display.
    pub buses: Vec<Bus>,
    /// Callback when delete is clicked.
    pub on_delete: EventHandler<ResourceRef>,
}

/// "Manage Buses" list with a delete action per bus.
#[component]
pub fn BusList(props: BusListProps) -> Element {
    rsx! {
        section { class: "manage-section",
            h2 { class: "section-title", "Manage Buses" }
            div { class: "card scroll-panel",
                if props.buses.is_empty() {
                    div { class: "empty-state",
                        p { "No buses yet" }
                    }
                } else {
                    ul { class: "item-list",
                        for bus in props.buses.iter() {
                            {
                                let target = ResourceRef::Bus(bus.id);
                                rsx! {
                                    li { class: "item-row", key: "{bus.id}",
                                        div {
                                            span { class: "item-title", "{bus.label()}" }
                                            span { class: "item-detail", "{bus.seats_label()}" }
                                        }
                                        button {
                                            class: "btn btn-small btn-danger",
                                            onclick: move |_| props.on_delete.call(target),
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
