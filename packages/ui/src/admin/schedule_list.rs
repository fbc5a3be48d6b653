//! Schedule list component.

use booking_core::{ResourceRef, Schedule};
use dioxus::prelude::*;

/// Props for ScheduleList component.
#[derive(Props, Clone, PartialEq)]
pub struct ScheduleListProps {
    /// Schedules to display.
    pub schedules: Vec<Schedule>,
    /// Callback when edit is clicked.
    pub on_edit: EventHandler<Schedule>,
    /// Callback when delete is clicked.
    pub on_delete: EventHandler<ResourceRef>,
}

/// "Manage Schedules" list with edit and delete actions.
#[component]
pub fn ScheduleList(props: ScheduleListProps) -> Element {
    rsx! {
        section { class: "manage-section",
            h2 { class: "section-title", "Manage Schedules" }
            div { class: "card scroll-panel",
                if props.schedules.is_empty() {
                    div { class: "empty-state",
                        p { "No schedules yet" }
                    }
                } else {
                    ul { class: "item-list",
                        for schedule in props.schedules.iter() {
                            ScheduleRow {
                                key: "{schedule.id}",
                                schedule: schedule.clone(),
                                on_edit: props.on_edit,
                                on_delete: props.on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ScheduleRow(
    schedule: Schedule,
    on_edit: EventHandler<Schedule>,
    on_delete: EventHandler<ResourceRef>,
) -> Element {
    let target = ResourceRef::Schedule(schedule.id);
    let edited = schedule.clone();

    rsx! {
        li { class: "item-row",
            div { class: "schedule-summary",
                span { class: "item-title", "{schedule.route_label()}" }
                span { class: "item-detail", "Bus: {schedule.reg_number}" }
                span { class: "item-detail", "Time: {schedule.departure_label()}" }
                span { class: "item-detail", "{schedule.fare_label()}" }
            }
            div { class: "row-actions",
                button {
                    class: "btn btn-small",
                    onclick: move |_| on_edit.call(edited.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-small btn-danger",
                    onclick: move |_| on_delete.call(target),
                    "Delete"
                }
            }
        }
    }
}
