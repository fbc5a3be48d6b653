//! Edit modal for an existing schedule.

use booking_core::{FormValues, Schedule, ScheduleId, ScheduleUpdate, fields};
use dioxus::prelude::*;

/// Props for UpdateScheduleModal component.
#[derive(Props, Clone, PartialEq)]
pub struct UpdateScheduleModalProps {
    /// Schedule being edited; the inputs start from its values.
    pub schedule: Schedule,
    /// Callback when the modal is closed without saving.
    pub on_close: EventHandler<()>,
    /// Callback with the parsed update when save is clicked.
    pub on_save: EventHandler<(ScheduleId, ScheduleUpdate)>,
}

const EDITABLE: [(&str, &str, &str); 4] = [
    (fields::DEPARTURE_TIME, "Departure Time", "datetime-local"),
    (fields::ARRIVAL_TIME, "Arrival Time", "datetime-local"),
    (fields::FARE, "Fare", "number"),
    (fields::AVAILABLE_SEATS, "Available Seats", "number"),
];

/// Modal for changing the times, fare and seats of a schedule.
///
/// Input values that do not parse are reported inside the modal and never
/// reach the backend.
#[component]
pub fn UpdateScheduleModal(props: UpdateScheduleModalProps) -> Element {
    let id = props.schedule.id;
    let initial = props.schedule.clone();
    let mut values = use_signal(move || ScheduleUpdate::form_values(&initial));
    let mut error = use_signal(|| None::<String>);

    let on_save = props.on_save;
    let on_close = props.on_close;

    let save = move |_| {
        let current: FormValues = values();
        match ScheduleUpdate::from_form(&current) {
            Ok(update) => {
                error.set(None);
                on_save.call((id, update));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                h3 { class: "card-title", "Update Schedule" }
                p { class: "hint", "{props.schedule.route_label()} | Bus: {props.schedule.reg_number}" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                for (name, label, input_type) in EDITABLE {
                    {
                        let current = values.read().get(name).to_string();
                        rsx! {
                            div { class: "form-group", key: "{name}",
                                label { "{label}" }
                                input {
                                    r#type: "{input_type}",
                                    value: "{current}",
                                    oninput: move |e| values.write().set(name, e.value()),
                                }
                            }
                        }
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: save,
                        "Save Changes"
                    }
                }
            }
        }
    }
}
