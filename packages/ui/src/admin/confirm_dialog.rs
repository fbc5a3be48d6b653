use dioxus::prelude::*;

/// In-page yes/no confirmation.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal confirm-dialog", role: "alertdialog",
                p { "{message}" }
                div { class: "form-actions",
                    button {
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
