use admin::Notice;
use dioxus::prelude::*;

/// Dismissable result message after a delete or update.
#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let class = if notice.is_error() {
        "notice notice-error"
    } else {
        "notice notice-info"
    };

    rsx! {
        div { class: "{class}", role: "status",
            span { "{notice.message()}" }
            button {
                class: "btn btn-small",
                onclick: move |_| on_dismiss.call(()),
                "OK"
            }
        }
    }
}
