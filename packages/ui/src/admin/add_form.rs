//! Generic add-form component.

use api::AdminClient;
use booking_core::{FieldKind, FormField, FormValues, ResourceKind};
use dioxus::prelude::*;

use crate::auth::use_auth;

/// Props for AddForm component.
#[derive(Props, Clone, PartialEq)]
pub struct AddFormProps {
    /// Kind of resource the form creates.
    pub kind: ResourceKind,
    /// Field schema to render.
    pub fields: Vec<FormField>,
    /// Callback when the resource is created.
    pub on_created: EventHandler<()>,
}

/// Form component rendering a field schema and creating the resource.
///
/// Creation errors are shown inside the form.
#[component]
pub fn AddForm(props: AddFormProps) -> Element {
    let client = use_context::<AdminClient>();
    let auth = use_auth();
    let mut values = use_signal(FormValues::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let kind = props.kind;
    let on_created = props.on_created;

    let submit = move |_| {
        let client = client.clone();
        let token = auth.peek_token();
        let form_values = values();

        spawn(async move {
            submitting.set(true);
            error.set(None);

            match admin::actions::create_from_form(&client, token.as_ref(), kind, &form_values)
                .await
            {
                Ok(()) => {
                    values.write().clear();
                    on_created.call(());
                }
                Err(e) => {
                    tracing::warn!(%kind, error = %e, "Create failed");
                    error.set(Some(e.to_string()));
                }
            }

            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card add-form",
            h3 { class: "card-title", "Add {kind.title()}" }

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            for field in props.fields.iter() {
                {
                    let name = field.name;
                    let label = field.label;
                    let current = values.read().get(name).to_string();

                    match &field.kind {
                        FieldKind::Select { default_option, options } => rsx! {
                            div { class: "form-group", key: "{name}",
                                label { "{label}" }
                                select {
                                    value: "{current}",
                                    onchange: move |e| values.write().set(name, e.value()),

                                    option { value: "", "{default_option}" }
                                    for opt in options.iter() {
                                        option { key: "{opt.value}", value: "{opt.value}", "{opt.label}" }
                                    }
                                }
                            }
                        },
                        other => {
                            let input_type = other.input_type();
                            let placeholder = field.placeholder.unwrap_or_default();
                            rsx! {
                                div { class: "form-group", key: "{name}",
                                    label { "{label}" }
                                    input {
                                        r#type: "{input_type}",
                                        placeholder: "{placeholder}",
                                        value: "{current}",
                                        oninput: move |e| values.write().set(name, e.value()),
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: submitting(),
                    onclick: submit,
                    if submitting() { "Adding..." } else { "Add {kind.title()}" }
                }
            }
        }
    }
}
