//! Authentication context consumed by the admin pages.

use api::AuthToken;
use dioxus::prelude::*;

/// The signed-in administrator's token, shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    token: Signal<Option<AuthToken>>,
}

impl AuthContext {
    /// Current token, subscribing the caller to changes.
    pub fn token(&self) -> Option<AuthToken> {
        self.token.read().clone()
    }

    /// Current token without subscribing.
    pub fn peek_token(&self) -> Option<AuthToken> {
        self.token.peek().clone()
    }

    pub fn sign_in(&mut self, token: AuthToken) {
        tracing::info!("Admin signed in");
        self.token.set(Some(token));
    }

    pub fn sign_out(&mut self) {
        tracing::info!("Admin signed out");
        self.token.set(None);
    }
}

/// Provide the auth context to all descendants.
pub fn use_auth_provider(initial: impl FnOnce() -> Option<AuthToken>) -> AuthContext {
    use_context_provider(|| AuthContext {
        token: Signal::new(initial()),
    })
}

/// Get the auth context provided by an ancestor.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Minimal token entry for when no token is present.
#[component]
pub fn SignInPanel() -> Element {
    let mut auth = use_auth();
    let mut token = use_signal(String::new);

    let submit = move |_| {
        let value = token().trim().to_string();
        if !value.is_empty() {
            auth.sign_in(AuthToken::new(value));
            token.set(String::new());
        }
    };

    rsx! {
        div { class: "sign-in-panel",
            h2 { "Sign in required" }
            p { class: "hint", "Paste an administrator token to manage buses, routes and schedules." }
            div { class: "form-group",
                label { "Bearer token" }
                input {
                    r#type: "password",
                    value: "{token}",
                    oninput: move |e| token.set(e.value()),
                }
            }
            button {
                class: "btn btn-primary",
                disabled: token().trim().is_empty(),
                onclick: submit,
                "Sign in"
            }
        }
    }
}
