//! Admin dashboard page component.

use admin::{DashboardState, DashboardView, StateCell, workflow};
use api::AdminClient;
use booking_core::{ResourceKind, ResourceRef, Schedule, ScheduleId, ScheduleUpdate};
use booking_core::{bus_form_fields, route_form_fields};
use dioxus::prelude::*;

use super::{
    AddForm, BusList, ConfirmDialog, NoticeBanner, RouteList, ScheduleList, UpdateScheduleModal,
};
use crate::auth::{SignInPanel, use_auth};

/// Dashboard state held in a signal, updated by the shared workflows.
#[derive(Clone, Copy)]
struct SignalState(Signal<DashboardState>);

impl StateCell for SignalState {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut state = self.0.write();
        f(&mut state)
    }
}

/// Dashboard for managing buses, routes and schedules.
///
/// Loads all three collections whenever a token becomes available and
/// again after every successful create, delete or update. Tasks are spawned
/// in this component's scope and are cancelled when it unmounts.
#[component]
pub fn AdminDashboard() -> Element {
    let client = use_context::<AdminClient>();
    let mut auth = use_auth();
    let mut state = use_signal(DashboardState::new);

    let reload = {
        let client = client.clone();
        use_callback(move |()| {
            let client = client.clone();
            let token = auth.peek_token();

            spawn(async move {
                let mut cell = SignalState(state);
                workflow::reload(&client, token.as_ref(), &mut cell).await;
            });
        })
    };

    // Load whenever the token changes to a present value.
    use_effect(move || {
        if auth.token().is_some() {
            reload.call(());
        }
    });

    let on_delete_request = move |target: ResourceRef| {
        state.write().request_delete(target);
    };

    let confirm_delete = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            let token = auth.peek_token();

            spawn(async move {
                let mut cell = SignalState(state);
                workflow::delete_confirmed(&client, token.as_ref(), &mut cell).await;
            });
        }
    };

    let save_schedule = {
        let client = client.clone();
        move |(id, update): (ScheduleId, ScheduleUpdate)| {
            let client = client.clone();
            let token = auth.peek_token();

            spawn(async move {
                let mut cell = SignalState(state);
                workflow::save_schedule(&client, token.as_ref(), id, &update, &mut cell).await;
            });
        }
    };

    if auth.token().is_none() {
        return rsx! {
            div { class: "page",
                header { class: "page-header",
                    h1 { "Admin Dashboard" }
                }
                SignInPanel {}
            }
        };
    }

    let snapshot = state.read().clone();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Admin Dashboard" }
                button {
                    class: "btn btn-small",
                    onclick: move |_| auth.sign_out(),
                    "Sign out"
                }
            }

            if let Some(notice) = snapshot.notice().cloned() {
                NoticeBanner {
                    notice,
                    on_dismiss: move |_| {
                        state.write().dismiss_notice();
                    },
                }
            }

            match snapshot.view() {
                DashboardView::Loading => rsx! {
                    div { class: "loading", "Loading admin data..." }
                },
                DashboardView::Failed(message) => rsx! {
                    div { class: "error-message", "Error: {message}" }
                },
                DashboardView::Ready => rsx! {
                    div { class: "form-grid",
                        AddForm {
                            kind: ResourceKind::Bus,
                            fields: bus_form_fields(),
                            on_created: move |_| reload.call(()),
                        }
                        AddForm {
                            kind: ResourceKind::Route,
                            fields: route_form_fields(),
                            on_created: move |_| reload.call(()),
                        }
                        AddForm {
                            kind: ResourceKind::Schedule,
                            fields: snapshot.schedule_form_fields(),
                            on_created: move |_| reload.call(()),
                        }
                    }

                    div { class: "manage-grid",
                        BusList {
                            buses: snapshot.buses().to_vec(),
                            on_delete: on_delete_request,
                        }
                        RouteList {
                            routes: snapshot.routes().to_vec(),
                            on_delete: on_delete_request,
                        }
                        ScheduleList {
                            schedules: snapshot.schedules().to_vec(),
                            on_edit: move |schedule: Schedule| state.write().begin_edit(schedule),
                            on_delete: on_delete_request,
                        }
                    }
                },
            }

            if let Some(target) = snapshot.pending_delete() {
                ConfirmDialog {
                    message: target.kind().confirm_message(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| state.write().decline_delete(),
                }
            }

            if let Some(schedule) = snapshot.editing().cloned() {
                UpdateScheduleModal {
                    key: "{schedule.id}",
                    schedule,
                    on_close: move |_| state.write().cancel_edit(),
                    on_save: save_schedule,
                }
            }
        }
    }
}
