//! Protected dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It installs the session
//! guard on entry, so a stale local identity gets revalidated against
//! the backend before the page is trusted.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth_client::AuthClient;
use crate::net::types::UserState;
use crate::util::guard;

/// URL this page registers with the session guard as its return target.
const DASHBOARD_URL: &str = "/dashboard";

/// Header greeting for the current identity.
fn greeting(user: Option<&UserState>) -> String {
    match user {
        Some(user) => format!("Hola, {}", user.display_name),
        None => "Hola".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<AuthClient>();
    let session = client.session();
    let navigate = use_navigate();

    guard::install_session_guard(client, DASHBOARD_URL, navigate.clone());

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                client.logout().await;
                navigate("/login", NavigateOptions::default());
            });
        }
    };

    view! {
        <Show
            when=move || session.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>"Redirigiendo al inicio de sesión..."</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Panel de control"</h1>
                    <div class="dashboard-page__user">
                        <span>{move || greeting(session.get().user.as_ref())}</span>
                        <button class="btn btn--secondary" on:click=on_logout>
                            "Cerrar sesión"
                        </button>
                    </div>
                </header>

                <main class="dashboard-page__content">
                    <div class="card">
                        <h2>"Sesión activa"</h2>
                        <p>
                            "Usuario: "
                            <code>{move || session.get().user.map(|u| u.username).unwrap_or_default()}</code>
                        </p>
                        <p>
                            "Nombre: "
                            <code>{move || session.get().user.map(|u| u.display_name).unwrap_or_default()}</code>
                        </p>
                        <p class="card__hint">
                            "El nombre de usuario se almacena en localStorage. "
                            "El token de sesión viaja en una cookie HttpOnly invisible para JavaScript."
                        </p>
                    </div>
                </main>
            </div>
        </Show>
    }
}
