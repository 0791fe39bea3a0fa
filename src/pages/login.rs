//! Login page with the username/password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::auth_client::AuthClient;
use crate::net::types::LoginPayload;

/// Banner shown when the guard bounced the user here after expiry.
const SESSION_EXPIRED_MESSAGE: &str = "Tu sesión expiró. Inicia sesión de nuevo.";

const USERNAME_MIN_CHARS: usize = 2;
const PASSWORD_MIN_CHARS: usize = 4;

/// Validate raw form input before it becomes a login payload.
fn validate_login_input(username: &str, password: &str) -> Result<LoginPayload, &'static str> {
    if username.chars().count() < USERNAME_MIN_CHARS {
        return Err("El usuario debe tener al menos 2 caracteres.");
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err("La contraseña debe tener al menos 4 caracteres.");
    }
    Ok(LoginPayload {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Expired-session banner text for the `reason` query parameter.
fn expired_banner(reason: Option<&str>) -> Option<&'static str> {
    (reason == Some("expired")).then_some(SESSION_EXPIRED_MESSAGE)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<AuthClient>();
    let session = client.session();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let expired_message = move || expired_banner(query.get().get("reason").as_deref());
    // Local validation messages take precedence over the last login error.
    let error_message =
        move || form_error.get().map(str::to_owned).or_else(|| session.get().error);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get_untracked().loading {
            return;
        }
        match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(payload) => {
                form_error.set(None);
                client.clear_error();
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    // Failure is already recorded in the session state.
                    let _ = client.login(&payload).await;
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = payload;
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Panel de control"</h1>
                <p class="login-card__subtitle">"Inicia sesión para continuar"</p>
                <Show when=move || expired_message().is_some()>
                    <p class="login-message login-message--expired">
                        {move || expired_message().unwrap_or_default()}
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Usuario"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || session.get().loading>
                        {move || if session.get().loading { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
                <Show when=move || error_message().is_some()>
                    <p class="login-message login-message--error">
                        {move || error_message().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
