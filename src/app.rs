//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::net::auth_client::AuthClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::SessionState;
use crate::util::{bootstrap, storage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component: meta context, router, and routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/panel-client.css"/>
        <Title text="Panel de control"/>

        <Router>
            <AuthProvider/>
        </Router>
    }
}

/// Builds the process-wide auth client and mounts the routes under it.
///
/// Lives inside the router so navigation can be handed to the client as
/// a plain callback. The session is optimistically seeded from the
/// stored identity; protected routes revalidate it before trusting it.
#[component]
fn AuthProvider() -> impl IntoView {
    let navigate = use_navigate();
    let session = RwSignal::new(SessionState::seeded(storage::load_identity()));
    let client = AuthClient::new(
        session,
        Callback::new(move |url: String| navigate(&url, NavigateOptions::default())),
    );
    provide_context(client);
    bootstrap::install(client);

    view! {
        <Routes fallback=|| "Página no encontrada.".into_view()>
            <Route path=StaticSegment("login") view=LoginPage/>
            <Route path=StaticSegment("") view=DashboardPage/>
            <Route path=StaticSegment("dashboard") view=DashboardPage/>
        </Routes>
    }
}
