//! Startup CSRF priming.
//!
//! Fires one credentialed GET so the backend drops the `XSRF-TOKEN`
//! cookie before the first state-changing request. Bounded and fully
//! swallowed: a missing cookie only means the first mutating request
//! gets rejected server-side, which is an acceptable degraded mode
//! rather than a startup failure. SSR is a no-op.

use crate::net::auth_client::AuthClient;

/// Upper bound on the priming wait; startup proceeds regardless after it.
pub const CSRF_BOOT_TIMEOUT_MS: u32 = 3_000;

/// Kick off CSRF priming at application startup without blocking it.
pub fn install(client: AuthClient) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(prime_csrf(client));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
    }
}

#[cfg(feature = "hydrate")]
async fn prime_csrf(client: AuthClient) {
    use futures::FutureExt;

    let request = client.initialize_csrf().fuse();
    let deadline = gloo_timers::future::TimeoutFuture::new(CSRF_BOOT_TIMEOUT_MS).fuse();
    futures::pin_mut!(request, deadline);
    futures::select! {
        outcome = request => {
            if let Err(error) = outcome {
                leptos::logging::warn!("csrf bootstrap skipped: {error}");
            }
        }
        () = deadline => {
            leptos::logging::warn!("csrf bootstrap skipped: no response within {CSRF_BOOT_TIMEOUT_MS}ms");
        }
    }
}
