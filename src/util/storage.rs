//! Browser localStorage mirror of the last known identity.
//!
//! TRADE-OFFS
//! ==========
//! The stored identity only pre-seeds the UI on reload; it is never an
//! authorization input, so writes and removals are best-effort and SSR
//! paths safely no-op.

use crate::net::types::UserState;

#[cfg(feature = "hydrate")]
const USERNAME_KEY: &str = "auth.username";
#[cfg(feature = "hydrate")]
const DISPLAY_NAME_KEY: &str = "auth.displayName";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Load the stored identity, requiring both keys to be present.
pub fn load_identity() -> Option<UserState> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let username = storage.get_item(USERNAME_KEY).ok().flatten()?;
        let display_name = storage.get_item(DISPLAY_NAME_KEY).ok().flatten()?;
        Some(UserState { username, display_name })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the identity after a successful login or session validation.
pub fn save_identity(user: &UserState) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(USERNAME_KEY, &user.username);
            let _ = storage.set_item(DISPLAY_NAME_KEY, &user.display_name);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove the stored identity on logout or session expiry.
pub fn clear_identity() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(USERNAME_KEY);
            let _ = storage.remove_item(DISPLAY_NAME_KEY);
        }
    }
}
