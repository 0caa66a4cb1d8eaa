//! Top navigation bar with brand and sign-out control.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Workspace header showing who is signed in and a sign-out button.
///
/// Sign-out clears local identity even when the server call fails, then
/// returns to the login page.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::session::logout().await;
                auth.set(AuthState::settled(None));
                navigate("/login", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <header class="navbar">
            <div class="navbar__brand">
                <svg class="navbar__logo" viewBox="0 0 20 20" aria-hidden="true">
                    <path d="M3 3h6a2 2 0 0 1 2 2v12a1 1 0 0 0-1-1H3z"></path>
                    <path d="M17 3h-6a2 2 0 0 0-2 2v12a1 1 0 0 1 1-1h7z"></path>
                </svg>
                <span class="navbar__title">"zBook"</span>
            </div>
            <div class="navbar__session">
                <span class="navbar__email">{email}</span>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Sign Out"
                </button>
            </div>
        </header>
    }
}
