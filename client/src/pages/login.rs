//! Login page with sign-in and create-account forms.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_auth_redirect;

/// Trim the email and require both fields.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Credentials check plus the confirmation field. Passwords are compared
/// verbatim; only the email is trimmed.
fn validate_registration(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let (email, password) = validate_credentials(email, password)?;
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((email, password))
}

/// Login page — branding panel plus a card that toggles between the sign-in
/// and create-account forms. Registration success does not sign the user in;
/// it switches back to the sign-in form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_auth_redirect(auth, navigate);

    let registering = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let switch_mode = move |to_register: bool| {
        registering.set(to_register);
        info.set(String::new());
        password.set(String::new());
        confirm.set(String::new());
    };

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::state::session::login(&email_value, &password_value).await {
                Ok(user) => {
                    // The auth guard navigates home once the user lands.
                    auth.set(AuthState::settled(Some(user)));
                }
                Err(e) => {
                    info.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_registration(&email.get(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::state::session::register(&email_value, &password_value).await {
                Ok(()) => {
                    registering.set(false);
                    password.set(String::new());
                    confirm.set(String::new());
                    info.set("Account created. Sign in to continue.".to_owned());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <aside class="login-page__brand">
                <h1 class="login-page__logo">"zBook"</h1>
                <h2>"Transform Books into Insights"</h2>
                <p>
                    "Upload any book and get intelligent summaries with key points extracted. "
                    "Save time and absorb knowledge faster than ever before."
                </p>
                <ul class="login-page__features">
                    <li>"AI-powered summarization"</li>
                    <li>"Support for PDF, TXT, and more"</li>
                    <li>"Organized summary history"</li>
                </ul>
            </aside>

            <div class="login-page__panel">
                <div class="login-card">
                    {move || {
                        if registering.get() {
                            view! {
                                <form class="login-form" on:submit=on_register>
                                    <h2 class="login-card__title">"Create your account"</h2>
                                    <input
                                        class="login-input"
                                        type="email"
                                        placeholder="you@example.com"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                    <input
                                        class="login-input"
                                        type="password"
                                        placeholder="Password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                    <input
                                        class="login-input"
                                        type="password"
                                        placeholder="Confirm password"
                                        prop:value=move || confirm.get()
                                        on:input=move |ev| confirm.set(event_target_value(&ev))
                                    />
                                    <button class="login-button" type="submit" disabled=move || busy.get()>
                                        "Create Account"
                                    </button>
                                    <button
                                        class="login-link"
                                        type="button"
                                        on:click=move |_| switch_mode(false)
                                    >
                                        "Already registered? Sign in"
                                    </button>
                                </form>
                            }
                                .into_any()
                        } else {
                            view! {
                                <form class="login-form" on:submit=on_login>
                                    <h2 class="login-card__title">"Welcome back"</h2>
                                    <input
                                        class="login-input"
                                        type="email"
                                        placeholder="you@example.com"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                    <input
                                        class="login-input"
                                        type="password"
                                        placeholder="Password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                    <button class="login-button" type="submit" disabled=move || busy.get()>
                                        "Sign In"
                                    </button>
                                    <button
                                        class="login-link"
                                        type="button"
                                        on:click=move |_| switch_mode(true)
                                    >
                                        "Need an account? Register"
                                    </button>
                                </form>
                            }
                                .into_any()
                        }
                    }}
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message">{move || info.get()}</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
