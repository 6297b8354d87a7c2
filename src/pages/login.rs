//! Login page with username + password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::state::context::use_session;
use crate::util::auth::{can_submit_login, install_signed_in_redirect};

/// Trimmed username and raw password, or the message to show.
fn validate_login_form(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

fn login_failure_message(err: &ApiError) -> String {
    if err.is_unauthorized() {
        "Invalid username or password.".to_owned()
    } else {
        format!("Login failed: {err}")
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let auth = session.state();
    install_signed_in_redirect(auth, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !auth.with(|state| can_submit_login(state, busy.get())) {
            return;
        }
        let (user_value, password_value) = match validate_login_form(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                // Success flips the session state; the signed-in redirect takes over.
                if let Err(e) = session.login(&user_value, &password_value).await {
                    info.set(login_failure_message(&e));
                    password.set(String::new());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_value, password_value);
            info.set(login_failure_message(&ApiError::Unavailable));
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Back Office"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || !auth.with(|state| can_submit_login(state, busy.get()))>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
