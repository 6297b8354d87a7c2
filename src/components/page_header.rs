//! App header: route heading, signed-in user, and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::layout::constants::{DRAWER_WIDTH, LOGO_SRC, heading_for};
use crate::state::context::use_session;

#[component]
pub fn PageHeader() -> impl IntoView {
    let session = use_session();
    let auth = session.state();
    let pathname = use_location().pathname;
    let error = RwSignal::new(None::<String>);

    let heading = move || heading_for(&pathname.get()).unwrap_or_default();
    let user_name = move || {
        auth.with(|state| state.user.as_ref().map(|u| u.display_name().to_owned()))
            .unwrap_or_default()
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.logout().await {
                    error.set(Some(format!("Logout failed: {e}")));
                }
            });
        }
    };

    view! {
        <header class="app-header" style=format!("--drawer-width: {DRAWER_WIDTH}px")>
            <img class="app-header__logo" src=LOGO_SRC alt="Logo"/>
            <h1 class="app-header__title">{heading}</h1>
            <Show when=move || auth.with(|state| state.user.is_some())>
                <span class="app-header__user">{user_name}</span>
                <button class="btn" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="app-header__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </header>
    }
}
