//! Placeholder page for back-office sections behind the login.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::layout::constants::heading_for;
use crate::state::context::use_session;
use crate::util::auth::install_unauth_redirect;

/// Any route other than `/login`. Redirects to `/login` when signed out.
#[component]
pub fn SectionPage() -> impl IntoView {
    let auth = use_session().state();
    install_unauth_redirect(auth, use_navigate());
    let pathname = use_location().pathname;

    let known = move || heading_for(&pathname.get()).is_some();

    view! {
        <section class="section-page">
            <Show
                when=move || !auth.with(|state| state.loading)
                fallback=|| view! { <p class="section-page__loading">"Loading..."</p> }
            >
                <Show when=known fallback=|| view! { <p>"Page not found."</p> }>
                    <div class="section-page__body"></div>
                </Show>
            </Show>
        </section>
    }
}
