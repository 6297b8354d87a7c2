//! Session provider component.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::HttpAuthApi;
use crate::state::context::{SessionContext, provide_session};

/// Creates the session for its subtree and starts restoration once.
///
/// Restoration runs only in the browser; during SSR the session stays in its
/// initializing state.
#[component]
pub fn AuthProvider(
    /// API origin override; defaults to the build-time configuration.
    #[prop(optional)]
    config: Option<ApiConfig>,
    children: Children,
) -> impl IntoView {
    let session = SessionContext::new(HttpAuthApi::new(config.unwrap_or_default()));

    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = session.initialize().await {
                log::warn!("{err}");
            }
        });
    }

    provide_session(session);
    children()
}
