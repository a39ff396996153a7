//! Session context provider.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::session::SessionStore;

/// Creates the `SessionStore`, provides it (and `config`) to `children`,
/// starts the revalidation poll, and stops it when this scope is torn down.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Children) -> impl IntoView {
    let store = SessionStore::new(config.api());
    provide_context(store.clone());
    provide_context(config.clone());

    store.initialize();
    store.start_polling(config.poll_interval);
    on_cleanup(move || store.dispose());

    children()
}
