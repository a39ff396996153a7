//! Route guard component.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::guard::{Capability, GuardDecision, decide};

/// Renders `children` only when the session holds `capability`.
///
/// While the session is loading nothing renders and no redirect fires.
/// Redirects replace the history entry so Back does not bounce into the guard.
#[component]
pub fn Guard(#[prop(optional)] capability: Capability, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>().state();
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = session.with(|s| decide(s, capability)) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || session.with(|s| decide(s, capability)) == GuardDecision::Render>
            {children()}
        </Show>
    }
}
