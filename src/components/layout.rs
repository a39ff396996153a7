//! Authenticated application shell: nav bar, logout, and the route outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route under `Layout` requires a session, so the whole shell sits
//! inside an Authenticated guard. Role-specific links are derived from the
//! identity; the routes behind them carry their own stricter guards.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::guard::Guard;
use crate::config::LANDING_PATH;
use crate::net::types::Identity;
use crate::state::session::SessionStore;
use crate::util::guard::Capability;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Nav entries visible to `identity`, in display order.
pub fn nav_links(identity: Option<&Identity>) -> Vec<NavLink> {
    let mut links = Vec::new();
    if identity.is_some_and(|i| i.trainer) {
        links.push(NavLink { label: "Trainer Panel", href: "/trainer-panel" });
    }
    links.push(NavLink { label: "Your Workouts", href: "/your-workouts" });
    links.push(NavLink { label: "1RM Calculator", href: "/1rm-calculator" });
    if identity.is_some_and(|i| i.admin) {
        links.push(NavLink { label: "Admin", href: "/admin" });
    }
    links
}

#[component]
pub fn Layout() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| store.logout(navigate.clone()));
    let links = move || session.with(|s| nav_links(s.identity.as_ref()));

    view! {
        <Guard capability=Capability::Authenticated>
            <div class="layout">
                <header class="layout__bar">
                    <a href=LANDING_PATH class="layout__brand">"Train Gym App"</a>
                    <nav class="layout__nav">
                        <For
                            each=links
                            key=|link| link.href
                            children=move |link: NavLink| {
                                view! { <a href=link.href class="layout__link">{link.label}</a> }
                            }
                        />
                        <button class="layout__link layout__logout" on:click=move |_| on_logout.run(())>
                            "LOG OUT"
                        </button>
                    </nav>
                </header>
                <main class="layout__content">
                    <Outlet/>
                </main>
            </div>
        </Guard>
    }
}
