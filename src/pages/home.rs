//! Landing page for signed-in users.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::types::Identity;
use crate::state::session::SessionStore;

fn greeting(identity: Option<&Identity>) -> String {
    match identity.map(|i| i.name.trim()).filter(|name| !name.is_empty()) {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome back!".to_owned(),
    }
}

fn role_badges(identity: Option<&Identity>) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if let Some(identity) = identity {
        if identity.admin {
            badges.push("Admin");
        }
        if identity.trainer {
            badges.push("Trainer");
        }
    }
    badges
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>().state();
    let title = move || session.with(|s| greeting(s.identity.as_ref()));
    let badges = move || session.with(|s| role_badges(s.identity.as_ref()));

    view! {
        <section class="home-page">
            <h1>{title}</h1>
            <p class="home-page__roles">
                {move || {
                    badges()
                        .into_iter()
                        .map(|badge| view! { <span class="home-page__badge">{badge}</span> })
                        .collect::<Vec<_>>()
                }}
            </p>
            <a href="/1rm-calculator" class="home-page__link">"Estimate your one rep max"</a>
        </section>
    }
}
