//! Login page: mail + password against the cookie-session backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::LANDING_PATH;
use crate::net::api::ApiError;
use crate::net::types::LoginRequest;
use crate::state::session::SessionStore;

const MISSING_CREDENTIALS: &str = "Enter both email and password.";

fn validate_login_input(mail: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let mail = mail.trim();
    if mail.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(LoginRequest { mail: mail.to_owned(), password: password.to_owned() })
}

fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthenticated => "Invalid email or password.".to_owned(),
        other => format!("Login failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();
    let navigate = use_navigate();

    let mail = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in (e.g. Back after login): go to the landing page.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let signed_in = session.with(|s| !s.loading && s.is_authenticated());
        if signed_in {
            navigate_home(LANDING_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_login_input(&mail.get(), &password.get()) {
            Ok(body) => body,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match store.api().login(&body).await {
                    Ok(()) => {
                        log::info!("session: signed in");
                        store.reload();
                        navigate(LANDING_PATH, NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(login_error_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, &store, &navigate);
            info.set(login_error_message(&ApiError::Unavailable));
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || mail.get()
                        on:input=move |ev| mail.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "LOG IN"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a href="/register" class="login-card__link">"No account? Register"</a>
            </div>
        </div>
    }
}
