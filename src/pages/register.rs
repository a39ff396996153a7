//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiError;
use crate::net::types::RegisterRequest;

const MIN_PASSWORD_CHARS: usize = 6;

fn validate_register_input(name: &str, mail: &str, password: &str) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let mail = mail.trim();
    if name.is_empty() || mail.is_empty() || password.is_empty() {
        return Err("Fill in all fields.");
    }
    if !mail.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters.");
    }
    Ok(RegisterRequest { name: name.to_owned(), mail: mail.to_owned(), password: password.to_owned() })
}

fn register_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Conflict => "An account with this email already exists.".to_owned(),
        other => format!("Registration failed: {other}"),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let store = expect_context::<crate::state::session::SessionStore>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let mail = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match validate_register_input(&name.get(), &mail.get(), &password.get()) {
            Ok(body) => body,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = store.api().clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.register(&body).await {
                    Ok(()) => navigate(crate::config::LOGIN_PATH, NavigateOptions::default()),
                    Err(err) => {
                        info.set(register_error_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            info.set(register_error_message(&ApiError::Unavailable));
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Register"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        "REGISTER"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a href="/login" class="login-card__link">"Already registered? Log in"</a>
            </div>
        </div>
    }
}
