//! One-rep-max calculator page.

#[cfg(test)]
#[path = "one_rep_max_test.rs"]
mod one_rep_max_test;

use leptos::prelude::*;

use crate::util::one_rep_max::{describe, estimate};

#[derive(Clone, Debug, PartialEq)]
enum Outcome {
    Estimate(String),
    Invalid(&'static str),
}

fn calculate(weight: &str, reps: &str) -> Outcome {
    match estimate(weight, reps) {
        Ok(kg) => Outcome::Estimate(describe(kg)),
        Err(msg) => Outcome::Invalid(msg),
    }
}

#[component]
pub fn OneRepMaxPage() -> impl IntoView {
    let weight = RwSignal::new(String::new());
    let reps = RwSignal::new(String::new());
    let outcome = RwSignal::new(None::<Outcome>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        outcome.set(Some(calculate(&weight.get(), &reps.get())));
    };

    view! {
        <section class="orm-page">
            <h1>"1RM Calculator"</h1>
            <form class="orm-form" on:submit=on_submit>
                <label class="orm-form__field">
                    "Weight (kg)"
                    <input
                        type="number"
                        step="any"
                        min="0"
                        prop:value=move || weight.get()
                        on:input=move |ev| weight.set(event_target_value(&ev))
                    />
                </label>
                <label class="orm-form__field">
                    "Repetitions"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || reps.get()
                        on:input=move |ev| reps.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" type="submit">"Calculate"</button>
            </form>
            {move || match outcome.get() {
                Some(Outcome::Estimate(line)) => view! { <p class="orm-page__result">{line}</p> }.into_any(),
                Some(Outcome::Invalid(msg)) => view! { <p class="orm-page__error">{msg}</p> }.into_any(),
                None => ().into_any(),
            }}
        </section>
    }
}
