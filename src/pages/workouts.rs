//! "Your Workouts": read-only list of the signed-in user's trainings.

#[cfg(test)]
#[path = "workouts_test.rs"]
mod workouts_test;

use leptos::prelude::*;

use crate::net::types::Training;

/// Open `id` if it is collapsed, collapse it if it is open.
fn toggle_expanded(expanded: &mut Vec<i64>, id: i64) {
    if let Some(pos) = expanded.iter().position(|open| *open == id) {
        expanded.remove(pos);
    } else {
        expanded.push(id);
    }
}

/// Detail rows shown when a workout card is expanded.
fn detail_rows(training: &Training) -> [(&'static str, String); 3] {
    [
        ("Name", training.name.clone()),
        ("Date", training.training_date.clone()),
        ("Description", training.description.clone()),
    ]
}

#[component]
pub fn WorkoutsPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::state::session::SessionStore>().api().clone();

    let workouts = RwSignal::new(Vec::<Training>::new());
    let expanded = RwSignal::new(Vec::<i64>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                match api.list_trainings().await {
                    Ok(list) => {
                        workouts.set(list);
                        error.set(None);
                    }
                    Err(err) => {
                        log::warn!("workouts: list failed: {err}");
                        error.set(Some(super::request_error_message(&err)));
                    }
                }
                loading.set(false);
            });
        }
    };
    load();

    view! {
        <section class="workouts-page">
            <header class="workouts-page__header">
                <h1>"Your Workouts"</h1>
                <button class="btn" title="Refresh" on:click=move |_| load() disabled=move || loading.get()>
                    "Refresh"
                </button>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="workouts-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get() || workouts.with(|list| !list.is_empty())
                fallback=move || view! { <p>"Loading workouts..."</p> }
            >
                <For
                    each=move || workouts.get()
                    key=|training| training.id
                    children=move |training: Training| {
                        let id = training.id;
                        let rows = detail_rows(&training);
                        let open = move || expanded.with(|ids| ids.contains(&id));
                        view! {
                            <article class="workouts-page__card">
                                <div class="workouts-page__summary">
                                    <div>
                                        <h2>{training.name.clone()}</h2>
                                        <span class="workouts-page__date">{training.training_date.clone()}</span>
                                    </div>
                                    <button
                                        class="btn"
                                        on:click=move |_| expanded.update(|ids| toggle_expanded(ids, id))
                                    >
                                        {move || if open() { "Hide" } else { "Details" }}
                                    </button>
                                </div>
                                <Show when=open>
                                    <dl class="workouts-page__details">
                                        {rows
                                            .clone()
                                            .into_iter()
                                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                            .collect::<Vec<_>>()}
                                    </dl>
                                </Show>
                            </article>
                        }
                    }
                />
            </Show>
        </section>
    }
}
