//! Trainer panel: review trainings submitted for approval.

#[cfg(test)]
#[path = "trainer_panel_test.rs"]
mod trainer_panel_test;

use leptos::prelude::*;

use crate::net::types::Training;

fn remove_training(trainings: &mut Vec<Training>, id: i64) {
    trainings.retain(|t| t.id != id);
}

fn training_summary(training: &Training) -> String {
    let description = training.description.trim();
    if description.is_empty() {
        format!("{} ({})", training.name, training.training_date)
    } else {
        format!("{} ({}): {description}", training.name, training.training_date)
    }
}

#[component]
pub fn TrainerPanelPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::state::session::SessionStore>().api().clone();

    let trainings = RwSignal::new(Vec::<Training>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.list_pending_trainings().await {
                Ok(list) => trainings.set(list),
                Err(err) => {
                    log::warn!("trainer: pending list failed: {err}");
                    error.set(Some(super::request_error_message(&err)));
                }
            }
            loading.set(false);
        });
    }

    let on_review = Callback::new(move |(id, accept): (i64, bool)| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.review_training(id, accept).await {
                    Ok(()) => {
                        log::info!("trainer: training {id} {}", if accept { "accepted" } else { "declined" });
                        trainings.update(|list| remove_training(list, id));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(super::request_error_message(&err))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, accept);
            error.set(Some(super::request_error_message(&crate::net::api::ApiError::Unavailable)));
        }
    });

    view! {
        <section class="trainer-page">
            <h1>"Trainings to review"</h1>
            <Show when=move || error.get().is_some()>
                <p class="trainer-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading trainings..."</p> }>
                <Show
                    when=move || trainings.with(|list| !list.is_empty())
                    fallback=move || view! { <p class="trainer-page__empty">"Nothing waiting for review."</p> }
                >
                    <ul class="trainer-page__list">
                        <For
                            each=move || trainings.get()
                            key=|training| training.id
                            children=move |training: Training| {
                                let id = training.id;
                                view! {
                                    <li class="trainer-page__item">
                                        <span>{training_summary(&training)}</span>
                                        <button class="btn" on:click=move |_| on_review.run((id, true))>
                                            "Accept"
                                        </button>
                                        <button class="btn btn--danger" on:click=move |_| on_review.run((id, false))>
                                            "Decline"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
