//! Admin panel: list, rename, and delete user accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind an Admin guard. The list is fetched once on mount; each
//! successful mutation is applied to the local copy instead of refetching.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::net::types::Account;

const EMPTY_NAME: &str = "Name cannot be empty.";

fn remove_account(accounts: &mut Vec<Account>, id: i64) {
    accounts.retain(|a| a.id != id);
}

fn apply_rename(accounts: &mut [Account], id: i64, name: &str) {
    if let Some(account) = accounts.iter_mut().find(|a| a.id == id) {
        name.clone_into(&mut account.name);
    }
}

fn validate_rename(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(EMPTY_NAME);
    }
    Ok(name.to_owned())
}

fn role_label(account: &Account) -> &'static str {
    match (account.admin, account.trainer) {
        (true, true) => "Admin, Trainer",
        (true, false) => "Admin",
        (false, true) => "Trainer",
        (false, false) => "User",
    }
}

/// Inline rename draft: which account is being edited and the pending text.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RenameDraft {
    id: i64,
    name: String,
}

#[component]
pub fn AdminPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::state::session::SessionStore>().api().clone();

    let accounts = RwSignal::new(Vec::<Account>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let draft = RwSignal::new(None::<RenameDraft>);

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.list_accounts().await {
                Ok(list) => accounts.set(list),
                Err(err) => {
                    log::warn!("admin: account list failed: {err}");
                    error.set(Some(super::request_error_message(&err)));
                }
            }
            loading.set(false);
        });
    }

    #[cfg(feature = "hydrate")]
    let delete_api = api.clone();
    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let api = delete_api.clone();
            leptos::task::spawn_local(async move {
                match api.delete_account(id).await {
                    Ok(()) => {
                        log::info!("admin: deleted account {id}");
                        accounts.update(|list| remove_account(list, id));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(super::request_error_message(&err))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            error.set(Some(super::request_error_message(&crate::net::api::ApiError::Unavailable)));
        }
    });

    let on_save = Callback::new(move |()| {
        let Some(current) = draft.get() else {
            return;
        };
        let name = match validate_rename(&current.name) {
            Ok(name) => name,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.rename_account(current.id, &name).await {
                    Ok(()) => {
                        accounts.update(|list| apply_rename(list, current.id, &name));
                        draft.set(None);
                        error.set(None);
                    }
                    Err(err) => error.set(Some(super::request_error_message(&err))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            error.set(Some(super::request_error_message(&crate::net::api::ApiError::Unavailable)));
        }
    });

    view! {
        <section class="admin-page">
            <h1>"Accounts"</h1>
            <Show when=move || error.get().is_some()>
                <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=move || view! { <p>"Loading accounts..."</p> }>
                <table class="admin-page__table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || accounts.get()
                            key=|account| (account.id, account.name.clone())
                            children=move |account: Account| {
                                view! {
                                    <AccountRow account=account draft=draft on_delete=on_delete on_save=on_save/>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[component]
fn AccountRow(
    account: Account,
    draft: RwSignal<Option<RenameDraft>>,
    on_delete: Callback<i64>,
    on_save: Callback<()>,
) -> impl IntoView {
    let id = account.id;
    let role = role_label(&account);
    let Account { name, mail, .. } = account;
    let current_name = name.clone();
    let editing = move || draft.with(|d| d.as_ref().is_some_and(|d| d.id == id));

    view! {
        <tr>
            <td>
                <Show when=editing fallback=move || view! { <span>{name.clone()}</span> }>
                    <input
                        class="admin-page__rename"
                        prop:value=move || draft.with(|d| d.as_ref().map(|d| d.name.clone()).unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| {
                                if let Some(d) = d.as_mut() {
                                    d.name = value;
                                }
                            });
                        }
                    />
                </Show>
            </td>
            <td>{mail}</td>
            <td>{role}</td>
            <td class="admin-page__actions">
                <Show
                    when=editing
                    fallback=move || {
                        let name = current_name.clone();
                        view! {
                            <button
                                class="btn"
                                on:click=move |_| draft.set(Some(RenameDraft { id, name: name.clone() }))
                            >
                                "Rename"
                            </button>
                        }
                    }
                >
                    <button class="btn" on:click=move |_| on_save.run(())>"Save"</button>
                    <button class="btn" on:click=move |_| draft.set(None)>"Cancel"</button>
                </Show>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>"Delete"</button>
            </td>
        </tr>
    }
}
