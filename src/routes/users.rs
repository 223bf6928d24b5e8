//! The users page: a name/email form on top, the fetched list below. All
//! network traffic goes through the form controller so every fetch path
//! (mount, refresh button, post-save chain) shares the same latest-wins
//! guard and notification behavior.

use crate::{
    app_lib::{config::AppConfig, theme::Theme},
    components::{AppShell, Button, Spinner, use_toasts},
    features::users::{
        client::HttpUserDirectory,
        form::{ListUpdate, UserForm},
        types::UserRecord,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use std::rc::Rc;

const INPUT_CLASS: &str = "w-full rounded-lg border border-gray-300 bg-gray-50 px-3 py-2.5 text-sm text-gray-900 focus:border-blue-500 focus:ring-2 focus:ring-blue-200 dark:border-gray-600 dark:bg-gray-700 dark:text-white";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-700 dark:text-gray-300";

#[derive(Clone)]
/// Captures form input for the async action without borrowing signals.
struct SaveInput {
    name: String,
    email: String,
}

/// Renders the user form and list, fetching the list once on mount.
#[component]
pub fn UsersPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let users: RwSignal<Option<Vec<UserRecord>>> = RwSignal::new(None);

    let form = Rc::new(UserForm::new(
        HttpUserDirectory::new(AppConfig::load()),
        use_toasts(),
    ));

    let refresh_action = Action::new_local({
        let form = Rc::clone(&form);
        move |_: &()| {
            let form = Rc::clone(&form);
            async move { form.refresh().await }
        }
    });

    let save_action = Action::new_local({
        let form = Rc::clone(&form);
        move |input: &SaveInput| {
            let input = input.clone();
            let form = Rc::clone(&form);
            async move { form.submit(&input.name, &input.email).await }
        }
    });

    let apply_update = move |update: ListUpdate| {
        if let ListUpdate::Replace(list) = update {
            users.set(Some(list));
        }
    };

    Effect::new(move |_| {
        if let Some(Ok(update)) = refresh_action.value().get() {
            apply_update(update);
        }
    });

    // A saved submit clears the inputs; a rejected one leaves them for
    // correction.
    Effect::new(move |_| {
        if let Some(Ok(update)) = save_action.value().get() {
            set_name.set(String::new());
            set_email.set(String::new());
            apply_update(update);
        }
    });

    refresh_action.dispatch(());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        save_action.dispatch(SaveInput {
            name: name.get_untracked(),
            email: email.get_untracked(),
        });
    };

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Users List"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Add a user and the list refreshes from the server."
                    </p>
                </div>

                <form class=Theme::CARD on:submit=on_submit>
                    <div class="p-6 space-y-4">
                        <div>
                            <label class=LABEL_CLASS for="name">
                                "Name"
                            </label>
                            <input
                                id="name"
                                type="text"
                                class=INPUT_CLASS
                                autocomplete="name"
                                placeholder="Ada Lovelace"
                                prop:value=move || name.get()
                                on:input=move |event| set_name.set(event_target_value(&event))
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS for="email">
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="text"
                                class=INPUT_CLASS
                                autocomplete="email"
                                inputmode="email"
                                placeholder="ada@example.com"
                                prop:value=move || email.get()
                                on:input=move |event| set_email.set(event_target_value(&event))
                            />
                        </div>
                        <div class="flex items-center gap-3">
                            <Button button_type="submit" disabled=save_action.pending()>
                                "Save"
                            </Button>
                            <button
                                type="button"
                                class="text-gray-700 bg-white border border-gray-300 hover:bg-gray-100 focus:ring-4 focus:outline-none focus:ring-gray-200 font-medium rounded-lg text-sm px-5 py-2.5 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700"
                                on:click=move |_| {
                                    refresh_action.dispatch(());
                                }
                            >
                                "Refresh"
                            </button>
                        </div>
                    </div>
                </form>

                <div class=Theme::CARD>
                    <div class=Theme::CARD_HEADER>"Users"</div>
                    {move || match users.get() {
                        Some(list) if list.is_empty() => {
                            view! { <div class=Theme::EMPTY_ROW>"No users found"</div> }
                                .into_any()
                        }
                        Some(list) => {
                            view! {
                                <ul class="divide-y divide-gray-200 dark:divide-gray-700">
                                    {list
                                        .into_iter()
                                        .map(|user| {
                                            view! {
                                                <li class=Theme::LIST_ITEM>
                                                    <span class="text-sm font-medium text-gray-900 dark:text-white">
                                                        {user.name}
                                                    </span>
                                                    <span class="text-sm text-gray-500 dark:text-gray-400">
                                                        {user.email}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                        None if refresh_action.pending().get() => {
                            view! {
                                <div class="px-6 py-12 text-center">
                                    <Spinner />
                                </div>
                            }
                                .into_any()
                        }
                        None => view! { <div class=Theme::EMPTY_ROW></div> }.into_any(),
                    }}
                </div>
            </div>
        </AppShell>
    }
}
