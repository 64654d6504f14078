//! Todos page: list, add, complete, and delete items via the todo API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route. Loads the list once on mount and applies each
//! successful mutation to local `TodosState` instead of refetching.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state::todos::TodosState;

#[component]
pub fn TodosPage(config: AppConfig) -> impl IntoView {
    let todos = RwSignal::new(TodosState::default());
    let new_body = RwSignal::new(String::new());
    let config = StoredValue::new(config);

    // Runs after hydration only; SSR and the first client render both see
    // the initial non-loading state.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            todos.update(TodosState::begin_load);
            let url = config.with_value(AppConfig::todos_url);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_todos(&url).await {
                    Ok(items) => todos.update(|s| s.loaded(items)),
                    Err(e) => {
                        log::error!("failed to load todos: {e}");
                        todos.update(|s| s.failed(e.to_string()));
                    }
                }
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = match crate::net::api::normalize_todo_body(&new_body.get_untracked()) {
            Ok(body) => body,
            Err(e) => {
                todos.update(|s| s.rejected(e.to_string()));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let url = config.with_value(AppConfig::todos_url);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_todo(&url, &body).await {
                    Ok(todo) => {
                        todos.update(|s| s.created(todo));
                        new_body.set(String::new());
                    }
                    Err(e) => {
                        log::error!("failed to create todo: {e}");
                        todos.update(|s| s.rejected(e.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, config);
        }
    };

    let on_complete = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let url = config.with_value(|c| c.todo_url(&id));
            leptos::task::spawn_local(async move {
                match crate::net::api::complete_todo(&url).await {
                    Ok(()) => {
                        todos.update(|s| {
                            s.completed(&id);
                        });
                    }
                    Err(e) => {
                        log::error!("failed to complete todo {id}: {e}");
                        todos.update(|s| s.rejected(e.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, config);
        }
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let url = config.with_value(|c| c.todo_url(&id));
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_todo(&url).await {
                    Ok(()) => {
                        todos.update(|s| {
                            s.removed(&id);
                        });
                    }
                    Err(e) => {
                        log::error!("failed to delete todo {id}: {e}");
                        todos.update(|s| s.rejected(e.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, config);
        }
    };

    view! {
        <section class="todos-page">
            <form class="todo-form" on:submit=on_submit>
                <input
                    class="todo-form__input"
                    type="text"
                    placeholder="Add a task"
                    prop:value=move || new_body.get()
                    on:input=move |ev| new_body.set(event_target_value(&ev))
                />
                <button class="btn todo-form__submit" type="submit">
                    "+"
                </button>
            </form>

            <Show when=move || todos.with(|s| s.error.is_some())>
                <p class="todos-page__error">{move || todos.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !todos.with(|s| s.loading)
                fallback=move || view! { <p>"Loading tasks..."</p> }
            >
                <h2 class="todos-page__heading">"Today's Tasks"</h2>
                <Show when=move || todos.with(|s| s.items.is_empty())>
                    <p class="todos-page__empty">"All tasks completed!"</p>
                </Show>
                <ul class="todo-list">
                    {move || {
                        todos
                            .get()
                            .items
                            .into_iter()
                            .map(|todo| {
                                let id = todo.id.clone().unwrap_or_default();
                                let complete_id = id.clone();
                                let completed = todo.completed;
                                let class = if completed { "todo-item todo-item--done" } else { "todo-item" };
                                view! {
                                    <li class=class>
                                        <span class="todo-item__body">{todo.body}</span>
                                        <span class="todo-item__status">
                                            {if completed { "Done" } else { "In Progress" }}
                                        </span>
                                        {(!completed)
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn todo-item__complete"
                                                        title="Mark done"
                                                        on:click=move |_| on_complete(complete_id.clone())
                                                    >
                                                        "✓"
                                                    </button>
                                                }
                                            })}
                                        <button
                                            class="btn todo-item__delete"
                                            title="Delete"
                                            on:click=move |_| on_delete(id.clone())
                                        >
                                            "✕"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
