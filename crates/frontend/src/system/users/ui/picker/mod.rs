//! Выбор пользователей через модальное окно
//!
//! Модалка работает с черновиком выбора: поиск, страницы и отметки не
//! трогают хранилище, пока пользователь не нажмёт "Применить". Страница
//! участников пишет в область `user-selection-modal:participants`: ключ один и
//! тот же при каждом монтировании, поэтому повторный визит видит прежний выбор.

use crate::shared::modal::Modal;
use crate::shared::query::{
    use_search_select_query, Debouncer, LoadState, RequestGuard, SEARCH_DEBOUNCE_MS,
};
use crate::shared::search_select::{AsyncMultiSelect, SelectableItem, ServerPagination};
use crate::shared::selection::{scope_keys, use_selection, ScopeKey, SelectionMode};
use crate::system::users::api;
use contracts::shared::pagination::PaginatedResponse;
use contracts::system::users::User;
use leptos::prelude::*;

#[component]
pub fn UserPickerModal(scope: ScopeKey, on_close: Callback<()>) -> impl IntoView {
    let selection = use_selection();
    selection.init_scope(&scope, SelectionMode::Multiple);

    let controller = use_search_select_query();
    let guard = RequestGuard::new();
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);
    let results = RwSignal::new(LoadState::<PaginatedResponse<User>>::Loaded(
        PaginatedResponse::single_page(Vec::new()),
    ));
    // Текст в поле ввода; в контроллер уходит после паузы
    let search_input = RwSignal::new(String::new());
    let draft = RwSignal::new(
        selection
            .selected_payloads::<User>(scope.clone())
            .get_untracked(),
    );

    Effect::new(move |_| {
        let params = controller.api_params.get();
        if params.search.is_none() {
            // пустой поиск: результаты не нужны, ответы в полёте устаревают
            guard.begin();
            results.set(LoadState::Loaded(PaginatedResponse::single_page(Vec::new())));
            return;
        }
        results.set(LoadState::Loading);
        guard.spawn(
            "user picker",
            async move { api::search_users(&params).await },
            move |result| {
                if let Err(e) = &result {
                    log::error!("Failed to search users: {}", e);
                }
                results.set(LoadState::from_result(result));
            },
        );
    });

    let data = Signal::derive(move || {
        results.with(|r| r.data().map(|p| p.data.clone()).unwrap_or_default())
    });
    let is_loading = Signal::derive(move || results.with(LoadState::is_loading));
    let error = Signal::derive(move || results.with(|r| r.error().map(str::to_string)));

    let pagination = ServerPagination {
        current_page: Signal::derive(move || {
            results.with(|r| r.data().map_or(1, |p| p.current_page))
        }),
        last_page: Signal::derive(move || results.with(|r| r.data().map_or(1, |p| p.last_page))),
        on_page_change: Callback::new(move |page: usize| controller.set_page(page)),
    };

    let on_search_change = Callback::new(move |value: String| {
        search_input.set(value.clone());
        if value.trim().is_empty() {
            debouncer.cancel();
            controller.set_search(value);
        } else {
            debouncer.schedule(move || controller.set_search(value));
        }
    });

    let apply = {
        let scope = scope.clone();
        move |_: leptos::ev::MouseEvent| {
            let entries = draft.with_untracked(|users| users.iter().map(|u| u.to_entry()).collect());
            selection.replace_all(&scope, entries);
            on_close.run(());
        }
    };

    let footer: ChildrenFn = {
        let apply = apply.clone();
        std::sync::Arc::new(move || {
            let apply = apply.clone();
            view! {
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Отмена"
                </button>
                <button class="button button--primary" on:click=apply>
                    {move || format!("Применить ({})", draft.with(Vec::len))}
                </button>
            }
            .into_any()
        })
    };

    view! {
        <Modal title="Выбор пользователей".to_string() on_close=on_close footer=footer>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <AsyncMultiSelect
                selected=draft
                on_change=Callback::new(move |users: Vec<User>| draft.set(users))
                data=data
                is_loading=is_loading
                search=search_input
                on_search_change=on_search_change
                pagination=pagination
                placeholder="Имя или логин..."
            />
        </Modal>
    }
}

/// Область выбора участников
pub fn participants_scope() -> ScopeKey {
    ScopeKey::namespaced(scope_keys::USER_SELECTION_MODAL, "participants")
}

/// Страница с выбором участников через модалку
#[component]
pub fn UsersPickerPage() -> impl IntoView {
    let selection = use_selection();
    let scope = participants_scope();
    selection.init_scope(&scope, SelectionMode::Multiple);

    let is_open = RwSignal::new(false);
    let chosen = selection.selected_payloads::<User>(scope.clone());

    let remove = {
        let scope = scope.clone();
        move |user: &User| selection.remove(&scope, &user.row_id())
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Участники"</h1>
                <button class="button button--primary" on:click=move |_| is_open.set(true)>
                    "Выбрать пользователей"
                </button>
            </div>

            <ul class="chosen-list">
                {move || {
                    let users = chosen.get();
                    if users.is_empty() {
                        return view! { <li class="chosen-list__empty">"Никто не выбран"</li> }
                            .into_any();
                    }
                    users
                        .into_iter()
                        .map(|user| {
                            let remove = remove.clone();
                            let label = user.display_name();
                            view! {
                                <li class="chosen-list__item">
                                    <span>{label}</span>
                                    <button
                                        class="button button--ghost"
                                        on:click=move |_| remove(&user)
                                    >
                                        "Убрать"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>

            <Show when=move || is_open.get()>
                <UserPickerModal
                    scope=scope.clone()
                    on_close=Callback::new(move |_| is_open.set(false))
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::selection::{SelectedEntry, SelectionStore};
    use serde_json::json;

    fn user_entry(id: i64) -> SelectedEntry {
        SelectedEntry::new(id, json!({ "id": id }))
    }

    #[test]
    fn test_participants_scope_survives_remount() {
        let mut store = SelectionStore::new();

        let first_visit = participants_scope();
        store.init_scope(&first_visit, SelectionMode::Multiple);
        store
            .replace_all(&first_visit, vec![user_entry(1), user_entry(2)])
            .unwrap();

        // страница смонтирована заново
        let second_visit = participants_scope();
        assert_eq!(second_visit, first_visit);
        store.init_scope(&second_visit, SelectionMode::Multiple);

        assert_eq!(store.selected_ids(&second_visit).len(), 2);
        assert_eq!(store.total_selected(), 2);

        store.clear_scope(&second_visit).unwrap();
        assert_eq!(store.total_selected(), 0);
    }
}
