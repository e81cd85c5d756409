use crate::shared::selection::use_selection;
use crate::shared::view_mode::ViewModeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let selection = use_selection();
    let total_selected = selection.total_selected();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Склад: администрирование"</span>
            </div>
            <div class="top-header__actions">
                <Show when=move || { total_selected.get() > 0 }>
                    <span class="top-header__badge" title="Выбрано строк во всех списках">
                        {move || total_selected.get()}
                    </span>
                </Show>
                <ViewModeToggle />
            </div>
        </div>
    }
}
