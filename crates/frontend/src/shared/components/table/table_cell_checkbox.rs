use leptos::prelude::*;
use thaw::*;

/// Чекбокс строки таблицы
///
/// Клик не всплывает до строки, чтобы выбор не открывал карточку записи.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    checked: Signal<bool>,

    /// Новое значение чекбокса
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableCell>
    }
}
