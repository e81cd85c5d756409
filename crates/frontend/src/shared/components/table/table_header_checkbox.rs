//! Компонент чекбокса в заголовке таблицы для выбора всех строк страницы

use crate::shared::toggleable_list::HeaderCheckState;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Чекбокс "выбрать все"
///
/// - Три состояния: unchecked, checked, indeterminate
/// - `true` в `on_change` = выбрать все строки страницы, `false` = снять выбор
/// - В режиме одиночного выбора отображается, но заблокирован
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<HeaderCheckState>,

    #[prop(optional)]
    disabled: bool,

    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства, атрибута для него нет
    Effect::new(move |_| {
        let is_indeterminate = matches!(state.get(), HeaderCheckState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), HeaderCheckState::Checked)
                prop:disabled=disabled
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableHeaderCell>
    }
}
