use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Откладывает действие до паузы во вводе. Новый вызов `schedule` отменяет
/// предыдущий таймер (drop у `Timeout` снимает его).
#[derive(Clone, Copy)]
pub struct Debouncer {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            pending: StoredValue::new_local(None),
            delay_ms,
        }
    }

    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, action);
        self.pending.set_value(Some(timeout));
    }

    pub fn cancel(&self) {
        self.pending.set_value(None);
    }
}

/// Поле поиска с debounce и кнопкой очистки
///
/// Ввод отображается сразу, а в `on_change` уходит после паузы
/// [`SEARCH_DEBOUNCE_MS`]. Очистка отправляет пустую строку без задержки.
#[component]
pub fn DebouncedSearchInput(
    /// Применённое значение (из контроллера)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);

    // Сброс снаружи (кнопка "Сбросить", смена экрана) очищает и поле ввода
    Effect::new(move |_| {
        if value.get().is_empty() {
            input_value.set(String::new());
        }
    });

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());
        debouncer.schedule(move || on_change.run(new_value));
    };

    let clear = move |_| {
        debouncer.cancel();
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if value.get().trim().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Очистить">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
