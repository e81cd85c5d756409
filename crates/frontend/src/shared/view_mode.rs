//! Предпочтение вида списков: таблица или карточки.
//!
//! Один флаг на всё приложение, хранится в localStorage. Списки только читают
//! его; переключатель живёт в верхней панели.

use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Card,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Card => "card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ViewMode::Table => "Таблица",
            ViewMode::Card => "Карточки",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "card" => ViewMode::Card,
            _ => ViewMode::Table,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Card,
            ViewMode::Card => ViewMode::Table,
        }
    }
}

const VIEW_MODE_STORAGE_KEY: &str = "app-view-mode";

fn load_view_mode_from_storage() -> ViewMode {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(VIEW_MODE_STORAGE_KEY).ok().flatten())
        .map(|s| ViewMode::parse(&s))
        .unwrap_or_default()
}

fn save_view_mode_to_storage(mode: ViewMode) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(VIEW_MODE_STORAGE_KEY, mode.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ViewModeContext {
    pub mode: RwSignal<ViewMode>,
}

impl ViewModeContext {
    pub fn set_mode(&self, mode: ViewMode) {
        self.mode.set(mode);
        save_view_mode_to_storage(mode);
    }

    pub fn toggle(&self) {
        self.set_mode(self.mode.get_untracked().toggled());
    }
}

/// Кладёт предпочтение в контекст, начальное значение берётся из localStorage
pub fn provide_view_mode() -> ViewModeContext {
    let ctx = ViewModeContext {
        mode: RwSignal::new(load_view_mode_from_storage()),
    };
    provide_context(ctx);
    ctx
}

pub fn use_view_mode() -> ViewModeContext {
    use_context::<ViewModeContext>()
        .expect("ViewModeContext not found. Call provide_view_mode() in App.")
}

/// Кнопка переключения таблица/карточки
#[component]
pub fn ViewModeToggle() -> impl IntoView {
    let ctx = use_view_mode();

    view! {
        <button
            class="top-header-icon-btn"
            on:click=move |_| ctx.toggle()
            title=move || format!("Вид: {}", ctx.mode.get().toggled().display_name())
        >
            {move || match ctx.mode.get() {
                ViewMode::Table => icon("grid"),
                ViewMode::Card => icon("list"),
            }}
        </button>
    }
}
