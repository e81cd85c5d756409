use leptos::prelude::*;
use std::sync::Arc;

pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Отрисовка карточки в режиме [`ViewMode::Card`](crate::shared::view_mode::ViewMode)
pub type CardRenderer<T> = CellRenderer<T>;

pub fn card_renderer<T>(render: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> CardRenderer<T> {
    Arc::new(render)
}

/// Описание колонки таблицы
pub struct ColumnDef<T> {
    pub key: &'static str,
    pub header: String,
    /// Колонка сортируется по `key`
    pub sortable: bool,
    pub render: CellRenderer<T>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header.clone(),
            sortable: self.sortable,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> ColumnDef<T> {
    /// Текстовая колонка
    pub fn text(
        key: &'static str,
        header: impl Into<String>,
        value: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            header: header.into(),
            sortable: false,
            render: Arc::new(move |item: &T| {
                let text = value(item);
                view! { <span>{text}</span> }.into_any()
            }),
        }
    }

    /// Колонка с собственным рендером ячейки
    pub fn custom(
        key: &'static str,
        header: impl Into<String>,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            header: header.into(),
            sortable: false,
            render: Arc::new(render),
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}
