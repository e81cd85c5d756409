use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Модальное окно поверх страницы
///
/// Закрывается по Escape, по клику на подложку и кнопкой в заголовке.
#[component]
pub fn Modal(
    title: String,
    on_close: Callback<()>,
    /// Кнопки действий в подвале (Сохранить, Отмена)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer()}</div> })}
            </div>
        </div>
    }
}
