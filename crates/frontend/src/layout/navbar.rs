use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

const SECTIONS: &[(&str, &str, &str)] = &[
    ("/customers", "customers", "Клиенты"),
    ("/suppliers", "suppliers", "Поставщики"),
    ("/warehouses", "warehouses", "Склады"),
    ("/users", "users", "Участники"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {SECTIONS
                    .iter()
                    .map(|&(href, icon_name, title)| {
                        view! {
                            <li>
                                <A href=href>
                                    {icon(icon_name)}
                                    <span>{title}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
