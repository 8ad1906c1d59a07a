use leptos::prelude::*;

use super::global_context::{AppGlobalContext, Screen};
use crate::shared::icons::icon;

/// Навигация по экранам
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {Screen::ALL
                    .into_iter()
                    .map(|screen| {
                        view! {
                            <li
                                class="sidebar__item"
                                class:sidebar__item--active=move || ctx.active.get() == screen
                                on:click=move |_| ctx.activate(screen)
                            >
                                {icon(screen.icon_name())}
                                <span class="sidebar__label">{screen.title()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
