pub mod global_context;
pub mod sidebar;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;

use crate::system::auth::context::{do_logout, use_auth};

/// Каркас приложения: верхняя панель, сайдбар и область контента.
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, set_auth_state) = use_auth();

    let display_name = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.display_name)
            .unwrap_or_default()
    };

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button class="top-header__toggle" on:click=move |_| ctx.toggle_left()>
                    "☰"
                </button>
                <span class="top-header__brand">"FitGarden"</span>
                <span class="top-header__spacer"></span>
                <span class="top-header__user">{display_name}</span>
                <button class="top-header__logout" title="Выйти" on:click=move |_| do_logout(set_auth_state)>
                    {crate::shared::icons::icon("logout")}
                </button>
            </header>

            <div class="app-body">
                <Show when=move || ctx.left_open.get()>
                    <Sidebar />
                </Show>

                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
