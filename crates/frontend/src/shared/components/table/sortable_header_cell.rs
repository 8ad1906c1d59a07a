//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Цена"
//!     field="price_per_day"
//!     sort=sorter.signal()
//!     on_sort=Callback::new(move |field| sorter.on_sort(field))
//!     align="right"
//! />
//! ```

use crate::shared::sorting::{sort_class, sort_indicator, SortState};
use leptos::prelude::*;

/// Кликабельный заголовок колонки с индикатором сортировки (▲▼)
///
/// В `on_sort` передаётся семантический ключ колонки (`field`),
/// а не отображаемый текст.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ колонки для сортировки
    field: &'static str,

    /// Текущее состояние сортировки списка
    #[prop(into)]
    sort: Signal<SortState<String>>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let handle_click = move |_| {
        on_sort.run(field.to_string());
    };

    let header_style = if align == "right" {
        "cursor: pointer; text-align: right;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            style=header_style
            on:click=handle_click
        >
            {label}
            <span class=move || sort_class(&sort.get(), &field.to_string())>
                {move || sort_indicator(&sort.get(), &field.to_string())}
            </span>
        </th>
    }
}
