/// Утилиты для списков: поиск по строкам и компонент строки поиска.
/// Сортировка живёт отдельно в `shared::sorting`.
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Фильтрует список по поисковому запросу (минимум 3 символа)
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() || filter.trim().len() < 3 {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Текст баннера после пакетного удаления: `None`, если всё прошло
pub fn delete_failure_message(failed: usize, total: usize) -> Option<String> {
    if failed == 0 {
        None
    } else {
        Some(format!(
            "Не удалось удалить записей: {} из {}",
            failed, total
        ))
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск (мин. 3 символа)...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(String::new());

    // Номер последнего ввода: устаревшие таймеры ничего не делают
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let my_generation = generation.get_value() + 1;
        generation.set_value(my_generation);

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(300).await;
            if generation.get_value() == my_generation {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || {
        let text = value.get();
        !text.trim().is_empty() && text.trim().len() >= 3
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Очистить"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                ().into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_failure_message_silent_on_success() {
        assert_eq!(delete_failure_message(0, 5), None);
    }

    #[test]
    fn test_delete_failure_message_reports_partial_failure() {
        assert_eq!(
            delete_failure_message(2, 5).as_deref(),
            Some("Не удалось удалить записей: 2 из 5")
        );
        assert_eq!(
            delete_failure_message(1, 1).as_deref(),
            Some("Не удалось удалить записей: 1 из 1")
        );
    }
}
