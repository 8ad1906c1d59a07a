pub mod state;

use self::state::create_state;
use crate::domain::a001_meal_plan::api;
use crate::shared::components::table::number_format::format_money;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_utils::{delete_failure_message, filter_list, SearchInput, Searchable};
use crate::shared::sorting::{RowSorter, SortValue, SortableRecord};
use contracts::domain::a001_meal_plan::{MealPlan, MealPlanDto};
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct MealPlanRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub price_per_day: f64,
    pub meals_per_day: i32,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub comment: Option<String>,
}

impl From<MealPlan> for MealPlanRow {
    fn from(p: MealPlan) -> Self {
        use contracts::domain::common::AggregateId;

        Self {
            id: p.base.id.as_string(),
            code: p.base.code,
            description: p.base.description,
            price_per_day: p.price_per_day,
            meals_per_day: p.meals_per_day,
            is_active: p.is_active,
            created_at: p.base.metadata.created_at,
            comment: p.base.comment,
        }
    }
}

impl MealPlanRow {
    fn to_dto(&self) -> MealPlanDto {
        MealPlanDto {
            id: Some(self.id.clone()),
            code: Some(self.code.clone()),
            description: self.description.clone(),
            price_per_day: self.price_per_day,
            meals_per_day: self.meals_per_day,
            is_active: self.is_active,
            comment: self.comment.clone(),
        }
    }
}

impl SortableRecord for MealPlanRow {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "code" => self.code.as_str().into(),
            "description" => self.description.as_str().into(),
            "price_per_day" => self.price_per_day.into(),
            "meals_per_day" => self.meals_per_day.into(),
            "is_active" => self.is_active.into(),
            "created_at" => self.created_at.into(),
            _ => SortValue::Null,
        }
    }
}

impl Searchable for MealPlanRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.code.to_lowercase().contains(&filter)
            || self.description.to_lowercase().contains(&filter)
    }
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

async fn load_rows(
    set_items: WriteSignal<Vec<MealPlanRow>>,
    set_error: WriteSignal<Option<String>>,
) {
    match api::fetch_meal_plans().await {
        Ok(v) => {
            let rows: Vec<MealPlanRow> = v.into_iter().map(Into::into).collect();
            set_items.set(rows);
            set_error.set(None);
        }
        Err(e) => {
            log::error!("Failed to fetch meal plans: {}", e);
            set_error.set(Some(e));
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MealPlanList() -> impl IntoView {
    let state = create_state();
    let (items, set_items) = signal::<Vec<MealPlanRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let sorter = RowSorter::<String>::new();

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(load_rows(set_items, set_error));
    };

    let visible_items = move || {
        let filtered = filter_list(items.get(), &state.get().filter);
        sorter.sorted(&filtered)
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id.clone());
            } else {
                s.remove(&id);
            }
        });
    };

    let open_create = move || {
        state.update(|s| {
            s.editing = Some(MealPlanDto {
                meals_per_day: 3,
                is_active: true,
                ..Default::default()
            });
            s.form_error = None;
        });
    };

    let open_edit = move |id: String| {
        let dto = items
            .get()
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.to_dto());
        if let Some(dto) = dto {
            state.update(|s| {
                s.editing = Some(dto);
                s.form_error = None;
            });
        }
    };

    let delete_selected = move || {
        let ids: Vec<String> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!(
                    "Удалить выбранные планы? Количество: {}",
                    ids.len()
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            let total = ids.len();
            let mut failed = 0usize;
            for id in ids {
                if let Err(e) = api::delete_meal_plan(&id).await {
                    log::error!("Failed to delete meal plan {}: {}", id, e);
                    failed += 1;
                }
            }
            set_selected.set(HashSet::new());
            // Перечитываем список только после завершения удалений
            load_rows(set_items, set_error).await;
            if let Some(msg) = delete_failure_message(failed, total) {
                set_error.set(Some(msg));
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Планы питания"}</h2>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || state.get().filter)
                        on_change=Callback::new(move |value| state.update(|s| s.filter = value))
                    />
                    <button class="button button--primary" on:click=move |_| open_create()>
                        {icon("plus")}
                        {"Новый план"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| delete_selected() disabled={move || selected.get().is_empty()}>
                        {icon("delete")}
                        {move || format!("Удалить ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            <SortableHeaderCell
                                label="Код"
                                field="code"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Наименование"
                                field="description"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Цена/день"
                                field="price_per_day"
                                align="right"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Приёмов пищи"
                                field="meals_per_day"
                                align="right"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Активен"
                                field="is_active"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Создан"
                                field="created_at"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_items().into_iter().map(|row| {
                            let id_for_checkbox = row.id.clone();
                            let id_for_toggle = row.id.clone();
                            let id_for_selected = row.id.clone();
                            let id_for_click = row.id.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected={move || selected.get().contains(&id_for_selected)}
                                    on:click=move |_| open_edit(id_for_click.clone())
                                >
                                    <td class="table__cell" on:click=move |ev| ev.stop_propagation()>
                                        <input
                                            type="checkbox"
                                            class="table__checkbox"
                                            prop:checked=move || selected.get().contains(&id_for_checkbox)
                                            on:change=move |ev| {
                                                toggle_select(id_for_toggle.clone(), event_target_checked(&ev))
                                            }
                                        />
                                    </td>
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell table__cell--number">{format_money(row.price_per_day)}</td>
                                    <td class="table__cell table__cell--number">{row.meals_per_day}</td>
                                    <td class="table__cell">{if row.is_active { "Да" } else { "Нет" }}</td>
                                    <td class="table__cell">{format_timestamp(row.created_at)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || state.get().editing.map(|dto| view! {
                <MealPlanForm
                    dto=dto
                    form_error=Signal::derive(move || state.get().form_error)
                    on_saved=Callback::new(move |_| {
                        state.update(|s| s.editing = None);
                        fetch();
                    })
                    on_error=Callback::new(move |e| state.update(|s| s.form_error = Some(e)))
                    on_cancel=Callback::new(move |_| state.update(|s| s.editing = None))
                />
            })}
        </div>
    }
}

/// Форма создания/редактирования плана в модальном оверлее
#[component]
#[allow(non_snake_case)]
fn MealPlanForm(
    dto: MealPlanDto,
    #[prop(into)] form_error: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_error: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = dto.id.is_none();
    let id = dto.id.clone();
    let comment = dto.comment.clone();

    let (code, set_code) = signal(dto.code.clone().unwrap_or_default());
    let (description, set_description) = signal(dto.description.clone());
    let (price, set_price) = signal(dto.price_per_day.to_string());
    let (meals, set_meals) = signal(dto.meals_per_day.to_string());
    let (is_active, set_is_active) = signal(dto.is_active);

    let save = move |_| {
        let dto = MealPlanDto {
            id: id.clone(),
            code: Some(code.get()),
            description: description.get(),
            price_per_day: price.get().parse().unwrap_or(0.0),
            meals_per_day: meals.get().parse().unwrap_or(0),
            is_active: is_active.get(),
            comment: comment.clone(),
        };

        // Клиентская валидация через правила агрегата
        let candidate = MealPlan::new_for_insert(
            dto.code.clone().unwrap_or_default(),
            dto.description.clone(),
            dto.price_per_day,
            dto.meals_per_day,
            dto.comment.clone(),
        );
        if let Err(e) = candidate.validate() {
            on_error.run(e);
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api::save_meal_plan(&dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to save meal plan: {}", e);
                    on_error.run(e);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h3>{if is_new { "Новый план питания" } else { "План питания" }}</h3>

                {move || form_error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="form-group">
                    <label>"Код"</label>
                    <input
                        type="text"
                        prop:value=move || code.get()
                        on:input=move |ev| set_code.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Наименование"</label>
                    <input
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Цена за день"</label>
                    <input
                        type="number"
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Приёмов пищи в день"</label>
                    <input
                        type="number"
                        prop:value=move || meals.get()
                        on:input=move |ev| set_meals.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group form-group--inline">
                    <label>"Активен"</label>
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| set_is_active.set(event_target_checked(&ev))
                    />
                </div>

                <div class="modal__actions">
                    <button class="button button--primary" on:click=save>{"Сохранить"}</button>
                    <button class="button button--secondary" on:click=move |_| on_cancel.run(())>{"Отмена"}</button>
                </div>
            </div>
        </div>
    }
}
