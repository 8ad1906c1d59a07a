pub mod state;

use self::state::create_state;
use crate::domain::a002_plan_size::api;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::list_utils::delete_failure_message;
use crate::shared::sorting::{RowSorter, SortDirection, SortValue, SortableRecord};
use contracts::domain::a002_plan_size::{PlanSize, PlanSizeDto};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PlanSizeRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub plan_id: String,
    pub calories: i32,
    pub price_factor: f64,
}

impl From<PlanSize> for PlanSizeRow {
    fn from(s: PlanSize) -> Self {
        use contracts::domain::common::AggregateId;

        Self {
            id: s.base.id.as_string(),
            code: s.base.code,
            description: s.base.description,
            plan_id: s.plan_id,
            calories: s.calories,
            price_factor: s.price_factor,
        }
    }
}

impl PlanSizeRow {
    fn to_dto(&self) -> PlanSizeDto {
        PlanSizeDto {
            id: Some(self.id.clone()),
            code: Some(self.code.clone()),
            description: self.description.clone(),
            plan_id: self.plan_id.clone(),
            calories: self.calories,
            price_factor: self.price_factor,
        }
    }
}

impl SortableRecord for PlanSizeRow {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "code" => self.code.as_str().into(),
            "description" => self.description.as_str().into(),
            "calories" => self.calories.into(),
            "price_factor" => self.price_factor.into(),
            _ => SortValue::Null,
        }
    }
}

async fn load_rows(
    set_items: WriteSignal<Vec<PlanSizeRow>>,
    set_error: WriteSignal<Option<String>>,
) {
    match api::fetch_plan_sizes().await {
        Ok(v) => {
            let rows: Vec<PlanSizeRow> = v.into_iter().map(Into::into).collect();
            set_items.set(rows);
            set_error.set(None);
        }
        Err(e) => {
            log::error!("Failed to fetch plan sizes: {}", e);
            set_error.set(Some(e));
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PlanSizeList() -> impl IntoView {
    let state = create_state();
    let (items, set_items) = signal::<Vec<PlanSizeRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    // По умолчанию — от меньшей калорийности к большей
    let sorter = RowSorter::with_initial("calories".to_string(), SortDirection::Asc);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(load_rows(set_items, set_error));
    };

    let sorted_items = move || sorter.sorted(&items.get());

    let open_create = move || {
        state.update(|s| {
            s.editing = Some(PlanSizeDto {
                price_factor: 1.0,
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

    let delete_row = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Удалить размер?").unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            let mut failed = 0usize;
            if let Err(e) = api::delete_plan_size(&id).await {
                log::error!("Failed to delete plan size {}: {}", id, e);
                failed = 1;
            }
            // Перечитываем список только после завершения удаления
            load_rows(set_items, set_error).await;
            if let Some(msg) = delete_failure_message(failed, 1) {
                set_error.set(Some(msg));
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Размеры порций"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_create()>
                        {icon("plus")}
                        {"Новый размер"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
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
                                label="Калорийность"
                                field="calories"
                                align="right"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Множитель цены"
                                field="price_factor"
                                align="right"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let id_for_delete = row.id.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| open_edit(id_for_click.clone())>
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell table__cell--number">{row.calories}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.2}", row.price_factor)}</td>
                                    <td class="table__cell" on:click=move |ev| ev.stop_propagation()>
                                        <button
                                            class="button button--icon"
                                            title="Удалить"
                                            on:click=move |_| delete_row(id_for_delete.clone())
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || state.get().editing.map(|dto| view! {
                <PlanSizeForm
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

/// Форма создания/редактирования размера порции
#[component]
#[allow(non_snake_case)]
fn PlanSizeForm(
    dto: PlanSizeDto,
    #[prop(into)] form_error: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_error: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_new = dto.id.is_none();
    let id = dto.id.clone();

    let (code, set_code) = signal(dto.code.clone().unwrap_or_default());
    let (description, set_description) = signal(dto.description.clone());
    let (plan_id, set_plan_id) = signal(dto.plan_id.clone());
    let (calories, set_calories) = signal(dto.calories.to_string());
    let (price_factor, set_price_factor) = signal(dto.price_factor.to_string());

    let save = move |_| {
        let dto = PlanSizeDto {
            id: id.clone(),
            code: Some(code.get()),
            description: description.get(),
            plan_id: plan_id.get(),
            calories: calories.get().parse().unwrap_or(0),
            price_factor: price_factor.get().parse().unwrap_or(0.0),
        };

        let candidate = PlanSize::new_for_insert(
            dto.code.clone().unwrap_or_default(),
            dto.description.clone(),
            dto.plan_id.clone(),
            dto.calories,
            dto.price_factor,
        );
        if let Err(e) = candidate.validate() {
            on_error.run(e);
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api::save_plan_size(&dto).await {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    log::error!("Failed to save plan size: {}", e);
                    on_error.run(e);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h3>{if is_new { "Новый размер" } else { "Размер порции" }}</h3>

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
                    <label>"План (UUID)"</label>
                    <input
                        type="text"
                        prop:value=move || plan_id.get()
                        on:input=move |ev| set_plan_id.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Калорийность"</label>
                    <input
                        type="number"
                        prop:value=move || calories.get()
                        on:input=move |ev| set_calories.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Множитель цены"</label>
                    <input
                        type="number"
                        step="0.05"
                        prop:value=move || price_factor.get()
                        on:input=move |ev| set_price_factor.set(event_target_value(&ev))
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
