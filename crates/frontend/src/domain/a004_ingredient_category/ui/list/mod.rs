pub mod state;

use self::state::create_state;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::data::mock::use_mock_store;
use crate::shared::icons::icon;
use crate::shared::sorting::{RowSorter, SortDirection, SortValue, SortableRecord};
use contracts::domain::a004_ingredient_category::{IngredientCategory, IngredientCategoryDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct IngredientCategoryRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub position: i32,
}

impl From<IngredientCategory> for IngredientCategoryRow {
    fn from(c: IngredientCategory) -> Self {
        Self {
            id: c.base.id.as_string(),
            code: c.base.code,
            description: c.base.description,
            position: c.position,
        }
    }
}

impl SortableRecord for IngredientCategoryRow {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "code" => self.code.as_str().into(),
            "description" => self.description.as_str().into(),
            "position" => self.position.into(),
            _ => SortValue::Null,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn IngredientCategoryList() -> impl IntoView {
    let store = use_mock_store();
    let state = create_state();
    // Категории по умолчанию в порядке меню конструктора
    let sorter = RowSorter::with_initial("position".to_string(), SortDirection::Asc);

    let rows = move || {
        let items: Vec<IngredientCategoryRow> = store
            .categories
            .get()
            .into_iter()
            .map(Into::into)
            .collect();
        sorter.sorted(&items)
    };

    let open_create = move || {
        let next_position = store
            .categories
            .get()
            .iter()
            .map(|c| c.position)
            .max()
            .unwrap_or(0)
            + 1;
        state.update(|s| {
            s.editing = Some(IngredientCategoryDto {
                position: next_position,
                ..Default::default()
            });
            s.form_error = None;
        });
    };

    let open_edit = move |id: String| {
        let dto = store
            .categories
            .get()
            .iter()
            .find(|c| c.to_string_id() == id)
            .map(|c| IngredientCategoryDto {
                id: Some(c.to_string_id()),
                code: Some(c.base.code.clone()),
                description: c.base.description.clone(),
                position: c.position,
            });
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
                win.confirm_with_message("Удалить категорию?").unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        store.delete_categories(&[id]);
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Категории ингредиентов"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_create()>
                        {icon("plus")}
                        {"Новая категория"}
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell
                                label="Позиция"
                                field="position"
                                align="right"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
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
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            let id_for_delete = row.id.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| open_edit(id_for_click.clone())>
                                    <td class="table__cell table__cell--number">{row.position}</td>
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.description}</td>
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
                <IngredientCategoryForm
                    dto=dto
                    form_error=Signal::derive(move || state.get().form_error)
                    on_saved=Callback::new(move |_| state.update(|s| s.editing = None))
                    on_error=Callback::new(move |e| state.update(|s| s.form_error = Some(e)))
                    on_cancel=Callback::new(move |_| state.update(|s| s.editing = None))
                />
            })}
        </div>
    }
}

/// Форма создания/редактирования категории (пишет в mock-хранилище)
#[component]
#[allow(non_snake_case)]
fn IngredientCategoryForm(
    dto: IngredientCategoryDto,
    #[prop(into)] form_error: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_error: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = use_mock_store();
    let is_new = dto.id.is_none();
    let id = dto.id.clone();

    let (code, set_code) = signal(dto.code.clone().unwrap_or_default());
    let (description, set_description) = signal(dto.description.clone());
    let (position, set_position) = signal(dto.position.to_string());

    let save = move |_| {
        let dto = IngredientCategoryDto {
            id: id.clone(),
            code: Some(code.get()),
            description: description.get(),
            position: position.get().parse().unwrap_or(0),
        };

        let category = match &dto.id {
            Some(id) => {
                let existing = store
                    .categories
                    .get_untracked()
                    .into_iter()
                    .find(|c| c.to_string_id() == *id);
                match existing {
                    Some(mut c) => {
                        c.update(&dto);
                        c
                    }
                    None => {
                        on_error.run("Категория уже удалена".to_string());
                        return;
                    }
                }
            }
            None => IngredientCategory::new_for_insert(
                dto.code.clone().unwrap_or_default(),
                dto.description.clone(),
                dto.position,
            ),
        };

        if let Err(e) = category.validate() {
            on_error.run(e);
            return;
        }

        store.upsert_category(category);
        on_saved.run(());
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h3>{if is_new { "Новая категория" } else { "Категория ингредиентов" }}</h3>

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
                    <label>"Позиция"</label>
                    <input
                        type="number"
                        prop:value=move || position.get()
                        on:input=move |ev| set_position.set(event_target_value(&ev))
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
