pub mod state;

use self::state::create_state;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::data::mock::use_mock_store;
use crate::shared::icons::icon;
use crate::shared::sorting::{RowSorter, SortValue, SortableRecord};
use chrono::{DateTime, NaiveDate, Utc};
use contracts::domain::a003_voucher::{Voucher, VoucherDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct VoucherRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub discount_percent: f64,
    pub valid_until: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub used_count: i64,
}

impl From<Voucher> for VoucherRow {
    fn from(v: Voucher) -> Self {
        Self {
            id: v.base.id.as_string(),
            code: v.base.code,
            description: v.base.description,
            discount_percent: v.discount_percent,
            valid_until: v.valid_until,
            is_active: v.is_active,
            used_count: v.used_count,
        }
    }
}

impl SortableRecord for VoucherRow {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "code" => self.code.as_str().into(),
            "description" => self.description.as_str().into(),
            "discount_percent" => self.discount_percent.into(),
            // Бессрочные ваучеры уходят в конец списка
            "valid_until" => self.valid_until.into(),
            "is_active" => self.is_active.into(),
            "used_count" => self.used_count.into(),
            _ => SortValue::Null,
        }
    }
}

fn format_valid_until(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "бессрочно".to_string(),
    }
}

fn parse_valid_until(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .map(|naive| naive.and_utc())
}

#[component]
#[allow(non_snake_case)]
pub fn VoucherList() -> impl IntoView {
    let store = use_mock_store();
    let state = create_state();
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let sorter = RowSorter::<String>::new();

    let rows = move || {
        let items: Vec<VoucherRow> = store
            .vouchers
            .get()
            .into_iter()
            .map(Into::into)
            .collect();
        sorter.sorted(&items)
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
            s.editing = Some(VoucherDto {
                is_active: true,
                ..Default::default()
            });
            s.form_error = None;
        });
    };

    let open_edit = move |id: String| {
        let dto = store.vouchers.get().iter().find(|v| v.to_string_id() == id).map(|v| VoucherDto {
            id: Some(v.to_string_id()),
            code: Some(v.base.code.clone()),
            description: v.base.description.clone(),
            discount_percent: v.discount_percent,
            valid_until: v.valid_until,
            is_active: v.is_active,
            comment: v.base.comment.clone(),
        });
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
                    "Удалить выбранные ваучеры? Количество: {}",
                    ids.len()
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        store.delete_vouchers(&ids);
        set_selected.set(HashSet::new());
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Ваучеры"}</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_create()>
                        {icon("plus")}
                        {"Новый ваучер"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| delete_selected() disabled={move || selected.get().is_empty()}>
                        {icon("delete")}
                        {move || format!("Удалить ({})", selected.get().len())}
                    </button>
                </div>
            </div>

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
                                label="Описание"
                                field="description"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Скидка, %"
                                field="discount_percent"
                                align="right"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Действует до"
                                field="valid_until"
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
                                label="Использован"
                                field="used_count"
                                align="right"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
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
                                    <td class="table__cell table__cell--number">{format!("{:.1}", row.discount_percent)}</td>
                                    <td class="table__cell">{format_valid_until(row.valid_until)}</td>
                                    <td class="table__cell">{if row.is_active { "Да" } else { "Нет" }}</td>
                                    <td class="table__cell table__cell--number">{row.used_count}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || state.get().editing.map(|dto| view! {
                <VoucherForm
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

/// Форма создания/редактирования ваучера (пишет в mock-хранилище)
#[component]
#[allow(non_snake_case)]
fn VoucherForm(
    dto: VoucherDto,
    #[prop(into)] form_error: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_error: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = use_mock_store();
    let is_new = dto.id.is_none();
    let id = dto.id.clone();
    let comment = dto.comment.clone();

    let (code, set_code) = signal(dto.code.clone().unwrap_or_default());
    let (description, set_description) = signal(dto.description.clone());
    let (discount, set_discount) = signal(dto.discount_percent.to_string());
    let (valid_until, set_valid_until) = signal(
        dto.valid_until
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );
    let (is_active, set_is_active) = signal(dto.is_active);

    let save = move |_| {
        let dto = VoucherDto {
            id: id.clone(),
            code: Some(code.get()),
            description: description.get(),
            discount_percent: discount.get().parse().unwrap_or(0.0),
            valid_until: parse_valid_until(&valid_until.get()),
            is_active: is_active.get(),
            comment: comment.clone(),
        };

        let voucher = match &dto.id {
            Some(id) => {
                let existing = store
                    .vouchers
                    .get_untracked()
                    .into_iter()
                    .find(|v| v.to_string_id() == *id);
                match existing {
                    Some(mut v) => {
                        v.update(&dto);
                        v
                    }
                    None => {
                        on_error.run("Ваучер уже удалён".to_string());
                        return;
                    }
                }
            }
            None => {
                let mut v = Voucher::new_for_insert(
                    dto.code.clone().unwrap_or_default(),
                    dto.description.clone(),
                    dto.discount_percent,
                    dto.valid_until,
                );
                v.is_active = dto.is_active;
                v
            }
        };

        if let Err(e) = voucher.validate() {
            on_error.run(e);
            return;
        }

        store.upsert_voucher(voucher);
        on_saved.run(());
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h3>{if is_new { "Новый ваучер" } else { "Ваучер" }}</h3>

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
                    <label>"Описание"</label>
                    <input
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Скидка, %"</label>
                    <input
                        type="number"
                        step="0.5"
                        prop:value=move || discount.get()
                        on:input=move |ev| set_discount.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Действует до (пусто — бессрочно)"</label>
                    <input
                        type="date"
                        prop:value=move || valid_until.get()
                        on:input=move |ev| set_valid_until.set(event_target_value(&ev))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_until() {
        let parsed = parse_valid_until("2026-05-31").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2026-05-31 23:59:59");
        assert!(parse_valid_until("").is_none());
        assert!(parse_valid_until("не дата").is_none());
    }

    #[test]
    fn test_row_sort_value_nullable_timestamp() {
        let voucher = Voucher::new_for_insert("X".into(), "Тест".into(), 5.0, None);
        let row: VoucherRow = voucher.into();
        assert!(row.sort_value("valid_until").is_null());
        assert_eq!(row.sort_value("is_active"), SortValue::Bool(true));
    }
}
