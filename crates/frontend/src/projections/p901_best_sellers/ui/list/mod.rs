use crate::shared::components::table::number_format::{format_money, format_number_int};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::data::mock::use_mock_store;
use crate::shared::sorting::{RowSorter, SortDirection, SortValue, SortableRecord};
use contracts::projections::p901_best_sellers::BestSellerRow;
use leptos::prelude::*;

impl SortableRecord for BestSellerRow {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "plan_name" => self.plan_name.as_str().into(),
            "portions_sold" => self.portions_sold.into(),
            // Планы без выручки и заказов тонут в конец таблицы
            "revenue" => self.revenue.into(),
            "share_percent" => self.share_percent.into(),
            "last_order_at" => self.last_order_at.into(),
            _ => SortValue::Null,
        }
    }
}

fn format_revenue(value: Option<f64>) -> String {
    match value {
        Some(v) => format_money(v),
        None => "—".to_string(),
    }
}

fn format_last_order(value: Option<chrono::DateTime<chrono::Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "—".to_string(),
    }
}

/// Отчёт «Хиты продаж»: read-only таблица по mock-данным
#[component]
#[allow(non_snake_case)]
pub fn BestSellersList() -> impl IntoView {
    let store = use_mock_store();
    // По умолчанию — лидеры по порциям сверху
    let sorter = RowSorter::with_initial("portions_sold".to_string(), SortDirection::Desc);

    let rows = move || sorter.sorted(&store.best_sellers.get());

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Хиты продаж"}</h2>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeaderCell
                                label="План"
                                field="plan_name"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Порций продано"
                                field="portions_sold"
                                align="right"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Выручка"
                                field="revenue"
                                align="right"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Доля, %"
                                field="share_percent"
                                align="right"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                            <SortableHeaderCell
                                label="Последний заказ"
                                field="last_order_at"
                                sort=sorter.signal()
                                on_sort=Callback::new(move |field| sorter.on_sort(field))
                            />
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.plan_name.clone()}</td>
                                    <td class="table__cell table__cell--number">{format_number_int(row.portions_sold as f64)}</td>
                                    <td class="table__cell table__cell--number">{format_revenue(row.revenue)}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.1}", row.share_percent)}</td>
                                    <td class="table__cell">{format_last_order(row.last_order_at)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sorting::{sort_rows_by_field, SortState};

    fn row(plan_name: &str, portions_sold: i64, revenue: Option<f64>) -> BestSellerRow {
        BestSellerRow {
            plan_name: plan_name.to_string(),
            portions_sold,
            revenue,
            share_percent: 0.0,
            last_order_at: None,
        }
    }

    #[test]
    fn test_rows_without_revenue_sink_on_both_directions() {
        let rows = vec![
            row("Баланс", 100, Some(5000.0)),
            row("Вег", 0, None),
            row("Спорт", 80, Some(9000.0)),
        ];

        let asc = SortState::with_key("revenue".to_string(), SortDirection::Asc);
        let sorted = sort_rows_by_field(&rows, &asc);
        let names: Vec<&str> = sorted.iter().map(|r| r.plan_name.as_str()).collect();
        assert_eq!(names, vec!["Баланс", "Спорт", "Вег"]);

        let desc = SortState::with_key("revenue".to_string(), SortDirection::Desc);
        let sorted = sort_rows_by_field(&rows, &desc);
        let names: Vec<&str> = sorted.iter().map(|r| r.plan_name.as_str()).collect();
        assert_eq!(names, vec!["Спорт", "Баланс", "Вег"]);
    }
}
