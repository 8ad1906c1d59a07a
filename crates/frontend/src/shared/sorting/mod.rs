//! Универсальная сортировка строк для табличных экранов.
//!
//! Каждый список держит один `RowSorter`: клик по заголовку вызывает
//! `on_sort(field)`, отображаемые строки считаются через
//! `sorted_rows`. Повторный клик по той же колонке меняет направление,
//! клик по другой — сбрасывает на возрастание.
//!
//! # Использование
//!
//! ```ignore
//! let sorter = RowSorter::<String>::new();
//! // в обработчике клика по заголовку
//! sorter.on_sort("code".to_string());
//! // при рендере
//! let rows = sorter.sorted_rows(&items, |row, field| row.sort_value(field));
//! ```

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use std::cmp::Ordering;

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

/// Текущее состояние сортировки: активная колонка и направление.
///
/// `key = None` — исходный порядок строк, сортировка не применяется.
#[derive(Debug, Clone, PartialEq)]
pub struct SortState<K> {
    pub key: Option<K>,
    pub direction: SortDirection,
}

impl<K> SortState<K> {
    pub fn new() -> Self {
        Self {
            key: None,
            direction: SortDirection::Asc,
        }
    }

    pub fn with_key(key: K, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }
}

impl<K> Default for SortState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq> SortState<K> {
    /// Переключить сортировку по колонке `key`.
    ///
    /// Та же колонка — меняем направление; новая — выбираем её и
    /// сбрасываем направление на возрастание.
    pub fn toggle(&mut self, key: K) {
        if self.key.as_ref() == Some(&key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Asc;
        }
    }

    fn is_active(&self, key: &K) -> bool {
        self.key.as_ref() == Some(key)
    }
}

/// Значение ячейки, приведённое к сравнимому виду.
///
/// Колонка считается однородной по типу; смешанные колонки
/// сравниваются через текстовое представление (см. `compare_values`).
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl SortValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SortValue::Null)
    }

    /// Текстовое представление для сравнения разнотипных значений
    fn fallback_text(&self) -> String {
        match self {
            SortValue::Null => String::new(),
            SortValue::Bool(v) => v.to_string(),
            SortValue::Number(v) => v.to_string(),
            SortValue::Text(v) => v.clone(),
            SortValue::Timestamp(v) => v.to_rfc3339(),
        }
    }
}

impl From<bool> for SortValue {
    fn from(v: bool) -> Self {
        SortValue::Bool(v)
    }
}

impl From<f64> for SortValue {
    fn from(v: f64) -> Self {
        SortValue::Number(v)
    }
}

impl From<i32> for SortValue {
    fn from(v: i32) -> Self {
        SortValue::Number(v as f64)
    }
}

impl From<i64> for SortValue {
    fn from(v: i64) -> Self {
        SortValue::Number(v as f64)
    }
}

impl From<&str> for SortValue {
    fn from(v: &str) -> Self {
        SortValue::Text(v.to_string())
    }
}

impl From<String> for SortValue {
    fn from(v: String) -> Self {
        SortValue::Text(v)
    }
}

impl From<DateTime<Utc>> for SortValue {
    fn from(v: DateTime<Utc>) -> Self {
        SortValue::Timestamp(v)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => SortValue::Null,
        }
    }
}

/// Тип строки, умеющий выдавать сравнимое значение по имени колонки.
///
/// Аналог accessor-функции; для неизвестной колонки возвращает
/// `SortValue::Null`, а не паникует.
pub trait SortableRecord {
    fn sort_value(&self, field: &str) -> SortValue;
}

/// Полный порядок над `SortValue`.
///
/// Null больше любого непустого значения; числа и даты сравниваются
/// по величине, булевы — как `false < true`, текст — без учёта
/// регистра. Разные варианты сравниваются по текстовому представлению.
/// Никогда не паникует (NaN считается равным чему угодно числовому).
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Null, SortValue::Null) => Ordering::Equal,
        (SortValue::Null, _) => Ordering::Greater,
        (_, SortValue::Null) => Ordering::Less,
        (SortValue::Bool(x), SortValue::Bool(y)) => x.cmp(y),
        (SortValue::Number(x), SortValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (SortValue::Timestamp(x), SortValue::Timestamp(y)) => x.cmp(y),
        (SortValue::Text(x), SortValue::Text(y)) => {
            x.to_lowercase().cmp(&y.to_lowercase())
        }
        // Смешанная колонка: сравниваем текстовые представления
        _ => a
            .fallback_text()
            .to_lowercase()
            .cmp(&b.fallback_text().to_lowercase()),
    }
}

/// Отсортированная копия `rows` по текущему состоянию сортировки.
///
/// Исходный срез не изменяется. Сортировка стабильная: равные
/// значения сохраняют относительный порядок. Пустые значения всегда
/// уходят в конец — и на возрастании, и на убывании (незаполненные
/// данные тонут вниз).
pub fn sort_rows<T, K, F>(rows: &[T], state: &SortState<K>, accessor: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &K) -> SortValue,
{
    let mut sorted: Vec<T> = rows.to_vec();
    let Some(key) = state.key.as_ref() else {
        return sorted;
    };

    let ascending = state.direction.is_ascending();
    sorted.sort_by(|a, b| {
        let va = accessor(a, key);
        let vb = accessor(b, key);
        match (va.is_null(), vb.is_null()) {
            (true, true) => Ordering::Equal,
            // Null-ность решается до разворота направления
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = compare_values(&va, &vb);
                if ascending {
                    ord
                } else {
                    ord.reverse()
                }
            }
        }
    });
    sorted
}

/// Удобная обёртка для строк с `SortableRecord` и строковым ключом
pub fn sort_rows_by_field<T>(rows: &[T], state: &SortState<String>) -> Vec<T>
where
    T: SortableRecord + Clone,
{
    sort_rows(rows, state, |row, field: &String| row.sort_value(field))
}

/// Состояние сортировки одного списка поверх реактивного сигнала.
///
/// Владеет `RwSignal<SortState>`; компонент списка создаёт сортировщик
/// при монтировании и выбрасывает вместе с остальным состоянием.
#[derive(Debug)]
pub struct RowSorter<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    state: RwSignal<SortState<K>>,
}

// Ручные impl вместо derive: derive добавил бы лишнюю границу `K: Copy`,
// а `RwSignal` копируется независимо от типа значения.
impl<K> Clone for RowSorter<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for RowSorter<K> where K: Clone + PartialEq + Send + Sync + 'static {}

impl<K> RowSorter<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SortState::new()),
        }
    }

    /// Сортировщик с заранее выбранной колонкой
    pub fn with_initial(key: K, direction: SortDirection) -> Self {
        Self {
            state: RwSignal::new(SortState::with_key(key, direction)),
        }
    }

    /// Текущее состояние (для индикаторов в заголовках)
    pub fn sort(&self) -> SortState<K> {
        self.state.get()
    }

    /// Реактивный сигнал состояния — для передачи в компоненты
    pub fn signal(&self) -> Signal<SortState<K>> {
        self.state.into()
    }

    /// Обработчик клика по заголовку колонки
    pub fn on_sort(&self, key: K) {
        self.state.update(|s| s.toggle(key));
    }

    /// Отсортированная копия строк по текущему состоянию
    pub fn sorted_rows<T, F>(&self, rows: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &K) -> SortValue,
    {
        sort_rows(rows, &self.state.get(), accessor)
    }
}

impl<K> Default for RowSorter<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl RowSorter<String> {
    /// Отсортированная копия строк с `SortableRecord`
    pub fn sorted<T>(&self, rows: &[T]) -> Vec<T>
    where
        T: SortableRecord + Clone,
    {
        sort_rows_by_field(rows, &self.state.get())
    }
}

/// Получить индикатор сортировки для заголовка
pub fn sort_indicator<K: PartialEq>(state: &SortState<K>, field: &K) -> &'static str {
    if state.is_active(field) {
        if state.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора (активная колонка подсвечивается)
pub fn sort_class<K: PartialEq>(state: &SortState<K>, field: &K) -> &'static str {
    if state.is_active(field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        k: Option<i64>,
        id: &'static str,
    }

    impl SortableRecord for Row {
        fn sort_value(&self, field: &str) -> SortValue {
            match field {
                "k" => self.k.into(),
                "id" => self.id.into(),
                _ => SortValue::Null,
            }
        }
    }

    fn rows(data: &[(Option<i64>, &'static str)]) -> Vec<Row> {
        data.iter().map(|&(k, id)| Row { k, id }).collect()
    }

    fn ids(sorted: &[Row]) -> Vec<&'static str> {
        sorted.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_no_key_returns_input_order() {
        let input = rows(&[(Some(3), "a"), (Some(1), "b"), (Some(2), "c")]);
        let state = SortState::<String>::new();
        let sorted = sort_rows_by_field(&input, &state);
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_sorted_is_permutation() {
        let input = rows(&[(Some(5), "a"), (None, "b"), (Some(1), "c"), (Some(5), "d")]);
        let state = SortState::with_key("k".to_string(), SortDirection::Asc);
        let sorted = sort_rows_by_field(&input, &state);
        assert_eq!(sorted.len(), input.len());
        for row in &input {
            assert!(sorted.contains(row));
        }
        // Исходный порядок не тронут
        assert_eq!(ids(&input), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_stability_on_ties() {
        let input = rows(&[(Some(1), "a"), (Some(1), "b"), (Some(0), "c")]);
        let state = SortState::with_key("k".to_string(), SortDirection::Asc);
        let sorted = sort_rows_by_field(&input, &state);
        assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_nulls_sink_on_both_directions() {
        let input = rows(&[(Some(5), "a"), (None, "b"), (Some(1), "c")]);

        let asc = SortState::with_key("k".to_string(), SortDirection::Asc);
        assert_eq!(ids(&sort_rows_by_field(&input, &asc)), vec!["c", "a", "b"]);

        let desc = SortState::with_key("k".to_string(), SortDirection::Desc);
        assert_eq!(ids(&sort_rows_by_field(&input, &desc)), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_toggle_same_key_flips_direction() {
        let mut state = SortState::new();
        state.toggle("k".to_string());
        assert_eq!(state.key.as_deref(), Some("k"));
        assert_eq!(state.direction, SortDirection::Asc);

        state.toggle("k".to_string());
        assert_eq!(state.direction, SortDirection::Desc);

        state.toggle("k".to_string());
        assert_eq!(state.direction, SortDirection::Asc);
    }

    #[test]
    fn test_toggle_new_key_resets_to_asc() {
        let mut state = SortState::with_key("k".to_string(), SortDirection::Desc);
        state.toggle("id".to_string());
        assert_eq!(state.key.as_deref(), Some("id"));
        assert_eq!(state.direction, SortDirection::Asc);
    }

    #[test]
    fn test_desc_reverses_asc_without_nulls() {
        let input = rows(&[(Some(2), "a"), (Some(3), "b"), (Some(1), "c")]);
        let asc = SortState::with_key("k".to_string(), SortDirection::Asc);
        let desc = SortState::with_key("k".to_string(), SortDirection::Desc);

        let mut reversed = sort_rows_by_field(&input, &asc);
        reversed.reverse();
        assert_eq!(ids(&reversed), ids(&sort_rows_by_field(&input, &desc)));
    }

    #[test]
    fn test_bool_ordering() {
        #[derive(Clone)]
        struct Flag {
            b: bool,
        }
        let input = vec![Flag { b: true }, Flag { b: false }];
        let state = SortState::with_key("b".to_string(), SortDirection::Asc);
        let sorted = sort_rows(&input, &state, |row, _| row.b.into());
        assert!(!sorted[0].b);
        assert!(sorted[1].b);
    }

    #[test]
    fn test_case_insensitive_text() {
        let input = vec!["Bravo", "alpha"];
        let state = SortState::with_key("n".to_string(), SortDirection::Asc);
        let sorted = sort_rows(&input, &state, |row, _| (*row).into());
        assert_eq!(sorted, vec!["alpha", "Bravo"]);
    }

    #[test]
    fn test_timestamp_ordering() {
        let early = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        assert_eq!(
            compare_values(&early.into(), &late.into()),
            Ordering::Less
        );
    }

    #[test]
    fn test_mixed_variants_fall_back_to_text() {
        // Число против текста: сравнение по текстовому представлению,
        // без паники
        let a = SortValue::Number(10.0);
        let b = SortValue::Text("2".to_string());
        assert_eq!(compare_values(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_nan_compares_equal() {
        let a = SortValue::Number(f64::NAN);
        let b = SortValue::Number(1.0);
        assert_eq!(compare_values(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_unknown_field_is_null() {
        let row = Row {
            k: Some(1),
            id: "a",
        };
        assert!(row.sort_value("missing").is_null());
    }

    #[test]
    fn test_indicator_glyphs() {
        let state = SortState::with_key("k".to_string(), SortDirection::Asc);
        assert_eq!(sort_indicator(&state, &"k".to_string()), " ▲");
        assert_eq!(sort_indicator(&state, &"id".to_string()), " ⇅");

        let state = SortState::with_key("k".to_string(), SortDirection::Desc);
        assert_eq!(sort_indicator(&state, &"k".to_string()), " ▼");
    }
}
