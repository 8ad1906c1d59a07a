//! Данные-заглушки для экранов без REST-бэкенда.
//!
//! Ваучеры, категории ингредиентов и «Хиты продаж» живут в памяти:
//! `MockStore` кладётся в контекст приложения, экраны читают и
//! изменяют его сигналы напрямую. При перезагрузке страницы состояние
//! сбрасывается на стартовые наборы.

use chrono::{TimeZone, Utc};
use contracts::domain::a003_voucher::Voucher;
use contracts::domain::a004_ingredient_category::IngredientCategory;
use contracts::domain::common::AggregateId;
use contracts::projections::p901_best_sellers::BestSellerRow;
use leptos::prelude::*;
use once_cell::sync::Lazy;

static SEED_VOUCHERS: Lazy<Vec<Voucher>> = Lazy::new(|| {
    let mut welcome = Voucher::new_for_insert(
        "WELCOME10".into(),
        "Приветственная скидка".into(),
        10.0,
        Some(Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap()),
    );
    welcome.used_count = 128;

    let mut spring = Voucher::new_for_insert(
        "SPRING25".into(),
        "Весенняя акция".into(),
        25.0,
        Some(Utc.with_ymd_and_hms(2026, 5, 31, 23, 59, 59).unwrap()),
    );
    spring.used_count = 41;
    spring.is_active = false;

    // Партнёрский ваучер без срока действия
    let mut partner = Voucher::new_for_insert(
        "partner-fit".into(),
        "Партнёрская программа".into(),
        15.0,
        None,
    );
    partner.used_count = 7;

    vec![welcome, spring, partner]
});

static SEED_CATEGORIES: Lazy<Vec<IngredientCategory>> = Lazy::new(|| {
    vec![
        IngredientCategory::new_for_insert("PROT".into(), "Белки".into(), 1),
        IngredientCategory::new_for_insert("VEG".into(), "Овощи".into(), 2),
        IngredientCategory::new_for_insert("GRAIN".into(), "Крупы и гарниры".into(), 3),
        IngredientCategory::new_for_insert("SAUCE".into(), "Соусы".into(), 4),
    ]
});

static SEED_BEST_SELLERS: Lazy<Vec<BestSellerRow>> = Lazy::new(|| {
    vec![
        BestSellerRow {
            plan_name: "Баланс".into(),
            portions_sold: 4210,
            revenue: Some(1_252_480.0),
            share_percent: 38.4,
            last_order_at: Some(Utc.with_ymd_and_hms(2026, 8, 27, 9, 12, 0).unwrap()),
        },
        BestSellerRow {
            plan_name: "Спорт".into(),
            portions_sold: 3180,
            revenue: Some(1_101_330.0),
            share_percent: 29.0,
            last_order_at: Some(Utc.with_ymd_and_hms(2026, 8, 28, 18, 40, 0).unwrap()),
        },
        BestSellerRow {
            plan_name: "Лайт".into(),
            portions_sold: 2495,
            revenue: Some(648_700.0),
            share_percent: 22.8,
            last_order_at: Some(Utc.with_ymd_and_hms(2026, 8, 26, 12, 5, 0).unwrap()),
        },
        // Новый план: продаж ещё нет, выручка и дата пустые
        BestSellerRow {
            plan_name: "Вег".into(),
            portions_sold: 0,
            revenue: None,
            share_percent: 0.0,
            last_order_at: None,
        },
        BestSellerRow {
            plan_name: "Детокс".into(),
            portions_sold: 1072,
            revenue: None,
            share_percent: 9.8,
            last_order_at: Some(Utc.with_ymd_and_hms(2026, 7, 30, 8, 0, 0).unwrap()),
        },
    ]
});

/// Хранилище mock-состояния, доступное через контекст приложения
#[derive(Clone, Copy)]
pub struct MockStore {
    pub vouchers: RwSignal<Vec<Voucher>>,
    pub categories: RwSignal<Vec<IngredientCategory>>,
    pub best_sellers: RwSignal<Vec<BestSellerRow>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            vouchers: RwSignal::new(SEED_VOUCHERS.clone()),
            categories: RwSignal::new(SEED_CATEGORIES.clone()),
            best_sellers: RwSignal::new(SEED_BEST_SELLERS.clone()),
        }
    }

    /// Вставить или заменить ваучер (по ID)
    pub fn upsert_voucher(&self, voucher: Voucher) {
        self.vouchers.update(|items| {
            match items
                .iter_mut()
                .find(|v| v.base.id == voucher.base.id)
            {
                Some(existing) => *existing = voucher,
                None => items.push(voucher),
            }
        });
    }

    /// Удалить ваучеры по строковым ID
    pub fn delete_vouchers(&self, ids: &[String]) {
        self.vouchers
            .update(|items| items.retain(|v| !ids.contains(&v.base.id.as_string())));
    }

    /// Вставить или заменить категорию (по ID)
    pub fn upsert_category(&self, category: IngredientCategory) {
        self.categories.update(|items| {
            match items
                .iter_mut()
                .find(|c| c.base.id == category.base.id)
            {
                Some(existing) => *existing = category,
                None => items.push(category),
            }
        });
    }

    /// Удалить категории по строковым ID
    pub fn delete_categories(&self, ids: &[String]) {
        self.categories
            .update(|items| items.retain(|c| !ids.contains(&c.base.id.as_string())));
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Получить хранилище из контекста
pub fn use_mock_store() -> MockStore {
    use_context::<MockStore>().expect("MockStore not found in context")
}
