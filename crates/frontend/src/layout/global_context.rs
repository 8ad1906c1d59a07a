use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Экраны приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    BestSellers,
    MealPlans,
    PlanSizes,
    Vouchers,
    Categories,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::BestSellers,
        Screen::MealPlans,
        Screen::PlanSizes,
        Screen::Vouchers,
        Screen::Categories,
    ];

    /// Ключ экрана в query string
    pub fn key(self) -> &'static str {
        match self {
            Screen::BestSellers => "best-sellers",
            Screen::MealPlans => "meal-plans",
            Screen::PlanSizes => "plan-sizes",
            Screen::Vouchers => "vouchers",
            Screen::Categories => "categories",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Screen::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::BestSellers => "Хиты продаж",
            Screen::MealPlans => "Планы питания",
            Screen::PlanSizes => "Размеры порций",
            Screen::Vouchers => "Ваучеры",
            Screen::Categories => "Категории ингредиентов",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Screen::BestSellers => "best-sellers",
            Screen::MealPlans => "plans",
            Screen::PlanSizes => "sizes",
            Screen::Vouchers => "vouchers",
            Screen::Categories => "categories",
        }
    }
}

/// Query string вида `?active=vouchers`
#[derive(Debug, Default, Serialize, Deserialize)]
struct ActiveScreenQuery {
    active: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Screen>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Screen::BestSellers),
            left_open: RwSignal::new(true),
        }
    }

    /// Синхронизация активного экрана с query string (`?active=...`),
    /// чтобы экраны были линкуемыми и переживали перезагрузку.
    pub fn init_url_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: ActiveScreenQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(screen) = params.active.as_deref().and_then(Screen::from_key) {
            self.active.set(screen);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get().key();
            let query_string = serde_qs::to_string(&ActiveScreenQuery {
                active: Some(active_key.to_string()),
            })
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Обновляем URL только если он реально изменился
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, screen: Screen) {
        self.active.set(screen);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
