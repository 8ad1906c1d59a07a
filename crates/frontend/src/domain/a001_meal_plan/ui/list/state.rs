use contracts::domain::a001_meal_plan::MealPlanDto;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct MealPlanListState {
    pub filter: String,
    /// Открытая форма создания/редактирования
    pub editing: Option<MealPlanDto>,
    pub form_error: Option<String>,
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<MealPlanListState> {
    RwSignal::new(MealPlanListState::default())
}
