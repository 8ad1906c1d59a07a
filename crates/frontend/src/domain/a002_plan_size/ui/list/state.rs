use contracts::domain::a002_plan_size::PlanSizeDto;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct PlanSizeListState {
    /// Открытая форма создания/редактирования
    pub editing: Option<PlanSizeDto>,
    pub form_error: Option<String>,
}

pub fn create_state() -> RwSignal<PlanSizeListState> {
    RwSignal::new(PlanSizeListState::default())
}
