use contracts::domain::a004_ingredient_category::IngredientCategoryDto;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct IngredientCategoryListState {
    /// Открытая форма создания/редактирования
    pub editing: Option<IngredientCategoryDto>,
    pub form_error: Option<String>,
}

pub fn create_state() -> RwSignal<IngredientCategoryListState> {
    RwSignal::new(IngredientCategoryListState::default())
}
