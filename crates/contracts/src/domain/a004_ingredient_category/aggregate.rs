use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор категории ингредиентов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientCategoryId(pub Uuid);

impl IngredientCategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for IngredientCategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(IngredientCategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Категория ингредиентов (белки, овощи, крупы и т.д.)
///
/// `position` задаёт порядок показа в меню конструктора.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCategory {
    #[serde(flatten)]
    pub base: BaseAggregate<IngredientCategoryId>,

    pub position: i32,
}

impl IngredientCategory {
    pub fn new_for_insert(code: String, description: String, position: i32) -> Self {
        Self {
            base: BaseAggregate::new(IngredientCategoryId::new_v4(), code, description),
            position,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &IngredientCategoryDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.position = dto.position;
        self.base.touch();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.position < 0 {
            return Err("Позиция не может быть отрицательной".into());
        }
        Ok(())
    }
}

/// DTO для создания/обновления категории
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IngredientCategoryDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub position: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_description() {
        let mut category = IngredientCategory::new_for_insert("PROT".into(), "Белки".into(), 1);
        assert!(category.validate().is_ok());

        category.base.description = "   ".into();
        assert!(category.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_position() {
        let mut category = IngredientCategory::new_for_insert("VEG".into(), "Овощи".into(), 0);
        assert!(category.validate().is_ok());

        category.position = -1;
        assert!(category.validate().is_err());
    }
}
