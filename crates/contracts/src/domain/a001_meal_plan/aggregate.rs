use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор плана питания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealPlanId(pub Uuid);

impl MealPlanId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for MealPlanId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MealPlanId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// План питания (тарифная линейка подписки)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(flatten)]
    pub base: BaseAggregate<MealPlanId>,

    // Специфичные поля агрегата
    #[serde(rename = "pricePerDay")]
    pub price_per_day: f64,

    #[serde(rename = "mealsPerDay")]
    pub meals_per_day: i32,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl MealPlan {
    /// Создать новый план для вставки
    pub fn new_for_insert(
        code: String,
        description: String,
        price_per_day: f64,
        meals_per_day: i32,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(MealPlanId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            price_per_day,
            meals_per_day,
            is_active: true,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &MealPlanDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.price_per_day = dto.price_per_day;
        self.meals_per_day = dto.meals_per_day;
        self.is_active = dto.is_active;
        self.base.touch();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Код не может быть пустым".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if self.price_per_day <= 0.0 {
            return Err("Цена за день должна быть больше нуля".into());
        }
        if !(1..=6).contains(&self.meals_per_day) {
            return Err("Количество приёмов пищи должно быть от 1 до 6".into());
        }
        Ok(())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления плана питания
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MealPlanDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,

    #[serde(rename = "pricePerDay")]
    pub price_per_day: f64,

    #[serde(rename = "mealsPerDay")]
    pub meals_per_day: i32,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MealPlan {
        MealPlan::new_for_insert("FIT-1".into(), "Баланс".into(), 1190.0, 3, None)
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        let mut plan = sample();
        plan.price_per_day = 0.0;
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_meals_out_of_range() {
        let mut plan = sample();
        plan.meals_per_day = 7;
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_id_roundtrip() {
        let id = MealPlanId::new_v4();
        let parsed = MealPlanId::from_string(&id.as_string()).unwrap();
        assert_eq!(id, parsed);
    }
}
