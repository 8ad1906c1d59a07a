use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор размера плана
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanSizeId(pub Uuid);

impl PlanSizeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for PlanSizeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PlanSizeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Размер порции внутри плана питания (S/M/L и т.п.)
///
/// Привязан к плану через `plan_id` (строковый UUID — так размер
/// ходит через REST без вложенного агрегата).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSize {
    #[serde(flatten)]
    pub base: BaseAggregate<PlanSizeId>,

    #[serde(rename = "planId")]
    pub plan_id: String,

    pub calories: i32,

    /// Множитель к базовой цене плана (1.0 = размер M)
    #[serde(rename = "priceFactor")]
    pub price_factor: f64,
}

impl PlanSize {
    pub fn new_for_insert(
        code: String,
        description: String,
        plan_id: String,
        calories: i32,
        price_factor: f64,
    ) -> Self {
        Self {
            base: BaseAggregate::new(PlanSizeId::new_v4(), code, description),
            plan_id,
            calories,
            price_factor,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &PlanSizeDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.plan_id = dto.plan_id.clone();
        self.calories = dto.calories;
        self.price_factor = dto.price_factor;
        self.base.touch();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Код не может быть пустым".into());
        }
        if self.plan_id.trim().is_empty() {
            return Err("Размер должен быть привязан к плану".into());
        }
        if self.calories <= 0 {
            return Err("Калорийность должна быть больше нуля".into());
        }
        if self.price_factor <= 0.0 {
            return Err("Множитель цены должен быть больше нуля".into());
        }
        Ok(())
    }
}

/// DTO для создания/обновления размера плана
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlanSizeDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,

    #[serde(rename = "planId")]
    pub plan_id: String,

    pub calories: i32,

    #[serde(rename = "priceFactor")]
    pub price_factor: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_plan_binding() {
        let size =
            PlanSize::new_for_insert("M".into(), "Средний".into(), String::new(), 1800, 1.0);
        assert!(size.validate().is_err());
    }

    #[test]
    fn test_validate_ok() {
        let size = PlanSize::new_for_insert(
            "L".into(),
            "Большой".into(),
            Uuid::new_v4().to_string(),
            2300,
            1.25,
        );
        assert!(size.validate().is_ok());
    }
}
