use crate::domain::common::{AggregateId, BaseAggregate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор ваучера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoucherId(pub Uuid);

impl VoucherId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for VoucherId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(VoucherId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Промо-ваучер на скидку по подписке
///
/// `valid_until = None` означает бессрочный ваучер.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    #[serde(flatten)]
    pub base: BaseAggregate<VoucherId>,

    #[serde(rename = "discountPercent")]
    pub discount_percent: f64,

    #[serde(rename = "validUntil")]
    pub valid_until: Option<DateTime<Utc>>,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    #[serde(rename = "usedCount")]
    pub used_count: i64,
}

impl Voucher {
    pub fn new_for_insert(
        code: String,
        description: String,
        discount_percent: f64,
        valid_until: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            base: BaseAggregate::new(VoucherId::new_v4(), code, description),
            discount_percent,
            valid_until,
            is_active: true,
            used_count: 0,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &VoucherDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.discount_percent = dto.discount_percent;
        self.valid_until = dto.valid_until;
        self.is_active = dto.is_active;
        self.base.touch();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Код ваучера не может быть пустым".into());
        }
        if !(self.discount_percent > 0.0 && self.discount_percent <= 100.0) {
            return Err("Скидка должна быть в интервале (0, 100]".into());
        }
        Ok(())
    }
}

/// DTO для создания/обновления ваучера
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VoucherDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,

    #[serde(rename = "discountPercent")]
    pub discount_percent: f64,

    #[serde(rename = "validUntil")]
    pub valid_until: Option<DateTime<Utc>>,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_discount_bounds() {
        let mut v = Voucher::new_for_insert("WELCOME10".into(), "Приветственный".into(), 10.0, None);
        assert!(v.validate().is_ok());

        v.discount_percent = 0.0;
        assert!(v.validate().is_err());

        v.discount_percent = 100.0;
        assert!(v.validate().is_ok());

        v.discount_percent = 100.5;
        assert!(v.validate().is_err());
    }
}
