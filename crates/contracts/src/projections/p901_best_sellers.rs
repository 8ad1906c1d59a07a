use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Строка отчёта «Хиты продаж»
///
/// Read-only проекция; у планов без завершённых заказов `revenue` и
/// `last_order_at` пустые.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestSellerRow {
    #[serde(rename = "planName")]
    pub plan_name: String,

    #[serde(rename = "portionsSold")]
    pub portions_sold: i64,

    pub revenue: Option<f64>,

    #[serde(rename = "sharePercent")]
    pub share_percent: f64,

    #[serde(rename = "lastOrderAt")]
    pub last_order_at: Option<DateTime<Utc>>,
}
