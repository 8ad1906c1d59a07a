//! REST-клиент для размеров порций (`/api/plan-size`)

use contracts::domain::a002_plan_size::{PlanSize, PlanSizeDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

fn bearer() -> String {
    format!("Bearer {}", storage::get_access_token().unwrap_or_default())
}

pub async fn fetch_plan_sizes() -> Result<Vec<PlanSize>, String> {
    let response = Request::get(&api_url("/api/plan-size"))
        .header("Authorization", &bearer())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<PlanSize>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Создать или обновить размер (по наличию `dto.id`)
pub async fn save_plan_size(dto: &PlanSizeDto) -> Result<PlanSize, String> {
    let request = match &dto.id {
        Some(id) => Request::put(&api_url(&format!("/api/plan-size/{}", id))),
        None => Request::post(&api_url("/api/plan-size")),
    };

    let response = request
        .header("Authorization", &bearer())
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<PlanSize>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_plan_size(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/plan-size/{}", id)))
        .header("Authorization", &bearer())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    Ok(())
}
