//! REST-клиент для планов питания (`/api/meal-plan`)

use contracts::domain::a001_meal_plan::{MealPlan, MealPlanDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

fn bearer() -> String {
    format!("Bearer {}", storage::get_access_token().unwrap_or_default())
}

pub async fn fetch_meal_plans() -> Result<Vec<MealPlan>, String> {
    let response = Request::get(&api_url("/api/meal-plan"))
        .header("Authorization", &bearer())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<MealPlan>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Создать или обновить план (по наличию `dto.id`)
pub async fn save_meal_plan(dto: &MealPlanDto) -> Result<MealPlan, String> {
    let request = match &dto.id {
        Some(id) => Request::put(&api_url(&format!("/api/meal-plan/{}", id))),
        None => Request::post(&api_url("/api/meal-plan")),
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
        .json::<MealPlan>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_meal_plan(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/meal-plan/{}", id)))
        .header("Authorization", &bearer())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    Ok(())
}
