pub mod aggregate;

pub use aggregate::{MealPlan, MealPlanDto, MealPlanId};
