pub mod a001_meal_plan;
pub mod a002_plan_size;
pub mod a003_voucher;
pub mod a004_ingredient_category;
