pub mod aggregate;

pub use aggregate::{IngredientCategory, IngredientCategoryDto, IngredientCategoryId};
