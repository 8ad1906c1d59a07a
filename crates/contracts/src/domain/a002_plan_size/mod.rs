pub mod aggregate;

pub use aggregate::{PlanSize, PlanSizeDto, PlanSizeId};
