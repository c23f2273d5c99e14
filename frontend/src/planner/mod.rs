pub mod client;
pub mod error;
pub mod models;
pub mod store;

pub use client::HttpPlanService;
pub use models::PreferenceField;
pub use store::PlannerStore;
