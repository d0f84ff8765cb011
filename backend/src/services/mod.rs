//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! handlers and the LLM provider.

pub mod image;
pub mod motivation;
pub mod plan;

pub use image::ImageService;
pub use motivation::MotivationService;
pub use plan::PlanService;
