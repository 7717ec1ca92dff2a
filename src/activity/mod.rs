// Public API - what other modules can use
pub use handlers::{list_activities, signup_for_activity, unregister_from_activity};
pub use service::ActivityService;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
mod service;
pub mod types;
