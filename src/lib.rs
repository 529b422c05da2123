//! # Activity Signup Web
//!
//! Browser client for the school activity signup service: fetches the
//! activity catalog, renders it, and submits signup/unregister requests.

pub mod api;
pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod hooks;
pub mod providers;

// Re-exports for convenience
pub use api::ActivitiesApi;
pub use app::App;
pub use components::{ActivityCard, ActivityList, MessageBanner, SignupForm};
pub use domain::{Activity, ActivityCatalog, CatalogState, StatusMessage, UnregisterRequest};
pub use error::ApiError;
pub use hooks::{use_activities, ActivitiesContext};
pub use providers::{ActivitiesProvider, ActivitiesProviderProps};
