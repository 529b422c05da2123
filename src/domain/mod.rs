pub mod activity;
pub mod catalog;
pub mod message;

pub use activity::Activity;
pub use catalog::{ActivityCatalog, CatalogState, UnregisterRequest};
pub use message::StatusMessage;
