//! HTTP client for the activity service endpoints

mod client;

pub use client::ActivitiesApi;
