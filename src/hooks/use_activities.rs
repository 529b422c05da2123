use crate::api::ActivitiesApi;
use crate::domain::{CatalogState, StatusMessage};
use std::rc::Rc;
use yew::prelude::*;

/// Application context shared by every handler on the page.
///
/// Constructed once by [`ActivitiesProvider`](crate::ActivitiesProvider) and
/// passed down instead of living in ambient globals.
#[derive(Clone)]
pub struct ActivitiesContext {
    /// Current view of the catalog fetch
    pub catalog: CatalogState,

    /// Current status message state
    pub status: StatusMessage,

    /// HTTP client, constructed once at startup
    pub api: Rc<ActivitiesApi>,

    /// Refetch the catalog; the rendered list is fully replaced
    pub refresh: Callback<()>,

    /// Show a status message and (re)arm the auto-hide timer
    pub show_status: Callback<StatusMessage>,
}

impl PartialEq for ActivitiesContext {
    fn eq(&self, other: &Self) -> bool {
        self.catalog == other.catalog && self.status == other.status
    }
}

/// Hook to access the shared activities state
///
/// Panics when called outside an `ActivitiesProvider`.
#[hook]
pub fn use_activities() -> ActivitiesContext {
    use_context::<ActivitiesContext>()
        .expect("use_activities must be used within an ActivitiesProvider")
}
