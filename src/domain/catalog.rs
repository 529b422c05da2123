use crate::domain::Activity;
use std::collections::BTreeMap;

/// The full activity catalog keyed by activity name.
///
/// A BTreeMap keeps the render order deterministic; the key order on the
/// wire is not contractual.
pub type ActivityCatalog = BTreeMap<String, Activity>;

/// Client-side view of the catalog fetch.
///
/// The list and the signup select are derived from this state alone, so a
/// refetch fully replaces what is on screen instead of patching it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogState {
    /// First fetch still in flight
    #[default]
    Loading,
    /// Last fetch succeeded
    Ready(ActivityCatalog),
    /// Last fetch failed (transport error or undecodable body)
    Failed,
}

impl CatalogState {
    /// Catalog contents, if the last fetch succeeded.
    pub fn catalog(&self) -> Option<&ActivityCatalog> {
        match self {
            CatalogState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Activity names in render order, empty unless ready.
    pub fn activity_names(&self) -> Vec<String> {
        self.catalog()
            .map(|catalog| catalog.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// Identifies a delete control: which participant to remove from which
/// activity. Rows emit this key to the single handler on the list instead of
/// owning their own listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterRequest {
    pub activity: String,
    pub email: String,
}

impl UnregisterRequest {
    /// Gate behind the user's confirmation prompt. A declined prompt yields
    /// no request, so no call is ever built.
    pub fn approved(self, confirmed: bool) -> Option<Self> {
        confirmed.then_some(self)
    }
}
