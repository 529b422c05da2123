use crate::api::ActivitiesApi;
use crate::domain::message::{AutoHide, AUTO_HIDE_MS};
use crate::domain::{CatalogState, StatusMessage};
use crate::hooks::ActivitiesContext;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivitiesProviderProps {
    /// Origin of the activity service; empty means same-origin.
    #[prop_or_default]
    pub base_url: AttrValue,
    pub children: Children,
}

/// Owns the catalog and status-message state and hands both to the page
/// through a [`ActivitiesContext`].
///
/// Fetches the catalog once on mount; afterwards only the `refresh` callback
/// refetches, so mutations decide themselves whether the view reloads.
#[function_component(ActivitiesProvider)]
pub fn activities_provider(props: &ActivitiesProviderProps) -> Html {
    let catalog = use_state(CatalogState::default);
    let status = use_state(StatusMessage::default);

    // Pending auto-hide timer; replaced whenever a new message is shown
    let hide_timer = use_mut_ref(AutoHide::<Timeout>::new);

    let api = use_memo(props.base_url.clone(), |base_url| {
        if base_url.is_empty() {
            ActivitiesApi::new()
        } else {
            ActivitiesApi::with_base_url(base_url.to_string())
        }
    });

    let refresh = {
        let api = api.clone();
        let catalog = catalog.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let catalog = catalog.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.fetch_activities().await {
                    Ok(fresh) => {
                        tracing::debug!("Fetched {} activities", fresh.len());
                        catalog.set(CatalogState::Ready(fresh));
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch activities: {}", err);
                        catalog.set(CatalogState::Failed);
                    }
                }
            });
        })
    };

    let show_status = {
        let status = status.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |next: StatusMessage| {
            status.set(next.clone());

            let status = status.clone();
            hide_timer.borrow_mut().transition(&next, move || {
                Timeout::new(AUTO_HIDE_MS, move || {
                    status.set(StatusMessage::Hidden);
                })
            });
        })
    };

    // Initial load on mount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let context = ActivitiesContext {
        catalog: (*catalog).clone(),
        status: (*status).clone(),
        api,
        refresh,
        show_status,
    };

    html! {
        <ContextProvider<ActivitiesContext> {context}>
            {props.children.clone()}
        </ContextProvider<ActivitiesContext>>
    }
}
