use crate::components::ActivityCard;
use crate::domain::{CatalogState, StatusMessage, UnregisterRequest};
use crate::hooks::use_activities;
use yew::prelude::*;

/// Fallback shown when an unregister is rejected without a `detail`.
const REJECTED_FALLBACK: &str = "Failed to unregister participant";
/// Fallback shown when the unregister request never completes.
const TRANSPORT_FALLBACK: &str = "Failed to unregister. Please try again.";

/// The rendered catalog: one card per activity, fully replaced on every
/// fetch. Owns the single unregister handler; rows dispatch to it by their
/// (activity, email) key instead of holding listeners of their own.
#[function_component(ActivityList)]
pub fn activity_list() -> Html {
    let activities = use_activities();

    let on_unregister = {
        let api = activities.api.clone();
        let refresh = activities.refresh.clone();
        let show_status = activities.show_status.clone();

        Callback::from(move |request: UnregisterRequest| {
            let confirmed = confirm_unregister(&request);
            let Some(request) = request.approved(confirmed) else {
                return;
            };

            let api = api.clone();
            let refresh = refresh.clone();
            let show_status = show_status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.unregister(&request.activity, &request.email).await;

                match &result {
                    Ok(_) => refresh.emit(()),
                    Err(err) => {
                        tracing::warn!(
                            "Unregister failed for {} / {}: {}",
                            request.activity,
                            request.email,
                            err
                        );
                    }
                }

                let fallback = match &result {
                    Err(err) if err.is_transport() => TRANSPORT_FALLBACK,
                    _ => REJECTED_FALLBACK,
                };
                show_status.emit(StatusMessage::from_result(&result, fallback));
            });
        })
    };

    match &activities.catalog {
        CatalogState::Loading => html! {
            <p class="loading-message">{"Loading activities..."}</p>
        },
        CatalogState::Failed => html! {
            <p class="error-message">{"Failed to load activities. Please try again later."}</p>
        },
        CatalogState::Ready(catalog) => html! {
            <div id="activities-list">
                {for catalog.iter().map(|(name, activity)| {
                    html! {
                        <ActivityCard
                            key={name.clone()}
                            name={name.clone()}
                            activity={activity.clone()}
                            on_unregister={on_unregister.clone()}
                        />
                    }
                })}
            </div>
        },
    }
}

/// Ask the user before issuing the call; a decline issues nothing.
fn confirm_unregister(request: &UnregisterRequest) -> bool {
    let prompt = format!("Unregister {} from {}?", request.email, request.activity);
    web_sys::window()
        .and_then(|window| window.confirm_with_message(&prompt).ok())
        .unwrap_or(false)
}
