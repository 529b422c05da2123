use crate::hooks::use_activities;
use yew::prelude::*;

/// The status message area. Hidden, success, or error; nothing else on the
/// page reads this state.
#[function_component(MessageBanner)]
pub fn message_banner() -> Html {
    let activities = use_activities();
    let status = &activities.status;

    html! {
        <div id="message" class={status.css_class()} aria-live="polite">
            {status.text()}
        </div>
    }
}
