use crate::domain::{Activity, UnregisterRequest};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: AttrValue,
    pub activity: Activity,
    /// Receives the (activity, email) key of the clicked delete control
    pub on_unregister: Callback<UnregisterRequest>,
}

/// One activity card: name, description, schedule, remaining spots, and the
/// roster with a delete control per participant.
#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let activity = &props.activity;
    let spots_left = activity.spots_left();

    html! {
        <div class="activity-card">
            <h4>{props.name.clone()}</h4>
            <p>{&activity.description}</p>
            <p><strong>{"Schedule: "}</strong>{&activity.schedule}</p>
            <p><strong>{"Availability: "}</strong>{format!("{} spots left", spots_left)}</p>
            <p><strong>{"Current Participants:"}</strong></p>
            <ul class="participants-list">
                {if activity.participants.is_empty() {
                    html! {
                        <li class="participant-item">{"No participants yet"}</li>
                    }
                } else {
                    html! {
                        <>
                        {for activity.participants.iter().map(|email| {
                            let request = UnregisterRequest {
                                activity: props.name.to_string(),
                                email: email.clone(),
                            };
                            let on_unregister = props.on_unregister.clone();
                            let onclick =
                                Callback::from(move |_: MouseEvent| on_unregister.emit(request.clone()));

                            html! {
                                <li class="participant-item" data-email={email.clone()}>
                                    <span class="participant-email">{email}</span>
                                    <button
                                        class="delete-btn"
                                        data-activity={props.name.clone()}
                                        data-email={email.clone()}
                                        aria-label={format!("Unregister {}", email)}
                                        {onclick}
                                    >
                                        {"🗑️"}
                                    </button>
                                </li>
                            }
                        })}
                        </>
                    }
                }}
            </ul>
        </div>
    }
}
