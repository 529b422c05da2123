use crate::domain::StatusMessage;
use crate::hooks::use_activities;
use yew::prelude::*;

/// Fallback shown when a signup is rejected without a `detail`.
const REJECTED_FALLBACK: &str = "An error occurred";
/// Fallback shown when the signup request never completes.
const TRANSPORT_FALLBACK: &str = "Failed to sign up. Please try again.";

/// The signup form: email input plus an activity select fed from the
/// catalog. Options are derived from the current catalog on every render, so
/// a refetch replaces them instead of accumulating duplicates.
#[function_component(SignupForm)]
pub fn signup_form() -> Html {
    let activities = use_activities();
    let email = use_state(String::new);
    let selected = use_state(String::new);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let onsubmit = {
        let api = activities.api.clone();
        let refresh = activities.refresh.clone();
        let show_status = activities.show_status.clone();
        let email = email.clone();
        let selected = selected.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let api = api.clone();
            let refresh = refresh.clone();
            let show_status = show_status.clone();
            let email = email.clone();
            let selected = selected.clone();
            let activity = (*selected).clone();
            let address = (*email).clone();

            // No in-flight guard: a double submit races on the server, whose
            // response decides the outcome.
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.signup(&activity, &address).await;

                match &result {
                    Ok(message) => {
                        tracing::info!("Signup confirmed: {}", message);
                        email.set(String::new());
                        selected.set(String::new());
                        refresh.emit(());
                    }
                    Err(err) => {
                        tracing::warn!("Signup failed for {} / {}: {}", activity, address, err);
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

    let names = activities.catalog.activity_names();

    html! {
        <form id="signup-form" {onsubmit}>
            <label for="email">
                {"Your Email"}
                <input
                    id="email"
                    type="email"
                    required={true}
                    placeholder="your-email@example.com"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
            </label>
            <label for="activity">
                {"Select Activity"}
                <select
                    id="activity"
                    required={true}
                    onchange={on_activity_change}
                >
                    <option value="" selected={selected.is_empty()}>
                        {"-- Select an activity --"}
                    </option>
                    {for names.iter().map(|name| {
                        html! {
                            <option
                                key={name.clone()}
                                value={name.clone()}
                                selected={*name == *selected}
                            >
                                {name}
                            </option>
                        }
                    })}
                </select>
            </label>
            <button type="submit">{"Sign Up"}</button>
        </form>
    }
}
