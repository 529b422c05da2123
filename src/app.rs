use crate::components::{ActivityList, MessageBanner, SignupForm};
use crate::providers::ActivitiesProvider;
use yew::prelude::*;

/// Root component: the whole page under one provider.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ActivitiesProvider>
            <main class="app">
                <section id="activities-container">
                    <h3>{"Available Activities"}</h3>
                    <ActivityList />
                </section>
                <section id="signup-container">
                    <h3>{"Sign Up for an Activity"}</h3>
                    <MessageBanner />
                    <SignupForm />
                </section>
            </main>
        </ActivitiesProvider>
    }
}
