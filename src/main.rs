use activity_signup_web::App;

fn main() {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting activity signup client");

    yew::Renderer::<App>::new().render();
}
