use quotation_portal::components::App;
use quotation_portal::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }

    log::info!("🚀 Quotation Portal arrancando ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
